use eframe::egui::{RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use car_shop::data::model::Column;
use car_shop::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the recommendation table. Clicking a heading sorts by that column.
pub fn results_table(ui: &mut Ui, state: &mut AppState) {
    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Enter your preferences and press “Get Recommendations”");
        });
        return;
    }

    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(TableColumn::auto().at_least(80.0), Column::ALL.len() - 1)
        .column(TableColumn::remainder())
        .header(22.0, |mut header| {
            for column in Column::ALL {
                header.col(|ui| {
                    let mut text = RichText::new(column.heading()).strong();
                    if state.sort_column == Some(column) {
                        text = RichText::new(format!("{} ⏶", column.heading())).strong();
                    }
                    if ui.button(text).clicked() {
                        clicked = Some(column);
                    }
                });
            }
        })
        .body(|mut body| {
            for car in state.rows() {
                body.row(18.0, |mut row| {
                    for column in Column::ALL {
                        row.col(|ui| {
                            ui.label(car.cell(column));
                        });
                    }
                });
            }
        });

    if let Some(column) = clicked {
        state.sort_by(column);
    }
}
