use eframe::egui::{self, Align2, Color32, RichText, Ui};

use car_shop::state::{AppState, NoticeKind};

// ---------------------------------------------------------------------------
// Left side panel – buyer form
// ---------------------------------------------------------------------------

/// Render the search form and its buttons.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Your preferences");
    ui.separator();

    egui::Grid::new("buyer_form_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Enter your budget ($):");
            ui.text_edit_singleline(&mut state.form.budget);
            ui.end_row();

            ui.label("Minimum Fuel Efficiency (MPG):");
            ui.text_edit_singleline(&mut state.form.min_fuel_efficiency);
            ui.end_row();

            ui.label("Preferred Brand (optional):");
            ui.text_edit_singleline(&mut state.form.brand);
            ui.end_row();

            ui.label("Minimum Safety Rating (1-5):");
            ui.text_edit_singleline(&mut state.form.min_safety_rating);
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Get Recommendations").clicked() {
            state.recommend();
        }
        if ui.button("View All Cars").clicked() {
            state.view_all();
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open catalog…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} cars in {}, {} shown",
            state.shop.len(),
            state.source.display(),
            state.visible_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Modal notice
// ---------------------------------------------------------------------------

/// Show the pending notice, if any, until the user presses OK.
pub fn notice_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = state.notice.clone() else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Info => ctx.style().visuals.text_color(),
        NoticeKind::Error => Color32::RED,
    };

    let mut dismissed = false;
    egui::Window::new(&notice.title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label(RichText::new(&notice.message).color(color));
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        state.dismiss_notice();
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open car catalog")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.open_catalog(&path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
