use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Car – one row of the catalog file
// ---------------------------------------------------------------------------

/// A single vehicle from the catalog.
///
/// Field order matches the column order of the data file, so serialising a
/// `Car` with `csv::Writer` produces a row the loader reads back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    pub model: String,
    /// Price in dollars.
    pub price: f64,
    /// Miles per gallon.
    pub fuel_efficiency: f64,
    pub brand: String,
    pub horsepower: u32,
    /// Expected range 1–5.
    pub safety_rating: f64,
    pub color: String,
}

impl Car {
    /// The text shown in the given table cell.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Model => self.model.clone(),
            Column::Brand => self.brand.clone(),
            Column::Price => self.price.to_string(),
            Column::Mpg => self.fuel_efficiency.to_string(),
            Column::Safety => self.safety_rating.to_string(),
        }
    }

    /// One-line description, used in log output.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) - ${}, {} MPG, Safety: {} Stars",
            self.model, self.brand, self.price, self.fuel_efficiency, self.safety_rating
        )
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

// ---------------------------------------------------------------------------
// Column – the displayed table columns
// ---------------------------------------------------------------------------

/// Columns of the results table. Horsepower and colour are loaded but never
/// displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Model,
    Brand,
    Price,
    Mpg,
    Safety,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Model,
        Column::Brand,
        Column::Price,
        Column::Mpg,
        Column::Safety,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Column::Model => "Model",
            Column::Brand => "Brand",
            Column::Price => "Price ($)",
            Column::Mpg => "Fuel Efficiency (MPG)",
            Column::Safety => "Safety Rating",
        }
    }
}
