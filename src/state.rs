use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::error::{CatalogError, InputError};
use crate::data::filter::{filtered_indices, CarBuyer};
use crate::data::loader::{load_catalog, CarShop};
use crate::data::model::{Car, Column};
use crate::data::sort::sort_rows;

/// Catalog read at startup, relative to the working directory.
pub const DEFAULT_CATALOG: &str = "cars.csv";

// ---------------------------------------------------------------------------
// Buyer form – raw text inputs
// ---------------------------------------------------------------------------

/// The four text fields of the search form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuyerForm {
    pub budget: String,
    pub min_fuel_efficiency: String,
    pub brand: String,
    pub min_safety_rating: String,
}

impl BuyerForm {
    /// Convert the form into criteria. Blank numeric fields fall back to the
    /// defaults (no budget limit, zero minimums).
    pub fn to_buyer(&self) -> Result<CarBuyer, InputError> {
        let defaults = CarBuyer::default();
        Ok(CarBuyer::new(
            parse_field(&self.budget, "budget", defaults.budget)?,
            parse_field(
                &self.min_fuel_efficiency,
                "min_fuel_efficiency",
                defaults.min_fuel_efficiency,
            )?,
            &self.brand,
            parse_field(
                &self.min_safety_rating,
                "min_safety_rating",
                defaults.min_safety_rating,
            )?,
        ))
    }
}

fn parse_field(text: &str, field: &'static str, default: f64) -> Result<f64, InputError> {
    if text.is_empty() {
        return Ok(default);
    }
    text.trim().parse().map_err(|_| InputError {
        field,
        value: text.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Notices – modal messages for the user
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message the UI shows in a modal window until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    fn from_catalog_error(err: &CatalogError) -> Self {
        if err.is_not_found() {
            Self::error("Error", "Cars data file not found!")
        } else {
            Self::error("Error", &err.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalog (empty if the file could not be read).
    pub shop: CarShop,

    /// Where `shop` was loaded from.
    pub source: PathBuf,

    /// Search form contents.
    pub form: BuyerForm,

    /// Catalog indices of the rows currently shown, in display order.
    pub visible_indices: Vec<usize>,

    /// Column the table was last sorted by, if any.
    pub sort_column: Option<Column>,

    /// Modal message waiting to be shown.
    pub notice: Option<Notice>,

    /// Status line shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Path::new(DEFAULT_CATALOG))
    }
}

impl AppState {
    /// Load the catalog once and start with an empty table.
    pub fn new(path: &Path) -> Self {
        let (shop, err) = load_catalog(path);
        Self {
            shop,
            source: path.to_path_buf(),
            form: BuyerForm::default(),
            visible_indices: Vec::new(),
            sort_column: None,
            notice: err.as_ref().map(Notice::from_catalog_error),
            status_message: None,
        }
    }

    /// Cars currently shown, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &Car> {
        let cars = self.shop.available_cars();
        self.visible_indices.iter().map(move |&i| &cars[i])
    }

    /// Run the search form against the catalog.
    ///
    /// Bad numeric input leaves the table untouched. An empty result clears
    /// the table and raises a "no match" notice; that is not an error.
    pub fn recommend(&mut self) {
        let buyer = match self.form.to_buyer() {
            Ok(buyer) => buyer,
            Err(e) => {
                log::warn!("Invalid {} input: '{}'", e.field, e.value);
                self.notice = Some(Notice::error("Input Error", &e.to_string()));
                return;
            }
        };

        self.visible_indices = filtered_indices(&self.shop, &buyer);
        self.sort_column = None;
        log::debug!(
            "{:?} matched {} of {} cars",
            buyer,
            self.visible_indices.len(),
            self.shop.len()
        );

        if self.visible_indices.is_empty() {
            self.notice = Some(Notice::info("No Cars Found", "No cars match your criteria."));
        }
    }

    /// Show the whole catalog regardless of the form.
    pub fn view_all(&mut self) {
        self.visible_indices = (0..self.shop.len()).collect();
        self.sort_column = None;
        if self.visible_indices.is_empty() {
            self.notice = Some(Notice::info("No Cars Available", "No cars available."));
        }
    }

    /// Sort the displayed rows by `column`, always ascending.
    pub fn sort_by(&mut self, column: Column) {
        let cars = self.shop.available_cars();
        sort_rows(&mut self.visible_indices, column, |&i, col| cars[i].cell(col));
        self.sort_column = Some(column);
    }

    /// Replace the catalog with another file.
    ///
    /// On failure the current catalog and table are kept.
    pub fn open_catalog(&mut self, path: &Path) -> Result<()> {
        let shop = CarShop::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?;

        self.shop = shop;
        self.source = path.to_path_buf();
        self.visible_indices.clear();
        self.sort_column = None;
        self.status_message = None;
        Ok(())
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
