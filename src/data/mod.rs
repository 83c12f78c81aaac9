/// Data layer: the car catalog, buyer criteria and table sorting.
///
/// Architecture:
/// ```text
///   cars.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → CarShop
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  CarShop  │  Vec<Car>, file order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  CarBuyer criteria → matching indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   sort    │  reorder displayed rows by one column
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;

pub use error::{CatalogError, InputError};
pub use filter::{filtered_indices, CarBuyer};
pub use loader::{load_catalog, CarShop};
pub use model::{Car, Column};
pub use sort::{compare_cells, sort_rows, CellKey};
