use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use super::error::CatalogError;
use super::model::Car;

/// Number of fields in a well-formed catalog row:
/// `model, price, fuel_efficiency, brand, horsepower, safety_rating, color`.
pub const FIELDS_PER_ROW: usize = 7;

// ---------------------------------------------------------------------------
// CarShop – the loaded catalog
// ---------------------------------------------------------------------------

/// The in-memory catalog. Loaded once, read-only afterwards; cars are kept in
/// file order.
#[derive(Debug, Clone, Default)]
pub struct CarShop {
    cars: Vec<Car>,
}

impl CarShop {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
            _ => CatalogError::Io(e),
        })?;
        let shop = Self::from_reader(file)?;
        log::info!("Loaded {} cars from {}", shop.len(), path.display());
        Ok(shop)
    }

    /// Parse a catalog from any reader.
    ///
    /// The first row is a header and is discarded. Rows that do not have
    /// exactly [`FIELDS_PER_ROW`] fields are dropped without complaint. A
    /// numeric field that fails to parse aborts the load: one bad price
    /// rejects the whole file rather than just its row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut cars = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() != FIELDS_PER_ROW {
                log::debug!(
                    "Skipping line {line}: expected {FIELDS_PER_ROW} fields, found {}",
                    record.len()
                );
                continue;
            }

            cars.push(parse_row(&record, line)?);
        }

        Ok(Self { cars })
    }

    /// All cars, in file order.
    pub fn available_cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

/// Load the catalog for display.
///
/// Never fails: on any error the returned shop is empty and the error is
/// handed back so the caller can show it.
pub fn load_catalog(path: &Path) -> (CarShop, Option<CatalogError>) {
    match CarShop::load(path) {
        Ok(shop) => (shop, None),
        Err(e) => {
            if e.is_not_found() {
                log::warn!("{e}");
            } else {
                log::error!("Failed to load {}: {e}", path.display());
            }
            (CarShop::default(), Some(e))
        }
    }
}

// -- Row parsing --

fn parse_row(record: &StringRecord, line: u64) -> Result<Car, CatalogError> {
    let text = |idx: usize| record.get(idx).unwrap_or("").to_string();

    Ok(Car {
        model: text(0),
        price: parse_number(record, 1, "price", line)?,
        fuel_efficiency: parse_number(record, 2, "fuel_efficiency", line)?,
        brand: text(3),
        horsepower: parse_number(record, 4, "horsepower", line)?,
        safety_rating: parse_number(record, 5, "safety_rating", line)?,
        color: text(6),
    })
}

fn parse_number<T: FromStr>(
    record: &StringRecord,
    idx: usize,
    field: &'static str,
    line: u64,
) -> Result<T, CatalogError> {
    let raw = record.get(idx).unwrap_or("");
    raw.trim().parse().map_err(|_| CatalogError::InvalidNumber {
        line,
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "model,price,fuel_efficiency,brand,horsepower,safety_rating,color\n";

    fn parse(body: &str) -> Result<CarShop, CatalogError> {
        let text = format!("{HEADER}{body}");
        CarShop::from_reader(text.as_bytes())
    }

    #[test]
    fn parses_rows_in_file_order() {
        let shop = parse(
            "Civic,20000,35,Honda,158,4.5,Blue\n\
             F150,45000,18,Ford,290,3.5,Black\n",
        )
        .unwrap();

        let cars = shop.available_cars();
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].model, "Civic");
        assert_eq!(cars[0].price, 20000.0);
        assert_eq!(cars[0].fuel_efficiency, 35.0);
        assert_eq!(cars[0].brand, "Honda");
        assert_eq!(cars[0].horsepower, 158);
        assert_eq!(cars[0].safety_rating, 4.5);
        assert_eq!(cars[0].color, "Blue");
        assert_eq!(cars[1].model, "F150");
    }

    #[test]
    fn header_only_gives_empty_catalog() {
        let shop = parse("").unwrap();
        assert!(shop.is_empty());
    }

    #[test]
    fn drops_rows_with_wrong_field_count() {
        let shop = parse(
            "Civic,20000,35,Honda,158,4.5,Blue\n\
             Broken,1000,20,Nobody\n\
             Extra,1000,20,Acme,100,3,Red,Sunroof\n\
             Golf,24000,32,Volkswagen,147,4.0,White\n",
        )
        .unwrap();

        let models: Vec<&str> = shop.available_cars().iter().map(|c| c.model.as_str()).collect();
        assert_eq!(models, ["Civic", "Golf"]);
    }

    #[test]
    fn bad_number_aborts_the_load() {
        let err = parse(
            "Civic,20000,35,Honda,158,4.5,Blue\n\
             Golf,cheap,32,Volkswagen,147,4.0,White\n",
        )
        .unwrap_err();

        match err {
            CatalogError::InvalidNumber { line, field, value } => {
                assert_eq!(line, 3);
                assert_eq!(field, "price");
                assert_eq!(value, "cheap");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fractional_horsepower_is_rejected() {
        let err = parse("Civic,20000,35,Honda,158.5,4.5,Blue\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidNumber { field: "horsepower", .. }
        ));
    }

    #[test]
    fn numeric_fields_tolerate_surrounding_spaces() {
        let shop = parse("Civic, 20000 ,35,Honda,158,4.5,Blue\n").unwrap();
        assert_eq!(shop.available_cars()[0].price, 20000.0);
    }

    #[test]
    fn missing_file_yields_empty_catalog_and_notice() {
        let (shop, err) = load_catalog(Path::new("definitely/not/here/cars.csv"));
        assert!(shop.is_empty());
        assert!(err.is_some_and(|e| e.is_not_found()));
    }
}
