use super::loader::CarShop;
use super::model::Car;

// ---------------------------------------------------------------------------
// CarBuyer – one recommendation request's criteria
// ---------------------------------------------------------------------------

/// A buyer's filter criteria. Built fresh from the form for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct CarBuyer {
    pub budget: f64,
    pub min_fuel_efficiency: f64,
    /// Lowercased; empty means "any brand".
    pub brand_preference: String,
    pub min_safety_rating: f64,
}

impl Default for CarBuyer {
    fn default() -> Self {
        Self {
            budget: f64::INFINITY,
            min_fuel_efficiency: 0.0,
            brand_preference: String::new(),
            min_safety_rating: 0.0,
        }
    }
}

impl CarBuyer {
    pub fn new(
        budget: f64,
        min_fuel_efficiency: f64,
        brand_preference: &str,
        min_safety_rating: f64,
    ) -> Self {
        Self {
            budget,
            min_fuel_efficiency,
            brand_preference: brand_preference.to_lowercase(),
            min_safety_rating,
        }
    }

    /// Whether a single car satisfies every criterion.
    ///
    /// The brand test is a case-insensitive substring match, so `"on"` matches
    /// both Honda and Toyota.
    pub fn matches(&self, car: &Car) -> bool {
        car.price <= self.budget
            && car.fuel_efficiency >= self.min_fuel_efficiency
            && (self.brand_preference.is_empty()
                || car.brand.to_lowercase().contains(&self.brand_preference))
            && car.safety_rating >= self.min_safety_rating
    }

    /// Select the matching cars, keeping their relative order.
    pub fn filter_cars<'a, I>(&self, cars: I) -> Vec<&'a Car>
    where
        I: IntoIterator<Item = &'a Car>,
    {
        cars.into_iter().filter(|car| self.matches(car)).collect()
    }
}

/// Return catalog indices of cars that pass the buyer's criteria.
pub fn filtered_indices(shop: &CarShop, buyer: &CarBuyer) -> Vec<usize> {
    shop.available_cars()
        .iter()
        .enumerate()
        .filter(|(_, car)| buyer.matches(car))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(model: &str, price: f64, mpg: f64, brand: &str, safety: f64) -> Car {
        Car {
            model: model.into(),
            price,
            fuel_efficiency: mpg,
            brand: brand.into(),
            horsepower: 150,
            safety_rating: safety,
            color: "Grey".into(),
        }
    }

    fn catalog() -> Vec<Car> {
        vec![
            car("Civic", 20000.0, 35.0, "Honda", 4.5),
            car("F150", 45000.0, 18.0, "Ford", 3.5),
        ]
    }

    fn models(cars: &[&Car]) -> Vec<String> {
        cars.iter().map(|c| c.model.clone()).collect()
    }

    #[test]
    fn budget_mpg_and_safety_together() {
        let cars = catalog();
        let buyer = CarBuyer::new(25000.0, 30.0, "", 4.0);
        assert_eq!(models(&buyer.filter_cars(&cars)), ["Civic"]);
    }

    #[test]
    fn brand_match_is_case_insensitive() {
        let cars = catalog();
        let buyer = CarBuyer {
            brand_preference: "honda".into(),
            ..CarBuyer::default()
        };
        assert_eq!(models(&buyer.filter_cars(&cars)), ["Civic"]);

        let shouting = CarBuyer::new(f64::INFINITY, 0.0, "HONDA", 0.0);
        assert_eq!(models(&shouting.filter_cars(&cars)), ["Civic"]);
    }

    #[test]
    fn brand_match_is_substring_not_prefix() {
        let cars = vec![
            car("Corolla", 21000.0, 33.0, "Toyota", 4.6),
            car("Accord", 27000.0, 30.0, "Honda", 4.7),
            car("Mustang", 32000.0, 22.0, "Ford", 4.0),
        ];
        let buyer = CarBuyer::new(f64::INFINITY, 0.0, "o", 0.0);
        assert_eq!(models(&buyer.filter_cars(&cars)), ["Corolla", "Accord", "Mustang"]);

        let buyer = CarBuyer::new(f64::INFINITY, 0.0, "yot", 0.0);
        assert_eq!(models(&buyer.filter_cars(&cars)), ["Corolla"]);
    }

    #[test]
    fn low_budget_matches_nothing() {
        let cars = catalog();
        let buyer = CarBuyer::new(10000.0, 0.0, "", 0.0);
        assert!(buyer.filter_cars(&cars).is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        let cars = catalog();
        let buyer = CarBuyer::new(20000.0, 35.0, "", 4.5);
        assert_eq!(models(&buyer.filter_cars(&cars)), ["Civic"]);
    }

    #[test]
    fn default_buyer_accepts_everything() {
        let cars = catalog();
        assert_eq!(CarBuyer::default().filter_cars(&cars).len(), cars.len());
    }

    #[test]
    fn indices_point_into_the_catalog() {
        let shop = CarShop::new(catalog());
        let buyer = CarBuyer::new(f64::INFINITY, 0.0, "ford", 0.0);
        assert_eq!(filtered_indices(&shop, &buyer), [1]);
    }
}
