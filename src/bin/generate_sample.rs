use anyhow::{Context, Result};

use car_shop::data::model::Car;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[low, high)`.
    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (brand, model, base price, base MPG, base horsepower)
const MODELS: &[(&str, &str, f64, f64, f64)] = &[
    ("Honda", "Civic", 23000.0, 35.0, 158.0),
    ("Honda", "Accord", 28000.0, 32.0, 192.0),
    ("Toyota", "Corolla", 22000.0, 34.0, 169.0),
    ("Toyota", "RAV4", 29000.0, 30.0, 203.0),
    ("Ford", "F150", 36000.0, 20.0, 290.0),
    ("Ford", "Mustang", 31000.0, 24.0, 315.0),
    ("Chevrolet", "Malibu", 25000.0, 29.0, 160.0),
    ("Volkswagen", "Golf", 24000.0, 32.0, 147.0),
    ("Subaru", "Outback", 29000.0, 29.0, 182.0),
    ("Tesla", "Model 3", 40000.0, 132.0, 283.0),
    ("BMW", "3 Series", 44000.0, 28.0, 255.0),
    ("Mazda", "CX-5", 27000.0, 28.0, 187.0),
];

const COLORS: &[&str] = &["Black", "White", "Silver", "Blue", "Red", "Grey"];

fn round_to(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let cars: Vec<Car> = MODELS
        .iter()
        .map(|&(brand, model, price, mpg, hp)| Car {
            model: model.to_string(),
            price: round_to(price * rng.range(0.9, 1.15), 100.0),
            fuel_efficiency: round_to(mpg * rng.range(0.95, 1.05), 1.0),
            brand: brand.to_string(),
            horsepower: round_to(hp * rng.range(0.95, 1.05), 1.0) as u32,
            safety_rating: round_to(rng.range(3.0, 5.0), 0.5),
            color: rng.pick(COLORS).to_string(),
        })
        .collect();

    let output_path = "cars.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    for car in &cars {
        writer.serialize(car).context("writing car row")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {} cars to {output_path}", cars.len());
    Ok(())
}
