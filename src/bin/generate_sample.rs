use std::fs::File;
use std::io::BufWriter;

use serde_json::json;

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Pick an entry according to its integer weight.
    fn pick<'a, T>(&mut self, weighted: &'a [(T, u32)]) -> &'a T {
        let total: u32 = weighted.iter().map(|(_, w)| w).sum();
        let mut roll = (self.next_f64() * total as f64) as u32;
        for (item, weight) in weighted {
            if roll < *weight {
                return item;
            }
            roll -= weight;
        }
        &weighted[weighted.len() - 1].0
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_rows = 3600;

    // (title, base salary) with sampling weight. The tail of rare titles
    // keeps the "Others" bucket of the share breakdown populated.
    let titles: [((&str, f64), u32); 16] = [
        (("Data Engineer", 135_000.0), 22),
        (("Data Scientist", 140_000.0), 20),
        (("Data Analyst", 105_000.0), 16),
        (("Machine Learning Engineer", 150_000.0), 12),
        (("Analytics Engineer", 145_000.0), 8),
        (("Research Scientist", 160_000.0), 6),
        (("Applied Scientist", 175_000.0), 4),
        (("Data Architect", 165_000.0), 3),
        (("Business Intelligence Engineer", 125_000.0), 2),
        (("Research Engineer", 155_000.0), 2),
        (("Data Science Manager", 180_000.0), 1),
        (("Computer Vision Engineer", 145_000.0), 1),
        (("NLP Engineer", 150_000.0), 1),
        (("Data Science Consultant", 120_000.0), 1),
        (("ETL Developer", 100_000.0), 1),
        (("Head of Data", 200_000.0), 1),
    ];

    let years: [((i32, f64), u32); 4] = [
        ((2020, 0.88), 6),
        ((2021, 0.92), 10),
        ((2022, 1.00), 34),
        ((2023, 1.06), 50),
    ];

    let levels: [((&str, f64), u32); 4] = [
        (("EN", 0.55), 12),
        (("MI", 0.80), 28),
        (("SE", 1.15), 52),
        (("EX", 1.60), 8),
    ];

    let employment: [((&str, f64), u32); 4] = [
        (("FT", 1.00), 95),
        (("PT", 0.50), 2),
        (("CT", 1.10), 2),
        (("FL", 0.90), 1),
    ];

    let sizes: [((&str, f64), u32); 3] = [
        (("S", 0.85), 12),
        (("M", 1.00), 60),
        (("L", 1.05), 28),
    ];

    let locations: [((&str, f64), u32); 11] = [
        (("US", 1.20), 62),
        (("GB", 0.85), 8),
        (("CA", 0.95), 6),
        (("IN", 0.35), 5),
        (("ES", 0.55), 4),
        (("DE", 0.80), 4),
        (("FR", 0.70), 3),
        (("AU", 0.90), 2),
        (("NL", 0.80), 2),
        (("BR", 0.40), 2),
        (("PT", 0.50), 2),
    ];

    let mut records = Vec::with_capacity(n_rows);
    for _ in 0..n_rows {
        let (title, base) = *rng.pick(&titles);
        let (year, drift) = *rng.pick(&years);
        let (level, level_factor) = *rng.pick(&levels);
        let (contract, contract_factor) = *rng.pick(&employment);
        let (size, size_factor) = *rng.pick(&sizes);
        let (location, location_factor) = *rng.pick(&locations);

        let salary = base
            * drift
            * level_factor
            * contract_factor
            * size_factor
            * location_factor
            * rng.gauss(1.0, 0.12);
        let salary = salary.max(15_000.0).round();

        records.push(json!({
            "work_year": year,
            "experience_level": level,
            "employment_type": contract,
            "job_title": title,
            "salary_in_usd": salary,
            "company_size": size,
            "company_location": location,
        }));
    }

    std::fs::create_dir_all("data").expect("Failed to create data directory");
    let dataset_path = "data/ds_salaries.json";
    let file = File::create(dataset_path).expect("Failed to create dataset file");
    serde_json::to_writer(BufWriter::new(file), &records).expect("Failed to write dataset");

    // A matching linear model artifact so the predictor works offline.
    std::fs::create_dir_all("model").expect("Failed to create model directory");
    let model_path = "model/salary_model.json";
    let model = json!({
        "coefficients": [2800.0, 23500.0, -4000.0, 1900.0, -7500.0, 3200.0],
        "intercept": 52000.0,
    });
    let file = File::create(model_path).expect("Failed to create model file");
    serde_json::to_writer_pretty(BufWriter::new(file), &model).expect("Failed to write model");

    println!("Wrote {} postings to {dataset_path} and a model artifact to {model_path}", records.len());
}
