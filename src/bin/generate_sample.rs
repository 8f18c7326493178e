//! Writes a synthetic `final_cleaned.csv` for trying the dashboard.

use serde::Serialize;

#[derive(Serialize)]
struct Row {
    brand: &'static str,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Price")]
    price: i64,
    #[serde(rename = "Rating")]
    rating: Option<f64>,
    #[serde(rename = "RAM")]
    ram: i64,
    #[serde(rename = "Chipset")]
    chipset: &'static str,
    #[serde(rename = "Display Type")]
    display_type: &'static str,
    #[serde(rename = "Screen Size")]
    screen_size: f64,
}

/// splitmix64; deterministic so the file is reproducible.
struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const BRANDS: [(&str, f64); 8] = [
    ("Apple", 2.6),
    ("Google", 1.8),
    ("OnePlus", 1.5),
    ("Samsung", 1.6),
    ("Xiaomi", 0.9),
    ("Realme", 0.8),
    ("Motorola", 0.9),
    ("Nothing", 1.3),
];

const CHIPSETS: [&str; 20] = [
    "Snapdragon 8 Gen 2",
    "Snapdragon 8 Gen 1",
    "Snapdragon 8+ Gen 1",
    "Snapdragon 7 Gen 1",
    "Snapdragon 695",
    "Snapdragon 680",
    "Snapdragon 778G",
    "Dimensity 9200",
    "Dimensity 8100",
    "Dimensity 1080",
    "Dimensity 920",
    "Dimensity 700",
    "Helio G99",
    "Helio G85",
    "Helio G35",
    "Exynos 2200",
    "Exynos 1380",
    "Tensor G2",
    "Bionic A16",
    "Unisoc T612",
];

const DISPLAYS: [&str; 4] = ["AMOLED", "Super AMOLED", "OLED", "IPS LCD"];
const RAM_MB: [i64; 6] = [2000, 3000, 4000, 6000, 8000, 12_000];

fn main() -> anyhow::Result<()> {
    let mut rng = Rng(42);
    let output_path = "final_cleaned.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let mut rows = 0;
    for (brand, premium) in BRANDS {
        for model in 1..=40 {
            let base = 6_000.0 + rng.unit().powi(2) * 60_000.0;
            let mut price = (base * premium / 100.0).round() as i64 * 100;
            // A few listings outside every price range.
            if rng.unit() < 0.01 {
                price = 650_000;
            }
            let rating = (rng.unit() > 0.08).then(|| (35.0 + rng.unit() * 14.0).round() / 10.0);
            let screen_size = (58.0 + rng.unit() * 12.0).round() / 10.0;

            writer.serialize(Row {
                brand,
                name: format!("{brand} {model}"),
                price,
                rating,
                ram: *rng.pick(&RAM_MB),
                chipset: *rng.pick(&CHIPSETS),
                display_type: *rng.pick(&DISPLAYS),
                screen_size,
            })?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {rows} mobiles to {output_path}");
    Ok(())
}
