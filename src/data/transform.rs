use std::collections::BTreeSet;

use super::model::{Phone, PhoneTable, PriceBucket, RawTable, columns};
use crate::error::{DashboardError, Result};

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Raw memory capacity to gigabyte-scale units, 2 decimals.
pub fn normalize_memory(raw: f64) -> f64 {
    round_to(raw / 1000.0, 2)
}

/// Derive `memory_gb` and `price_bucket` for every row.
///
/// Needs the `Price` and `RAM` columns. The input is left untouched.
pub fn transform(raw: &RawTable) -> Result<PhoneTable> {
    for required in [columns::PRICE, columns::RAM] {
        if !raw.has_column(required) {
            return Err(DashboardError::missing_column(required));
        }
    }

    let mut brands = BTreeSet::new();
    let mut price_buckets = BTreeSet::new();
    let mut unclassified = 0usize;

    let phones: Vec<Phone> = raw
        .rows
        .iter()
        .map(|cells| {
            let price_bucket = cells
                .get(columns::PRICE)
                .and_then(|v| v.as_f64())
                .and_then(PriceBucket::from_price);
            let memory_gb = cells
                .get(columns::RAM)
                .and_then(|v| v.as_f64())
                .map(normalize_memory);

            match price_bucket {
                Some(b) => {
                    price_buckets.insert(b);
                }
                None => unclassified += 1,
            }
            if let Some(brand) = cells.get(columns::BRAND).and_then(|v| v.as_category()) {
                brands.insert(brand);
            }

            Phone {
                cells: cells.clone(),
                memory_gb,
                price_bucket,
            }
        })
        .collect();

    if unclassified > 0 {
        log::debug!("{unclassified} of {} rows have no price range", phones.len());
    }

    Ok(PhoneTable {
        phones,
        columns: raw.columns.clone(),
        brands,
        price_buckets,
    })
}
