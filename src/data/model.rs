use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Column names of the cleaned mobiles dataset.
pub mod columns {
    pub const BRAND: &str = "brand";
    pub const NAME: &str = "Name";
    pub const PRICE: &str = "Price";
    pub const RATING: &str = "Rating";
    pub const RAM: &str = "RAM";
    pub const CHIPSET: &str = "Chipset";
    pub const DISPLAY_TYPE: &str = "Display Type";
    pub const SCREEN_SIZE: &str = "Screen Size";
}

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, mirroring the dtypes a dataframe reader infers.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.is_nan() => Ok(()),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Numeric view of the cell. NaN counts as absent.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) if !v.is_nan() => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Categorical view of the cell; `None` for absent values.
    pub fn as_category(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Float(v) if v.is_nan() => None,
            other => Some(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – the file exactly as loaded
// ---------------------------------------------------------------------------

/// Untransformed rows, keyed by column name.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Column names in source order.
    pub columns: Vec<String>,
    pub rows: Vec<BTreeMap<String, CellValue>>,
}

impl RawTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PriceBucket – the 11 labelled price ranges
// ---------------------------------------------------------------------------

/// Left-open, right-closed price interval. Declaration order is interval order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceBucket {
    UpTo10k,
    From10kTo20k,
    From20kTo30k,
    From30kTo40k,
    From40kTo50k,
    From50kTo60k,
    From60kTo70k,
    From70kTo80k,
    From80kTo90k,
    From90kTo100k,
    Above100k,
}

/// Bucket edges: bucket `i` covers `(EDGES[i], EDGES[i + 1]]`.
pub const PRICE_EDGES: [f64; 12] = [
    0.0, 10_000.0, 20_000.0, 30_000.0, 40_000.0, 50_000.0, 60_000.0, 70_000.0, 80_000.0,
    90_000.0, 100_000.0, 500_000.0,
];

impl PriceBucket {
    pub const ALL: [PriceBucket; 11] = [
        PriceBucket::UpTo10k,
        PriceBucket::From10kTo20k,
        PriceBucket::From20kTo30k,
        PriceBucket::From30kTo40k,
        PriceBucket::From40kTo50k,
        PriceBucket::From50kTo60k,
        PriceBucket::From60kTo70k,
        PriceBucket::From70kTo80k,
        PriceBucket::From80kTo90k,
        PriceBucket::From90kTo100k,
        PriceBucket::Above100k,
    ];

    /// Classify a price. `None` for `p <= 0`, `p > 500000` and NaN.
    pub fn from_price(price: f64) -> Option<Self> {
        if !(price > PRICE_EDGES[0] && price <= PRICE_EDGES[PRICE_EDGES.len() - 1]) {
            return None;
        }
        PRICE_EDGES
            .windows(2)
            .position(|w| price > w[0] && price <= w[1])
            .map(|i| Self::ALL[i])
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceBucket::UpTo10k => "Rs.10000 and Below",
            PriceBucket::From10kTo20k => "Rs.10000 - Rs.20000",
            PriceBucket::From20kTo30k => "Rs.20000 - Rs.30000",
            PriceBucket::From30kTo40k => "Rs.30000 - Rs.40000",
            PriceBucket::From40kTo50k => "Rs.40000 - Rs.50000",
            PriceBucket::From50kTo60k => "Rs.50000 - Rs.60000",
            PriceBucket::From60kTo70k => "Rs.60000 - Rs.70000",
            PriceBucket::From70kTo80k => "Rs.70000 - Rs.80000",
            PriceBucket::From80kTo90k => "Rs.80000 - Rs.90000",
            PriceBucket::From90kTo100k => "Rs.90000 - Rs.100000",
            PriceBucket::Above100k => "Rs.100000 And Above",
        }
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Phone – one transformed row
// ---------------------------------------------------------------------------

/// A source row plus its derived columns.
#[derive(Debug, Clone)]
pub struct Phone {
    pub cells: BTreeMap<String, CellValue>,
    /// `RAM / 1000` rounded to 2 decimals.
    pub memory_gb: Option<f64>,
    pub price_bucket: Option<PriceBucket>,
}

impl Phone {
    pub fn cell(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn category(&self, column: &str) -> Option<String> {
        self.cell(column).and_then(CellValue::as_category)
    }

    pub fn number(&self, column: &str) -> Option<f64> {
        self.cell(column).and_then(CellValue::as_f64)
    }
}

// ---------------------------------------------------------------------------
// PhoneTable – the transformed, read-only table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PhoneTable {
    pub phones: Vec<Phone>,
    /// Column names in source order (derived columns excluded).
    pub columns: Vec<String>,
    /// Distinct brands, sorted.
    pub brands: BTreeSet<String>,
    /// Buckets that occur at least once, in interval order.
    pub price_buckets: BTreeSet<PriceBucket>,
}

impl PhoneTable {
    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Fail with `SchemaMismatch` unless `name` is a source column.
    pub fn require_column(&self, name: &str) -> Result<()> {
        if self.has_column(name) {
            Ok(())
        } else {
            Err(DashboardError::missing_column(name))
        }
    }

    /// Options for the brand multi-select.
    pub fn brand_options(&self) -> Result<Vec<String>> {
        self.require_column(columns::BRAND)?;
        Ok(self.brands.iter().cloned().collect())
    }

    /// Options for the price-range multi-select.
    pub fn price_bucket_options(&self) -> Vec<PriceBucket> {
        self.price_buckets.iter().copied().collect()
    }
}
