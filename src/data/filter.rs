use std::collections::BTreeSet;

use super::model::{Phone, PhoneTable, PriceBucket, columns};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Selection: which values are picked in each multi-select
// ---------------------------------------------------------------------------

/// Selected values per filter dimension.
/// An empty set means "no filter" on that dimension (show all).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub brands: BTreeSet<String>,
    pub price_buckets: BTreeSet<PriceBucket>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty() && self.price_buckets.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RowView: a filtered view over the table
// ---------------------------------------------------------------------------

/// Borrowed subset of a [`PhoneTable`]; filtering never mutates the table.
#[derive(Debug, Clone)]
pub struct RowView<'a> {
    pub table: &'a PhoneTable,
    /// Row indices into `table.phones`, ascending.
    pub indices: Vec<usize>,
}

impl<'a> RowView<'a> {
    /// View over every row.
    pub fn all(table: &'a PhoneTable) -> Self {
        Self {
            table,
            indices: (0..table.len()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn phones(&self) -> impl Iterator<Item = &'a Phone> + '_ {
        let table = self.table;
        self.indices.iter().map(move |&i| &table.phones[i])
    }

    /// Keep rows whose brand is one of `brands`. Empty set keeps everything.
    pub fn by_brands(self, brands: &BTreeSet<String>) -> Result<Self> {
        if brands.is_empty() {
            return Ok(self);
        }
        self.table.require_column(columns::BRAND)?;
        Ok(self.retain(|phone| {
            phone
                .category(columns::BRAND)
                .is_some_and(|b| brands.contains(&b))
        }))
    }

    /// Keep rows whose price range is one of `buckets`. Empty set keeps everything.
    pub fn by_price_buckets(self, buckets: &BTreeSet<PriceBucket>) -> Self {
        if buckets.is_empty() {
            return self;
        }
        self.retain(|phone| phone.price_bucket.is_some_and(|b| buckets.contains(&b)))
    }

    fn retain(mut self, keep: impl Fn(&Phone) -> bool) -> Self {
        let table = self.table;
        self.indices.retain(|&i| keep(&table.phones[i]));
        self
    }
}

/// OR within a dimension, AND across the two dimensions.
pub fn apply_selection<'a>(table: &'a PhoneTable, selection: &Selection) -> Result<RowView<'a>> {
    Ok(RowView::all(table)
        .by_brands(&selection.brands)?
        .by_price_buckets(&selection.price_buckets))
}
