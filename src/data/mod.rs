/// Data layer: loading, derived columns, filtering and summaries.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform  │  + memory_gb, price_bucket → PhoneTable
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  brand / price-range selection → RowView
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────────┐
///   │ aggregate / listing  │  ranking, histogram, KPIs, table rows
///   └─────────────────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod listing;
pub mod loader;
pub mod model;
pub mod transform;
