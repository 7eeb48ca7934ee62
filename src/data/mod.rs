/// Data layer: record types, loading, and searching.
///
/// Architecture:
/// ```text
///   *price*.csv files
///        │
///        ▼
///   ┌──────────┐
///   │ columns   │  header row → ColumnMap (name / price / weight)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  rows → PriceRecord, collected into PriceCatalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  substring search, sorted by unit price
///   └──────────┘
/// ```

pub mod columns;
pub mod loader;
pub mod model;
pub mod filter;
