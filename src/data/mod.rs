/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  .json / .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SalaryDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalaryDataset │  Vec<SalaryRecord>, unique-value indices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  group-by / reduce → per-panel aggregates
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
