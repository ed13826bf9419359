/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, derive year / month / engagement
///   └──────────┘
///        │            (cache: keep the last dataset per path + checksum)
///        ▼
///   ┌─────────────────┐
///   │ EnrichedDataset │  Vec<PostRecord>, distinct years / months
///   └─────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year + month → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  grouped sums, top category, PeriodReport
///   └───────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
