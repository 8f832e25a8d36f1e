/// Data layer: readings, classification and lookups.
///
/// Architecture:
/// ```text
///   sample table (compiled in)
///        │
///        ▼
///   ┌──────────┐
///   │  sample   │  build Vec<Reading>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  alert + AQI level per reading → AnnotatedDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  lookup   │  date parsing, exact-date match, category summary
///   └──────────┘
/// ```

pub mod classify;
pub mod lookup;
pub mod model;
pub mod sample;
