/// Data layer: storage, ingestion, catalog and CSV parsing.
///
/// Architecture:
/// ```text
///   upload ──► ┌──────────┐
///              │  ingest   │  media type + size checks
///              └──────────┘
///                    │ put
///                    ▼
///              ┌──────────┐ list  ┌──────────┐
///              │  store    │ ────► │ catalog  │  dataset names
///              └──────────┘       └──────────┘
///                    │ open
///                    ▼
///              ┌──────────┐
///              │  loader   │  CSV rows → Vec<DataPoint>
///              └──────────┘
///                    │
///                    ▼
///              ┌──────────┐
///              │  model    │  ScatterPlot envelope
///              └──────────┘
/// ```

pub mod cancel;
pub mod catalog;
pub mod ingest;
pub mod loader;
pub mod model;
pub mod store;
