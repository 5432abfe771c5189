/// Data layer: core types, the embedded score store, and the derived views.
///
/// Architecture:
/// ```text
///  embedded constants
///        │
///        ▼
///   ┌──────────┐
///   │  store    │  parse literals → ScoreStore
///   └──────────┘
///        │
///        ├──────────────────────────┐
///        ▼                          ▼
///   ┌──────────┐             ┌──────────┐
///   │  filter   │ threshold  │  ratio    │ fixed grid sweep
///   │           │ → FilteredView │      │ → RatioCurve (once)
///   └──────────┘             └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  hist     │  filtered scores → overlay bins
///   └──────────┘
/// ```

pub mod filter;
pub mod hist;
pub mod model;
pub mod ratio;
pub mod store;
