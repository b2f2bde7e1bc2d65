/// Data layer: core types, the shared year axis, and sector aggregation.
///
/// Architecture:
/// ```text
///   historical / trend / budget            raw sector series
///        │                                        │
///        ▼                                        ▼
///   ┌──────────┐                           ┌────────────┐
///   │   axis    │  min..=max year labels    │  sectors    │  raw → canonical, summed
///   └──────────┘                           └────────────┘
///        │                                        │
///        └──────────────┬─────────────────────────┘
///                       ▼
///               AxisSpec::project  → values aligned to labels
/// ```

pub mod axis;
pub mod model;
pub mod sectors;
