/// Identifier canonicalization for dataset and municipality lookups.
///
/// ```text
///  "UTSLÄPPEN" / "GÃ¶teborg"
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  lowercase → fold diacritics (names: repair_mojibake first)
///   └───────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ KeyRegistry  │  normalized → canonical key, or None
///   └─────────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │   catalog    │  dataset descriptors, data views, route paths
///   └─────────────┘
/// ```

pub mod catalog;
pub mod normalize;
pub mod registry;

pub use catalog::{regional_path, DataView, DatasetCatalog, DatasetDescriptor};
pub use normalize::{normalize, repair_mojibake, to_title_case};
pub use registry::KeyRegistry;
