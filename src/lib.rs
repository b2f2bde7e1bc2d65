//! Normalization and aggregation pipeline for municipal emission charts.
//!
//! * [`data`] – series model, the shared year axis, sector aggregation
//! * [`keys`] – identifier normalization, key registries, dataset catalog
//! * [`chart`] – per-region chart payload aligned to one axis
//! * [`state`] – configuration and registries built once at startup

pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod keys;
pub mod state;

pub use chart::{prepare_chart, ChartPayload, ChartSeries};
pub use config::PipelineConfig;
pub use data::axis::{build_axis, AxisSpec};
pub use data::model::{MunicipalityEmissions, SectorSeries, Series, YearValue};
pub use data::sectors::{aggregate_sectors, canonical_name, CanonicalSector};
pub use error::{
    ChartError, ConfigError, DataError, DataViewError, PipelineError, RegistryError,
};
pub use state::{PipelineState, RouteTarget};
