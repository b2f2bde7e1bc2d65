use thiserror::Error;

/// Configuration defect in a key registry, detected while building it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("keys '{first}' and '{second}' both normalize to '{normalized}'")]
    Collision {
        first: String,
        second: String,
        normalized: String,
    },
}

/// A series cannot be laid out on the axis it was built for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("series '{series}' has {points} points but the axis only has {labels} labels")]
    SeriesExceedsAxis {
        series: String,
        points: usize,
        labels: usize,
    },
    #[error("series '{series}': {source}")]
    InvalidData {
        series: String,
        #[source]
        source: DataError,
    },
}

/// A route segment that names no data view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown data view '{0}'")]
pub struct DataViewError(pub String);

/// Input data outside what the pipeline accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("year {year} is not a four-digit calendar year")]
    YearOutOfRange { year: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a valid year")]
    InvalidYear { var: &'static str, value: String },
    #[error("{var}: '{value}' is not a boolean (expected 1/0/true/false)")]
    InvalidFlag { var: &'static str, value: String },
}

/// Umbrella error for the pipeline entry points.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
