use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Years an observation may carry.
pub const YEAR_RANGE: RangeInclusive<i32> = 1000..=9999;

// ---------------------------------------------------------------------------
// YearValue – one yearly observation
// ---------------------------------------------------------------------------

/// A single yearly emission figure, in kilotons CO₂-equivalent.
///
/// Deserialization rejects years outside [`YEAR_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawYearValue")]
pub struct YearValue {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "CO2Equivalent")]
    pub value: f64,
}

impl YearValue {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }

    /// Check the year is a four-digit calendar year.
    pub fn validate(&self) -> Result<(), DataError> {
        if YEAR_RANGE.contains(&self.year) {
            Ok(())
        } else {
            Err(DataError::YearOutOfRange { year: self.year })
        }
    }
}

/// Wire shape of [`YearValue`] before validation.
#[derive(Deserialize)]
struct RawYearValue {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "CO2Equivalent")]
    value: f64,
}

impl TryFrom<RawYearValue> for YearValue {
    type Error = DataError;

    fn try_from(raw: RawYearValue) -> Result<Self, Self::Error> {
        let point = YearValue::new(raw.year, raw.value);
        point.validate()?;
        Ok(point)
    }
}

impl fmt::Display for YearValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.1}", self.year, self.value)
    }
}

// ---------------------------------------------------------------------------
// Series – a collection of yearly observations
// ---------------------------------------------------------------------------

/// Yearly observations of one quantity.
///
/// Input series are neither required to be sorted nor contiguous; the axis
/// builder is what turns a set of series into an ordered year range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    pub points: Vec<YearValue>,
}

impl Series {
    pub fn new(points: Vec<YearValue>) -> Self {
        Self { points }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value recorded for `year`, if any.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.year == year)
            .map(|p| p.value)
    }

    /// First observation whose year is out of range.
    pub fn validate(&self) -> Result<(), DataError> {
        self.points.iter().try_for_each(YearValue::validate)
    }

    /// Smallest and largest year present, `None` for an empty series.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = self.points.first()?.year;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(p.year), hi.max(p.year))),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearValue> {
        self.points.iter()
    }
}

impl From<Vec<(i32, f64)>> for Series {
    fn from(pairs: Vec<(i32, f64)>) -> Self {
        Series::new(
            pairs
                .into_iter()
                .map(|(year, value)| YearValue::new(year, value))
                .collect(),
        )
    }
}

impl FromIterator<YearValue> for Series {
    fn from_iter<I: IntoIterator<Item = YearValue>>(iter: I) -> Self {
        Series::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a YearValue;
    type IntoIter = std::slice::Iter<'a, YearValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// ---------------------------------------------------------------------------
// SectorSeries – one emission sector's series
// ---------------------------------------------------------------------------

/// Emissions of a single sector. `name` is a raw sector label on input and
/// a canonical sector label after aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSeries {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "EmissionsPerYear")]
    pub series: Series,
}

impl SectorSeries {
    pub fn new(name: impl Into<String>, series: impl Into<Series>) -> Self {
        Self {
            name: name.into(),
            series: series.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// MunicipalityEmissions – everything a chart needs for one region
// ---------------------------------------------------------------------------

/// The emission record set of one region (a municipality or the country).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MunicipalityEmissions {
    #[serde(rename = "Name")]
    pub name: String,
    /// Measured totals.
    #[serde(rename = "HistoricalEmission", default)]
    pub historical: Series,
    /// Projection of the current trend (the "pledge" line in the chart).
    #[serde(rename = "Trend", default)]
    pub trend: Series,
    /// Remaining carbon budget path.
    #[serde(rename = "Budget", default)]
    pub budget: Series,
    /// Fine-grained per-sector history.
    #[serde(rename = "Sectors", default)]
    pub sectors: Vec<SectorSeries>,
}
