use serde::{Deserialize, Serialize};

use super::model::Series;
use crate::error::ChartError;

// ---------------------------------------------------------------------------
// AxisSpec – the shared year axis
// ---------------------------------------------------------------------------

/// A contiguous, ascending year axis shared by every series in one chart.
///
/// `labels.len() == max_year - min_year + 1` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub labels: Vec<i32>,
    pub min_year: i32,
    pub max_year: i32,
    /// First year the user may adjust in the chart (the current year).
    pub adjustable_year_start: i32,
}

/// Build the axis spanning every year present in `series`.
///
/// Years with no observation in any series still get a label. When no
/// series holds a single value the axis collapses to `current_year` alone.
pub fn build_axis<'a, I>(series: I, current_year: i32) -> AxisSpec
where
    I: IntoIterator<Item = &'a Series>,
{
    let bounds = series
        .into_iter()
        .flat_map(|s| s.iter())
        .fold(None, |acc: Option<(i32, i32)>, p| match acc {
            None => Some((p.year, p.year)),
            Some((lo, hi)) => Some((lo.min(p.year), hi.max(p.year))),
        });

    let (min_year, max_year) = bounds.unwrap_or((current_year, current_year));

    AxisSpec {
        labels: (min_year..=max_year).collect(),
        min_year,
        max_year,
        adjustable_year_start: current_year,
    }
}

impl AxisSpec {
    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Never true for an axis produced by [`build_axis`].
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }

    /// Position of `year` on the axis.
    pub fn index_of(&self, year: i32) -> Option<usize> {
        if self.contains(year) {
            usize::try_from(year - self.min_year).ok()
        } else {
            None
        }
    }

    /// Check that a series with `points` observations fits on the axis.
    pub fn check_fits(&self, name: &str, points: usize) -> Result<(), ChartError> {
        if points > self.labels.len() {
            return Err(ChartError::SeriesExceedsAxis {
                series: name.to_string(),
                points,
                labels: self.labels.len(),
            });
        }
        Ok(())
    }

    /// Lay `series` out on the axis: one slot per label, `None` where the
    /// series has no observation. Years outside the axis are dropped.
    pub fn project(&self, series: &Series) -> Vec<Option<f64>> {
        let mut values = vec![None; self.labels.len()];
        for p in series {
            match self.index_of(p.year) {
                Some(idx) => values[idx] = Some(p.value),
                None => log::debug!(
                    "year {} outside axis {}..={}",
                    p.year,
                    self.min_year,
                    self.max_year
                ),
            }
        }
        values
    }
}
