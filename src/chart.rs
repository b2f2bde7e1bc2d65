use serde::{Serialize, Serializer};

use crate::color::{compare_sectors, sector_color, SectorColor};
use crate::config::PipelineConfig;
use crate::data::axis::{build_axis, AxisSpec};
use crate::data::model::{MunicipalityEmissions, Series};
use crate::data::sectors::aggregate_sectors;
use crate::error::ChartError;

pub const HISTORICAL_ID: &str = "historical";
pub const PLEDGE_ID: &str = "pledge";
pub const BUDGET_ID: &str = "budget";

// ---------------------------------------------------------------------------
// Chart payload
// ---------------------------------------------------------------------------

/// One line or stacked area, aligned to the payload's axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub id: String,
    /// Only set for sector series; serialized as `#rrggbb`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_hex"
    )]
    pub color: Option<SectorColor>,
    /// One slot per axis label; `None` where nothing was observed.
    pub values: Vec<Option<f64>>,
}

/// Everything the time-series chart needs for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    pub name: String,
    pub axis: AxisSpec,
    /// Canonical sectors in stacking order.
    pub sectors: Vec<ChartSeries>,
    pub historical: ChartSeries,
    pub pledge: ChartSeries,
    pub budget: ChartSeries,
}

fn serialize_hex<S>(color: &Option<SectorColor>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match color {
        Some(c) => serializer.serialize_str(&c.hex()),
        None => serializer.serialize_none(),
    }
}

/// Build the chart payload for one region.
///
/// Every year is checked against the calendar range first, so a corrupt
/// record is rejected before the axis is sized. The axis spans every year
/// of every series, sectors included. Sector series are aggregated, sorted
/// with [`compare_sectors`] and projected onto the same axis. A series with
/// more points than the axis has labels is an error in strict mode and a
/// warning otherwise.
pub fn prepare_chart(
    emissions: &MunicipalityEmissions,
    config: &PipelineConfig,
) -> Result<ChartPayload, ChartError> {
    validate_years(emissions)?;

    let axis = build_axis(
        [&emissions.historical, &emissions.trend, &emissions.budget]
            .into_iter()
            .chain(emissions.sectors.iter().map(|s| &s.series)),
        config.current_year,
    );

    let line = |id: &str, series: &Series| -> Result<ChartSeries, ChartError> {
        enforce_fits(&axis, id, series, config)?;
        Ok(ChartSeries {
            id: id.to_string(),
            color: None,
            values: axis.project(series),
        })
    };
    let historical = line(HISTORICAL_ID, &emissions.historical)?;
    let pledge = line(PLEDGE_ID, &emissions.trend)?;
    let budget = line(BUDGET_ID, &emissions.budget)?;

    let mut grouped = aggregate_sectors(&emissions.sectors);
    grouped.sort_by(|a, b| compare_sectors(&a.name, &b.name));

    let sectors = grouped
        .into_iter()
        .map(|s| {
            enforce_fits(&axis, &s.name, &s.series, config)?;
            Ok(ChartSeries {
                color: Some(sector_color(&s.name)),
                values: axis.project(&s.series),
                id: s.name,
            })
        })
        .collect::<Result<Vec<_>, ChartError>>()?;

    log::debug!(
        "chart for '{}': {} labels, {} sectors",
        emissions.name,
        axis.len(),
        sectors.len()
    );

    Ok(ChartPayload {
        name: emissions.name.clone(),
        axis,
        sectors,
        historical,
        pledge,
        budget,
    })
}

fn validate_years(emissions: &MunicipalityEmissions) -> Result<(), ChartError> {
    let named = [
        (HISTORICAL_ID, &emissions.historical),
        (PLEDGE_ID, &emissions.trend),
        (BUDGET_ID, &emissions.budget),
    ]
    .into_iter()
    .chain(emissions.sectors.iter().map(|s| (s.name.as_str(), &s.series)));

    for (name, series) in named {
        series.validate().map_err(|source| ChartError::InvalidData {
            series: name.to_string(),
            source,
        })?;
    }
    Ok(())
}

fn enforce_fits(
    axis: &AxisSpec,
    id: &str,
    series: &Series,
    config: &PipelineConfig,
) -> Result<(), ChartError> {
    match axis.check_fits(id, series.len()) {
        Ok(()) => Ok(()),
        Err(e) if config.strict_invariants => Err(e),
        Err(e) => {
            log::warn!("{e}");
            Ok(())
        }
    }
}
