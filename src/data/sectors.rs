use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::model::{Series, SectorSeries, YearValue};

// ---------------------------------------------------------------------------
// CanonicalSector – the closed output taxonomy
// ---------------------------------------------------------------------------

/// The fixed set of sectors a chart stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalSector {
    Transport,
    Industri,
    Jordbruk,
    Energi,
    #[serde(rename = "Övrigt")]
    Ovrigt,
}

/// Raw sector label → canonical sector.
const SECTOR_MAPPING: &[(&str, CanonicalSector)] = &[
    ("Transporter", CanonicalSector::Transport),
    ("Utrikes transporter", CanonicalSector::Transport),
    ("Industri (energi + processer)", CanonicalSector::Industri),
    ("Jordbruk", CanonicalSector::Jordbruk),
    ("Egen uppvärmning av bostäder och lokaler", CanonicalSector::Energi),
    ("El och fjärrvärme", CanonicalSector::Energi),
    ("Arbetsmaskiner", CanonicalSector::Ovrigt),
    ("Produktanvändning (inkl. lösningsmedel)", CanonicalSector::Ovrigt),
    ("Avfall (inkl.avlopp)", CanonicalSector::Ovrigt),
];

impl CanonicalSector {
    pub const ALL: [CanonicalSector; 5] = [
        CanonicalSector::Transport,
        CanonicalSector::Industri,
        CanonicalSector::Jordbruk,
        CanonicalSector::Energi,
        CanonicalSector::Ovrigt,
    ];

    /// Display label, as used for aggregated series names.
    pub fn label(self) -> &'static str {
        match self {
            CanonicalSector::Transport => "Transport",
            CanonicalSector::Industri => "Industri",
            CanonicalSector::Jordbruk => "Jordbruk",
            CanonicalSector::Energi => "Energi",
            CanonicalSector::Ovrigt => "Övrigt",
        }
    }

    /// Canonical sector for a raw sector label, `None` when unmapped.
    pub fn from_raw(raw: &str) -> Option<Self> {
        SECTOR_MAPPING
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|&(_, sector)| sector)
    }

    /// Inverse of [`CanonicalSector::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Raw labels that aggregate into this sector, in table order.
    pub fn raw_members(self) -> impl Iterator<Item = &'static str> {
        SECTOR_MAPPING
            .iter()
            .filter(move |(_, sector)| *sector == self)
            .map(|&(name, _)| name)
    }
}

impl fmt::Display for CanonicalSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output name for a raw sector label. Unmapped labels pass through as-is
/// so new upstream sectors show up without a code change.
pub fn canonical_name(raw: &str) -> Cow<'_, str> {
    match CanonicalSector::from_raw(raw) {
        Some(sector) => Cow::Borrowed(sector.label()),
        None => {
            log::debug!("sector '{raw}' has no canonical mapping, passing through");
            Cow::Borrowed(raw)
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Collapse raw sector series into canonical sector series.
///
/// Values of raw sectors sharing a canonical name are summed per year.
/// Output order is the order in which each canonical name is first seen in
/// `sectors`; years within a series keep their first-seen order as well.
/// Callers that need a display order sort afterwards (see
/// [`crate::color::compare_sectors`]).
///
/// A raw sector without observations still yields its canonical entry
/// (possibly empty). Canonical names no input maps to are absent.
pub fn aggregate_sectors(sectors: &[SectorSeries]) -> Vec<SectorSeries> {
    let mut aggregated: IndexMap<String, IndexMap<i32, f64>> = IndexMap::new();

    for sector in sectors {
        let name = canonical_name(&sector.name);
        let per_year = aggregated.entry(name.into_owned()).or_default();
        for point in &sector.series {
            *per_year.entry(point.year).or_insert(0.0) += point.value;
        }
    }

    aggregated
        .into_iter()
        .map(|(name, per_year)| SectorSeries {
            name,
            series: per_year
                .into_iter()
                .map(|(year, value)| YearValue::new(year, value))
                .collect::<Series>(),
        })
        .collect()
}
