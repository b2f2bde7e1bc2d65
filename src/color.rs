use std::cmp::Ordering;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::data::sectors::CanonicalSector;

// ---------------------------------------------------------------------------
// Sector colours
// ---------------------------------------------------------------------------

/// Theme colours a sector can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectorColor {
    MidGreen,
    LightBlue,
    Yellow,
    DarkYellow,
    Red,
    /// Fallback for sectors without a colour group.
    LightYellow,
}

impl SectorColor {
    pub fn rgb(self) -> Srgb<u8> {
        match self {
            SectorColor::MidGreen => Srgb::new(0x60, 0xb7, 0x48),
            SectorColor::LightBlue => Srgb::new(0x33, 0x95, 0xcc),
            SectorColor::Yellow => Srgb::new(0xe5, 0x58, 0x19),
            SectorColor::DarkYellow => Srgb::new(0xff, 0xaa, 0x00),
            SectorColor::Red => Srgb::new(0xcc, 0x33, 0x49),
            SectorColor::LightYellow => Srgb::new(0xf9, 0xfb, 0xc4),
        }
    }

    /// `#rrggbb` form for the rendering layer.
    pub fn hex(self) -> String {
        let c = self.rgb();
        format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
    }
}

impl From<CanonicalSector> for SectorColor {
    fn from(sector: CanonicalSector) -> Self {
        match sector {
            CanonicalSector::Transport => SectorColor::MidGreen,
            CanonicalSector::Industri => SectorColor::LightBlue,
            CanonicalSector::Jordbruk => SectorColor::Yellow,
            CanonicalSector::Energi => SectorColor::DarkYellow,
            CanonicalSector::Ovrigt => SectorColor::Red,
        }
    }
}

// ---------------------------------------------------------------------------
// Sector display order
// ---------------------------------------------------------------------------

/// Stacking order of raw sector labels, bottom of the stack last.
const DISPLAY_ORDER: &[&str] = &[
    "Transporter",
    "Utrikes transporter",
    "Industri (energi + processer)",
    "Jordbruk",
    "Egen uppvärmning av bostäder och lokaler",
    "El och fjärrvärme",
    "Arbetsmaskiner",
    "Produktanvändning (inkl. lösningsmedel)",
    "Avfall (inkl.avlopp)",
];

/// Spelling found in older sector registries for the heating sector.
const HEATING_VARIANT: &str = "Egen uppärmning av bostäder och lokaler";
const HEATING: &str = "Egen uppvärmning av bostäder och lokaler";

/// Resolve a raw or canonical sector name to its canonical sector, for
/// styling purposes only. The heating misspelling is accepted here so it
/// keeps its colour, although aggregation leaves it unmapped.
fn styled_sector(name: &str) -> Option<CanonicalSector> {
    let name = if name == HEATING_VARIANT { HEATING } else { name };
    CanonicalSector::from_raw(name).or_else(|| CanonicalSector::from_label(name))
}

/// Position of a sector in [`DISPLAY_ORDER`]. Canonical names take the
/// position of their first raw member.
pub fn display_rank(name: &str) -> Option<usize> {
    let name = if name == HEATING_VARIANT { HEATING } else { name };
    DISPLAY_ORDER.iter().position(|&n| n == name).or_else(|| {
        let first = CanonicalSector::from_label(name)?.raw_members().next()?;
        DISPLAY_ORDER.iter().position(|&n| n == first)
    })
}

/// Comparator for stacked-chart layering: higher rank first, unranked
/// sectors after every ranked one.
pub fn compare_sectors(a: &str, b: &str) -> Ordering {
    display_rank(b).cmp(&display_rank(a))
}

/// Colour of a raw or canonical sector name.
pub fn sector_color(name: &str) -> SectorColor {
    styled_sector(name).map_or(SectorColor::LightYellow, SectorColor::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_and_canonical_names_share_colour() {
        assert_eq!(sector_color("Utrikes transporter"), SectorColor::MidGreen);
        assert_eq!(sector_color("Transport"), SectorColor::MidGreen);
        assert_eq!(sector_color("Övrigt"), SectorColor::Red);
        assert_eq!(sector_color("Avfall (inkl.avlopp)"), SectorColor::Red);
    }

    #[test]
    fn unknown_sector_gets_fallback_colour() {
        assert_eq!(sector_color("Flyg"), SectorColor::LightYellow);
        assert_eq!(display_rank("Flyg"), None);
    }

    #[test]
    fn heating_variant_is_styled_like_heating() {
        assert_eq!(sector_color(HEATING_VARIANT), SectorColor::DarkYellow);
        assert_eq!(display_rank(HEATING_VARIANT), display_rank(HEATING));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(SectorColor::MidGreen.hex(), "#60b748");
        assert_eq!(SectorColor::DarkYellow.hex(), "#ffaa00");
    }

    #[test]
    fn higher_rank_sorts_first_and_unknown_last() {
        let mut names = vec!["Transport", "Flyg", "Övrigt", "Jordbruk", "Industri", "Energi"];
        names.sort_by(|a, b| compare_sectors(a, b));
        assert_eq!(
            names,
            vec!["Övrigt", "Energi", "Jordbruk", "Industri", "Transport", "Flyg"]
        );
    }

    #[test]
    fn canonical_rank_is_first_member_rank() {
        assert_eq!(display_rank("Transport"), Some(0));
        assert_eq!(display_rank("Energi"), Some(4));
        assert_eq!(display_rank("Övrigt"), Some(6));
    }
}
