use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize::normalize;
use super::registry::KeyRegistry;
use crate::error::{DataViewError, RegistryError};

// ---------------------------------------------------------------------------
// Dataset descriptors
// ---------------------------------------------------------------------------

/// Static description of one regional-comparison dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetDescriptor {
    /// Canonical key, also the dataset's display name.
    pub key: &'static str,
    pub title: &'static str,
    /// Header of the value column in the ranked list.
    pub column_header: &'static str,
}

/// Datasets shipped with the pipeline. The first entry is the default.
pub const BUILTIN_DATASETS: &[DatasetDescriptor] = &[
    DatasetDescriptor {
        key: "Utsläppen",
        title: "Årlig utsläppsförändring sedan Parisavtalet",
        column_header: "Utsläppsförändring",
    },
    DatasetDescriptor {
        key: "Elbilarna",
        title: "Ökningstakt andel laddbara bilar",
        column_header: "Ökning elbilar",
    },
    DatasetDescriptor {
        key: "Klimatplanerna",
        title: "Kommuner som har klimatplaner",
        column_header: "Klimatplan",
    },
    DatasetDescriptor {
        key: "Konsumtionen",
        title: "Hushållens konsumtionsutsläpp",
        column_header: "Ton CO₂e/person/år",
    },
    DatasetDescriptor {
        key: "Laddarna",
        title: "Elbilar per laddpunkt",
        column_header: "Elbilar per laddpunkt",
    },
    DatasetDescriptor {
        key: "Cyklarna",
        title: "Cykelvägar per invånare",
        column_header: "Meter per invånare",
    },
    DatasetDescriptor {
        key: "Upphandlingarna",
        title: "Klimatkrav i upphandlingar",
        column_header: "Andel upphandlingar",
    },
];

/// The dataset registry: descriptors plus a key registry over their keys.
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    descriptors: Vec<DatasetDescriptor>,
    keys: KeyRegistry,
}

impl DatasetCatalog {
    /// Build a catalog; fails if two dataset keys collide after normalization.
    /// `descriptors` must not be empty, its first entry is the default.
    pub fn new(descriptors: &[DatasetDescriptor]) -> Result<Self, RegistryError> {
        let keys = KeyRegistry::build(descriptors.iter().map(|d| d.key))?;
        Ok(Self {
            descriptors: descriptors.to_vec(),
            keys,
        })
    }

    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(BUILTIN_DATASETS)
    }

    /// Canonical key of `candidate`, if registered.
    pub fn is_valid(&self, candidate: &str) -> Option<&str> {
        self.keys.is_valid(candidate)
    }

    /// Descriptor for any spelling variant of a dataset key.
    pub fn lookup(&self, candidate: &str) -> Option<&DatasetDescriptor> {
        let key = self.keys.is_valid(candidate)?;
        self.descriptors.iter().find(|d| d.key == key)
    }

    pub fn default_dataset(&self) -> Option<&DatasetDescriptor> {
        self.descriptors.first()
    }

    pub fn descriptors(&self) -> &[DatasetDescriptor] {
        &self.descriptors
    }
}

// ---------------------------------------------------------------------------
// Data views
// ---------------------------------------------------------------------------

/// How the regional comparison is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataView {
    #[default]
    Lista,
    Karta,
}

impl DataView {
    pub const DEFAULT: DataView = DataView::Lista;
    pub const SECONDARY: DataView = DataView::Karta;

    pub fn as_str(self) -> &'static str {
        match self {
            DataView::Lista => "lista",
            DataView::Karta => "karta",
        }
    }

    /// Exact match against the URL segment; `None` for anything else.
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "lista" => Some(DataView::Lista),
            "karta" => Some(DataView::Karta),
            _ => None,
        }
    }

    /// The other view.
    pub fn toggled(self) -> Self {
        match self {
            DataView::Lista => DataView::Karta,
            DataView::Karta => DataView::Lista,
        }
    }
}

impl fmt::Display for DataView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataView {
    type Err = DataViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataView::parse(s).ok_or_else(|| DataViewError(s.to_string()))
    }
}

/// URL path of the regional comparison for a dataset and view.
pub fn regional_path(dataset: &str, view: DataView) -> String {
    format!("/geografiskt/{}/{}", normalize(dataset), view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_no_collisions() {
        let catalog = DatasetCatalog::builtin().unwrap();
        assert_eq!(catalog.descriptors().len(), BUILTIN_DATASETS.len());
        assert_eq!(catalog.default_dataset().map(|d| d.key), Some("Utsläppen"));
    }

    #[test]
    fn lookup_accepts_route_segment() {
        let catalog = DatasetCatalog::builtin().unwrap();
        let d = catalog.lookup("utslappen").unwrap();
        assert_eq!(d.key, "Utsläppen");
        assert_eq!(catalog.is_valid("KLIMATPLANERNA"), Some("Klimatplanerna"));
        assert!(catalog.lookup("bilarna").is_none());
    }

    #[test]
    fn data_view_parse_and_toggle() {
        assert_eq!(DataView::parse("karta"), Some(DataView::Karta));
        assert_eq!(DataView::parse("Karta"), None);
        assert_eq!(DataView::default(), DataView::DEFAULT);
        assert_eq!(DataView::DEFAULT.toggled(), DataView::SECONDARY);
        assert_eq!(DataView::SECONDARY.toggled(), DataView::DEFAULT);
        assert_eq!(
            "tabell".parse::<DataView>(),
            Err(DataViewError("tabell".to_string()))
        );
        assert_eq!("lista".parse::<DataView>(), Ok(DataView::Lista));
    }

    #[test]
    fn regional_path_uses_normalized_segment() {
        assert_eq!(
            regional_path("Utsläppen", DataView::Karta),
            "/geografiskt/utslappen/karta"
        );
    }
}
