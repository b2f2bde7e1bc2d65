use std::sync::Arc;

use serde::Serialize;

use crate::chart::{prepare_chart, ChartPayload};
use crate::config::PipelineConfig;
use crate::data::model::MunicipalityEmissions;
use crate::error::{ChartError, PipelineError, RegistryError};
use crate::keys::{
    regional_path, repair_mojibake, DataView, DatasetCatalog, DatasetDescriptor, KeyRegistry,
};

// ---------------------------------------------------------------------------
// Pipeline state
// ---------------------------------------------------------------------------

/// Everything built once at startup: configuration and the key registries.
///
/// Cheap to clone; clones share the same immutable registries, so one
/// instance can be handed to every request handler.
#[derive(Debug, Clone)]
pub struct PipelineState {
    pub config: PipelineConfig,
    datasets: Arc<DatasetCatalog>,
    municipalities: Arc<KeyRegistry>,
}

/// A validated regional-comparison route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteTarget {
    pub dataset: DatasetDescriptor,
    pub view: DataView,
    pub path: String,
}

impl PipelineState {
    /// State with the built-in dataset catalog and no municipalities.
    pub fn new(config: PipelineConfig) -> Result<Self, RegistryError> {
        Ok(Self {
            config,
            datasets: Arc::new(DatasetCatalog::builtin()?),
            municipalities: Arc::new(KeyRegistry::default()),
        })
    }

    /// Configuration from the environment plus the built-in catalog.
    pub fn from_env() -> Result<Self, PipelineError> {
        let config = PipelineConfig::from_env()?;
        Ok(Self::new(config)?)
    }

    /// Register the known municipality names. Names are repaired for
    /// mojibake before registration.
    pub fn with_municipalities<I, S>(mut self, names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = KeyRegistry::build(names.into_iter().map(|n| repair_mojibake(n.as_ref())))?;
        log::info!("registered {} municipalities", registry.len());
        self.municipalities = Arc::new(registry);
        Ok(self)
    }

    pub fn datasets(&self) -> &DatasetCatalog {
        &self.datasets
    }

    /// Canonical municipality name for a possibly garbled or differently
    /// cased `candidate`.
    pub fn resolve_municipality(&self, candidate: &str) -> Option<&str> {
        let resolved = self.municipalities.is_valid(&repair_mojibake(candidate));
        if resolved.is_none() {
            log::warn!("unknown municipality '{candidate}'");
        }
        resolved
    }

    /// Validate a dataset/view pair from a route. Either part failing to
    /// validate yields `None`; the caller decides the fallback.
    pub fn resolve_route(&self, dataset: &str, view: &str) -> Option<RouteTarget> {
        let Some(descriptor) = self.datasets.lookup(dataset) else {
            log::warn!("unknown dataset '{dataset}'");
            return None;
        };
        let view = match view.parse::<DataView>() {
            Ok(view) => view,
            Err(e) => {
                log::warn!("{e}");
                return None;
            }
        };
        Some(RouteTarget {
            dataset: *descriptor,
            view,
            path: regional_path(descriptor.key, view),
        })
    }

    /// The default dataset in the default view.
    pub fn default_route(&self) -> Option<RouteTarget> {
        let descriptor = self.datasets.default_dataset()?;
        let view = DataView::DEFAULT;
        Some(RouteTarget {
            dataset: *descriptor,
            view,
            path: regional_path(descriptor.key, view),
        })
    }

    /// Same route with the other data view.
    pub fn toggle_view(&self, route: &RouteTarget) -> RouteTarget {
        let view = route.view.toggled();
        RouteTarget {
            dataset: route.dataset,
            view,
            path: regional_path(route.dataset.key, view),
        }
    }

    pub fn prepare_chart(
        &self,
        emissions: &MunicipalityEmissions,
    ) -> Result<ChartPayload, ChartError> {
        prepare_chart(emissions, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PipelineState {
        PipelineState::new(PipelineConfig::default().with_current_year(2026))
            .unwrap()
            .with_municipalities(["Göteborg", "Åre", "Örebro"])
            .unwrap()
    }

    #[test]
    fn resolves_route_variants() {
        let state = state();
        let route = state.resolve_route("UTSLAPPEN", "karta").unwrap();
        assert_eq!(route.dataset.key, "Utsläppen");
        assert_eq!(route.view, DataView::Karta);
        assert_eq!(route.path, "/geografiskt/utslappen/karta");
    }

    #[test]
    fn invalid_route_parts_are_absent() {
        let state = state();
        assert!(state.resolve_route("Bilarna", "lista").is_none());
        assert!(state.resolve_route("Elbilarna", "tabell").is_none());
    }

    #[test]
    fn default_route_and_toggle() {
        let state = state();
        let route = state.default_route().unwrap();
        assert_eq!(route.path, "/geografiskt/utslappen/lista");
        let toggled = state.toggle_view(&route);
        assert_eq!(toggled.view, DataView::Karta);
        assert_eq!(toggled.path, "/geografiskt/utslappen/karta");
    }

    #[test]
    fn municipality_lookup_repairs_and_folds() {
        let state = state();
        assert_eq!(state.resolve_municipality("GÃ¶teborg"), Some("Göteborg"));
        assert_eq!(state.resolve_municipality("are"), Some("Åre"));
        assert_eq!(state.resolve_municipality("Ã–REBRO"), Some("Örebro"));
        assert_eq!(state.resolve_municipality("Malmö"), None);
    }

    #[test]
    fn colliding_municipalities_are_rejected() {
        let result = PipelineState::new(PipelineConfig::default())
            .unwrap()
            .with_municipalities(["Håbo", "Habo"]);
        assert!(matches!(result, Err(RegistryError::Collision { .. })));
    }

    #[test]
    fn catalog_is_reachable_from_state() {
        let state = state();
        let keys: Vec<_> = state.datasets().descriptors().iter().map(|d| d.key).collect();
        assert_eq!(keys.first(), Some(&"Utsläppen"));
        assert!(keys.contains(&"Elbilarna"));
    }

    #[test]
    fn clones_share_registries() {
        let state = state();
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.municipalities, &clone.municipalities));
    }
}
