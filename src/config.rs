use chrono::Datelike;

use crate::error::ConfigError;

pub const ENV_CURRENT_YEAR: &str = "KLIMATDATA_CURRENT_YEAR";
pub const ENV_STRICT: &str = "KLIMATDATA_STRICT";

// ---------------------------------------------------------------------------
// Pipeline configuration
// ---------------------------------------------------------------------------

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Anchor for empty axes and the first adjustable chart year.
    pub current_year: i32,
    /// Fail on series that do not fit the axis instead of logging them.
    pub strict_invariants: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            current_year: chrono::Local::now().year(),
            strict_invariants: cfg!(debug_assertions),
        }
    }
}

impl PipelineConfig {
    /// Defaults overridden by `KLIMATDATA_CURRENT_YEAR` / `KLIMATDATA_STRICT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`PipelineConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_CURRENT_YEAR) {
            config.current_year = value
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|y| (1000..=9999).contains(y))
                .ok_or(ConfigError::InvalidYear {
                    var: ENV_CURRENT_YEAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(ENV_STRICT) {
            config.strict_invariants = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        var: ENV_STRICT,
                        value,
                    })
                }
            };
        }

        log::debug!("pipeline config: {config:?}");
        Ok(config)
    }

    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn with_strict_invariants(mut self, strict: bool) -> Self {
        self.strict_invariants = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |var| {
            pairs
                .iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn overrides_are_applied() {
        let config =
            PipelineConfig::from_lookup(lookup(&[(ENV_CURRENT_YEAR, "2030"), (ENV_STRICT, "false")]))
                .unwrap();
        assert_eq!(config.current_year, 2030);
        assert!(!config.strict_invariants);
    }

    #[test]
    fn missing_vars_keep_defaults() {
        let config = PipelineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.strict_invariants, cfg!(debug_assertions));
        assert!(config.current_year >= 2024);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_eq!(
            PipelineConfig::from_lookup(lookup(&[(ENV_CURRENT_YEAR, "next")])),
            Err(ConfigError::InvalidYear {
                var: ENV_CURRENT_YEAR,
                value: "next".to_string(),
            })
        );
        assert!(PipelineConfig::from_lookup(lookup(&[(ENV_STRICT, "maybe")])).is_err());
    }
}
