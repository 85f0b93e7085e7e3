use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::seed::SeedHierarchy;

// ---------------------------------------------------------------------------
// NoiseKind
// ---------------------------------------------------------------------------

/// Which noise strategy a [`NoiseConfig`] builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Zero-mean normal draw scaled by `intensity`.
    Gaussian,
    /// Uniform draw from `[-|intensity|, |intensity|]`.
    Uniform,
    /// Always `0.0`.
    Zero,
    /// Constant offset drawn once from `N(0, intensity²)`.
    Bias,
    /// Sum of the configured `layers`.
    Chain,
}

impl NoiseKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gaussian => "gaussian",
            Self::Uniform => "uniform",
            Self::Zero => "zero",
            Self::Bias => "bias",
            Self::Chain => "chain",
        }
    }
}

// ---------------------------------------------------------------------------
// NoiseConfig
// ---------------------------------------------------------------------------

/// Configuration for one noise source.
///
/// `intensity` is not range-checked: any representable value is a legal
/// intensity and each strategy decides what negative or non-finite values mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub kind: NoiseKind,

    #[serde(default)]
    pub intensity: f64,

    /// Explicit seed.  When absent the seed is derived from the profile seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Members of a [`NoiseKind::Chain`]; must be empty for other kinds.
    /// A chain's own `intensity` must be left at `0.0`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<Self>,
}

impl NoiseConfig {
    pub const fn new(kind: NoiseKind, intensity: f64) -> Self {
        Self {
            kind,
            intensity,
            seed: None,
            layers: Vec::new(),
        }
    }

    /// Chain of `layers`.  The chain's own intensity is unused.
    pub const fn chain(layers: Vec<Self>) -> Self {
        Self {
            kind: NoiseKind::Chain,
            intensity: 0.0,
            seed: None,
            layers,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate structure.  `path` names this entry in error messages.
    pub fn validate(&self, path: &str) -> Result<(), ConfigError> {
        match (self.kind, self.layers.is_empty()) {
            (NoiseKind::Chain, true) => Err(ConfigError::invalid(
                format!("{path}.layers"),
                "chain needs at least one layer",
            )),
            (NoiseKind::Chain, false) => {
                if self.intensity != 0.0 {
                    return Err(ConfigError::invalid(
                        format!("{path}.intensity"),
                        format!(
                            "chain intensity is the sum of its layers, got explicit {}",
                            self.intensity
                        ),
                    ));
                }
                for (i, layer) in self.layers.iter().enumerate() {
                    layer.validate(&format!("{path}.layers[{i}]"))?;
                }
                Ok(())
            }
            (kind, false) => Err(ConfigError::invalid(
                format!("{path}.layers"),
                format!("only chain sources take layers, got kind {}", kind.as_str()),
            )),
            (_, true) => Ok(()),
        }
    }

    /// Seed this entry should use, given the seed it would otherwise derive.
    pub fn resolve_seed(&self, derived: u64) -> u64 {
        self.seed.unwrap_or(derived)
    }
}

// ---------------------------------------------------------------------------
// NoiseProfile
// ---------------------------------------------------------------------------

/// A named set of per-sensor noise configurations sharing a root seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseProfile {
    /// Root seed; per-sensor seeds are derived from it.
    #[serde(default)]
    pub seed: u64,

    #[serde(default)]
    pub sensors: BTreeMap<String, NoiseConfig>,
}

impl NoiseProfile {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            sensors: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_sensor(mut self, name: impl Into<String>, config: NoiseConfig) -> Self {
        self.sensors.insert(name.into(), config);
        self
    }

    /// Validate configuration.  Returns Err on an empty profile or a
    /// malformed entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sensors.is_empty() {
            return Err(ConfigError::EmptyProfile);
        }
        for (name, config) in &self.sensors {
            config.validate(&format!("sensors.{name}"))?;
        }
        Ok(())
    }

    pub const fn seeds(&self) -> SeedHierarchy {
        SeedHierarchy::new(self.seed)
    }

    /// Look up a sensor entry.
    pub fn sensor(&self, name: &str) -> Result<&NoiseConfig, ConfigError> {
        self.sensors
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSensor(name.to_owned()))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let profile: Self = toml::from_str(content)?;
        profile.validate()?;
        tracing::debug!(
            seed = profile.seed,
            sensors = profile.sensors.len(),
            "loaded noise profile"
        );
        Ok(profile)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
