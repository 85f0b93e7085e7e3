//! Build noise sources from [`clatter_core::config`] entries.
//!
//! Seeds resolve top-down: a sensor uses its explicit `seed` or the seed
//! derived from the profile root and the sensor name; the `i`-th layer of a
//! chain uses its explicit `seed` or `derive_seed_indexed(parent, i)`.

use std::collections::BTreeMap;
use std::path::Path;

use clatter_core::config::{NoiseConfig, NoiseKind, NoiseProfile};
use clatter_core::error::{ClatterError, ConfigError};
use clatter_core::seed::derive_seed_indexed;

use crate::bias::BiasNoise;
use crate::chain::ChainNoise;
use crate::gaussian::GaussianNoise;
use crate::source::BoxedNoise;
use crate::uniform::UniformNoise;
use crate::zero::ZeroNoise;

/// Build one source.  `derived_seed` is used unless the entry names a seed.
pub fn build_source(config: &NoiseConfig, derived_seed: u64) -> BoxedNoise {
    let seed = config.resolve_seed(derived_seed);
    if config.seed.is_some() {
        tracing::debug!(
            seed,
            derived_seed,
            kind = config.kind.as_str(),
            "explicit seed overrides derived seed"
        );
    }
    match config.kind {
        NoiseKind::Gaussian => Box::new(GaussianNoise::seeded(config.intensity, seed)),
        NoiseKind::Uniform => Box::new(UniformNoise::seeded(config.intensity, seed)),
        NoiseKind::Zero => Box::new(ZeroNoise::new(config.intensity)),
        NoiseKind::Bias => Box::new(BiasNoise::seeded(config.intensity, seed)),
        NoiseKind::Chain => Box::new(ChainNoise::new(
            config
                .layers
                .iter()
                .zip(0_u64..)
                .map(|(layer, i)| build_source(layer, derive_seed_indexed(seed, i)))
                .collect(),
        )),
    }
}

/// Build the source for one named sensor of a profile.
pub fn build_sensor(profile: &NoiseProfile, name: &str) -> Result<BoxedNoise, ConfigError> {
    let config = profile.sensor(name)?;
    config.validate(&format!("sensors.{name}"))?;
    Ok(build_source(config, profile.seeds().sensor_seed(name)))
}

/// Validate a profile and build every sensor's source.
pub fn build_profile(
    profile: &NoiseProfile,
) -> Result<BTreeMap<String, BoxedNoise>, ConfigError> {
    profile.validate()?;
    let seeds = profile.seeds();
    let sources = profile
        .sensors
        .iter()
        .map(|(name, config)| (name.clone(), build_source(config, seeds.sensor_seed(name))))
        .collect::<BTreeMap<_, _>>();
    tracing::debug!(seed = profile.seed, sensors = sources.len(), "built noise profile");
    Ok(sources)
}

/// Load a TOML profile from disk and build every sensor's source.
pub fn load_profile(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<String, BoxedNoise>, ClatterError> {
    let path = path.as_ref();
    let profile = NoiseProfile::from_file(path).inspect_err(|err| {
        tracing::error!(path = %path.display(), %err, "failed to load noise profile");
    })?;
    Ok(build_profile(&profile)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
