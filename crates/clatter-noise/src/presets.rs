//! Pre-configured noise sources for common sensors.
//!
//! Parameters are derived from typical MEMS datasheets and standard robotics
//! sensor specifications.  Every preset is seeded, so a preset built twice
//! with the same seed replays the same stream.
//!
//! # IMU Noise Conversion
//!
//! IMU datasheets specify white noise as a spectral density.  Convert to a
//! per-sample standard deviation:
//!
//! ```text
//! white_noise_std = noise_density * sqrt(sample_rate_hz)
//! ```

use clatter_core::error::ConfigError;
use clatter_core::seed::derive_seed_indexed;

use crate::bias::BiasNoise;
use crate::chain::ChainNoise;
use crate::gaussian::GaussianNoise;

// ---------------------------------------------------------------------------
// IMU presets
// ---------------------------------------------------------------------------

fn imu_axis(
    sample_rate_hz: f64,
    noise_density: f64,
    bias_std: f64,
    seed: u64,
) -> Result<ChainNoise, ConfigError> {
    if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
        return Err(ConfigError::invalid(
            "sample_rate_hz",
            format!("must be finite and > 0, got {sample_rate_hz}"),
        ));
    }
    let white_std = noise_density * sample_rate_hz.sqrt();
    Ok(ChainNoise::new(vec![
        Box::new(GaussianNoise::seeded(white_std, derive_seed_indexed(seed, 0))),
        Box::new(BiasNoise::seeded(bias_std, derive_seed_indexed(seed, 1))),
    ]))
}

/// MEMS gyroscope noise chain (white + turn-on bias) for one axis.
///
/// Typical consumer MEMS gyroscope parameters:
/// - Noise density: `0.000_18 rad/s/sqrt(Hz)`
/// - Turn-on bias std: `0.01 rad/s`
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `sample_rate_hz` is non-positive
/// or non-finite.
pub fn mems_gyro(sample_rate_hz: f64, seed: u64) -> Result<ChainNoise, ConfigError> {
    imu_axis(sample_rate_hz, 0.000_18, 0.01, seed)
}

/// MEMS accelerometer noise chain (white + turn-on bias) for one axis.
///
/// Typical consumer MEMS accelerometer parameters:
/// - Noise density: `0.003 m/s²/sqrt(Hz)`
/// - Turn-on bias std: `0.05 m/s²`
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `sample_rate_hz` is non-positive
/// or non-finite.
pub fn mems_accel(sample_rate_hz: f64, seed: u64) -> Result<ChainNoise, ConfigError> {
    imu_axis(sample_rate_hz, 0.003, 0.05, seed)
}

// ---------------------------------------------------------------------------
// Encoder and force presets
// ---------------------------------------------------------------------------

/// Encoder position noise (zero-mean Gaussian, 1 mrad standard deviation).
pub fn encoder_position(seed: u64) -> GaussianNoise {
    GaussianNoise::seeded(0.001, seed)
}

/// Encoder velocity noise (zero-mean Gaussian, 10 mrad/s standard deviation).
pub fn encoder_velocity(seed: u64) -> GaussianNoise {
    GaussianNoise::seeded(0.01, seed)
}

/// Force/torque sensor noise (zero-mean Gaussian).
///
/// * `newton_std` — standard deviation in Newtons.
pub fn force_sensor(newton_std: f64, seed: u64) -> GaussianNoise {
    GaussianNoise::seeded(newton_std, seed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
