use thiserror::Error;

/// Top-level error type for clatter.
///
/// Noise sampling itself never fails; errors only come out of the
/// configuration and preset layers.
#[derive(Debug, Error)]
pub enum ClatterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Noise-profile configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Unknown sensor: {0}")]
    UnknownSensor(String),

    #[error("Noise profile defines no sensors")]
    EmptyProfile,
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidValue`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clatter_error_from_config_error() {
        let err = ConfigError::UnknownSensor("imu_x".into());
        let clatter_err: ClatterError = err.into();
        assert!(matches!(clatter_err, ClatterError::Config(_)));
        assert!(clatter_err.to_string().contains("imu_x"));
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("seed = ").unwrap_err();
        let config_err: ConfigError = toml_err.into();
        assert!(matches!(config_err, ConfigError::Toml(_)));
    }

    #[test]
    fn invalid_shorthand_builds_invalid_value() {
        let err = ConfigError::invalid("sample_rate_hz", "must be finite and > 0");
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "sample_rate_hz"
        ));
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::invalid("sensors.imu.layers", "chain needs at least one layer")
                .to_string(),
            "Invalid value for sensors.imu.layers: chain needs at least one layer"
        );
        assert_eq!(
            ConfigError::UnknownSensor("lidar".into()).to_string(),
            "Unknown sensor: lidar"
        );
        assert_eq!(
            ConfigError::EmptyProfile.to_string(),
            "Noise profile defines no sensors"
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn errors_are_send_sync() {
        assert_send_sync::<ClatterError>();
        assert_send_sync::<ConfigError>();
    }
}
