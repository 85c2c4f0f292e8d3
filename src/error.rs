//! Error types for configuration decoding and loading

use std::path::PathBuf;

/// Errors raised while encoding, decoding or loading a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Payload did not match the closed field set or its types
    #[error("invalid configuration payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode configuration: {0}")]
    Encode(#[source] serde_json::Error),

    /// JSON has no representation for infinities or NaN
    #[error("sampling interval {0} cannot be encoded (must be finite)")]
    NonFiniteSamplingInterval(f64),

    /// Payload declared a format other than ours
    #[error("unsupported payload format '{0}'")]
    UnsupportedFormat(String),

    #[error("unsupported configuration schema version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("failed to render configuration file: {0}")]
    RenderConfigFile(#[from] toml::ser::Error),

    #[error("unknown preset '{0}' (expected 'local' or 'remote')")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
