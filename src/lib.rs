//! profconf - profiling session configuration
//!
//! This library exposes the frozen/builder configuration pair consumed by the
//! profiling recorder, its presets, the wire format used for remote
//! profiling and TOML overlay files.

mod codec;
pub mod configuration;
pub mod constants;
pub mod error;
pub mod file;
pub mod output;
pub mod recording;

pub use configuration::{Preset, ProfilingConfiguration, ProfilingConfigurationBuilder};
pub use error::{ConfigurationError, Result};
pub use file::ConfigurationFile;
