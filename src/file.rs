//! TOML overlay files
//!
//! An overlay names a preset and overrides any subset of its values:
//!
//! ```toml
//! preset = "remote"
//!
//! [sampling]
//! interval = 0.25
//!
//! [recording]
//! stack_traces = true
//!
//! [output]
//! recording_file_url = "/tmp/recordings"
//! ```
//!
//! Unknown keys are rejected so a typo never silently falls back to a default.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::configuration::{Preset, ProfilingConfiguration, ProfilingConfigurationBuilder};
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::error::{ConfigurationError, Result};

/// Overlay file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationFile {
    /// Base preset, `local` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    #[serde(default)]
    pub sampling: SamplingSection,
    #[serde(default)]
    pub recording: RecordingSection,
    #[serde(default)]
    pub react_native: ReactNativeSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// Sampling cadence overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingSection {
    /// Seconds between samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_before_flush: Option<u64>,
}

/// Data category overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordingSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_file_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localhost_network: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_network_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_information: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_traces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbolicate_stack_traces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_output: Option<bool>,
}

/// Script bridge overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReactNativeSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_data: Option<bool>,
}

/// Destination override
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_file_url: Option<PathBuf>,
}

impl ConfigurationFile {
    /// `<config dir>/profconf/profiling.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loading configuration overlay from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Builder for the base preset with every override applied
    pub fn apply(&self) -> ProfilingConfigurationBuilder {
        let preset = self.preset.unwrap_or(Preset::Local);
        let mut builder = ProfilingConfigurationBuilder::from_preset(preset);

        if let Some(v) = self.sampling.interval {
            builder.set_sampling_interval(v);
        }
        if let Some(v) = self.sampling.samples_before_flush {
            builder.set_number_of_samples_before_flush_to_disk(v);
        }

        let recording = &self.recording;
        if let Some(v) = recording.open_file_names {
            builder.set_collect_open_file_names(v);
        }
        if let Some(v) = recording.network {
            builder.set_record_network(v);
        }
        if let Some(v) = recording.localhost_network {
            builder.set_record_localhost_network(v);
        }
        if let Some(v) = recording.disable_network_cache {
            builder.set_disable_network_cache(v);
        }
        if let Some(v) = recording.thread_information {
            builder.set_record_thread_information(v);
        }
        if let Some(v) = recording.stack_traces {
            builder.set_collect_stack_traces(v);
        }
        if let Some(v) = recording.symbolicate_stack_traces {
            builder.set_symbolicate_stack_traces(v);
        }
        if let Some(v) = recording.log_output {
            builder.set_record_log_output(v);
        }

        if let Some(v) = self.react_native.profile {
            builder.set_profile_react_native(v);
        }
        if let Some(v) = self.react_native.bridge_data {
            builder.set_record_react_native_bridge_data(v);
        }

        if let Some(path) = &self.output.recording_file_url {
            builder.set_recording_file_url(Some(path.clone()));
        }

        debug!("Applied configuration overlay on the {} preset", preset);
        builder
    }
}

/// Overlay that reproduces `config` from the local preset.
///
/// `record_react_native_timers_as_events` has no overlay key, so it is not
/// carried: reloading the rendered overlay yields the preset's value (false).
/// Use the wire format when that field must survive.
impl From<&ProfilingConfiguration> for ConfigurationFile {
    fn from(config: &ProfilingConfiguration) -> Self {
        Self {
            preset: Some(Preset::Local),
            sampling: SamplingSection {
                interval: Some(config.sampling_interval()),
                samples_before_flush: Some(config.number_of_samples_before_flush_to_disk()),
            },
            recording: RecordingSection {
                open_file_names: Some(config.collect_open_file_names()),
                network: Some(config.record_network()),
                localhost_network: Some(config.record_localhost_network()),
                disable_network_cache: Some(config.disable_network_cache()),
                thread_information: Some(config.record_thread_information()),
                stack_traces: Some(config.collect_stack_traces()),
                symbolicate_stack_traces: Some(config.symbolicate_stack_traces()),
                log_output: Some(config.record_log_output()),
            },
            react_native: ReactNativeSection {
                profile: Some(config.profile_react_native()),
                bridge_data: Some(config.record_react_native_bridge_data()),
            },
            output: OutputSection {
                recording_file_url: config.configured_recording_file_url().map(Path::to_path_buf),
            },
        }
    }
}
