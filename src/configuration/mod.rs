//! Profiling session configuration
//!
//! Two value types share one field layout:
//! - `ProfilingConfiguration`: frozen, fully populated, safe to share across threads
//! - `ProfilingConfigurationBuilder`: writable copy used to assemble or derive one
//!
//! They are linked only through `build()` and `to_builder()`, both of which copy,
//! so a builder never aliases a snapshot taken from it.

pub mod builder;
pub mod preset;

pub use builder::ProfilingConfigurationBuilder;
pub use preset::Preset;

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::codec;
use crate::error::Result;
use crate::recording;

/// Field layout shared by the frozen and builder forms.
///
/// This is also the body of the wire payload: the field set is closed and
/// every field must be present when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct Fields {
    pub(crate) sampling_interval: f64,
    pub(crate) number_of_samples_before_flush_to_disk: u64,
    pub(crate) collect_open_file_names: bool,
    pub(crate) record_network: bool,
    pub(crate) record_localhost_network: bool,
    pub(crate) disable_network_cache: bool,
    pub(crate) record_thread_information: bool,
    pub(crate) collect_stack_traces: bool,
    pub(crate) symbolicate_stack_traces: bool,
    pub(crate) record_log_output: bool,
    pub(crate) profile_react_native: bool,
    pub(crate) record_react_native_bridge_data: bool,
    pub(crate) record_react_native_timers_as_events: bool,
    /// `null` on the wire means unset
    #[serde(rename = "recordingFileURL", deserialize_with = "required_path")]
    pub(crate) recording_file_url: Option<PathBuf>,
}

/// Deserializes an optional path that must still be present in the payload.
/// Plain `Option` fields are silently defaulted when missing.
fn required_path<'de, D>(deserializer: D) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<PathBuf>::deserialize(deserializer)
}

impl Fields {
    fn sampling_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.sampling_interval).ok()
    }
}

/// Read-only profiling configuration handed to the recorder.
///
/// Cloning yields an equal, independently owned configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilingConfiguration {
    fields: Fields,
}

impl ProfilingConfiguration {
    pub(crate) fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    /// Configuration populated from `preset`
    pub fn from_preset(preset: Preset) -> Self {
        Self::from_fields(preset.fields())
    }

    /// Default configuration for profiling a local process
    pub fn default_configuration() -> Self {
        Self::from_preset(Preset::Local)
    }

    /// Default configuration for remote profiling
    pub fn default_configuration_for_remote_profiling() -> Self {
        Self::from_preset(Preset::Remote)
    }

    /// Writable copy seeded with every field of this configuration
    pub fn to_builder(&self) -> ProfilingConfigurationBuilder {
        ProfilingConfigurationBuilder::from_fields(self.fields.clone())
    }

    /// Encode for persistence or transfer to a remote profiled process
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        codec::encode(&self.fields)
    }

    /// Decode a payload produced by `to_bytes`, rejecting anything else
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        codec::decode(bytes).map(Self::from_fields)
    }

    /// Same payload as `to_bytes`, indented for people to read
    pub fn to_json_pretty(&self) -> Result<String> {
        codec::encode_pretty(&self.fields)
    }

    /// Sampling interval in seconds
    pub fn sampling_interval(&self) -> f64 {
        self.fields.sampling_interval
    }

    /// Sampling interval as a `Duration`, `None` if negative or not finite
    pub fn sampling_duration(&self) -> Option<Duration> {
        self.fields.sampling_duration()
    }

    /// Minimum number of samples kept in memory before flushing to disk
    pub fn number_of_samples_before_flush_to_disk(&self) -> u64 {
        self.fields.number_of_samples_before_flush_to_disk
    }

    pub fn collect_open_file_names(&self) -> bool {
        self.fields.collect_open_file_names
    }

    pub fn record_network(&self) -> bool {
        self.fields.record_network
    }

    /// Only relevant when `record_network` is set
    pub fn record_localhost_network(&self) -> bool {
        self.fields.record_localhost_network
    }

    /// Only relevant when `record_network` is set
    pub fn disable_network_cache(&self) -> bool {
        self.fields.disable_network_cache
    }

    pub fn record_thread_information(&self) -> bool {
        self.fields.record_thread_information
    }

    pub fn collect_stack_traces(&self) -> bool {
        self.fields.collect_stack_traces
    }

    pub fn symbolicate_stack_traces(&self) -> bool {
        self.fields.symbolicate_stack_traces
    }

    pub fn record_log_output(&self) -> bool {
        self.fields.record_log_output
    }

    /// Instrument the embedded script bridge. Only one active bridge is supported.
    pub fn profile_react_native(&self) -> bool {
        self.fields.profile_react_native
    }

    pub fn record_react_native_bridge_data(&self) -> bool {
        self.fields.record_react_native_bridge_data
    }

    /// Record script timers as interval events. Read-only on both forms.
    pub fn record_react_native_timers_as_events(&self) -> bool {
        self.fields.record_react_native_timers_as_events
    }

    /// Effective recording destination.
    ///
    /// A directory is returned as-is; the recorder creates a timestamped package
    /// inside it. When unset, a timestamped package in the documents directory.
    pub fn recording_file_url(&self) -> PathBuf {
        recording::resolve_recording_file_url(self.fields.recording_file_url.as_deref())
    }

    /// Destination as stored, `None` when the default applies
    pub fn configured_recording_file_url(&self) -> Option<&Path> {
        self.fields.recording_file_url.as_deref()
    }
}

impl Default for ProfilingConfiguration {
    fn default() -> Self {
        Self::default_configuration()
    }
}

impl From<ProfilingConfigurationBuilder> for ProfilingConfiguration {
    fn from(builder: ProfilingConfigurationBuilder) -> Self {
        builder.build()
    }
}
