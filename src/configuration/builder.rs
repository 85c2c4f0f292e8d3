//! Writable profiling configuration

use std::path::{Path, PathBuf};
use crate::codec;
use crate::error::Result;
use crate::recording;
use super::{Fields, Preset, ProfilingConfiguration};

/// Mutable counterpart of `ProfilingConfiguration`.
///
/// Owned by a single caller while it is being assembled; only the snapshot
/// produced by `build()` should be handed to other threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilingConfigurationBuilder {
    fields: Fields,
}

impl ProfilingConfigurationBuilder {
    pub(crate) fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::from_fields(preset.fields())
    }

    /// Builder seeded with the local profiling defaults
    pub fn default_configuration() -> Self {
        Self::from_preset(Preset::Local)
    }

    /// Builder seeded with the remote profiling defaults
    pub fn default_configuration_for_remote_profiling() -> Self {
        Self::from_preset(Preset::Remote)
    }

    /// Snapshot of the current values. Later changes to the builder do not reach it.
    pub fn build(&self) -> ProfilingConfiguration {
        ProfilingConfiguration::from_fields(self.fields.clone())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        codec::encode(&self.fields)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        codec::decode(bytes).map(Self::from_fields)
    }

    pub fn sampling_interval(&self) -> f64 {
        self.fields.sampling_interval
    }

    /// Seconds between samples. Not validated here; the recorder rejects bad values.
    pub fn set_sampling_interval(&mut self, seconds: f64) -> &mut Self {
        self.fields.sampling_interval = seconds;
        self
    }

    pub fn number_of_samples_before_flush_to_disk(&self) -> u64 {
        self.fields.number_of_samples_before_flush_to_disk
    }

    /// Larger values trade memory for fewer disk writes
    pub fn set_number_of_samples_before_flush_to_disk(&mut self, samples: u64) -> &mut Self {
        self.fields.number_of_samples_before_flush_to_disk = samples;
        self
    }

    pub fn collect_open_file_names(&self) -> bool {
        self.fields.collect_open_file_names
    }

    pub fn set_collect_open_file_names(&mut self, enabled: bool) -> &mut Self {
        self.fields.collect_open_file_names = enabled;
        self
    }

    pub fn record_network(&self) -> bool {
        self.fields.record_network
    }

    pub fn set_record_network(&mut self, enabled: bool) -> &mut Self {
        self.fields.record_network = enabled;
        self
    }

    pub fn record_localhost_network(&self) -> bool {
        self.fields.record_localhost_network
    }

    /// Stored independently of `record_network`, which gates it at record time
    pub fn set_record_localhost_network(&mut self, enabled: bool) -> &mut Self {
        self.fields.record_localhost_network = enabled;
        self
    }

    pub fn disable_network_cache(&self) -> bool {
        self.fields.disable_network_cache
    }

    /// Stored independently of `record_network`, which gates it at record time
    pub fn set_disable_network_cache(&mut self, disabled: bool) -> &mut Self {
        self.fields.disable_network_cache = disabled;
        self
    }

    pub fn record_thread_information(&self) -> bool {
        self.fields.record_thread_information
    }

    pub fn set_record_thread_information(&mut self, enabled: bool) -> &mut Self {
        self.fields.record_thread_information = enabled;
        self
    }

    pub fn collect_stack_traces(&self) -> bool {
        self.fields.collect_stack_traces
    }

    pub fn set_collect_stack_traces(&mut self, enabled: bool) -> &mut Self {
        self.fields.collect_stack_traces = enabled;
        self
    }

    pub fn symbolicate_stack_traces(&self) -> bool {
        self.fields.symbolicate_stack_traces
    }

    pub fn set_symbolicate_stack_traces(&mut self, enabled: bool) -> &mut Self {
        self.fields.symbolicate_stack_traces = enabled;
        self
    }

    pub fn record_log_output(&self) -> bool {
        self.fields.record_log_output
    }

    pub fn set_record_log_output(&mut self, enabled: bool) -> &mut Self {
        self.fields.record_log_output = enabled;
        self
    }

    pub fn profile_react_native(&self) -> bool {
        self.fields.profile_react_native
    }

    pub fn set_profile_react_native(&mut self, enabled: bool) -> &mut Self {
        self.fields.profile_react_native = enabled;
        self
    }

    pub fn record_react_native_bridge_data(&self) -> bool {
        self.fields.record_react_native_bridge_data
    }

    pub fn set_record_react_native_bridge_data(&mut self, enabled: bool) -> &mut Self {
        self.fields.record_react_native_bridge_data = enabled;
        self
    }

    /// Read-only: comes from the preset or a decoded payload
    pub fn record_react_native_timers_as_events(&self) -> bool {
        self.fields.record_react_native_timers_as_events
    }

    /// Effective recording destination, never unset
    pub fn recording_file_url(&self) -> PathBuf {
        recording::resolve_recording_file_url(self.fields.recording_file_url.as_deref())
    }

    pub fn configured_recording_file_url(&self) -> Option<&Path> {
        self.fields.recording_file_url.as_deref()
    }

    /// `None` restores the timestamped default on the next read
    pub fn set_recording_file_url(&mut self, path: Option<PathBuf>) -> &mut Self {
        self.fields.recording_file_url = path;
        self
    }
}

impl Default for ProfilingConfigurationBuilder {
    fn default() -> Self {
        Self::default_configuration()
    }
}

impl From<&ProfilingConfiguration> for ProfilingConfigurationBuilder {
    fn from(config: &ProfilingConfiguration) -> Self {
        config.to_builder()
    }
}
