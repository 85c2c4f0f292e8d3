//! Named default bundles for local and remote profiling

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::constants::{DEFAULT_SAMPLES_BEFORE_FLUSH, LOCAL_SAMPLING_INTERVAL, REMOTE_SAMPLING_INTERVAL};
use crate::error::ConfigurationError;
use super::Fields;

/// Default value bundle a configuration starts from.
///
/// Names are written lowercase and parsed case-insensitively, both through
/// `FromStr` and serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Preset {
    /// Profiling a process on the same machine
    Local,
    /// Profiling a process driven over the network by a remote recorder.
    /// Samples less often than `Local`; every other default is shared.
    Remote,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Local => "local",
            Preset::Remote => "remote",
        }
    }

    pub(crate) fn fields(self) -> Fields {
        match self {
            Preset::Local => Fields {
                sampling_interval: LOCAL_SAMPLING_INTERVAL,
                number_of_samples_before_flush_to_disk: DEFAULT_SAMPLES_BEFORE_FLUSH,
                collect_open_file_names: false,
                record_network: true,
                record_localhost_network: false,
                disable_network_cache: false,
                record_thread_information: true,
                collect_stack_traces: false,
                symbolicate_stack_traces: false,
                record_log_output: true,
                profile_react_native: true,
                record_react_native_bridge_data: false,
                record_react_native_timers_as_events: false,
                recording_file_url: None,
            },
            Preset::Remote => Fields {
                sampling_interval: REMOTE_SAMPLING_INTERVAL,
                number_of_samples_before_flush_to_disk: DEFAULT_SAMPLES_BEFORE_FLUSH,
                collect_open_file_names: false,
                record_network: true,
                record_localhost_network: false,
                disable_network_cache: false,
                record_thread_information: true,
                collect_stack_traces: false,
                symbolicate_stack_traces: false,
                record_log_output: true,
                profile_react_native: true,
                record_react_native_bridge_data: false,
                record_react_native_timers_as_events: false,
                recording_file_url: None,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Preset::Local),
            "remote" => Ok(Preset::Remote),
            _ => Err(ConfigurationError::UnknownPreset(s.to_string())),
        }
    }
}

impl TryFrom<String> for Preset {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
