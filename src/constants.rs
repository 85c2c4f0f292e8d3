//! Global constants for profconf
//!
//! Centralized location for preset values, naming rules and wire identifiers

/// Extension of every recording package produced by a profiling session
pub const RECORDING_PACKAGE_EXTENSION: &str = "dtxprof";

/// chrono format used for generated recording package names
pub const RECORDING_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Sampling interval of the local preset, in seconds
pub const LOCAL_SAMPLING_INTERVAL: f64 = 0.5;

/// Sampling interval of the remote preset, in seconds
pub const REMOTE_SAMPLING_INTERVAL: f64 = 1.0;

/// Samples buffered in memory before a flush to disk
pub const DEFAULT_SAMPLES_BEFORE_FLUSH: u64 = 200;

/// Format tag carried by every encoded configuration
pub const WIRE_FORMAT: &str = "dtxprof-configuration";

/// Schema version of the encoded configuration
pub const WIRE_VERSION: u32 = 1;

/// Directory under the user config dir holding the overlay file
pub const CONFIG_DIR_NAME: &str = "profconf";

/// Overlay file name
pub const CONFIG_FILE_NAME: &str = "profiling.toml";
