//! Output formatting module
//!
//! Human-readable rendering of a configuration. JSON output is the wire
//! envelope itself, see `ProfilingConfiguration::to_json_pretty`.

use std::fmt::Write;
use crate::configuration::ProfilingConfiguration;

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Render `config` as an aligned two-column summary
pub fn format_human(config: &ProfilingConfiguration) -> String {
    let mut out = String::new();

    let recording_path = config.recording_file_url();
    let destination = match config.configured_recording_file_url() {
        Some(_) => recording_path.display().to_string(),
        None => format!("{} (default)", recording_path.display()),
    };

    let rows: [(&str, String); 14] = [
        ("Sampling interval", format!("{}s", config.sampling_interval())),
        ("Samples before flush", config.number_of_samples_before_flush_to_disk().to_string()),
        ("Open file names", on_off(config.collect_open_file_names()).to_string()),
        ("Network", on_off(config.record_network()).to_string()),
        ("Localhost network", on_off(config.record_localhost_network()).to_string()),
        ("Network cache disabled", on_off(config.disable_network_cache()).to_string()),
        ("Thread information", on_off(config.record_thread_information()).to_string()),
        ("Stack traces", on_off(config.collect_stack_traces()).to_string()),
        ("Symbolication", on_off(config.symbolicate_stack_traces()).to_string()),
        ("Log output", on_off(config.record_log_output()).to_string()),
        ("React Native", on_off(config.profile_react_native()).to_string()),
        ("Bridge data", on_off(config.record_react_native_bridge_data()).to_string()),
        ("Timers as events", on_off(config.record_react_native_timers_as_events()).to_string()),
        ("Recording file", destination),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    out.push_str("Profiling Configuration:\n");
    for (label, value) in rows {
        // Writing to a String cannot fail
        let _ = writeln!(out, "  {:<width$}  {}", format!("{}:", label), value, width = width + 1);
    }
    out
}
