//! Contract tests for the remote profiling wire format
//!
//! Payloads must round-trip exactly and anything outside the closed
//! schema must be rejected rather than defaulted.

use serde_json::{json, Value};
use std::path::PathBuf;
use profconf::constants::{WIRE_FORMAT, WIRE_VERSION};
use profconf::{ConfigurationError, ProfilingConfiguration, ProfilingConfigurationBuilder};

fn customized() -> ProfilingConfigurationBuilder {
    let mut builder = ProfilingConfigurationBuilder::default_configuration_for_remote_profiling();
    builder
        .set_sampling_interval(0.25)
        .set_number_of_samples_before_flush_to_disk(1)
        .set_collect_open_file_names(true)
        .set_record_network(false)
        .set_record_localhost_network(true)
        .set_disable_network_cache(true)
        .set_record_thread_information(false)
        .set_collect_stack_traces(true)
        .set_symbolicate_stack_traces(true)
        .set_record_log_output(false)
        .set_profile_react_native(false)
        .set_record_react_native_bridge_data(true)
        .set_recording_file_url(Some(PathBuf::from("/tmp/recordings")));
    builder
}

fn encoded_value(config: &ProfilingConfiguration) -> Value {
    serde_json::from_slice(&config.to_bytes().unwrap()).unwrap()
}

#[test]
fn test_frozen_round_trip() {
    for config in [
        ProfilingConfiguration::default_configuration(),
        ProfilingConfiguration::default_configuration_for_remote_profiling(),
        customized().build(),
    ] {
        let decoded = ProfilingConfiguration::from_bytes(&config.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, config);
    }
}

#[test]
fn test_builder_round_trip() {
    let builder = customized();
    let decoded = ProfilingConfigurationBuilder::from_bytes(&builder.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, builder);

    // Both forms share one payload
    let as_frozen = ProfilingConfiguration::from_bytes(&builder.to_bytes().unwrap()).unwrap();
    assert_eq!(as_frozen, builder.build());
}

#[test]
fn test_unset_recording_path_survives_round_trip() {
    let config = ProfilingConfiguration::default_configuration();
    let value = encoded_value(&config);
    assert_eq!(value["configuration"]["recordingFileURL"], Value::Null);

    let decoded = ProfilingConfiguration::from_bytes(&config.to_bytes().unwrap()).unwrap();
    assert!(decoded.configured_recording_file_url().is_none());
}

#[test]
fn test_envelope_identifies_format_and_version() {
    let value = encoded_value(&ProfilingConfiguration::default_configuration());
    assert_eq!(value["format"], json!(WIRE_FORMAT));
    assert_eq!(value["version"], json!(WIRE_VERSION));
    assert_eq!(value.as_object().unwrap().len(), 3);
}

#[test]
fn test_extra_field_is_rejected() {
    let mut value = encoded_value(&ProfilingConfiguration::default_configuration());
    value["configuration"]["recordReactNativeTimersAsEventsOverride"] = json!(true);

    let result = ProfilingConfiguration::from_bytes(&serde_json::to_vec(&value).unwrap());
    assert!(matches!(result, Err(ConfigurationError::Decode(_))));
}

#[test]
fn test_repeated_body_key_is_rejected() {
    let config = ProfilingConfiguration::default_configuration();
    let text = String::from_utf8(config.to_bytes().unwrap()).unwrap();
    let tampered = text.replacen(
        "\"recordNetwork\":true",
        "\"recordNetwork\":true,\"recordNetwork\":false",
        1,
    );
    assert_ne!(text, tampered);

    let result = ProfilingConfiguration::from_bytes(tampered.as_bytes());
    assert!(matches!(result, Err(ConfigurationError::Decode(_))));
    let result = ProfilingConfigurationBuilder::from_bytes(tampered.as_bytes());
    assert!(matches!(result, Err(ConfigurationError::Decode(_))));
}

#[test]
fn test_repeated_envelope_key_is_rejected() {
    let text = String::from_utf8(ProfilingConfiguration::default_configuration().to_bytes().unwrap()).unwrap();
    let tampered = text.replacen("\"version\":1", "\"version\":1,\"version\":1", 1);
    assert_ne!(text, tampered);

    let result = ProfilingConfiguration::from_bytes(tampered.as_bytes());
    assert!(matches!(result, Err(ConfigurationError::Decode(_))));
}

#[test]
fn test_non_finite_interval_is_not_encoded() {
    for interval in [f64::INFINITY, f64::NAN] {
        let mut builder = ProfilingConfigurationBuilder::default_configuration();
        builder.set_sampling_interval(interval);

        assert!(matches!(
            builder.to_bytes(),
            Err(ConfigurationError::NonFiniteSamplingInterval(_))
        ));
        assert!(matches!(
            builder.build().to_bytes(),
            Err(ConfigurationError::NonFiniteSamplingInterval(_))
        ));
    }
}

#[test]
fn test_extreme_finite_interval_round_trips() {
    let mut builder = ProfilingConfigurationBuilder::default_configuration();
    builder.set_sampling_interval(f64::MAX);
    let decoded = ProfilingConfigurationBuilder::from_bytes(&builder.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, builder);
}

#[test]
fn test_mistyped_field_is_rejected() {
    let mut value = encoded_value(&ProfilingConfiguration::default_configuration());
    value["configuration"]["samplingInterval"] = json!("0.5");

    let result = ProfilingConfigurationBuilder::from_bytes(&serde_json::to_vec(&value).unwrap());
    assert!(matches!(result, Err(ConfigurationError::Decode(_))));
}

#[test]
fn test_nested_object_in_place_of_path_is_rejected() {
    let mut value = encoded_value(&ProfilingConfiguration::default_configuration());
    value["configuration"]["recordingFileURL"] = json!({ "class": "NSURL", "relative": "/tmp" });

    let result = ProfilingConfiguration::from_bytes(&serde_json::to_vec(&value).unwrap());
    assert!(matches!(result, Err(ConfigurationError::Decode(_))));
}

#[test]
fn test_decode_error_is_descriptive() {
    let mut value = encoded_value(&ProfilingConfiguration::default_configuration());
    value["configuration"]["debugHooks"] = json!([]);

    let err = ProfilingConfiguration::from_bytes(&serde_json::to_vec(&value).unwrap()).unwrap_err();
    assert!(err.to_string().contains("debugHooks"));
}
