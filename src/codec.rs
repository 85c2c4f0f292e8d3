//! Wire format for sending a configuration to a remote profiled process
//!
//! A versioned JSON envelope around the closed field set:
//!
//! ```json
//! {"format":"dtxprof-configuration","version":1,"configuration":{...}}
//! ```
//!
//! Decoding is strict. Unknown, repeated or missing fields, wrong types, a
//! foreign format tag and unknown versions are all rejected; nothing is
//! defaulted. Encoding refuses a non-finite sampling interval, which JSON
//! cannot carry.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use crate::configuration::Fields;
use crate::constants::{WIRE_FORMAT, WIRE_VERSION};
use crate::error::{ConfigurationError, Result};

#[derive(Serialize)]
struct OutgoingEnvelope<'a> {
    format: &'a str,
    version: u32,
    configuration: &'a Fields,
}

/// Header read first so a foreign or newer payload gets a precise error
#[derive(Deserialize)]
struct EnvelopeHeader {
    format: String,
    version: u32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct IncomingEnvelope {
    #[allow(dead_code)]
    format: String,
    #[allow(dead_code)]
    version: u32,
    configuration: Fields,
}

fn envelope(fields: &Fields) -> OutgoingEnvelope<'_> {
    OutgoingEnvelope {
        format: WIRE_FORMAT,
        version: WIRE_VERSION,
        configuration: fields,
    }
}

fn check_encodable(fields: &Fields) -> Result<()> {
    if !fields.sampling_interval.is_finite() {
        return Err(ConfigurationError::NonFiniteSamplingInterval(fields.sampling_interval));
    }
    Ok(())
}

pub(crate) fn encode(fields: &Fields) -> Result<Vec<u8>> {
    check_encodable(fields)?;
    let bytes = serde_json::to_vec(&envelope(fields)).map_err(ConfigurationError::Encode)?;
    debug!("Encoded configuration payload ({} bytes)", bytes.len());
    Ok(bytes)
}

pub(crate) fn encode_pretty(fields: &Fields) -> Result<String> {
    check_encodable(fields)?;
    serde_json::to_string_pretty(&envelope(fields)).map_err(ConfigurationError::Encode)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<Fields> {
    let header: EnvelopeHeader = serde_json::from_slice(bytes).map_err(|e| {
        warn!("Rejected configuration payload: {}", e);
        ConfigurationError::Decode(e)
    })?;

    if header.format != WIRE_FORMAT {
        warn!("Rejected configuration payload with format '{}'", header.format);
        return Err(ConfigurationError::UnsupportedFormat(header.format));
    }
    if header.version != WIRE_VERSION {
        warn!("Rejected configuration payload with version {}", header.version);
        return Err(ConfigurationError::UnsupportedVersion {
            found: header.version,
            expected: WIRE_VERSION,
        });
    }

    // Straight into typed structs: a generic map would keep only the last of a repeated key
    let incoming: IncomingEnvelope = serde_json::from_slice(bytes).map_err(|e| {
        warn!("Rejected configuration body: {}", e);
        ConfigurationError::Decode(e)
    })?;
    debug!("Decoded configuration payload ({} bytes)", bytes.len());
    Ok(incoming.configuration)
}
