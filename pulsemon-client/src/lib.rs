use pulsemon_core::Measurement;

mod poller;

pub use poller::{spawn_poller, PolledBatch, PollerConfig, PollerHandle};

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("measurement request failed: {0}")]
    Http(String),
    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),
    #[error("failed to parse measurement batch: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetches one batch of measurements from the sensor endpoint.
///
/// Returns `Ok(None)` when the response is valid JSON but its
/// `measurements` field is missing or not an array; the firmware never sends
/// such a body, so callers drop it without treating it as an error. No
/// timeout is applied; a stalled request simply overlaps the next poll cycle.
pub fn fetch_measurements(endpoint: &str) -> Result<Option<Vec<Measurement>>, ClientError> {
    let response = ureq::get(endpoint)
        .call()
        .map_err(|err| ClientError::Http(err.to_string()))?;
    let body = response.into_string()?;
    parse_measurement_body(&body)
}

/// Parses the `{"measurements": [...]}` wire format.
pub fn parse_measurement_body(body: &str) -> Result<Option<Vec<Measurement>>, ClientError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let Some(entries) = value.get("measurements").filter(|v| v.is_array()) else {
        return Ok(None);
    };
    let measurements: Vec<Measurement> = serde_json::from_value(entries.clone())?;
    Ok(Some(measurements))
}

#[cfg(test)]
mod tests {
    use super::{parse_measurement_body, ClientError};

    #[test]
    fn parses_firmware_batch() {
        let body = r#"{"measurements":[
            {"timestamp":1000,"irValue":104231,"beatsPerMinute":72.30,"averageBPM":70.10},
            {"timestamp":1200,"irValue":104250,"beatsPerMinute":72.80,"averageBPM":70.40}
        ]}"#;
        let batch = parse_measurement_body(body)
            .expect("parse")
            .expect("batch present");
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].timestamp, 1000);
        assert_eq!(batch[1].beats_per_minute, 72.8);
    }

    #[test]
    fn missing_measurements_field_is_not_an_error() {
        let parsed = parse_measurement_body(r#"{"status":"ok"}"#).expect("parse");
        assert!(parsed.is_none());
    }

    #[test]
    fn non_array_measurements_field_is_dropped() {
        let parsed = parse_measurement_body(r#"{"measurements":"soon"}"#).expect("parse");
        assert!(parsed.is_none());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_measurement_body("{not json").unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn empty_batch_parses_as_empty_vec() {
        let batch = parse_measurement_body(r#"{"measurements":[]}"#)
            .expect("parse")
            .expect("batch present");
        assert!(batch.is_empty());
    }
}
