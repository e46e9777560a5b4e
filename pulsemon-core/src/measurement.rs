use serde::{Deserialize, Serialize};

/// One heart-rate sample as reported by the sensor firmware.
///
/// Field names on the wire are exactly `timestamp`, `irValue`,
/// `beatsPerMinute` and `averageBPM`; the firmware emits them in that order
/// and the dashboard never modifies a sample after receiving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Milliseconds since the sensor booted.
    pub timestamp: u64,
    /// Raw infrared reading from the pulse sensor.
    pub ir_value: f64,
    pub beats_per_minute: f64,
    #[serde(rename = "averageBPM")]
    pub average_bpm: f64,
}

impl Measurement {
    /// Timestamp converted from milliseconds to seconds, the unit plotted on
    /// the chart's x-axis.
    pub fn time_seconds(&self) -> f64 {
        self.timestamp as f64 / 1000.0
    }

    /// Formats the single-line metrics summary shown below the chart.
    pub fn summary_line(&self) -> String {
        format!(
            "IR: {} | BPM: {:.1} | Avg: {:.1}",
            self.ir_value, self.beats_per_minute, self.average_bpm
        )
    }
}
