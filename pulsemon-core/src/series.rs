use crate::measurement::Measurement;
use std::collections::VecDeque;

/// Default cap on the rolling window. At the 200 ms poll period this keeps
/// two minutes of samples on screen.
pub const MAX_POINTS: usize = 600;

/// Bounded rolling window of recent samples, kept as three index-aligned
/// sequences (seconds, BPM, average BPM) so the chart can replace all series
/// in one call.
///
/// All three sequences always have equal length, never exceeding
/// `max_points`; the oldest entries are evicted first on overflow.
pub struct SeriesBuffer {
    time_s: VecDeque<f64>,
    bpm: VecDeque<f64>,
    average_bpm: VecDeque<f64>,
    max_points: usize,
}

impl SeriesBuffer {
    pub fn new() -> Self {
        Self::with_max_points(MAX_POINTS)
    }

    pub fn with_max_points(max_points: usize) -> Self {
        Self {
            time_s: VecDeque::new(),
            bpm: VecDeque::new(),
            average_bpm: VecDeque::new(),
            max_points,
        }
    }

    /// Appends a batch of measurements, converting timestamps to seconds,
    /// then trims the window back to `max_points` oldest-first.
    ///
    /// Returns the last measurement of the batch so the caller can refresh
    /// the summary line; an empty batch is a no-op and returns `None`.
    pub fn append(&mut self, batch: &[Measurement]) -> Option<Measurement> {
        for entry in batch {
            self.time_s.push_back(entry.time_seconds());
            self.bpm.push_back(entry.beats_per_minute);
            self.average_bpm.push_back(entry.average_bpm);
        }
        while self.time_s.len() > self.max_points {
            self.time_s.pop_front();
            self.bpm.pop_front();
            self.average_bpm.pop_front();
        }
        batch.last().copied()
    }

    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    pub fn time_s(&self) -> &VecDeque<f64> {
        &self.time_s
    }

    pub fn bpm(&self) -> &VecDeque<f64> {
        &self.bpm
    }

    pub fn average_bpm(&self) -> &VecDeque<f64> {
        &self.average_bpm
    }

    /// `(seconds, BPM)` points for the chart's primary series.
    pub fn bpm_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.time_s
            .iter()
            .zip(self.bpm.iter())
            .map(|(t, v)| [*t, *v])
    }

    /// `(seconds, average BPM)` points for the chart's secondary series.
    pub fn average_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.time_s
            .iter()
            .zip(self.average_bpm.iter())
            .map(|(t, v)| [*t, *v])
    }
}

impl Default for SeriesBuffer {
    fn default() -> Self {
        Self::new()
    }
}
