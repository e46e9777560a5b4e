use crate::chart;
use eframe::egui;
use pulsemon_client::{PolledBatch, PollerHandle};
use pulsemon_core::{Measurement, SeriesBuffer};
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Main dashboard window: drains polled batches each frame, keeps the
/// rolling window, and renders the chart plus the metrics line.
pub struct DashboardApp {
    buffer: SeriesBuffer,
    latest: Option<Measurement>,
    batch_rx: Receiver<PolledBatch>,
    last_seq: Option<u64>,
    _poller: Option<PollerHandle>,
    repaint_interval: Duration,
}

impl DashboardApp {
    pub fn new(
        batch_rx: Receiver<PolledBatch>,
        poller: Option<PollerHandle>,
        max_points: usize,
        repaint_interval: Duration,
    ) -> Self {
        Self {
            buffer: SeriesBuffer::with_max_points(max_points),
            latest: None,
            batch_rx,
            last_seq: None,
            _poller: poller,
            repaint_interval,
        }
    }

    /// Applies every batch received since the last frame.
    ///
    /// Fetch workers may complete out of dispatch order; a batch whose
    /// sequence number is not newer than the last applied one is stale and
    /// gets dropped instead of appended.
    fn drain_batches(&mut self) {
        while let Ok(batch) = self.batch_rx.try_recv() {
            if self.last_seq.is_some_and(|last| batch.seq <= last) {
                log::debug!("dropping stale batch seq {}", batch.seq);
                continue;
            }
            self.last_seq = Some(batch.seq);
            if let Some(entry) = self.buffer.append(&batch.measurements) {
                self.latest = Some(entry);
            }
        }
    }

    fn summary_text(&self) -> String {
        match &self.latest {
            Some(entry) => entry.summary_line(),
            None => "Waiting for measurements...".to_string(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_batches();
        ctx.request_repaint_after(self.repaint_interval);

        egui::TopBottomPanel::bottom("metrics")
            .min_height(32.0)
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new(self.summary_text()).monospace().size(14.0));
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            chart::render_chart(ui, &self.buffer);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardApp;
    use pulsemon_client::PolledBatch;
    use pulsemon_core::Measurement;
    use std::sync::mpsc;
    use std::time::Duration;

    fn entry(timestamp: u64, bpm: f64) -> Measurement {
        Measurement {
            timestamp,
            ir_value: 101_000.0,
            beats_per_minute: bpm,
            average_bpm: bpm - 1.0,
        }
    }

    fn app_with_sender() -> (DashboardApp, mpsc::Sender<PolledBatch>) {
        let (tx, rx) = mpsc::channel();
        (
            DashboardApp::new(rx, None, 600, Duration::from_millis(200)),
            tx,
        )
    }

    #[test]
    fn applies_batches_in_sequence_order() {
        let (mut app, tx) = app_with_sender();
        tx.send(PolledBatch {
            seq: 0,
            measurements: vec![entry(1000, 70.0)],
        })
        .unwrap();
        tx.send(PolledBatch {
            seq: 1,
            measurements: vec![entry(1200, 71.0)],
        })
        .unwrap();
        app.drain_batches();

        assert_eq!(app.buffer.len(), 2);
        assert_eq!(app.latest, Some(entry(1200, 71.0)));
    }

    #[test]
    fn stale_batches_are_dropped() {
        let (mut app, tx) = app_with_sender();
        // Seq 2 completes before the slower seq 1.
        tx.send(PolledBatch {
            seq: 2,
            measurements: vec![entry(1400, 72.0)],
        })
        .unwrap();
        tx.send(PolledBatch {
            seq: 1,
            measurements: vec![entry(1200, 71.0)],
        })
        .unwrap();
        app.drain_batches();

        assert_eq!(app.buffer.len(), 1);
        assert_eq!(app.latest, Some(entry(1400, 72.0)));
    }

    #[test]
    fn empty_batch_keeps_previous_summary() {
        let (mut app, tx) = app_with_sender();
        tx.send(PolledBatch {
            seq: 0,
            measurements: vec![entry(1000, 70.0)],
        })
        .unwrap();
        tx.send(PolledBatch {
            seq: 1,
            measurements: Vec::new(),
        })
        .unwrap();
        app.drain_batches();

        assert_eq!(app.buffer.len(), 1);
        assert_eq!(app.summary_text(), entry(1000, 70.0).summary_line());
    }

    #[test]
    fn summary_placeholder_before_first_batch() {
        let (app, _tx) = app_with_sender();
        assert_eq!(app.summary_text(), "Waiting for measurements...");
    }
}
