use crate::fetch_measurements;
use pulsemon_core::Measurement;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default poll period, matching the firmware's sampling cadence.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub endpoint: String,
    pub interval: Duration,
}

impl PollerConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// One successful poll cycle's result.
///
/// `seq` is the dispatch order of the request that produced the batch.
/// Requests may complete out of order when one is slower than the poll
/// interval; consumers drop batches whose `seq` is not newer than the last
/// one they applied.
#[derive(Debug, Clone)]
pub struct PolledBatch {
    pub seq: u64,
    pub measurements: Vec<Measurement>,
}

/// Handle to the ticker thread. Stops the ticker on `shutdown` or drop;
/// in-flight fetch workers finish naturally and their sends fail harmlessly
/// once the receiver is gone.
pub struct PollerHandle {
    stop: Arc<AtomicBool>,
    ticker: Option<JoinHandle<()>>,
}

impl PollerHandle {
    pub fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.join();
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Spawns the measurement poller.
///
/// The ticker fires immediately and then every `config.interval`. Each tick
/// dispatches the HTTP fetch on its own worker thread so a slow request
/// never delays the next tick. Failed cycles are logged and produce no
/// batch; the next tick naturally retries.
pub fn spawn_poller(config: PollerConfig) -> (PollerHandle, Receiver<PolledBatch>) {
    let (batch_tx, batch_rx) = mpsc::channel::<PolledBatch>();
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let ticker = thread::spawn(move || {
        let mut seq: u64 = 0;
        while !stop_flag.load(Ordering::Relaxed) {
            dispatch_fetch(&config.endpoint, seq, batch_tx.clone());
            seq += 1;
            thread::sleep(config.interval);
        }
    });

    (
        PollerHandle {
            stop,
            ticker: Some(ticker),
        },
        batch_rx,
    )
}

fn dispatch_fetch(endpoint: &str, seq: u64, batch_tx: Sender<PolledBatch>) {
    let endpoint = endpoint.to_string();
    thread::spawn(move || match fetch_measurements(&endpoint) {
        Ok(Some(measurements)) => {
            let _ = batch_tx.send(PolledBatch { seq, measurements });
        }
        Ok(None) => {
            log::debug!("response from {endpoint} carried no measurement batch");
        }
        Err(err) => {
            log::error!("measurement poll failed: {err}");
        }
    });
}
