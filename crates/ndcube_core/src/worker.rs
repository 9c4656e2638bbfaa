//! Background bundle composition
//!
//! The [`BundleWorker`] spawns a worker thread that composes bundles and
//! returns them via a channel, so a render loop never waits on a large
//! dimension. Results that are superseded before the renderer polls are
//! simply dropped by [`poll_latest`](BundleWorker::poll_latest).

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::bundle::{compose, Bundle};
use crate::error::GeometryError;

/// Request to compose a bundle in the background
struct ComposeRequest {
    generation: u64,
    theta: f64,
    dimension: usize,
}

/// Result of a background composition
#[derive(Debug)]
pub struct ComposeResult {
    /// Sequence number returned by [`BundleWorker::request`]
    pub generation: u64,
    /// The composed bundle or the reason it was rejected
    pub result: Result<Bundle, GeometryError>,
}

/// Background composer using a dedicated worker thread
///
/// # Example
/// ```ignore
/// let mut worker = BundleWorker::new();
/// worker.request(theta, 4);
///
/// // Later in the render loop:
/// if let Some(done) = worker.poll_latest() {
///     if let Ok(bundle) = done.result { /* replace rendered objects */ }
/// }
/// ```
pub struct BundleWorker {
    /// Channel to send requests to the worker thread
    sender: Sender<ComposeRequest>,
    /// Channel to receive results from the worker thread
    receiver: Receiver<ComposeResult>,
    next_generation: u64,
}

impl BundleWorker {
    /// Create a worker with its background thread
    ///
    /// The thread runs until the BundleWorker is dropped.
    pub fn new() -> Self {
        let (request_tx, request_rx) = channel::<ComposeRequest>();
        let (result_tx, result_rx) = channel::<ComposeResult>();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let done = ComposeResult {
                    generation: request.generation,
                    result: compose(request.theta, request.dimension),
                };
                if result_tx.send(done).is_err() {
                    break;
                }
            }
            log::debug!("Bundle worker exiting");
        });

        Self {
            sender: request_tx,
            receiver: result_rx,
            next_generation: 0,
        }
    }

    /// Queue a composition and return its generation number
    ///
    /// Generations increase by one per request.
    pub fn request(&mut self, theta: f64, dimension: usize) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        let request = ComposeRequest {
            generation,
            theta,
            dimension,
        };
        if self.sender.send(request).is_err() {
            log::error!("Bundle worker is gone; request {} dropped", generation);
        }
        generation
    }

    /// Take the next finished result, if any (non-blocking)
    pub fn poll(&self) -> Option<ComposeResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain finished results and keep only the newest (non-blocking)
    pub fn poll_latest(&self) -> Option<ComposeResult> {
        let mut latest = None;
        while let Ok(result) = self.receiver.try_recv() {
            latest = Some(result);
        }
        latest
    }

    /// Block until the next result arrives or `timeout` passes
    pub fn wait(&self, timeout: Duration) -> Option<ComposeResult> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Default for BundleWorker {
    fn default() -> Self {
        Self::new()
    }
}
