//! Serial request queue for outbound fetches.
//!
//! Basketball Reference answers bursts of traffic with HTTP 429 and a
//! temporary block, so every request to it goes through one `RequestQueue`:
//!
//! - at most one task runs at a time
//! - tasks start in the order they were enqueued
//! - after each task finishes (success or failure) the worker waits
//!   `cooldown` before starting the next one
//!
//! A task's error is handed back to its caller and never stops the worker.
//! A task that panics is reported to its caller as [`RtsError::TaskAborted`]
//! and the worker moves on to the next one after the usual cooldown.
//! Tasks cannot be cancelled once enqueued: dropping the future returned by
//! [`RequestQueue::enqueue`] only discards the result.

use std::{
    future::Future,
    pin::Pin,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace, warn};

use crate::error::{Result, RtsError};


/// Default pause between two upstream requests.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1500);

type BoxedTask = Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send>;

/// Single-flight FIFO queue with a fixed cooldown between tasks.
///
/// Must be created inside a Tokio runtime: the worker task is spawned on
/// construction and lives until the queue is dropped.
pub struct RequestQueue {
    tx: mpsc::UnboundedSender<BoxedTask>,
    pending: Arc<AtomicUsize>,
    cooldown: Duration,
}

impl RequestQueue {
    pub fn new(cooldown: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let pending = Arc::new(AtomicUsize::new(0));

        tokio::spawn(run_worker(rx, Arc::clone(&pending), cooldown));

        Self {
            tx,
            pending,
            cooldown,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Number of tasks enqueued but not yet started.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Submit a task and wait for its outcome.
    ///
    /// Resolves with exactly what `task` produced once the worker has run it.
    pub async fn enqueue<T, F, Fut>(&self, task: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();

        let boxed: BoxedTask = Box::new(move || {
            Box::pin(async move {
                let outcome = task().await;
                // The caller may have stopped waiting; the result is dropped then.
                let _ = done_tx.send(outcome);
            })
        });

        self.pending.fetch_add(1, Ordering::SeqCst);
        if self.tx.send(boxed).is_err() {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            return Err(RtsError::QueueClosed);
        }
        debug!(pending = self.pending(), "Task enqueued");

        // The reply sender only drops unsent when the task panicked.
        done_rx.await.map_err(|_| RtsError::TaskAborted)?
    }
}

impl std::fmt::Debug for RequestQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestQueue")
            .field("pending", &self.pending())
            .field("cooldown", &self.cooldown)
            .finish()
    }
}

impl Default for RequestQueue {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

async fn run_worker(
    mut rx: mpsc::UnboundedReceiver<BoxedTask>,
    pending: Arc<AtomicUsize>,
    cooldown: Duration,
) {
    while let Some(task) = rx.recv().await {
        let remaining = pending.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
        trace!(remaining, "Starting queued task");

        // Run on its own task so a panic unwinds there, not in the worker.
        if let Err(e) = tokio::spawn(task()).await {
            warn!(error = %e, "Queued task aborted");
        }

        trace!(?cooldown, "Task finished, cooling down");
        tokio::time::sleep(cooldown).await;
    }
    debug!("Request queue worker stopped");
}
