//! Background data loading for the TUI.
//!
//! Each request runs on its own worker thread and is tagged with a
//! generation number. Issuing a new request or cancelling bumps the
//! generation, and results from older generations are dropped when they
//! arrive, so a slow response can never overwrite a newer view.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use crate::error::FlowError;

type Tagged<T> = (u64, Result<T, FlowError>);

pub struct Loader<T> {
    generation: u64,
    pending: bool,
    tx: Sender<Tagged<T>>,
    rx: Receiver<Tagged<T>>,
}

impl<T: Send + 'static> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Loader<T> {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            generation: 0,
            pending: false,
            tx,
            rx,
        }
    }

    /// Run `job` in the background, superseding any request in flight.
    pub fn request<F>(&mut self, job: F) -> u64
    where
        F: FnOnce() -> Result<T, FlowError> + Send + 'static,
    {
        self.generation += 1;
        self.pending = true;

        let generation = self.generation;
        let tx = self.tx.clone();
        thread::spawn(move || {
            // The loader may be gone by the time the job finishes
            tx.send((generation, job())).ok();
        });

        generation
    }

    /// Forget the request in flight. Its result will be discarded.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = false;
    }

    /// The result of the current request, if it has arrived.
    pub fn poll(&mut self) -> Option<Result<T, FlowError>> {
        while let Ok((generation, result)) = self.rx.try_recv() {
            if generation == self.generation && self.pending {
                self.pending = false;
                return Some(result);
            }
            debug!(generation, current = self.generation, "discarding stale load");
        }
        None
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}
