//! Timer plus session log.
//!
//! [`FocusController`] drives a [`FocusTimer`] and tells a
//! [`SessionBoundaryNotifier`] when a session opens and closes. Boundary
//! calls run on worker threads so the countdown never waits on the network;
//! their results come back through [`FocusController::poll`]. Failures are
//! logged and returned to the caller. They never change the timer.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, info, warn};

use super::notifier::SessionBoundaryNotifier;
use super::timer::FocusTimer;
use crate::error::FlowError;
use crate::models::FocusSessionRecord;

/// How long [`FocusController::shutdown`] waits for calls still in flight.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(15);

/// Which boundary a notification was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// What happened to a session boundary.
#[derive(Debug)]
pub enum BoundaryOutcome {
    /// The action did not cross a session boundary.
    NotSent,
    /// The call is running in the background; its result arrives via `poll`.
    Pending(Boundary),
    Started(FocusSessionRecord),
    Ended(FocusSessionRecord),
    Failed { boundary: Boundary, error: FlowError },
}

impl BoundaryOutcome {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// The backend session for the current countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Session {
    Idle,
    /// `on_start` is in flight.
    Opening,
    Open(String),
}

enum Reply {
    Started {
        epoch: u64,
        result: Result<FocusSessionRecord, FlowError>,
    },
    Ended(Result<FocusSessionRecord, FlowError>),
}

pub struct FocusController<N> {
    timer: FocusTimer,
    notifier: Arc<N>,
    /// Set once `start()` has been called since the last reset.
    start_sent: bool,
    session: Session,
    /// Bumped whenever a session closes. A start reply from an older epoch
    /// belongs to a session that is already over.
    epoch: u64,
    in_flight: usize,
    tx: Sender<Reply>,
    rx: Receiver<Reply>,
}

impl<N: SessionBoundaryNotifier + Send + Sync + 'static> FocusController<N> {
    pub fn new(timer: FocusTimer, notifier: N) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            timer,
            notifier: Arc::new(notifier),
            start_sent: false,
            session: Session::Idle,
            epoch: 0,
            in_flight: 0,
            tx,
            rx,
        }
    }

    #[must_use]
    pub const fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    #[must_use]
    pub fn open_session(&self) -> Option<&str> {
        match &self.session {
            Session::Open(id) => Some(id),
            Session::Idle | Session::Opening => None,
        }
    }

    /// A boundary call has not answered yet.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// Start or resume the countdown. The first start after a reset opens a
    /// session with the current notification preference.
    pub fn start(&mut self) -> BoundaryOutcome {
        if !self.timer.start() || self.start_sent {
            return BoundaryOutcome::NotSent;
        }

        self.start_sent = true;
        self.session = Session::Opening;

        let notifier = Arc::clone(&self.notifier);
        let blocked = self.timer.notifications_blocked();
        let epoch = self.epoch;
        let started_at = Utc::now();
        self.dispatch(move || Reply::Started {
            epoch,
            result: notifier.on_start(blocked, started_at),
        });
        BoundaryOutcome::Pending(Boundary::Start)
    }

    /// Pause the countdown. Sessions stay open while paused.
    pub fn pause(&mut self) {
        self.timer.pause();
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self) -> BoundaryOutcome {
        if self.timer.is_active() {
            self.pause();
            BoundaryOutcome::NotSent
        } else {
            self.start()
        }
    }

    /// Advance one second, closing the session if the countdown finishes.
    pub fn tick(&mut self) -> BoundaryOutcome {
        if self.timer.tick() {
            self.close_session()
        } else {
            BoundaryOutcome::NotSent
        }
    }

    /// Reset the countdown and close any open session.
    pub fn reset(&mut self) -> BoundaryOutcome {
        self.timer.reset();
        self.start_sent = false;
        self.close_session()
    }

    pub fn toggle_notifications(&mut self) -> bool {
        self.timer.toggle_notifications()
    }

    /// Results of boundary calls that have finished since the last poll.
    pub fn poll(&mut self) -> Vec<BoundaryOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(reply) = self.rx.try_recv() {
            outcomes.extend(self.handle(reply));
        }
        outcomes
    }

    /// Close any open session and wait for outstanding calls to answer.
    ///
    /// Waits at most a few seconds past the transport timeout; calls still
    /// unanswered after that are abandoned.
    pub fn shutdown(&mut self) -> Vec<BoundaryOutcome> {
        self.timer.pause();

        self.close_session();

        let mut outcomes = Vec::new();
        let deadline = Instant::now() + SHUTDOWN_GRACE;
        while self.is_pending() {
            let wait = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(wait) {
                Ok(reply) => outcomes.extend(self.handle(reply)),
                Err(_) => {
                    warn!(in_flight = self.in_flight, "gave up waiting for focus session calls");
                    break;
                }
            }
        }
        outcomes
    }

    fn close_session(&mut self) -> BoundaryOutcome {
        match std::mem::replace(&mut self.session, Session::Idle) {
            Session::Idle => BoundaryOutcome::NotSent,
            // Closed once the server hands out the id
            Session::Opening => {
                self.epoch += 1;
                BoundaryOutcome::Pending(Boundary::End)
            }
            Session::Open(session_id) => {
                self.epoch += 1;
                self.send_end(session_id);
                BoundaryOutcome::Pending(Boundary::End)
            }
        }
    }

    fn send_end(&mut self, session_id: String) {
        let notifier = Arc::clone(&self.notifier);
        self.dispatch(move || Reply::Ended(notifier.on_end(&session_id)));
    }

    fn dispatch<F>(&mut self, call: F)
    where
        F: FnOnce() -> Reply + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.tx.clone();
        thread::spawn(move || {
            tx.send(call()).ok();
        });
    }

    fn handle(&mut self, reply: Reply) -> Option<BoundaryOutcome> {
        self.in_flight = self.in_flight.saturating_sub(1);

        match reply {
            Reply::Started {
                epoch,
                result: Ok(record),
            } => {
                if epoch == self.epoch && self.session == Session::Opening {
                    info!(session_id = %record.id, "focus session started");
                    self.session = Session::Open(record.id.clone());
                    Some(BoundaryOutcome::Started(record))
                } else {
                    debug!(session_id = %record.id, "session ended before it opened, closing");
                    self.send_end(record.id);
                    None
                }
            }
            Reply::Started {
                epoch,
                result: Err(error),
            } => {
                if epoch == self.epoch && self.session == Session::Opening {
                    self.session = Session::Idle;
                }
                Some(failed(Boundary::Start, error))
            }
            Reply::Ended(Ok(record)) => {
                info!(session_id = %record.id, "focus session ended");
                Some(BoundaryOutcome::Ended(record))
            }
            Reply::Ended(Err(error)) => Some(failed(Boundary::End, error)),
        }
    }
}

fn failed(boundary: Boundary, error: FlowError) -> BoundaryOutcome {
    warn!(%boundary, "focus session notification failed: {error}");
    BoundaryOutcome::Failed { boundary, error }
}
