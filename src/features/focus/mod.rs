//! Focus sessions.
//!
//! - [`FocusTimer`]: the countdown state machine
//! - [`SessionBoundaryNotifier`]: reports session start/end to the backend
//! - [`FocusController`]: ties the two together

pub mod controller;
pub mod notifier;
pub mod timer;

pub use controller::{Boundary, BoundaryOutcome, FocusController};
#[cfg(test)]
pub use notifier::MockSessionBoundaryNotifier;
pub use notifier::SessionBoundaryNotifier;
pub use timer::{format_mmss, render_progress_bar, FocusTimer, DEFAULT_TOTAL_SECONDS};
