//! Countdown timer for focus sessions.
//!
//! The timer is a plain state machine. Something else owns the clock and calls
//! [`FocusTimer::tick`] once per second while the timer is active.

/// Default session length: 25 minutes.
pub const DEFAULT_TOTAL_SECONDS: u32 = 25 * 60;

/// State of one focus session countdown.
///
/// Invariant: `0 <= remaining_seconds <= total_seconds`, and the timer is
/// never active with zero seconds remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTimer {
    total_seconds: u32,
    remaining_seconds: u32,
    is_active: bool,
    notifications_blocked: bool,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_SECONDS)
    }
}

impl FocusTimer {
    /// A fresh, inactive timer with the full duration remaining.
    #[must_use]
    pub const fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            is_active: false,
            notifications_blocked: false,
        }
    }

    /// Same as [`FocusTimer::new`] with the notification preference preset.
    #[must_use]
    pub const fn with_notifications_blocked(mut self, blocked: bool) -> Self {
        self.notifications_blocked = blocked;
        self
    }

    /// Start or resume. No-op once the countdown has reached zero.
    ///
    /// Returns whether the timer is active afterwards.
    pub fn start(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.is_active = true;
        }
        self.is_active
    }

    /// Pause. Idempotent.
    pub fn pause(&mut self) {
        self.is_active = false;
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self) -> bool {
        if self.is_active {
            self.pause();
            false
        } else {
            self.start()
        }
    }

    /// Stop and restore the full duration.
    pub fn reset(&mut self) {
        self.is_active = false;
        self.remaining_seconds = self.total_seconds;
    }

    /// Advance one second.
    ///
    /// Returns true if this tick finished the countdown. Ticks while inactive
    /// do nothing.
    pub fn tick(&mut self) -> bool {
        if !self.is_active {
            return false;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);

        if self.remaining_seconds == 0 {
            self.is_active = false;
            true
        } else {
            false
        }
    }

    /// Flip the notification-blocking preference. The countdown is untouched.
    pub fn toggle_notifications(&mut self) -> bool {
        self.notifications_blocked = !self.notifications_blocked;
        self.notifications_blocked
    }

    /// Elapsed fraction in `[0, 1]`; exactly 1 when nothing remains.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        f64::from(self.elapsed_seconds()) / f64::from(self.total_seconds)
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    #[must_use]
    pub const fn elapsed_seconds(&self) -> u32 {
        self.total_seconds.saturating_sub(self.remaining_seconds)
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub const fn notifications_blocked(&self) -> bool {
        self.notifications_blocked
    }

    /// The countdown reached zero.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }
}

/// Format seconds as `MM:SS`. Minutes are not wrapped into hours.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
