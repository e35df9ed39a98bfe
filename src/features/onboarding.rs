//! First-run onboarding wizard.
//!
//! Four steps: welcome, productivity style, tracking consent, working hours.
//! Completing the last step produces the payload for `POST /onboarding/`.

use chrono::NaiveTime;

use crate::core::parse_clock_time;
use crate::error::FlowError;
use crate::models::{OnboardingPayload, ProductivityStyle};

pub const TOTAL_STEPS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    Style,
    Tracking,
    WorkingHours,
}

impl Step {
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Welcome => 1,
            Self::Style => 2,
            Self::Tracking => 3,
            Self::WorkingHours => 4,
        }
    }

    const fn from_number(n: u8) -> Self {
        match n {
            0 | 1 => Self::Welcome,
            2 => Self::Style,
            3 => Self::Tracking,
            _ => Self::WorkingHours,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome to FocusFlow",
            Self::Style => "Choose your productivity style",
            Self::Tracking => "Activity tracking",
            Self::WorkingHours => "Set your working hours",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    step: Step,
    style: ProductivityStyle,
    tracking_enabled: bool,
    work_start: NaiveTime,
    work_end: NaiveTime,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self {
            step: Step::Welcome,
            style: ProductivityStyle::default(),
            tracking_enabled: true,
            work_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            work_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
        }
    }
}

impl OnboardingWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Advance one step, stopping at the last.
    pub fn next(&mut self) -> Step {
        self.step = Step::from_number((self.step.number() + 1).min(TOTAL_STEPS));
        self.step
    }

    /// Go back one step, stopping at the first.
    pub fn back(&mut self) -> Step {
        self.step = Step::from_number(self.step.number().saturating_sub(1).max(1));
        self.step
    }

    /// Fraction of the wizard reached, `step / 4`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(TOTAL_STEPS)
    }

    #[must_use]
    pub const fn is_last_step(&self) -> bool {
        matches!(self.step, Step::WorkingHours)
    }

    pub fn set_style(&mut self, style: ProductivityStyle) {
        self.style = style;
    }

    #[must_use]
    pub const fn style(&self) -> ProductivityStyle {
        self.style
    }

    pub fn set_tracking(&mut self, enabled: bool) {
        self.tracking_enabled = enabled;
    }

    #[must_use]
    pub const fn tracking_enabled(&self) -> bool {
        self.tracking_enabled
    }

    /// Set working hours from `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidArgument` if either time is malformed or
    /// the day does not end after it starts.
    pub fn set_hours(&mut self, start: &str, end: &str) -> Result<(), FlowError> {
        let start_time = parse_clock_time(start).ok_or_else(|| {
            FlowError::InvalidArgument(format!("Invalid start time '{start}' (expected HH:MM)"))
        })?;
        let end_time = parse_clock_time(end).ok_or_else(|| {
            FlowError::InvalidArgument(format!("Invalid end time '{end}' (expected HH:MM)"))
        })?;

        if end_time <= start_time {
            return Err(FlowError::InvalidArgument(format!(
                "Working day must end after it starts ({start} - {end})"
            )));
        }

        self.work_start = start_time;
        self.work_end = end_time;
        Ok(())
    }

    #[must_use]
    pub fn hours(&self) -> (String, String) {
        (
            self.work_start.format("%H:%M").to_string(),
            self.work_end.format("%H:%M").to_string(),
        )
    }

    /// The payload to submit once the last step is reached.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidArgument` before the last step.
    pub fn finish(&self) -> Result<OnboardingPayload, FlowError> {
        if !self.is_last_step() {
            return Err(FlowError::InvalidArgument(format!(
                "Onboarding is on step {} of {TOTAL_STEPS}",
                self.step.number()
            )));
        }

        let (work_start, work_end) = self.hours();
        Ok(OnboardingPayload {
            style: self.style,
            work_start,
            work_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let wizard = OnboardingWizard::new();
        assert_eq!(wizard.step(), Step::Welcome);
        assert_eq!(wizard.style(), ProductivityStyle::Balanced);
        assert!(wizard.tracking_enabled());
        assert_eq!(wizard.hours(), ("09:00".to_string(), "17:00".to_string()));
        assert!((wizard.progress() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_next_caps_at_last_step() {
        let mut wizard = OnboardingWizard::new();
        assert_eq!(wizard.next(), Step::Style);
        assert_eq!(wizard.next(), Step::Tracking);
        assert_eq!(wizard.next(), Step::WorkingHours);
        assert_eq!(wizard.next(), Step::WorkingHours);
        assert!((wizard.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_back_floors_at_first_step() {
        let mut wizard = OnboardingWizard::new();
        assert_eq!(wizard.back(), Step::Welcome);
        wizard.next();
        wizard.next();
        assert_eq!(wizard.back(), Step::Style);
        assert_eq!(wizard.back(), Step::Welcome);
        assert_eq!(wizard.back(), Step::Welcome);
    }

    #[test]
    fn test_finish_requires_last_step() {
        let wizard = OnboardingWizard::new();
        assert!(matches!(wizard.finish(), Err(FlowError::InvalidArgument(_))));
    }

    #[test]
    fn test_finish_payload() {
        let mut wizard = OnboardingWizard::new();
        wizard.next();
        wizard.set_style(ProductivityStyle::HighFocus);
        wizard.next();
        wizard.set_tracking(false);
        wizard.next();
        wizard.set_hours("08:30", "16:45").unwrap();

        let payload = wizard.finish().unwrap();
        assert_eq!(payload.style, ProductivityStyle::HighFocus);
        assert_eq!(payload.work_start, "08:30");
        assert_eq!(payload.work_end, "16:45");
    }

    #[test]
    fn test_invalid_hours_keep_previous() {
        let mut wizard = OnboardingWizard::new();
        assert!(wizard.set_hours("9am", "17:00").is_err());
        assert!(wizard.set_hours("17:00", "09:00").is_err());
        assert_eq!(wizard.hours(), ("09:00".to_string(), "17:00".to_string()));
    }
}
