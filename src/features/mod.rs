//! Feature implementations for focusflow.
//!
//! - Focus timer and session boundaries
//! - Onboarding wizard
//! - Task list tabs
//! - Terminal charts
//! - Shell completions

pub mod charts;
pub mod completions;
pub mod focus;
pub mod onboarding;
pub mod tasks;
