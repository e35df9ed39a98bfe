//! focusflow - a terminal client for the FocusFlow productivity service
//!
//! This crate provides a command-line interface and a terminal UI for
//! managing tasks, running focus sessions and reading productivity
//! analytics from a FocusFlow backend over its REST API.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod models;
pub mod output;
pub mod storage;
pub mod tui;

pub use api::HttpClient;
pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FlowError;
