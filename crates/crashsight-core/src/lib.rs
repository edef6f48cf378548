//! Crashsight Core Library
//!
//! This crate provides the error types, configuration, and report models
//! shared by the vision client and the HTTP API.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, LogLevel};
pub use models::{AccidentReport, FixingListItem};
