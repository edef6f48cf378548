//! Crashsight API Library
//!
//! This crate provides the HTTP handlers, upload intake, and application
//! setup for the accident image analysis gateway.

// Module declarations
mod handlers;
mod upload;

// Public modules
pub mod error;
pub mod setup;
pub mod spool;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;
