//! Crashsight Vision Library
//!
//! The boundary to the external vision-capable language model: the fixed
//! assessment prompt, the single chat-completions call, and the best-effort
//! extraction of a JSON report from the model's free-form reply.

pub mod client;
pub mod extract;
pub mod prompt;

pub use client::{detect_media_type, to_data_uri, VisionClient};
pub use extract::extract_report;
