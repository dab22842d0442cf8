pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::request_advisory;
pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use prompt::{AdvisoryRequest, SYSTEM_PROMPT, build_prompt};
