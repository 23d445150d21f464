// Module declarations
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod dates;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod resolver;

// Re-export commonly used items
pub use client::{JiraClient, TempoClient};
pub use config::{load_config, redact_token, Config, PresetEntry};
pub use error::{TempoError, TempoResult};
pub use models::*;
pub use resolver::ResolvedPerson;
