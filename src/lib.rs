//! Contact Relay - forwards scraped contact data to a chat-completion API
//!
//! A browser extension posts the text it scraped from a contact's profile;
//! the relay wraps it in a fixed lead-qualification prompt, asks the
//! upstream model, and hands the answer back.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use crate::core::{build_query, HandleError, Relay};
pub use models::{RelayRequest, RelayResponse, RelayData};
pub use services::{ChatCompletionClient, RelayError};
