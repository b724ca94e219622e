//! Error types for the WebDriver adapter

use thiserror::Error;

/// Errors raised while setting up a WebDriver session client
#[derive(Error, Debug)]
pub enum WebDriverError {
    #[error("Invalid WebDriver server URL: {0}")]
    InvalidUrl(String),

    #[error("No WebDriver session id configured")]
    MissingSession,

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
