//! W3C WebDriver remote session
//!
//! Implements the [`RemoteSession`](lessonsmith_application::RemoteSession)
//! port over the WebDriver HTTP wire protocol.

pub mod error;
pub mod protocol;
pub mod session;

pub use error::WebDriverError;
pub use session::WebDriverSession;
