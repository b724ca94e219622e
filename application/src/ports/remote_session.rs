//! Remote session port
//!
//! The capability set the executor needs from the content-management
//! surface: locate, click, type, select, read the current location,
//! refresh and wait. How it is realised (WebDriver, a recorded fake, ...)
//! is up to the adapter.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors reported by a remote session adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Element not found: {0}")]
    NotFound(String),

    #[error("Stale element reference: {0}")]
    StaleElement(String),

    #[error("Remote protocol error: {0}")]
    Protocol(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl RemoteError {
    /// Whether re-resolving the element may fix the failure
    pub fn is_stale(&self) -> bool {
        matches!(self, RemoteError::StaleElement(_) | RemoteError::NotFound(_))
    }
}

/// How to find an element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Element identifier attribute
    Id(String),
    Css(String),
    ClassName(String),
    /// Form control name attribute
    Name(String),
    /// Visible text of a link
    Label(String),
}

impl Locator {
    pub fn id(id: impl Into<String>) -> Self {
        Locator::Id(id.into())
    }

    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css(selector.into())
    }

    pub fn class(name: impl Into<String>) -> Self {
        Locator::ClassName(name.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        Locator::Name(name.into())
    }

    pub fn label(text: impl Into<String>) -> Self {
        Locator::Label(text.into())
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Id(v) => write!(f, "#{}", v),
            Locator::Css(v) => write!(f, "css={}", v),
            Locator::ClassName(v) => write!(f, ".{}", v),
            Locator::Name(v) => write!(f, "name={}", v),
            Locator::Label(v) => write!(f, "label={}", v),
        }
    }
}

/// Live reference to a located element
///
/// May go stale when the remote surface re-renders; re-locate instead of
/// holding on to it across actions that change the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef(String);

impl ElementRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn handle(&self) -> &str {
        &self.0
    }
}

/// Remote content-management session
///
/// Exclusively borrowed by one component at a time; all calls are made
/// sequentially and each may block for a remote round trip.
#[async_trait]
pub trait RemoteSession: Send {
    /// All elements matching `locator`, in document order
    async fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementRef>, RemoteError>;

    /// All descendants of `parent` matching `locator`
    async fn find_all_within(
        &mut self,
        parent: &ElementRef,
        locator: &Locator,
    ) -> Result<Vec<ElementRef>, RemoteError>;

    async fn click(&mut self, element: &ElementRef) -> Result<(), RemoteError>;

    async fn type_text(&mut self, element: &ElementRef, text: &str) -> Result<(), RemoteError>;

    async fn clear(&mut self, element: &ElementRef) -> Result<(), RemoteError>;

    /// Send the enter key to `element`
    async fn press_enter(&mut self, element: &ElementRef) -> Result<(), RemoteError>;

    async fn attribute(
        &mut self,
        element: &ElementRef,
        name: &str,
    ) -> Result<Option<String>, RemoteError>;

    async fn text(&mut self, element: &ElementRef) -> Result<String, RemoteError>;

    async fn select_by_index(
        &mut self,
        element: &ElementRef,
        index: usize,
    ) -> Result<(), RemoteError>;

    async fn select_by_visible_text(
        &mut self,
        element: &ElementRef,
        text: &str,
    ) -> Result<(), RemoteError>;

    /// Make a hidden element visible so it can receive input
    async fn reveal(&mut self, element: &ElementRef) -> Result<(), RemoteError>;

    /// Element currently holding keyboard focus
    async fn active_element(&mut self) -> Result<ElementRef, RemoteError>;

    async fn current_location(&mut self) -> Result<String, RemoteError>;

    async fn navigate(&mut self, url: &str) -> Result<(), RemoteError>;

    async fn refresh(&mut self) -> Result<(), RemoteError>;

    async fn wait(&mut self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }

    /// First element matching `locator`
    async fn find(&mut self, locator: &Locator) -> Result<ElementRef, RemoteError> {
        self.find_all(locator)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RemoteError::NotFound(locator.to_string()))
    }

    /// First descendant of `parent` matching `locator`
    async fn find_within(
        &mut self,
        parent: &ElementRef,
        locator: &Locator,
    ) -> Result<ElementRef, RemoteError> {
        self.find_all_within(parent, locator)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RemoteError::NotFound(locator.to_string()))
    }
}
