//! Shared utilities for use cases.
//!
//! Paced remote actions used by the executor and the container
//! orchestrator: every action is followed by the configured pause so the
//! remote surface can settle.

use crate::ports::remote_session::{ElementRef, Locator, RemoteError, RemoteSession};
use crate::use_cases::verified_choice::StaleSelectionError;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single remote action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Stale(#[from] StaleSelectionError),
}

/// Click the first element matching `locator`
pub(crate) async fn click<S: RemoteSession>(
    session: &mut S,
    locator: &Locator,
    pause: Duration,
) -> Result<(), RemoteError> {
    let element = session.find(locator).await?;
    click_element(session, &element, pause).await
}

pub(crate) async fn click_element<S: RemoteSession>(
    session: &mut S,
    element: &ElementRef,
    pause: Duration,
) -> Result<(), RemoteError> {
    session.click(element).await?;
    session.wait(pause).await;
    Ok(())
}

/// Click the first match of `locator` if there is one
pub(crate) async fn click_if_present<S: RemoteSession>(
    session: &mut S,
    locator: &Locator,
    pause: Duration,
) -> Result<bool, RemoteError> {
    match session.find_all(locator).await?.into_iter().next() {
        Some(element) => {
            click_element(session, &element, pause).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Type `text` into the first element matching `locator`
pub(crate) async fn type_into<S: RemoteSession>(
    session: &mut S,
    locator: &Locator,
    text: &str,
    pause: Duration,
) -> Result<(), RemoteError> {
    let element = session.find(locator).await?;
    session.type_text(&element, text).await?;
    session.wait(pause).await;
    Ok(())
}

/// Clear the field matching `locator`, then type `text`
pub(crate) async fn replace_into<S: RemoteSession>(
    session: &mut S,
    locator: &Locator,
    text: &str,
    pause: Duration,
) -> Result<(), RemoteError> {
    let element = session.find(locator).await?;
    session.clear(&element).await?;
    session.type_text(&element, text).await?;
    session.wait(pause).await;
    Ok(())
}

/// Remote display name of a container created for `path`
pub(crate) fn directory_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
