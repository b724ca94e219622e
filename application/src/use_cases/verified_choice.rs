//! Verified choice
//!
//! Selecting an option in certain controls of the remote surface is
//! expected to move the session to another location; sometimes the
//! selection is silently lost. A verified choice re-locates the control on
//! every attempt, applies the choice, waits, and checks that the location
//! changed, refreshing and retrying up to a bound.

use crate::config::ExecutorSettings;
use crate::ports::remote_session::{ElementRef, Locator, RemoteError, RemoteSession};
use crate::use_cases::shared::ActionError;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// The location never changed within the retry bound
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Selection had no effect after {attempts} attempt(s)")]
pub struct StaleSelectionError {
    pub attempts: u32,
}

/// Which of the matching elements is the control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    First,
    Last,
    /// 1 is the last match, 2 the one before it, ...
    FromEnd(usize),
}

/// Recipe for locating a selection control afresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLocator {
    pub locator: Locator,
    pub pick: Pick,
}

impl ControlLocator {
    pub fn first(locator: Locator) -> Self {
        Self {
            locator,
            pick: Pick::First,
        }
    }

    pub fn last(locator: Locator) -> Self {
        Self {
            locator,
            pick: Pick::Last,
        }
    }

    pub fn from_end(locator: Locator, n: usize) -> Self {
        Self {
            locator,
            pick: Pick::FromEnd(n),
        }
    }

    pub async fn resolve<S: RemoteSession>(
        &self,
        session: &mut S,
    ) -> Result<ElementRef, RemoteError> {
        let mut found = session.find_all(&self.locator).await?;
        let index = match self.pick {
            Pick::First => Some(0),
            Pick::Last => found.len().checked_sub(1),
            Pick::FromEnd(n) => found.len().checked_sub(n),
        };
        index
            .filter(|i| *i < found.len())
            .map(|i| found.swap_remove(i))
            .ok_or_else(|| RemoteError::NotFound(format!("{} ({:?})", self.locator, self.pick)))
    }
}

/// Option to pick in a selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Index(usize),
    VisibleText(String),
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Index(i) => write!(f, "index {}", i),
            Choice::VisibleText(t) => write!(f, "\"{}\"", t),
        }
    }
}

/// Whether a choice must move the session to another location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Transition,
    Disabled,
}

/// Bounded retry protocol around a selection
#[derive(Debug, Clone)]
pub struct VerifiedChoice {
    retry_max: u32,
    settle: Duration,
}

impl VerifiedChoice {
    pub fn new(retry_max: u32, settle: Duration) -> Self {
        Self { retry_max, settle }
    }

    pub fn from_settings(settings: &ExecutorSettings) -> Self {
        Self::new(settings.retry_max, settings.verify_wait)
    }

    /// Apply `choice` to the control produced by `control`.
    ///
    /// Returns the number of attempts used. The factory is called again on
    /// every attempt since a refresh invalidates element references.
    pub async fn select<S, F>(
        &self,
        session: &mut S,
        control: F,
        choice: &Choice,
        verification: Verification,
    ) -> Result<u32, ActionError>
    where
        S: RemoteSession,
        F: Fn() -> ControlLocator,
    {
        let verify = verification == Verification::Transition;
        let before = if verify {
            Some(session.current_location().await?)
        } else {
            None
        };
        let attempts = self.retry_max.max(1);

        for attempt in 1..=attempts {
            debug!("Selecting {} (attempt {}/{})", choice, attempt, attempts);

            let outcome = match control().resolve(session).await {
                Ok(element) => apply(session, &element, choice).await,
                Err(e) => Err(e),
            };

            let Some(before) = &before else {
                outcome?;
                return Ok(attempt);
            };

            match outcome {
                Ok(()) => {
                    session.wait(self.settle).await;
                    if session.current_location().await? != *before {
                        return Ok(attempt);
                    }
                    debug!("Location unchanged after selecting {}", choice);
                }
                Err(e) if e.is_stale() => {
                    debug!("Control not usable: {}", e);
                }
                Err(e) => return Err(e.into()),
            }

            if attempt < attempts {
                session.refresh().await?;
            }
        }

        warn!(
            "Selecting {} had no effect after {} attempt(s)",
            choice, attempts
        );
        Err(StaleSelectionError { attempts }.into())
    }
}

async fn apply<S: RemoteSession>(
    session: &mut S,
    element: &ElementRef,
    choice: &Choice,
) -> Result<(), RemoteError> {
    match choice {
        Choice::Index(i) => session.select_by_index(element, *i).await,
        Choice::VisibleText(t) => session.select_by_visible_text(element, t).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::fake_session::{FakeSession, TransitionPolicy};

    fn select_control() -> ControlLocator {
        ControlLocator::last(Locator::css(".custom-select.singleselect"))
    }

    #[tokio::test]
    async fn test_transition_on_third_attempt_succeeds() {
        let mut session = FakeSession::new().with_policy(TransitionPolicy::OnSelect(3));
        let chooser = VerifiedChoice::new(5, Duration::ZERO);

        let attempts = chooser
            .select(
                &mut session,
                select_control,
                &Choice::Index(4),
                Verification::Transition,
            )
            .await
            .unwrap();

        assert_eq!(attempts, 3);
        assert_eq!(session.selects(), 3);
        assert_eq!(session.count("refresh"), 2);
    }

    #[tokio::test]
    async fn test_never_transitioning_fails_after_retry_max() {
        let mut session = FakeSession::new().with_policy(TransitionPolicy::Never);
        let chooser = VerifiedChoice::new(4, Duration::ZERO);

        let err = chooser
            .select(
                &mut session,
                select_control,
                &Choice::Index(4),
                Verification::Transition,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ActionError::Stale(StaleSelectionError { attempts: 4 })
        ));
        assert_eq!(session.selects(), 4);
    }

    #[tokio::test]
    async fn test_disabled_verification_applies_once() {
        let mut session = FakeSession::new().with_policy(TransitionPolicy::Never);
        let chooser = VerifiedChoice::new(5, Duration::ZERO);

        let attempts = chooser
            .select(
                &mut session,
                || ControlLocator::first(Locator::id("id_jumpto_0")),
                &Choice::VisibleText("Slide4".to_string()),
                Verification::Disabled,
            )
            .await
            .unwrap();

        assert_eq!(attempts, 1);
        assert_eq!(session.selects(), 1);
        assert_eq!(session.count("refresh"), 0);
        assert!(session.contains("select #id_jumpto_0[0] text Slide4"));
    }

    #[tokio::test]
    async fn test_missing_control_is_retried_then_reported() {
        let mut session = FakeSession::new().with_elements(&Locator::css(".custom-select.singleselect"), 0);
        let chooser = VerifiedChoice::new(2, Duration::ZERO);

        let err = chooser
            .select(
                &mut session,
                select_control,
                &Choice::Index(1),
                Verification::Transition,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ActionError::Stale(_)));
        assert_eq!(session.selects(), 0);
    }

    #[tokio::test]
    async fn test_missing_control_without_verification_is_an_error() {
        let mut session = FakeSession::new().with_elements(&Locator::id("id_jumpto_0"), 0);
        let chooser = VerifiedChoice::new(5, Duration::ZERO);

        let err = chooser
            .select(
                &mut session,
                || ControlLocator::first(Locator::id("id_jumpto_0")),
                &Choice::Index(1),
                Verification::Disabled,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ActionError::Remote(RemoteError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_pick_from_end() {
        let mut session = FakeSession::new().with_elements(&Locator::css(".custom-select.singleselect"), 3);

        let penultimate =
            ControlLocator::from_end(Locator::css(".custom-select.singleselect"), 2)
                .resolve(&mut session)
                .await
                .unwrap();
        assert_eq!(penultimate.handle(), "css=.custom-select.singleselect[1]");

        let missing = ControlLocator::from_end(Locator::css(".custom-select.singleselect"), 4)
            .resolve(&mut session)
            .await;
        assert!(missing.is_err());
    }
}
