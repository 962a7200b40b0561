use chrono::{DateTime, Utc};
use cmscore::{
    error::BackendError,
    workflow::State,
};
use std::fmt;
use thiserror::Error;

/// The user-triggered operations that reach the content-service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SubmitForReview,
    Publish,
    Unpublish,
    Schedule,
    CancelSchedule,
}

impl Action {
    /// The operation that moves an item into `target`.
    pub fn for_target(target: State) -> Self {
        match target {
            State::Review => Action::SubmitForReview,
            State::Published => Action::Publish,
            State::Draft => Action::Unpublish,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Action::SubmitForReview => "submit for review",
            Action::Publish => "publish",
            Action::Unpublish => "unpublish",
            Action::Schedule => "schedule",
            Action::CancelSchedule => "cancel schedule",
        })
    }
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CtrlError {
    /// The transition is not among the actions available to the actor.
    #[error("transition from {from} to {to} is not available")]
    TransitionDenied {
        from: State,
        to: State,
    },
    /// Another request for the same item has yet to settle.
    #[error("{0} is still in progress")]
    InFlight(Action),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    /// The content-service call failed; the item is left as it was.
    #[error("{action} failed: {source}")]
    Action {
        action: Action,
        source: BackendError,
    },
}

impl CtrlError {
    /// The action whose request failed at the content-service, if any.
    pub fn failed_action(&self) -> Option<Action> {
        match self {
            CtrlError::Action { action, .. } => Some(*action),
            _ => None,
        }
    }
}

/// Rejections made locally, before the content-service is contacted.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("scheduled time {at} is not in the future (now: {now})")]
    NotInFuture {
        at: DateTime<Utc>,
        now: DateTime<Utc>,
    },
    #[error("published content cannot be scheduled")]
    Published,
}
