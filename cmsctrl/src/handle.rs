use cmscore::{
    ac::Actor,
    content::{
        ContentItem,
        traits::ContentBackend,
    },
};
use parking_lot::{
    Mutex,
    RwLock,
};
use std::sync::Arc;

use crate::error::Action;

mod in_flight;
mod schedule;
mod workflow;

pub(crate) struct RawWorkflowCtrl {
    pub(crate) backend: Arc<dyn ContentBackend>,
    pub(crate) actor: Actor,
    // last-known-good copy of the item as reported by the content-service
    pub(crate) item: RwLock<ContentItem>,
    // the one outstanding request allowed per item
    pub(crate) in_flight: Mutex<Option<Action>>,
}

/// Drives the workflow of a single content item on behalf of an actor.
///
/// Clones share the same item and in-flight slot, so at most one
/// request for the item may be outstanding across all of them.
#[derive(Clone)]
pub struct WorkflowCtrl(pub(crate) Arc<RawWorkflowCtrl>);

/// Manages the optional scheduled publish of the item owned by the
/// `WorkflowCtrl` it was obtained from.
#[derive(Clone)]
pub struct ScheduleCtrl(pub(crate) Arc<RawWorkflowCtrl>);
