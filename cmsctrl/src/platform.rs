use cmscore::{
    ac::Actor,
    content::{
        ContentItem,
        traits::ContentBackend,
    },
    error::BackendError,
};
use std::sync::Arc;

use crate::handle::WorkflowCtrl;

#[derive(Default)]
pub struct Builder {
    backend: Option<Arc<dyn ContentBackend>>,
    actor: Option<Actor>,
}

/// Hands out workflow controllers for the items of one content kind,
/// all acting on behalf of the same actor.
#[derive(Clone)]
pub struct Platform {
    backend: Arc<dyn ContentBackend>,
    actor: Actor,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend(mut self, val: impl ContentBackend + 'static) -> Self {
        self.backend = Some(Arc::new(val));
        self
    }

    pub fn shared_backend(mut self, val: Arc<dyn ContentBackend>) -> Self {
        self.backend = Some(val);
        self
    }

    pub fn actor(mut self, val: Actor) -> Self {
        self.actor = Some(val);
        self
    }

    pub fn build(self) -> Platform {
        Platform {
            backend: self.backend
                .expect("missing required argument backend"),
            actor: self.actor
                .expect("missing required argument actor"),
        }
    }
}

impl Platform {
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Controls an item already at hand.
    pub fn ctrl_item(&self, item: ContentItem) -> WorkflowCtrl {
        WorkflowCtrl::new(self.backend.clone(), self.actor.clone(), item)
    }

    /// Fetches the item from the content-service and controls it.
    pub async fn load_item(&self, id: i64) -> Result<WorkflowCtrl, BackendError> {
        WorkflowCtrl::load(self.backend.clone(), self.actor.clone(), id).await
    }
}
