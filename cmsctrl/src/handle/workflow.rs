use cmscore::{
    ac::Actor,
    content::{
        ContentItem,
        traits::ContentBackend,
    },
    error::BackendError,
    workflow::{
        State,
        States,
        StatusDescriptor,
        Transition,
        TRANSITIONS,
    },
};
use parking_lot::{
    Mutex,
    RwLock,
};
use std::sync::Arc;

use crate::{
    error::{
        Action,
        CtrlError,
    },
    handle::{
        RawWorkflowCtrl,
        ScheduleCtrl,
        WorkflowCtrl,
    },
};

impl RawWorkflowCtrl {
    /// Adopts the item returned by a successful call, or leaves the
    /// current item untouched on failure.
    pub(crate) fn adopt(
        &self,
        action: Action,
        result: Result<ContentItem, BackendError>,
    ) -> Result<ContentItem, CtrlError> {
        match result {
            Ok(item) => {
                let item = item.reconcile();
                let mut current = self.item.write();
                log::info!(
                    "item {}: {action} accepted; {} (v{}) -> {} (v{})",
                    current.id,
                    current.status,
                    current.version,
                    item.status,
                    item.version,
                );
                *current = item.clone();
                Ok(item)
            }
            Err(source) => {
                log::warn!(
                    "item {}: {action} failed: {source}",
                    self.item.read().id,
                );
                Err(CtrlError::Action { action, source })
            }
        }
    }
}

impl WorkflowCtrl {
    pub fn new(
        backend: Arc<dyn ContentBackend>,
        actor: Actor,
        item: ContentItem,
    ) -> Self {
        Self(Arc::new(RawWorkflowCtrl {
            backend,
            actor,
            item: RwLock::new(item.reconcile()),
            in_flight: Mutex::new(None),
        }))
    }

    /// Loads the item from the content-service before controlling it.
    pub async fn load(
        backend: Arc<dyn ContentBackend>,
        actor: Actor,
        id: i64,
    ) -> Result<Self, BackendError> {
        let item = backend.get_item(id).await?;
        log::debug!("loaded item {id} at {} (v{})", item.status, item.version);
        Ok(Self::new(backend, actor, item))
    }

    pub fn schedule_ctrl(&self) -> ScheduleCtrl {
        ScheduleCtrl(self.0.clone())
    }

    pub fn actor(&self) -> &Actor {
        &self.0.actor
    }

    pub fn id(&self) -> i64 {
        self.0.item.read().id
    }

    /// A snapshot of the last-known-good item.
    pub fn item(&self) -> ContentItem {
        self.0.item.read().clone()
    }

    pub fn status(&self) -> State {
        self.0.item.read().status
    }

    pub fn descriptor(&self) -> &'static StatusDescriptor {
        self.status().descriptor()
    }

    /// Whether a request for this item is still outstanding.
    pub fn is_busy(&self) -> bool {
        self.0.busy().is_some()
    }

    /// The states the actor may move the item into from its current
    /// state, as decided by the transition policy.
    pub fn available_actions(&self) -> States {
        TRANSITIONS.available(self.status(), self.0.actor.is_admin())
    }

    /// The transitions to offer as enabled controls; none are offered
    /// while a request is outstanding.
    pub fn transitions(&self) -> Vec<Transition> {
        if self.is_busy() {
            return Vec::new();
        }
        TRANSITIONS.transitions_for(self.status(), self.0.actor.is_admin())
    }

    /// Requests the content-service to move the item into `target`.
    ///
    /// On success the returned item becomes the new source of truth; on
    /// failure the item is left unchanged and the error names the
    /// action that failed.
    pub async fn transition(&self, target: State) -> Result<ContentItem, CtrlError> {
        let action = Action::for_target(target);
        let _guard = self.0.claim(action)?;
        let current = self.status();
        if !self.available_actions().contains(target) {
            log::debug!(
                "item {}: {current} -> {target} not available to {}",
                self.id(),
                self.0.actor.name,
            );
            return Err(CtrlError::TransitionDenied {
                from: current,
                to: target,
            });
        }

        let id = self.id();
        log::trace!("item {id}: requesting {action} as {}", self.0.actor.name);
        let backend = &self.0.backend;
        let result = match target {
            State::Review => backend.submit_for_review(id).await,
            State::Published => backend.publish(id).await,
            State::Draft => backend.unpublish(id).await,
        };
        let item = self.0.adopt(action, result)?;
        if item.status != target {
            log::warn!(
                "item {id}: content-service reported {} after {action}",
                item.status,
            );
        }
        Ok(item)
    }

    pub async fn submit_for_review(&self) -> Result<ContentItem, CtrlError> {
        self.transition(State::Review).await
    }

    pub async fn publish(&self) -> Result<ContentItem, CtrlError> {
        self.transition(State::Published).await
    }

    pub async fn unpublish(&self) -> Result<ContentItem, CtrlError> {
        self.transition(State::Draft).await
    }
}

impl std::fmt::Debug for WorkflowCtrl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let in_flight = self.0.busy();
        let item = self.item();
        f.debug_struct("WorkflowCtrl")
            .field("actor", &self.0.actor)
            .field("item", &item)
            .field("in_flight", &in_flight)
            .finish()
    }
}
