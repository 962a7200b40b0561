use chrono::{DateTime, Utc};
use cmscore::{
    content::ContentItem,
    schedule::is_future,
    workflow::State,
};

use crate::{
    chrono as clock,
    error::{
        Action,
        CtrlError,
        ScheduleError,
    },
    handle::ScheduleCtrl,
};

impl ScheduleCtrl {
    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.0.item.read().scheduled_at
    }

    /// Whether scheduling applies to the item at all; it never does
    /// once the item is published.
    pub fn is_active(&self) -> bool {
        self.0.item.read().status != State::Published
    }

    /// Records the intent to publish the item at `at`, replacing any
    /// existing schedule.
    ///
    /// `at` must be strictly later than now and the item must not be
    /// published; both are checked before the content-service is
    /// contacted, the latter only once the in-flight slot is held.
    pub async fn schedule(&self, at: DateTime<Utc>) -> Result<ContentItem, CtrlError> {
        let now = clock::Utc::now();
        if !is_future(at, now) {
            log::debug!("rejecting schedule at {at}, now is {now}");
            return Err(ScheduleError::NotInFuture { at, now }.into());
        }

        let _guard = self.0.claim(Action::Schedule)?;
        let (id, status, previous) = {
            let item = self.0.item.read();
            (item.id, item.status, item.scheduled_at)
        };
        if status == State::Published {
            return Err(ScheduleError::Published.into());
        }
        if let Some(previous) = previous {
            log::info!("item {id}: replacing schedule for {previous} with {at}");
        }
        let result = self.0.backend.schedule_publish(id, at).await;
        self.0.adopt(Action::Schedule, result)
    }

    /// Removes the pending schedule.
    ///
    /// Returns `Ok(false)` without contacting the content-service when
    /// there is no schedule to cancel.
    pub async fn cancel(&self) -> Result<bool, CtrlError> {
        let (id, scheduled_at) = {
            let item = self.0.item.read();
            (item.id, item.scheduled_at)
        };
        if scheduled_at.is_none() {
            log::debug!("item {id}: no schedule to cancel");
            return Ok(false);
        }

        let _guard = self.0.claim(Action::CancelSchedule)?;
        let result = self.0.backend.cancel_schedule(id).await;
        self.0.adopt(Action::CancelSchedule, result)?;
        Ok(true)
    }
}
