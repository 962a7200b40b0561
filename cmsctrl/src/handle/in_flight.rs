use parking_lot::Mutex;

use crate::error::{
    Action,
    CtrlError,
};
use super::RawWorkflowCtrl;

/// Holds the in-flight slot of an item until dropped, whether the
/// request it guards succeeded or not.
pub(crate) struct InFlightGuard<'a> {
    slot: &'a Mutex<Option<Action>>,
    action: Action,
}

impl RawWorkflowCtrl {
    pub(crate) fn claim(&self, action: Action) -> Result<InFlightGuard<'_>, CtrlError> {
        let id = self.item.read().id;
        let mut slot = self.in_flight.lock();
        if let Some(current) = *slot {
            log::debug!("item {id}: {action} refused while {current} is in flight");
            return Err(CtrlError::InFlight(current));
        }
        *slot = Some(action);
        Ok(InFlightGuard {
            slot: &self.in_flight,
            action,
        })
    }

    pub(crate) fn busy(&self) -> Option<Action> {
        *self.in_flight.lock()
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        log::trace!("{} settled", self.action);
        self.slot.lock().take();
    }
}
