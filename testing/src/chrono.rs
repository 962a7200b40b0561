//! A stand-in for `chrono::Utc` whose notion of "now" may be pinned by
//! the test currently running on this thread.

use ::chrono::{
    DateTime,
    Duration,
};
use std::cell::Cell;

thread_local! {
    static NOW: Cell<Option<DateTime<::chrono::Utc>>> = const { Cell::new(None) };
}

pub struct Utc;

impl Utc {
    /// The pinned instant if one is set, otherwise the real clock.
    pub fn now() -> DateTime<::chrono::Utc> {
        NOW.with(|now| now.get())
            .unwrap_or_else(::chrono::Utc::now)
    }

    pub fn set_now(now: DateTime<::chrono::Utc>) {
        NOW.with(|cell| cell.set(Some(now)));
    }

    /// Pins the clock at the current real instant and returns it.
    pub fn freeze() -> DateTime<::chrono::Utc> {
        let now = ::chrono::Utc::now();
        Self::set_now(now);
        now
    }

    pub fn advance(duration: Duration) -> DateTime<::chrono::Utc> {
        let now = Self::now() + duration;
        Self::set_now(now);
        now
    }

    pub fn reset() {
        NOW.with(|cell| cell.set(None));
    }
}
