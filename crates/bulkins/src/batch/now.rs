use crate::Clock;

use jiff::Timestamp;

/// Holds the batch timestamp for the duration of one assembly.
///
/// The timestamp is captured once on entry and the slot is reset when the
/// scope is dropped, on success and on every error path alike.
pub(super) struct BatchNow<'a> {
    slot: &'a mut Option<Timestamp>,
    now: Timestamp,
}

impl<'a> BatchNow<'a> {
    pub(super) fn enter(slot: &'a mut Option<Timestamp>, clock: &dyn Clock) -> Self {
        let now = clock.now();
        *slot = Some(now);
        Self { slot, now }
    }

    pub(super) fn get(&self) -> Timestamp {
        self.now
    }
}

impl Drop for BatchNow<'_> {
    fn drop(&mut self) {
        *self.slot = None;
    }
}
