use std::{cell::RefCell, rc::Rc, time::Duration};

use leptos::{logging, set_timeout_with_handle};

type ClearTimer = Box<dyn FnOnce()>;

#[derive(Clone, Default)]
/// Single pending timeout; scheduling again clears the previous one.
pub(super) struct TimerSlot {
    pending: Rc<RefCell<Option<ClearTimer>>>,
}

impl TimerSlot {
    pub(super) fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.cancel();
        let pending = self.pending.clone();
        let fire = move || {
            pending.borrow_mut().take();
            callback();
        };
        match set_timeout_with_handle(fire, Duration::from_millis(u64::from(delay_ms))) {
            Ok(handle) => self.arm(move || handle.clear()),
            Err(err) => logging::warn!("failed to schedule simulator timer: {err:?}"),
        }
    }

    /// Stores `clear` as the pending timer, clearing whatever was pending before.
    fn arm(&self, clear: impl FnOnce() + 'static) {
        let previous = self.pending.borrow_mut().replace(Box::new(clear));
        if let Some(previous) = previous {
            previous();
        }
    }

    pub(super) fn cancel(&self) {
        let pending = self.pending.borrow_mut().take();
        if let Some(clear) = pending {
            clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let cleared = Rc::new(Cell::new(0));
        let hook = cleared.clone();
        (cleared, move || hook.set(hook.get() + 1))
    }

    #[test]
    fn arming_again_clears_the_previous_timer_only() {
        let slot = TimerSlot::default();
        let (first, clear_first) = counter();
        let (second, clear_second) = counter();

        slot.arm(clear_first);
        slot.arm(clear_second);

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn cancel_clears_pending_timer_once() {
        let slot = TimerSlot::default();
        let (cleared, clear) = counter();

        slot.arm(clear);
        slot.clone().cancel();
        slot.cancel();

        assert_eq!(cleared.get(), 1);
    }
}
