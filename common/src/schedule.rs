//! Cancellable timers.
//!
//! The filter synchronizer only needs "run this later" and "never mind". The
//! browser build backs this with `setTimeout`; [`ManualScheduler`] is a virtual
//! clock that native drivers and tests advance by hand.

use std::{cell::RefCell, rc::Rc, time::Duration};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

pub trait Scheduler {
    fn schedule_after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;

    /// Cancelling a timer that already fired or was already cancelled is a no-op.
    fn cancel(&self, handle: TimerHandle);
}

struct PendingTimer {
    handle: TimerHandle,
    deadline: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending_count(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves the clock forward, firing every timer whose deadline is reached.
    /// Timers fire in deadline order, ties in scheduling order. Callbacks may
    /// schedule further timers; those fire too if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let due = {
                let mut clock = self.clock.borrow_mut();
                let next = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.deadline <= target)
                    .min_by_key(|(_, timer)| (timer.deadline, timer.handle))
                    .map(|(index, _)| index);
                match next {
                    Some(index) => {
                        let timer = clock.pending.remove(index);
                        clock.now = timer.deadline;
                        Some(timer)
                    }
                    None => None,
                }
            };
            // the borrow is released before the callback runs
            match due {
                Some(timer) => {
                    debug!(handle = timer.handle.0, at_ms = timer.deadline.as_millis() as u64, "timer fired");
                    (timer.callback)();
                }
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        let handle = TimerHandle(clock.next_id);
        let deadline = clock.now + delay;
        clock.pending.push(PendingTimer { handle, deadline, callback });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.clock.borrow_mut().pending.retain(|timer| timer.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log2 = log.clone();
        let make = move |name: &'static str| -> Box<dyn FnOnce()> {
            let log = log2.clone();
            Box::new(move || log.borrow_mut().push(name))
        };
        (log, make)
    }

    #[test]
    fn fires_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();
        scheduler.schedule_after(Duration::from_millis(300), make("late"));
        scheduler.schedule_after(Duration::from_millis(100), make("early"));
        scheduler.schedule_after(Duration::from_millis(100), make("early-second"));

        scheduler.advance(Duration::from_millis(99));
        assert!(log.borrow().is_empty());
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*log.borrow(), vec!["early", "early-second"]);
        scheduler.advance(Duration::from_millis(500));
        assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(600));
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();
        let handle = scheduler.schedule_after(Duration::from_millis(10), make("cancelled"));
        scheduler.cancel(handle);
        scheduler.cancel(handle);
        scheduler.advance(Duration::from_secs(1));
        assert!(log.borrow().is_empty());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn callbacks_can_schedule_more_timers() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let inner_scheduler = scheduler.clone();
        let inner_hits = hits.clone();
        scheduler.schedule_after(
            Duration::from_millis(10),
            Box::new(move || {
                inner_hits.set(inner_hits.get() + 1);
                let hits = inner_hits.clone();
                inner_scheduler.schedule_after(Duration::from_millis(10), Box::new(move || hits.set(hits.get() + 1)));
            }),
        );
        scheduler.advance(Duration::from_millis(15));
        assert_eq!(hits.get(), 1);
        scheduler.advance(Duration::from_millis(5));
        assert_eq!(hits.get(), 2);
    }
}
