//! Browser timers for the filter synchronizer.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
    time::Duration,
};

use common::schedule::{Scheduler, TimerHandle};
use gloo_timers::callback::Timeout;

struct LiveTimeout {
    // dropping a `Timeout` clears it
    _timeout: Timeout,
    finished: Rc<Cell<bool>>,
}

#[derive(Default)]
struct TimerTable {
    next_id: u64,
    live: HashMap<u64, LiveTimeout>,
}

/// `setTimeout` based [`Scheduler`].
///
/// A timeout is never dropped from inside its own callback: finished entries
/// are only pruned on the next `schedule_after`.
#[derive(Clone, Default)]
pub struct GlooScheduler {
    table: Rc<RefCell<TimerTable>>,
}

impl Scheduler for GlooScheduler {
    fn schedule_after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let mut table = self.table.borrow_mut();
        table.live.retain(|_, timer| !timer.finished.get());
        table.next_id += 1;
        let id = table.next_id;

        let finished = Rc::new(Cell::new(false));
        let finished_flag = finished.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            callback();
            finished_flag.set(true);
        });
        table.live.insert(id, LiveTimeout { _timeout: timeout, finished });
        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let removed = {
            let mut table = self.table.borrow_mut();
            match table.live.get(&handle.0) {
                Some(timer) if !timer.finished.get() => table.live.remove(&handle.0),
                _ => None,
            }
        };
        drop(removed);
    }
}
