//! Virtual clock for driving hover-intent timers in tests.

use std::cell::RefCell;
use std::rc::Rc;

use super::hover_intent::{Scheduler, TimerHandle};

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

struct Entry {
    id: u64,
    due_ms: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

pub(crate) struct ManualHandle {
    id: u64,
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    /// Moves the clock forward, firing due callbacks in deadline order.
    pub(crate) fn advance(&self, ms: u64) {
        let target = self.queue.borrow().now_ms + ms;
        loop {
            let due = {
                let mut queue = self.queue.borrow_mut();
                let next = queue
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due_ms <= target)
                    .min_by_key(|(_, entry)| (entry.due_ms, entry.id))
                    .map(|(index, _)| index);
                match next {
                    Some(index) => {
                        let entry = queue.entries.remove(index);
                        queue.now_ms = entry.due_ms;
                        Some(entry.callback)
                    }
                    None => {
                        queue.now_ms = target;
                        None
                    }
                }
            };
            // The queue borrow is released before running user code.
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
    }

    pub(crate) fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due_ms = queue.now_ms + u64::from(delay_ms);
        queue.entries.push(Entry {
            id,
            due_ms,
            callback,
        });
        ManualHandle {
            id,
            queue: Rc::clone(&self.queue),
        }
    }
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        self.queue
            .borrow_mut()
            .entries
            .retain(|entry| entry.id != self.id);
    }
}
