use gloo_timers::callback::Timeout;
use yew::Callback;

use super::state::NavAction;

/// Something that can run a callback once after a delay.
pub trait Scheduler {
    type Handle: TimerHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// A pending deferred callback. Cancelling one that already fired is a no-op.
pub trait TimerHandle {
    fn cancel(self);
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

impl TimerHandle for Timeout {
    fn cancel(self) {
        let _ = Timeout::cancel(self);
    }
}

/// Debounces pointer enter/leave on the services dropdown.
///
/// Holds at most one pending close. Arming always cancels the previous
/// timer first, and dropping the debouncer cancels whatever is left.
pub struct HoverIntent<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> HoverIntent<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    pub fn enter(&mut self, sink: &Callback<NavAction>) {
        self.cancel();
        sink.emit(NavAction::PointerEntered);
    }

    pub fn leave(&mut self, sink: &Callback<NavAction>) {
        self.cancel();
        let sink = sink.clone();
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || sink.emit(NavAction::HoverCloseElapsed)),
        );
        self.pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

impl<S: Scheduler> Drop for HoverIntent<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
