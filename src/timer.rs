//! Browser Timers
//!
//! `setTimeout`-backed scheduler for the search debouncer.

use gloo_timers::callback::Timeout;
use voto_listing::{TimerHandle, TimerScheduler, TimerTask};

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

/// Pending `setTimeout`; dropping it also clears the timeout
pub struct GlooHandle(Timeout);

impl TimerHandle for GlooHandle {
    fn cancel(self) {
        let _ = self.0.cancel();
    }
}

impl TimerScheduler for GlooScheduler {
    type Handle = GlooHandle;

    fn schedule(&self, delay_ms: u32, task: TimerTask) -> GlooHandle {
        GlooHandle(Timeout::new(delay_ms, task))
    }
}
