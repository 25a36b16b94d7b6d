//! Debounce Utility
//!
//! Trailing-edge debounce over an injectable timer. Every `push` cancels
//! the previously scheduled emission, so only the last value that stayed
//! put for the full delay is ever emitted.

use std::cell::Cell;
use std::rc::Rc;

/// Task handed to a scheduler
pub type TimerTask = Box<dyn FnOnce() + 'static>;

/// Handle to a scheduled task
pub trait TimerHandle {
    /// Cancel the task if it has not run yet
    fn cancel(self);
}

/// Something that can run a task after a delay
pub trait TimerScheduler {
    type Handle: TimerHandle;

    fn schedule(&self, delay_ms: u32, task: TimerTask) -> Self::Handle;
}

/// Trailing-edge debouncer emitting through a callback
pub struct Debouncer<T: 'static, S: TimerScheduler> {
    scheduler: S,
    delay_ms: u32,
    emit: Rc<dyn Fn(T)>,
    pending: Option<S::Handle>,
    /// Bumped on every push/cancel; a task only emits if it still matches
    generation: Rc<Cell<u64>>,
}

impl<T: 'static, S: TimerScheduler> Debouncer<T, S> {
    pub fn new(scheduler: S, delay_ms: u32, emit: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            emit: Rc::new(emit),
            pending: None,
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Restart the delay with a new value
    pub fn push(&mut self, value: T) {
        self.cancel();

        let generation = self.generation.clone();
        let scheduled_for = generation.get();
        let emit = self.emit.clone();
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                if generation.get() == scheduled_for {
                    emit(value);
                }
            }),
        );
        self.pending = Some(handle);
    }

    /// Drop whatever is pending without emitting it
    pub fn cancel(&mut self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

impl<T: 'static, S: TimerScheduler> Drop for Debouncer<T, S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    //! Deterministic scheduler driven by `advance`

    use super::*;
    use std::cell::RefCell;

    struct Entry {
        id: u64,
        due: u64,
        task: TimerTask,
    }

    #[derive(Default)]
    struct Inner {
        now: u64,
        next_id: u64,
        queue: Vec<Entry>,
        cancelled: u64,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    pub struct ManualHandle {
        id: u64,
        inner: Rc<RefCell<Inner>>,
    }

    impl TimerHandle for ManualHandle {
        fn cancel(self) {
            let mut inner = self.inner.borrow_mut();
            let before = inner.queue.len();
            inner.queue.retain(|e| e.id != self.id);
            if inner.queue.len() != before {
                inner.cancelled += 1;
            }
        }
    }

    impl TimerScheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: TimerTask) -> ManualHandle {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let due = inner.now + u64::from(delay_ms);
            inner.queue.push(Entry { id, due, task });
            ManualHandle { id, inner: self.inner.clone() }
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.inner.borrow().queue.len()
        }

        pub fn cancelled(&self) -> u64 {
            self.inner.borrow().cancelled
        }

        /// Move the clock forward, running due tasks in due order
        pub fn advance(&self, ms: u64) {
            let target = self.inner.borrow().now + ms;
            loop {
                let next = {
                    let mut inner = self.inner.borrow_mut();
                    let due_idx = inner
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due <= target)
                        .min_by_key(|(_, e)| (e.due, e.id))
                        .map(|(i, _)| i);
                    match due_idx {
                        Some(i) => {
                            let entry = inner.queue.remove(i);
                            inner.now = entry.due;
                            Some(entry.task)
                        }
                        None => {
                            inner.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
        }
    }
}
