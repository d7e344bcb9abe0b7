//! Cancellable delayed tasks and a debounce combinator on top of them.
//!
//! Everything here is generic over [`Scheduler`] so the logic can be driven
//! by a virtual clock in tests; in the browser it's backed by gloo timers.

use std::cell::RefCell;
use std::rc::Rc;

pub trait Scheduler {
    /// Dropping the handle cancels the task if it hasn't fired yet.
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` via gloo; `Timeout` clears itself on drop.
#[derive(Clone, Copy, Default)]
pub struct WebScheduler;

impl Scheduler for WebScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

/// Holds at most one pending task. Arming it again drops (cancels) the old one.
pub struct TaskSlot<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> TaskSlot<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn arm(&mut self, delay_ms: u32, task: impl FnOnce() + 'static) {
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(delay_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Delivers only the last argument of a burst, once `wait_ms` passed without a new call.
pub struct Debounced<S: Scheduler, A> {
    wait_ms: u32,
    slot: Rc<RefCell<TaskSlot<S>>>,
    f: Rc<dyn Fn(A)>,
}

impl<S: Scheduler, A: 'static> Debounced<S, A> {
    pub fn new(scheduler: S, wait_ms: u32, f: impl Fn(A) + 'static) -> Self {
        Self {
            wait_ms,
            slot: Rc::new(RefCell::new(TaskSlot::new(scheduler))),
            f: Rc::new(f),
        }
    }

    pub fn call(&self, arg: A) {
        let f = self.f.clone();
        self.slot
            .borrow_mut()
            .arm(self.wait_ms, move || f(arg));
    }
}

impl<S: Scheduler, A> Clone for Debounced<S, A> {
    fn clone(&self) -> Self {
        Self {
            wait_ms: self.wait_ms,
            slot: self.slot.clone(),
            f: self.f.clone(),
        }
    }
}

#[cfg(test)]
pub mod manual {
    //! Virtual-clock scheduler for driving timers from tests.

    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Queued {
        due: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Cell<u64>,
        seq: Cell<u64>,
        queue: RefCell<Vec<Queued>>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<Clock>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        /// Moves the clock forward, running due tasks in order.
        pub fn advance(&self, ms: u64) {
            let target = self.clock.now.get() + ms;
            loop {
                let next = {
                    let mut queue = self.clock.queue.borrow_mut();
                    queue.retain(|q| !q.cancelled.get());
                    let idx = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, q)| q.due <= target)
                        .min_by_key(|(_, q)| (q.due, q.seq))
                        .map(|(i, _)| i);
                    idx.map(|i| queue.remove(i))
                };

                let Some(q) = next else { break };
                self.clock.now.set(q.due);
                // fired tasks can't be cancelled by their handle any more
                q.cancelled.set(true);
                (q.task)();
            }
            self.clock.now.set(target);
        }

        pub fn pending(&self) -> usize {
            self.clock
                .queue
                .borrow()
                .iter()
                .filter(|q| !q.cancelled.get())
                .count()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let seq = self.clock.seq.get();
            self.clock.seq.set(seq + 1);
            self.clock.queue.borrow_mut().push(Queued {
                due: self.clock.now.get() + delay_ms as u64,
                seq,
                cancelled: cancelled.clone(),
                task,
            });
            ManualHandle { cancelled }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;

    #[test]
    fn slot_fires_once_after_delay() {
        let clock = ManualScheduler::default();
        let hits = Rc::new(RefCell::new(0));
        let mut slot = TaskSlot::new(clock.clone());

        let h = hits.clone();
        slot.arm(500, move || *h.borrow_mut() += 1);

        clock.advance(499);
        assert_eq!(*hits.borrow(), 0);
        clock.advance(1);
        assert_eq!(*hits.borrow(), 1);
        clock.advance(10_000);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn rearming_cancels_the_previous_task() {
        let clock = ManualScheduler::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TaskSlot::new(clock.clone());

        let l = log.clone();
        slot.arm(100, move || l.borrow_mut().push("first"));
        clock.advance(50);
        let l = log.clone();
        slot.arm(100, move || l.borrow_mut().push("second"));

        clock.advance(60);
        assert!(log.borrow().is_empty());
        clock.advance(40);
        assert_eq!(*log.borrow(), vec!["second"]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn dropping_the_slot_cancels() {
        let clock = ManualScheduler::default();
        let hits = Rc::new(RefCell::new(0));
        {
            let mut slot = TaskSlot::new(clock.clone());
            let h = hits.clone();
            slot.arm(10, move || *h.borrow_mut() += 1);
        }
        clock.advance(100);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn debounce_delivers_last_value_after_quiet_window() {
        let clock = ManualScheduler::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let debounced = Debounced::new(clock.clone(), 100, move |v: u32| s.borrow_mut().push(v));

        for v in [10, 20, 30] {
            debounced.call(v);
            clock.advance(40);
        }
        assert!(seen.borrow().is_empty(), "burst still going");

        clock.advance(60);
        assert_eq!(*seen.borrow(), vec![30]);

        debounced.call(99);
        clock.advance(100);
        assert_eq!(*seen.borrow(), vec![30, 99]);
    }

    #[test]
    fn debounce_clones_share_one_window() {
        let clock = ManualScheduler::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let a = Debounced::new(clock.clone(), 100, move |v: &'static str| s.borrow_mut().push(v));
        let b = a.clone();

        a.call("a");
        clock.advance(50);
        b.call("b");
        clock.advance(100);
        assert_eq!(*seen.borrow(), vec!["b"]);
    }
}
