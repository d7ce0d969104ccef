use gloo_timers::callback::Interval;
use log::info;

use crate::config;
use crate::error::ControllerError;

/// Source of periodic callbacks. Dropping a handle cancels its interval.
pub trait Scheduler {
    type Handle;

    fn schedule(
        &self,
        interval_ms: u32,
        callback: Box<dyn FnMut()>,
    ) -> Result<Self::Handle, ControllerError>;
}

/// Intervals on the browser's event loop.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Interval;

    fn schedule(
        &self,
        interval_ms: u32,
        callback: Box<dyn FnMut()>,
    ) -> Result<Interval, ControllerError> {
        if web_sys::window().is_none() {
            return Err(ControllerError::TimerUnavailable { interval_ms });
        }
        Ok(Interval::new(interval_ms, callback))
    }
}

/// The two page timers, owned together. Both are released on drop, and
/// stopping either one more than once is a no-op.
pub struct PageTimers<S: Scheduler> {
    carousel: Option<S::Handle>,
    countdown: Option<S::Handle>,
}

impl<S: Scheduler> PageTimers<S> {
    pub fn start<A, T>(scheduler: &S, on_advance: A, on_tick: T) -> Result<Self, ControllerError>
    where
        A: FnMut() + 'static,
        T: FnMut() + 'static,
    {
        let carousel = scheduler.schedule(config::SLIDE_INTERVAL_MS, Box::new(on_advance))?;
        // If this fails the carousel handle is dropped here, so no timer outlives the error.
        let countdown = scheduler.schedule(config::COUNTDOWN_TICK_MS, Box::new(on_tick))?;
        Ok(Self {
            carousel: Some(carousel),
            countdown: Some(countdown),
        })
    }

    #[cfg(test)]
    pub fn is_carousel_running(&self) -> bool {
        self.carousel.is_some()
    }

    #[cfg(test)]
    pub fn is_countdown_running(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn stop_carousel(&mut self) {
        if self.carousel.take().is_some() {
            info!("Stopped carousel timer");
        }
    }

    pub fn stop_countdown(&mut self) {
        if self.countdown.take().is_some() {
            info!("Stopped countdown timer");
        }
    }

    pub fn stop(&mut self) {
        self.stop_carousel();
        self.stop_countdown();
    }
}

impl<S: Scheduler> Drop for PageTimers<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::Scheduler;
    use crate::error::ControllerError;

    type SharedCallback = Rc<RefCell<Box<dyn FnMut()>>>;

    struct Entry {
        id: u64,
        interval_ms: u64,
        next_due: u64,
        callback: SharedCallback,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        entries: Vec<Entry>,
        refuse_after: Option<usize>,
    }

    /// Simulated clock for driving timers deterministically in tests.
    #[derive(Default, Clone)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().entries.retain(|e| e.id != self.id);
            }
        }
    }

    impl ManualScheduler {
        /// Scheduler that refuses every request once `count` intervals exist.
        pub fn refusing_after(count: usize) -> Self {
            let scheduler = Self::default();
            scheduler.clock.borrow_mut().refuse_after = Some(count);
            scheduler
        }

        pub fn active(&self) -> usize {
            self.clock.borrow().entries.len()
        }

        /// Moves time forward, firing every due callback in order.
        pub fn advance_by(&self, ms: u64) {
            let target = self.clock.borrow().now + ms;
            loop {
                let due = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .entries
                        .iter_mut()
                        .filter(|e| e.next_due <= target)
                        .min_by_key(|e| (e.next_due, e.id));
                    match next {
                        Some(entry) => {
                            let at = entry.next_due;
                            entry.next_due += entry.interval_ms;
                            Some((at, entry.callback.clone()))
                        }
                        None => None,
                    }
                };
                match due {
                    Some((at, callback)) => {
                        self.clock.borrow_mut().now = at;
                        let mut callback = callback.borrow_mut();
                        (&mut **callback)();
                    }
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(
            &self,
            interval_ms: u32,
            callback: Box<dyn FnMut()>,
        ) -> Result<ManualHandle, ControllerError> {
            let mut clock = self.clock.borrow_mut();
            if clock.refuse_after.map_or(false, |limit| clock.entries.len() >= limit) {
                return Err(ControllerError::TimerUnavailable { interval_ms });
            }
            let id = clock.next_id;
            clock.next_id += 1;
            let next_due = clock.now + u64::from(interval_ms);
            clock.entries.push(Entry {
                id,
                interval_ms: u64::from(interval_ms),
                next_due,
                callback: Rc::new(RefCell::new(callback)),
            });
            Ok(ManualHandle {
                id,
                clock: Rc::downgrade(&self.clock),
            })
        }
    }
}
