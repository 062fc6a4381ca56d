//! Request scheduler shared by every gallery instance on a page.
//!
//! The listing API rate-limits aggressively, so all folder fetches go
//! through one scheduler that runs them strictly one at a time and keeps
//! a minimum gap between a completed request and the next one. The
//! scheduler is an explicit value owned by the page container and passed
//! down (or provided via context), never hidden module state, so tests
//! can substitute a synchronous clock and sleeper.

use std::rc::Rc;
use std::time::Duration;

use crate::service::{DelaySleeper, Sleeper};

/// Minimum enforced delay between consecutive outbound requests.
pub const MIN_REQUEST_GAP_MS: u64 = 1000;

/// Millisecond clock. Injected so throttle tests run without real time.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Real clock: monotonic on native targets, `Date.now()` in the browser
/// (wasm has no std monotonic clock).
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() as u64
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::sync::OnceLock;
            use std::time::Instant;

            static START: OnceLock<Instant> = OnceLock::new();
            START.get_or_init(Instant::now).elapsed().as_millis() as u64
        }
    }
}

#[derive(Clone)]
pub struct RequestScheduler {
    min_gap_ms: u64,
    clock: Rc<dyn Clock>,
    sleeper: Rc<dyn Sleeper>,
    last_completed: Rc<tokio::sync::Mutex<Option<u64>>>,
}

impl RequestScheduler {
    pub fn new() -> Self {
        Self::with_parts(MIN_REQUEST_GAP_MS, Rc::new(MonotonicClock), Rc::new(DelaySleeper))
    }

    pub fn with_parts(min_gap_ms: u64, clock: Rc<dyn Clock>, sleeper: Rc<dyn Sleeper>) -> Self {
        Self {
            min_gap_ms,
            clock,
            sleeper,
            last_completed: Rc::new(tokio::sync::Mutex::new(None)),
        }
    }

    /// Run `request` under the scheduler: waits until the minimum gap
    /// since the last completed request has passed, holds the queue for
    /// the duration of the call, and stamps the completion time.
    pub async fn run<T, Fut>(&self, request: impl FnOnce() -> Fut) -> T
    where
        Fut: std::future::Future<Output = T>,
    {
        let mut last = self.last_completed.lock().await;

        if let Some(completed_at) = *last {
            let elapsed = self.clock.now_ms().saturating_sub(completed_at);
            if elapsed < self.min_gap_ms {
                let wait = self.min_gap_ms - elapsed;
                log::debug!("Throttling folder request for {}ms", wait);
                self.sleeper.sleep(Duration::from_millis(wait)).await;
            }
        }

        let value = request().await;
        *last = Some(self.clock.now_ms());
        value
    }
}

impl Default for RequestScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    #[derive(Clone)]
    struct FakeClock {
        now: Rc<Cell<u64>>,
    }

    impl Clock for FakeClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }
    }

    /// Sleeper that advances the fake clock instead of waiting.
    struct AdvancingSleeper {
        now: Rc<Cell<u64>>,
        slept: Rc<RefCell<Vec<u64>>>,
    }

    #[async_trait(?Send)]
    impl Sleeper for AdvancingSleeper {
        async fn sleep(&self, duration: Duration) {
            let ms = duration.as_millis() as u64;
            self.now.set(self.now.get() + ms);
            self.slept.borrow_mut().push(ms);
        }
    }

    fn scheduler() -> (RequestScheduler, Rc<Cell<u64>>, Rc<RefCell<Vec<u64>>>) {
        let now = Rc::new(Cell::new(0u64));
        let slept = Rc::new(RefCell::new(Vec::new()));
        let sched = RequestScheduler::with_parts(
            MIN_REQUEST_GAP_MS,
            Rc::new(FakeClock { now: now.clone() }),
            Rc::new(AdvancingSleeper {
                now: now.clone(),
                slept: slept.clone(),
            }),
        );
        (sched, now, slept)
    }

    #[tokio::test]
    async fn test_first_request_runs_immediately() {
        let (sched, _now, slept) = scheduler();

        sched.run(|| async { 1 }).await;

        assert!(slept.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_back_to_back_requests_are_spaced() {
        let (sched, now, slept) = scheduler();

        sched.run(|| async {}).await;
        let first_completed = now.get();
        sched.run(|| async {}).await;

        // Gap between the two call starts is a full throttle window.
        assert_eq!(*slept.borrow(), vec![MIN_REQUEST_GAP_MS]);
        assert!(now.get() - first_completed >= MIN_REQUEST_GAP_MS);
    }

    #[tokio::test]
    async fn test_elapsed_gap_is_credited() {
        let (sched, now, slept) = scheduler();

        sched.run(|| async {}).await;
        now.set(now.get() + 400);
        sched.run(|| async {}).await;

        assert_eq!(*slept.borrow(), vec![600]);
    }

    #[tokio::test]
    async fn test_no_wait_after_quiet_period() {
        let (sched, now, slept) = scheduler();

        sched.run(|| async {}).await;
        now.set(now.get() + 1500);
        sched.run(|| async {}).await;

        assert!(slept.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_requests_serialize() {
        let (sched, _now, slept) = scheduler();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let order = order.clone();
            sched.run(|| async move { order.borrow_mut().push("first") })
        };
        let second = {
            let order = order.clone();
            sched.run(|| async move { order.borrow_mut().push("second") })
        };
        tokio::join!(first, second);

        assert_eq!(*order.borrow(), vec!["first", "second"]);
        assert_eq!(*slept.borrow(), vec![MIN_REQUEST_GAP_MS]);
    }
}
