// src/power/scheduler.rs
//! Cancellable repeating timers for timed playback.
//!
//! Nothing here spawns threads or sleeps. A host loop asks the scheduler how
//! many periods of a task have elapsed and fires that many ticks, so the same
//! engine runs against a wall clock in the binary and a hand-advanced clock
//! in tests.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Shortest period a task may have. Zero-length periods would make every
/// poll report unbounded ticks.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Identifies one repeating task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// A source of repeating, cancellable ticks.
pub trait Scheduler {
    /// Starts a task firing every `period`, first due one period from now.
    fn start(&mut self, period: Duration) -> TaskHandle;

    /// Stops a task. Cancelling an unknown or already-cancelled handle is a no-op.
    fn cancel(&mut self, handle: TaskHandle);

    /// Ticks that have come due for `handle` since the previous call.
    /// Cancelled handles report zero.
    fn due(&mut self, handle: TaskHandle) -> u32;

    /// Time until the next tick of `handle`, or `None` if it is not active.
    fn next_due_in(&self, handle: TaskHandle) -> Option<Duration>;

    fn is_active(&self, handle: TaskHandle) -> bool;
}

/// Monotonic time measured from the clock's own origin.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now
    }
}

#[derive(Debug, Clone, Copy)]
struct Task {
    period: Duration,
    next_due: Duration,
}

/// Table of repeating tasks measured against a [`Clock`].
#[derive(Debug, Default)]
pub struct TimerQueue<C: Clock> {
    clock: C,
    next_id: u64,
    tasks: HashMap<TaskHandle, Task>,
}

/// Scheduler for tests and deterministic replay.
pub type ManualScheduler = TimerQueue<ManualClock>;

/// Real-time scheduler used for interactive playback.
pub type IntervalScheduler = TimerQueue<SystemClock>;

impl<C: Clock> TimerQueue<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }

    #[must_use]
    pub fn active_tasks(&self) -> usize {
        self.tasks.len()
    }
}

impl TimerQueue<ManualClock> {
    /// Moves the fake clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.clock.advance(by);
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn start(&mut self, period: Duration) -> TaskHandle {
        let period = period.max(MIN_PERIOD);
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.insert(
            handle,
            Task {
                period,
                next_due: self.clock.elapsed() + period,
            },
        );
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.tasks.remove(&handle);
    }

    fn due(&mut self, handle: TaskHandle) -> u32 {
        let now = self.clock.elapsed();
        let Some(task) = self.tasks.get_mut(&handle) else {
            return 0;
        };
        if now < task.next_due {
            return 0;
        }

        let behind = (now - task.next_due).as_nanos() / task.period.as_nanos();
        let count = u32::try_from(behind + 1).unwrap_or(u32::MAX);
        task.next_due += task.period * count;
        count
    }

    fn next_due_in(&self, handle: TaskHandle) -> Option<Duration> {
        let now = self.clock.elapsed();
        self.tasks
            .get(&handle)
            .map(|t| t.next_due.saturating_sub(now))
    }

    fn is_active(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(&handle)
    }
}
