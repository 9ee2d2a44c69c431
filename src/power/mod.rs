// src/power/mod.rs
//! Power iteration with step, pause, restart, and timed playback.

pub mod iterator;
pub mod scheduler;
pub mod state;

pub use iterator::{PowerIterator, TickCallback};
pub use scheduler::{
    Clock, IntervalScheduler, ManualClock, ManualScheduler, Scheduler, SystemClock, TaskHandle,
    TimerQueue,
};
pub use state::{Progress, RunState};
