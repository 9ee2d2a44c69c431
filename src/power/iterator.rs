// src/power/iterator.rs
//! The power iterator: a rank vector repeatedly multiplied by a fixed matrix.

use std::time::Duration;

use super::scheduler::{Scheduler, TaskHandle};
use super::state::{period_for, Progress, RunState};
use crate::error::Result;
use crate::graph::{Network, RankVector};
use crate::linalg::{self, Matrix};

/// Invoked after every timed tick with a copy of the new rank vector.
pub type TickCallback = Box<dyn FnMut(&RankVector)>;

/// Steppable, pausable power iteration over one matrix snapshot.
///
/// The matrix and labels are copied out of the [`Network`] on
/// [`reset_with`](Self::reset_with); later changes to the network have no
/// effect until the next reset.
pub struct PowerIterator<S: Scheduler> {
    matrix: Matrix,
    labels: Vec<String>,
    r: Vec<f64>,
    max_iter: usize,
    iter_speed: f64,
    current_step: usize,
    state: RunState,
    scheduler: S,
    task: Option<TaskHandle>,
    callback: Option<TickCallback>,
}

impl<S: Scheduler> PowerIterator<S> {
    /// An iterator over the empty graph.
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self {
            matrix: Matrix::default(),
            labels: Vec::new(),
            r: Vec::new(),
            max_iter: 0,
            iter_speed: 1.0,
            current_step: 0,
            state: RunState::Paused,
            scheduler,
            task: None,
            callback: None,
        }
    }

    /// Builds an iterator already reset onto `network`.
    #[must_use]
    pub fn with_network(network: &mut Network, max_iter: usize, iter_speed: f64, scheduler: S) -> Self {
        let mut it = Self::new(scheduler);
        it.reset_with(network, max_iter, iter_speed);
        it
    }

    /// Takes a fresh snapshot of `network`'s selected matrix and restarts
    /// from the uniform vector, paused.
    pub fn reset_with(&mut self, network: &mut Network, max_iter: usize, iter_speed: f64) {
        self.cancel_timer();
        self.matrix = network.matrix().clone();
        self.labels = network.nodes().to_vec();
        self.max_iter = max_iter;
        self.iter_speed = iter_speed;
        self.restart();

        log::debug!(
            "power iterator reset: dim {}, formula {}, max_iter {}, speed {}/s",
            self.matrix.dim(),
            network.formula(),
            max_iter,
            iter_speed
        );
    }

    /// Restarts on the current snapshot: uniform vector, step 0, paused.
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.restart();
        log::debug!("power iterator restarted");
    }

    /// One step: `r ← M·r`. Returns the new vector.
    ///
    /// Not bounded by `max_iter`; only timed playback stops on its own.
    ///
    /// # Errors
    /// Returns [`RankerError::DimensionMismatch`](crate::error::RankerError::DimensionMismatch)
    /// if the vector and matrix disagree in size.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&[f64]> {
        let next = self.matrix.mul_vec(&self.r)?;
        self.r = next;
        self.current_step += 1;
        log::trace!("step {}: {:?}", self.current_step, self.r);
        Ok(&self.r)
    }

    /// Runs `count` steps back to back.
    ///
    /// # Errors
    /// Propagates the first failing step.
    pub fn iterate(&mut self, count: usize) -> Result<&[f64]> {
        for _ in 0..count {
            self.next()?;
        }
        Ok(&self.r)
    }

    /// Starts timed playback at `iter_speed` steps per second.
    ///
    /// Each tick steps once and hands the new vector to `callback`. The tick
    /// that begins at step `max_iter - 1` or later cancels the timer, still
    /// steps, and leaves the iterator paused, so an uninterrupted run ends at
    /// exactly `max_iter`. Does nothing once `max_iter` has been reached.
    pub fn run(&mut self, callback: impl FnMut(&RankVector) + 'static) {
        if self.is_completed() {
            log::warn!("run ignored: already at step {}/{}", self.current_step, self.max_iter);
            return;
        }

        self.callback = Some(Box::new(callback));
        if self.task.is_none() {
            let period = self.period();
            self.task = Some(self.scheduler.start(period));
            log::debug!("playback started, period {period:?}");
        }
        self.state = RunState::Running;
    }

    /// Fires every tick the scheduler reports as due. Returns how many fired.
    ///
    /// # Errors
    /// Propagates the first failing step.
    pub fn pump(&mut self) -> Result<u32> {
        let Some(task) = self.task else {
            return Ok(0);
        };

        let due = self.scheduler.due(task);
        let mut fired = 0;
        for _ in 0..due {
            if self.task.is_none() {
                break;
            }
            self.tick()?;
            fired += 1;
        }
        Ok(fired)
    }

    /// Stops timed playback. Safe to call when already paused.
    pub fn pause(&mut self) {
        self.cancel_timer();
        self.callback = None;
        self.state = RunState::Paused;
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    #[must_use]
    pub fn iter_speed(&self) -> f64 {
        self.iter_speed
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        period_for(self.iter_speed)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.current_step >= self.max_iter
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            current_step: self.current_step,
            max_iter: self.max_iter,
            state: self.state,
        }
    }

    /// Read-only view of the current vector in canonical node order.
    #[must_use]
    pub fn ranks(&self) -> &[f64] {
        &self.r
    }

    /// Copy of the current vector keyed by node label.
    #[must_use]
    pub fn rank_vector(&self) -> RankVector {
        RankVector::new(&self.labels, &self.r)
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Time until the next timed tick, if playback is running.
    #[must_use]
    pub fn next_tick_in(&self) -> Option<Duration> {
        self.task.and_then(|t| self.scheduler.next_due_in(t))
    }

    fn tick(&mut self) -> Result<()> {
        let finishing = self.current_step >= self.max_iter.saturating_sub(1);
        if finishing {
            self.cancel_timer();
        }

        if let Err(err) = self.next() {
            self.pause();
            return Err(err);
        }

        let ranks = self.rank_vector();
        if let Some(callback) = self.callback.as_mut() {
            callback(&ranks);
        }

        if finishing {
            self.callback = None;
            self.state = RunState::Paused;
            log::debug!("playback finished at step {}/{}", self.current_step, self.max_iter);
        }
        Ok(())
    }

    fn restart(&mut self) {
        self.r = linalg::uniform(self.matrix.dim());
        self.current_step = 0;
        self.callback = None;
        self.state = RunState::Paused;
    }

    fn cancel_timer(&mut self) {
        if let Some(task) = self.task.take() {
            self.scheduler.cancel(task);
            log::debug!("playback timer cancelled");
        }
    }
}
