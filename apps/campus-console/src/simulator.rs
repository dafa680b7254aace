//! # Progress Simulator
//!
//! Drives a [`StageTracker`] with a tokio timer.
//!
//! The simulator owns at most one ticker task. `start()` aborts and awaits the
//! previous ticker before beginning a new run, and dropping the simulator
//! aborts whatever is still ticking. Tick deadlines are fixed when the run is
//! triggered: tick `k` lands at `trigger + k * period`.
//!
//! The cursor is a function of the run clock. Readers and the ticker both
//! bring the tracker up to the stage due at the current instant, so a read
//! made exactly on a deadline already sees that stage. Every stage the
//! tracker passes is published once on the frame channel.

use campus_core::{ProgressState, ProgressView, StageList, StageTracker};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, broadcast};
use tokio::task::JoinHandle;
use tokio::time::Instant;

// =============================================================================
// RUN CLOCK
// =============================================================================

/// Trigger instant and period of one run.
#[derive(Debug, Clone, Copy)]
struct RunClock {
    run: u64,
    triggered_at: Instant,
    period: Duration,
}

impl RunClock {
    /// Stages due at `now`, capped at `total`.
    fn due(&self, now: Instant, total: usize) -> usize {
        if self.period.is_zero() {
            return total;
        }
        let elapsed = now.saturating_duration_since(self.triggered_at);
        let ticks = elapsed.as_nanos() / self.period.as_nanos();
        usize::try_from(ticks).unwrap_or(usize::MAX).min(total)
    }

    /// Advance `tracker` to the stage due at `now`, one frame per stage.
    ///
    /// Does nothing once another run has started.
    fn catch_up(
        &self,
        tracker: &mut StageTracker,
        now: Instant,
        frames: &broadcast::Sender<ProgressView>,
    ) -> ProgressState {
        if tracker.run() != self.run {
            return tracker.state();
        }

        let due = self.due(now, tracker.stages().len());
        while tracker.state().is_running() && tracker.cursor() < due {
            match tracker.advance(self.run) {
                ProgressState::Running { cursor } => {
                    tracing::debug!(run = self.run, cursor, "Stage complete");
                }
                ProgressState::Complete => {
                    tracing::info!(run = self.run, "Progress run complete");
                }
                ProgressState::Idle => {}
            }
            // No subscriber is not an error.
            let _ = frames.send(tracker.view());
        }

        tracker.state()
    }
}

// =============================================================================
// SIMULATOR
// =============================================================================

/// Timer-driven owner of the pipeline progress.
pub struct ProgressSimulator {
    tracker: Arc<RwLock<StageTracker>>,
    period: Duration,
    clock: Option<RunClock>,
    frames: broadcast::Sender<ProgressView>,
    ticker: Option<JoinHandle<()>>,
}

impl ProgressSimulator {
    /// Create an idle simulator.
    #[must_use]
    pub fn new(stages: StageList, period: Duration) -> Self {
        // Room for the start frame plus one frame per stage.
        let (frames, _) = broadcast::channel(stages.len().saturating_add(1));
        Self {
            tracker: Arc::new(RwLock::new(StageTracker::new(stages))),
            period,
            clock: None,
            frames,
            ticker: None,
        }
    }

    /// Begin a new run, cancelling any run still in flight.
    ///
    /// Returns the run number.
    pub async fn start(&mut self) -> u64 {
        self.cancel().await;

        let clock = {
            let mut tracker = self.tracker.write().await;
            let run = tracker.start();
            let _ = self.frames.send(tracker.view());
            RunClock {
                run,
                triggered_at: Instant::now(),
                period: self.period,
            }
        };
        self.clock = Some(clock);

        let total = self.tracker.read().await.stages().len();
        tracing::info!(
            run = clock.run,
            stages = total,
            period_ms = self.period.as_millis() as u64,
            "Progress run started"
        );

        let tracker = Arc::clone(&self.tracker);
        let frames = self.frames.clone();
        let first_tick = clock.triggered_at + self.period;

        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(first_tick, clock.period);
            loop {
                interval.tick().await;

                let mut tracker = tracker.write().await;
                if tracker.run() != clock.run {
                    break;
                }
                match clock.catch_up(&mut tracker, Instant::now(), &frames) {
                    ProgressState::Running { .. } => {}
                    ProgressState::Complete | ProgressState::Idle => break,
                }
            }
        }));

        clock.run
    }

    /// Abort the current ticker, if any, and wait for it to go away.
    async fn cancel(&mut self) {
        if let Some(handle) = self.ticker.take() {
            if !handle.is_finished() {
                handle.abort();
                tracing::debug!("Cancelled in-flight progress ticker");
            }
            // A cancelled task resolves to a JoinError; nothing to report.
            let _ = handle.await;
        }
    }

    /// Current progress for rendering, as of this instant.
    pub async fn view(&self) -> ProgressView {
        let mut tracker = self.tracker.write().await;
        if let Some(clock) = &self.clock {
            clock.catch_up(&mut tracker, Instant::now(), &self.frames);
        }
        tracker.view()
    }

    /// Receive one [`ProgressView`] per start and per completed stage.
    ///
    /// Subscribe before `start()` to see every frame of that run.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressView> {
        self.frames.subscribe()
    }

    /// Whether a ticker task is still running.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|h| !h.is_finished())
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for ProgressSimulator {
    fn drop(&mut self) {
        if let Some(handle) = &self.ticker {
            handle.abort();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
