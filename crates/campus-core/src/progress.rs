//! # Staged Progress
//!
//! The state machine behind the cosmetic agent pipeline.
//!
//! ## States
//!
//! | State | Cursor | Left by |
//! |-------|--------|---------|
//! | Idle | 0 | `start()` |
//! | Running(n) | n | `advance()` while `n + 1 < len`, or `start()` |
//! | Complete | len | `start()` |
//!
//! The tracker has no clock. Whatever drives it calls [`StageTracker::advance`]
//! once per period with the run number returned by [`StageTracker::start`].
//! A tick carrying an older run number is ignored, so a ticker that outlives
//! its run can never move the cursor of the run that replaced it.

use crate::CampusError;
use crate::catalog::PIPELINE_STAGES;
use serde::{Deserialize, Serialize};

/// Default period between two ticks, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 400;

// =============================================================================
// STAGE LIST
// =============================================================================

/// Ordered, non-empty, immutable list of stage labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageList {
    labels: Vec<String>,
}

impl StageList {
    /// Build a stage list from labels.
    pub fn new<I, S>(labels: I) -> Result<Self, CampusError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(CampusError::EmptyStageList);
        }
        Ok(Self { labels })
    }

    /// The four-stage console pipeline.
    #[must_use]
    pub fn pipeline() -> Self {
        Self {
            labels: PIPELINE_STAGES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

impl Default for StageList {
    fn default() -> Self {
        Self::pipeline()
    }
}

// =============================================================================
// PROGRESS STATE
// =============================================================================

/// Simulator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProgressState {
    /// No run has been triggered yet.
    Idle,
    /// `cursor` stages are complete and the ticker is active.
    Running { cursor: usize },
    /// Every stage is complete; the ticker has stopped.
    Complete,
}

impl ProgressState {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ProgressState::Idle => "idle",
            ProgressState::Running { .. } => "running",
            ProgressState::Complete => "complete",
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, ProgressState::Running { .. })
    }
}

impl std::fmt::Display for ProgressState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressState::Running { cursor } => write!(f, "running({})", cursor),
            other => f.write_str(other.name()),
        }
    }
}

// =============================================================================
// STAGE TRACKER
// =============================================================================

/// Cursor over a [`StageList`], moved one stage per tick.
#[derive(Debug, Clone)]
pub struct StageTracker {
    stages: StageList,
    state: ProgressState,
    run: u64,
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new(StageList::pipeline())
    }
}

impl StageTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new(stages: StageList) -> Self {
        Self {
            stages,
            state: ProgressState::Idle,
            run: 0,
        }
    }

    /// Reset to `Idle`, then begin a new run at cursor 0.
    ///
    /// Returns the new run number (starting at 1).
    pub fn start(&mut self) -> u64 {
        self.state = ProgressState::Idle;
        self.run = self.run.saturating_add(1);
        self.state = ProgressState::Running { cursor: 0 };
        self.run
    }

    /// Apply one tick belonging to `run`.
    ///
    /// Ticks from another run, or outside `Running`, leave the state unchanged.
    pub fn advance(&mut self, run: u64) -> ProgressState {
        if run != self.run {
            return self.state;
        }

        if let ProgressState::Running { cursor } = self.state {
            let next = cursor.saturating_add(1);
            self.state = if next >= self.stages.len() {
                ProgressState::Complete
            } else {
                ProgressState::Running { cursor: next }
            };
        }

        self.state
    }

    /// Number of completed stages.
    #[must_use]
    pub fn cursor(&self) -> usize {
        match self.state {
            ProgressState::Idle => 0,
            ProgressState::Running { cursor } => cursor,
            ProgressState::Complete => self.stages.len(),
        }
    }

    #[must_use]
    pub fn state(&self) -> ProgressState {
        self.state
    }

    /// Current run number (0 before the first start).
    #[must_use]
    pub fn run(&self) -> u64 {
        self.run
    }

    #[must_use]
    pub fn stages(&self) -> &StageList {
        &self.stages
    }

    /// Snapshot for the rendering layer.
    #[must_use]
    pub fn view(&self) -> ProgressView {
        let cursor = self.cursor();
        let total = self.stages.len();

        let percent = if total > 0 {
            ((cursor as u64).saturating_mul(100) / (total as u64)) as u8
        } else {
            100
        };

        let stages = self
            .stages
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| StageStatus {
                label: label.clone(),
                complete: cursor > i,
            })
            .collect();

        ProgressView {
            run: self.run,
            state: self.state.name().to_string(),
            cursor,
            total,
            percent: percent.min(100),
            stages,
        }
    }
}

// =============================================================================
// PROGRESS VIEW
// =============================================================================

/// Render-ready progress information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressView {
    pub run: u64,
    /// `idle`, `running` or `complete`.
    pub state: String,
    pub cursor: usize,
    pub total: usize,
    pub percent: u8,
    pub stages: Vec<StageStatus>,
}

impl ProgressView {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == ProgressState::Complete.name()
    }

    /// "N of M stages complete".
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} of {} stages complete", self.cursor, self.total)
    }
}

/// One line of the pipeline panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStatus {
    pub label: String,
    pub complete: bool,
}

// =============================================================================
// TESTS
// =============================================================================
