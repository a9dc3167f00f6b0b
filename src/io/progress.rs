//! Multi-project progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Work done for one project, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Decoding motif images and composing both sides
    Compose,
    /// Rendering the front chart
    RenderFront,
    /// Rendering the back chart
    RenderBack,
    /// Writing the JSON summary
    Summary,
}

impl Stage {
    /// Every stage in order
    pub const ALL: [Self; 4] = [
        Self::Compose,
        Self::RenderFront,
        Self::RenderBack,
        Self::Summary,
    ];

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compose => "composing",
            Self::RenderFront => "front",
            Self::RenderBack => "back",
            Self::Summary => "summary",
        }
    }

    /// Bar position once this stage has started
    pub const fn position(self) -> u64 {
        self as u64
    }
}

#[derive(Debug, Clone, Default)]
struct ProjectState {
    name: String,
    stage: Option<Stage>,
    done: bool,
}

/// Coordinates progress display for batch chart composition
///
/// Small batches get one bar per project; once a batch is larger than the
/// visible window a single batch bar is added and the per-project bars show
/// the most recent projects.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    project_bars: Vec<ProgressBar>,
    project_count: usize,
    projects: Vec<ProjectState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROJECT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:20} [{bar:24.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Projects: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            project_bars: Vec::new(),
            project_count: 0,
            projects: Vec::new(),
        }
    }

    /// Create the bars for a batch of `project_count` projects
    pub fn initialize(&mut self, project_count: usize) {
        self.project_count = project_count;

        if project_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(project_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..project_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(Stage::ALL.len() as u64);
            bar.set_style(PROJECT_STYLE.clone());
            self.project_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of projects in the batch
    pub const fn project_count(&self) -> usize {
        self.project_count
    }

    /// Begin tracking a project
    pub fn start_project(&mut self, index: usize, path: &Path) {
        let name = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.projects.len() {
            self.projects.resize(index + 1, ProjectState::default());
        }
        if let Some(state) = self.projects.get_mut(index) {
            *state = ProjectState {
                name,
                stage: None,
                done: false,
            };
        }
        self.refresh();
    }

    /// Report that a project entered `stage`
    pub fn enter_stage(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.projects.get_mut(index) {
            state.stage = Some(stage);
        }
        self.refresh();
    }

    /// Mark a project as finished
    pub fn complete_project(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.projects.get_mut(index) {
            state.done = true;
        }
        self.refresh();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All projects processed");
        }
        let _ = self.multi_progress.clear();
    }

    // Shows the most recently started projects in the available bars
    fn refresh(&self) {
        let started: Vec<&ProjectState> = self
            .projects
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let first_visible = started.len().saturating_sub(self.project_bars.len());
        let visible = started.get(first_visible..).unwrap_or(&[]);

        for (bar_idx, bar) in self.project_bars.iter().enumerate() {
            match visible.get(bar_idx) {
                Some(state) => {
                    let (position, message) = if state.done {
                        (Stage::ALL.len() as u64, "done")
                    } else {
                        state
                            .stage
                            .map_or((0, "queued"), |stage| (stage.position(), stage.label()))
                    };
                    bar.set_prefix(state.name.clone());
                    bar.set_position(position);
                    bar.set_message(message);
                }
                None => {
                    bar.set_prefix(String::new());
                    bar.set_position(0);
                    bar.set_message("");
                }
            }
        }
    }
}
