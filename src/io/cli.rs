//! Command-line interface for batch composition of chart project files

use crate::compose::{ChartExport, PatternSummary};
use crate::grid::Side;
use crate::io::configuration::{
    BACK_SUFFIX, BATCH_DECODE_WAIT_MS, DEFAULT_CELL_PIXELS, FRONT_SUFFIX, SUMMARY_SUFFIX,
};
use crate::io::error::{ChartError, Result, WithPath, invalid_parameter};
use crate::io::image::export_pattern_png;
use crate::io::progress::{ProgressManager, Stage};
use crate::io::project::ProjectFile;
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "filetgrid")]
#[command(
    author,
    version,
    about = "Compose filet crochet charts from motif images and border patterns"
)]
/// Command-line arguments for the chart composer
pub struct Cli {
    /// Project JSON file or directory of project files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory for rendered charts and summaries (defaults to next to each project)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Edge length of one chart cell in the rendered PNG
    #[arg(short, long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Suppress progress output and informational logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Process projects even if their summary already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing outputs should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Everything written to `<stem>_summary.json`
#[derive(Debug, Serialize)]
pub struct ChartSummary {
    /// Project title, or the file stem
    pub name: String,
    /// Display reading of filled cells
    pub stitch_interpretation: String,
    /// Border pattern id
    pub border_pattern: String,
    /// Grid density
    pub grid_type: String,
    /// Total yarn in grams
    pub yarn_grams: f64,
    /// Whole skeins needed
    pub skeins_needed: u32,
    /// Front-side digest
    pub front: PatternSummary,
    /// Back-side digest
    pub back: PatternSummary,
}

impl ChartSummary {
    /// Digest a composed chart
    pub fn new(name: String, export: &ChartExport) -> Self {
        let yarn = export.yarn();
        Self {
            name,
            stitch_interpretation: export.interpretation.to_string(),
            border_pattern: export.border.to_string(),
            grid_type: export.grid_type.to_string(),
            yarn_grams: yarn.grams,
            skeins_needed: yarn.skeins_needed,
            front: export.front.summary(),
            back: export.back.summary(),
        }
    }
}

/// Orchestrates batch processing of project files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process projects according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a project file or directory, if
    /// any project fails to load, compose or export, or if its motif images
    /// are still decoding after the batch wait
    pub fn process(&mut self) -> Result<()> {
        if self.cli.cell_pixels == 0 {
            return Err(invalid_parameter(
                "cell_pixels",
                &self.cli.cell_pixels,
                &"must be positive",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            info!("No projects to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_project(target) {
                Ok(if self.should_process_file(target) {
                    vec![target.clone()]
                } else {
                    vec![]
                })
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"must be a .json project file",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target)? {
                let path = entry.with_path(target)?.path();
                if is_project(&path)
                    && !is_summary(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a project file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let summary_path = self.output_path(input_path, SUMMARY_SUFFIX, "json");
        if summary_path.exists() {
            warn!(project = %input_path.display(), "Skipping: summary already exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_project(index, input_path);
            pm.enter_stage(index, Stage::Compose);
        }

        let project = ProjectFile::load(input_path)?;
        let name = project.name.clone().unwrap_or_else(|| file_stem(input_path));
        let base_dir = input_path.parent().unwrap_or_else(|| Path::new("."));
        let decode_wait = Duration::from_millis(BATCH_DECODE_WAIT_MS);
        let mut session = project.into_session(base_dir)?.with_decode_wait(decode_wait);
        let export = session.regenerate().clone();

        // A chart missing a motif that was merely slow is never written
        let pending = session.pending_decodes();
        if !pending.is_empty() {
            return Err(ChartError::DecodeTimeout {
                motifs: pending,
                waited_ms: decode_wait.as_millis(),
            });
        }

        for (side, stage, suffix) in [
            (Side::Front, Stage::RenderFront, FRONT_SUFFIX),
            (Side::Back, Stage::RenderBack, BACK_SUFFIX),
        ] {
            if let Some(ref mut pm) = self.progress_manager {
                pm.enter_stage(index, stage);
            }
            export_pattern_png(
                export.pattern(side),
                session.manual_fills(),
                export.interpretation,
                self.cli.cell_pixels,
                &self.output_path(input_path, suffix, "png"),
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.enter_stage(index, Stage::Summary);
        }
        let summary = ChartSummary::new(name, &export);
        let summary_path = self.output_path(input_path, SUMMARY_SUFFIX, "json");
        write_summary(&summary, &summary_path)?;

        info!(
            project = %input_path.display(),
            skeins = summary.skeins_needed,
            yarn_grams = summary.yarn_grams,
            "Chart written"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_project(index);
        }

        Ok(())
    }

    fn output_path(&self, input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let output_name = format!("{}{suffix}.{extension}", file_stem(input_path));
        let directory = self
            .cli
            .output_dir
            .as_deref()
            .or_else(|| input_path.parent());

        directory.map_or_else(|| PathBuf::from(&output_name), |dir| dir.join(&output_name))
    }
}

fn write_summary(summary: &ChartSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ChartError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    let json = serde_json::to_string_pretty(summary).with_path(path)?;
    std::fs::write(path, json).map_err(|e| ChartError::FileSystem {
        path: path.to_path_buf(),
        operation: "write summary",
        source: e,
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn is_project(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("json")
}

fn is_summary(path: &Path) -> bool {
    file_stem(path).ends_with(SUMMARY_SUFFIX)
}
