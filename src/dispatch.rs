//! Batch dispatch: one crop per input directory entry.
//!
//! ## Flow
//!
//! ```text
//! create outdir  →  list indir  →  worker pool  →  crop(entry) per worker
//! ```
//!
//! Every entry is dispatched, directories and dotfiles included; the tool
//! decides what it can read. A crop's outcome is never inspected: a missing
//! executable, an unreadable image, or a full disk leaves that entry without
//! tiles and the batch carries on. Only failing to create the output
//! directory or to list the input directory stops the run.
//!
//! ## Output Structure
//!
//! ```text
//! tiles/
//! ├── page-01_0.png     # top-left
//! ├── page-01_1.png     # top-right
//! ├── page-01_2.png     # bottom-left
//! ├── page-01_3.png     # bottom-right
//! └── ...
//! ```
//!
//! ## Parallel Processing
//!
//! Entries run on a dedicated [rayon](https://docs.rs/rayon) pool sized by
//! [`effective_threads`](crate::config::effective_threads). Each worker takes
//! one entry at a time and blocks on its own subprocess, so a hung crop
//! occupies one slot while the others keep draining the queue.

use crate::config::{SplitConfig, effective_threads};
use crate::imaging::{CropParams, CropTool, Grid, MagickTool};
use crate::naming::output_pattern;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Cannot create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot read input directory {path}: {source}")]
    ReadInputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Settings for one batch.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub grid: Grid,
    pub format: String,
    pub workers: usize,
}

impl DispatchConfig {
    pub fn from_split_config(config: &SplitConfig) -> Self {
        Self {
            grid: config.grid,
            format: config.format.clone(),
            workers: effective_threads(&config.processing),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::from_split_config(&SplitConfig::default())
    }
}

/// Progress events sent while a batch runs.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    Started { total: usize, workers: usize },
    /// Sent from the worker just before it launches the crop.
    EntryStarted { path: PathBuf },
    Finished { dispatched: usize },
}

/// What the batch did. Counts dispatches, not successful crops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub dispatched: usize,
}

/// Split every entry of `input_dir` into tiles in `output_dir` using the
/// configured ImageMagick executable.
pub fn dispatch(
    input_dir: &Path,
    output_dir: &Path,
    config: &SplitConfig,
    progress: Option<Sender<DispatchEvent>>,
) -> Result<BatchSummary, DispatchError> {
    let tool = MagickTool::new(config.tool.clone());
    dispatch_with_tool(
        &tool,
        input_dir,
        output_dir,
        &DispatchConfig::from_split_config(config),
        progress,
    )
}

/// Creates `path` if absent. An existing directory is reused; a missing
/// parent or a non-directory at `path` is an error.
fn create_output_dir(path: &Path) -> io::Result<()> {
    match fs::create_dir(path) {
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        result => result,
    }
}

/// Dispatch using a specific tool (allows testing with mock).
pub fn dispatch_with_tool(
    tool: &impl CropTool,
    input_dir: &Path,
    output_dir: &Path,
    config: &DispatchConfig,
    progress: Option<Sender<DispatchEvent>>,
) -> Result<BatchSummary, DispatchError> {
    create_output_dir(output_dir).map_err(|source| DispatchError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let entries = collect_entries(input_dir)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers.max(1))
        .thread_name(|i| format!("quadsplit-worker-{i}"))
        .build()?;

    let emit = |event: DispatchEvent| {
        if let Some(tx) = &progress {
            // The printer going away must not stop the batch
            tx.send(event).ok();
        }
    };

    emit(DispatchEvent::Started {
        total: entries.len(),
        workers: pool.current_num_threads(),
    });

    pool.install(|| {
        entries.par_iter().with_max_len(1).for_each(|entry| {
            emit(DispatchEvent::EntryStarted {
                path: entry.clone(),
            });
            let params = CropParams {
                source: entry.clone(),
                output_pattern: output_pattern(output_dir, entry, &config.format),
                grid: config.grid,
            };
            tool.crop(&params).ok();
        });
    });

    emit(DispatchEvent::Finished {
        dispatched: entries.len(),
    });

    Ok(BatchSummary {
        dispatched: entries.len(),
    })
}

/// List every entry of `dir`, sorted for a stable dispatch order.
fn collect_entries(dir: &Path) -> Result<Vec<PathBuf>, DispatchError> {
    let read_err = |source: io::Error| DispatchError::ReadInputDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .map(|e| e.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;

    entries.sort();
    Ok(entries)
}
