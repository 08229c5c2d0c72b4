//! ImageMagick crop tool.
//!
//! Runs one `convert` process per input:
//!
//! ```text
//! convert <input> +repage -crop 2x2@ +repage <outdir>/<stem>_%d.png
//! ```
//!
//! The leading `+repage` drops any virtual canvas offset the source carries
//! so the grid is computed on the real pixels; the trailing one strips the
//! per-tile offsets `-crop` leaves behind. Stdout and stderr are inherited.

use super::backend::{CropTool, ToolError};
use super::params::CropParams;
use std::ffi::OsString;
use std::process::Command;

/// Default executable, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "convert";

/// Crop tool backed by an ImageMagick-compatible executable.
#[derive(Debug, Clone)]
pub struct MagickTool {
    program: String,
}

impl MagickTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the process for one crop without running it.
    pub fn command(&self, params: &CropParams) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(crop_args(params));
        cmd
    }
}

impl Default for MagickTool {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

/// Argument vector for an equal-tile crop of `params.source`.
pub fn crop_args(params: &CropParams) -> Vec<OsString> {
    vec![
        params.source.clone().into_os_string(),
        "+repage".into(),
        "-crop".into(),
        params.grid.geometry().into(),
        "+repage".into(),
        params.output_pattern.clone().into_os_string(),
    ]
}

impl CropTool for MagickTool {
    fn crop(&self, params: &CropParams) -> Result<(), ToolError> {
        let status = self
            .command(params)
            .status()
            .map_err(|source| ToolError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Failed {
                program: self.program.clone(),
                status,
            })
        }
    }
}
