//! Crop tool trait and shared error type.
//!
//! The [`CropTool`] trait is the single seam between the dispatcher and the
//! program that does the pixel work. The production implementation is
//! [`MagickTool`](super::magick::MagickTool), which shells out to ImageMagick.

use super::params::CropParams;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Something that can split one image into a grid of tiles.
///
/// `Sync` so a single tool can be shared across rayon workers.
pub trait CropTool: Sync {
    /// Run one crop to completion.
    fn crop(&self, params: &CropParams) -> Result<(), ToolError>;
}
