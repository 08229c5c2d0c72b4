//! Image cropping, delegated to an external tool.
//!
//! | Piece | Role |
//! |---|---|
//! | [`Grid`], [`CropParams`] | What to crop: source, output pattern, tile grid |
//! | [`CropTool`] | Trait every tool implements; mocked in tests |
//! | [`MagickTool`] | Production tool: one ImageMagick `convert` process per crop |

pub mod backend;
pub mod magick;
mod params;

pub use backend::{CropTool, ToolError};
pub use magick::{MagickTool, crop_args};
pub use params::{CropParams, Grid};
