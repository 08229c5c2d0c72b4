//! # quadsplit
//!
//! Batch-split every entry of a directory into a 2×2 grid of tiles.
//!
//! ```text
//! quadsplit scans/ tiles/
//!
//! scans/page-01.tif  →  tiles/page-01_0.png  tiles/page-01_1.png
//!                       tiles/page-01_2.png  tiles/page-01_3.png
//! ```
//!
//! The pixel work is done by ImageMagick; this crate lists the input
//! directory, builds one `convert … -crop 2x2@ …` invocation per entry and
//! runs them on a worker pool. Crops that fail are skipped silently, so a
//! bad file never stops the batch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dispatch`] | Creates the output directory, lists the input, runs one crop per entry in parallel |
//! | [`imaging`] | Crop parameters, the [`imaging::CropTool`] trait, and the ImageMagick tool |
//! | [`naming`] | `<stem>_%d.<format>` output patterns |
//! | [`config`] | Optional TOML overrides (tool, grid, format, worker count) |
//! | [`output`] | Console progress formatting |

pub mod config;
pub mod dispatch;
pub mod imaging;
pub mod naming;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
