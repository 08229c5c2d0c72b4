//! Shared test utilities: scratch input directories and output listings.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a temp input directory holding empty files with the given names.
///
/// Mock tools never read the files, so content doesn't matter.
pub fn setup_input(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        fs::write(tmp.path().join(name), "").unwrap();
    }
    tmp
}

/// File names in `dir`, sorted.
pub fn tile_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
