//! Output naming for tiles.
//!
//! Each input `<stem>.<ext>` produces tiles named `<stem>_<n>.<format>`. The
//! index is filled in by ImageMagick from a `%d` placeholder, so the pattern
//! handed to the tool is `<outdir>/<stem>_%d.<format>`:
//!
//! - `scans/page-01.tif` → `tiles/page-01_%d.png` → `page-01_0.png` … `page-01_3.png`
//! - `scans/archive.tar.gz` → `tiles/archive.tar_%d.png`
//! - `scans/.hidden` → `tiles/.hidden_%d.png`
//! - `scans/draft.` → `tiles/draft._%d.png` (a trailing dot is not an extension)
//!
//! Only the last extension is dropped, so inputs with distinct stems never
//! share a pattern. Inputs that differ only by extension (`a.jpg`, `a.png`)
//! do, and the later crop overwrites the earlier one.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Stem used for an input's tiles: the file name minus its last extension.
///
/// An empty extension (`draft.`, `a..`) is not stripped, so `draft.` and
/// `draft` keep distinct stems. Falls back to the whole path for entries
/// without a file name, e.g. `..`.
pub fn output_stem(input: &Path) -> OsString {
    let whole = input.file_name().unwrap_or(input.as_os_str());
    match (input.file_stem(), input.extension()) {
        (Some(stem), Some(ext)) if !ext.is_empty() => stem,
        _ => whole,
    }
    .to_os_string()
}

/// Full output pattern for `input`, with a `%d` placeholder for the tile index.
pub fn output_pattern(output_dir: &Path, input: &Path, format: &str) -> PathBuf {
    let mut name = escape_percent(&output_stem(input));
    name.push(format!("_%d.{format}"));
    output_dir.join(name)
}

/// ImageMagick expands `%` sequences in output filenames; `%%` is a literal `%`.
#[cfg(unix)]
fn escape_percent(stem: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let mut escaped = Vec::with_capacity(stem.len());
    for &byte in stem.as_bytes() {
        if byte == b'%' {
            escaped.push(b'%');
        }
        escaped.push(byte);
    }
    OsString::from_vec(escaped)
}

#[cfg(not(unix))]
fn escape_percent(stem: &OsStr) -> OsString {
    match stem.to_str() {
        Some(s) => OsString::from(s.replace('%', "%%")),
        None => stem.to_os_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_drops_extension() {
        assert_eq!(output_stem(Path::new("/in/page-01.tif")), "page-01");
    }

    #[test]
    fn stem_drops_only_last_extension() {
        assert_eq!(output_stem(Path::new("/in/archive.tar.gz")), "archive.tar");
    }

    #[test]
    fn stem_of_dotfile_is_whole_name() {
        assert_eq!(output_stem(Path::new("/in/.hidden")), ".hidden");
    }

    #[test]
    fn stem_of_directory_entry_is_its_name() {
        assert_eq!(output_stem(Path::new("/in/nested")), "nested");
    }

    #[test]
    fn stem_without_file_name_falls_back() {
        assert_eq!(output_stem(Path::new("/in/..")), "/in/..");
    }

    #[test]
    fn pattern_lives_in_output_dir() {
        let pattern = output_pattern(Path::new("/out"), Path::new("/in/scan.jpg"), "png");
        assert_eq!(pattern, PathBuf::from("/out/scan_%d.png"));
    }

    #[test]
    fn pattern_independent_of_input_extension() {
        let jpg = output_pattern(Path::new("/out"), Path::new("/in/scan.jpg"), "png");
        let tif = output_pattern(Path::new("/out"), Path::new("/in/scan.tiff"), "png");
        assert_eq!(jpg, tif);
    }

    #[test]
    fn pattern_uses_configured_format() {
        let pattern = output_pattern(Path::new("/out"), Path::new("/in/scan.jpg"), "webp");
        assert_eq!(pattern, PathBuf::from("/out/scan_%d.webp"));
    }

    #[test]
    fn distinct_stems_never_collide() {
        let a = output_pattern(Path::new("/out"), Path::new("/in/a.jpg"), "png");
        let a1 = output_pattern(Path::new("/out"), Path::new("/in/a_1.jpg"), "png");
        let b = output_pattern(Path::new("/out"), Path::new("/in/b.jpg"), "png");
        assert_ne!(a, a1);
        assert_ne!(a, b);
        assert_ne!(a1, b);
    }

    #[test]
    fn trailing_dot_is_kept_in_stem() {
        assert_eq!(output_stem(Path::new("/in/foo.")), "foo.");
        assert_eq!(output_stem(Path::new("/in/a..")), "a..");
        assert_eq!(output_stem(Path::new("/in/...")), "...");
    }

    #[test]
    fn trailing_dot_does_not_collide_with_bare_name() {
        let dotted = output_pattern(Path::new("/out"), Path::new("/in/foo."), "png");
        let bare = output_pattern(Path::new("/out"), Path::new("/in/foo"), "png");
        assert_eq!(dotted, PathBuf::from("/out/foo._%d.png"));
        assert_ne!(dotted, bare);
    }

    #[test]
    fn percent_in_stem_is_escaped() {
        let pattern = output_pattern(Path::new("/out"), Path::new("/in/100%.jpg"), "png");
        assert_eq!(pattern, PathBuf::from("/out/100%%_%d.png"));
    }

    #[cfg(unix)]
    #[test]
    fn percent_in_non_utf8_stem_is_escaped() {
        use std::os::unix::ffi::OsStrExt;

        let input = Path::new(OsStr::from_bytes(b"/in/scan\xff%d.jpg"));
        let pattern = output_pattern(Path::new("/out"), input, "png");
        assert_eq!(
            pattern.as_os_str().as_bytes(),
            b"/out/scan\xff%%d_%d.png".as_slice()
        );
    }
}
