//! Captures live provider bodies as JSON fixtures for the offline tests.
//! Compiled only with the `test-mode` feature; active when `EP_RECORD=1`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `EP_FIXDIR`, or `tests/fixtures` in the crate root.
fn fixture_dir() -> PathBuf {
    std::env::var("EP_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// File name for one captured response, e.g. `search_apple.json`.
///
/// The lookup key is free text (a search query or a ticker), so it is
/// lowercased and reduced to `[a-z0-9_-]`: whitespace and `.` become `_`,
/// anything else is dropped. A key with nothing left maps to `all`.
pub(crate) fn fixture_name(endpoint: &str, key: &str, ext: &str) -> String {
    let mut slug = String::with_capacity(key.len());
    for c in key.trim().chars() {
        match c {
            'a'..='z' | '0'..='9' | '-' | '_' => slug.push(c),
            'A'..='Z' => slug.push(c.to_ascii_lowercase()),
            c if c.is_whitespace() || c == '.' => slug.push('_'),
            _ => {}
        }
    }
    if slug.trim_matches('_').is_empty() {
        slug = "all".to_string();
    }
    format!("{endpoint}_{slug}.{ext}")
}

/// Writes `body` into `dir`, creating the directory when missing.
pub(crate) fn record_fixture_in(
    dir: &Path,
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(fixture_name(endpoint, key, ext));
    fs::write(&path, body)?;
    Ok(path)
}

pub(crate) fn record_fixture(endpoint: &str, key: &str, ext: &str, body: &str) -> io::Result<()> {
    let path = record_fixture_in(&fixture_dir(), endpoint, key, ext, body)?;
    crate::core::fallback::debug_log(format_args!("EP_RECORD: wrote {}", path.display()));
    Ok(())
}
