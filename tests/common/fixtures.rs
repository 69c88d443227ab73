//! On-disk catalog files for tests that exercise file loading.

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `json` to a temporary catalog file, deleted when the handle drops.
pub fn write_catalog_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create catalog file");
    file.write_all(json.as_bytes())
        .expect("Failed to write catalog file");
    file
}
