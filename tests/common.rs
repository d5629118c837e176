//! Test utilities & fixtures.
//! Provides access to the integration fixtures under `tests/test-data-int`.

use std::path::{Path, PathBuf};

/// Return the path to the static integration test fixture directory.
/// Kept small & deterministic. Tests should copy to a temp dir if they mutate.
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test-data-int")
}

/// Return a writable copy (temp dir) of the fixture seed and config.
#[allow(dead_code)] // Not every test binary that includes this module mutates fixtures.
pub fn writable_fixture() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("tempdir");
    let src = fixture_root();
    for file in ["wardrobe.json", "config.toml"] {
        std::fs::copy(src.join(file), tmp.path().join(file)).unwrap();
    }
    tmp
}
