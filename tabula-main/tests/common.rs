use std::{fs, path::PathBuf};

use tempfile::TempDir;

#[macro_export]
macro_rules! current_dir {
    () => {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .to_string_lossy()
            .to_string()
    };
}

/// Writes the file into the directory, returning its path
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}
