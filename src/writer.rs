use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GrabError;
use crate::models::TEST_FILES;
use crate::pipeline::Artifacts;
use crate::testgen::test_file_header;

/// Create any of the shared test files that do not exist yet.
/// Returns the paths that were created.
pub fn init_test_files(dir: &Path, helpers: bool) -> Result<Vec<PathBuf>, GrabError> {
    fs::create_dir_all(dir)?;

    let mut created = Vec::new();
    for name in TEST_FILES {
        let path = dir.join(name);
        if path.exists() {
            continue;
        }
        fs::write(&path, test_file_header(helpers))?;
        tracing::debug!(path = %path.display(), "Created test file");
        created.push(path);
    }
    Ok(created)
}

pub fn write_solution(dir: &Path, artifacts: &Artifacts) -> Result<PathBuf, GrabError> {
    let path = dir.join(&artifacts.solution_filename);
    fs::write(&path, &artifacts.solution_source)?;
    tracing::info!(path = %path.display(), "Wrote starter file");
    Ok(path)
}

/// Append the assertion block to its shared test file. Appending the same
/// block twice leaves two test functions with the same name.
pub fn append_tests(dir: &Path, artifacts: &Artifacts) -> Result<PathBuf, GrabError> {
    let path = dir.join(artifacts.test_target);
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    file.write_all(artifacts.test_block.as_bytes())?;
    tracing::info!(path = %path.display(), "Added tests");
    Ok(path)
}
