use std::path::PathBuf;

use crate::models::config;
use crate::writer::init_test_files;

use super::{fail, output_dir};

pub fn init_files(out_dir: Option<PathBuf>, helpers: bool) {
    let user_config = config::load_config();
    let dir = output_dir(out_dir, &user_config.output_dir);

    let created = init_test_files(&dir, helpers).unwrap_or_else(|e| fail("create test files", e));

    if created.is_empty() {
        println!("Test files already exist in {}", dir.display());
        return;
    }
    for path in created {
        println!("Created {}", path.display());
    }
}
