use std::path::PathBuf;

use crate::models::{config, ExampleMode};
use crate::pipeline::{self, Options};
use crate::writer;

use super::{fail, output_dir, read_source};

/// `Some` when a flag was given on the command line.
pub fn link_override(link: bool, no_link: bool) -> Option<bool> {
    match (link, no_link) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

pub fn grab_problem(
    source: &str,
    link: Option<bool>,
    mode: Option<ExampleMode>,
    out_dir: Option<PathBuf>,
    dry_run: bool,
) {
    let mut user_config = config::load_config();
    let options = Options {
        linked_list: link.unwrap_or(user_config.linked_list),
        example_mode: mode.unwrap_or(user_config.example_mode),
    };

    let html = read_source(source).unwrap_or_else(|e| fail("read page", e));
    let (record, artifacts) =
        pipeline::run(&html, &options).unwrap_or_else(|e| fail("parse problem", e));

    if dry_run {
        println!("==> {}", artifacts.solution_filename);
        println!("{}", artifacts.solution_source);
        println!();
        println!("==> {} (append)", artifacts.test_target);
        println!("{}", artifacts.test_block);
        return;
    }

    let dir = output_dir(out_dir, &user_config.output_dir);
    writer::init_test_files(&dir, true).unwrap_or_else(|e| fail("create test files", e));

    tracing::info!("Making starter file");
    let solution = writer::write_solution(&dir, &artifacts)
        .unwrap_or_else(|e| fail("write starter file", e));
    tracing::info!("Adding tests");
    let tests = writer::append_tests(&dir, &artifacts).unwrap_or_else(|e| fail("append tests", e));

    user_config.record_grab(&artifacts.solution_filename);
    if let Err(e) = config::save_config(&user_config) {
        tracing::warn!(error = %e, "Could not save config");
    }

    println!(
        "Grabbed {}. {} ({})",
        record.number,
        record.title,
        record.difficulty.display_name()
    );
    println!("  Starter: {}", solution.display());
    println!(
        "  Tests:   {} ({} example(s))",
        tests.display(),
        record.examples.len()
    );
}
