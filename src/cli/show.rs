use crate::display::display_problem;
use crate::error::GrabError;
use crate::models::{config, ExampleMode};
use crate::pipeline::{parse_record, Options};

use super::{fail, read_source};

pub fn show_problem(source: &str, mode: Option<ExampleMode>, json: bool) {
    let user_config = config::load_config();
    let options = Options {
        linked_list: user_config.linked_list,
        example_mode: mode.unwrap_or(user_config.example_mode),
    };

    let html = read_source(source).unwrap_or_else(|e| fail("read page", e));
    let record = parse_record(&html, &options).unwrap_or_else(|e| fail("parse problem", e));

    if json {
        let out = serde_json::to_string_pretty(&record)
            .map_err(GrabError::from)
            .unwrap_or_else(|e| fail("serialize problem", e));
        println!("{}", out);
    } else {
        display_problem(&record);
    }
}
