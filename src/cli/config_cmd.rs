use std::path::PathBuf;

use crate::models::{config, ExampleMode};

use super::fail;

pub fn handle_config(mode: Option<ExampleMode>, link: Option<bool>, out_dir: Option<PathBuf>) {
    let mut user_config = config::load_config();

    if mode.is_none() && link.is_none() && out_dir.is_none() {
        println!("Example mode: {:?}", user_config.example_mode);
        println!("Linked list:  {}", user_config.linked_list);
        match user_config.output_dir {
            Some(ref dir) => println!("Output dir:   {}", dir.display()),
            None => println!("Output dir:   (current directory)"),
        }
        if let Some(path) = config::get_config_path() {
            println!();
            println!("Stored in {}", path.display());
        }
        println!();
        println!("To change: leetgrab config --mode <marker-scan|positional> --link <bool> --out-dir <dir>");
        return;
    }

    if let Some(mode) = mode {
        user_config.example_mode = mode;
    }
    if let Some(link) = link {
        user_config.linked_list = link;
    }
    if let Some(dir) = out_dir {
        user_config.output_dir = Some(dir);
    }

    config::save_config(&user_config).unwrap_or_else(|e| fail("save config", e));
    println!("Config updated");
}
