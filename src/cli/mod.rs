mod config_cmd;
mod grab;
mod init;
mod show;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::GrabError;
use crate::models::{config, ExampleMode};

#[derive(Parser)]
#[command(name = "leetgrab")]
#[command(about = "Turn a rendered problem page into a starter file and tests", long_about = None)]
pub struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the starter file and append tests for a saved page
    Grab {
        /// HTML file of the loaded page, or `-` for stdin
        source: String,
        /// The problem uses linked lists
        #[arg(long)]
        link: bool,
        /// Turn linked-list mode off for this run even if configured on
        #[arg(long, conflicts_with = "link")]
        no_link: bool,
        #[arg(long, value_enum)]
        mode: Option<ExampleMode>,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Print the artifacts instead of writing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the problem extracted from a page
    Show {
        source: String,
        #[arg(long, value_enum)]
        mode: Option<ExampleMode>,
        #[arg(long)]
        json: bool,
    },
    /// Create the shared test files
    Init {
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Leave out the ListNode helpers
        #[arg(long)]
        no_helpers: bool,
    },
    /// Show or change defaults
    Config {
        #[arg(long, value_enum)]
        mode: Option<ExampleMode>,
        #[arg(long)]
        link: Option<bool>,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    Info,
}

pub fn run(cli: Cli) {
    match cli.command {
        None | Some(Commands::Info) => generic_info(),
        Some(Commands::Grab {
            source,
            link,
            no_link,
            mode,
            out_dir,
            dry_run,
        }) => {
            let link = grab::link_override(link, no_link);
            grab::grab_problem(&source, link, mode, out_dir, dry_run)
        }
        Some(Commands::Show { source, mode, json }) => show::show_problem(&source, mode, json),
        Some(Commands::Init {
            out_dir,
            no_helpers,
        }) => init::init_files(out_dir, !no_helpers),
        Some(Commands::Config {
            mode,
            link,
            out_dir,
        }) => config_cmd::handle_config(mode, link, out_dir),
    }
}

fn generic_info() {
    let user_config = config::load_config();

    println!("Problems grabbed: {}", user_config.problems_grabbed);
    if let Some(ref last) = user_config.last_problem {
        println!("Last problem: {}", last);
    }
    if let Some(ref at) = user_config.last_grabbed_at {
        println!("Last grabbed at: {}", at);
    }
    println!();
    println!("Run `leetgrab grab <page.html>` to add a problem");
}

/// Read the page from a file, or from stdin when `source` is `-`.
fn read_source(source: &str) -> Result<String, GrabError> {
    if source == "-" {
        let mut html = String::new();
        io::stdin().read_to_string(&mut html)?;
        Ok(html)
    } else {
        Ok(fs::read_to_string(Path::new(source))?)
    }
}

fn output_dir(flag: Option<PathBuf>, configured: &Option<PathBuf>) -> PathBuf {
    flag.or_else(|| configured.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn fail(context: &str, e: GrabError) -> ! {
    eprintln!("Failed to {}: {}", context, e);
    std::process::exit(1);
}
