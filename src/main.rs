use clap::Parser;
use dirscout::commands::{execute_add, execute_remove, execute_search};
use dirscout::core::print_error;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dirscout")]
#[command(about = "Interactive directory index with substring search")]
#[command(version = "0.1.0")]
struct Cli {
    /// Add a directory to the search index and exit
    #[arg(long, value_name = "DIR", conflicts_with = "remove")]
    add: Option<PathBuf>,

    /// Remove a directory from the search index and exit
    #[arg(long, value_name = "DIR")]
    remove: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = if let Some(dir) = cli.add {
        execute_add(&dir)
    } else if let Some(dir) = cli.remove {
        execute_remove(&dir)
    } else {
        execute_search()
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
