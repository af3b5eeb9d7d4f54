//! import-kubernetes - API registry metadata for Kubernetes releases

use clap::Parser;

mod cli;
mod config;
mod error;
mod generator;
mod models;
mod output;
mod version;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(err) = cli::generate::run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
