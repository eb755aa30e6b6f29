//! Orbit - content collections and site config for a static marketing site.

mod build;
mod cli;
mod config;
mod content;
mod generator;
mod init;
mod logger;
mod utils;

use anyhow::Result;
use build::{build_site, check_site};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use init::new_site;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Init { name } => new_site(&config, name.is_some()),
        Commands::Check => check_site(&config).map(|_| ()),
        Commands::Build { .. } => build_site(&config).map(|_| ()),
    }
}
