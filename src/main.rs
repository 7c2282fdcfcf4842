mod args;
mod config;
mod git;
mod menu;
mod ui;

use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let _cli = args::Cli::parse();

    let repo = git::Repo::discover()?;
    let config = config::load()?;

    menu::run(&repo, &config)
}
