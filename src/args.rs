use clap::Parser;

/// No flags, no subcommands: everything happens through the interactive
/// menu after launch. The parser only provides --help and --version.
#[derive(Parser)]
#[command(name = "gim", about = "GIM - Interactive Git Menu", version)]
pub struct Cli {}
