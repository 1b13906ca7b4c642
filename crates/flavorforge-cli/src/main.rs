use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    check::{self, CheckArgs},
    dump::{self, DumpArgs},
    list::{self, ListArgs},
    show::{self, ShowArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "flavorforge", version, about = "Browse the FlavorForge constraint catalogue")]
struct Cli {
    /// Log to stderr (filter with RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List constraint names, optionally filtered.
    List(ListArgs),
    /// Print one template as YAML.
    Show(ShowArgs),
    /// Print the whole catalogue as YAML.
    Dump(DumpArgs),
    /// Check that every name in a constraints file is known.
    Check(CheckArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    if cli.verbose {
        flavorforge::console::init();
    }

    match cli.command {
        Command::List(args) => list::run(&args),
        Command::Show(args) => show::run(&args),
        Command::Dump(args) => dump::run(&args),
        Command::Check(args) => check::run(&args),
    }
}
