use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use flavorforge::Registry;

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Write to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &DumpArgs) -> Result<(), Box<dyn Error>> {
    let yaml = Registry::builtin().to_yaml()?;
    match &args.out {
        Some(path) => fs::write(path, yaml)?,
        None => print!("{}", yaml),
    }
    Ok(())
}
