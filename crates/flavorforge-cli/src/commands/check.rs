use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use flavorforge::{ConstraintsConfig, Registry};
use owo_colors::OwoColorize;

use super::unknown_message;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Constraints file; `.yaml`/`.yml` is read as YAML, anything else as TOML.
    pub config: PathBuf,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let config = load(&args.config)?;
    let registry = Registry::builtin();

    let unknown: Vec<&str> = config
        .constraints
        .iter()
        .map(|s| s.name())
        .filter(|name| !registry.contains(name))
        .collect();

    for name in &unknown {
        eprintln!("{}\n", unknown_message(name, registry.names()));
    }

    let known = config.constraints.len() - unknown.len();
    println!(
        "{} known, {} unknown{}",
        known.bright_green(),
        unknown.len().bright_red(),
        if config.skip_unknown && !unknown.is_empty() {
            " (will be skipped)"
        } else {
            ""
        }
    );

    if unknown.is_empty() || config.skip_unknown {
        Ok(())
    } else {
        Err(format!("{} unknown constraint(s) with skip_unknown = false", unknown.len()).into())
    }
}

fn load(path: &Path) -> Result<ConstraintsConfig, Box<dyn Error>> {
    let yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let config = if yaml {
        ConstraintsConfig::from_yaml_file(path)?
    } else {
        ConstraintsConfig::load(path)?
    };
    Ok(config)
}
