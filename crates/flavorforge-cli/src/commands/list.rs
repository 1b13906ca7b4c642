use std::error::Error;

use clap::Args;
use flavorforge::{ConstraintName, ConstraintTemplate, Registry};
use owo_colors::OwoColorize;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only names containing this substring.
    #[arg(long)]
    pub filter: Option<String>,
    /// Only measurements by this experiment (case-insensitive).
    #[arg(long)]
    pub experiment: Option<String>,
    /// Only templates of this family, e.g. `amoroso_limit`.
    #[arg(long)]
    pub family: Option<String>,
    /// Print names only, without family and observables.
    #[arg(long)]
    pub names_only: bool,
}

pub fn run(args: &ListArgs) -> Result<(), Box<dyn Error>> {
    let registry = Registry::builtin();
    let mut shown = 0usize;

    for (name, template) in registry.filter(args.filter.as_deref().unwrap_or("")) {
        if !matches(args, name, template) {
            continue;
        }
        shown += 1;
        if args.names_only {
            println!("{}", name);
        } else {
            println!(
                "{}  {}  {}",
                name.bright_yellow(),
                template.family().bright_magenta(),
                template.observables().join(", ").bright_black()
            );
        }
    }

    if !args.names_only {
        eprintln!("{} of {} constraints", shown, registry.len());
    }
    Ok(())
}

fn matches(args: &ListArgs, name: &str, template: &ConstraintTemplate) -> bool {
    if let Some(experiment) = &args.experiment {
        let Ok(parsed) = ConstraintName::parse(name) else {
            return false;
        };
        if !parsed.experiment.eq_ignore_ascii_case(experiment) {
            return false;
        }
    }
    if let Some(family) = &args.family {
        if template.family().as_str() != family {
            return false;
        }
    }
    true
}
