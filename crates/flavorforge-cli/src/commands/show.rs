use std::error::Error;

use clap::Args;
use flavorforge::Registry;

use super::unknown_message;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Exact constraint name, e.g. `B^0_s->mu^+mu^-::BR_limit@CDF-2011`.
    pub name: String,
}

pub fn run(args: &ShowArgs) -> Result<(), Box<dyn Error>> {
    let registry = Registry::builtin();
    let Some(template) = registry.get(&args.name) else {
        return Err(unknown_message(&args.name, registry.names()).into());
    };

    print!("{}", serde_yaml::to_string(template)?);
    Ok(())
}
