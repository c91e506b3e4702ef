use clap::Args;

use super::CommandContext;
use crate::CliError;

#[derive(Args, Debug)]
pub struct HelloArgs {
    #[arg(long)]
    name: Option<String>,
}

pub fn run(args: HelloArgs, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    let name = match args.name {
        Some(name) => name,
        None => ctx.faker.full_name(ctx.rng),
    };
    ctx.out.line(&format!("Hello, {name}!"))?;
    Ok(())
}
