use clap::Args;
use crossterm::style::Color;
use devtools_generate::random_int;

use super::CommandContext;
use crate::CliError;

#[derive(Args, Debug)]
pub struct NumberArgs {
    /// Inclusive lower bound.
    #[arg(default_value_t = 1, allow_negative_numbers = true)]
    min: i64,
    /// Exclusive upper bound.
    #[arg(default_value_t = 100, allow_negative_numbers = true)]
    max: i64,
}

pub fn run(args: NumberArgs, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    let value = random_int(ctx.rng, args.min, args.max)?;
    ctx.out.banner(&value.to_string(), Color::White)?;
    Ok(())
}
