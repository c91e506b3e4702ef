use clap::Args;
use crossterm::style::Color;
use devtools_generate::random_guid;

use super::CommandContext;
use crate::CliError;

#[derive(Args, Debug)]
pub struct GuidArgs {
    #[arg(long, default_value_t = 1)]
    count: usize,
}

pub fn run(args: GuidArgs, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    if args.count < 1 {
        return Err(CliError::InvalidArgument(
            "count must be greater than 0".to_string(),
        ));
    }
    if args.count == 1 {
        let guid = random_guid(ctx.rng);
        return ctx.present(&guid, Color::Green);
    }
    for _ in 0..args.count {
        let guid = random_guid(ctx.rng);
        ctx.out.line(&guid)?;
    }
    Ok(())
}
