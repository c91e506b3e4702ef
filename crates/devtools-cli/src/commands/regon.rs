use clap::Args;
use crossterm::style::Color;
use devtools_core::{RegonKind, generate_regon, is_valid_regon};

use super::CommandContext;
use crate::CliError;

#[derive(Args, Debug)]
pub struct RegonArgs {
    /// REGON to validate (9 or 14 digits).
    value: Option<String>,
    #[command(flatten)]
    generate: RegonGenArgs,
}

#[derive(Args, Debug)]
pub struct RegonGenArgs {
    /// Length of generated numbers: 9 or 14.
    #[arg(long, default_value_t = 9)]
    length: usize,
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Show generated numbers in a table.
    #[arg(long, default_value_t = false)]
    table: bool,
}

pub fn run(args: RegonArgs, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    match args.value {
        Some(value) => validate(&value, ctx),
        None => generate(args.generate, ctx),
    }
}

pub fn generate(args: RegonGenArgs, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    let kind = RegonKind::from_length(args.length)?;
    if args.count < 1 {
        return Err(CliError::InvalidArgument(
            "count must be greater than 0".to_string(),
        ));
    }

    let values = (0..args.count)
        .map(|_| generate_regon(kind.length(), ctx.rng))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(event = "regon_generated", kind = %kind, count = values.len());

    if args.table {
        ctx.out.table(&format!("Generated {kind}"), &values)?;
        return Ok(());
    }
    match values.as_slice() {
        [single] => ctx.present(single, Color::Green),
        many => {
            for value in many {
                ctx.out.line(value)?;
            }
            Ok(())
        }
    }
}

fn validate(value: &str, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    if is_valid_regon(value) {
        ctx.out.success(&format!("✓ REGON {value} is VALID"))?;
    } else {
        ctx.out.failure(&format!("✗ REGON {value} is INVALID"))?;
    }
    Ok(())
}
