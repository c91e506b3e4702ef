use clap::Args;
use crossterm::style::Color;
use devtools_core::{format_nip, generate_invalid_nip, generate_nip, is_valid_nip};

use super::CommandContext;
use crate::CliError;

#[derive(Args, Debug)]
pub struct NipArgs {
    /// NIP to validate, with or without hyphens.
    value: Option<String>,
    #[command(flatten)]
    generate: NipGenArgs,
}

#[derive(Args, Debug)]
pub struct NipGenArgs {
    /// Generate a NIP with a wrong check digit.
    #[arg(long, default_value_t = false)]
    invalid: bool,
}

pub fn run(args: NipArgs, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    match args.value {
        Some(value) => validate(&value, ctx),
        None => generate(args.generate, ctx),
    }
}

pub fn generate(args: NipGenArgs, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    let nip = if args.invalid {
        generate_invalid_nip(ctx.rng)
    } else {
        generate_nip(ctx.rng)
    };
    ctx.out.banner(&nip, Color::Green)?;
    Ok(())
}

fn validate(value: &str, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    let Some(formatted) = format_nip(value) else {
        ctx.out
            .failure("Invalid NIP format. NIP should be 10 digits.")?;
        return Ok(());
    };
    if is_valid_nip(value) {
        ctx.out.success(&format!("NIP {formatted} is valid"))?;
    } else {
        ctx.out.failure(&format!("NIP {formatted} is invalid"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use devtools_core::is_valid_nip;

    use super::super::test_support::run;

    #[test]
    fn validates_with_and_without_hyphens() {
        let (result, output) = run(&["nip", "5260250274"], None);
        result.expect("nip");
        assert_eq!(output, "NIP 526-025-02-74 is valid\n");

        let (result, output) = run(&["nip", "526-025-02-74"], None);
        result.expect("nip");
        assert_eq!(output, "NIP 526-025-02-74 is valid\n");
    }

    #[test]
    fn reports_wrong_check_digit() {
        let (result, output) = run(&["nip", "1234563229"], None);
        result.expect("nip");
        assert_eq!(output, "NIP 123-456-32-29 is invalid\n");
    }

    #[test]
    fn reports_malformed_input() {
        let (result, output) = run(&["nip", "12345"], None);
        result.expect("nip");
        assert_eq!(output, "Invalid NIP format. NIP should be 10 digits.\n");
    }

    #[test]
    fn generates_valid_and_invalid_numbers() {
        let (result, output) = run(&["nip"], None);
        result.expect("nip");
        assert!(is_valid_nip(output.trim_end()));

        let (result, output) = run(&["gen", "nip", "--invalid"], None);
        result.expect("nip");
        let generated = output.trim_end();
        assert_eq!(generated.len(), 13);
        assert!(!is_valid_nip(generated));
    }
}
