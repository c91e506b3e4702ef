use clap::Args;

use super::CommandContext;
use crate::CliError;
use crate::console::BANNER_BLUE;

#[derive(Args, Debug)]
pub struct EmailArgs {
    /// Domain for the address (default from settings).
    domain: Option<String>,
}

pub fn run(args: EmailArgs, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    let domain = args
        .domain
        .unwrap_or_else(|| ctx.settings.email_domain.clone());
    let email = ctx.faker.email_with_domain(Some(&domain), ctx.rng);
    ctx.out.banner(&email, BANNER_BLUE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{run, run_with_settings};
    use crate::settings::Settings;

    #[test]
    fn custom_domain_is_used() {
        let (result, output) = run(&["email", "acme.test"], None);
        result.expect("email");
        assert!(output.trim_end().ends_with("@acme.test"), "{output}");
    }

    #[test]
    fn settings_domain_applies_without_argument() {
        let settings = Settings {
            email_domain: "corp.test".to_string(),
            ..Settings::default()
        };
        let (result, output) = run_with_settings(&["gen", "email"], None, &settings);
        result.expect("email");
        assert!(output.trim_end().ends_with("@corp.test"), "{output}");
    }

    #[test]
    fn default_domain_gives_an_address() {
        let (result, output) = run(&["email"], None);
        result.expect("email");
        assert!(output.contains('@'));
    }
}
