//! Subcommands and the context they run in.

mod csv;
mod email;
mod guid;
mod hello;
mod nip;
mod number;
mod regon;

use clap::Subcommand;
use crossterm::style::Color;
use devtools_generate::FakeProvider;
use rand::RngCore;

use crate::CliError;
use crate::clipboard::Clipboard;
use crate::console::ConsoleRenderer;
use crate::settings::Settings;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Say hello, to a random person unless a name is given.
    Hello(hello::HelloArgs),
    /// Generate a random email address.
    Email(email::EmailArgs),
    /// Validate a NIP, or generate one.
    Nip(nip::NipArgs),
    /// Generate a random integer in [min, max).
    Number(number::NumberArgs),
    /// Validate a REGON, or generate some.
    Regon(regon::RegonArgs),
    /// Generate random GUIDs.
    Guid(guid::GuidArgs),
    /// Generation commands.
    #[command(subcommand)]
    Gen(GenCommand),
}

#[derive(Subcommand, Debug)]
pub enum GenCommand {
    Email(email::EmailArgs),
    Nip(nip::NipGenArgs),
    Number(number::NumberArgs),
    Regon(regon::RegonGenArgs),
    Guid(guid::GuidArgs),
    /// Fill a CSV file with rows described by a column schema.
    Csv(csv::CsvArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hello(_) => "hello",
            Self::Email(_) => "email",
            Self::Nip(_) => "nip",
            Self::Number(_) => "number",
            Self::Regon(_) => "regon",
            Self::Guid(_) => "guid",
            Self::Gen(GenCommand::Email(_)) => "gen email",
            Self::Gen(GenCommand::Nip(_)) => "gen nip",
            Self::Gen(GenCommand::Number(_)) => "gen number",
            Self::Gen(GenCommand::Regon(_)) => "gen regon",
            Self::Gen(GenCommand::Guid(_)) => "gen guid",
            Self::Gen(GenCommand::Csv(_)) => "gen csv",
        }
    }
}

pub struct CommandContext<'a> {
    pub out: &'a mut dyn ConsoleRenderer,
    /// `None` when clipboard copies are turned off.
    pub clipboard: Option<&'a dyn Clipboard>,
    pub faker: &'a dyn FakeProvider,
    pub rng: &'a mut dyn RngCore,
    pub settings: &'a Settings,
    pub seed: Option<u64>,
}

impl CommandContext<'_> {
    /// Show a single generated value as a banner and copy it.
    fn present(&mut self, value: &str, color: Color) -> Result<(), CliError> {
        self.out.banner(value, color)?;
        self.copy(value)
    }

    fn copy(&mut self, value: &str) -> Result<(), CliError> {
        let Some(clipboard) = self.clipboard else {
            return Ok(());
        };
        match clipboard.set_text(value) {
            Ok(()) => self.out.note("Copied to clipboard")?,
            Err(err) => {
                tracing::warn!(event = "clipboard_failed", error = %err);
                self.out.warning(&format!("Clipboard copy failed: {err}"))?;
            }
        }
        Ok(())
    }
}

pub fn dispatch(command: Command, ctx: &mut CommandContext<'_>) -> Result<(), CliError> {
    match command {
        Command::Hello(args) => hello::run(args, ctx),
        Command::Email(args) | Command::Gen(GenCommand::Email(args)) => email::run(args, ctx),
        Command::Nip(args) => nip::run(args, ctx),
        Command::Gen(GenCommand::Nip(args)) => nip::generate(args, ctx),
        Command::Number(args) | Command::Gen(GenCommand::Number(args)) => number::run(args, ctx),
        Command::Regon(args) => regon::run(args, ctx),
        Command::Gen(GenCommand::Regon(args)) => regon::generate(args, ctx),
        Command::Guid(args) | Command::Gen(GenCommand::Guid(args)) => guid::run(args, ctx),
        Command::Gen(GenCommand::Csv(args)) => csv::run(args, ctx),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{BrokenClipboard, RecordingClipboard, parse, run};

    #[test]
    fn command_names_include_group() {
        assert_eq!(parse(&["nip"]).name(), "nip");
        assert_eq!(parse(&["gen", "csv", "--count", "2"]).name(), "gen csv");
        assert_eq!(parse(&["gen", "regon", "--length", "14"]).name(), "gen regon");
    }

    #[test]
    fn single_value_is_copied_to_clipboard() {
        let clipboard = RecordingClipboard::default();
        let (result, output) = run(&["gen", "guid"], Some(&clipboard));
        result.expect("guid");

        let copied = clipboard.copied.borrow();
        assert_eq!(copied.len(), 1);
        assert!(output.starts_with(&copied[0]));
        assert!(output.ends_with("(Copied to clipboard)\n"));
    }

    #[test]
    fn clipboard_failure_is_only_a_warning() {
        let (result, output) = run(&["regon"], Some(&BrokenClipboard));
        result.expect("regon");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 9);
        assert!(lines[1].starts_with("(Clipboard copy failed: "));
    }

    #[test]
    fn disabled_clipboard_prints_value_only() {
        let (result, output) = run(&["guid"], None);
        result.expect("guid");
        assert_eq!(output.lines().count(), 1);
        assert_eq!(output.trim_end().len(), 36);
    }

    #[test]
    fn nip_number_and_email_are_shown_without_copying() {
        let clipboard = RecordingClipboard::default();
        let commands: [&[&str]; 4] = [
            &["nip"],
            &["gen", "nip", "--invalid"],
            &["number", "5", "6"],
            &["email", "acme.test"],
        ];
        for args in commands {
            let (result, output) = run(args, Some(&clipboard));
            result.expect("command succeeds");
            assert_eq!(output.lines().count(), 1, "{args:?}: {output}");
        }
        assert!(clipboard.copied.borrow().is_empty());
    }
}
