//! Styled console output.
//!
//! Commands never print directly; they go through [`ConsoleRenderer`] so the
//! output can be captured in tests and colors dropped when not on a terminal.

use std::io::{self, Write};

use crossterm::QueueableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::tty::IsTty;

pub const BANNER_BLUE: Color = Color::Rgb {
    r: 0,
    g: 135,
    b: 215,
};

pub trait ConsoleRenderer {
    /// Large, bold, centered rendering of a single generated value.
    fn banner(&mut self, text: &str, color: Color) -> io::Result<()>;
    fn success(&mut self, message: &str) -> io::Result<()>;
    fn failure(&mut self, message: &str) -> io::Result<()>;
    /// Parenthesised side note, e.g. a clipboard confirmation.
    fn note(&mut self, message: &str) -> io::Result<()>;
    fn warning(&mut self, message: &str) -> io::Result<()>;
    fn line(&mut self, text: &str) -> io::Result<()>;
    /// Single-column table with a rounded border.
    fn table(&mut self, title: &str, rows: &[String]) -> io::Result<()>;
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    styled: bool,
    width: Option<u16>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let styled = out.is_tty() && std::env::var_os("NO_COLOR").is_none();
        let width = styled
            .then(|| crossterm::terminal::size().ok().map(|(cols, _)| cols))
            .flatten();
        Self { out, styled, width }
    }
}

impl TerminalRenderer<io::Stderr> {
    pub fn stderr() -> Self {
        let out = io::stderr();
        let styled = out.is_tty() && std::env::var_os("NO_COLOR").is_none();
        Self {
            out,
            styled,
            width: None,
        }
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Uncolored renderer over any writer.
    pub fn plain(out: W) -> Self {
        Self {
            out,
            styled: false,
            width: None,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn colored(&mut self, text: &str, color: Color, bold: bool) -> io::Result<()> {
        if !self.styled {
            return writeln!(self.out, "{text}");
        }
        self.out.queue(SetForegroundColor(color))?;
        if bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        self.out
            .queue(Print(text))?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?
            .queue(Print("\n"))?;
        self.out.flush()
    }
}

impl<W: Write> ConsoleRenderer for TerminalRenderer<W> {
    fn banner(&mut self, text: &str, color: Color) -> io::Result<()> {
        let padding = self
            .width
            .map(|width| (width as usize).saturating_sub(text.chars().count()) / 2)
            .unwrap_or(0);
        let padded = format!("{}{text}", " ".repeat(padding));
        self.colored(&padded, color, true)
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        self.colored(message, Color::Green, false)
    }

    fn failure(&mut self, message: &str) -> io::Result<()> {
        self.colored(message, Color::Red, false)
    }

    fn note(&mut self, message: &str) -> io::Result<()> {
        self.colored(&format!("({message})"), Color::Grey, false)
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        self.colored(&format!("({message})"), Color::Yellow, false)
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    fn table(&mut self, title: &str, rows: &[String]) -> io::Result<()> {
        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .chain(std::iter::once(title.chars().count()))
            .max()
            .unwrap_or(0);
        let rule = "─".repeat(width + 2);

        writeln!(self.out, "╭{rule}╮")?;
        writeln!(self.out, "│ {title:<width$} │")?;
        writeln!(self.out, "├{rule}┤")?;
        for row in rows {
            writeln!(self.out, "│ {row:<width$} │")?;
        }
        writeln!(self.out, "╰{rule}╯")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(render: impl FnOnce(&mut TerminalRenderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut renderer = TerminalRenderer::plain(Vec::new());
        render(&mut renderer).expect("render");
        String::from_utf8(renderer.into_inner()).expect("utf8 output")
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let output = rendered(|r| {
            r.banner("123456785", Color::White)?;
            r.success("ok")?;
            r.note("Copied to clipboard")
        });
        assert_eq!(output, "123456785\nok\n(Copied to clipboard)\n");
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn table_pads_rows_to_widest_cell() {
        let rows = vec!["123456785".to_string(), "12345678512347".to_string()];
        let output = rendered(|r| r.table("REGON", &rows));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "│ REGON          │");
        assert_eq!(lines[3], "│ 123456785      │");
        assert_eq!(lines[4], "│ 12345678512347 │");
        assert!(lines[0].starts_with('╭') && lines[5].ends_with('╯'));
    }

    #[test]
    fn styled_output_wraps_text_in_color_codes() {
        let mut renderer = TerminalRenderer {
            out: Vec::new(),
            styled: true,
            width: Some(20),
        };
        renderer.banner("abc", Color::Green).expect("render");
        let output = String::from_utf8(renderer.out).expect("utf8 output");
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("        abc"));
    }
}
