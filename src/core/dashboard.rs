use crate::core::report::format_report;
use crate::core::roster::{build_semester, sample_roster};
use crate::core::{Result, ScoreSource};
use crate::utils::display::{render_message, MessageStyle};
use owo_colors::AnsiColors;
use std::io::Write;

pub const BANNER: &str = "*** A very sophisticated student grades dashboard ***";
pub const CLOSE_PROMPT: &str = "\n\n\nPress any key to close...";

pub struct Dashboard<S: ScoreSource> {
    scores: S,
    terminal_width: usize,
    banner_color: Option<AnsiColors>,
}

impl<S: ScoreSource> Dashboard<S> {
    pub fn new(scores: S, terminal_width: usize) -> Self {
        Self {
            scores,
            terminal_width,
            banner_color: Some(AnsiColors::Green),
        }
    }

    pub fn with_banner_color(mut self, color: Option<AnsiColors>) -> Self {
        self.banner_color = color;
        self
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        tracing::debug!("Rendering dashboard at width {}", self.terminal_width);

        self.display_message(out, BANNER, &MessageStyle::banner(self.banner_color))?;

        for entry in sample_roster() {
            let semester = build_semester(entry.first_name, entry.last_name, &mut self.scores);
            tracing::debug!("Semester: {}", serde_json::to_string(&semester)?);

            let report = format_report(&semester, &entry.display);
            self.display_message(out, &report, &MessageStyle::plain())?;
        }

        write!(out, "{}", CLOSE_PROMPT)?;
        out.flush()?;

        tracing::info!("Rendered {} reports", sample_roster().len());
        Ok(())
    }

    fn display_message<W: Write>(&self, out: &mut W, message: &str, style: &MessageStyle) -> Result<()> {
        writeln!(out, "{}", render_message(message, style, self.terminal_width))?;
        Ok(())
    }
}
