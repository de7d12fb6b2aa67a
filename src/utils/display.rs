use owo_colors::{AnsiColors, OwoColorize};

/// How a single console message is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageStyle {
    pub centered: bool,
    /// `None` keeps the terminal's default foreground.
    pub color: Option<AnsiColors>,
}

impl MessageStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn banner(color: Option<AnsiColors>) -> Self {
        Self {
            centered: true,
            color,
        }
    }
}

/// Left-pads `message` to a total width of `(width + len) / 2`.
pub fn center(message: &str, width: usize) -> String {
    let pad = (width + message.chars().count()) / 2;
    format!("{:>pad$}", message, pad = pad)
}

pub fn render_message(message: &str, style: &MessageStyle, width: usize) -> String {
    let text = if style.centered {
        center(message, width)
    } else {
        message.to_string()
    };

    match style.color {
        Some(color) => text.color(color).to_string(),
        None => text,
    }
}
