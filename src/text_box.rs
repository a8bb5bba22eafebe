//! Text boxes for terminal output
//!
//! Draws a border around multi-line text, optionally with a title set into
//! the top edge:
//!
//! ```text
//! ┌─ Subnet ─────────────┐
//! │ network  10.0.0.0/16 │
//! │ hosts    65534       │
//! └──────────────────────┘
//! ```
//!
//! Widths are measured in terminal columns, so CJK text and emoji line up.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::config::TextBoxConfig;

/// Border character set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoxStyle {
    #[default]
    Single,
    Double,
    Rounded,
    Ascii,
}

struct Glyphs {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horiz: &'static str,
    vert: &'static str,
}

impl BoxStyle {
    fn glyphs(self) -> Glyphs {
        match self {
            BoxStyle::Single => Glyphs {
                top_left: "┌",
                top_right: "┐",
                bottom_left: "└",
                bottom_right: "┘",
                horiz: "─",
                vert: "│",
            },
            BoxStyle::Double => Glyphs {
                top_left: "╔",
                top_right: "╗",
                bottom_left: "╚",
                bottom_right: "╝",
                horiz: "═",
                vert: "║",
            },
            BoxStyle::Rounded => Glyphs {
                top_left: "╭",
                top_right: "╮",
                bottom_left: "╰",
                bottom_right: "╯",
                horiz: "─",
                vert: "│",
            },
            BoxStyle::Ascii => Glyphs {
                top_left: "+",
                top_right: "+",
                bottom_left: "+",
                bottom_right: "+",
                horiz: "-",
                vert: "|",
            },
        }
    }
}

/// Box renderer. Build once, render many bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    style: BoxStyle,
    title: Option<String>,
    padding: usize,
    min_width: usize,
    color: bool,
}

impl Default for TextBox {
    fn default() -> Self {
        Self {
            style: BoxStyle::Single,
            title: None,
            padding: 1,
            min_width: 0,
            color: false,
        }
    }
}

impl TextBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer preconfigured from the `[text_box]` config section.
    pub fn from_config(config: &TextBoxConfig) -> Self {
        Self {
            style: config.style,
            title: None,
            padding: config.padding,
            min_width: config.min_width,
            color: config.color,
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Spaces between the border and the text on each side.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Minimum text width in columns, excluding padding.
    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    /// Color the border (ANSI). Off by default so output is plain text.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn paint(&self, s: String) -> String {
        if self.color {
            s.cyan().to_string()
        } else {
            s
        }
    }

    /// Draw the box around `body`. Tabs are expanded to four spaces.
    pub fn render(&self, body: &str) -> String {
        let g = self.style.glyphs();
        let lines: Vec<String> = body.lines().map(|l| l.replace('\t', "    ")).collect();

        let title_width = self.title.as_deref().map(UnicodeWidthStr::width);
        let text_width = lines
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0)
            .max(self.min_width);

        let mut inner = text_width + 2 * self.padding;
        if let Some(tw) = title_width {
            // "─ title ─" needs four extra columns
            inner = inner.max(tw + 4);
        }
        let text_width = inner - 2 * self.padding;

        let top = match &self.title {
            Some(title) => {
                let tw = title_width.unwrap_or(0);
                let title = if self.color {
                    title.bold().to_string()
                } else {
                    title.clone()
                };
                format!(
                    "{} {} {}",
                    self.paint(format!("{}{}", g.top_left, g.horiz)),
                    title,
                    self.paint(format!("{}{}", g.horiz.repeat(inner - tw - 3), g.top_right)),
                )
            }
            None => self.paint(format!("{}{}{}", g.top_left, g.horiz.repeat(inner), g.top_right)),
        };

        let bottom = self.paint(format!(
            "{}{}{}",
            g.bottom_left,
            g.horiz.repeat(inner),
            g.bottom_right
        ));

        let pad = " ".repeat(self.padding);
        let vert = self.paint(g.vert.to_string());
        let mut result = format!("{}\n", top);
        for line in &lines {
            let fill = text_width - UnicodeWidthStr::width(line.as_str());
            result.push_str(&format!(
                "{}{}{}{}{}{}\n",
                vert,
                pad,
                line,
                " ".repeat(fill),
                pad,
                vert
            ));
        }
        result.push_str(&bottom);
        result
    }
}

/// Box drawing for important content, single style, no color.
pub fn render_box(title: &str, content: &str) -> String {
    TextBox::new().title(title).render(content)
}
