//! Rule construction and layout.
//!
//! [`Rule`] is a fluent builder over the whole configuration surface:
//! caption, position, fill character, padding, width, and caption style.
//! [`Rule::compose`] runs the layout and returns the finished line;
//! [`Rule::print`] writes it to stdout.

use console::{measure_text_width, Term};

use crate::error::Result;
use crate::style::CaptionStyle;
use crate::width::Width;

/// Placement of the caption within the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Caption at the left edge, fill extending right.
    Left,
    /// Caption at the right edge, fill extending left.
    Right,
    /// Caption in the middle, fill split on both sides.
    #[default]
    Center,
}

impl Position {
    /// Parses a position name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Position::Center`] rather than
    /// failing; position is a normalized input, not a validated one.
    pub fn parse(name: &str) -> Position {
        match name.to_ascii_lowercase().as_str() {
            "left" => Position::Left,
            "right" => Position::Right,
            _ => Position::Center,
        }
    }
}

/// A captioned horizontal rule.
///
/// # Example
///
/// ```rust
/// use termrule::{Position, Rule};
///
/// let line = Rule::new()
///     .caption("Results")
///     .position(Position::Left)
///     .width(40)
///     .compose()?;
///
/// assert!(line.starts_with("-- Results "));
/// # Ok::<(), termrule::RuleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    caption: String,
    position: Position,
    fill: String,
    left_pad: usize,
    right_pad: usize,
    width: Width,
    style: String,
}

impl Default for Rule {
    fn default() -> Self {
        Rule {
            caption: String::new(),
            position: Position::Center,
            fill: "-".to_string(),
            left_pad: 2,
            right_pad: 2,
            width: Width::Auto,
            style: String::new(),
        }
    }
}

impl Rule {
    /// Creates a rule with the default configuration: no caption, centered,
    /// `-` fill, pads of 2, ambient width, no style.
    pub fn new() -> Self {
        Rule::default()
    }

    /// Sets the caption text. An empty caption composes to an unbroken line.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Sets the caption position.
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the fill string. Only its first character is used; an empty
    /// string yields empty fill runs.
    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets both padding counts at once.
    pub fn pad(self, count: usize) -> Self {
        self.left_pad(count).right_pad(count)
    }

    /// Sets the fill count between the left edge and a left-positioned caption.
    pub fn left_pad(mut self, count: usize) -> Self {
        self.left_pad = count;
        self
    }

    /// Sets the fill count between a right-positioned caption and the right edge.
    pub fn right_pad(mut self, count: usize) -> Self {
        self.right_pad = count;
        self
    }

    /// Sets the target width.
    pub fn width(mut self, width: impl Into<Width>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the caption style spec, e.g. `"cyan"`, `"bold"`, or `"cyan+bold"`.
    pub fn style(mut self, spec: impl Into<String>) -> Self {
        self.style = spec.into();
        self
    }

    /// Composes the rule into its final string.
    ///
    /// # Errors
    ///
    /// Fails only when the caption is styled and the style spec is invalid.
    /// A zero width or an empty caption short-circuits before the spec is
    /// looked at.
    pub fn compose(&self) -> Result<String> {
        let width = self.width.resolve();
        if width == 0 {
            return Ok(String::new());
        }

        let fill = self.fill.chars().next();
        if self.caption.is_empty() {
            return Ok(fill_run(fill, width));
        }

        let style = CaptionStyle::parse(&self.style)?;
        let block = self.decorated_block(&style, fill);

        // Escape sequences never count toward width.
        let text_len = measure_text_width(&block);
        if text_len >= width {
            // Too long to fit: the caption block wins over the width.
            return Ok(format!("{}{}{}", style.prefix(), block, style.reset()));
        }

        let remaining = width - text_len;
        Ok(match self.position {
            Position::Left => format!("{}{}", block, fill_run(fill, remaining)),
            Position::Right => format!("{}{}", fill_run(fill, remaining), block),
            Position::Center => {
                let left = remaining / 2;
                // Odd remainder: the extra fill character goes right.
                format!(
                    "{}{}{}",
                    fill_run(fill, left),
                    block,
                    fill_run(fill, remaining - left)
                )
            }
        })
    }

    /// Composes the rule and writes it to stdout.
    ///
    /// # Errors
    ///
    /// Fails on an invalid style spec or when the terminal write fails.
    pub fn print(&self) -> Result<()> {
        let line = self.compose()?;
        Term::stdout().write_line(&line)?;
        Ok(())
    }

    /// The caption with its surrounding spacing, padding, and escape codes,
    /// before outer fill distribution.
    fn decorated_block(&self, style: &CaptionStyle, fill: Option<char>) -> String {
        match self.position {
            Position::Left => format!(
                "{}{}{}{}{} ",
                fill_run(fill, self.left_pad),
                if self.left_pad > 0 { " " } else { "" },
                style.prefix(),
                self.caption,
                style.reset()
            ),
            Position::Right => format!(
                " {}{}{}{}{}",
                style.prefix(),
                self.caption,
                style.reset(),
                if self.right_pad > 0 { " " } else { "" },
                fill_run(fill, self.right_pad)
            ),
            // Centered captions always get one space each side; the pad
            // counts are a left/right concern.
            Position::Center => {
                format!(" {}{}{} ", style.prefix(), self.caption, style.reset())
            }
        }
    }
}

/// Repeats the fill character `count` times; no fill character, no run.
fn fill_run(fill: Option<char>, count: usize) -> String {
    match fill {
        Some(c) => std::iter::repeat(c).take(count).collect(),
        None => String::new(),
    }
}
