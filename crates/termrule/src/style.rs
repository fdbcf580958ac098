//! Caption style resolution.
//!
//! A style spec is a small string like `"cyan"`, `"bold"`, or `"cyan+bold"`:
//! at most two `+`-separated tokens, one of which must be `bold` whenever two
//! are given. Tokens resolve to ANSI escape prefixes through an immutable
//! table, concatenated in input order, and the matching reset suffix is
//! attached whenever any prefix was produced.

use crate::error::{Result, RuleError};

const BLACK: &str = "\x1b[30m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";
// Bright black, the conventional terminal grey.
const GREY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// A resolved caption style: an escape prefix and its reset suffix.
///
/// The prefix may carry several codes (`"cyan+bold"` produces the cyan code
/// followed by the bold code). The reset suffix is non-empty exactly when
/// the prefix is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptionStyle {
    prefix: String,
    reset: &'static str,
}

impl CaptionStyle {
    /// A style that applies no decoration.
    pub fn plain() -> Self {
        CaptionStyle::default()
    }

    /// Parses a style spec.
    ///
    /// Everything that is not an ASCII letter or `+` is stripped before
    /// interpretation and the remainder is lowercased, so `" Cyan + Bold "`
    /// parses the same as `"cyan+bold"`. An empty spec resolves to
    /// [`CaptionStyle::plain`].
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidStyleCombination`] when the spec has more
    /// than two tokens, or two tokens neither of which is `bold`, and
    /// [`RuleError::InvalidStyleToken`] when a token is not a recognized
    /// color name or modifier.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.is_empty() {
            return Ok(CaptionStyle::plain());
        }

        let sanitized: String = spec
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == '+')
            .collect::<String>()
            .to_ascii_lowercase();
        let parts: Vec<&str> = sanitized.split('+').collect();

        if parts.len() > 2 || (parts.len() == 2 && !parts.contains(&"bold")) {
            return Err(RuleError::InvalidStyleCombination(spec.to_string()));
        }

        let mut prefix = String::new();
        for part in &parts {
            prefix.push_str(lookup(part)?);
        }

        Ok(CaptionStyle {
            reset: if prefix.is_empty() { "" } else { RESET },
            prefix,
        })
    }

    /// The escape sequence emitted before the caption.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The escape sequence emitted after the caption.
    pub fn reset(&self) -> &str {
        self.reset
    }

    /// Whether this style applies no decoration.
    pub fn is_plain(&self) -> bool {
        self.prefix.is_empty()
    }
}

/// Looks up the escape code for a single style token.
fn lookup(token: &str) -> Result<&'static str> {
    let code = match token {
        "black" => BLACK,
        "blue" => BLUE,
        "cyan" => CYAN,
        "green" => GREEN,
        "grey" => GREY,
        "magenta" => MAGENTA,
        "red" => RED,
        "white" => WHITE,
        "yellow" => YELLOW,
        "bold" => BOLD,
        "reset" => RESET,
        _ => return Err(RuleError::InvalidStyleToken(token.to_string())),
    };
    Ok(code)
}
