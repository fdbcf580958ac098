//! Command-line front end for termrule.
//!
//! Exposes the full configuration surface of [`termrule::Rule`] as flags and
//! prints the composed line to stdout. Numeric conventions from the flag
//! surface are normalized here: a negative width selects the ambient
//! terminal width, and negative pad counts clamp to zero repeats.

use anyhow::Context;
use clap::Parser;
use termrule::{Position, Rule, Width};

/// Draw a horizontal rule across the terminal, optionally captioned.
#[derive(Debug, Parser)]
#[command(name = "termrule", version, about)]
struct Cli {
    /// Caption text embedded in the rule; omit for an unbroken line
    #[arg(default_value = "")]
    caption: String,

    /// Caption placement: left, right, or center (unrecognized names center)
    #[arg(short, long, default_value = "center")]
    position: String,

    /// Fill string; only its first character is used
    #[arg(short, long, default_value = "-")]
    fill: String,

    /// Fill characters between the rule body and the caption, both sides
    #[arg(long, default_value_t = 2, allow_hyphen_values = true)]
    pad: i64,

    /// Override the left-side pad count
    #[arg(long, allow_hyphen_values = true)]
    left_pad: Option<i64>,

    /// Override the right-side pad count
    #[arg(long, allow_hyphen_values = true)]
    right_pad: Option<i64>,

    /// Total width in columns; negative or omitted uses the terminal width
    #[arg(short, long, allow_hyphen_values = true)]
    width: Option<i64>,

    /// Caption color/style spec, e.g. "cyan", "bold", or "cyan+bold"
    #[arg(short, long, default_value = "")]
    color: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    Rule::new()
        .caption(cli.caption)
        .position(Position::parse(&cli.position))
        .fill(cli.fill)
        .left_pad(clamp_pad(cli.left_pad.unwrap_or(cli.pad)))
        .right_pad(clamp_pad(cli.right_pad.unwrap_or(cli.pad)))
        .width(resolve_width(cli.width))
        .style(cli.color)
        .print()
        .context("failed to draw rule")
}

/// Maps the flag-surface width convention onto [`Width`].
fn resolve_width(arg: Option<i64>) -> Width {
    match arg {
        Some(columns) if columns >= 0 => Width::Columns(columns as usize),
        // Negative is the "use the terminal" sentinel on the flag surface.
        _ => Width::Auto,
    }
}

/// Negative pad counts mean zero repeats, not an error.
fn clamp_pad(count: i64) -> usize {
    count.max(0) as usize
}
