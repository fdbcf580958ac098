//! Termrule - captioned horizontal rules for terminal output.
//!
//! Termrule composes a single line of fill characters at a target width,
//! optionally embedding a caption at the left, right, or center, with
//! optional ANSI color and bold decoration. It supports:
//!
//! - Caption placement: [`Position::Left`], [`Position::Right`], [`Position::Center`]
//! - Configurable fill character and per-side padding counts
//! - Explicit widths or the ambient terminal width ([`Width::Auto`])
//! - Caption styling via specs like `"cyan"`, `"bold"`, `"cyan+bold"`
//!
//! Composition is a pure function of the configuration: no state survives a
//! call, and the escape-code table is immutable `const` data, so concurrent
//! use needs no coordination.
//!
//! # Quick Start
//!
//! ```rust
//! use termrule::{Position, Rule};
//!
//! // A plain 40-column separator.
//! let line = Rule::new().width(40).compose()?;
//! assert_eq!(line, "-".repeat(40));
//!
//! // A captioned section header.
//! let line = Rule::new()
//!     .caption("Results")
//!     .position(Position::Left)
//!     .width(40)
//!     .compose()?;
//! assert!(line.starts_with("-- Results "));
//! # Ok::<(), termrule::RuleError>(())
//! ```
//!
//! # Styled Captions
//!
//! ```rust
//! use termrule::Rule;
//!
//! let line = Rule::new()
//!     .caption("Deploy")
//!     .style("cyan+bold")
//!     .width(50)
//!     .compose()?;
//!
//! assert!(line.contains("\x1b[36m\x1b[1m"));
//! assert!(line.contains("\x1b[0m"));
//! # Ok::<(), termrule::RuleError>(())
//! ```
//!
//! # Layout Rules
//!
//! The caption is wrapped into a decorated block (padding fill, spacing,
//! and escape codes), then the remaining columns are filled:
//!
//! - Left: block first, fill appended.
//! - Right: fill prepended, block last.
//! - Center: fill split evenly; an odd leftover column goes to the right.
//!
//! Escape sequences never count toward the width. A block that is already
//! as wide as the target is returned as-is, never truncated.

mod error;
mod line;
mod style;
mod width;

// Re-export public API
pub use error::{Result, RuleError};
pub use line::{Position, Rule};
pub use style::CaptionStyle;
pub use width::Width;
