//! Ambient terminal width detection.

/// Columns assumed when the process has no terminal attached.
const FALLBACK_COLUMNS: usize = 80;

/// Target width for a composed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    /// Use the ambient terminal width, minus one reserved column.
    #[default]
    Auto,
    /// Use exactly this many columns. Zero composes to an empty string.
    Columns(usize),
}

impl Width {
    /// Resolves to a concrete column count.
    ///
    /// In [`Width::Auto`] mode one column is held back so a full-width rule
    /// does not trigger the terminal's automatic line wrap.
    pub(crate) fn resolve(self) -> usize {
        match self {
            Width::Columns(columns) => columns,
            Width::Auto => ambient_columns().saturating_sub(1),
        }
    }
}

impl From<usize> for Width {
    fn from(columns: usize) -> Self {
        Width::Columns(columns)
    }
}

/// Current terminal width, or the conventional 80 columns without a terminal.
fn ambient_columns() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(FALLBACK_COLUMNS)
}
