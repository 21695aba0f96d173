//! Output layout for built query documents.

/// Line terminator used by [`Formatting::Indented`].
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line terminator used by [`Formatting::Indented`].
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Spaces added per nesting level in indented output.
pub const INDENT_WIDTH: usize = 4;

/// How a query document is laid out when built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Formatting {
    /// Single line, every separator is one space. Suitable as a wire payload.
    #[default]
    Compact,
    /// One item per line, four spaces of indentation per nesting level.
    Indented,
}

impl Formatting {
    /// Separator placed between items and around block bodies.
    pub fn separator(self) -> &'static str {
        match self {
            Formatting::Compact => " ",
            Formatting::Indented => LINE_ENDING,
        }
    }

    /// Indentation prefix for the given nesting level.
    pub fn indent(self, nesting: usize) -> String {
        match self {
            Formatting::Compact => String::new(),
            Formatting::Indented => " ".repeat(nesting * INDENT_WIDTH),
        }
    }
}
