//! Formatting options for markup serialization.

/// Options for markup serialization.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Indentation string, used only when `pretty` is set (default: 4 spaces)
    pub indent: &'static str,

    /// Put every node on its own line, indented by depth (default: false)
    pub pretty: bool,

    /// Write childless elements as `<a/>` instead of `<a></a>` (default: true)
    pub self_close_empty: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: "    ",
            pretty: false,
            self_close_empty: true,
        }
    }
}

impl FormatOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// One node per line.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Everything on one line with no whitespace between nodes.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Set a custom indentation string.
    pub fn indent(mut self, indent: &'static str) -> Self {
        self.indent = indent;
        self
    }

    /// Choose between `<a/>` and `<a></a>` for childless elements.
    pub fn self_close_empty(mut self, self_close: bool) -> Self {
        self.self_close_empty = self_close;
        self
    }
}
