//! Low-level markup output writer.
//!
//! Elements are written as a stream of begin/end calls. The `>` that ends an open
//! tag is held back until the first child arrives, so childless elements can still
//! be written self-closing.

use crate::escape::escape_arg_value;
use crate::options::FormatOptions;

/// An element whose close tag has not been written yet.
#[derive(Debug, Clone)]
struct OpenElement {
    name: String,
    /// False while the open tag is still missing its `>`.
    has_children: bool,
}

/// Low-level markup output writer.
pub struct MarkupWriter {
    out: String,
    stack: Vec<OpenElement>,
    options: FormatOptions,
}

impl MarkupWriter {
    /// Create a new writer with default options.
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    /// Create a new writer with the given options.
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            out: String::new(),
            stack: Vec::new(),
            options,
        }
    }

    /// Consume the writer and return the output.
    ///
    /// Elements still open are closed first. Pretty output ends with a newline.
    pub fn finish(mut self) -> String {
        while self.end_element().is_ok() {}
        if self.options.pretty && !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn write_newline_indent(&mut self) {
        self.out.push('\n');
        for _ in 0..self.stack.len() {
            self.out.push_str(self.options.indent);
        }
    }

    /// Complete the parent's open tag if needed, then move to where the next node goes.
    fn before_node(&mut self) {
        if let Some(parent) = self.stack.last_mut()
            && !parent.has_children
        {
            parent.has_children = true;
            self.out.push('>');
        }
        if self.options.pretty && !self.out.is_empty() {
            self.write_newline_indent();
        }
    }

    fn open_tag(&mut self, name: &str) {
        self.before_node();
        self.out.push('<');
        self.out.push_str(name);
    }

    fn push_open(&mut self, name: &str) {
        self.stack.push(OpenElement {
            name: name.to_string(),
            has_children: false,
        });
    }

    /// Begin an element with parsed attributes.
    ///
    /// Values are quoted and escaped; keys are written as-is.
    pub fn begin_element<'a>(
        &mut self,
        name: &str,
        args: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) {
        self.open_tag(name);
        for (key, value) in args {
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push_str("=\"");
            self.out.push_str(&escape_arg_value(value));
            self.out.push('"');
        }
        self.push_open(name);
    }

    /// Begin an element whose attribute text is written verbatim.
    pub fn begin_element_raw(&mut self, name: &str, arg_string: &str) {
        self.open_tag(name);
        let arg_string = arg_string.trim();
        if !arg_string.is_empty() {
            self.out.push(' ');
            self.out.push_str(arg_string);
        }
        self.push_open(name);
    }

    /// End the innermost open element.
    ///
    /// Returns an error message if no element is open.
    pub fn end_element(&mut self) -> Result<(), &'static str> {
        let Some(element) = self.stack.pop() else {
            return Err("end_element called without matching begin_element");
        };

        if !element.has_children {
            if self.options.self_close_empty {
                self.out.push_str("/>");
                return Ok(());
            }
            self.out.push('>');
        } else if self.options.pretty {
            // Indent at the parent level (already popped)
            self.write_newline_indent();
        }

        self.out.push_str("</");
        self.out.push_str(&element.name);
        self.out.push('>');
        Ok(())
    }

    /// Write a text run verbatim.
    pub fn write_text(&mut self, text: &str) {
        self.before_node();
        self.out.push_str(text);
    }
}

impl Default for MarkupWriter {
    fn default() -> Self {
        Self::new()
    }
}
