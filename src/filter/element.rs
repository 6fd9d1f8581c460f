use std::fmt::Write as _;

/// Minimal owned SVG element tree.
///
/// This is the structured ("live") form of generated markup. Text output is
/// only ever produced by serializing one of these, so a structure and its
/// text cannot drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgElement {
    /// Element name, e.g. `filter` or `feTurbulence`.
    pub name: String,
    /// Attributes in emission order.
    pub attrs: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    /// Empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute (builder style).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attrs.push((name.into(), value.to_string()));
        self
    }

    /// Append a child (builder style).
    pub fn with_child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    /// Value of the first attribute called `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<&SvgElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Compact single-line markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_compact(&mut out);
        out
    }

    /// Indented markup: two spaces per level, lines joined by `\n`, no
    /// trailing newline.
    pub fn to_indented(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write_indented(&mut out, depth);
        out
    }

    fn write_compact(&self, out: &mut String) {
        self.write_open(out);
        if self.children.is_empty() {
            out.push_str(" />");
            return;
        }
        out.push('>');
        for c in &self.children {
            c.write_compact(out);
        }
        self.write_close(out);
    }

    /// Append the indented form at `depth` to `out`.
    pub fn write_indented(&self, out: &mut String, depth: usize) {
        push_indent(out, depth);
        self.write_open(out);
        if self.children.is_empty() {
            out.push_str(" />");
            return;
        }
        out.push('>');
        for c in &self.children {
            out.push('\n');
            c.write_indented(out, depth + 1);
        }
        out.push('\n');
        push_indent(out, depth);
        self.write_close(out);
    }

    fn write_open(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {k}=\"");
            escape_attr_into(out, v);
            out.push('"');
        }
    }

    fn write_close(&self, out: &mut String) {
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

pub(crate) fn escape_attr_into(out: &mut String, v: &str) {
    for ch in v.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/element.rs"]
mod tests;
