use usvg::roxmltree;

use crate::foundation::error::{WobbleError, WobbleResult};

/// Fallback for a missing `width` or `height`.
pub const DEFAULT_DIMENSION: &str = "100";

/// Geometry and inner markup pulled out of a user-supplied SVG document.
///
/// Nothing beyond the root attributes is interpreted; the content is a slice
/// of the source text, byte for byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForeignSvg {
    view_box: Option<String>,
    width: Option<String>,
    height: Option<String>,
    namespaces: Vec<(String, String)>,
    content: String,
}

impl ForeignSvg {
    /// Parse `text` and extract the first `svg` element in document order.
    ///
    /// Fails with [`WobbleError::Parse`] when the text is not well-formed XML
    /// or contains no `svg` element.
    pub fn parse(text: &str) -> WobbleResult<Self> {
        let opts = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, opts)
            .map_err(|e| WobbleError::parse(format!("malformed svg document: {e}")))?;

        let svg = doc
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "svg")
            .ok_or_else(|| WobbleError::parse("no svg element found"))?;

        let attr = |name: &str| {
            svg.attribute(name)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        // Prefixes the content may use without declaring them itself.
        let namespaces = svg
            .namespaces()
            .filter_map(|ns| Some((ns.name()?, ns.uri())))
            .filter(|(prefix, _)| !matches!(*prefix, "xml" | "xlink"))
            .map(|(prefix, uri)| (prefix.to_owned(), uri.to_owned()))
            .collect();

        let content = inner_markup(text, svg.range()).to_owned();
        tracing::debug!(
            content_len = content.len(),
            has_view_box = svg.attribute("viewBox").is_some(),
            "parsed foreign svg"
        );

        Ok(Self {
            view_box: attr("viewBox"),
            width: attr("width"),
            height: attr("height"),
            namespaces,
            content,
        })
    }

    /// Source `viewBox`, or `0 0 <width> <height>` built from the resolved size.
    pub fn view_box(&self) -> String {
        match &self.view_box {
            Some(v) => v.clone(),
            None => format!("0 0 {} {}", self.width(), self.height()),
        }
    }

    /// Source `width`, or `"100"`.
    pub fn width(&self) -> &str {
        self.width.as_deref().unwrap_or(DEFAULT_DIMENSION)
    }

    /// Source `height`, or `"100"`.
    pub fn height(&self) -> &str {
        self.height.as_deref().unwrap_or(DEFAULT_DIMENSION)
    }

    /// Prefixed namespaces in scope on the source `svg` element, as
    /// `(prefix, uri)` pairs. `xml` and `xlink` are left out.
    pub fn namespaces(&self) -> &[(String, String)] {
        &self.namespaces
    }

    /// Markup between the root's start and end tags, verbatim.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Slice of `text` between the end of the element's start tag and the start of
/// its end tag. `range` is the element's full byte range.
fn inner_markup(text: &str, range: std::ops::Range<usize>) -> &str {
    let element = &text[range];
    let bytes = element.as_bytes();

    let mut quote = None;
    let mut open_end = None;
    for (i, &b) in bytes.iter().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => {
                open_end = Some(i);
                break;
            }
            (None, _) => {}
        }
    }

    let Some(open_end) = open_end else {
        return "";
    };
    if open_end > 0 && bytes[open_end - 1] == b'/' {
        return "";
    }

    let start = open_end + 1;
    let end = element.rfind("</").filter(|&e| e >= start).unwrap_or(start);
    &element[start..end]
}

#[cfg(test)]
#[path = "../../tests/unit/document/foreign.rs"]
mod tests;
