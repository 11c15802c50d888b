//! HTML markup builder
//!
//! A small fluent builder over a `String`. Text passed to `text` and
//! `element` is escaped; `raw` is written as-is.

/// Escape `& < > " '` for element text and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// HTML markup builder
pub struct HtmlBuilder {
    buf: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(8192),
        }
    }

    // === Elements ===

    /// Open a tag with an optional class list
    pub fn open(&mut self, tag: &str, class: &str) -> &mut Self {
        self.open_with(tag, class, &[])
    }

    /// Open a tag with a class list and extra attributes
    pub fn open_with(&mut self, tag: &str, class: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        if !class.is_empty() {
            self.attr("class", class);
        }
        for (name, value) in attrs {
            self.attr(name, value);
        }
        self.buf.push('>');
        self
    }

    /// Close a tag
    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// `<tag class="..">text</tag>`
    pub fn element(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        self.open(tag, class);
        self.text(text);
        self.close(tag)
    }

    /// Void element such as `<img>` or `<br>`
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.attr(name, value);
        }
        self.buf.push_str(" />");
        self
    }

    fn attr(&mut self, name: &str, value: &str) {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&escape_html(value));
        self.buf.push('"');
    }

    // === Text ===

    /// Write escaped text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(&escape_html(s));
        self
    }

    /// Write markup verbatim
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write a newline (keeps generated documents readable)
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Build ===

    pub fn build(self) -> String {
        self.buf
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("A & B <Co>"), "A &amp; B &lt;Co&gt;");
        assert_eq!(escape_html(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
        assert_eq!(escape_html("₱1,234.50"), "₱1,234.50");
    }

    #[test]
    fn test_element_escapes_text() {
        let mut b = HtmlBuilder::new();
        b.element("td", "text-right", "<b>");
        assert_eq!(b.build(), r#"<td class="text-right">&lt;b&gt;</td>"#);
    }

    #[test]
    fn test_open_with_attrs() {
        let mut b = HtmlBuilder::new();
        b.open_with("th", "border", &[("colspan", "2")])
            .text("Net Sales")
            .close("th");
        assert_eq!(b.build(), r#"<th class="border" colspan="2">Net Sales</th>"#);
    }

    #[test]
    fn test_void_and_raw() {
        let mut b = HtmlBuilder::default();
        b.void("img", &[("src", "/logo.png"), ("alt", "Company Logo")])
            .raw("<br>");
        assert_eq!(b.build(), r#"<img src="/logo.png" alt="Company Logo" /><br>"#);
    }
}
