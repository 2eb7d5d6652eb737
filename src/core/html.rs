//! A very small HTML tag builder, enough to render inline-styled log lines.

use std::fmt::Write as _;

/// HTML-escapes text and attribute values (`&`, `<`, `>`, `"`, `'` and `/`).
pub fn escape(text: &str) -> String {
    tera::escape_html(text)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: &'static str,
    attributes: Vec<(String, String)>,
    text: String,
}

impl Tag {
    pub fn new(name: &'static str, text: impl Into<String>) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            text: text.into(),
        }
    }

    /// Adds an attribute. Empty values are dropped when rendering.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_style(self, css: impl Into<String>) -> Self {
        self.attr("style", css)
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn render(&self) -> String {
        let mut html = format!("<{}", self.name);
        for (name, value) in &self.attributes {
            if value.is_empty() {
                continue;
            }
            let _ = write!(html, " {}=\"{}\"", name, escape(value));
        }
        let _ = write!(html, ">{}</{}>", escape(&self.text), self.name);
        html
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

pub fn span(text: impl Into<String>) -> Tag {
    Tag::new("span", text)
}
