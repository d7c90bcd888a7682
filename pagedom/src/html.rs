//! HTML serialization.
//!
//! Generated IDs stay internal: only IDs set through [`Element::id`] are
//! written out.

use std::fmt::{self, Write};

use crate::document::Document;
use crate::element::{Content, Element};

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_element(f: &mut impl Write, element: &Element) -> fmt::Result {
    write!(f, "<{}", element.tag)?;
    if element.named {
        write!(f, " id=\"{}\"", escape(&element.id))?;
    }
    if !element.classes.is_empty() {
        write!(f, " class=\"{}\"", escape(&element.classes.to_string()))?;
    }
    for (name, value) in &element.attributes {
        write!(f, " {}=\"{}\"", name, escape(value))?;
    }
    f.write_char('>')?;

    match &element.content {
        Content::None => {}
        Content::Text(text) => f.write_str(&escape(text))?,
        Content::Children(children) => {
            for child in children {
                write_element(f, child)?;
            }
        }
    }

    write!(f, "</{}>", element.tag)
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self)
    }
}

impl Document {
    pub fn to_html(&self) -> String {
        self.root().to_string()
    }
}
