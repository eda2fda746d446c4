use std::fmt::Write;

use crate::element::{Content, Element};

/// Tags that never have a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img"];

/// Attributes rendered without a value when present.
const BOOLEAN_ATTRS: &[&str] = &["open", "disabled", "hidden"];

/// Serialize an element tree to HTML markup.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    render_element(element, &mut out);
    out
}

fn render_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    if let Some(id) = &element.id {
        let _ = write!(out, " id=\"{}\"", escape(id));
    }

    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&element.classes.join(" ")));
    }

    for (key, value) in &element.attrs {
        if BOOLEAN_ATTRS.contains(&key.as_str()) {
            let _ = write!(out, " {key}");
        } else {
            let _ = write!(out, " {}=\"{}\"", key, escape(value));
        }
    }

    if element.tag == "input" {
        if !element.value.is_empty() && !element.attrs.contains_key("value") {
            let _ = write!(out, " value=\"{}\"", escape(&element.value));
        }
        if element.checked {
            out.push_str(" checked");
        }
    }

    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                render_element(child, out);
            }
        }
    }

    let _ = write!(out, "</{}>", element.tag);
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
