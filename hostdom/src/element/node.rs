use std::collections::BTreeMap;

use super::Content;

/// A node of the host element tree.
///
/// Mirrors the subset of a browser element the widgets need: a tag, an
/// optional id, a class list, attributes, and the two live properties
/// (`checked`, `value`) that user interaction mutates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: Option<String>,
    pub tag: String,

    // Markup
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub content: Content,

    // Live state (set by user interaction or widgets)
    /// Checked state of a checkbox input.
    pub checked: bool,
    /// Current value of a text input.
    pub value: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn p() -> Self {
        Self::new("p")
    }

    pub fn ul() -> Self {
        Self::new("ul")
    }

    pub fn li() -> Self {
        Self::new("li")
    }

    pub fn label() -> Self {
        Self::new("label")
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new("button").text(text)
    }

    /// Create a collapsible container (rendered open).
    pub fn details() -> Self {
        Self::new("details").attr("open", "")
    }

    pub fn summary() -> Self {
        Self::new("summary")
    }

    /// Create a checkbox input.
    pub fn checkbox() -> Self {
        Self::new("input").attr("type", "checkbox")
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new("input").attr("type", "text")
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    // Classes
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.add_class(name);
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Add a class. Empty names and duplicates are ignored.
    pub fn add_class(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() && !self.has_class(&name) {
            self.classes.push(name);
        }
    }

    pub fn remove_class(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }

    pub fn set_class(&mut self, name: &str, on: bool) {
        if on {
            self.add_class(name);
        } else {
            self.remove_class(name);
        }
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    // Live state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn placeholder(self, text: impl Into<String>) -> Self {
        self.attr("placeholder", text)
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Replace text content in place.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Optionally append a child (keeps builder chains flat).
    pub fn child_if(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }
}
