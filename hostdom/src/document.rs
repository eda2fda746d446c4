//! Shared handle over a host element tree.

use std::sync::{Arc, RwLock};

use log::{debug, trace};

use crate::element::{find_element, find_element_mut, Content, Element, NodePath};

/// A host document: the element tree widgets mount into.
///
/// Cloning the handle shares the tree. A poisoned lock is reported as the
/// element being unavailable rather than a panic.
#[derive(Debug, Clone)]
pub struct Document {
    root: Arc<RwLock<Element>>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root: Arc::new(RwLock::new(root)),
        }
    }

    /// Check whether an element with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.read(id, |_| ()).is_some()
    }

    /// Resolve the path of an element for later direct access.
    pub fn locate(&self, id: &str) -> Option<NodePath> {
        self.root
            .read()
            .ok()
            .and_then(|root| NodePath::locate(&root, id))
    }

    /// Resolve the path of the first element matching `pred` below `from`.
    ///
    /// The returned path is absolute (from the document root).
    pub fn locate_below(
        &self,
        from: &NodePath,
        pred: &dyn Fn(&Element) -> bool,
    ) -> Option<NodePath> {
        let root = self.root.read().ok()?;
        let base = from.get(&root)?;
        let relative = NodePath::locate_where(base, pred)?;
        Some(
            relative
                .indices()
                .iter()
                .fold(from.clone(), |path, &index| path.join(index)),
        )
    }

    pub fn read<R>(&self, id: &str, f: impl FnOnce(&Element) -> R) -> Option<R> {
        let root = self.root.read().ok()?;
        find_element(&root, id).map(f)
    }

    pub fn update<R>(&self, id: &str, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let mut root = self.root.write().ok()?;
        find_element_mut(&mut root, id).map(f)
    }

    pub fn read_at<R>(&self, path: &NodePath, f: impl FnOnce(&Element) -> R) -> Option<R> {
        let root = self.root.read().ok()?;
        path.get(&root).map(f)
    }

    pub fn update_at<R>(&self, path: &NodePath, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let mut root = self.root.write().ok()?;
        trace!("update_at {:?}", path);
        path.get_mut(&mut root).map(f)
    }

    /// Replace all children of an element. Returns false if it was not found.
    pub fn replace_children(&self, id: &str, children: Vec<Element>) -> bool {
        let replaced = self
            .update(id, |el| el.content = Content::Children(children))
            .is_some();
        debug!("replace_children '{}': {}", id, replaced);
        replaced
    }

    /// Clone of the whole tree.
    pub fn snapshot(&self) -> Option<Element> {
        self.root.read().ok().map(|root| root.clone())
    }

    /// Serialize the whole tree to markup.
    pub fn to_html(&self) -> String {
        self.root
            .read()
            .map(|root| crate::render::to_html(&root))
            .unwrap_or_default()
    }
}
