mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.has_id(id) {
        return Some(root);
    }

    root.content
        .children()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.has_id(id) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Position of a node as child indices from the root.
///
/// Resolved once with [`NodePath::locate`] and then used for direct access
/// without searching the tree again. A path stays valid as long as no
/// ancestor's children are replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Path of the child at `index` below this node.
    pub fn join(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Find the path of the element with the given id.
    pub fn locate(root: &Element, id: &str) -> Option<Self> {
        Self::locate_where(root, &|el| el.has_id(id))
    }

    /// Find the path of the first element (depth-first) matching `pred`.
    pub fn locate_where(root: &Element, pred: &dyn Fn(&Element) -> bool) -> Option<Self> {
        let mut path = Vec::new();
        if locate_in(root, pred, &mut path) {
            Some(Self(path))
        } else {
            None
        }
    }

    pub fn get<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        self.0
            .iter()
            .try_fold(root, |el, &index| el.content.children().get(index))
    }

    pub fn get_mut<'a>(&self, root: &'a mut Element) -> Option<&'a mut Element> {
        let mut current = root;
        for &index in &self.0 {
            current = match &mut current.content {
                Content::Children(children) => children.get_mut(index)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

fn locate_in(el: &Element, pred: &dyn Fn(&Element) -> bool, path: &mut Vec<usize>) -> bool {
    if pred(el) {
        return true;
    }

    for (index, child) in el.content.children().iter().enumerate() {
        path.push(index);
        if locate_in(child, pred, path) {
            return true;
        }
        path.pop();
    }

    false
}
