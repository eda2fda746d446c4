//! Indexed view over the mounted markup.
//!
//! Built once after mounting. Resolves node paths for every part the engine
//! projects into, so updates never search the tree again, and maps element
//! ids back to widget parts for event routing.

use std::collections::HashMap;

use hostdom::{Document, Element, NodePath};
use log::trace;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::MountError;
use crate::render::{self, PartIds};

/// Which part of the widget an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Search,
    SelectAll,
    /// Item checkbox, by item index.
    Item(usize),
    Apply,
    Cancel,
}

#[derive(Debug, Clone)]
struct ItemNodes {
    row: NodePath,
    checkbox: NodePath,
}

#[derive(Debug, Clone)]
pub struct View {
    items: Vec<ItemNodes>,
    roles: HashMap<String, Role>,
    summary_count: NodePath,
    search_input: Option<NodePath>,
    select_all: Option<NodePath>,
    not_found: Option<NodePath>,
}

impl View {
    /// Resolve paths for a widget freshly rendered into `mount_id`.
    pub fn build(
        document: &Document,
        mount_id: &str,
        ids: &PartIds,
        config: &Config,
    ) -> Result<Self, MountError> {
        let mount = document
            .locate(mount_id)
            .ok_or_else(|| MountError::MountNotFound(mount_id.to_string()))?;

        let part = |id: &str, name: &'static str| {
            document
                .locate_below(&mount, &|el: &Element| el.has_id(id))
                .ok_or_else(|| MountError::MissingPart {
                    mount: mount_id.to_string(),
                    part: name,
                })
        };

        let items_path = part(&ids.items, "item list")?;
        let summary_count = part(&ids.summary_count, "summary count")?;
        let search_input = config
            .search
            .then(|| part(&ids.search_input, "search input"))
            .transpose()?;
        let select_all = config
            .select_all
            .enabled
            .then(|| part(&ids.select_all, "select-all checkbox"))
            .transpose()?;
        let not_found = config
            .search
            .then(|| part(&ids.not_found, "not-found message"))
            .transpose()?;

        let mut roles = HashMap::new();
        let mut items = Vec::with_capacity(config.items.len());

        for (index, item) in config.items.iter().enumerate() {
            let row = items_path.join(index);
            let checkbox = document
                .locate_below(&row, &|el: &Element| el.has_class(render::CHECKBOX))
                .ok_or_else(|| MountError::MissingPart {
                    mount: mount_id.to_string(),
                    part: "item checkbox",
                })?;

            let found = document
                .read_at(&checkbox, |el| el.get_attr("value").cloned())
                .flatten();
            if found.as_deref() != Some(item.value.as_str()) {
                return Err(MountError::ValueMismatch {
                    mount: mount_id.to_string(),
                    index,
                    expected: item.value.clone(),
                    found,
                });
            }

            roles.insert(item.id.clone(), Role::Item(index));
            items.push(ItemNodes { row, checkbox });
        }

        if config.search {
            roles.insert(ids.search_input.clone(), Role::Search);
        }
        if config.select_all.enabled {
            roles.insert(ids.select_all.clone(), Role::SelectAll);
        }
        if config.apply.enabled {
            roles.insert(ids.apply.clone(), Role::Apply);
        }
        if config.cancel.enabled {
            roles.insert(ids.cancel.clone(), Role::Cancel);
        }

        Ok(Self {
            items,
            roles,
            summary_count,
            search_input,
            select_all,
            not_found,
        })
    }

    /// Widget part an element id belongs to.
    pub fn role_of(&self, target: &str) -> Option<Role> {
        self.roles.get(target).copied()
    }

    /// Write the engine's state into the document.
    pub fn project(&self, document: &Document, engine: &Engine) {
        trace!("projecting {} items", self.items.len());

        for (nodes, state) in self.items.iter().zip(engine.states()) {
            document.update_at(&nodes.row, |el| el.set_class(render::HIDDEN, state.hidden));
            document.update_at(&nodes.checkbox, |el| el.checked = state.checked);
        }

        document.update_at(&self.summary_count, |el| {
            el.set_text(render::summary_count_text(engine.checked_count()))
        });

        if let Some(path) = &self.select_all {
            document.update_at(path, |el| el.checked = engine.select_all_checked());
        }
        if let Some(path) = &self.search_input {
            document.update_at(path, |el| el.value = engine.search_text().to_string());
        }
        if let Some(path) = &self.not_found {
            document.update_at(path, |el| {
                el.set_class(render::HIDDEN, !engine.nothing_found())
            });
        }
    }
}
