//! Display texts by fixed key, with built-in English defaults.

use std::collections::HashMap;

use log::debug;

/// Locale table for the texts the widget renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub search: String,
    pub select_all: String,
    pub apply: String,
    pub cancel: String,
    pub not_found: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale {
    pub fn english() -> Self {
        Self {
            search: "Search".to_string(),
            select_all: "Select all".to_string(),
            apply: "Apply".to_string(),
            cancel: "Cancel".to_string(),
            not_found: "Nothing found".to_string(),
        }
    }

    /// English defaults with any subset of keys replaced.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut locale = Self::english();
        for (key, text) in overrides {
            match locale.slot_mut(key) {
                Some(slot) => *slot = text.clone(),
                None => debug!("Ignoring unknown locale key '{}'", key),
            }
        }
        locale
    }

    /// Look up a text by its key (`search`, `selectAll`, `apply`, `cancel`, `notFound`).
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "search" => Some(&self.search),
            "selectAll" => Some(&self.select_all),
            "apply" => Some(&self.apply),
            "cancel" => Some(&self.cancel),
            "notFound" => Some(&self.not_found),
            _ => None,
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "search" => Some(&mut self.search),
            "selectAll" => Some(&mut self.select_all),
            "apply" => Some(&mut self.apply),
            "cancel" => Some(&mut self.cancel),
            "notFound" => Some(&mut self.not_found),
            _ => None,
        }
    }
}
