//! Widget settings and their resolved configuration.
//!
//! [`Settings`] is what the caller hands in: every section is optional and
//! the toggles accept either a plain boolean or an options object. [`Config`]
//! is the read-only snapshot the widget works from, with all defaults filled.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::callbacks::Callbacks;

/// Default heading text.
pub const DEFAULT_TITLE: &str = "Choice";

/// Default extra class of the select-all container.
pub const DEFAULT_SELECT_ALL_CLASS: &str = "select-all";

/// A single checkbox entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Element id of the rendered checkbox. Must be unique in the document.
    pub id: String,
    /// Display text, also used for search matching.
    pub label: String,
    /// Selection key reported to callbacks.
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    /// Initial checked state.
    #[serde(default)]
    pub checked: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            checked: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Accept `"3"` as well as `3` for item values.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// An optional section given either as `true`/`false` or as an options object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Toggle<T> {
    Bool(bool),
    Options(T),
}

impl<T> Default for Toggle<T> {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl<T> From<bool> for Toggle<T> {
    fn from(enabled: bool) -> Self {
        Self::Bool(enabled)
    }
}

impl<T> Toggle<T> {
    fn options(&self) -> Option<&T> {
        match self {
            Self::Bool(_) => None,
            Self::Options(options) => Some(options),
        }
    }
}

/// Options object form of `selectAll`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectAllOptions {
    pub enabled: Option<bool>,
    pub class_name: Option<String>,
    pub checked: bool,
    pub call_on_change_for_each_item: bool,
}

impl From<SelectAllOptions> for Toggle<SelectAllOptions> {
    fn from(options: SelectAllOptions) -> Self {
        Self::Options(options)
    }
}

/// Options object form of `apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplyOptions {
    pub enabled: Option<bool>,
    pub class_name: Option<String>,
    pub save_on_apply: bool,
}

impl From<ApplyOptions> for Toggle<ApplyOptions> {
    fn from(options: ApplyOptions) -> Self {
        Self::Options(options)
    }
}

/// Options object form of `cancel`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelOptions {
    pub enabled: Option<bool>,
    pub class_name: Option<String>,
}

impl From<CancelOptions> for Toggle<CancelOptions> {
    fn from(options: CancelOptions) -> Self {
        Self::Options(options)
    }
}

/// Errors that can occur when reading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Caller-supplied widget settings.
///
/// # Example
///
/// ```
/// use checkbox_list::{ApplyOptions, Item, Settings};
///
/// let settings = Settings::new()
///     .title("Fruit")
///     .search(true)
///     .select_all(true)
///     .apply(ApplyOptions { save_on_apply: true, ..Default::default() })
///     .item(Item::new("fruit-1", "Apple", "apple").checked(true))
///     .on_apply(|selected| println!("{selected:?}"));
/// ```
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub search: bool,
    pub title: Option<String>,
    pub select_all: Toggle<SelectAllOptions>,
    pub apply: Toggle<ApplyOptions>,
    pub cancel: Toggle<CancelOptions>,
    pub items: Vec<Item>,
    /// Locale text overrides by key.
    pub locale: HashMap<String, String>,
    #[serde(skip)]
    pub callbacks: Callbacks,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("search", &self.search)
            .field("title", &self.title)
            .field("select_all", &self.select_all)
            .field("apply", &self.apply)
            .field("cancel", &self.cancel)
            .field("items", &self.items)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a JSON object using the camelCase option names.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn search(mut self, enabled: bool) -> Self {
        self.search = enabled;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn select_all(mut self, select_all: impl Into<Toggle<SelectAllOptions>>) -> Self {
        self.select_all = select_all.into();
        self
    }

    pub fn apply(mut self, apply: impl Into<Toggle<ApplyOptions>>) -> Self {
        self.apply = apply.into();
        self
    }

    pub fn cancel(mut self, cancel: impl Into<Toggle<CancelOptions>>) -> Self {
        self.cancel = cancel.into();
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Override one locale text.
    pub fn locale(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.locale.insert(key.into(), text.into());
        self
    }

    pub fn on_select_all(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.callbacks.on_select_all = Box::new(f);
        self
    }

    pub fn on_search(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_search = Box::new(f);
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&[String], Option<&str>) + 'static) -> Self {
        self.callbacks.on_change = Box::new(f);
        self
    }

    pub fn on_apply(mut self, f: impl FnMut(&[String]) + 'static) -> Self {
        self.callbacks.on_apply = Box::new(f);
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_cancel = Box::new(f);
        self
    }
}

/// Resolved select-all section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectAllConfig {
    pub enabled: bool,
    pub class_name: String,
    /// Initial state; checks every item on mount.
    pub checked: bool,
    /// Run the change pipeline once per item when select-all toggles.
    pub call_on_change_for_each_item: bool,
}

/// Resolved apply section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyConfig {
    pub enabled: bool,
    pub class_name: String,
    /// Commit checkbox state to the selection only on apply.
    pub save_on_apply: bool,
}

/// Resolved cancel section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelConfig {
    pub enabled: bool,
    pub class_name: String,
}

/// Resolved configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub search: bool,
    pub title: String,
    pub select_all: SelectAllConfig,
    pub apply: ApplyConfig,
    pub cancel: CancelConfig,
    pub items: Vec<Item>,
}

impl Config {
    /// Fill in defaults for everything the caller left out.
    pub fn resolve(settings: &Settings) -> Self {
        let select_all = settings.select_all.options();
        let apply = settings.apply.options();
        let cancel = settings.cancel.options();

        let apply_enabled = toggle_enabled(&settings.apply, apply.and_then(|o| o.enabled));
        let cancel_enabled =
            apply_enabled || toggle_enabled(&settings.cancel, cancel.and_then(|o| o.enabled));

        Self {
            search: settings.search,
            title: settings
                .title
                .clone()
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            select_all: SelectAllConfig {
                enabled: toggle_enabled(
                    &settings.select_all,
                    select_all.and_then(|o| o.enabled),
                ),
                class_name: select_all
                    .and_then(|o| o.class_name.clone())
                    .unwrap_or_else(|| DEFAULT_SELECT_ALL_CLASS.to_string()),
                checked: select_all.is_some_and(|o| o.checked),
                call_on_change_for_each_item: select_all
                    .is_some_and(|o| o.call_on_change_for_each_item),
            },
            apply: ApplyConfig {
                enabled: apply_enabled,
                class_name: apply.and_then(|o| o.class_name.clone()).unwrap_or_default(),
                save_on_apply: apply.is_some_and(|o| o.save_on_apply),
            },
            cancel: CancelConfig {
                enabled: cancel_enabled,
                class_name: cancel.and_then(|o| o.class_name.clone()).unwrap_or_default(),
            },
            items: settings.items.clone(),
        }
    }
}

/// An options object enables its section unless it says `enabled: false`.
fn toggle_enabled<T>(toggle: &Toggle<T>, explicit: Option<bool>) -> bool {
    match toggle {
        Toggle::Bool(enabled) => *enabled,
        Toggle::Options(_) => explicit.unwrap_or(true),
    }
}
