//! Collapsible checkbox list widget.
//!
//! Renders a list of checkbox items with optional search filtering,
//! select-all and apply/cancel actions into a [`hostdom::Document`], keeps
//! the rendered state in sync with the committed selection and reports
//! changes through caller-supplied callbacks.

pub mod callbacks;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod locale;
pub mod render;
pub mod selection;
pub mod view;
pub mod widget;

pub use callbacks::Callbacks;
pub use config::{
    ApplyOptions, CancelOptions, Config, ConfigError, Item, SelectAllOptions, Settings, Toggle,
};
pub use engine::{Engine, Flags, ItemState, Notification, Sink};
pub use error::MountError;
pub use events::EventResult;
pub use locale::Locale;
pub use selection::Selection;
pub use widget::CheckboxList;
