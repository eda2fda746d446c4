//! The mounted widget instance.

use hostdom::{Document, Event};
use log::debug;

use crate::callbacks::Callbacks;
use crate::config::{Config, Settings};
use crate::engine::{Engine, Flags, Notification, Sink};
use crate::error::MountError;
use crate::events::EventResult;
use crate::locale::Locale;
use crate::render::{self, PartIds};
use crate::view::{Role, View};

/// A checkbox list mounted into a host document.
///
/// The instance is returned to the caller and lives as long as the caller
/// keeps it; nothing is registered globally. Operations run synchronously
/// and deliver their callbacks before returning.
#[derive(Debug)]
pub struct CheckboxList {
    document: Document,
    config: Config,
    locale: Locale,
    engine: Engine,
    view: View,
    callbacks: Callbacks,
}

impl CheckboxList {
    /// Render into `mount_id`, replacing whatever it contained.
    ///
    /// No callbacks fire while mounting.
    pub fn mount(
        settings: Settings,
        document: &Document,
        mount_id: &str,
    ) -> Result<Self, MountError> {
        let config = Config::resolve(&settings);
        let locale = Locale::with_overrides(&settings.locale);
        let callbacks = settings.callbacks;

        let engine = Engine::new(&config);
        let ids = PartIds::new(mount_id);
        let markup = render::render(&config, &locale, &ids, &engine);

        if !document.replace_children(mount_id, vec![markup]) {
            return Err(MountError::MountNotFound(mount_id.to_string()));
        }

        let view = View::build(document, mount_id, &ids, &config)?;
        view.project(document, &engine);

        debug!(
            "Mounted checkbox list in '{}' with {} items, {} selected",
            mount_id,
            config.items.len(),
            engine.selected().len()
        );

        Ok(Self {
            document: document.clone(),
            config,
            locale,
            engine,
            view,
            callbacks,
        })
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Filter items by label. An empty text shows every item.
    pub fn search(&mut self, text: &str) {
        self.run(|engine, sink| engine.search(text, sink));
    }

    pub fn select_all(&mut self, value: bool) {
        self.run(|engine, sink| engine.select_all(value, sink));
    }

    /// Set the checkbox of the item with `value`. Unknown values are ignored.
    pub fn change(&mut self, value: &str, checked: bool) {
        self.run(|engine, sink| engine.change(value, checked, sink));
    }

    pub fn apply(&mut self) {
        self.run(|engine, sink| engine.apply(sink));
    }

    pub fn cancel(&mut self) {
        self.run(|engine, sink| engine.cancel(sink));
    }

    /// Route a host event to the matching operation.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        let Some(role) = self.view.role_of(event.target()) else {
            return EventResult::Ignored;
        };

        match (role, event) {
            (Role::Search, Event::Input { value, .. }) => self.search(value),
            (Role::SelectAll, Event::Change { checked, .. }) => self.select_all(*checked),
            (Role::Item(index), Event::Change { checked, .. }) => {
                let Some(value) = self.config.items.get(index).map(|item| item.value.clone())
                else {
                    return EventResult::Ignored;
                };
                self.change(&value, *checked);
            }
            (Role::Apply, Event::Click { .. }) => self.apply(),
            (Role::Cancel, Event::Click { .. }) => self.cancel(),
            _ => return EventResult::Ignored,
        }

        EventResult::Consumed
    }

    fn run(&mut self, op: impl FnOnce(&mut Engine, &mut Delivery<'_>)) {
        let Self {
            document,
            engine,
            view,
            callbacks,
            ..
        } = self;
        let mut delivery = Delivery {
            document,
            view,
            callbacks,
        };
        op(engine, &mut delivery);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Committed selection.
    pub fn selected(&self) -> &[String] {
        self.engine.selected()
    }

    pub fn flags(&self) -> Flags {
        self.engine.flags()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Delivers engine notifications: the document is brought up to the state
/// each notification describes before its callback runs.
struct Delivery<'a> {
    document: &'a Document,
    view: &'a View,
    callbacks: &'a mut Callbacks,
}

impl Sink for Delivery<'_> {
    fn emit(&mut self, engine: &Engine, notification: Notification) {
        self.view.project(self.document, engine);
        self.callbacks.dispatch(&notification);
    }
}
