//! Markup for the widget.
//!
//! Class names are stable and meant for external styling and tests.
//! Interactive parts get ids derived from the mount id so host events can be
//! routed back to the widget.

use hostdom::Element;

use crate::config::{Config, Item};
use crate::engine::Engine;
use crate::locale::Locale;

pub const ROOT: &str = "checkbox-list";
pub const TITLE: &str = "checkbox-list__title";
pub const SUMMARY_TEXT: &str = "checkbox-list__summary-text";
pub const SUMMARY_COUNT: &str = "checkbox-list__summary-count";
pub const CONTENT: &str = "checkbox-list__content";
pub const FILTERS: &str = "checkbox-list__filters";
pub const SEARCH: &str = "checkbox-list__search";
pub const SELECT_ALL: &str = "checkbox-list__select-all";
pub const SELECT_ALL_LABEL: &str = "checkbox-list__select-all-label";
pub const SELECT_ALL_CHECKBOX: &str = "checkbox-list__select-all-checkbox";
pub const SELECT_ALL_TEXT: &str = "checkbox-list__select-all-text";
pub const ITEMS: &str = "checkbox-list__items";
pub const ITEM: &str = "checkbox-list__item";
pub const LABEL: &str = "checkbox-list__label";
pub const CHECKBOX: &str = "checkbox-list__checkbox";
pub const CHECKBOX_TEXT: &str = "checkbox-list__checkbox-text";
pub const NOT_FOUND: &str = "checkbox-list__not-found";
pub const ACTIONS: &str = "checkbox-list__actions";
pub const APPLY: &str = "checkbox-list__apply";
pub const APPLY_BTN: &str = "checkbox-list__apply-btn";
pub const CANCEL: &str = "checkbox-list__cancel";
pub const CANCEL_BTN: &str = "checkbox-list__cancel-btn";

/// Class of items excluded by the search filter.
pub const HIDDEN: &str = "hidden";

/// Element ids of the interactive parts of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartIds {
    pub summary_count: String,
    pub search_input: String,
    pub select_all: String,
    pub items: String,
    pub not_found: String,
    pub apply: String,
    pub cancel: String,
}

impl PartIds {
    pub fn new(mount_id: &str) -> Self {
        let part = |name: &str| format!("{mount_id}__{name}");
        Self {
            summary_count: part("summary-count"),
            search_input: part("search-input"),
            select_all: part("select-all-checkbox"),
            items: part("items"),
            not_found: part("not-found"),
            apply: part("apply-btn"),
            cancel: part("cancel-btn"),
        }
    }
}

/// Summary count text: `(n)`, or empty when nothing is checked.
pub fn summary_count_text(count: usize) -> String {
    if count == 0 {
        String::new()
    } else {
        format!("({count})")
    }
}

/// Build the widget markup for the engine's current state.
pub fn render(config: &Config, locale: &Locale, ids: &PartIds, engine: &Engine) -> Element {
    Element::details()
        .class(ROOT)
        .child(
            Element::summary()
                .class(TITLE)
                .child(Element::span().class(SUMMARY_TEXT).text(&config.title))
                .child(
                    Element::span()
                        .id(&ids.summary_count)
                        .class(SUMMARY_COUNT)
                        .text(summary_count_text(engine.checked_count())),
                ),
        )
        .child(content(config, locale, ids, engine))
}

fn content(config: &Config, locale: &Locale, ids: &PartIds, engine: &Engine) -> Element {
    let items = config
        .items
        .iter()
        .zip(engine.states())
        .map(|(item, state)| item_row(item, state.checked, state.hidden));

    Element::div()
        .class(CONTENT)
        .child_if(filters(config, locale, ids, engine))
        .child(Element::ul().id(&ids.items).class(ITEMS).children(items))
        .child_if(config.search.then(|| not_found(locale, ids, engine)))
        .child_if(actions(config, locale, ids))
}

fn filters(config: &Config, locale: &Locale, ids: &PartIds, engine: &Engine) -> Option<Element> {
    if !config.search && !config.select_all.enabled {
        return None;
    }

    let search = config.search.then(|| {
        Element::div().class(SEARCH).child(
            Element::text_input(engine.search_text())
                .id(&ids.search_input)
                .placeholder(&locale.search),
        )
    });

    let select_all = config.select_all.enabled.then(|| {
        Element::div()
            .class(SELECT_ALL)
            .class(&config.select_all.class_name)
            .child(
                Element::label()
                    .class(SELECT_ALL_LABEL)
                    .child(
                        Element::checkbox()
                            .id(&ids.select_all)
                            .class(SELECT_ALL_CHECKBOX)
                            .checked(engine.select_all_checked()),
                    )
                    .child(Element::span().class(SELECT_ALL_TEXT).text(&locale.select_all)),
            )
    });

    Some(
        Element::div()
            .class(FILTERS)
            .child_if(search)
            .child_if(select_all),
    )
}

fn item_row(item: &Item, checked: bool, hidden: bool) -> Element {
    let mut row = Element::li().class(ITEM).child(
        Element::label()
            .class(LABEL)
            .child(
                Element::checkbox()
                    .id(&item.id)
                    .class(CHECKBOX)
                    .attr("value", &item.value)
                    .checked(checked),
            )
            .child(Element::span().class(CHECKBOX_TEXT).text(&item.label)),
    );
    row.set_class(HIDDEN, hidden);
    row
}

fn not_found(locale: &Locale, ids: &PartIds, engine: &Engine) -> Element {
    let mut message = Element::p()
        .id(&ids.not_found)
        .class(NOT_FOUND)
        .text(&locale.not_found);
    message.set_class(HIDDEN, !engine.nothing_found());
    message
}

fn actions(config: &Config, locale: &Locale, ids: &PartIds) -> Option<Element> {
    if !config.apply.enabled && !config.cancel.enabled {
        return None;
    }

    let apply = config.apply.enabled.then(|| {
        Element::div()
            .class(APPLY)
            .class(&config.apply.class_name)
            .child(Element::button(&locale.apply).id(&ids.apply).class(APPLY_BTN))
    });

    let cancel = config.cancel.enabled.then(|| {
        Element::div()
            .class(CANCEL)
            .class(&config.cancel.class_name)
            .child(Element::button(&locale.cancel).id(&ids.cancel).class(CANCEL_BTN))
    });

    Some(
        Element::div()
            .class(ACTIONS)
            .child_if(apply)
            .child_if(cancel),
    )
}
