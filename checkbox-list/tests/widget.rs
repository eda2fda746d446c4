use std::cell::RefCell;
use std::rc::Rc;

use checkbox_list::render::{self, HIDDEN, PartIds};
use checkbox_list::view::View;
use checkbox_list::{
    ApplyOptions, CheckboxList, Config, Engine, EventResult, Item, Locale, MountError,
    SelectAllOptions, Settings,
};
use hostdom::{Document, Element, Event};

/// Everything the callbacks reported, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    SelectAll(bool),
    Search(String),
    Change(Vec<String>, Option<String>),
    Apply(Vec<String>),
    Cancel,
}

type Log = Rc<RefCell<Vec<Call>>>;

fn recorded(settings: Settings) -> (Settings, Log) {
    let log: Log = Rc::default();
    let (a, b, c, d, e) = (log.clone(), log.clone(), log.clone(), log.clone(), log.clone());
    let settings = settings
        .on_select_all(move |v| a.borrow_mut().push(Call::SelectAll(v)))
        .on_search(move |t| b.borrow_mut().push(Call::Search(t.to_string())))
        .on_change(move |s, v| {
            c.borrow_mut()
                .push(Call::Change(s.to_vec(), v.map(str::to_string)))
        })
        .on_apply(move |s| d.borrow_mut().push(Call::Apply(s.to_vec())))
        .on_cancel(move || e.borrow_mut().push(Call::Cancel));
    (settings, log)
}

fn sample_items() -> Vec<Item> {
    (1..=10)
        .map(|i| {
            Item::new(format!("checkbox-{i}"), format!("Checkbox {i}"), i.to_string())
                .checked(i == 3 || i == 6)
        })
        .collect()
}

fn host() -> Document {
    Document::new(
        Element::div()
            .id("page")
            .child(Element::div().id("checkbox-list").child(Element::p().text("Loading"))),
    )
}

fn mount(settings: Settings) -> (CheckboxList, Document, Log) {
    let doc = host();
    let (settings, log) = recorded(settings);
    let widget = CheckboxList::mount(settings, &doc, "checkbox-list").unwrap();
    (widget, doc, log)
}

fn checked_in_dom(doc: &Document, id: &str) -> bool {
    doc.read(id, |el| el.checked).unwrap()
}

fn sorted(values: &[String]) -> Vec<String> {
    let mut values = values.to_vec();
    values.sort();
    values
}

fn count_text(doc: &Document) -> String {
    doc.read("checkbox-list__summary-count", |el| el.text_content())
        .unwrap()
}

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn test_mount_replaces_content_and_renders_structure() {
    let (_widget, doc, log) = mount(
        Settings::new()
            .search(true)
            .select_all(true)
            .apply(true)
            .items(sample_items()),
    );

    let html = doc.to_html();
    assert!(!html.contains("Loading"));
    assert!(html.contains(r#"<details class="checkbox-list" open>"#));
    assert!(html.contains(r#"<span class="checkbox-list__summary-text">Choice</span>"#));
    assert!(html.contains(r#"placeholder="Search""#));
    assert!(html.contains(r#"<span class="checkbox-list__select-all-text">Select all</span>"#));
    assert!(html.contains(r#"class="checkbox-list__apply-btn">Apply</button>"#));
    assert!(html.contains(r#"class="checkbox-list__cancel-btn">Cancel</button>"#));
    assert!(html.contains(
        r#"<input id="checkbox-3" class="checkbox-list__checkbox" type="checkbox" value="3" checked>"#
    ));

    assert_eq!(count_text(&doc), "(2)");
    assert!(log.borrow().is_empty());
}

#[test]
fn test_mount_minimal_has_no_optional_parts() {
    let (_widget, doc, _) = mount(Settings::new().items(sample_items()));
    let html = doc.to_html();
    assert!(!html.contains(render::FILTERS));
    assert!(!html.contains(render::ACTIONS));
    assert!(!html.contains(render::NOT_FOUND));
}

#[test]
fn test_mount_count_empty_when_nothing_checked() {
    let (_widget, doc, _) = mount(Settings::new().item(Item::new("a", "A", "a")));
    assert_eq!(count_text(&doc), "");
}

#[test]
fn test_mount_missing_mount_point_fails() {
    let doc = host();
    let err = CheckboxList::mount(Settings::new(), &doc, "nowhere").unwrap_err();
    assert_eq!(err, MountError::MountNotFound("nowhere".into()));
}

#[test]
fn test_view_rejects_unrendered_mount() {
    let doc = Document::new(Element::div().id("m").child(Element::p().text("Loading")));
    let config = Config::resolve(&Settings::new().items(sample_items()));

    let err = View::build(&doc, "m", &PartIds::new("m"), &config).unwrap_err();
    assert_eq!(
        err,
        MountError::MissingPart {
            mount: "m".into(),
            part: "item list",
        }
    );
}

#[test]
fn test_view_rejects_checkbox_with_wrong_value() {
    let config = Config::resolve(&Settings::new().items(sample_items()));
    let ids = PartIds::new("m");
    let markup = render::render(&config, &Locale::english(), &ids, &Engine::new(&config));
    let doc = Document::new(Element::div().id("m").child(markup));

    doc.update("checkbox-4", |el| {
        el.attrs.insert("value".into(), "x".into());
    })
    .unwrap();

    let err = View::build(&doc, "m", &ids, &config).unwrap_err();
    assert_eq!(
        err,
        MountError::ValueMismatch {
            mount: "m".into(),
            index: 3,
            expected: "4".into(),
            found: Some("x".into()),
        }
    );
}

#[test]
fn test_custom_class_names_and_locale() {
    let (_widget, doc, _) = mount(
        Settings::new()
            .title("Fruit")
            .select_all(SelectAllOptions {
                class_name: Some("wide".into()),
                ..Default::default()
            })
            .apply(ApplyOptions {
                class_name: Some("primary".into()),
                ..Default::default()
            })
            .locale("apply", "Übernehmen")
            .items(sample_items()),
    );
    let html = doc.to_html();
    assert!(html.contains(r#"class="checkbox-list__select-all wide""#));
    assert!(html.contains(r#"class="checkbox-list__apply primary""#));
    assert!(html.contains(">Übernehmen</button>"));
    assert!(html.contains(">Fruit</span>"));
}

// ============================================================================
// Operations
// ============================================================================

#[test]
fn test_change_updates_dom_count_and_callback() {
    let (mut widget, doc, log) = mount(Settings::new().items(sample_items()));

    widget.change("1", true);

    assert!(checked_in_dom(&doc, "checkbox-1"));
    assert_eq!(count_text(&doc), "(3)");
    assert_eq!(
        *log.borrow(),
        vec![Call::Change(
            vec!["3".into(), "6".into(), "1".into()],
            Some("1".into())
        )]
    );
}

#[test]
fn test_change_unknown_value_fires_nothing() {
    let (mut widget, _doc, log) = mount(Settings::new().items(sample_items()));
    widget.change("stale", true);
    assert!(log.borrow().is_empty());
    assert_eq!(sorted(widget.selected()), vec!["3", "6"]);
}

#[test]
fn test_search_hides_rows_and_fires_search_then_change() {
    let (mut widget, doc, log) = mount(Settings::new().search(true).items(sample_items()));

    widget.search("checkbox 1");

    let snapshot = doc.snapshot().unwrap();
    let rows: Vec<&Element> = hostdom::find_element(&snapshot, "checkbox-list__items")
        .unwrap()
        .content
        .children()
        .iter()
        .collect();
    let hidden: Vec<bool> = rows.iter().map(|row| row.has_class(HIDDEN)).collect();
    assert_eq!(
        hidden,
        vec![false, true, true, true, true, true, true, true, true, false]
    );
    assert!(!checked_in_dom(&doc, "checkbox-3"));
    assert_eq!(
        doc.read("checkbox-list__search-input", |el| el.value.clone()),
        Some("checkbox 1".into())
    );
    assert_eq!(count_text(&doc), "");

    assert_eq!(
        *log.borrow(),
        vec![
            Call::Search("checkbox 1".into()),
            Call::Change(vec![], None),
        ]
    );
}

#[test]
fn test_not_found_message_visibility() {
    let (mut widget, doc, _) = mount(Settings::new().search(true).items(sample_items()));
    let hidden = |doc: &Document| {
        doc.read("checkbox-list__not-found", |el| el.has_class(HIDDEN))
            .unwrap()
    };

    assert!(hidden(&doc));
    widget.search("zebra");
    assert!(!hidden(&doc));
    widget.search("");
    assert!(hidden(&doc));
}

#[test]
fn test_select_all_indicator_tracks_visible_items() {
    let (mut widget, doc, _) = mount(
        Settings::new()
            .search(true)
            .select_all(true)
            .items(sample_items()),
    );
    let indicator = |doc: &Document| checked_in_dom(doc, "checkbox-list__select-all-checkbox");

    assert!(!indicator(&doc));
    widget.search("Checkbox 3");
    assert!(indicator(&doc));
    assert!(!widget.flags().all_checked);

    widget.change("3", false);
    assert!(!indicator(&doc));
}

#[test]
fn test_select_all_fires_select_all_then_change() {
    let (mut widget, doc, log) = mount(Settings::new().select_all(true).items(sample_items()));

    widget.select_all(true);

    assert!(checked_in_dom(&doc, "checkbox-list__select-all-checkbox"));
    assert!((1..=10).all(|i| checked_in_dom(&doc, &format!("checkbox-{i}"))));
    assert_eq!(count_text(&doc), "(10)");

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], Call::SelectAll(true));
    let Call::Change(selected, changed) = &log[1] else {
        panic!("expected change, got {:?}", log[1]);
    };
    assert_eq!(selected.len(), 10);
    assert_eq!(changed, &None);
}

#[test]
fn test_per_item_change_sees_its_own_count() {
    let doc = host();
    let counts: Rc<RefCell<Vec<String>>> = Rc::default();
    let (seen, dom) = (counts.clone(), doc.clone());
    let settings = Settings::new()
        .select_all(SelectAllOptions {
            call_on_change_for_each_item: true,
            ..Default::default()
        })
        .items(
            (1..=3).map(|i| Item::new(format!("item-{i}"), format!("Item {i}"), i.to_string())),
        )
        .on_change(move |_, _| seen.borrow_mut().push(count_text(&dom)));
    let mut widget = CheckboxList::mount(settings, &doc, "checkbox-list").unwrap();

    widget.select_all(true);

    assert_eq!(*counts.borrow(), vec!["(1)", "(2)", "(3)", "(3)"]);
}

#[test]
fn test_apply_fires_with_committed_selection() {
    let (mut widget, _doc, log) = mount(
        Settings::new()
            .apply(ApplyOptions {
                save_on_apply: true,
                ..Default::default()
            })
            .items(sample_items()),
    );

    widget.change("3", false);
    widget.apply();

    assert_eq!(log.borrow().last(), Some(&Call::Apply(vec!["6".into()])));
    assert_eq!(widget.selected(), &["6"]);
}

#[test]
fn test_cancel_restores_dom_and_clears_search() {
    let (mut widget, doc, log) = mount(
        Settings::new()
            .search(true)
            .apply(ApplyOptions {
                save_on_apply: true,
                ..Default::default()
            })
            .items(sample_items()),
    );

    widget.change("1", true);
    widget.search("Checkbox 1");
    log.borrow_mut().clear();

    widget.cancel();

    assert!(checked_in_dom(&doc, "checkbox-3"));
    assert!(checked_in_dom(&doc, "checkbox-6"));
    assert!(!checked_in_dom(&doc, "checkbox-1"));
    assert_eq!(
        doc.read("checkbox-list__search-input", |el| el.value.clone()),
        Some(String::new())
    );
    assert_eq!(count_text(&doc), "(2)");
    assert_eq!(
        *log.borrow(),
        vec![
            Call::Search(String::new()),
            Call::Change(vec!["3".into(), "6".into()], None),
            Call::Cancel,
        ]
    );
}

// ============================================================================
// Host events
// ============================================================================

#[test]
fn test_events_route_to_operations() {
    let (mut widget, doc, log) = mount(
        Settings::new()
            .search(true)
            .select_all(true)
            .apply(ApplyOptions {
                save_on_apply: true,
                ..Default::default()
            })
            .items(sample_items()),
    );

    assert_eq!(
        widget.handle_event(&Event::change("checkbox-2", true)),
        EventResult::Consumed
    );
    assert!(checked_in_dom(&doc, "checkbox-2"));

    assert!(widget
        .handle_event(&Event::input("checkbox-list__search-input", "box 2"))
        .is_handled());
    assert!(widget
        .handle_event(&Event::click("checkbox-list__apply-btn"))
        .is_handled());
    assert_eq!(widget.selected(), &["2"]);

    assert!(widget
        .handle_event(&Event::change("checkbox-list__select-all-checkbox", false))
        .is_handled());
    assert!(widget
        .handle_event(&Event::click("checkbox-list__cancel-btn"))
        .is_handled());
    assert!(checked_in_dom(&doc, "checkbox-2"));
    assert_eq!(log.borrow().last(), Some(&Call::Cancel));
}

#[test]
fn test_foreign_and_mismatched_events_are_ignored() {
    let (mut widget, _doc, log) = mount(Settings::new().search(true).items(sample_items()));

    assert_eq!(
        widget.handle_event(&Event::click("page")),
        EventResult::Ignored
    );
    assert_eq!(
        widget.handle_event(&Event::click("checkbox-1")),
        EventResult::Ignored
    );
    assert_eq!(
        widget.handle_event(&Event::click("checkbox-list__apply-btn")),
        EventResult::Ignored
    );
    assert!(log.borrow().is_empty());
}
