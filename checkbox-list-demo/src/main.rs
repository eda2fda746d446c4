use std::fs::File;

use checkbox_list::{ApplyOptions, CheckboxList, Item, Settings};
use hostdom::{Document, Element, Event};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

const MOUNT_ID: &str = "checkbox-list";

fn sample_settings() -> Settings {
    let items = (1..=10).map(|i| {
        Item::new(format!("checkbox-{i}"), format!("Checkbox {i}"), i.to_string())
            .checked(i == 3 || i == 6)
    });

    Settings::new()
        .select_all(true)
        .search(true)
        .apply(ApplyOptions {
            save_on_apply: true,
            ..Default::default()
        })
        .items(items)
        .on_change(|selected, changed| println!("change {changed:?}: {selected:?}"))
        .on_apply(|selected| println!("apply: {selected:?}"))
}

fn main() {
    let log_file = File::create("checkbox-list-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let document = Document::new(
        Element::new("body").child(Element::div().id(MOUNT_ID)),
    );

    let mut list = match CheckboxList::mount(sample_settings(), &document, MOUNT_ID) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    info!("Mounted with selection {:?}", list.selected());

    // A short scripted session, as a host would dispatch it.
    let session = [
        Event::change("checkbox-1", true),
        Event::input(format!("{MOUNT_ID}__search-input"), "box 1"),
        Event::change(format!("{MOUNT_ID}__select-all-checkbox"), true),
        Event::click(format!("{MOUNT_ID}__apply-btn")),
        Event::input(format!("{MOUNT_ID}__search-input"), ""),
    ];
    for event in &session {
        let result = list.handle_event(event);
        info!("{:?} -> {:?}", event, result);
    }

    println!("selected: {:?}", list.selected());
    println!("{}", document.to_html());
}
