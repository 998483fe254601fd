use hm3_domain::bindings::{Binding, BindingMap};
use hm3_domain::settings::{SettingValue, Settings};
use serde_json::json;

#[test]
fn setting_values_are_untagged() {
    let settings = Settings::from_iter([
        ("modules", SettingValue::from("core,imap")),
        ("languages", SettingValue::from(vec!["en".to_owned(), "de".to_owned()])),
    ]);

    let value = serde_json::to_value(&settings).expect("serialize settings");
    assert_eq!(value, json!({ "languages": ["en", "de"], "modules": "core,imap" }));

    let back: Settings = serde_json::from_value(value).expect("deserialize settings");
    assert_eq!(back, settings);
}

#[test]
fn binding_map_keeps_page_order_sorted() {
    let mut map = BindingMap::new();
    map.entry("search".to_owned()).or_default().push(Binding::new("load", "core", true));
    map.entry("home".to_owned()).or_default().push(Binding::new("title", "core", false));

    let value = serde_json::to_string(&map).expect("serialize map");
    assert!(value.find("home").unwrap() < value.find("search").unwrap());
}
