use hm3_domain::capabilities::Capabilities;
use hm3_domain::filters::FilterSet;
use hm3_modules::{ModuleError, scan};
use hm3_registry::Registry;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn module(root: &Path, name: &str, files: &[(&str, &str)]) {
    let dir = root.join("modules").join(name);
    fs::create_dir_all(&dir).unwrap();
    for (file, content) in files {
        let path = dir.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

#[test]
fn concatenation_follows_declaration_order() {
    let tmp = TempDir::new().unwrap();
    module(tmp.path(), "a", &[("site.js", "var a;"), ("site.css", ".a{}")]);
    module(tmp.path(), "b", &[("site.js", "var b;")]);
    module(tmp.path(), "c", &[("site.css", ".c{}")]);

    let mut registry = Registry::new();
    let outcome = scan(tmp.path(), ["c", "a", "b"], &mut registry).unwrap();

    assert_eq!(outcome.script, "var a;var b;");
    assert_eq!(outcome.style, ".c{}.a{}");
    let order: Vec<_> = outcome.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(order, ["c", "a", "b"]);
}

#[test]
fn missing_module_directory_is_skipped() {
    let tmp = TempDir::new().unwrap();
    module(tmp.path(), "core", &[("site.js", "1;")]);

    let mut registry = Registry::new();
    let outcome = scan(tmp.path(), ["ghost", "core"], &mut registry).unwrap();

    assert_eq!(outcome.script, "1;");
    assert_eq!(outcome.modules[0].capabilities, Capabilities::empty());
    assert_eq!(outcome.filters, FilterSet::default());
    assert!(outcome.assets.is_empty());
}

#[test]
fn filters_merge_in_scan_order() {
    let tmp = TempDir::new().unwrap();
    module(tmp.path(), "core", &[("setup.toml", "[filters]\nallowed_pages = [\"home\"]\n")]);
    module(
        tmp.path(),
        "imap",
        &[("setup.toml", "[filters]\nallowed_pages = [\"message\", \"home\"]\nallowed_post = [\"imap_server_id\"]\n")],
    );

    let mut registry = Registry::new();
    let outcome = scan(tmp.path(), ["core", "imap"], &mut registry).unwrap();

    assert_eq!(outcome.filters.allowed_pages, ["home", "message", "home"]);
    assert_eq!(outcome.filters.allowed_post, ["imap_server_id"]);
}

#[test]
fn asset_directories_and_capabilities_are_recorded() {
    let tmp = TempDir::new().unwrap();
    module(
        tmp.path(),
        "themes",
        &[("site.css", "body{}"), ("setup.toml", ""), ("assets/logo.svg", "<svg/>")],
    );

    let mut registry = Registry::new();
    let outcome = scan(tmp.path(), ["themes"], &mut registry).unwrap();

    assert_eq!(outcome.assets, [Path::new("modules").join("themes").join("assets")]);
    assert_eq!(
        outcome.modules[0].capabilities,
        Capabilities::STYLE | Capabilities::SETUP | Capabilities::ASSETS
    );
}

#[test]
fn wildcard_from_early_module_reaches_later_pages() {
    let tmp = TempDir::new().unwrap();
    module(tmp.path(), "core", &[("setup.toml", "[[handler]]\npage = \"*\"\nname = \"check_session\"\n")]);
    module(tmp.path(), "feeds", &[("setup.toml", "[[handler]]\npage = \"feeds\"\nname = \"load_feeds\"\nlogged_in = true\n")]);

    let mut registry = Registry::new();
    scan(tmp.path(), ["core", "feeds"], &mut registry).unwrap();
    let finalized = registry.finalize();

    let names: Vec<_> = finalized.handlers()["feeds"].iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["load_feeds", "check_session"]);
    assert_eq!(finalized.handlers()["feeds"][1].source, "core");
}

#[test]
fn malformed_setup_aborts_the_scan() {
    let tmp = TempDir::new().unwrap();
    module(tmp.path(), "broken", &[("setup.toml", "[[handler]\n")]);

    let mut registry = Registry::new();
    let err = scan(tmp.path(), ["broken"], &mut registry).unwrap_err();
    assert!(matches!(err, ModuleError::Parse { .. }));
    assert!(err.to_string().contains("setup.toml"));
}
