#![allow(dead_code)]

use std::path::PathBuf;

use extract_report::input::loader;
use extract_report::input::reference::TableReference;

pub(crate) fn fixture_path(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures")
        .join(fixture)
        .join("test_result.json")
}

pub(crate) fn load_fixture(fixture: &str) -> Vec<TableReference> {
    loader::load_references(&fixture_path(fixture)).expect("fixture should load")
}

pub(crate) fn table(name: &str) -> TableReference {
    TableReference::new(None, name)
}

pub(crate) fn qualified(db: &str, name: &str) -> TableReference {
    TableReference::new(Some(db), name)
}
