use serde_json::json;

use super::*;

fn row(name: &str) -> Row {
    let Value::Object(map) = json!({ "name": name }) else { unreachable!() };
    map
}

fn names(listing: &Listing) -> Vec<&str> {
    listing.rows.iter().map(|r| r["name"].as_str().unwrap()).collect()
}

#[test]
fn insert_assigns_sequential_ids_per_resource() {
    let mut store = Store::new();
    let a = store.insert(ResourceKind::Project, row("a"));
    let b = store.insert(ResourceKind::Project, row("b"));
    let c = store.insert(ResourceKind::Case, row("c"));
    assert_eq!(a["id"], 1);
    assert_eq!(b["id"], 2);
    assert_eq!(c["id"], 1);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut store = Store::new();
    store.insert(ResourceKind::Task, row("a"));
    store.remove(ResourceKind::Task, 1).unwrap();
    let next = store.insert(ResourceKind::Task, row("b"));
    assert_eq!(next["id"], 2);
    assert!(store.get(ResourceKind::Task, 1).is_none());
}

#[test]
fn replace_keeps_path_id() {
    let mut store = Store::new();
    store.insert(ResourceKind::Account, row("a"));
    let mut changed = row("renamed");
    changed.insert("id".into(), json!(99));
    let stored = store.replace(ResourceKind::Account, 1, changed).unwrap();
    assert_eq!(stored["id"], 1);
    assert_eq!(store.get(ResourceKind::Account, 1).unwrap()["name"], "renamed");
}

#[test]
fn replace_and_remove_unknown_id_return_none() {
    let mut store = Store::new();
    assert!(store.replace(ResourceKind::Project, 5, row("x")).is_none());
    assert!(store.remove(ResourceKind::Project, 5).is_none());
}

#[test]
fn list_is_newest_first_and_paged() {
    let mut store = Store::new();
    for name in ["a", "b", "c", "d", "e"] {
        store.insert(ResourceKind::Project, row(name));
    }
    let first = store.list(ResourceKind::Project, |_| true, 1, 2);
    assert_eq!(first.total, 5);
    assert_eq!(names(&first), ["e", "d"]);

    let last = store.list(ResourceKind::Project, |_| true, 3, 2);
    assert_eq!(names(&last), ["a"]);

    let past_end = store.list(ResourceKind::Project, |_| true, 9, 2);
    assert!(past_end.rows.is_empty());
    assert_eq!(past_end.total, 5);
}

#[test]
fn list_total_counts_filtered_rows() {
    let mut store = Store::new();
    for name in ["alpha", "beta", "alphabet"] {
        store.insert(ResourceKind::Project, row(name));
    }
    let listing = store.list(
        ResourceKind::Project,
        |r| r["name"].as_str().is_some_and(|n| n.starts_with("alpha")),
        1,
        10,
    );
    assert_eq!(listing.total, 2);
    assert_eq!(names(&listing), ["alphabet", "alpha"]);
}

#[test]
fn list_of_untouched_resource_is_empty() {
    let store = Store::new();
    assert_eq!(store.list(ResourceKind::Case, |_| true, 1, 10), Listing { rows: vec![], total: 0 });
}
