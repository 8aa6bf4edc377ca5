//! Predicate search over the contacts document.
//!
//! n1 {contacts: n2 [n3 {emails: n4 [n5], name: n6, tags: n7 [n8, n9]},
//!                   n10 {emails: n11 [], name: n12, tags: n13 [n14]}],
//!     owner: n15, version: n16}

use arbor_tests::prelude::*;
use arbor_tests::prelude::assert_eq;

fn find(engine: &Engine, h: &str, start: &str, query: serde_json::Value) -> Vec<String> {
    ids(engine.find_nodes(h, start, &query, None, None).unwrap())
}

fn ids(found: Vec<NodeId>) -> Vec<String> {
    found.into_iter().map(|id| id.to_string()).collect()
}

#[test]
fn test_match_by_type_in_preorder() {
    let (engine, h) = load(CONTACTS);

    assert_eq!(
        find(&engine, h.as_str(), "n1", json!({"type": "string"})),
        vec!["n5", "n6", "n8", "n9", "n12", "n14", "n15"]
    );
}

#[test]
fn test_match_by_value_and_id() {
    let (engine, h) = load(CONTACTS);
    let h = h.as_str();

    assert_eq!(find(&engine, h, "n1", json!({"value": "Ada"})), vec!["n6"]);
    assert_eq!(find(&engine, h, "n1", json!({"value": 2.0})), vec!["n16"]);
    assert_eq!(find(&engine, h, "n1", json!({"id": "n13"})), vec!["n13"]);
    assert!(find(&engine, h, "n1", json!({"value": "2"})).is_empty());
}

#[test]
fn test_match_by_attribute_binding() {
    let (engine, h) = load(CONTACTS);
    let h = h.as_str();

    assert_eq!(
        find(&engine, h, "n1", json!({"attributes": {"name": "n6"}})),
        vec!["n3"]
    );
    assert_eq!(find(&engine, h, "n1", json!({"name": "n12"})), vec!["n10"]);
}

#[test]
fn test_metadata_matches_child_values_and_annotations() {
    // GIVEN an annotation on the first contact
    let (mut engine, h) = load(CONTACTS);
    let h = h.as_str();
    engine.set_node_metadata(h, "n3", "role", "lead").unwrap();

    // THEN metadata predicates see both child values and annotations
    assert_eq!(
        find(&engine, h, "n1", json!({"metadata": {"name": "Grace"}})),
        vec!["n10"]
    );
    assert_eq!(
        find(&engine, h, "n1", json!({"metadata": {"role": "lead"}})),
        vec!["n3"]
    );
    assert_eq!(find(&engine, h, "n1", json!({"role": "lead"})), vec!["n3"]);
    assert!(find(&engine, h, "n1", json!({"metadata": {"name": "Lin"}})).is_empty());
}

#[test]
fn test_all_predicates_must_hold() {
    let (engine, h) = load(CONTACTS);

    let found = find(
        &engine,
        h.as_str(),
        "n1",
        json!({"type": "object", "metadata": {"name": "Ada"}, "attributes": {"tags": "n7"}}),
    );

    assert_eq!(found, vec!["n3"]);
}

#[test]
fn test_search_from_inner_node() {
    let (engine, h) = load(CONTACTS);

    assert_eq!(
        find(&engine, h.as_str(), "n10", json!({"type": "string"})),
        vec!["n12", "n14"]
    );
}

#[test]
fn test_depth_and_result_bounds() {
    let (engine, h) = load(CONTACTS);
    let h = h.as_str();
    let strings = json!({"type": "string"});

    let shallow = engine.find_nodes(h, "n1", &strings, Some(1), None).unwrap();
    let middle = engine.find_nodes(h, "n1", &strings, Some(3), None).unwrap();
    let first_two = engine.find_nodes(h, "n1", &strings, None, Some(2)).unwrap();

    assert_eq!(ids(shallow), vec!["n15"]);
    assert_eq!(ids(middle), vec!["n6", "n12", "n15"]);
    assert_eq!(ids(first_two), vec!["n5", "n6"]);
}

#[test]
fn test_configured_default_bounds() {
    let config = EngineConfig {
        default_max_results: 1,
        ..EngineConfig::default()
    };
    let mut engine = Engine::with_config(config);
    let h = engine.load_json(CONTACTS).unwrap();
    let strings = json!({"type": "string"});

    let defaulted = engine.find_nodes(h.as_str(), "n1", &strings, None, None).unwrap();
    let explicit = engine
        .find_nodes(h.as_str(), "n1", &strings, None, Some(-1))
        .unwrap();

    assert_eq!(ids(defaulted), vec!["n5"]);
    assert_eq!(explicit.len(), 7);
}

#[test]
fn test_invalid_queries() {
    let (engine, h) = load(CONTACTS);
    let h = h.as_str();

    for query in [
        json!({"type": 5}),
        json!({"id": null}),
        json!({"value": [1]}),
        json!({"attributes": "name"}),
        json!(["type", "string"]),
    ] {
        let err = engine.find_nodes(h, "n1", &query, None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuery, "query {}", query);
    }
}

#[test]
fn test_bad_bounds_and_start() {
    let (engine, h) = load(CONTACTS);
    let h = h.as_str();
    let query = json!({});

    let err = engine.find_nodes(h, "n1", &query, Some(-5), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);

    let err = engine.find_nodes(h, "n1", &query, None, Some(-2)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);

    let err = engine.find_nodes(h, "n77", &query, None, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
