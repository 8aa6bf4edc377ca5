//! Declarative node predicates.
//!
//! A query is a JSON object whose entries must all hold for a node to
//! match. Reserved keys:
//!
//! - `id`: exact id equality (string)
//! - `type`: exact type name equality (string)
//! - `value`: scalar deep-equality, numbers compared as f64
//! - `attributes`: object of key -> expected attribute value
//! - `metadata`: object of key -> expected metadata value, or the value of
//!   the child node bound under that key
//!
//! Any other key is a single attribute-equality check.

use arbor_core::{Node, Value};
use arbor_tree::Tree;
use serde_json::Map;

use crate::{QueryError, QueryResult};

/// One compiled query entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Id(String),
    Type(String),
    Value(serde_json::Value),
    Attributes(Vec<(String, serde_json::Value)>),
    Metadata(Vec<(String, serde_json::Value)>),
    Attribute(String, serde_json::Value),
}

/// A compiled query. Every predicate must match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    predicates: Vec<Predicate>,
}

impl Query {
    /// Compile a query from any JSON value; only objects are accepted.
    pub fn from_json(json: &serde_json::Value) -> QueryResult<Self> {
        match json {
            serde_json::Value::Object(map) => Self::from_map(map),
            other => Err(QueryError::invalid_query(format!(
                "query must be an object, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Compile a query map, rejecting malformed reserved entries.
    pub fn from_map(map: &Map<String, serde_json::Value>) -> QueryResult<Self> {
        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort();

        let predicates = keys
            .into_iter()
            .map(|key| compile_entry(key, &map[key]))
            .collect::<QueryResult<Vec<_>>>()?;
        Ok(Self { predicates })
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns true if the query has no predicates and matches everything.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluate every predicate against a node.
    pub fn matches(&self, tree: &Tree, node: &Node) -> QueryResult<bool> {
        for predicate in &self.predicates {
            if !predicate.matches(tree, node)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Predicate {
    /// Evaluate against a node. Metadata predicates may read child nodes,
    /// so the tree is needed and a dangling child is an error.
    pub fn matches(&self, tree: &Tree, node: &Node) -> QueryResult<bool> {
        let matched = match self {
            Predicate::Id(id) => node.id.as_str() == id,
            Predicate::Type(name) => node.node_type.as_str() == name,
            Predicate::Value(expected) => node.value.matches_json(expected),
            Predicate::Attributes(entries) => entries
                .iter()
                .all(|(key, expected)| attribute_equals(node, key, expected)),
            Predicate::Attribute(key, expected) => attribute_equals(node, key, expected),
            Predicate::Metadata(entries) => {
                for (key, expected) in entries {
                    if !metadata_matches(tree, node, key, expected)? {
                        return Ok(false);
                    }
                }
                true
            }
        };
        Ok(matched)
    }
}

fn compile_entry(key: &str, expected: &serde_json::Value) -> QueryResult<Predicate> {
    match key {
        "id" => expect_string(key, expected).map(Predicate::Id),
        "type" => expect_string(key, expected).map(Predicate::Type),
        "value" => match Value::from_json(expected) {
            Some(_) => Ok(Predicate::Value(expected.clone())),
            None => Err(QueryError::invalid_query(format!(
                "'value' must be a scalar, got {}",
                json_kind(expected)
            ))),
        },
        "attributes" => expect_entries(key, expected).map(Predicate::Attributes),
        "metadata" => expect_entries(key, expected).map(Predicate::Metadata),
        other => Ok(Predicate::Attribute(other.to_string(), expected.clone())),
    }
}

fn expect_string(key: &str, expected: &serde_json::Value) -> QueryResult<String> {
    expected.as_str().map(str::to_string).ok_or_else(|| {
        QueryError::invalid_query(format!(
            "'{}' must be a string, got {}",
            key,
            json_kind(expected)
        ))
    })
}

fn expect_entries(
    key: &str,
    expected: &serde_json::Value,
) -> QueryResult<Vec<(String, serde_json::Value)>> {
    let map = expected.as_object().ok_or_else(|| {
        QueryError::invalid_query(format!(
            "'{}' must be an object, got {}",
            key,
            json_kind(expected)
        ))
    })?;
    let mut entries: Vec<(String, serde_json::Value)> =
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

/// Compare an expected JSON value against the string stored under `key`,
/// looking at structural bindings first, then metadata.
fn attribute_equals(node: &Node, key: &str, expected: &serde_json::Value) -> bool {
    let actual = node
        .attributes
        .get(key)
        .map(|id| id.as_str())
        .or_else(|| node.metadata.get(key).map(String::as_str));
    match (actual, expected.as_str()) {
        (Some(actual), Some(expected)) => actual == expected,
        _ => false,
    }
}

/// A metadata entry matches a literal metadata string, or a structural
/// binding whose id or child value equals the expected value.
fn metadata_matches(
    tree: &Tree,
    node: &Node,
    key: &str,
    expected: &serde_json::Value,
) -> QueryResult<bool> {
    if let Some(actual) = node.metadata.get(key) {
        return Ok(expected.as_str() == Some(actual.as_str()));
    }
    let Some(child_id) = node.attributes.get(key) else {
        return Ok(false);
    };
    if expected.as_str() == Some(child_id.as_str()) {
        return Ok(true);
    }
    let child = tree.child(&node.id, child_id)?;
    Ok(child.value.matches_json(expected))
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
