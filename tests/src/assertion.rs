//! Assertion types and builders for verifying step results.

use arbor_core::{ErrorKind, NodeId, NodeType, Value};
use arbor_session::{EngineError, NodeView};
use std::collections::BTreeMap;

use crate::error::{ScenarioError, ScenarioResult};

/// What a step produced, normalized for assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutput {
    /// The operation returns nothing.
    Unit,
    /// A single id, e.g. from adding a child.
    Id(NodeId),
    /// A list of ids, e.g. children, search hits or removed nodes.
    Ids(Vec<NodeId>),
    Node(NodeView),
    /// A parent lookup; `None` for the root.
    Parent(Option<NodeView>),
    Metadata(BTreeMap<String, String>),
    Text(String),
}

impl From<()> for StepOutput {
    fn from(_: ()) -> Self {
        StepOutput::Unit
    }
}

impl From<NodeId> for StepOutput {
    fn from(id: NodeId) -> Self {
        StepOutput::Id(id)
    }
}

impl From<Vec<NodeId>> for StepOutput {
    fn from(ids: Vec<NodeId>) -> Self {
        StepOutput::Ids(ids)
    }
}

impl From<NodeView> for StepOutput {
    fn from(view: NodeView) -> Self {
        StepOutput::Node(view)
    }
}

impl From<Option<NodeView>> for StepOutput {
    fn from(view: Option<NodeView>) -> Self {
        StepOutput::Parent(view)
    }
}

impl From<BTreeMap<String, String>> for StepOutput {
    fn from(map: BTreeMap<String, String>) -> Self {
        StepOutput::Metadata(map)
    }
}

impl From<String> for StepOutput {
    fn from(text: String) -> Self {
        StepOutput::Text(text)
    }
}

/// A complete assertion for a step result.
#[derive(Default)]
pub struct Assertion {
    // Error assertions
    pub error_kind: Option<ErrorKind>,
    pub error: Option<String>,
    pub error_pattern: Option<String>,

    // Id assertions
    pub id: Option<String>,
    pub ids: Option<Vec<String>>,
    pub count: Option<usize>,

    // Node assertions
    pub node_type: Option<NodeType>,
    pub value: Option<Value>,
    pub attributes: Option<usize>,
    pub children: Option<usize>,
    pub root: Option<bool>,

    // Map and text assertions
    pub entries: Vec<(String, String)>,
    pub text_contains: Vec<String>,

    // Custom assertion function
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&StepOutput) -> bool>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("error_kind", &self.error_kind)
            .field("error", &self.error)
            .field("error_pattern", &self.error_pattern)
            .field("id", &self.id)
            .field("ids", &self.ids)
            .field("count", &self.count)
            .field("node_type", &self.node_type)
            .field("value", &self.value)
            .field("root", &self.root)
            .field("entries", &self.entries)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the step is expected to fail.
    pub fn expects_error(&self) -> bool {
        self.error_kind.is_some() || self.error.is_some() || self.error_pattern.is_some()
    }

    /// Verify the assertion against a result.
    pub fn verify(
        &self,
        step: &str,
        result: &Result<StepOutput, EngineError>,
    ) -> ScenarioResult<()> {
        if self.expects_error() {
            return match result {
                Ok(output) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected an error, but step succeeded with {:?}", output),
                )),
                Err(err) => self.verify_error(step, err),
            };
        }

        let output = result
            .as_ref()
            .map_err(|err| ScenarioError::assertion_failed(step, format!("step failed: {}", err)))?;

        if let Some(ref custom) = self.custom {
            if !custom(output) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    "custom assertion failed",
                ));
            }
        }

        match output {
            StepOutput::Unit => Ok(()),
            StepOutput::Id(id) => self.verify_ids(step, std::slice::from_ref(id)),
            StepOutput::Ids(ids) => self.verify_ids(step, ids),
            StepOutput::Node(view) => self.verify_node(step, Some(view)),
            StepOutput::Parent(view) => self.verify_node(step, view.as_ref()),
            StepOutput::Metadata(map) => self.verify_map(step, map),
            StepOutput::Text(text) => self.verify_text(step, text),
        }
    }

    fn verify_error(&self, step: &str, err: &EngineError) -> ScenarioResult<()> {
        if let Some(expected) = self.error_kind {
            if err.kind() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} error, got {}: {}", expected, err.kind(), err),
                ));
            }
        }

        let message = err.to_string();
        if let Some(ref expected) = self.error {
            if !message.contains(expected.as_str()) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected, message),
                ));
            }
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            if !re.is_match(&message) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', got: {}", pattern, message),
                ));
            }
        }
        Ok(())
    }

    fn verify_ids(&self, step: &str, ids: &[NodeId]) -> ScenarioResult<()> {
        if let Some(ref expected) = self.id {
            match ids {
                [only] if only.as_str() == expected.as_str() => {}
                _ => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("expected id {}, got {:?}", expected, ids),
                    ))
                }
            }
        }

        if let Some(ref expected) = self.ids {
            let actual: Vec<&str> = ids.iter().map(NodeId::as_str).collect();
            if actual != *expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected ids {:?}, got {:?}", expected, actual),
                ));
            }
        }

        if let Some(expected) = self.count {
            if ids.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} ids, got {}", expected, ids.len()),
                ));
            }
        }
        Ok(())
    }

    fn verify_node(&self, step: &str, view: Option<&NodeView>) -> ScenarioResult<()> {
        let Some(view) = view else {
            return match self.root {
                Some(false) | None if self.node_type.is_none() => Ok(()),
                _ => Err(ScenarioError::assertion_failed(
                    step,
                    "expected a node, got none",
                )),
            };
        };

        if let Some(ref expected) = self.id {
            if view.id != *expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected node {}, got {}", expected, view.id),
                ));
            }
        }

        if let Some(expected) = self.node_type {
            if view.node_type != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} node, got {}", expected, view.node_type),
                ));
            }
        }

        if let Some(ref expected) = self.value {
            if view.value != *expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected value {}, got {}", expected, view.value),
                ));
            }
        }

        if let Some(expected) = self.attributes {
            if view.attributes.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected {} attributes, got {}",
                        expected,
                        view.attributes.len()
                    ),
                ));
            }
        }

        if let Some(expected) = self.children {
            if view.children.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} children, got {}", expected, view.children.len()),
                ));
            }
        }

        if let Some(expected) = self.root {
            if view.is_root() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected root={}, node {} disagrees", expected, view.id),
                ));
            }
        }

        for (key, expected) in &self.entries {
            match view.attributes.get(key).or_else(|| view.metadata.get(key)) {
                Some(actual) if actual == expected => {}
                other => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("expected {}={}, got {:?}", key, expected, other),
                    ))
                }
            }
        }
        Ok(())
    }

    fn verify_map(&self, step: &str, map: &BTreeMap<String, String>) -> ScenarioResult<()> {
        if let Some(expected) = self.count {
            if map.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} entries, got {}", expected, map.len()),
                ));
            }
        }

        for (key, expected) in &self.entries {
            if map.get(key) != Some(expected) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {}={}, got {:?}", key, expected, map.get(key)),
                ));
            }
        }
        Ok(())
    }

    fn verify_text(&self, step: &str, text: &str) -> ScenarioResult<()> {
        for needle in &self.text_contains {
            if !text.contains(needle.as_str()) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected text containing '{}', got:\n{}", needle, text),
                ));
            }
        }
        Ok(())
    }
}

/// Builder for fluent assertion construction.
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self {
            assertion: Assertion::new(),
        }
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    /// Assert only that the step succeeds.
    pub fn ok(self) -> Self {
        self
    }

    // ========== Error assertions ==========

    /// Assert that the step fails with the given error category.
    pub fn fails_with(mut self, kind: ErrorKind) -> Self {
        self.assertion.error_kind = Some(kind);
        self
    }

    /// Assert that the step fails with an error containing the given string.
    pub fn error(mut self, contains: impl Into<String>) -> Self {
        self.assertion.error = Some(contains.into());
        self
    }

    /// Assert that the step fails with an error matching the given regex.
    pub fn error_matches(mut self, pattern: impl Into<String>) -> Self {
        self.assertion.error_pattern = Some(pattern.into());
        self
    }

    // ========== Id assertions ==========

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.assertion.id = Some(id.into());
        self
    }

    /// Assert the exact id list, in order.
    pub fn ids(mut self, ids: &[&str]) -> Self {
        self.assertion.ids = Some(ids.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Assert the number of ids or map entries.
    pub fn count(mut self, n: usize) -> Self {
        self.assertion.count = Some(n);
        self
    }

    pub fn empty(self) -> Self {
        self.count(0)
    }

    // ========== Node assertions ==========

    pub fn node_type(mut self, node_type: NodeType) -> Self {
        self.assertion.node_type = Some(node_type);
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.assertion.value = Some(value.into());
        self
    }

    pub fn null(mut self) -> Self {
        self.assertion.value = Some(Value::Null);
        self
    }

    pub fn attributes(mut self, n: usize) -> Self {
        self.assertion.attributes = Some(n);
        self
    }

    pub fn children(mut self, n: usize) -> Self {
        self.assertion.children = Some(n);
        self
    }

    pub fn root(mut self) -> Self {
        self.assertion.root = Some(true);
        self
    }

    pub fn not_root(mut self) -> Self {
        self.assertion.root = Some(false);
        self
    }

    // ========== Map and text assertions ==========

    /// Assert that a map, or a node's attributes or metadata, holds `key=value`.
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.assertion.entries.push((key.into(), value.into()));
        self
    }

    pub fn text_contains(mut self, needle: impl Into<String>) -> Self {
        self.assertion.text_contains.push(needle.into());
        self
    }

    // ========== Advanced ==========

    /// Custom assertion function.
    pub fn assert_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&StepOutput) -> bool + 'static,
    {
        self.assertion.custom = Some(Box::new(f));
        self
    }
}

impl Default for AssertionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_session::Engine;

    fn build(f: impl FnOnce(AssertionBuilder) -> AssertionBuilder) -> Assertion {
        f(AssertionBuilder::new()).build()
    }

    #[test]
    fn test_ids_assertion() {
        let result = Ok(StepOutput::Ids(vec![NodeId::new("n2"), NodeId::new("n3")]));

        assert!(build(|a| a.ids(&["n2", "n3"])).verify("s", &result).is_ok());
        assert!(build(|a| a.count(2)).verify("s", &result).is_ok());
        assert!(build(|a| a.count(1)).verify("s", &result).is_err());
        assert!(build(|a| a.fails_with(ErrorKind::NotFound))
            .verify("s", &result)
            .is_err());
    }

    #[test]
    fn test_error_assertions() {
        let engine = Engine::new();
        let result: Result<StepOutput, EngineError> =
            engine.get_root("tree-nope").map(StepOutput::from);

        assert!(build(|a| a.fails_with(ErrorKind::NotFound))
            .verify("s", &result)
            .is_ok());
        assert!(build(|a| a.error("tree-nope")).verify("s", &result).is_ok());
        assert!(build(|a| a.error_matches(r"^.*handle: tree-\w+$"))
            .verify("s", &result)
            .is_ok());
        assert!(build(|a| a.fails_with(ErrorKind::Argument))
            .verify("s", &result)
            .is_err());
        assert!(build(|a| a.ok()).verify("s", &result).is_err());
    }

    #[test]
    fn test_parent_none_assertion() {
        let result = Ok(StepOutput::Parent(None));

        assert!(build(|a| a.ok()).verify("s", &result).is_ok());
        assert!(build(|a| a.node_type(NodeType::Object))
            .verify("s", &result)
            .is_err());
    }
}
