//! Engine configuration.

use arbor_query::UNBOUNDED;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Tunables applied when a call leaves them unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Depth bound for searches without an explicit one; -1 is unbounded.
    pub default_max_depth: i64,
    /// Result bound for searches without an explicit one; -1 is unbounded.
    pub default_max_results: i64,
    /// Indent JSON output.
    pub pretty_json: bool,
    /// Spaces per level in text renderings.
    pub render_indent: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_max_depth: UNBOUNDED,
            default_max_results: UNBOUNDED,
            pretty_json: true,
            render_indent: 2,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        for (name, value) in [
            ("default_max_depth", self.default_max_depth),
            ("default_max_results", self.default_max_results),
        ] {
            if value < UNBOUNDED {
                return Err(EngineError::invalid_config(format!(
                    "{} must be -1 or non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
