//! Arbor Codec
//!
//! Convert between JSON documents and trees.
//!
//! Responsibilities:
//! - Build a tree from JSON text with deterministic id assignment
//! - Serialize a tree back to JSON, failing on broken invariants
//! - Render an indented diagnostic outline that tolerates corruption
//!
//! # Module Structure
//!
//! - `load` - JSON to tree
//! - `serialize` - tree to JSON
//! - `render` - tree to indented text
//! - `error` - Error types for codec failures

mod error;
mod load;
mod render;
mod serialize;

pub use error::{CodecError, CodecResult};
pub use load::{load_str, load_value};
pub use render::render_text;
pub use serialize::{to_json_string, to_json_value};
