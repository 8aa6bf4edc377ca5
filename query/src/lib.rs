//! Arbor Query
//!
//! Read operations over a tree (navigation and search).
//!
//! Responsibilities:
//! - Resolve ids, parents, children and dotted paths
//! - Compile declarative predicate maps into a Query
//! - Run bounded, cycle-safe depth-first searches

mod error;
mod finder;
mod navigator;
mod predicate;

pub use error::{QueryError, QueryResult};
pub use finder::{find_nodes, SearchBounds, UNBOUNDED};
pub use navigator::Navigator;
pub use predicate::{Predicate, Query};
