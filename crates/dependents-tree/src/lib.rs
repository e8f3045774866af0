//! Result-tree data types for dependent-binaries resolution.
//!
//! When a build tool is asked what else must be rebuilt after a binary
//! changes, the resolver walks the project's binary dependency graph and
//! produces a tree: the queried binary at the root, every binary that
//! directly or transitively depends on it as descendants, each annotated
//! with whether it is currently buildable and whether it is a test suite.
//!
//! This crate defines that result tree and read-only helpers for consuming
//! it. The resolution itself (graph discovery, cycle handling, build
//! execution) lives elsewhere; resolvers construct [`ResolvedDependents`]
//! values bottom-up and hand the root to consumers, which read the tree
//! through accessors only.
//!
//! This crate is intentionally free of async code and I/O.

pub mod errors;
pub mod identifier;
pub mod report;
pub mod resolved;

pub use errors::{DependentsError, DependentsResult};
pub use identifier::BinaryIdentifier;
pub use resolved::ResolvedDependents;
