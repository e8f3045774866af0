use serde::{Deserialize, Serialize};

use crate::errors::{DependentsError, DependentsResult};
use crate::identifier::BinaryIdentifier;

/// One node of a dependent-binaries resolution result.
///
/// The node names a binary, records whether it can currently be built and
/// whether it is a test-suite artifact, and holds the binaries that depend
/// on it (directly or transitively) as an ordered child sequence. Child
/// order is the resolver's discovery order and is preserved as given.
///
/// Nodes are immutable once constructed: resolvers build the tree bottom-up
/// with the full child set in hand, and consumers only read. There is no
/// interior mutability, so sharing a tree across threads needs no
/// synchronization.
///
/// Acyclicity is the resolver's responsibility, not checked here; since
/// children are owned values, a tree built through this API cannot contain
/// itself in any case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependents {
    id: BinaryIdentifier,
    buildable: bool,
    test_suite: bool,
    #[serde(default)]
    children: Vec<ResolvedDependents>,
}

impl ResolvedDependents {
    /// A leaf node: a binary with no known dependents.
    pub fn new(id: BinaryIdentifier, buildable: bool, test_suite: bool) -> Self {
        Self {
            id,
            buildable,
            test_suite,
            children: Vec::new(),
        }
    }

    /// A node with the given dependents, in the given order.
    ///
    /// The children are collected into an internally owned sequence, so
    /// later changes to the caller's collection do not affect the node.
    pub fn with_children(
        id: BinaryIdentifier,
        buildable: bool,
        test_suite: bool,
        children: impl IntoIterator<Item = ResolvedDependents>,
    ) -> Self {
        Self {
            id,
            buildable,
            test_suite,
            children: children.into_iter().collect(),
        }
    }

    /// Construct from raw parts where the identifier may be absent.
    ///
    /// This is the seam for deserialized or computed input that cannot be
    /// statically guaranteed complete; an absent identifier is rejected
    /// with [`DependentsError::MissingIdentifier`] and no node is produced.
    pub fn from_raw(
        id: Option<BinaryIdentifier>,
        buildable: bool,
        test_suite: bool,
    ) -> DependentsResult<Self> {
        Self::from_raw_with_children(id, buildable, test_suite, None)
    }

    /// Raw construction with an optional child sequence.
    ///
    /// An absent child sequence is treated identically to an empty one.
    pub fn from_raw_with_children(
        id: Option<BinaryIdentifier>,
        buildable: bool,
        test_suite: bool,
        children: Option<Vec<ResolvedDependents>>,
    ) -> DependentsResult<Self> {
        let id = id.ok_or(DependentsError::MissingIdentifier)?;
        Ok(Self {
            id,
            buildable,
            test_suite,
            children: children.unwrap_or_default(),
        })
    }

    /// The binary this node describes.
    pub fn id(&self) -> &BinaryIdentifier {
        &self.id
    }

    /// Whether the binary's build preconditions are currently satisfiable.
    pub fn is_buildable(&self) -> bool {
        self.buildable
    }

    /// Whether the binary is a test-suite artifact rather than a
    /// production artifact.
    pub fn is_test_suite(&self) -> bool {
        self.test_suite
    }

    /// The binaries that depend on this one, in resolver discovery order.
    pub fn children(&self) -> &[ResolvedDependents] {
        &self.children
    }
}
