use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for dependents-tree construction.
#[derive(Debug, Error, Diagnostic)]
pub enum DependentsError {
    /// A result node was constructed from raw input with no identifier.
    #[error("binary identifier must be non-null")]
    #[diagnostic(help(
        "every resolved dependents node names the binary it describes; reject or repair the input before constructing the tree"
    ))]
    MissingIdentifier,

    /// An identifier string did not match the canonical form.
    #[error("invalid binary identifier `{input}`: {message}")]
    #[diagnostic(help("expected `project:library:variant`, e.g. `proj:libA:binary1`"))]
    InvalidIdentifier { input: String, message: String },
}

/// Convenience alias for results in this crate.
pub type DependentsResult<T> = Result<T, DependentsError>;
