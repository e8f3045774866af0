use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DependentsError;

/// Identifies one binary within a project's module graph.
///
/// A binary is addressed by the project that declares it, the library
/// (component) it belongs to, and the variant built from it. The canonical
/// text form is `project:library:variant`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BinaryIdentifier {
    pub project_path: String,
    pub library_name: String,
    pub variant: String,
}

impl BinaryIdentifier {
    pub fn new(
        project_path: impl Into<String>,
        library_name: impl Into<String>,
        variant: impl Into<String>,
    ) -> Self {
        Self {
            project_path: project_path.into(),
            library_name: library_name.into(),
            variant: variant.into(),
        }
    }

    /// Parse the canonical `project:library:variant` form.
    ///
    /// Used for identifiers coming from outside the process (reports,
    /// command lines, persisted results); in-process resolvers should build
    /// identifiers with [`BinaryIdentifier::new`] instead.
    pub fn parse(s: &str) -> Result<Self, DependentsError> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(DependentsError::InvalidIdentifier {
                input: s.to_string(),
                message: format!("expected 3 `:`-separated segments, found {}", parts.len()),
            });
        }
        if let Some(pos) = parts.iter().position(|p| p.is_empty()) {
            return Err(DependentsError::InvalidIdentifier {
                input: s.to_string(),
                message: format!("segment {} is empty", pos + 1),
            });
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl FromStr for BinaryIdentifier {
    type Err = DependentsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BinaryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.project_path, self.library_name, self.variant
        )
    }
}
