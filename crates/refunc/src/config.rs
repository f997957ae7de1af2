//! Rename-pair configuration
//!
//! A rewrite run is configured by two fully-qualified dotted names, e.g.
//! `pkg.utils.old_func` and `pkg.utils.new_func`. Both names are validated
//! here, when the rule is constructed, so a malformed configuration is
//! rejected before any file is visited instead of silently matching nothing.

use ruff_python_stdlib::identifiers::is_identifier;
use thiserror::Error;

/// Errors raised while validating a rename configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenameError {
    #[error("qualified name is empty")]
    Empty,

    #[error("invalid segment {segment:?} in qualified name {name:?}")]
    InvalidSegment { name: String, segment: String },

    #[error("qualified name {0:?} has no module portion (expected `module.function`)")]
    MissingModule(String),
}

/// A fully-qualified dotted name, split into identifier segments.
///
/// Invariants: at least two segments (module portion plus function name),
/// every segment a valid Python identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    /// Parse a dot-separated qualified name, validating each segment.
    pub fn parse(name: &str) -> Result<Self, RenameError> {
        if name.is_empty() {
            return Err(RenameError::Empty);
        }

        let segments: Vec<String> = name.split('.').map(str::to_owned).collect();
        for segment in &segments {
            if !is_identifier(segment) {
                return Err(RenameError::InvalidSegment {
                    name: name.to_owned(),
                    segment: segment.clone(),
                });
            }
        }
        if segments.len() < 2 {
            return Err(RenameError::MissingModule(name.to_owned()));
        }

        Ok(Self { segments })
    }

    /// The simple name used at call sites (the last segment).
    pub fn simple_name(&self) -> &str {
        self.segments
            .last()
            .expect("qualified name has at least two segments")
    }

    /// The module portion: every segment except the function name.
    pub fn module_parts(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// The `(rename_from, rename_to)` pair defining one rewrite rule instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub from: QualifiedName,
    pub to: QualifiedName,
}

impl RenamePair {
    pub fn new(rename_from: &str, rename_to: &str) -> Result<Self, RenameError> {
        Ok(Self {
            from: QualifiedName::parse(rename_from)?,
            to: QualifiedName::parse(rename_to)?,
        })
    }
}
