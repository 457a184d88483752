//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the Command
//! Center. Each identifier is a distinct type — you cannot pass a
//! [`QuestionId`] where an [`AssignmentId`] is expected.
//!
//! All identifiers in this domain are human-assigned strings
//! (`AUD-2026-021`, `legal`, `asgn-2`, `q-4`), so every newtype wraps a
//! `String` and validates non-emptiness at construction time.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier for the audit run tracked by a session (e.g. `AUD-2026-021`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditId(String);

impl AuditId {
    /// Create an audit identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAuditId`] when the trimmed input
    /// is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidAuditId);
        }
        Ok(Self(s))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuditId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a compliance domain (e.g. `legal`, `infosec`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(String);

impl DomainId {
    /// Create a domain identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDomainId`] when the trimmed input
    /// is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidDomainId);
        }
        Ok(Self(s))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a domain's assignment bundle (e.g. `asgn-2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(String);

impl AssignmentId {
    /// Create an assignment identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAssignmentId`] when the trimmed
    /// input is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidAssignmentId);
        }
        Ok(Self(s))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a single audit question (e.g. `q-4`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a question identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidQuestionId`] when the trimmed
    /// input is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidQuestionId);
        }
        Ok(Self(s))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_accept_non_empty_input() {
        assert_eq!(
            AuditId::new("AUD-2026-021").unwrap().as_str(),
            "AUD-2026-021"
        );
        assert_eq!(DomainId::new("legal").unwrap().as_str(), "legal");
        assert_eq!(AssignmentId::new("asgn-2").unwrap().as_str(), "asgn-2");
        assert_eq!(QuestionId::new("q-4").unwrap().as_str(), "q-4");
    }

    #[test]
    fn identifiers_reject_empty_and_whitespace() {
        assert!(AuditId::new("").is_err());
        assert!(DomainId::new("   ").is_err());
        assert!(AssignmentId::new("").is_err());
        assert!(QuestionId::new("\t").is_err());
    }

    #[test]
    fn identifiers_display_their_raw_value() {
        let id = AssignmentId::new("asgn-1").unwrap();
        assert_eq!(format!("{id}"), "asgn-1");
    }

    #[test]
    fn identifiers_serialize_transparently() {
        let id = QuestionId::new("q-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q-1\"");
        let back: QuestionId = serde_json::from_str("\"q-1\"").unwrap();
        assert_eq!(back, id);
    }
}
