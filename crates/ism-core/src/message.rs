//! # Validation Messages
//!
//! Non-fatal findings accumulate on a validated component as
//! `ValidationMessage`s. Errors abort construction and are never stored
//! here; the `Error` severity exists so reports can mix fatal and
//! non-fatal findings in one list.

use serde::{Deserialize, Serialize};

use crate::error::IsmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One finding, optionally located at a qualified attribute name such as
/// `ISM:classification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    pub severity: Severity,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub locator: Option<String>,
}

impl ValidationMessage {
    pub fn warning(text: impl Into<String>, locator: Option<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
            locator,
        }
    }

    pub fn error(text: impl Into<String>, locator: Option<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
            locator,
        }
    }

    pub fn from_error(err: &IsmError, locator: Option<String>) -> Self {
        Self::error(err.to_string(), locator)
    }
}

/// Ordered list of findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationOutcome {
    messages: Vec<ValidationMessage>,
}

impl ValidationOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ValidationMessage) {
        self.messages.push(message);
    }

    pub fn extend(&mut self, other: ValidationOutcome) {
        self.messages.extend(other.messages);
    }

    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages
            .iter()
            .filter(|m| m.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl<'a> IntoIterator for &'a ValidationOutcome {
    type Item = &'a ValidationMessage;
    type IntoIter = std::slice::Iter<'a, ValidationMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
