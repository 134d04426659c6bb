//! # Check Subcommand
//!
//! Reads a YAML marking document, builds the security attribute group it
//! describes, and reports the outcome.
//!
//! ```yaml
//! version: "3.1"
//! classification: U
//! ownerProducer: [USA, AUS]
//! attributes:
//!   SCIcontrols: HCS SI
//!   declassDate: "2030-01-01"
//! notice:
//!   noticeType: DoD-Dist-A
//! ```
//!
//! The `notice` section is only legal from DDMS 4.0.1 on.
//!
//! Exit codes: 0 valid, 1 invalid, 2 operational error (unreadable or
//! malformed document).

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use ism_core::{xs, DdmsVersion, IsmError, ValidationMessage, ValidationOutcome};
use ism_marking::{NoticeAttributes, SecurityAttributes, ValidationSession};

/// Arguments for the `ism check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Marking document to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Fail unless classification and at least one ownerProducer are set.
    #[arg(long)]
    pub require_classification: bool,

    /// Report vocabulary mismatches as warnings instead of failing.
    #[arg(long)]
    pub warnings: bool,

    /// Emit a JSON report.
    #[arg(long)]
    pub json: bool,
}

// ---------------------------------------------------------------------------
// Document model
// ---------------------------------------------------------------------------

/// A marking document as written by users.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkingDocument {
    pub version: DdmsVersion,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default, rename = "ownerProducer")]
    pub owner_producer: Option<DocumentValue>,
    #[serde(default)]
    pub attributes: BTreeMap<String, DocumentValue>,
    #[serde(default)]
    pub notice: BTreeMap<String, DocumentValue>,
}

/// An attribute value: a string, a token list, or a boolean.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DocumentValue {
    Flag(bool),
    List(Vec<String>),
    Text(String),
}

impl DocumentValue {
    pub fn to_lexical(&self) -> String {
        match self {
            Self::Flag(flag) => xs::format_boolean(*flag).to_string(),
            Self::List(tokens) => xs::join_list(tokens),
            Self::Text(text) => text.clone(),
        }
    }

    fn tokens(&self) -> Vec<String> {
        match self {
            Self::List(tokens) => tokens.clone(),
            other => xs::split_list(&other.to_lexical()),
        }
    }
}

impl MarkingDocument {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse marking document {}", path.display()))
    }

    /// Builds and validates the group described by this document.
    pub fn build(&self, session: &ValidationSession) -> Result<SecurityAttributes, IsmError> {
        let owners = self
            .owner_producer
            .as_ref()
            .map(DocumentValue::tokens)
            .unwrap_or_default();
        SecurityAttributes::from_raw(
            session,
            self.version,
            self.classification.as_deref(),
            &owners,
            self.attributes
                .iter()
                .map(|(name, value)| (name.as_str(), value.to_lexical())),
        )
    }

    /// Builds and validates the notice group. Empty when the document has
    /// no `notice` section.
    pub fn build_notice(&self, session: &ValidationSession) -> Result<NoticeAttributes, IsmError> {
        NoticeAttributes::from_raw(
            session,
            self.version,
            self.notice
                .iter()
                .map(|(name, value)| (name.as_str(), value.to_lexical())),
        )
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Outcome of checking one document.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub file: PathBuf,
    pub version: DdmsVersion,
    pub valid: bool,
    pub messages: ValidationOutcome,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl CheckReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let status = if self.valid { "VALID" } else { "INVALID" };
        writeln!(out, "{status}: {} (DDMS {})", self.file.display(), self.version)?;
        for message in &self.messages {
            let label = match message.severity {
                ism_core::Severity::Error => "ERROR",
                ism_core::Severity::Warning => "WARN",
            };
            match &message.locator {
                Some(locator) => writeln!(out, "  {label}: {locator}: {}", message.text)?,
                None => writeln!(out, "  {label}: {}", message.text)?,
            }
        }
        Ok(())
    }
}

/// Checks one document without printing anything.
pub fn check_document(
    path: &Path,
    require_classification: bool,
    session: &ValidationSession,
) -> Result<CheckReport> {
    let document = MarkingDocument::from_file(path)?;
    let mut messages = ValidationOutcome::new();

    let groups = document.build(session).and_then(|attributes| {
        if require_classification {
            attributes.require_classification()?;
        }
        let notice = document.build_notice(session)?;
        Ok((attributes, notice))
    });

    let lexical = match groups {
        Ok((attributes, notice)) => {
            messages.extend(attributes.warnings().clone());
            messages.extend(notice.warnings().clone());
            let mut lexical = attributes.to_lexical_map();
            lexical.extend(notice.to_lexical_map());
            lexical
        }
        Err(err) => {
            tracing::debug!(file = %path.display(), category = err.category(), "marking rejected");
            messages.push(ValidationMessage::from_error(&err, None));
            BTreeMap::new()
        }
    };

    Ok(CheckReport {
        file: path.to_path_buf(),
        version: document.version,
        valid: !messages.has_errors(),
        messages,
        attributes: lexical,
    })
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when valid, 1 when invalid.
pub fn run_check(args: &CheckArgs, session: &mut ValidationSession, out: &mut dyn Write) -> Result<u8> {
    if args.warnings {
        session.set_validation_as_errors(false);
    }

    let report = check_document(&args.file, args.require_classification, session)?;

    tracing::info!(
        file = %report.file.display(),
        valid = report.valid,
        messages = report.messages.len(),
        "checked marking document"
    );

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report).context("failed to write report")?;
        writeln!(out)?;
    } else {
        report.write_text(out)?;
    }

    Ok(if report.valid { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_values_accept_several_shapes() {
        let doc: MarkingDocument = serde_yaml::from_str(
            "version: \"2.0\"\n\
             classification: U\n\
             ownerProducer: USA AUS\n\
             attributes:\n\
             \x20 declassManualReview: true\n\
             \x20 SCIcontrols: [HCS, SI]\n\
             \x20 declassDate: 2005-10-10\n",
        )
        .unwrap();

        assert_eq!(doc.version, DdmsVersion::V2_0);
        assert_eq!(
            doc.owner_producer.as_ref().map(DocumentValue::tokens),
            Some(vec!["USA".to_string(), "AUS".to_string()])
        );
        assert_eq!(doc.attributes["declassManualReview"].to_lexical(), "true");
        assert_eq!(doc.attributes["SCIcontrols"].to_lexical(), "HCS SI");
        assert_eq!(doc.attributes["declassDate"].to_lexical(), "2005-10-10");
    }

    #[test]
    fn unknown_top_level_keys_are_rejected() {
        let result: Result<MarkingDocument, _> =
            serde_yaml::from_str("version: \"5.0\"\nclasification: U\n");
        assert!(result.is_err());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let result: Result<MarkingDocument, _> = serde_yaml::from_str("version: \"1.0\"\n");
        assert!(result.is_err());
    }
}
