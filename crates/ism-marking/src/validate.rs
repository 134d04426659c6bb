//! # Attribute Group Validation
//!
//! Every construction path funnels through a [`Draft`]: an unvalidated
//! bag of parsed values that only becomes a `SecurityAttributes` once
//! [`AttributeGroupValidator`] accepts it. A failed validation consumes
//! the draft, so no partially validated group can escape.
//!
//! ## Rules
//!
//! For each set field, in descriptor order:
//!
//! 1. The field must be legal under the group's version. Always fatal.
//! 2. Date fields must hold an `xs:date`, not another Gregorian subtype.
//! 3. Vocabulary-backed fields must match their vocabulary. Fatal when the
//!    session treats mismatches as errors, otherwise recorded as a warning.
//!    A vocabulary that cannot be found is always fatal.

use std::collections::BTreeMap;

use ism_core::{
    xs, DdmsVersion, FieldKind, IsmError, MarkingField, ValidationMessage, ValidationOutcome,
    VersionPolicy, VocabularyKey,
};
use ism_vocab::invalid_message;

use crate::attributes::SecurityAttributes;
use crate::session::ValidationSession;
use crate::value::MarkingValue;

/// Parsed but unvalidated field values for one version.
#[derive(Debug)]
pub(crate) struct Draft {
    version: DdmsVersion,
    values: BTreeMap<MarkingField, MarkingValue>,
}

impl Draft {
    pub(crate) fn new(version: DdmsVersion) -> Self {
        Self {
            version,
            values: BTreeMap::new(),
        }
    }

    /// Parses and stores a lexical value. Blank values leave the field
    /// unset.
    pub(crate) fn set_raw(&mut self, field: MarkingField, raw: &str) -> Result<(), IsmError> {
        match MarkingValue::parse(field, raw)? {
            Some(value) => {
                self.values.insert(field, value);
            }
            None => {
                self.values.remove(&field);
            }
        }
        Ok(())
    }

    /// Stores a token list. Each entry is read as an xs:list, so blank
    /// entries vanish and entries holding whitespace become several tokens.
    pub(crate) fn set_list<S: AsRef<str>>(&mut self, field: MarkingField, tokens: &[S]) {
        let tokens: Vec<String> = tokens
            .iter()
            .flat_map(|t| xs::split_list(t.as_ref()))
            .collect();
        if tokens.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, MarkingValue::List(tokens));
        }
    }

    pub(crate) fn set_flag(&mut self, field: MarkingField, value: Option<bool>) {
        match value {
            Some(flag) => {
                self.values.insert(field, MarkingValue::Flag(flag));
            }
            None => {
                self.values.remove(&field);
            }
        }
    }

    /// Runs the rule engine and, on success, seals the draft.
    pub(crate) fn validate(self, session: &ValidationSession) -> Result<SecurityAttributes, IsmError> {
        let warnings = AttributeGroupValidator::new(session).validate(self.version, &self.values)?;
        Ok(SecurityAttributes::sealed(self.version, self.values, warnings))
    }
}

/// Applies version gating, date subtype and vocabulary rules.
pub struct AttributeGroupValidator<'a> {
    session: &'a ValidationSession,
}

impl<'a> AttributeGroupValidator<'a> {
    pub fn new(session: &'a ValidationSession) -> Self {
        Self { session }
    }

    /// Validates `values` under `version`, returning accumulated warnings.
    pub fn validate(
        &self,
        version: DdmsVersion,
        values: &BTreeMap<MarkingField, MarkingValue>,
    ) -> Result<ValidationOutcome, IsmError> {
        let mut warnings = ValidationOutcome::new();

        for descriptor in VersionPolicy::descriptors() {
            let Some(value) = values.get(&descriptor.field) else {
                continue;
            };

            VersionPolicy::check_field(version, descriptor.field)?;

            if descriptor.kind == FieldKind::Date {
                if let MarkingValue::Date(date) = value {
                    if !date.is_date() {
                        return Err(IsmError::Format(format!(
                            "The {} attribute must be in the xs:date format (YYYY-MM-DD).",
                            descriptor.field.name()
                        )));
                    }
                }
            }

            let Some(key) = descriptor.vocabulary else {
                continue;
            };
            for token in value.vocabulary_tokens(descriptor.field, version) {
                self.check_token(
                    version,
                    key,
                    token,
                    &descriptor.field.qualified_name(),
                    &mut warnings,
                )?;
            }
        }

        Ok(warnings)
    }

    /// Checks one token against `key`. A mismatch is an error, or a warning
    /// located at `locator` when the session downgrades mismatches.
    pub(crate) fn check_token(
        &self,
        version: DdmsVersion,
        key: VocabularyKey,
        token: &str,
        locator: &str,
        warnings: &mut ValidationOutcome,
    ) -> Result<(), IsmError> {
        if self.session.enumerations().contains(version, key, token)? {
            return Ok(());
        }
        let message = invalid_message(key, token);
        if self.session.validation_as_errors() {
            return Err(IsmError::Vocabulary {
                key,
                value: token.to_string(),
                message,
            });
        }
        tracing::debug!(
            version = %version,
            locator,
            value = token,
            "vocabulary mismatch recorded as warning"
        );
        warnings.push(ValidationMessage::warning(message, Some(locator.to_string())));
        Ok(())
    }
}
