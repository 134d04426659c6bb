//! Typed marking values and their lexical forms.

use std::collections::BTreeSet;

use ism_core::{xs, DdmsVersion, FieldKind, IsmError, MarkingField, VersionPolicy, XsDate};

/// The value of one set marking field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkingValue {
    /// Scalar text, or a legacy list kept as one string.
    Text(String),
    /// Token list. Never empty.
    List(Vec<String>),
    Date(XsDate),
    Flag(bool),
}

impl MarkingValue {
    /// Parses the lexical form of `field`. Blank input yields `None`.
    pub fn parse(field: MarkingField, raw: &str) -> Result<Option<Self>, IsmError> {
        let kind = VersionPolicy::descriptor(field).kind;
        Self::parse_kind(kind, &field.qualified_name(), raw)
    }

    /// Parses `raw` as a value of `kind`. `qualified` names the attribute in
    /// error messages.
    pub(crate) fn parse_kind(
        kind: FieldKind,
        qualified: &str,
        raw: &str,
    ) -> Result<Option<Self>, IsmError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let value = match kind {
            FieldKind::Scalar | FieldKind::LegacyList => Self::Text(raw.to_string()),
            FieldKind::List => Self::List(xs::split_list(raw)),
            FieldKind::Date => Self::Date(XsDate::parse(raw).map_err(|_| {
                IsmError::Format(format!(
                    "The {qualified} attribute is not in a valid date format."
                ))
            })?),
            FieldKind::Boolean => Self::Flag(xs::parse_boolean(raw).ok_or_else(|| {
                IsmError::Format(format!(
                    "The {qualified} attribute is not a valid xs:boolean value."
                ))
            })?),
        };
        Ok(Some(value))
    }

    /// The form written to markup.
    pub fn to_lexical(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(tokens) => xs::join_list(tokens),
            Self::Date(date) => date.to_xml_format(),
            Self::Flag(flag) => xs::format_boolean(*flag).to_string(),
        }
    }

    /// Values checked against the field's vocabulary under `version`.
    pub(crate) fn vocabulary_tokens(&self, field: MarkingField, version: DdmsVersion) -> Vec<&str> {
        let multi = VersionPolicy::descriptor(field).is_multi_valued(version);
        match self {
            Self::List(tokens) => tokens.iter().map(String::as_str).collect(),
            Self::Text(text) if multi => text.split_whitespace().collect(),
            Self::Text(text) => vec![text.as_str()],
            Self::Date(_) | Self::Flag(_) => Vec::new(),
        }
    }

    /// Equality with lists compared as sets.
    pub(crate) fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(a), Self::List(b)) => {
                a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>()
            }
            _ => self == other,
        }
    }
}
