//! # Notice Attributes
//!
//! The ISM attributes carried by notice components: the notice type and
//! its reason, the date it was issued, a free-text type for notices with
//! no registered token, and (from DDMS 4.1) whether the notice is
//! external. The group follows the same life cycle as
//! [`SecurityAttributes`](crate::SecurityAttributes): raw values are parsed
//! into a draft, validated against a [`ValidationSession`], and only then
//! sealed.
//!
//! ## Rules
//!
//! 1. A non-empty group needs DDMS 4.0.1 or later.
//! 2. Each set field must be legal under the group's version.
//! 3. `noticeReason` and `unregisteredNoticeType` hold at most 2048
//!    characters.
//! 4. `noticeDate` must be an `xs:date`.
//! 5. `noticeType` must match the notice vocabulary, as an error or a
//!    warning depending on the session.

use std::collections::BTreeMap;

use ism_core::{
    xs, DdmsVersion, FieldKind, IsmError, NoticeField, NoticePolicy, ValidationOutcome, XsDate,
};

use crate::attributes::ISM_PREFIX;
use crate::carrier::Carrier;
use crate::session::ValidationSession;
use crate::validate::AttributeGroupValidator;
use crate::value::MarkingValue;

/// Parses the lexical form of a notice field. Blank input yields `None`.
fn parse(field: NoticeField, raw: &str) -> Result<Option<MarkingValue>, IsmError> {
    let kind = NoticePolicy::descriptor(field).kind;
    MarkingValue::parse_kind(kind, &field.qualified_name(), raw)
}

#[derive(Debug)]
struct NoticeDraft {
    version: DdmsVersion,
    values: BTreeMap<NoticeField, MarkingValue>,
}

impl NoticeDraft {
    fn new(version: DdmsVersion) -> Self {
        Self {
            version,
            values: BTreeMap::new(),
        }
    }

    fn set(&mut self, field: NoticeField, value: Option<MarkingValue>) {
        match value {
            Some(value) => {
                self.values.insert(field, value);
            }
            None => {
                self.values.remove(&field);
            }
        }
    }

    fn set_raw(&mut self, field: NoticeField, raw: &str) -> Result<(), IsmError> {
        let value = parse(field, raw)?;
        self.set(field, value);
        Ok(())
    }

    fn validate(self, session: &ValidationSession) -> Result<NoticeAttributes, IsmError> {
        let warnings = NoticeValidator::new(session).validate(self.version, &self.values)?;
        Ok(NoticeAttributes {
            version: self.version,
            values: self.values,
            warnings,
        })
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Applies the notice group rules.
pub struct NoticeValidator<'a> {
    session: &'a ValidationSession,
}

impl<'a> NoticeValidator<'a> {
    pub fn new(session: &'a ValidationSession) -> Self {
        Self { session }
    }

    /// Validates `values` under `version`, returning accumulated warnings.
    pub fn validate(
        &self,
        version: DdmsVersion,
        values: &BTreeMap<NoticeField, MarkingValue>,
    ) -> Result<ValidationOutcome, IsmError> {
        let mut warnings = ValidationOutcome::new();
        if values.is_empty() {
            return Ok(warnings);
        }
        NoticePolicy::check_group(version)?;

        let tokens = AttributeGroupValidator::new(self.session);
        for descriptor in NoticePolicy::descriptors() {
            let Some(value) = values.get(&descriptor.field) else {
                continue;
            };
            NoticePolicy::check_field(version, descriptor.field)?;

            match value {
                MarkingValue::Text(text) => {
                    NoticePolicy::check_length(descriptor.field, text)?;
                    if let Some(key) = descriptor.vocabulary {
                        tokens.check_token(
                            version,
                            key,
                            text,
                            &descriptor.field.qualified_name(),
                            &mut warnings,
                        )?;
                    }
                }
                MarkingValue::Date(date) if !date.is_date() => {
                    return Err(IsmError::Format(format!(
                        "The {} attribute must be in the xs:date format (YYYY-MM-DD).",
                        descriptor.field.name()
                    )));
                }
                _ => {}
            }
        }

        Ok(warnings)
    }
}

// ---------------------------------------------------------------------------
// Validated group
// ---------------------------------------------------------------------------

/// A validated notice attribute group, bound to one DDMS version.
#[derive(Debug, Clone)]
pub struct NoticeAttributes {
    version: DdmsVersion,
    values: BTreeMap<NoticeField, MarkingValue>,
    warnings: ValidationOutcome,
}

impl NoticeAttributes {
    /// Builds a group from name to value pairs. Names that are not notice
    /// attributes are ignored.
    pub fn from_raw<I, K, V>(
        session: &ValidationSession,
        version: DdmsVersion,
        values: I,
    ) -> Result<Self, IsmError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut draft = NoticeDraft::new(version);
        for (name, value) in values {
            match name.as_ref().parse::<NoticeField>() {
                Ok(field) => draft.set_raw(field, value.as_ref())?,
                Err(_) => {
                    tracing::trace!(name = name.as_ref(), "ignoring non-notice attribute");
                }
            }
        }
        draft.validate(session)
    }

    /// Reads a group from the attributes of `carrier`.
    pub fn from_carrier(session: &ValidationSession, carrier: &Carrier) -> Result<Self, IsmError> {
        let version = carrier.version();
        let namespace = version.ism_namespace();
        let mut draft = NoticeDraft::new(version);
        for field in NoticeField::all() {
            if let Some(raw) = carrier.attribute(namespace, field.name()) {
                draft.set_raw(*field, raw)?;
            }
        }
        draft.validate(session)
    }

    pub fn empty(version: DdmsVersion) -> Self {
        Self {
            version,
            values: BTreeMap::new(),
            warnings: ValidationOutcome::new(),
        }
    }

    /// Writes every set field onto `carrier`, which must share the group's
    /// version.
    pub fn add_to(&self, carrier: &mut Carrier) -> Result<(), IsmError> {
        if carrier.version() != self.version {
            return Err(IsmError::VersionCompatibility(
                "These notice attributes cannot decorate a component with a different DDMS version."
                    .to_string(),
            ));
        }
        let namespace = self.version.ism_namespace();
        for (field, value) in &self.values {
            carrier.set_attribute(ISM_PREFIX, namespace, field.name(), value.to_lexical());
        }
        Ok(())
    }

    pub fn version(&self) -> DdmsVersion {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn warnings(&self) -> &ValidationOutcome {
        &self.warnings
    }

    pub fn value(&self, field: NoticeField) -> Option<&MarkingValue> {
        self.values.get(&field)
    }

    /// Lexical form of every set field, keyed by attribute name.
    pub fn to_lexical_map(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(field, value)| (field.name().to_string(), value.to_lexical()))
            .collect()
    }

    fn text(&self, field: NoticeField) -> Option<&str> {
        match self.values.get(&field) {
            Some(MarkingValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn notice_type(&self) -> Option<&str> {
        self.text(NoticeField::NoticeType)
    }

    pub fn notice_reason(&self) -> Option<&str> {
        self.text(NoticeField::NoticeReason)
    }

    pub fn notice_date(&self) -> Option<&XsDate> {
        match self.values.get(&NoticeField::NoticeDate) {
            Some(MarkingValue::Date(date)) => Some(date),
            _ => None,
        }
    }

    pub fn unregistered_notice_type(&self) -> Option<&str> {
        self.text(NoticeField::UnregisteredNoticeType)
    }

    pub fn external_notice(&self) -> Option<bool> {
        match self.values.get(&NoticeField::ExternalNotice) {
            Some(MarkingValue::Flag(flag)) => Some(*flag),
            _ => None,
        }
    }
}

impl PartialEq for NoticeAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.values == other.values
    }
}

impl Eq for NoticeAttributes {}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Staging area for a notice group. Values stay lexical until
/// [`NoticeBuilder::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeBuilder {
    version: DdmsVersion,
    texts: BTreeMap<NoticeField, String>,
    external_notice: Option<bool>,
}

impl NoticeBuilder {
    pub fn new(version: DdmsVersion) -> Self {
        Self {
            version,
            texts: BTreeMap::new(),
            external_notice: None,
        }
    }

    pub fn version(&self) -> DdmsVersion {
        self.version
    }

    /// Sets the lexical value of `field`. `externalNotice` text is parsed
    /// as an xs:boolean; anything else is kept for `commit` to reject.
    pub fn set_text(&mut self, field: NoticeField, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if NoticePolicy::descriptor(field).kind == FieldKind::Boolean {
            self.external_notice = xs::parse_boolean(&value);
            if self.external_notice.is_some() || value.trim().is_empty() {
                self.texts.remove(&field);
                return self;
            }
        }
        self.texts.insert(field, value);
        self
    }

    pub fn notice_type(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_text(NoticeField::NoticeType, value)
    }

    pub fn notice_reason(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_text(NoticeField::NoticeReason, value)
    }

    pub fn notice_date(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_text(NoticeField::NoticeDate, value)
    }

    pub fn unregistered_notice_type(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_text(NoticeField::UnregisteredNoticeType, value)
    }

    pub fn external_notice(&mut self, value: Option<bool>) -> &mut Self {
        self.external_notice = value;
        self.texts.remove(&NoticeField::ExternalNotice);
        self
    }

    pub fn clear(&mut self, field: NoticeField) -> &mut Self {
        self.texts.remove(&field);
        if field == NoticeField::ExternalNotice {
            self.external_notice = None;
        }
        self
    }

    pub fn text(&self, field: NoticeField) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.texts.values().all(|text| text.trim().is_empty()) && self.external_notice.is_none()
    }

    /// Validates the staged values and produces a group.
    pub fn commit(&self, session: &ValidationSession) -> Result<NoticeAttributes, IsmError> {
        let mut draft = NoticeDraft::new(self.version);
        for (field, text) in &self.texts {
            draft.set_raw(*field, text)?;
        }
        if let Some(flag) = self.external_notice {
            draft.set(NoticeField::ExternalNotice, Some(MarkingValue::Flag(flag)));
        }
        draft.validate(session)
    }
}

impl From<&NoticeAttributes> for NoticeBuilder {
    fn from(attributes: &NoticeAttributes) -> Self {
        let mut builder = NoticeBuilder::new(attributes.version());
        for (field, value) in &attributes.values {
            match value {
                MarkingValue::Flag(flag) => {
                    builder.external_notice = Some(*flag);
                }
                other => {
                    builder.texts.insert(*field, other.to_lexical());
                }
            }
        }
        builder
    }
}
