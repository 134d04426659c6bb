//! # Builder
//!
//! A mutable staging area for a security attribute group. Every field is
//! held in its lexical form; nothing is parsed or validated until
//! [`Builder::commit`], which runs the same rules as every other
//! construction path.

use std::collections::BTreeMap;

use ism_core::{xs, DdmsVersion, FieldKind, IsmError, MarkingField, VersionPolicy};

use crate::attributes::SecurityAttributes;
use crate::session::ValidationSession;
use crate::validate::Draft;
use crate::value::MarkingValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builder {
    version: DdmsVersion,
    texts: BTreeMap<MarkingField, String>,
    lists: BTreeMap<MarkingField, Vec<String>>,
    declass_manual_review: Option<bool>,
}

macro_rules! text_setters {
    ($($setter:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $setter(&mut self, value: impl Into<String>) -> &mut Self {
                self.set_text(MarkingField::$field, value)
            }
        )*
    };
}

macro_rules! list_setters {
    ($($setter:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $setter<I, S>(&mut self, tokens: I) -> &mut Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.set_list(MarkingField::$field, tokens)
            }
        )*
    };
}

impl Builder {
    pub fn new(version: DdmsVersion) -> Self {
        Self {
            version,
            texts: BTreeMap::new(),
            lists: BTreeMap::new(),
            declass_manual_review: None,
        }
    }

    pub fn version(&self) -> DdmsVersion {
        self.version
    }

    /// Sets the lexical value of any field.
    ///
    /// List fields are split on whitespace. `declassManualReview` is parsed
    /// as an xs:boolean; text that is not one is kept so that
    /// [`Builder::commit`] reports it.
    pub fn set_text(&mut self, field: MarkingField, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match VersionPolicy::descriptor(field).kind {
            FieldKind::List => {
                self.lists.insert(field, xs::split_list(&value));
            }
            FieldKind::Boolean => {
                self.declass_manual_review = xs::parse_boolean(&value);
                if self.declass_manual_review.is_some() || value.trim().is_empty() {
                    self.texts.remove(&field);
                } else {
                    tracing::debug!(field = %field, value = %value, "boolean text kept for commit");
                    self.texts.insert(field, value);
                }
            }
            FieldKind::Scalar | FieldKind::LegacyList | FieldKind::Date => {
                self.texts.insert(field, value);
            }
        }
        self
    }

    /// Replaces the tokens of a list field. Entries are split on
    /// whitespace. On any other field the tokens are joined with single
    /// spaces and stored as text.
    pub fn set_list<I, S>(&mut self, field: MarkingField, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if VersionPolicy::descriptor(field).kind == FieldKind::List {
            let split = tokens.iter().flat_map(|t| xs::split_list(t)).collect();
            self.lists.insert(field, split);
            self
        } else {
            self.set_text(field, tokens.join(" "))
        }
    }

    /// Unsets a field.
    pub fn clear(&mut self, field: MarkingField) -> &mut Self {
        self.texts.remove(&field);
        self.lists.remove(&field);
        if field == MarkingField::DeclassManualReview {
            self.declass_manual_review = None;
        }
        self
    }

    pub fn declass_manual_review(&mut self, value: Option<bool>) -> &mut Self {
        self.declass_manual_review = value;
        self.texts.remove(&MarkingField::DeclassManualReview);
        self
    }

    text_setters! {
        classification => Classification,
        classification_reason => ClassificationReason,
        classified_by => ClassifiedBy,
        compilation_reason => CompilationReason,
        date_of_exempted_source => DateOfExemptedSource,
        declass_date => DeclassDate,
        declass_event => DeclassEvent,
        declass_exception => DeclassException,
        derivatively_classified_by => DerivativelyClassifiedBy,
        derived_from => DerivedFrom,
        type_of_exempted_source => TypeOfExemptedSource,
    }

    list_setters! {
        atomic_energy_markings => AtomicEnergyMarkings,
        complies_with => CompliesWith,
        display_only_to => DisplayOnlyTo,
        dissemination_controls => DisseminationControls,
        fgi_source_open => FgiSourceOpen,
        fgi_source_protected => FgiSourceProtected,
        non_ic_markings => NonIcMarkings,
        non_us_controls => NonUsControls,
        owner_producers => OwnerProducer,
        releasable_to => ReleasableTo,
        sar_identifier => SarIdentifier,
        sci_controls => SciControls,
    }

    /// Text held for `field`, if any.
    pub fn text(&self, field: MarkingField) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    /// Tokens held for `field`. Empty when unset.
    pub fn list(&self, field: MarkingField) -> &[String] {
        self.lists.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when every text is blank, every list holds only blank tokens,
    /// and the boolean is unset.
    pub fn is_empty(&self) -> bool {
        self.texts.values().all(|text| text.trim().is_empty())
            && self.lists.values().all(|tokens| xs::is_blank_list(tokens))
            && self.declass_manual_review.is_none()
    }

    /// Validates the staged values and produces a group.
    ///
    /// An empty builder commits to an empty group.
    pub fn commit(&self, session: &ValidationSession) -> Result<SecurityAttributes, IsmError> {
        let mut draft = Draft::new(self.version);
        for (field, text) in &self.texts {
            draft.set_raw(*field, text)?;
        }
        for (field, tokens) in &self.lists {
            draft.set_list(*field, tokens);
        }
        draft.set_flag(MarkingField::DeclassManualReview, self.declass_manual_review);
        draft.validate(session)
    }
}

impl From<&SecurityAttributes> for Builder {
    fn from(attributes: &SecurityAttributes) -> Self {
        let mut builder = Builder::new(attributes.version());
        for (field, value) in attributes.values() {
            match value {
                MarkingValue::Text(text) => {
                    builder.texts.insert(field, text.clone());
                }
                MarkingValue::List(tokens) => {
                    builder.lists.insert(field, tokens.clone());
                }
                MarkingValue::Date(date) => {
                    builder.texts.insert(field, date.to_xml_format());
                }
                MarkingValue::Flag(flag) => {
                    builder.declass_manual_review = Some(*flag);
                }
            }
        }
        builder
    }
}
