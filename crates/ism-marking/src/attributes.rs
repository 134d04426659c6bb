//! # Security Attributes
//!
//! `SecurityAttributes` is the immutable, validated group of ISM
//! attributes attached to one DDMS component. A group is bound to the DDMS
//! version it was built for and can only decorate carriers of that same
//! version.
//!
//! ## Construction
//!
//! - [`SecurityAttributes::from_raw`]: classification, owner/producers,
//!   and a name to value map of everything else.
//! - [`SecurityAttributes::from_carrier`]: reads the attributes in the
//!   version's ISM namespace.
//! - [`Builder::commit`](crate::Builder::commit).
//!
//! All three validate before returning. Vocabulary mismatches downgraded to
//! warnings are available from [`SecurityAttributes::warnings`].
//!
//! ## Equality
//!
//! Two groups are equal when their versions match and every field is
//! equal, comparing list fields as sets. Warnings do not participate.

use std::collections::BTreeMap;

use ism_core::{DdmsVersion, IsmError, MarkingField, ValidationOutcome, XsDate};

use crate::carrier::Carrier;
use crate::session::ValidationSession;
use crate::validate::Draft;
use crate::value::MarkingValue;

/// Prefix used when writing ISM attributes.
pub const ISM_PREFIX: &str = "ISM";

#[derive(Debug, Clone)]
pub struct SecurityAttributes {
    version: DdmsVersion,
    values: BTreeMap<MarkingField, MarkingValue>,
    warnings: ValidationOutcome,
}

impl SecurityAttributes {
    pub(crate) fn sealed(
        version: DdmsVersion,
        values: BTreeMap<MarkingField, MarkingValue>,
        warnings: ValidationOutcome,
    ) -> Self {
        Self {
            version,
            values,
            warnings,
        }
    }

    /// Builds a group from raw lexical values.
    ///
    /// `others` is keyed by unprefixed attribute name. Names that are not
    /// ISM attributes are ignored, as are `classification` and
    /// `ownerProducer`, which are taken from their own arguments.
    pub fn from_raw<I, K, V>(
        session: &ValidationSession,
        version: DdmsVersion,
        classification: Option<&str>,
        owner_producers: &[String],
        others: I,
    ) -> Result<Self, IsmError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut draft = Draft::new(version);
        if let Some(classification) = classification {
            draft.set_raw(MarkingField::Classification, classification)?;
        }
        draft.set_list(MarkingField::OwnerProducer, owner_producers);

        for (name, value) in others {
            let field = match name.as_ref().parse::<MarkingField>() {
                Ok(MarkingField::Classification | MarkingField::OwnerProducer) => continue,
                Ok(field) => field,
                Err(_) => {
                    tracing::trace!(name = name.as_ref(), "ignoring non-ISM attribute");
                    continue;
                }
            };
            draft.set_raw(field, value.as_ref())?;
        }

        draft.validate(session)
    }

    /// Reads a group from the attributes of `carrier`.
    pub fn from_carrier(session: &ValidationSession, carrier: &Carrier) -> Result<Self, IsmError> {
        let version = carrier.version();
        let namespace = version.ism_namespace();
        let mut draft = Draft::new(version);
        for field in MarkingField::all() {
            if let Some(raw) = carrier.attribute(namespace, field.name()) {
                draft.set_raw(*field, raw)?;
            }
        }
        draft.validate(session)
    }

    /// A group with no fields set.
    pub fn empty(version: DdmsVersion) -> Self {
        Self::sealed(version, BTreeMap::new(), ValidationOutcome::new())
    }

    /// Writes every set field onto `carrier`.
    ///
    /// Fails if the carrier belongs to a different DDMS version.
    pub fn add_to(&self, carrier: &mut Carrier) -> Result<(), IsmError> {
        if carrier.version() != self.version {
            return Err(IsmError::VersionCompatibility(
                "These security attributes cannot decorate a component with a different DDMS version."
                    .to_string(),
            ));
        }
        let namespace = self.version.ism_namespace();
        for (field, value) in &self.values {
            carrier.set_attribute(ISM_PREFIX, namespace, field.name(), value.to_lexical());
        }
        Ok(())
    }

    /// Fails unless a classification and at least one owner/producer are set.
    pub fn require_classification(&self) -> Result<(), IsmError> {
        if self.classification().is_none() {
            return Err(IsmError::Structural("classification is required.".to_string()));
        }
        if self.owner_producers().is_empty() {
            return Err(IsmError::Structural(
                "At least 1 ownerProducer must be set.".to_string(),
            ));
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

    // -----------------------------------------------------------------------
    // Generic access
    // -----------------------------------------------------------------------

    pub fn value(&self, field: MarkingField) -> Option<&MarkingValue> {
        self.values.get(&field)
    }

    /// Set fields and their values, in field order.
    pub fn values(&self) -> impl Iterator<Item = (MarkingField, &MarkingValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    /// Lexical form of every set field, keyed by attribute name.
    pub fn to_lexical_map(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(field, value)| (field.name().to_string(), value.to_lexical()))
            .collect()
    }

    fn text(&self, field: MarkingField) -> Option<&str> {
        match self.values.get(&field) {
            Some(MarkingValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    fn list(&self, field: MarkingField) -> &[String] {
        match self.values.get(&field) {
            Some(MarkingValue::List(tokens)) => tokens,
            _ => &[],
        }
    }

    fn date(&self, field: MarkingField) -> Option<&XsDate> {
        match self.values.get(&field) {
            Some(MarkingValue::Date(date)) => Some(date),
            _ => None,
        }
    }

    // -----------------------------------------------------------------------
    // Field accessors
    // -----------------------------------------------------------------------

    pub fn atomic_energy_markings(&self) -> &[String] {
        self.list(MarkingField::AtomicEnergyMarkings)
    }

    pub fn classification(&self) -> Option<&str> {
        self.text(MarkingField::Classification)
    }

    pub fn classification_reason(&self) -> Option<&str> {
        self.text(MarkingField::ClassificationReason)
    }

    pub fn classified_by(&self) -> Option<&str> {
        self.text(MarkingField::ClassifiedBy)
    }

    pub fn compilation_reason(&self) -> Option<&str> {
        self.text(MarkingField::CompilationReason)
    }

    pub fn complies_with(&self) -> &[String] {
        self.list(MarkingField::CompliesWith)
    }

    pub fn date_of_exempted_source(&self) -> Option<&XsDate> {
        self.date(MarkingField::DateOfExemptedSource)
    }

    pub fn declass_date(&self) -> Option<&XsDate> {
        self.date(MarkingField::DeclassDate)
    }

    pub fn declass_event(&self) -> Option<&str> {
        self.text(MarkingField::DeclassEvent)
    }

    /// A space-delimited list in DDMS 2.0, a single token afterwards.
    pub fn declass_exception(&self) -> Option<&str> {
        self.text(MarkingField::DeclassException)
    }

    pub fn declass_manual_review(&self) -> Option<bool> {
        match self.values.get(&MarkingField::DeclassManualReview) {
            Some(MarkingValue::Flag(flag)) => Some(*flag),
            _ => None,
        }
    }

    pub fn derivatively_classified_by(&self) -> Option<&str> {
        self.text(MarkingField::DerivativelyClassifiedBy)
    }

    pub fn derived_from(&self) -> Option<&str> {
        self.text(MarkingField::DerivedFrom)
    }

    pub fn display_only_to(&self) -> &[String] {
        self.list(MarkingField::DisplayOnlyTo)
    }

    pub fn dissemination_controls(&self) -> &[String] {
        self.list(MarkingField::DisseminationControls)
    }

    pub fn fgi_source_open(&self) -> &[String] {
        self.list(MarkingField::FgiSourceOpen)
    }

    pub fn fgi_source_protected(&self) -> &[String] {
        self.list(MarkingField::FgiSourceProtected)
    }

    pub fn non_ic_markings(&self) -> &[String] {
        self.list(MarkingField::NonIcMarkings)
    }

    pub fn non_us_controls(&self) -> &[String] {
        self.list(MarkingField::NonUsControls)
    }

    pub fn owner_producers(&self) -> &[String] {
        self.list(MarkingField::OwnerProducer)
    }

    pub fn releasable_to(&self) -> &[String] {
        self.list(MarkingField::ReleasableTo)
    }

    pub fn sar_identifier(&self) -> &[String] {
        self.list(MarkingField::SarIdentifier)
    }

    pub fn sci_controls(&self) -> &[String] {
        self.list(MarkingField::SciControls)
    }

    /// A space-delimited list in DDMS 2.0, a single token in 3.0.
    pub fn type_of_exempted_source(&self) -> Option<&str> {
        self.text(MarkingField::TypeOfExemptedSource)
    }
}

impl PartialEq for SecurityAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.values.len() == other.values.len()
            && self.values.iter().all(|(field, value)| {
                other
                    .values
                    .get(field)
                    .is_some_and(|theirs| value.same_as(theirs))
            })
    }
}

impl Eq for SecurityAttributes {}
