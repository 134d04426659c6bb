//! # Marking Fields
//!
//! The 24 attributes of an ISM security attribute group. The string form
//! is the unprefixed attribute name as it appears in markup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::key::UnknownName;

/// One ISM security attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MarkingField {
    AtomicEnergyMarkings,
    Classification,
    ClassificationReason,
    ClassifiedBy,
    CompilationReason,
    CompliesWith,
    DateOfExemptedSource,
    DeclassDate,
    DeclassEvent,
    DeclassException,
    DeclassManualReview,
    DerivativelyClassifiedBy,
    DerivedFrom,
    DisplayOnlyTo,
    DisseminationControls,
    FgiSourceOpen,
    FgiSourceProtected,
    NonIcMarkings,
    NonUsControls,
    OwnerProducer,
    ReleasableTo,
    SarIdentifier,
    SciControls,
    TypeOfExemptedSource,
}

pub const MARKING_FIELD_COUNT: usize = 24;

impl MarkingField {
    /// All fields, in the order validation visits them.
    pub fn all() -> &'static [MarkingField] {
        &[
            Self::AtomicEnergyMarkings,
            Self::Classification,
            Self::ClassificationReason,
            Self::ClassifiedBy,
            Self::CompilationReason,
            Self::CompliesWith,
            Self::DateOfExemptedSource,
            Self::DeclassDate,
            Self::DeclassEvent,
            Self::DeclassException,
            Self::DeclassManualReview,
            Self::DerivativelyClassifiedBy,
            Self::DerivedFrom,
            Self::DisplayOnlyTo,
            Self::DisseminationControls,
            Self::FgiSourceOpen,
            Self::FgiSourceProtected,
            Self::NonIcMarkings,
            Self::NonUsControls,
            Self::OwnerProducer,
            Self::ReleasableTo,
            Self::SarIdentifier,
            Self::SciControls,
            Self::TypeOfExemptedSource,
        ]
    }

    /// Unprefixed attribute name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AtomicEnergyMarkings => "atomicEnergyMarkings",
            Self::Classification => "classification",
            Self::ClassificationReason => "classificationReason",
            Self::ClassifiedBy => "classifiedBy",
            Self::CompilationReason => "compilationReason",
            Self::CompliesWith => "compliesWith",
            Self::DateOfExemptedSource => "dateOfExemptedSource",
            Self::DeclassDate => "declassDate",
            Self::DeclassEvent => "declassEvent",
            Self::DeclassException => "declassException",
            Self::DeclassManualReview => "declassManualReview",
            Self::DerivativelyClassifiedBy => "derivativelyClassifiedBy",
            Self::DerivedFrom => "derivedFrom",
            Self::DisplayOnlyTo => "displayOnlyTo",
            Self::DisseminationControls => "disseminationControls",
            Self::FgiSourceOpen => "FGIsourceOpen",
            Self::FgiSourceProtected => "FGIsourceProtected",
            Self::NonIcMarkings => "nonICmarkings",
            Self::NonUsControls => "nonUSControls",
            Self::OwnerProducer => "ownerProducer",
            Self::ReleasableTo => "releasableTo",
            Self::SarIdentifier => "SARIdentifier",
            Self::SciControls => "SCIcontrols",
            Self::TypeOfExemptedSource => "typeOfExemptedSource",
        }
    }

    /// Name qualified with the conventional `ISM` prefix, used as a locator.
    pub fn qualified_name(&self) -> String {
        format!("ISM:{}", self.name())
    }
}

impl fmt::Display for MarkingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkingField {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

impl TryFrom<String> for MarkingField {
    type Error = UnknownName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MarkingField> for String {
    fn from(value: MarkingField) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        assert_eq!(MarkingField::all().len(), MARKING_FIELD_COUNT);
        for field in MarkingField::all() {
            assert_eq!(field.name().parse::<MarkingField>().unwrap(), *field);
        }
    }

    #[test]
    fn qualified_name_uses_ism_prefix() {
        assert_eq!(
            MarkingField::SciControls.qualified_name(),
            "ISM:SCIcontrols"
        );
    }
}
