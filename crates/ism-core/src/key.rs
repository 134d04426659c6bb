//! # Vocabulary Keys
//!
//! `VocabularyKey` names one controlled vocabulary (CVE). Keys are stable
//! across DDMS versions even where the underlying resource changes, and
//! their string form is the ISM attribute name the vocabulary constrains
//! (plus `classificationUS`, which has no attribute of its own).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a controlled vocabulary.
///
/// | Key | Constrains |
/// |-----|------------|
/// | `declassException` | ISM:declassException |
/// | `atomicEnergyMarkings` | ISM:atomicEnergyMarkings |
/// | `classification` | ISM:classification (US and NATO markings) |
/// | `classificationUS` | US-only classification subset |
/// | `compliesWith` | ISM:compliesWith |
/// | `displayOnlyTo` | ISM:displayOnlyTo |
/// | `disseminationControls` | ISM:disseminationControls |
/// | `FGIsourceOpen` | ISM:FGIsourceOpen |
/// | `FGIsourceProtected` | ISM:FGIsourceProtected |
/// | `nonICmarkings` | ISM:nonICmarkings |
/// | `nonUSControls` | ISM:nonUSControls |
/// | `noticeType` | ISM:noticeType on notice elements |
/// | `ownerProducer` | ISM:ownerProducer |
/// | `pocType` | ISM:pocType on point-of-contact elements |
/// | `releasableTo` | ISM:releasableTo |
/// | `SARIdentifier` | ISM:SARIdentifier |
/// | `SCIcontrols` | ISM:SCIcontrols |
/// | `typeOfExemptedSource` | ISM:typeOfExemptedSource |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VocabularyKey {
    DeclassException,
    AtomicEnergyMarkings,
    Classification,
    ClassificationUs,
    CompliesWith,
    DisplayOnlyTo,
    DisseminationControls,
    FgiSourceOpen,
    FgiSourceProtected,
    NonIcMarkings,
    NonUsControls,
    NoticeType,
    OwnerProducer,
    PocType,
    ReleasableTo,
    SarIdentifier,
    SciControls,
    TypeOfExemptedSource,
}

/// Total number of vocabulary keys.
pub const VOCABULARY_KEY_COUNT: usize = 18;

impl VocabularyKey {
    pub fn all() -> &'static [VocabularyKey] {
        &[
            Self::DeclassException,
            Self::AtomicEnergyMarkings,
            Self::Classification,
            Self::ClassificationUs,
            Self::CompliesWith,
            Self::DisplayOnlyTo,
            Self::DisseminationControls,
            Self::FgiSourceOpen,
            Self::FgiSourceProtected,
            Self::NonIcMarkings,
            Self::NonUsControls,
            Self::NoticeType,
            Self::OwnerProducer,
            Self::PocType,
            Self::ReleasableTo,
            Self::SarIdentifier,
            Self::SciControls,
            Self::TypeOfExemptedSource,
        ]
    }

    /// The key identifier, e.g. `"FGIsourceOpen"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeclassException => "declassException",
            Self::AtomicEnergyMarkings => "atomicEnergyMarkings",
            Self::Classification => "classification",
            Self::ClassificationUs => "classificationUS",
            Self::CompliesWith => "compliesWith",
            Self::DisplayOnlyTo => "displayOnlyTo",
            Self::DisseminationControls => "disseminationControls",
            Self::FgiSourceOpen => "FGIsourceOpen",
            Self::FgiSourceProtected => "FGIsourceProtected",
            Self::NonIcMarkings => "nonICmarkings",
            Self::NonUsControls => "nonUSControls",
            Self::NoticeType => "noticeType",
            Self::OwnerProducer => "ownerProducer",
            Self::PocType => "pocType",
            Self::ReleasableTo => "releasableTo",
            Self::SarIdentifier => "SARIdentifier",
            Self::SciControls => "SCIcontrols",
            Self::TypeOfExemptedSource => "typeOfExemptedSource",
        }
    }
}

impl fmt::Display for VocabularyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known key or field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized name: {0:?}")]
pub struct UnknownName(pub String);

impl FromStr for VocabularyKey {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

impl TryFrom<String> for VocabularyKey {
    type Error = UnknownName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VocabularyKey> for String {
    fn from(value: VocabularyKey) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identifiers_round_trip() {
        for key in VocabularyKey::all() {
            assert_eq!(key.as_str().parse::<VocabularyKey>().unwrap(), *key);
        }
    }

    #[test]
    fn identifiers_are_unique() {
        let names: HashSet<&str> = VocabularyKey::all().iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), VOCABULARY_KEY_COUNT);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!("fgisourceopen".parse::<VocabularyKey>().is_err());
        assert_eq!(
            "FGIsourceOpen".parse::<VocabularyKey>().unwrap(),
            VocabularyKey::FgiSourceOpen
        );
    }
}
