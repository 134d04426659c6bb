//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use ism_core::{IsmConfig, MarkingField};
use ism_marking::ValidationSession;

pub fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

pub fn config() -> IsmConfig {
    IsmConfig {
        cve_root: repo_root().join("cve"),
        ..IsmConfig::default()
    }
}

/// Session over the shipped vocabularies, mismatches as errors.
pub fn session() -> ValidationSession {
    ValidationSession::from_config(&config())
}

/// Session over the shipped vocabularies, mismatches as warnings.
pub fn lenient_session() -> ValidationSession {
    let mut session = session();
    session.set_validation_as_errors(false);
    session
}

/// A lexical value for `field` accepted by every version that permits it.
pub fn sample(field: MarkingField) -> &'static str {
    match field {
        MarkingField::AtomicEnergyMarkings => "RD",
        MarkingField::Classification => "U",
        MarkingField::ClassificationReason => "4.3 reason",
        MarkingField::ClassifiedBy => "MN",
        MarkingField::CompilationReason => "Compiled from several sources",
        MarkingField::CompliesWith => "DoD5230.24",
        MarkingField::DateOfExemptedSource => "2001-10-31",
        MarkingField::DeclassDate => "2005-10-10",
        MarkingField::DeclassEvent => "Event",
        MarkingField::DeclassException => "25X1",
        MarkingField::DeclassManualReview => "true",
        MarkingField::DerivativelyClassifiedBy => "DCB",
        MarkingField::DerivedFrom => "Derived",
        MarkingField::DisplayOnlyTo => "AIA",
        MarkingField::DisseminationControls => "FOUO",
        MarkingField::FgiSourceOpen => "ABW",
        MarkingField::FgiSourceProtected => "FGI",
        MarkingField::NonIcMarkings => "DS",
        MarkingField::NonUsControls => "ATOMAL",
        MarkingField::OwnerProducer => "USA",
        MarkingField::ReleasableTo => "AIA",
        MarkingField::SarIdentifier => "SAR-BP",
        MarkingField::SciControls => "HCS",
        MarkingField::TypeOfExemptedSource => "OADR",
    }
}
