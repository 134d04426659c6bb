//! Fields outside their version window are rejected, inside it accepted.

mod common;

use ism_core::{DdmsVersion, IsmError, MarkingField, VersionPolicy};
use ism_marking::{Builder, SecurityAttributes};

use common::{sample, session};

fn build_with(version: DdmsVersion, field: MarkingField) -> Result<SecurityAttributes, IsmError> {
    let mut builder = Builder::new(version);
    if field == MarkingField::DeclassManualReview {
        builder.declass_manual_review(Some(true));
    } else {
        builder.set_text(field, sample(field));
    }
    builder.commit(&session())
}

#[test]
fn every_field_gated_in_every_version() {
    for descriptor in VersionPolicy::descriptors() {
        for version in DdmsVersion::all() {
            let result = build_with(*version, descriptor.field);
            if descriptor.window.contains(*version) {
                let attributes = result
                    .unwrap_or_else(|e| panic!("{} in {version}: {e}", descriptor.field));
                assert!(!attributes.is_empty());
            } else {
                match result {
                    Err(IsmError::VersionCompatibility(message)) => {
                        assert_eq!(message, descriptor.window.violation_message(descriptor.field.name()));
                    }
                    other => panic!("{} in {version}: expected rejection, got {other:?}", descriptor.field),
                }
            }
        }
    }
}

#[test]
fn open_window_message() {
    let err = build_with(DdmsVersion::V3_0, MarkingField::AtomicEnergyMarkings).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The atomicEnergyMarkings attribute cannot be used until DDMS 3.1 or later."
    );
    let err = build_with(DdmsVersion::V2_0, MarkingField::CompilationReason).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The compilationReason attribute cannot be used until DDMS 3.0 or later."
    );
}

#[test]
fn closed_window_messages() {
    let err = build_with(DdmsVersion::V3_1, MarkingField::DateOfExemptedSource).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The dateOfExemptedSource attribute can only be used in DDMS 2.0 or 3.0."
    );
    let err = build_with(DdmsVersion::V4_1, MarkingField::TypeOfExemptedSource).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The typeOfExemptedSource attribute can only be used in DDMS 2.0 or 3.0."
    );
    let err = build_with(DdmsVersion::V3_0, MarkingField::DeclassManualReview).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The declassManualReview attribute can only be used in DDMS 2.0."
    );
}

#[test]
fn gating_is_fatal_even_when_vocabulary_mismatches_are_warnings() {
    let mut session = session();
    session.set_validation_as_errors(false);

    let mut builder = Builder::new(DdmsVersion::V2_0);
    builder.non_us_controls(["ATOMAL"]);
    assert!(matches!(
        builder.commit(&session),
        Err(IsmError::VersionCompatibility(_))
    ));
}

#[test]
fn blank_value_outside_window_is_ignored() {
    let mut builder = Builder::new(DdmsVersion::V2_0);
    builder.complies_with([" "]).compilation_reason("");
    let attributes = builder.commit(&session()).unwrap();
    assert!(attributes.is_empty());
}
