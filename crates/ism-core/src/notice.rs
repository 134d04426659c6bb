//! # Notice Fields
//!
//! The ISM attributes that decorate notice components. They form a group
//! of their own, separate from the security marking, and none of them may
//! appear before DDMS 4.0.1.
//!
//! [`NOTICE_DESCRIPTORS`] plays the role `FIELD_DESCRIPTORS` plays for
//! markings: value kind, vocabulary, length limit and version window for
//! each field.

use std::fmt;
use std::str::FromStr;

use crate::error::IsmError;
use crate::key::{UnknownName, VocabularyKey};
use crate::policy::{FieldKind, VersionWindow};
use crate::version::DdmsVersion;

/// One ISM notice attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoticeField {
    ExternalNotice,
    NoticeDate,
    NoticeReason,
    NoticeType,
    UnregisteredNoticeType,
}

pub const NOTICE_FIELD_COUNT: usize = 5;

/// Longest accepted `noticeReason` or `unregisteredNoticeType`, in characters.
pub const NOTICE_MAX_LENGTH: usize = 2048;

/// Versions in which a notice group may hold any value.
pub const NOTICE_WINDOW: VersionWindow = VersionWindow::starting(DdmsVersion::V4_0_1);

impl NoticeField {
    pub fn all() -> &'static [NoticeField] {
        &[
            Self::ExternalNotice,
            Self::NoticeDate,
            Self::NoticeReason,
            Self::NoticeType,
            Self::UnregisteredNoticeType,
        ]
    }

    /// Unprefixed attribute name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExternalNotice => "externalNotice",
            Self::NoticeDate => "noticeDate",
            Self::NoticeReason => "noticeReason",
            Self::NoticeType => "noticeType",
            Self::UnregisteredNoticeType => "unregisteredNoticeType",
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("ISM:{}", self.name())
    }
}

impl fmt::Display for NoticeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoticeField {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// Static description of one notice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeDescriptor {
    pub field: NoticeField,
    pub kind: FieldKind,
    pub vocabulary: Option<VocabularyKey>,
    pub max_length: Option<usize>,
    pub window: VersionWindow,
}

impl NoticeDescriptor {
    const fn new(
        field: NoticeField,
        kind: FieldKind,
        vocabulary: Option<VocabularyKey>,
        max_length: Option<usize>,
        window: VersionWindow,
    ) -> Self {
        Self {
            field,
            kind,
            vocabulary,
            max_length,
            window,
        }
    }
}

use FieldKind::{Boolean, Date, Scalar};
use NoticeField as N;

/// Descriptor for every notice field, in `NoticeField::all()` order.
#[rustfmt::skip]
pub static NOTICE_DESCRIPTORS: [NoticeDescriptor; NOTICE_FIELD_COUNT] = [
    NoticeDescriptor::new(N::ExternalNotice, Boolean, None, None, VersionWindow::starting(DdmsVersion::V4_1)),
    NoticeDescriptor::new(N::NoticeDate, Date, None, None, NOTICE_WINDOW),
    NoticeDescriptor::new(N::NoticeReason, Scalar, None, Some(NOTICE_MAX_LENGTH), NOTICE_WINDOW),
    NoticeDescriptor::new(N::NoticeType, Scalar, Some(VocabularyKey::NoticeType), None, NOTICE_WINDOW),
    NoticeDescriptor::new(N::UnregisteredNoticeType, Scalar, None, Some(NOTICE_MAX_LENGTH), NOTICE_WINDOW),
];

/// Lookups over [`NOTICE_DESCRIPTORS`].
pub struct NoticePolicy;

impl NoticePolicy {
    pub fn descriptors() -> &'static [NoticeDescriptor] {
        &NOTICE_DESCRIPTORS
    }

    pub fn descriptor(field: NoticeField) -> &'static NoticeDescriptor {
        &NOTICE_DESCRIPTORS[field as usize]
    }

    /// Fails unless `version` permits notice attributes at all.
    pub fn check_group(version: DdmsVersion) -> Result<(), IsmError> {
        if NOTICE_WINDOW.contains(version) {
            Ok(())
        } else {
            Err(IsmError::VersionCompatibility(
                "Notice attributes cannot be used until DDMS 4.0 or later.".to_string(),
            ))
        }
    }

    /// Fails if `field` may not be set under `version`.
    pub fn check_field(version: DdmsVersion, field: NoticeField) -> Result<(), IsmError> {
        let window = Self::descriptor(field).window;
        if window.contains(version) {
            Ok(())
        } else {
            Err(IsmError::VersionCompatibility(
                window.violation_message(field.name()),
            ))
        }
    }

    /// Fails if `value` is longer than the field allows.
    pub fn check_length(field: NoticeField, value: &str) -> Result<(), IsmError> {
        match Self::descriptor(field).max_length {
            Some(max) if value.chars().count() > max => Err(IsmError::Structural(format!(
                "The {} attribute must be shorter than {max} characters.",
                field.name()
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_follow_field_order() {
        assert_eq!(NoticeField::all().len(), NOTICE_FIELD_COUNT);
        for field in NoticeField::all() {
            assert_eq!(NoticePolicy::descriptor(*field).field, *field);
            assert_eq!(field.name().parse::<NoticeField>().unwrap(), *field);
        }
        assert!("classification".parse::<NoticeField>().is_err());
    }

    #[test]
    fn group_gate_opens_at_4_0_1() {
        assert!(NoticePolicy::check_group(DdmsVersion::V4_0_1).is_ok());
        assert!(NoticePolicy::check_group(DdmsVersion::V5_0).is_ok());
        assert_eq!(
            NoticePolicy::check_group(DdmsVersion::V3_1).unwrap_err().to_string(),
            "Notice attributes cannot be used until DDMS 4.0 or later."
        );
    }

    #[test]
    fn external_notice_opens_at_4_1() {
        assert!(NoticePolicy::check_field(DdmsVersion::V4_1, NoticeField::ExternalNotice).is_ok());
        assert_eq!(
            NoticePolicy::check_field(DdmsVersion::V4_0_1, NoticeField::ExternalNotice)
                .unwrap_err()
                .to_string(),
            "The externalNotice attribute cannot be used until DDMS 4.1 or later."
        );
    }

    #[test]
    fn length_limit_is_inclusive() {
        let limit = "x".repeat(NOTICE_MAX_LENGTH);
        assert!(NoticePolicy::check_length(NoticeField::NoticeReason, &limit).is_ok());
        let over = format!("{limit}x");
        assert_eq!(
            NoticePolicy::check_length(NoticeField::UnregisteredNoticeType, &over)
                .unwrap_err()
                .to_string(),
            "The unregisteredNoticeType attribute must be shorter than 2048 characters."
        );
        assert!(NoticePolicy::check_length(NoticeField::NoticeType, &over).is_ok());
    }
}
