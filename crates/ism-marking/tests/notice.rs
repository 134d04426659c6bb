//! Notice attribute groups: gating, limits, vocabulary and round trips.

mod common;

use ism_core::{DdmsVersion, IsmError, NoticeField, Severity, NOTICE_MAX_LENGTH};
use ism_marking::{Carrier, NoticeAttributes, NoticeBuilder, SecurityAttributes};

use common::{lenient_session, session};

fn notice(version: DdmsVersion, values: &[(&str, &str)]) -> Result<NoticeAttributes, IsmError> {
    NoticeAttributes::from_raw(&session(), version, values.iter().copied())
}

// ---------------------------------------------------------------------------
// Version gating
// ---------------------------------------------------------------------------

#[test]
fn notice_attributes_need_4_0_1() {
    for version in [DdmsVersion::V2_0, DdmsVersion::V3_0, DdmsVersion::V3_1] {
        let err = notice(version, &[("noticeReason", "Pre-release review")]).unwrap_err();
        assert_eq!(
            err,
            IsmError::VersionCompatibility(
                "Notice attributes cannot be used until DDMS 4.0 or later.".into()
            ),
            "{version}"
        );
        assert!(notice(version, &[("noticeReason", "  ")]).unwrap().is_empty());
    }
    assert!(notice(DdmsVersion::V4_0_1, &[("noticeReason", "Pre-release review")]).is_ok());
}

#[test]
fn external_notice_needs_4_1() {
    let err = notice(DdmsVersion::V4_0_1, &[("externalNotice", "true")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The externalNotice attribute cannot be used until DDMS 4.1 or later."
    );
    let attributes = notice(DdmsVersion::V4_1, &[("externalNotice", "0")]).unwrap();
    assert_eq!(attributes.external_notice(), Some(false));
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

#[test]
fn free_text_length_limit() {
    let limit = "r".repeat(NOTICE_MAX_LENGTH);
    let attributes = notice(DdmsVersion::V5_0, &[("noticeReason", limit.as_str())]).unwrap();
    assert_eq!(attributes.notice_reason().map(str::len), Some(NOTICE_MAX_LENGTH));

    let over = format!("{limit}r");
    let err = notice(DdmsVersion::V5_0, &[("noticeReason", over.as_str())]).unwrap_err();
    assert_eq!(
        err,
        IsmError::Structural("The noticeReason attribute must be shorter than 2048 characters.".into())
    );
    let err = notice(DdmsVersion::V5_0, &[("unregisteredNoticeType", over.as_str())]).unwrap_err();
    assert!(matches!(err, IsmError::Structural(_)));
}

#[test]
fn notice_date_must_be_a_date() {
    let err = notice(DdmsVersion::V4_1, &[("noticeDate", "2011-09")]).unwrap_err();
    assert_eq!(
        err,
        IsmError::Format("The noticeDate attribute must be in the xs:date format (YYYY-MM-DD).".into())
    );
    let err = notice(DdmsVersion::V4_1, &[("noticeDate", "not-a-date")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The ISM:noticeDate attribute is not in a valid date format."
    );

    let attributes = notice(DdmsVersion::V4_1, &[("noticeDate", "2011-09-15")]).unwrap();
    assert_eq!(attributes.notice_date().map(|d| d.to_xml_format()), Some("2011-09-15".into()));
}

#[test]
fn notice_type_follows_the_versions_vocabulary() {
    assert!(notice(DdmsVersion::V4_1, &[("noticeType", "US-Person")]).is_ok());

    let err = notice(DdmsVersion::V4_0_1, &[("noticeType", "US-Person")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "US-Person is not a valid enumeration token for this attribute, as specified in noticeType."
    );

    let attributes = NoticeAttributes::from_raw(
        &lenient_session(),
        DdmsVersion::V4_0_1,
        [("noticeType", "US-Person")],
    )
    .unwrap();
    let warnings: Vec<_> = attributes.warnings().messages().iter().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].severity, Severity::Warning);
    assert_eq!(warnings[0].locator.as_deref(), Some("ISM:noticeType"));
    assert_eq!(attributes.notice_type(), Some("US-Person"));
}

#[test]
fn unregistered_type_is_free_text() {
    let attributes = notice(
        DdmsVersion::V5_0,
        &[("unregisteredNoticeType", "Local handling notice"), ("classification", "U")],
    )
    .unwrap();
    assert_eq!(attributes.unregistered_notice_type(), Some("Local handling notice"));
    assert_eq!(attributes.to_lexical_map().len(), 1);
}

// ---------------------------------------------------------------------------
// Builder and carriers
// ---------------------------------------------------------------------------

#[test]
fn builder_commit_and_carrier_round_trip() {
    let session = session();
    for version in [DdmsVersion::V4_1, DdmsVersion::V5_0] {
        let mut builder = NoticeBuilder::new(version);
        builder
            .notice_type("DoD-Dist-A")
            .notice_reason("Approved for public release")
            .notice_date("2011-09-15")
            .unregistered_notice_type("Local")
            .external_notice(Some(true));
        let original = builder.commit(&session).unwrap();
        assert!(original.warnings().is_empty());

        let mut carrier = Carrier::new("notice", version);
        original.add_to(&mut carrier).unwrap();
        assert_eq!(carrier.attribute_count(), 5);
        assert_eq!(
            carrier.attribute(version.ism_namespace(), "externalNotice"),
            Some("true")
        );

        let reread = NoticeAttributes::from_carrier(&session, &carrier).unwrap();
        assert_eq!(reread, original, "{version}");
        assert_eq!(NoticeBuilder::from(&reread), builder);
    }
}

#[test]
fn notice_and_marking_groups_share_a_carrier() {
    let session = session();
    let mut carrier = Carrier::new("notice", DdmsVersion::V4_1);

    let marking = SecurityAttributes::from_raw(
        &session,
        DdmsVersion::V4_1,
        Some("U"),
        &["USA".to_string()],
        Vec::<(String, String)>::new(),
    )
    .unwrap();
    marking.add_to(&mut carrier).unwrap();
    notice(DdmsVersion::V4_1, &[("noticeType", "DoD-Dist-B")])
        .unwrap()
        .add_to(&mut carrier)
        .unwrap();

    assert_eq!(SecurityAttributes::from_carrier(&session, &carrier).unwrap(), marking);
    let reread = NoticeAttributes::from_carrier(&session, &carrier).unwrap();
    assert_eq!(reread.notice_type(), Some("DoD-Dist-B"));
    assert_eq!(reread.value(NoticeField::NoticeReason), None);
}

#[test]
fn cannot_decorate_a_different_version() {
    let attributes = notice(DdmsVersion::V4_1, &[("noticeType", "DoD-Dist-A")]).unwrap();
    let mut carrier = Carrier::new("notice", DdmsVersion::V5_0);
    let err = attributes.add_to(&mut carrier).unwrap_err();
    assert!(matches!(err, IsmError::VersionCompatibility(_)));
    assert_eq!(carrier.attribute_count(), 0);
}

#[test]
fn invalid_external_notice_text_fails_on_commit() {
    let mut builder = NoticeBuilder::new(DdmsVersion::V5_0);
    builder.set_text(NoticeField::ExternalNotice, "yes");
    let err = builder.commit(&session()).unwrap_err();
    assert_eq!(
        err,
        IsmError::Format("The ISM:externalNotice attribute is not a valid xs:boolean value.".into())
    );
    let empty = NoticeBuilder::new(DdmsVersion::V2_0).commit(&session()).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty, NoticeAttributes::empty(DdmsVersion::V2_0));
    assert_ne!(empty, NoticeAttributes::empty(DdmsVersion::V4_1));
}
