//! Property tests for date parsing and the version tables.

use proptest::prelude::*;

use ism_core::{DdmsVersion, MarkingField, VersionPolicy, VersionWindow, XsDate, XsDateKind};

fn version() -> impl Strategy<Value = DdmsVersion> {
    proptest::sample::select(DdmsVersion::all())
}

proptest! {
    #[test]
    fn calendar_dates_round_trip(year in 1000i32..=9999, month in 1u32..=12, day in 1u32..=28) {
        let lexical = format!("{year:04}-{month:02}-{day:02}");
        let date = XsDate::parse(&lexical).unwrap();
        prop_assert!(date.is_date());
        prop_assert_eq!(date.kind(), XsDateKind::Date);
        prop_assert_eq!(date.to_xml_format(), lexical);
    }

    #[test]
    fn month_out_of_range_is_rejected(year in 1000i32..=9999, month in 13u32..=99) {
        let year_month = format!("{year:04}-{month:02}");
        let full_date = format!("{year:04}-{month:02}-01");
        prop_assert!(XsDate::parse(&year_month).is_err());
        prop_assert!(XsDate::parse(&full_date).is_err());
    }

    #[test]
    fn offsets_are_preserved(hours in 0u32..=14, minutes in 0u32..=59, negative in any::<bool>()) {
        let sign = if negative { '-' } else { '+' };
        let lexical = format!("2010-06-15{sign}{hours:02}:{minutes:02}");
        let date = XsDate::parse(&lexical).unwrap();
        prop_assert!(date.is_date());
        prop_assert!(date.zone().is_some());
        let expected = if hours == 0 && minutes == 0 {
            "2010-06-15+00:00".to_string()
        } else {
            lexical
        };
        prop_assert_eq!(date.to_xml_format(), expected);
    }

    #[test]
    fn version_names_round_trip(v in version()) {
        prop_assert_eq!(v.as_str().parse::<DdmsVersion>().unwrap(), v);
        prop_assert_eq!(v.to_string(), v.as_str());
    }

    #[test]
    fn windows_agree_with_their_version_lists(v in version(), min in version(), max in version()) {
        prop_assume!(min <= max);
        let open = VersionWindow::starting(min);
        let closed = VersionWindow::between(min, max);
        prop_assert_eq!(open.contains(v), open.versions().contains(&v));
        prop_assert_eq!(closed.contains(v), closed.versions().contains(&v));
        prop_assert_eq!(closed.contains(v), min <= v && v <= max);
    }

    #[test]
    fn field_check_matches_descriptor_window(v in version(), index in 0usize..24) {
        let field = MarkingField::all()[index];
        let allowed = VersionPolicy::descriptor(field).window.contains(v);
        prop_assert_eq!(VersionPolicy::check_field(v, field).is_ok(), allowed);
    }
}

#[test]
fn every_vocabulary_field_has_its_resource_in_its_window() {
    for descriptor in VersionPolicy::descriptors() {
        let Some(key) = descriptor.vocabulary else {
            continue;
        };
        let resource = VersionPolicy::resource(key);
        for version in descriptor.window.versions() {
            assert!(
                resource.window.contains(version),
                "{} allowed in {version} but {key} is not shipped",
                descriptor.field
            );
        }
    }
}
