//! # Version Policy
//!
//! All knowledge of which DDMS version permits what lives in two static
//! tables:
//!
//! - [`FIELD_DESCRIPTORS`]: for every marking field, its value kind, the
//!   vocabulary constraining it (if any), and the version window in which
//!   it may be set.
//! - [`VOCABULARY_RESOURCES`]: for every vocabulary key, the resource file
//!   holding its definition and the versions that ship it.
//!
//! Parsing, serialization and validation all consult these tables instead
//! of branching on version strings.
//!
//! ## Resource Locations
//!
//! [`ResourceLocations`] resolves the directory a version's resources are
//! read from. A custom location overrides everything; a per-version
//! location overrides the default `<root>/<version>` directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::IsmError;
use crate::field::MarkingField;
use crate::key::VocabularyKey;
use crate::version::DdmsVersion;

// ---------------------------------------------------------------------------
// Version windows
// ---------------------------------------------------------------------------

/// Inclusive range of versions. `max: None` means open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionWindow {
    pub min: DdmsVersion,
    pub max: Option<DdmsVersion>,
}

impl VersionWindow {
    /// Every supported version.
    pub const ALL: VersionWindow = VersionWindow::starting(DdmsVersion::V2_0);

    pub const fn starting(min: DdmsVersion) -> Self {
        Self { min, max: None }
    }

    pub const fn between(min: DdmsVersion, max: DdmsVersion) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn contains(&self, version: DdmsVersion) -> bool {
        version >= self.min && self.max.map_or(true, |max| version <= max)
    }

    /// The versions inside the window, in release order.
    pub fn versions(&self) -> Vec<DdmsVersion> {
        DdmsVersion::all()
            .iter()
            .copied()
            .filter(|v| self.contains(*v))
            .collect()
    }

    /// Message reported when the attribute `name` is set outside this
    /// window.
    pub fn violation_message(&self, name: &str) -> String {
        match self.max {
            None => format!(
                "The {name} attribute cannot be used until DDMS {} or later.",
                self.min
            ),
            Some(_) => {
                let allowed: Vec<&str> = self.versions().iter().map(|v| v.as_str()).collect();
                format!(
                    "The {name} attribute can only be used in DDMS {}.",
                    allowed.join(" or ")
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Field descriptors
// ---------------------------------------------------------------------------

/// How a field's value is represented and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single free-text or single-token value.
    Scalar,
    /// Space-delimited token list.
    List,
    /// Stored as one string. A token list in DDMS 2.0, a single token later.
    LegacyList,
    /// XML Schema date; only the `xs:date` subtype is accepted.
    Date,
    /// xs:boolean.
    Boolean,
}

/// Static description of one marking field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: MarkingField,
    pub kind: FieldKind,
    pub vocabulary: Option<VocabularyKey>,
    pub window: VersionWindow,
}

impl FieldDescriptor {
    const fn new(
        field: MarkingField,
        kind: FieldKind,
        vocabulary: Option<VocabularyKey>,
        window: VersionWindow,
    ) -> Self {
        Self {
            field,
            kind,
            vocabulary,
            window,
        }
    }

    /// Whether the value is validated token by token under `version`.
    pub fn is_multi_valued(&self, version: DdmsVersion) -> bool {
        match self.kind {
            FieldKind::List => true,
            FieldKind::LegacyList => version == DdmsVersion::V2_0,
            _ => false,
        }
    }
}

use DdmsVersion::{V2_0, V3_0, V3_1, V4_0_1};
use FieldKind::{Boolean, Date, LegacyList, List, Scalar};
use MarkingField as F;
use VocabularyKey as K;

/// Descriptor for every marking field, in validation order.
#[rustfmt::skip]
pub static FIELD_DESCRIPTORS: [FieldDescriptor; 24] = [
    FieldDescriptor::new(F::AtomicEnergyMarkings, List, Some(K::AtomicEnergyMarkings), VersionWindow::starting(V3_1)),
    FieldDescriptor::new(F::Classification, Scalar, Some(K::Classification), VersionWindow::ALL),
    FieldDescriptor::new(F::ClassificationReason, Scalar, None, VersionWindow::ALL),
    FieldDescriptor::new(F::ClassifiedBy, Scalar, None, VersionWindow::ALL),
    FieldDescriptor::new(F::CompilationReason, Scalar, None, VersionWindow::starting(V3_0)),
    FieldDescriptor::new(F::CompliesWith, List, Some(K::CompliesWith), VersionWindow::starting(V3_1)),
    FieldDescriptor::new(F::DateOfExemptedSource, Date, None, VersionWindow::between(V2_0, V3_0)),
    FieldDescriptor::new(F::DeclassDate, Date, None, VersionWindow::ALL),
    FieldDescriptor::new(F::DeclassEvent, Scalar, None, VersionWindow::ALL),
    FieldDescriptor::new(F::DeclassException, LegacyList, Some(K::DeclassException), VersionWindow::ALL),
    FieldDescriptor::new(F::DeclassManualReview, Boolean, None, VersionWindow::between(V2_0, V2_0)),
    FieldDescriptor::new(F::DerivativelyClassifiedBy, Scalar, None, VersionWindow::ALL),
    FieldDescriptor::new(F::DerivedFrom, Scalar, None, VersionWindow::ALL),
    FieldDescriptor::new(F::DisplayOnlyTo, List, Some(K::DisplayOnlyTo), VersionWindow::starting(V3_1)),
    FieldDescriptor::new(F::DisseminationControls, List, Some(K::DisseminationControls), VersionWindow::ALL),
    FieldDescriptor::new(F::FgiSourceOpen, List, Some(K::FgiSourceOpen), VersionWindow::ALL),
    FieldDescriptor::new(F::FgiSourceProtected, List, Some(K::FgiSourceProtected), VersionWindow::ALL),
    FieldDescriptor::new(F::NonIcMarkings, List, Some(K::NonIcMarkings), VersionWindow::ALL),
    FieldDescriptor::new(F::NonUsControls, List, Some(K::NonUsControls), VersionWindow::starting(V3_1)),
    FieldDescriptor::new(F::OwnerProducer, List, Some(K::OwnerProducer), VersionWindow::ALL),
    FieldDescriptor::new(F::ReleasableTo, List, Some(K::ReleasableTo), VersionWindow::ALL),
    FieldDescriptor::new(F::SarIdentifier, List, Some(K::SarIdentifier), VersionWindow::ALL),
    FieldDescriptor::new(F::SciControls, List, Some(K::SciControls), VersionWindow::ALL),
    FieldDescriptor::new(F::TypeOfExemptedSource, LegacyList, Some(K::TypeOfExemptedSource), VersionWindow::between(V2_0, V3_0)),
];

// ---------------------------------------------------------------------------
// Vocabulary resources
// ---------------------------------------------------------------------------

/// Where one vocabulary's definition lives, and which versions ship it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyResource {
    pub key: VocabularyKey,
    pub file_name: &'static str,
    pub window: VersionWindow,
}

const fn resource(key: VocabularyKey, file_name: &'static str, window: VersionWindow) -> VocabularyResource {
    VocabularyResource {
        key,
        file_name,
        window,
    }
}

/// Resource for every vocabulary key.
#[rustfmt::skip]
pub static VOCABULARY_RESOURCES: [VocabularyResource; 18] = [
    resource(K::DeclassException, "CVEnumISM25X.yaml", VersionWindow::ALL),
    resource(K::AtomicEnergyMarkings, "CVEnumISMAtomicEnergyMarkings.yaml", VersionWindow::starting(V3_1)),
    resource(K::Classification, "CVEnumISMClassificationAll.yaml", VersionWindow::ALL),
    resource(K::ClassificationUs, "CVEnumISMClassificationUS.yaml", VersionWindow::ALL),
    resource(K::CompliesWith, "CVEnumISMCompliesWith.yaml", VersionWindow::starting(V3_1)),
    resource(K::DisplayOnlyTo, "CVEnumISMRelTo.yaml", VersionWindow::starting(V3_1)),
    resource(K::DisseminationControls, "CVEnumISMDissem.yaml", VersionWindow::ALL),
    resource(K::FgiSourceOpen, "CVEnumISMFGIOpen.yaml", VersionWindow::ALL),
    resource(K::FgiSourceProtected, "CVEnumISMFGIProtected.yaml", VersionWindow::ALL),
    resource(K::NonIcMarkings, "CVEnumISMNonIC.yaml", VersionWindow::ALL),
    resource(K::NonUsControls, "CVEnumISMNonUSControls.yaml", VersionWindow::starting(V3_1)),
    resource(K::NoticeType, "CVEnumISMNotice.yaml", VersionWindow::starting(V4_0_1)),
    resource(K::OwnerProducer, "CVEnumISMOwnerProducer.yaml", VersionWindow::ALL),
    resource(K::PocType, "CVEnumISMPocType.yaml", VersionWindow::starting(V4_0_1)),
    resource(K::ReleasableTo, "CVEnumISMRelTo.yaml", VersionWindow::ALL),
    resource(K::SarIdentifier, "CVEnumISMSAR.yaml", VersionWindow::ALL),
    resource(K::SciControls, "CVEnumISMSCIControls.yaml", VersionWindow::ALL),
    resource(K::TypeOfExemptedSource, "CVEnumISMSourceMarked.yaml", VersionWindow::between(V2_0, V3_0)),
];

// ---------------------------------------------------------------------------
// Policy lookups
// ---------------------------------------------------------------------------

/// Read-only access to the version tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionPolicy;

impl VersionPolicy {
    pub fn descriptors() -> &'static [FieldDescriptor] {
        &FIELD_DESCRIPTORS
    }

    pub fn descriptor(field: MarkingField) -> &'static FieldDescriptor {
        // Both tables are declared in `MarkingField::all()` order.
        &FIELD_DESCRIPTORS[field as usize]
    }

    pub fn resource(key: VocabularyKey) -> &'static VocabularyResource {
        &VOCABULARY_RESOURCES[key as usize]
    }

    /// Resources that exist under `version`.
    pub fn resources_for(version: DdmsVersion) -> impl Iterator<Item = &'static VocabularyResource> {
        VOCABULARY_RESOURCES
            .iter()
            .filter(move |r| r.window.contains(version))
    }

    /// Fails with `VersionCompatibility` if `field` may not be set under
    /// `version`.
    pub fn check_field(version: DdmsVersion, field: MarkingField) -> Result<(), IsmError> {
        let window = Self::descriptor(field).window;
        if window.contains(version) {
            Ok(())
        } else {
            Err(IsmError::VersionCompatibility(
                window.violation_message(field.name()),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Resource locations
// ---------------------------------------------------------------------------

/// Directory settings for vocabulary resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocations {
    pub root: PathBuf,
    pub custom: Option<PathBuf>,
    pub per_version: BTreeMap<DdmsVersion, PathBuf>,
}

impl ResourceLocations {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            custom: None,
            per_version: BTreeMap::new(),
        }
    }

    /// Directory from which `version`'s resources are read.
    pub fn resolve(&self, version: DdmsVersion) -> PathBuf {
        if let Some(custom) = &self.custom {
            return custom.clone();
        }
        match self.per_version.get(&version) {
            Some(path) => path.clone(),
            None => self.root.join(version.as_str()),
        }
    }
}

impl Default for ResourceLocations {
    fn default() -> Self {
        Self::new("cve")
    }
}
