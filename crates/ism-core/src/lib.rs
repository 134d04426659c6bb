//! # ism-core — Foundational Types for ISM Marking Validation
//!
//! Everything the other crates agree on: which DDMS versions exist, which
//! controlled vocabularies exist, which attributes a security marking has,
//! and which of them each version permits.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums for versions, keys and fields.** `DdmsVersion`,
//!    `VocabularyKey` and `MarkingField` are exhaustive. No bare strings
//!    past the parsing boundary.
//!
//! 2. **Version knowledge in one place.** The `policy` and `notice` tables
//!    are the only code that knows which field or vocabulary a version
//!    permits.
//!
//! 3. **Messages are part of the contract.** Every `IsmError` carries the
//!    exact text reported to users.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ism-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod date;
pub mod error;
pub mod field;
pub mod key;
pub mod message;
pub mod notice;
pub mod policy;
pub mod version;
pub mod xs;

pub use config::{ConfigError, IsmConfig};
pub use date::{InvalidDate, XsDate, XsDateKind};
pub use error::IsmError;
pub use field::{MarkingField, MARKING_FIELD_COUNT};
pub use key::{UnknownName, VocabularyKey, VOCABULARY_KEY_COUNT};
pub use message::{Severity, ValidationMessage, ValidationOutcome};
pub use notice::{
    NoticeDescriptor, NoticeField, NoticePolicy, NOTICE_FIELD_COUNT, NOTICE_MAX_LENGTH,
    NOTICE_WINDOW,
};
pub use policy::{
    FieldDescriptor, FieldKind, ResourceLocations, VersionPolicy, VersionWindow,
    VocabularyResource,
};
pub use version::{DdmsVersion, DDMS_VERSION_COUNT};
