//! # DDMS Schema Versions
//!
//! Defines `DdmsVersion`, the closed set of schema generations whose ISM
//! markings this workspace validates. Versions are totally ordered by
//! release date, so `is_at_least()` is a plain comparison.
//!
//! ## Aliases
//!
//! Two historical version strings are accepted on input and folded into
//! their supported equivalent:
//!
//! - `3.0.1` is a documentation-only release of 3.0 and parses as `3.0`.
//! - `4.0` was superseded by `4.0.1` before any markings were published
//!   against it and parses as `4.0.1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IsmError;

/// A supported DDMS schema version.
///
/// Variants are declared in release order; the derived `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DdmsVersion {
    /// DDMS 2.0 (ISM v2).
    V2_0,
    /// DDMS 3.0.
    V3_0,
    /// DDMS 3.1.
    V3_1,
    /// DDMS 4.0.1.
    V4_0_1,
    /// DDMS 4.1.
    V4_1,
    /// DDMS 5.0.
    V5_0,
}

/// Number of supported versions.
pub const DDMS_VERSION_COUNT: usize = 6;

impl DdmsVersion {
    /// All supported versions in release order.
    pub fn all() -> &'static [DdmsVersion] {
        &[
            Self::V2_0,
            Self::V3_0,
            Self::V3_1,
            Self::V4_0_1,
            Self::V4_1,
            Self::V5_0,
        ]
    }

    /// The most recent supported version.
    pub fn latest() -> Self {
        Self::V5_0
    }

    /// Canonical version string, e.g. `"4.0.1"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2_0 => "2.0",
            Self::V3_0 => "3.0",
            Self::V3_1 => "3.1",
            Self::V4_0_1 => "4.0.1",
            Self::V4_1 => "4.1",
            Self::V5_0 => "5.0",
        }
    }

    /// Returns true if this version was released at or after `other`.
    pub fn is_at_least(&self, other: DdmsVersion) -> bool {
        *self >= other
    }

    /// XML namespace of DDMS components in this version.
    ///
    /// 4.0.1 and 4.1 share a namespace, so the namespace alone does not
    /// identify a version.
    pub fn ddms_namespace(&self) -> &'static str {
        match self {
            Self::V2_0 => "http://metadata.dod.mil/mdr/ns/DDMS/2.0/",
            Self::V3_0 => "http://metadata.dod.mil/mdr/ns/DDMS/3.0/",
            Self::V3_1 => "http://metadata.dod.mil/mdr/ns/DDMS/3.1/",
            Self::V4_0_1 | Self::V4_1 => "urn:us:mil:ces:metadata:ddms:4",
            Self::V5_0 => "urn:us:mil:ces:metadata:ddms:5",
        }
    }

    /// XML namespace of the ISM marking attributes in this version.
    pub fn ism_namespace(&self) -> &'static str {
        match self {
            Self::V2_0 => "urn:us:gov:ic:ism:v2",
            _ => "urn:us:gov:ic:ism",
        }
    }
}

impl fmt::Display for DdmsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DdmsVersion {
    type Err = IsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.0" => Ok(Self::V2_0),
            "3.0" | "3.0.1" => Ok(Self::V3_0),
            "3.1" => Ok(Self::V3_1),
            "4.0.1" | "4.0" => Ok(Self::V4_0_1),
            "4.1" => Ok(Self::V4_1),
            "5.0" => Ok(Self::V5_0),
            other => Err(IsmError::UnsupportedVersion(other.to_string())),
        }
    }
}

impl TryFrom<String> for DdmsVersion {
    type Error = IsmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DdmsVersion> for String {
    fn from(value: DdmsVersion) -> Self {
        value.as_str().to_string()
    }
}
