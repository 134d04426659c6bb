//! # ism-marking — ISM Security Attribute Groups
//!
//! Builds, validates and serializes the group of ISM attributes that
//! decorates a DDMS component.
//!
//! ## Flow
//!
//! ```text
//! raw fields ─┐
//! Carrier ────┼──▶ Draft ──▶ AttributeGroupValidator ──▶ SecurityAttributes
//! Builder ────┘                   │                          │
//!                          ValidationSession              add_to(Carrier)
//! ```
//!
//! Every path validates against a [`ValidationSession`], which owns the
//! vocabulary cache and decides whether vocabulary mismatches are errors
//! or warnings. A group that fails validation is never returned.
//!
//! Notice components carry a second, smaller group,
//! [`NoticeAttributes`], built and validated the same way.

pub mod attributes;
pub mod builder;
pub mod carrier;
pub mod notice;
pub mod session;
pub mod validate;
pub mod value;

pub use attributes::{SecurityAttributes, ISM_PREFIX};
pub use builder::Builder;
pub use carrier::{AttributeValue, Carrier, QName};
pub use notice::{NoticeAttributes, NoticeBuilder, NoticeValidator};
pub use session::ValidationSession;
pub use validate::AttributeGroupValidator;
pub use value::MarkingValue;
