//! STIX domain objects, relationship objects, marking definitions and bundles.
//!
//! Objects are built from small reusable property groups (see
//! [`properties`]) composed into a fixed common set per category (see
//! [`common`]). Each object holds its groups as named sub-records; serde
//! flattens them into one JSON object, emitting only the fields that are set.
//!
//! # Object Kinds
//!
//! - Domain objects: [`AttackPattern`], [`Campaign`], [`Indicator`],
//!   [`Infrastructure`], [`Malware`], [`ObservedData`], [`Report`]
//! - Relationship objects: [`Relationship`], [`Sighting`]
//! - [`MarkingDefinition`]
//! - [`Bundle`] -- ordered, append-only envelope of any of the above
//!
//! # Construction
//!
//! Constructors read one [`ObjectContext`] for the clock and random source.
//! `new(version)` uses the system clock and thread RNG; `new_with(version, ctx)`
//! takes an explicit context for reproducible output.
//!
//! # Rules
//!
//! 1. `created == modified` right after construction; `modified` is copied, not re-read.
//! 2. Identifier prefixes always equal the object's `type`.
//! 3. Lifecycle timestamps carry 3 fractional digits, observation/validity ones 6.
//! 4. Empty, zero and `false` optional fields are omitted from JSON.
//! 5. Malformed timestamp input is rejected and the field keeps its old value.
//! 6. No content validation: patterns, vocabularies and window ordering are not checked.
//! 7. `x_*` custom properties survive decoding; other undeclared keys do not.
//!
//! Objects and bundles have no internal locking; share them across threads
//! only behind external synchronization.

pub mod bundle;
pub mod common;
pub mod config;
pub mod context;
pub mod error;
pub mod objects;
pub mod properties;

pub use bundle::{new_bundle, Bundle, BUNDLE_TYPE};
pub use common::{CommonBundleProperties, CommonMarkingDefinitionProperties, CommonObjectProperties};
pub use config::StixConfig;
pub use context::ObjectContext;
pub use error::{ObjectError, ObjectResult};
pub use objects::{
    new_marking_definition, new_statement_marking, AttackPattern, Campaign, Indicator,
    Infrastructure, Malware, MarkingDefinition, MarkingDefinitionPayload, ObjectKind,
    ObservedData, Relationship, Report, Sighting, StixObject,
};
pub use stix_types::{Identifier, Precision, Timestamp, TypeError};
