//! Foundation types for STIX Core.
//!
//! This crate provides the identifier and timestamp primitives every STIX
//! object is built from, plus the clock abstraction that makes object
//! construction reproducible. `stix-objects` depends on it for all of them.
//!
//! # Key Types
//!
//! - [`Identifier`] -- `{object-type}--{uuid4}` object identifier
//! - [`Timestamp`] -- canonical RFC 3339 UTC string at a fixed [`Precision`]
//! - [`Clock`] -- injectable time source ([`SystemClock`], [`FixedClock`], [`SteppingClock`])

pub mod clock;
pub mod error;
pub mod identifier;
pub mod timestamp;

pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use error::{TypeError, TypeResult};
pub use identifier::{new_identifier, new_identifier_with, Identifier};
pub use timestamp::{normalize, now, Precision, Timestamp, TimestampInput};
