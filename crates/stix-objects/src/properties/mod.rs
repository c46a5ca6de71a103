//! Reusable property groups.
//!
//! Each group owns one or a few fields, exposes getters that never fail, and
//! serializes only the fields that are set. Objects embed these groups as
//! named sub-records and flatten them into one JSON object on output.

pub mod custom;
pub mod descriptive;
pub mod identity;
pub mod kill_chain;
pub mod lifecycle;
pub mod references;
pub mod seen;

pub use custom::{CustomProperties, CUSTOM_PREFIX};
pub use descriptive::{
    AliasesProperty, ConfidenceProperty, DescriptionProperty, LabelsProperty, LangProperty,
    NameProperty, ObjectiveProperty,
};
pub use identity::{CreatedByRefProperty, IdProperty, ObjectTypeProperty, SpecVersionProperty};
pub use kill_chain::{KillChainPhase, KillChainPhasesProperty};
pub use lifecycle::{CreatedProperty, ModifiedProperty, RevokedProperty, LIFECYCLE_PRECISION};
pub use references::{
    ExternalReference, ExternalReferencesProperty, GranularMarking, GranularMarkingsProperty,
    ObjectMarkingRefsProperty,
};
pub use seen::{SeenProperty, OBSERVATION_PRECISION};
