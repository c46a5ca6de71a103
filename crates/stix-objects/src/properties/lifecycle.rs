use serde::{Deserialize, Serialize};
use stix_types::{Precision, Timestamp, TimestampInput, TypeResult};

use crate::context::ObjectContext;

/// Precision of every lifecycle timestamp.
pub const LIFECYCLE_PRECISION: Precision = Precision::Milli;

/// Time the object was created, at millisecond precision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<Timestamp>,
}

impl CreatedProperty {
    pub fn get(&self) -> Option<&Timestamp> {
        self.created.as_ref()
    }

    /// Set from a string or native time value.
    ///
    /// Malformed input returns an error and leaves the field unchanged.
    pub fn set(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        self.created = Some(value.to_timestamp(LIFECYCLE_PRECISION)?);
        Ok(())
    }

    pub fn set_to_current_time(&mut self, ctx: &ObjectContext) {
        self.created = Some(ctx.now(LIFECYCLE_PRECISION));
    }
}

/// Time the object was last modified, at millisecond precision.
///
/// This property does not know about `created`; the `modified >= created`
/// rule is enforced by the common object properties that own both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiedProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    modified: Option<Timestamp>,
}

impl ModifiedProperty {
    pub fn get(&self) -> Option<&Timestamp> {
        self.modified.as_ref()
    }

    pub fn set(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        self.modified = Some(value.to_timestamp(LIFECYCLE_PRECISION)?);
        Ok(())
    }

    pub(crate) fn set_timestamp(&mut self, value: Timestamp) {
        self.modified = Some(value);
    }
}

/// Whether the object has been revoked. Omitted from output while `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedProperty {
    #[serde(default, skip_serializing_if = "is_false")]
    revoked: bool,
}

impl RevokedProperty {
    pub fn get(&self) -> bool {
        self.revoked
    }

    pub fn set(&mut self, revoked: bool) {
        self.revoked = revoked;
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
