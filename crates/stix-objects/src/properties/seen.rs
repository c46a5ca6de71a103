use serde::{Deserialize, Serialize};
use stix_types::{Precision, Timestamp, TimestampInput, TypeResult};

use crate::context::ObjectContext;

/// Precision of every observation and validity timestamp.
pub const OBSERVATION_PRECISION: Precision = Precision::Micro;

/// The window in which something was observed: `first_seen` and `last_seen`,
/// both at microsecond precision.
///
/// The two ends are independent; no ordering between them is enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_seen: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_seen: Option<Timestamp>,
}

impl SeenProperty {
    pub fn first_seen(&self) -> Option<&Timestamp> {
        self.first_seen.as_ref()
    }

    pub fn set_first_seen(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        self.first_seen = Some(value.to_timestamp(OBSERVATION_PRECISION)?);
        Ok(())
    }

    pub fn set_first_seen_to_current_time(&mut self, ctx: &ObjectContext) {
        self.first_seen = Some(ctx.now(OBSERVATION_PRECISION));
    }

    pub fn last_seen(&self) -> Option<&Timestamp> {
        self.last_seen.as_ref()
    }

    pub fn set_last_seen(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        self.last_seen = Some(value.to_timestamp(OBSERVATION_PRECISION)?);
        Ok(())
    }

    pub fn set_last_seen_to_current_time(&mut self, ctx: &ObjectContext) {
        self.last_seen = Some(ctx.now(OBSERVATION_PRECISION));
    }
}
