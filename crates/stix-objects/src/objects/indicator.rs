use serde::{Deserialize, Serialize};
use stix_types::{Timestamp, TimestampInput, TypeResult};

use crate::common::CommonObjectProperties;
use crate::context::ObjectContext;
use crate::objects::ObjectKind;
use crate::properties::{
    DescriptionProperty, KillChainPhasesProperty, NameProperty, OBSERVATION_PRECISION,
};

/// Indicator SDO: a detection pattern for suspicious or malicious activity,
/// with an optional window during which it is considered valid.
///
/// The pattern is stored verbatim; it is not parsed or evaluated. The
/// validity window ends are independent and their order is not checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Indicator {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    valid_from: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    valid_until: Option<Timestamp>,
    #[serde(flatten)]
    pub kill_chain_phases: KillChainPhasesProperty,
}

impl Indicator {
    pub fn new(version: &str) -> Self {
        Self::new_with(version, &mut ObjectContext::system())
    }

    pub fn new_with(version: &str, ctx: &mut ObjectContext) -> Self {
        Self {
            common: CommonObjectProperties::new(Self::TYPE, version, ctx),
            name: NameProperty::default(),
            description: DescriptionProperty::default(),
            pattern: String::new(),
            valid_from: None,
            valid_until: None,
            kill_chain_phases: KillChainPhasesProperty::default(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    pub fn valid_from(&self) -> Option<&Timestamp> {
        self.valid_from.as_ref()
    }

    pub fn set_valid_from(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        self.valid_from = Some(value.to_timestamp(OBSERVATION_PRECISION)?);
        Ok(())
    }

    pub fn set_valid_from_to_current_time(&mut self, ctx: &ObjectContext) {
        self.valid_from = Some(ctx.now(OBSERVATION_PRECISION));
    }

    pub fn valid_until(&self) -> Option<&Timestamp> {
        self.valid_until.as_ref()
    }

    pub fn set_valid_until(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        self.valid_until = Some(value.to_timestamp(OBSERVATION_PRECISION)?);
        Ok(())
    }

    pub fn set_valid_until_to_current_time(&mut self, ctx: &ObjectContext) {
        self.valid_until = Some(ctx.now(OBSERVATION_PRECISION));
    }
}

impl_object_kind!(Indicator, "indicator");
