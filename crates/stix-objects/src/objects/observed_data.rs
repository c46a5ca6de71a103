use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stix_types::{Timestamp, TimestampInput, TypeResult};

use crate::common::CommonObjectProperties;
use crate::context::ObjectContext;
use crate::objects::ObjectKind;
use crate::properties::OBSERVATION_PRECISION;

/// Observed Data SDO: raw cyber observables seen over a time window.
///
/// Observables are kept as opaque JSON keyed by their local reference
/// (`"0"`, `"1"`, ...). Keys are emitted in sorted order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ObservedData {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_observed: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_observed: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "is_zero")]
    number_observed: u32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    objects: BTreeMap<String, Value>,
}

impl ObservedData {
    pub fn new(version: &str) -> Self {
        Self::new_with(version, &mut ObjectContext::system())
    }

    pub fn new_with(version: &str, ctx: &mut ObjectContext) -> Self {
        Self {
            common: CommonObjectProperties::new(Self::TYPE, version, ctx),
            first_observed: None,
            last_observed: None,
            number_observed: 0,
            objects: BTreeMap::new(),
        }
    }

    pub fn first_observed(&self) -> Option<&Timestamp> {
        self.first_observed.as_ref()
    }

    pub fn set_first_observed(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        self.first_observed = Some(value.to_timestamp(OBSERVATION_PRECISION)?);
        Ok(())
    }

    pub fn last_observed(&self) -> Option<&Timestamp> {
        self.last_observed.as_ref()
    }

    pub fn set_last_observed(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        self.last_observed = Some(value.to_timestamp(OBSERVATION_PRECISION)?);
        Ok(())
    }

    pub fn number_observed(&self) -> u32 {
        self.number_observed
    }

    pub fn set_number_observed(&mut self, n: u32) {
        self.number_observed = n;
    }

    pub fn objects(&self) -> &BTreeMap<String, Value> {
        &self.objects
    }

    /// Insert an observable under `key`, replacing any previous one.
    pub fn add_observable(&mut self, key: impl Into<String>, observable: Value) {
        self.objects.insert(key.into(), observable);
    }
}

impl_object_kind!(ObservedData, "observed-data");

fn is_zero(value: &u32) -> bool {
    *value == 0
}
