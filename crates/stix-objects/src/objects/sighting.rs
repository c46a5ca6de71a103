use serde::{Deserialize, Serialize};
use stix_types::Identifier;

use crate::common::CommonObjectProperties;
use crate::context::ObjectContext;
use crate::objects::ObjectKind;
use crate::properties::SeenProperty;

/// Sighting SRO: the belief that something (usually an indicator) was seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Sighting {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub seen: SeenProperty,
    #[serde(default, skip_serializing_if = "is_zero")]
    count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sighting_of_ref: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    observed_data_refs: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    where_sighted_refs: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "is_false")]
    summary: bool,
}

impl Sighting {
    pub fn new(version: &str) -> Self {
        Self::new_with(version, &mut ObjectContext::system())
    }

    pub fn new_with(version: &str, ctx: &mut ObjectContext) -> Self {
        Self {
            common: CommonObjectProperties::new(Self::TYPE, version, ctx),
            seen: SeenProperty::default(),
            count: 0,
            sighting_of_ref: None,
            observed_data_refs: Vec::new(),
            where_sighted_refs: Vec::new(),
            summary: false,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    pub fn sighting_of_ref(&self) -> Option<&Identifier> {
        self.sighting_of_ref.as_ref()
    }

    pub fn set_sighting_of_ref(&mut self, id: Identifier) {
        self.sighting_of_ref = Some(id);
    }

    pub fn observed_data_refs(&self) -> &[Identifier] {
        &self.observed_data_refs
    }

    pub fn add_observed_data_ref(&mut self, id: Identifier) {
        self.observed_data_refs.push(id);
    }

    pub fn where_sighted_refs(&self) -> &[Identifier] {
        &self.where_sighted_refs
    }

    pub fn add_where_sighted_ref(&mut self, id: Identifier) {
        self.where_sighted_refs.push(id);
    }

    pub fn summary(&self) -> bool {
        self.summary
    }

    pub fn set_summary(&mut self, summary: bool) {
        self.summary = summary;
    }
}

impl_object_kind!(Sighting, "sighting");

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}
