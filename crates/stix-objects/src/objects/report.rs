use serde::{Deserialize, Serialize};
use stix_types::{Identifier, Timestamp, TimestampInput, TypeResult};

use crate::common::CommonObjectProperties;
use crate::context::ObjectContext;
use crate::objects::ObjectKind;
use crate::properties::{DescriptionProperty, NameProperty, LIFECYCLE_PRECISION};

/// Report SDO: a collection of threat intelligence focused on one or more
/// topics, referring to its contents by identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Report {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    published: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    object_refs: Vec<Identifier>,
}

impl Report {
    pub fn new(version: &str) -> Self {
        Self::new_with(version, &mut ObjectContext::system())
    }

    pub fn new_with(version: &str, ctx: &mut ObjectContext) -> Self {
        Self {
            common: CommonObjectProperties::new(Self::TYPE, version, ctx),
            name: NameProperty::default(),
            description: DescriptionProperty::default(),
            published: None,
            object_refs: Vec::new(),
        }
    }

    pub fn published(&self) -> Option<&Timestamp> {
        self.published.as_ref()
    }

    pub fn set_published(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        self.published = Some(value.to_timestamp(LIFECYCLE_PRECISION)?);
        Ok(())
    }

    pub fn set_published_to_current_time(&mut self, ctx: &ObjectContext) {
        self.published = Some(ctx.now(LIFECYCLE_PRECISION));
    }

    pub fn object_refs(&self) -> &[Identifier] {
        &self.object_refs
    }

    pub fn add_object_ref(&mut self, id: Identifier) {
        self.object_refs.push(id);
    }
}

impl_object_kind!(Report, "report");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_references_contents() {
        let mut r = Report::new("2.0");
        let indicator = Identifier::new("indicator");
        r.add_object_ref(indicator.clone());
        r.set_published("2016-05-12T08:17:27Z").unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["object_refs"][0], indicator.as_str());
        assert_eq!(json["published"], "2016-05-12T08:17:27.000Z");
    }
}
