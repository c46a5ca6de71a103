use serde::{Deserialize, Serialize};
use stix_types::Identifier;

use crate::common::CommonObjectProperties;
use crate::context::ObjectContext;
use crate::objects::ObjectKind;
use crate::properties::DescriptionProperty;

/// Relationship SRO: a typed, directed link between two objects, e.g.
/// an indicator that `indicates` a campaign.
///
/// Endpoints are identifiers only; the referenced objects need not exist in
/// the same bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Relationship {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    relationship_type: String,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_ref: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_ref: Option<Identifier>,
}

impl Relationship {
    pub fn new(version: &str) -> Self {
        Self::new_with(version, &mut ObjectContext::system())
    }

    pub fn new_with(version: &str, ctx: &mut ObjectContext) -> Self {
        Self {
            common: CommonObjectProperties::new(Self::TYPE, version, ctx),
            relationship_type: String::new(),
            description: DescriptionProperty::default(),
            source_ref: None,
            target_ref: None,
        }
    }

    /// A relationship with its type and both endpoints already set.
    pub fn between(
        version: &str,
        source: Identifier,
        relationship_type: impl Into<String>,
        target: Identifier,
    ) -> Self {
        Self::between_with(
            version,
            source,
            relationship_type,
            target,
            &mut ObjectContext::system(),
        )
    }

    pub fn between_with(
        version: &str,
        source: Identifier,
        relationship_type: impl Into<String>,
        target: Identifier,
        ctx: &mut ObjectContext,
    ) -> Self {
        let mut relationship = Self::new_with(version, ctx);
        relationship.set_source_ref(source);
        relationship.set_relationship_type(relationship_type);
        relationship.set_target_ref(target);
        relationship
    }

    pub fn relationship_type(&self) -> &str {
        &self.relationship_type
    }

    pub fn set_relationship_type(&mut self, relationship_type: impl Into<String>) {
        self.relationship_type = relationship_type.into();
    }

    pub fn source_ref(&self) -> Option<&Identifier> {
        self.source_ref.as_ref()
    }

    pub fn set_source_ref(&mut self, source: Identifier) {
        self.source_ref = Some(source);
    }

    pub fn target_ref(&self) -> Option<&Identifier> {
        self.target_ref.as_ref()
    }

    pub fn set_target_ref(&mut self, target: Identifier) {
        self.target_ref = Some(target);
    }
}

impl_object_kind!(Relationship, "relationship");
