use serde::{Deserialize, Serialize};

use crate::common::CommonMarkingDefinitionProperties;
use crate::context::ObjectContext;
use crate::objects::ObjectKind;

/// `definition_type` for Traffic Light Protocol markings.
pub const TLP: &str = "tlp";
/// `definition_type` for free-text statement markings.
pub const STATEMENT: &str = "statement";

/// The nested `definition` payload. Only the field matching the
/// definition type is set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkingDefinitionPayload {
    /// TLP colour: `white`, `green`, `amber` or `red`. Not checked.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tlp: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub statement: String,
}

/// Marking Definition: handling or sharing restrictions applied to other
/// objects through `object_marking_refs` and `granular_markings`.
///
/// Marking definitions are never versioned, so they carry `created` but no
/// `modified`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct MarkingDefinition {
    #[serde(flatten)]
    pub common: CommonMarkingDefinitionProperties,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    definition_type: String,
    #[serde(default)]
    definition: MarkingDefinitionPayload,
}

impl MarkingDefinition {
    /// A TLP marking of the given colour.
    pub fn new(version: &str, colour: &str) -> Self {
        Self::new_with(version, colour, &mut ObjectContext::system())
    }

    pub fn new_with(version: &str, colour: &str, ctx: &mut ObjectContext) -> Self {
        let mut marking = Self::empty(version, ctx);
        marking.definition_type = TLP.into();
        marking.definition.tlp = colour.into();
        marking
    }

    /// A statement marking, e.g. a copyright notice.
    pub fn statement(version: &str, statement: &str) -> Self {
        Self::statement_with(version, statement, &mut ObjectContext::system())
    }

    pub fn statement_with(version: &str, statement: &str, ctx: &mut ObjectContext) -> Self {
        let mut marking = Self::empty(version, ctx);
        marking.definition_type = STATEMENT.into();
        marking.definition.statement = statement.into();
        marking
    }

    fn empty(version: &str, ctx: &mut ObjectContext) -> Self {
        Self {
            common: CommonMarkingDefinitionProperties::new(Self::TYPE, version, ctx),
            definition_type: String::new(),
            definition: MarkingDefinitionPayload::default(),
        }
    }

    pub fn definition_type(&self) -> &str {
        &self.definition_type
    }

    pub fn definition(&self) -> &MarkingDefinitionPayload {
        &self.definition
    }
}

impl_object_kind!(MarkingDefinition, "marking-definition", unversioned);

/// A TLP marking definition of the given colour.
pub fn new_marking_definition(version: &str, colour: &str) -> MarkingDefinition {
    MarkingDefinition::new(version, colour)
}

/// A statement marking definition.
pub fn new_statement_marking(version: &str, statement: &str) -> MarkingDefinition {
    MarkingDefinition::statement(version, statement)
}
