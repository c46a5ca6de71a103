use serde::{Deserialize, Serialize};

use crate::common::CommonObjectProperties;
use crate::context::ObjectContext;
use crate::objects::ObjectKind;
use crate::properties::{DescriptionProperty, KillChainPhasesProperty, NameProperty};

/// Attack Pattern SDO: a type of tactic, technique or procedure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AttackPattern {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(flatten)]
    pub kill_chain_phases: KillChainPhasesProperty,
}

impl AttackPattern {
    pub fn new(version: &str) -> Self {
        Self::new_with(version, &mut ObjectContext::system())
    }

    pub fn new_with(version: &str, ctx: &mut ObjectContext) -> Self {
        Self {
            common: CommonObjectProperties::new(Self::TYPE, version, ctx),
            name: NameProperty::default(),
            description: DescriptionProperty::default(),
            kill_chain_phases: KillChainPhasesProperty::default(),
        }
    }
}

impl_object_kind!(AttackPattern, "attack-pattern");
