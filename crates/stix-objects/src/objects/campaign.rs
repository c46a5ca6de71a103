use serde::{Deserialize, Serialize};

use crate::common::CommonObjectProperties;
use crate::context::ObjectContext;
use crate::objects::ObjectKind;
use crate::properties::{
    AliasesProperty, DescriptionProperty, NameProperty, ObjectiveProperty, SeenProperty,
};

/// Campaign SDO: a grouping of adversarial behavior over a period of time
/// against a specific set of targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Campaign {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(flatten)]
    pub aliases: AliasesProperty,
    #[serde(flatten)]
    pub seen: SeenProperty,
    #[serde(flatten)]
    pub objective: ObjectiveProperty,
}

impl Campaign {
    pub fn new(version: &str) -> Self {
        Self::new_with(version, &mut ObjectContext::system())
    }

    pub fn new_with(version: &str, ctx: &mut ObjectContext) -> Self {
        Self {
            common: CommonObjectProperties::new(Self::TYPE, version, ctx),
            name: NameProperty::default(),
            description: DescriptionProperty::default(),
            aliases: AliasesProperty::default(),
            seen: SeenProperty::default(),
            objective: ObjectiveProperty::default(),
        }
    }
}

impl_object_kind!(Campaign, "campaign");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_attack_campaign() {
        let mut c = Campaign::new("2.0");
        c.name.set("Bank Attack 2016");
        c.objective.set("Compromise SWIFT system and steal money");
        c.aliases.add("Operation Ledger");
        c.seen.set_first_seen("2016-02-01T00:00:00Z").unwrap();

        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "campaign");
        assert_eq!(json["objective"], "Compromise SWIFT system and steal money");
        assert_eq!(json["aliases"][0], "Operation Ledger");
        assert_eq!(json["first_seen"], "2016-02-01T00:00:00.000000Z");
        assert!(json.get("last_seen").is_none());
    }
}
