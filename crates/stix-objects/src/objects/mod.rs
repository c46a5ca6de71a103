//! Concrete STIX object kinds.
//!
//! Every kind is a composition of one common property set plus its own
//! fields. Constructors take the spec version (and optionally an
//! [`ObjectContext`](crate::ObjectContext)) and return an object that already
//! has its type, identifier and timestamps.

/// `ObjectKind` for a struct whose `common` field holds its common
/// properties. `unversioned` kinds report no `modified`.
macro_rules! impl_object_kind {
    ($kind:ident, $type:literal) => {
        impl_object_kind!(@impl $kind, $type, |common| common.modified());
    };
    ($kind:ident, $type:literal, unversioned) => {
        impl_object_kind!(@impl $kind, $type, |_common| None);
    };
    (@impl $kind:ident, $type:literal, |$common:ident| $modified:expr) => {
        impl $crate::objects::ObjectKind for $kind {
            const TYPE: &'static str = $type;

            fn id(&self) -> Option<&stix_types::Identifier> {
                self.common.id.get()
            }

            fn object_type(&self) -> &str {
                self.common.object_type.get()
            }

            fn created(&self) -> Option<&stix_types::Timestamp> {
                self.common.created()
            }

            fn modified(&self) -> Option<&stix_types::Timestamp> {
                let $common = &self.common;
                $modified
            }
        }
    };
}

pub mod attack_pattern;
pub mod campaign;
pub mod indicator;
pub mod infrastructure;
pub mod malware;
pub mod marking_definition;
pub mod observed_data;
pub mod relationship;
pub mod report;
pub mod sighting;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use stix_types::{Identifier, Timestamp};

use crate::error::ObjectResult;

pub use attack_pattern::AttackPattern;
pub use campaign::Campaign;
pub use indicator::Indicator;
pub use infrastructure::Infrastructure;
pub use malware::Malware;
pub use marking_definition::{
    new_marking_definition, new_statement_marking, MarkingDefinition, MarkingDefinitionPayload,
};
pub use observed_data::ObservedData;
pub use relationship::Relationship;
pub use report::Report;
pub use sighting::Sighting;

/// Behavior shared by every concrete object kind.
pub trait ObjectKind: Serialize + DeserializeOwned {
    /// The `type` string this kind is tagged with.
    const TYPE: &'static str;

    fn id(&self) -> Option<&Identifier>;

    fn object_type(&self) -> &str;

    fn created(&self) -> Option<&Timestamp>;

    /// `None` for kinds without a `modified` property.
    fn modified(&self) -> Option<&Timestamp>;

    fn to_json(&self) -> ObjectResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn from_json(json: &str) -> ObjectResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Any object that can sit in a bundle.
///
/// Serializes exactly as the wrapped object (no extra tag). Deserializes by
/// dispatching on the `type` key; unknown types are kept as raw JSON in
/// [`StixObject::Other`].
#[derive(Clone, Debug, PartialEq)]
pub enum StixObject {
    AttackPattern(AttackPattern),
    Campaign(Campaign),
    Indicator(Indicator),
    Infrastructure(Infrastructure),
    Malware(Malware),
    MarkingDefinition(MarkingDefinition),
    ObservedData(ObservedData),
    Relationship(Relationship),
    Report(Report),
    Sighting(Sighting),
    Other(Value),
}

impl StixObject {
    pub fn id(&self) -> Option<&Identifier> {
        match self {
            Self::AttackPattern(o) => o.id(),
            Self::Campaign(o) => o.id(),
            Self::Indicator(o) => o.id(),
            Self::Infrastructure(o) => o.id(),
            Self::Malware(o) => o.id(),
            Self::MarkingDefinition(o) => o.id(),
            Self::ObservedData(o) => o.id(),
            Self::Relationship(o) => o.id(),
            Self::Report(o) => o.id(),
            Self::Sighting(o) => o.id(),
            Self::Other(_) => None,
        }
    }

    /// The object's `type`. For [`StixObject::Other`] this is read from the
    /// raw JSON and is empty when missing.
    pub fn object_type(&self) -> &str {
        match self {
            Self::AttackPattern(o) => o.object_type(),
            Self::Campaign(o) => o.object_type(),
            Self::Indicator(o) => o.object_type(),
            Self::Infrastructure(o) => o.object_type(),
            Self::Malware(o) => o.object_type(),
            Self::MarkingDefinition(o) => o.object_type(),
            Self::ObservedData(o) => o.object_type(),
            Self::Relationship(o) => o.object_type(),
            Self::Report(o) => o.object_type(),
            Self::Sighting(o) => o.object_type(),
            Self::Other(v) => v.get("type").and_then(Value::as_str).unwrap_or_default(),
        }
    }

    /// Identifier string, including for [`StixObject::Other`].
    fn id_str(&self) -> Option<&str> {
        match self {
            Self::Other(v) => v.get("id").and_then(Value::as_str),
            known => known.id().map(Identifier::as_str),
        }
    }

    pub(crate) fn has_id(&self, id: &str) -> bool {
        self.id_str() == Some(id)
    }
}

impl Serialize for StixObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::AttackPattern(o) => o.serialize(serializer),
            Self::Campaign(o) => o.serialize(serializer),
            Self::Indicator(o) => o.serialize(serializer),
            Self::Infrastructure(o) => o.serialize(serializer),
            Self::Malware(o) => o.serialize(serializer),
            Self::MarkingDefinition(o) => o.serialize(serializer),
            Self::ObservedData(o) => o.serialize(serializer),
            Self::Relationship(o) => o.serialize(serializer),
            Self::Report(o) => o.serialize(serializer),
            Self::Sighting(o) => o.serialize(serializer),
            Self::Other(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StixObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let object_type = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let decoded = match object_type.as_str() {
            AttackPattern::TYPE => serde_json::from_value(value).map(Self::AttackPattern),
            Campaign::TYPE => serde_json::from_value(value).map(Self::Campaign),
            Indicator::TYPE => serde_json::from_value(value).map(Self::Indicator),
            Infrastructure::TYPE => serde_json::from_value(value).map(Self::Infrastructure),
            Malware::TYPE => serde_json::from_value(value).map(Self::Malware),
            MarkingDefinition::TYPE => serde_json::from_value(value).map(Self::MarkingDefinition),
            ObservedData::TYPE => serde_json::from_value(value).map(Self::ObservedData),
            Relationship::TYPE => serde_json::from_value(value).map(Self::Relationship),
            Report::TYPE => serde_json::from_value(value).map(Self::Report),
            Sighting::TYPE => serde_json::from_value(value).map(Self::Sighting),
            _ if !value.is_object() => {
                return Err(D::Error::custom("STIX object must be a JSON object"))
            }
            _ => Ok(Self::Other(value)),
        };
        decoded.map_err(D::Error::custom)
    }
}

macro_rules! impl_from_kind {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for StixObject {
                fn from(object: $kind) -> Self {
                    Self::$kind(object)
                }
            }
        )*
    };
}

impl_from_kind!(
    AttackPattern,
    Campaign,
    Indicator,
    Infrastructure,
    Malware,
    MarkingDefinition,
    ObservedData,
    Relationship,
    Report,
    Sighting,
);

impl From<Value> for StixObject {
    fn from(value: Value) -> Self {
        Self::Other(value)
    }
}
