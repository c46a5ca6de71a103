use serde::{Deserialize, Serialize};
use stix_types::Identifier;

use crate::context::ObjectContext;

/// Version of the STIX specification an object was written against, e.g. `"2.0"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecVersionProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    spec_version: String,
}

impl SpecVersionProperty {
    pub fn get(&self) -> &str {
        &self.spec_version
    }

    pub fn set(&mut self, version: impl Into<String>) {
        self.spec_version = version.into();
    }
}

/// The object type, serialized under the `type` key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTypeProperty {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    object_type: String,
}

impl ObjectTypeProperty {
    pub fn get(&self) -> &str {
        &self.object_type
    }

    pub fn set(&mut self, object_type: impl Into<String>) {
        self.object_type = object_type.into();
    }
}

/// The object identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Identifier>,
}

impl IdProperty {
    pub fn get(&self) -> Option<&Identifier> {
        self.id.as_ref()
    }

    /// Replace the identifier with an existing one.
    ///
    /// This is the reconstruction path for objects read back from storage;
    /// new objects get their identifier from [`IdProperty::set_new`].
    pub fn set(&mut self, id: Identifier) {
        self.id = Some(id);
    }

    /// Generate and store a fresh identifier for `object_type`.
    pub fn set_new(&mut self, object_type: &str, ctx: &mut ObjectContext) {
        self.id = Some(ctx.new_identifier(object_type));
    }
}

/// Identifier of the identity that created the object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedByRefProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_by_ref: Option<Identifier>,
}

impl CreatedByRefProperty {
    pub fn get(&self) -> Option<&Identifier> {
        self.created_by_ref.as_ref()
    }

    pub fn set(&mut self, identity: Identifier) {
        self.created_by_ref = Some(identity);
    }

    pub fn clear(&mut self) {
        self.created_by_ref = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_serializes_under_type_key() {
        let mut p = ObjectTypeProperty::default();
        p.set("indicator");
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"type":"indicator"}"#);
    }

    #[test]
    fn empty_properties_serialize_to_nothing() {
        assert_eq!(serde_json::to_string(&SpecVersionProperty::default()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&IdProperty::default()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&CreatedByRefProperty::default()).unwrap(), "{}");
    }

    #[test]
    fn set_new_uses_given_type() {
        let mut ctx = ObjectContext::system();
        let mut p = IdProperty::default();
        p.set_new("tool", &mut ctx);
        assert_eq!(p.get().unwrap().object_type(), "tool");
    }

    #[test]
    fn created_by_ref_can_be_cleared() {
        let mut p = CreatedByRefProperty::default();
        p.set(Identifier::new("identity"));
        assert!(p.get().is_some());
        p.clear();
        assert!(p.get().is_none());
    }
}
