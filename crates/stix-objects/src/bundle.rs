use serde::{Deserialize, Serialize};
use stix_types::Identifier;
use tracing::debug;

use crate::common::CommonBundleProperties;
use crate::config::StixConfig;
use crate::context::ObjectContext;
use crate::error::{ObjectError, ObjectResult};
use crate::objects::StixObject;

/// The `type` of every bundle.
pub const BUNDLE_TYPE: &str = "bundle";

/// An envelope of heterogeneous STIX objects.
///
/// The bundle's own `type` and `id` are fixed at construction. Objects are
/// kept in insertion order; there is no removal, de-duplication or kind
/// restriction. Serializes as `{"type":"bundle","id":"bundle--...","objects":[...]}`,
/// with `objects` omitted while empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(flatten)]
    common: CommonBundleProperties,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    objects: Vec<StixObject>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::new_with(&mut ObjectContext::system())
    }

    pub fn new_with(ctx: &mut ObjectContext) -> Self {
        Self {
            common: CommonBundleProperties::new(ctx),
            objects: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<&Identifier> {
        self.common.id.get()
    }

    pub fn object_type(&self) -> &str {
        self.common.object_type.get()
    }

    /// Append an object after all existing ones.
    pub fn add_object(&mut self, object: impl Into<StixObject>) {
        let object = object.into();
        debug!(
            bundle = %self.common.id.get().map(Identifier::as_str).unwrap_or_default(),
            object_type = object.object_type(),
            position = self.objects.len(),
            "object added to bundle"
        );
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[StixObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// First object whose `id` equals `id`.
    pub fn find(&self, id: &str) -> Option<&StixObject> {
        self.objects.iter().find(|object| object.has_id(id))
    }

    /// Compact JSON bytes.
    pub fn to_vec(&self) -> ObjectResult<Vec<u8>> {
        let bytes = serde_json::to_vec(self)?;
        debug!(objects = self.objects.len(), bytes = bytes.len(), "bundle encoded");
        Ok(bytes)
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> ObjectResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON text.
    pub fn to_json_pretty(&self) -> ObjectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON bytes, indented when `config.pretty` is set.
    pub fn encode(&self, config: &StixConfig) -> ObjectResult<Vec<u8>> {
        if config.pretty {
            let bytes = serde_json::to_vec_pretty(self)?;
            debug!(objects = self.objects.len(), bytes = bytes.len(), "bundle encoded (pretty)");
            Ok(bytes)
        } else {
            self.to_vec()
        }
    }

    /// Decode a bundle, rejecting documents whose `type` is not `bundle` or
    /// that have no `id`.
    pub fn from_json(json: &str) -> ObjectResult<Self> {
        serde_json::from_str::<Self>(json)?.checked()
    }

    pub fn from_slice(bytes: &[u8]) -> ObjectResult<Self> {
        serde_json::from_slice::<Self>(bytes)?.checked()
    }

    fn checked(self) -> ObjectResult<Self> {
        if self.object_type() != BUNDLE_TYPE {
            return Err(ObjectError::InvalidBundle(format!(
                "type is {:?}, expected {BUNDLE_TYPE:?}",
                self.object_type()
            )));
        }
        if self.id().is_none() {
            return Err(ObjectError::InvalidBundle("missing id".into()));
        }
        Ok(self)
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::new()
    }
}

/// A new, empty bundle with a fresh `bundle--{uuid4}` identifier.
pub fn new_bundle() -> Bundle {
    Bundle::new()
}
