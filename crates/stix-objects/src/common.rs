//! Fixed sets of properties shared by every object of a category.
//!
//! - [`CommonObjectProperties`] -- domain and relationship objects
//! - [`CommonMarkingDefinitionProperties`] -- marking definitions (no `modified`,
//!   no revocation, labels, confidence or lang)
//! - [`CommonBundleProperties`] -- bundles (`type` and `id` only)
//!
//! Each set has a one-step initializer that assigns spec version, type,
//! identifier and timestamps in a fixed order.

use serde::{Deserialize, Serialize};
use stix_types::{Timestamp, TimestampInput, TypeError, TypeResult};

use crate::context::ObjectContext;
use crate::properties::*;

/// Properties carried by every domain and relationship object.
///
/// `created` and `modified` are private: they change only through the
/// setters below, which keep `modified` at or after `created`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonObjectProperties {
    #[serde(flatten)]
    pub object_type: ObjectTypeProperty,
    #[serde(flatten)]
    pub spec_version: SpecVersionProperty,
    #[serde(flatten)]
    pub id: IdProperty,
    #[serde(flatten)]
    pub created_by_ref: CreatedByRefProperty,
    #[serde(flatten)]
    created: CreatedProperty,
    #[serde(flatten)]
    modified: ModifiedProperty,
    #[serde(flatten)]
    pub revoked: RevokedProperty,
    #[serde(flatten)]
    pub labels: LabelsProperty,
    #[serde(flatten)]
    pub confidence: ConfidenceProperty,
    #[serde(flatten)]
    pub lang: LangProperty,
    #[serde(flatten)]
    pub external_references: ExternalReferencesProperty,
    #[serde(flatten)]
    pub object_marking_refs: ObjectMarkingRefsProperty,
    #[serde(flatten)]
    pub granular_markings: GranularMarkingsProperty,
    #[serde(flatten)]
    pub custom: CustomProperties,
}

impl CommonObjectProperties {
    /// Fully initialized properties for a new object of `object_type`.
    pub fn new(object_type: &str, version: &str, ctx: &mut ObjectContext) -> Self {
        let mut properties = Self::default();
        properties.init_object_properties(object_type, version, ctx);
        properties
    }

    /// Assign spec version, type, a fresh identifier, `created` and `modified`.
    ///
    /// The identifier is generated from the type set just before it, and
    /// `modified` is a copy of `created` rather than a second clock read, so
    /// the two are equal right after construction.
    pub fn init_object_properties(
        &mut self,
        object_type: &str,
        version: &str,
        ctx: &mut ObjectContext,
    ) {
        self.spec_version.set(version);
        self.object_type.set(object_type);
        self.id.set_new(self.object_type.get(), ctx);
        self.created.set_to_current_time(ctx);
        self.set_modified_to_created();
    }

    /// Copy `created` into `modified`. Does nothing while `created` is unset.
    pub fn set_modified_to_created(&mut self) {
        if let Some(created) = self.created.get() {
            self.modified.set_timestamp(created.clone());
        }
    }

    pub fn created(&self) -> Option<&Timestamp> {
        self.created.get()
    }

    pub fn modified(&self) -> Option<&Timestamp> {
        self.modified.get()
    }

    /// Set `created` from a string or native time value.
    ///
    /// Fails with [`TypeError::ModifiedBeforeCreated`] when the value is later
    /// than the current `modified`. On failure the field keeps its previous
    /// value.
    pub fn set_created(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        let candidate = value.to_timestamp(LIFECYCLE_PRECISION)?;
        if let Some(modified) = self.modified.get() {
            check_order(&candidate, modified)?;
        }
        self.created.set(&candidate)
    }

    /// Set both lifecycle timestamps at once, as when rebuilding a stored
    /// object. Neither field changes unless both parse and are in order.
    pub fn set_created_and_modified(
        &mut self,
        created: impl TimestampInput,
        modified: impl TimestampInput,
    ) -> TypeResult<()> {
        let created = created.to_timestamp(LIFECYCLE_PRECISION)?;
        let modified = modified.to_timestamp(LIFECYCLE_PRECISION)?;
        check_order(&created, &modified)?;
        self.created.set(&created)?;
        self.modified.set_timestamp(modified);
        Ok(())
    }

    /// Set `modified` from a string or native time value.
    ///
    /// Fails with [`TypeError::InvalidTimestamp`] on malformed input and with
    /// [`TypeError::ModifiedBeforeCreated`] when the value is earlier than
    /// `created`. On failure the field keeps its previous value.
    pub fn set_modified(&mut self, value: impl TimestampInput) -> TypeResult<()> {
        let candidate = value.to_timestamp(LIFECYCLE_PRECISION)?;
        if let Some(created) = self.created.get() {
            check_order(created, &candidate)?;
        }
        self.modified.set_timestamp(candidate);
        Ok(())
    }

    /// Stamp `modified` with the current time, never earlier than `created`.
    pub fn set_modified_to_current_time(&mut self, ctx: &ObjectContext) {
        let now = ctx.now(LIFECYCLE_PRECISION);
        match self.created.get() {
            Some(created) if is_before(&now, created) => {
                self.modified.set_timestamp(created.clone())
            }
            _ => self.modified.set_timestamp(now),
        }
    }
}

/// Properties carried by marking definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonMarkingDefinitionProperties {
    #[serde(flatten)]
    pub object_type: ObjectTypeProperty,
    #[serde(flatten)]
    pub spec_version: SpecVersionProperty,
    #[serde(flatten)]
    pub id: IdProperty,
    #[serde(flatten)]
    pub created_by_ref: CreatedByRefProperty,
    #[serde(flatten)]
    pub created: CreatedProperty,
    #[serde(flatten)]
    pub external_references: ExternalReferencesProperty,
    #[serde(flatten)]
    pub object_marking_refs: ObjectMarkingRefsProperty,
    #[serde(flatten)]
    pub granular_markings: GranularMarkingsProperty,
    #[serde(flatten)]
    pub custom: CustomProperties,
}

impl CommonMarkingDefinitionProperties {
    pub fn new(object_type: &str, version: &str, ctx: &mut ObjectContext) -> Self {
        let mut properties = Self::default();
        properties.init_marking_definition_properties(object_type, version, ctx);
        properties
    }

    pub fn created(&self) -> Option<&Timestamp> {
        self.created.get()
    }

    /// Same sequence as [`CommonObjectProperties::init_object_properties`]
    /// without the final `modified` step.
    pub fn init_marking_definition_properties(
        &mut self,
        object_type: &str,
        version: &str,
        ctx: &mut ObjectContext,
    ) {
        self.spec_version.set(version);
        self.object_type.set(object_type);
        self.id.set_new(self.object_type.get(), ctx);
        self.created.set_to_current_time(ctx);
    }
}

/// Properties carried by bundles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonBundleProperties {
    #[serde(flatten)]
    pub object_type: ObjectTypeProperty,
    #[serde(flatten)]
    pub id: IdProperty,
}

impl CommonBundleProperties {
    pub fn new(ctx: &mut ObjectContext) -> Self {
        let mut properties = Self::default();
        properties.init_bundle_properties(ctx);
        properties
    }

    pub fn init_bundle_properties(&mut self, ctx: &mut ObjectContext) {
        self.object_type.set(crate::bundle::BUNDLE_TYPE);
        self.id.set_new(self.object_type.get(), ctx);
    }
}

/// `a < b` in time. Unparseable values are never "before" anything.
fn is_before(a: &Timestamp, b: &Timestamp) -> bool {
    match (a.to_datetime(), b.to_datetime()) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

fn check_order(created: &Timestamp, modified: &Timestamp) -> TypeResult<()> {
    if is_before(modified, created) {
        return Err(TypeError::ModifiedBeforeCreated {
            created: created.to_string(),
            modified: modified.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use stix_types::{FixedClock, SteppingClock};

    fn stepping_ctx() -> ObjectContext {
        let start = Utc.with_ymd_and_hms(2016, 4, 6, 20, 3, 0).unwrap();
        ObjectContext::seeded(SteppingClock::new(start, Duration::milliseconds(250)), 1)
    }

    #[test]
    fn init_assigns_in_order() {
        let mut ctx = stepping_ctx();
        let p = CommonObjectProperties::new("indicator", "2.0", &mut ctx);
        assert_eq!(p.spec_version.get(), "2.0");
        assert_eq!(p.object_type.get(), "indicator");
        assert_eq!(p.id.get().unwrap().object_type(), "indicator");
        assert_eq!(p.created().unwrap().as_str(), "2016-04-06T20:03:00.000Z");
    }

    #[test]
    fn modified_is_copied_not_reread() {
        // A stepping clock would give a different instant on a second read.
        let mut ctx = stepping_ctx();
        let p = CommonObjectProperties::new("malware", "2.0", &mut ctx);
        assert_eq!(p.created(), p.modified());
    }

    #[test]
    fn modified_before_created_is_rejected() {
        let mut ctx = stepping_ctx();
        let mut p = CommonObjectProperties::new("malware", "2.0", &mut ctx);
        let err = p.set_modified("2016-04-06T20:02:59.999Z").unwrap_err();
        assert!(matches!(err, TypeError::ModifiedBeforeCreated { .. }));
        assert_eq!(p.modified().unwrap().as_str(), "2016-04-06T20:03:00.000Z");
    }

    #[test]
    fn created_after_modified_is_rejected() {
        let mut ctx = stepping_ctx();
        let mut p = CommonObjectProperties::new("campaign", "2.0", &mut ctx);
        let err = p.set_created("2099-01-01T00:00:00Z").unwrap_err();
        assert!(matches!(err, TypeError::ModifiedBeforeCreated { .. }));
        assert_eq!(p.created().unwrap().as_str(), "2016-04-06T20:03:00.000Z");
        assert_eq!(p.modified().unwrap().as_str(), "2016-04-06T20:03:00.000Z");
    }

    #[test]
    fn created_may_move_back() {
        let mut ctx = stepping_ctx();
        let mut p = CommonObjectProperties::new("campaign", "2.0", &mut ctx);
        p.set_created("2016-01-01T00:00:00Z").unwrap();
        assert_eq!(p.created().unwrap().as_str(), "2016-01-01T00:00:00.000Z");
        assert_eq!(p.modified().unwrap().as_str(), "2016-04-06T20:03:00.000Z");
    }

    #[test]
    fn reconstruction_sets_both_or_neither() {
        let mut ctx = stepping_ctx();
        let mut p = CommonObjectProperties::new("campaign", "2.0", &mut ctx);
        p.set_created_and_modified("2099-01-01T00:00:00Z", "2099-02-01T00:00:00Z")
            .unwrap();
        assert_eq!(p.created().unwrap().as_str(), "2099-01-01T00:00:00.000Z");
        assert_eq!(p.modified().unwrap().as_str(), "2099-02-01T00:00:00.000Z");

        let err = p
            .set_created_and_modified("2100-01-01T00:00:00Z", "2000-01-01T00:00:00Z")
            .unwrap_err();
        assert!(matches!(err, TypeError::ModifiedBeforeCreated { .. }));
        assert!(p.set_created_and_modified("2100-01-01T00:00:00Z", "garbage").is_err());
        assert_eq!(p.created().unwrap().as_str(), "2099-01-01T00:00:00.000Z");
        assert_eq!(p.modified().unwrap().as_str(), "2099-02-01T00:00:00.000Z");
    }

    #[test]
    fn modified_after_created_is_accepted() {
        let mut ctx = stepping_ctx();
        let mut p = CommonObjectProperties::new("malware", "2.0", &mut ctx);
        p.set_modified("2016-05-01T00:00:00Z").unwrap();
        assert_eq!(p.modified().unwrap().as_str(), "2016-05-01T00:00:00.000Z");
    }

    #[test]
    fn current_time_never_precedes_created() {
        let past = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let mut ctx = stepping_ctx();
        let mut p = CommonObjectProperties::new("malware", "2.0", &mut ctx);
        p.set_modified_to_current_time(&ObjectContext::seeded(FixedClock::new(past), 0));
        assert_eq!(p.modified(), p.created());

        p.set_modified_to_current_time(&ctx);
        assert_eq!(p.modified().unwrap().as_str(), "2016-04-06T20:03:00.250Z");
    }

    #[test]
    fn marking_definition_has_no_modified() {
        let mut ctx = stepping_ctx();
        let p = CommonMarkingDefinitionProperties::new("marking-definition", "2.0", &mut ctx);
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("modified").is_none());
        assert!(json.get("created").is_some());
    }

    #[test]
    fn bundle_properties_are_type_and_id_only() {
        let mut ctx = stepping_ctx();
        let p = CommonBundleProperties::new(&mut ctx);
        let json = serde_json::to_value(&p).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(json["type"], "bundle");
        assert!(json["id"].as_str().unwrap().starts_with("bundle--"));
    }

    #[test]
    fn serialized_key_order_is_declared_order() {
        let mut ctx = stepping_ctx();
        let mut p = CommonObjectProperties::new("campaign", "2.0", &mut ctx);
        p.labels.add("x");
        let json = serde_json::to_string(&p).unwrap();
        let order = ["\"type\"", "\"spec_version\"", "\"id\"", "\"created\"", "\"modified\"", "\"labels\""];
        let positions: Vec<usize> = order.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }
}
