use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stix_types::Identifier;

/// Pointer to information held outside STIX, such as a CVE entry or a report URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReference {
    pub source_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Hash algorithm name to hex digest of the content at `url`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hashes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub external_id: String,
}

impl ExternalReference {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Default::default()
        }
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_hash(mut self, algorithm: impl Into<String>, digest: impl Into<String>) -> Self {
        self.hashes.insert(algorithm.into(), digest.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReferencesProperty {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    external_references: Vec<ExternalReference>,
}

impl ExternalReferencesProperty {
    pub fn get(&self) -> &[ExternalReference] {
        &self.external_references
    }

    pub fn add(&mut self, reference: ExternalReference) {
        self.external_references.push(reference);
    }
}

/// Identifiers of marking definitions that apply to the whole object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMarkingRefsProperty {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    object_marking_refs: Vec<Identifier>,
}

impl ObjectMarkingRefsProperty {
    pub fn get(&self) -> &[Identifier] {
        &self.object_marking_refs
    }

    pub fn add(&mut self, marking: Identifier) {
        self.object_marking_refs.push(marking);
    }
}

/// A marking definition applied to selected parts of an object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GranularMarking {
    pub marking_ref: Identifier,
    /// Selector paths into the object, e.g. `"description"` or `"labels.[0]"`.
    pub selectors: Vec<String>,
}

impl GranularMarking {
    pub fn new(marking_ref: Identifier, selectors: Vec<String>) -> Self {
        Self {
            marking_ref,
            selectors,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GranularMarkingsProperty {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    granular_markings: Vec<GranularMarking>,
}

impl GranularMarkingsProperty {
    pub fn get(&self) -> &[GranularMarking] {
        &self.granular_markings
    }

    pub fn add(&mut self, marking: GranularMarking) {
        self.granular_markings.push(marking);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_reference_omits_empty_fields() {
        let reference = ExternalReference::new("capec").with_external_id("CAPEC-163");
        assert_eq!(
            serde_json::to_string(&reference).unwrap(),
            r#"{"source_name":"capec","external_id":"CAPEC-163"}"#
        );
    }

    #[test]
    fn external_reference_hashes_are_sorted() {
        let reference = ExternalReference::new("report")
            .with_hash("SHA-256", "aa")
            .with_hash("MD5", "bb");
        let json = serde_json::to_string(&reference).unwrap();
        assert!(json.find("MD5").unwrap() < json.find("SHA-256").unwrap());
    }

    #[test]
    fn granular_markings_serialize_in_order() {
        let marking = Identifier::new("marking-definition");
        let mut p = GranularMarkingsProperty::default();
        p.add(GranularMarking::new(marking.clone(), vec!["description".into()]));
        p.add(GranularMarking::new(marking, vec!["name".into()]));
        assert_eq!(p.get()[0].selectors, ["description"]);
        assert_eq!(p.get()[1].selectors, ["name"]);
    }

    #[test]
    fn empty_marking_refs_are_omitted() {
        let p = ObjectMarkingRefsProperty::default();
        assert_eq!(serde_json::to_string(&p).unwrap(), "{}");
    }
}
