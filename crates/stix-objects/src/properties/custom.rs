use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use stix_types::{TypeError, TypeResult};

/// Prefix every custom property name starts with.
pub const CUSTOM_PREFIX: &str = "x_";

/// Producer-defined `x_*` properties, kept so they survive a decode and
/// re-encode. Keys without the prefix are not collected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomProperties(BTreeMap<String, Value>);

impl CustomProperties {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Set a custom property. The name must start with `x_` and use only
    /// `a-z`, `0-9` and `_`.
    pub fn set(&mut self, name: &str, value: Value) -> TypeResult<()> {
        if !is_custom_name(name) {
            return Err(TypeError::InvalidPropertyName(name.to_string()));
        }
        self.0.insert(name.to_string(), value);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_custom_name(name: &str) -> bool {
    name.len() > CUSTOM_PREFIX.len()
        && name.starts_with(CUSTOM_PREFIX)
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

// Embedded with `flatten`, this sees every key of the enclosing object, so it
// keeps only the prefixed ones.
impl<'de> Deserialize<'de> for CustomProperties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let all = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self(
            all.into_iter()
                .filter(|(name, _)| name.starts_with(CUSTOM_PREFIX))
                .collect(),
        ))
    }
}
