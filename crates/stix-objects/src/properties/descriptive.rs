use serde::{Deserialize, Serialize};

/// Human-readable name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
}

impl NameProperty {
    pub fn get(&self) -> &str {
        &self.name
    }

    pub fn set(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Free-text description. Setting it to `""` removes it from the output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
}

impl DescriptionProperty {
    pub fn get(&self) -> &str {
        &self.description
    }

    pub fn set(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

/// Alternative names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasesProperty {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
}

impl AliasesProperty {
    pub fn get(&self) -> &[String] {
        &self.aliases
    }

    pub fn add(&mut self, alias: impl Into<String>) {
        self.aliases.push(alias.into());
    }

    pub fn set(&mut self, aliases: Vec<String>) {
        self.aliases = aliases;
    }
}

/// The goal a campaign is pursuing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    objective: String,
}

impl ObjectiveProperty {
    pub fn get(&self) -> &str {
        &self.objective
    }

    pub fn set(&mut self, objective: impl Into<String>) {
        self.objective = objective.into();
    }
}

/// Open-vocabulary labels, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelsProperty {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    labels: Vec<String>,
}

impl LabelsProperty {
    pub fn get(&self) -> &[String] {
        &self.labels
    }

    pub fn add(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    pub fn set(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }
}

/// Producer confidence, 0 to 100.
///
/// Zero is the unset value and is not serialized. No range check is made.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceProperty {
    #[serde(default, skip_serializing_if = "is_zero")]
    confidence: u8,
}

impl ConfidenceProperty {
    pub fn get(&self) -> u8 {
        self.confidence
    }

    pub fn set(&mut self, confidence: u8) {
        self.confidence = confidence;
    }
}

fn is_zero(value: &u8) -> bool {
    *value == 0
}

/// Language tag of the object's text content, e.g. `"en"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    lang: String,
}

impl LangProperty {
    pub fn get(&self) -> &str {
        &self.lang
    }

    pub fn set(&mut self, lang: impl Into<String>) {
        self.lang = lang.into();
    }
}
