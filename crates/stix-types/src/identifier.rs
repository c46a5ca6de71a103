use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::{Uuid, Variant};

use crate::error::{TypeError, TypeResult};

/// Separator between the object type and the UUID in an identifier.
pub const SEPARATOR: &str = "--";

/// Object identifier of the form `{object-type}--{uuid4}`.
///
/// The UUID part is always a lowercase, hyphenated version-4 UUID. The type
/// prefix is whatever type the identifier was generated for, so
/// [`Identifier::object_type`] always names the object that owns it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Generate a fresh identifier for `object_type` from the thread RNG.
    pub fn new(object_type: &str) -> Self {
        new_identifier(object_type)
    }

    /// Generate a fresh identifier drawing 16 bytes from `rng`.
    pub fn generate<R: RngCore + ?Sized>(object_type: &str, rng: &mut R) -> Self {
        new_identifier_with(object_type, rng)
    }

    /// Parse an existing identifier, validating the wire format.
    pub fn parse(s: &str) -> TypeResult<Self> {
        let invalid = |reason: &str| TypeError::InvalidIdentifier(format!("{s:?}: {reason}"));

        let (object_type, uuid_part) = s
            .rsplit_once(SEPARATOR)
            .ok_or_else(|| invalid("missing `--` separator"))?;
        if object_type.is_empty() {
            return Err(invalid("empty object type"));
        }
        if !object_type
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(invalid("object type must match [a-z0-9-]+"));
        }

        let uuid = Uuid::try_parse(uuid_part).map_err(|e| invalid(&e.to_string()))?;
        if uuid.get_version_num() != 4 || uuid.get_variant() != Variant::RFC4122 {
            return Err(invalid("not a version 4 UUID"));
        }
        if uuid.hyphenated().to_string() != uuid_part {
            return Err(invalid("UUID is not in canonical lowercase form"));
        }
        Ok(Self(s.to_string()))
    }

    /// The object-type prefix before `--`.
    pub fn object_type(&self) -> &str {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(object_type, _)| object_type)
            .unwrap_or_default()
    }

    /// The UUID part, if it parses.
    pub fn uuid(&self) -> Option<Uuid> {
        let (_, uuid_part) = self.0.rsplit_once(SEPARATOR)?;
        Uuid::try_parse(uuid_part).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

/// Generate `{object_type}--{uuid4}` from the thread RNG.
pub fn new_identifier(object_type: &str) -> Identifier {
    new_identifier_with(object_type, &mut rand::thread_rng())
}

/// Generate `{object_type}--{uuid4}` from an injected random source.
///
/// The UUID is built from 16 random bytes with the version and variant bits
/// forced, so any `RngCore` works, including a seeded one in tests.
pub fn new_identifier_with<R: RngCore + ?Sized>(object_type: &str, rng: &mut R) -> Identifier {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    Identifier(format!("{object_type}{SEPARATOR}{}", uuid.hyphenated()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn prefix_matches_object_type() {
        let id = Identifier::new("indicator");
        assert_eq!(id.object_type(), "indicator");
        assert!(id.as_str().starts_with("indicator--"));
    }

    #[test]
    fn generated_ids_parse() {
        let id = Identifier::new("attack-pattern");
        let parsed = Identifier::parse(id.as_str()).unwrap();
        assert_eq!(parsed, id);
        assert_eq!(parsed.uuid().unwrap().get_version_num(), 4);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            Identifier::generate("campaign", &mut a),
            Identifier::generate("campaign", &mut b)
        );
    }

    #[test]
    fn ten_thousand_campaign_ids_are_unique() {
        let ids: HashSet<Identifier> = (0..10_000).map(|_| new_identifier("campaign")).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn parse_accepts_dashes_in_type() {
        let id = Identifier::parse("x-custom-thing--2f6e5a0c-64f1-4b8a-9d2e-3c6d1f2a7b90").unwrap();
        assert_eq!(id.object_type(), "x-custom-thing");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert!(Identifier::parse("indicator-2f6e5a0c-64f1-4b8a-9d2e-3c6d1f2a7b90").is_err());
    }

    #[test]
    fn parse_rejects_uppercase() {
        assert!(Identifier::parse("indicator--2F6E5A0C-64F1-4B8A-9D2E-3C6D1F2A7B90").is_err());
        assert!(Identifier::parse("Indicator--2f6e5a0c-64f1-4b8a-9d2e-3c6d1f2a7b90").is_err());
    }

    #[test]
    fn parse_rejects_non_v4() {
        // version nibble is 1
        assert!(Identifier::parse("indicator--2f6e5a0c-64f1-1b8a-9d2e-3c6d1f2a7b90").is_err());
        // variant nibble is c
        assert!(Identifier::parse("indicator--2f6e5a0c-64f1-4b8a-cd2e-3c6d1f2a7b90").is_err());
    }

    #[test]
    fn parse_rejects_unhyphenated_uuid() {
        assert!(Identifier::parse("indicator--2f6e5a0c64f14b8a9d2e3c6d1f2a7b90").is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let id = Identifier::new("malware");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
