//! Claim maps and merging.
//!
//! Three claim sources feed an assertion: the derived identity, the claims
//! supplied on the request and a process-wide default set. Request claims and
//! defaults are alternatives, never combined: defaults apply only when the
//! request supplied no claims at all.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::identity::User;

/// A serialized claims payload that is not a JSON object.
#[derive(Debug, Error)]
#[error("claims must be a JSON object: {reason}")]
pub struct InvalidClaims {
    /// Why the payload was rejected.
    pub reason: String,
}

/// Ordered mapping from claim name to an opaque JSON value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimMap(Map<String, Value>);

impl ClaimMap {
    /// Creates an empty claim map.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parses a serialized claims payload.
    ///
    /// Blank input is an empty map. Anything else must be a JSON object.
    pub fn parse(raw: &str) -> Result<Self, InvalidClaims> {
        if raw.trim().is_empty() {
            return Ok(Self::new());
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(InvalidClaims {
                reason: format!("expected an object, found {}", json_kind(&other)),
            }),
            Err(e) => Err(InvalidClaims {
                reason: e.to_string(),
            }),
        }
    }

    /// Inserts or replaces a claim.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Copies every claim of `other` over this map; `other` wins on collision.
    pub fn overlay(&mut self, other: &ClaimMap) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Returns the value of a claim.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns true if there are no claims.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of claims.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over claims in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ClaimMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Claims handed to the assertion signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionClaims {
    /// Identity fields overlaid with request or default claims.
    pub raw: ClaimMap,
    /// Assertion-level email; always the authenticated user's address.
    pub email: String,
}

/// Layers claim sources for an assertion.
#[derive(Debug, Clone, Default)]
pub struct ClaimMerger {
    defaults: Option<ClaimMap>,
}

impl ClaimMerger {
    /// Creates a merger with an optional process-wide default claim set.
    #[must_use]
    pub fn new(defaults: Option<ClaimMap>) -> Self {
        Self { defaults }
    }

    /// Returns the configured default claims.
    #[must_use]
    pub fn defaults(&self) -> Option<&ClaimMap> {
        self.defaults.as_ref()
    }

    /// Merges the identity with the request claims, or the defaults when the
    /// request supplied none.
    #[must_use]
    pub fn merge(&self, user: &User, request_claims: &ClaimMap) -> AssertionClaims {
        let mut raw = user.to_claims();

        if !request_claims.is_empty() {
            raw.overlay(request_claims);
        } else if let Some(defaults) = &self.defaults {
            raw.overlay(defaults);
        }

        AssertionClaims {
            raw,
            email: user.email.clone(),
        }
    }
}
