//! Opaque global identifiers.
//!
//! An [`Iri`] is the only identity the literal layer knows about: an
//! immutable, globally unique name compared by exact string identity. How an
//! IRI maps to a prefix or a display label is the resolver's business, not
//! ours.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque global identifier for an ontology entity or datatype.
///
/// Equality and ordering are byte-exact on the underlying string; no
/// normalization is performed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self(iri.to_string())
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_equality_is_exact() {
        let a = Iri::new("http://example.org/Thing");
        let b = Iri::from("http://example.org/Thing");
        let c = Iri::new("http://example.org/thing");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn iri_serializes_as_plain_string() {
        let iri = Iri::new("http://example.org/Thing");
        let json = serde_json::to_string(&iri).unwrap();
        assert_eq!(json, "\"http://example.org/Thing\"");
    }
}
