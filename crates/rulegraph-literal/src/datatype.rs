//! The closed set of built-in datatypes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::iri::Iri;
use crate::vocab;

/// Datatype tag for a typed literal.
///
/// The built-in tags cover the numeric, textual, boolean, URI, and temporal
/// kinds the codec understands natively. Anything else arriving from outside
/// (e.g. a literal already typed by the ontology layer) is preserved as
/// [`Datatype::Other`] with its IRI intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Datatype {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    Boolean,
    AnyUri,
    Time,
    Date,
    DateTime,
    Duration,
    Other(Iri),
}

impl Datatype {
    /// Map a datatype IRI to its built-in tag, falling back to `Other`.
    pub fn from_iri(iri: &Iri) -> Self {
        match iri.as_str() {
            vocab::XSD_BYTE => Datatype::Byte,
            vocab::XSD_SHORT => Datatype::Short,
            vocab::XSD_INT => Datatype::Int,
            vocab::XSD_LONG => Datatype::Long,
            vocab::XSD_FLOAT => Datatype::Float,
            vocab::XSD_DOUBLE => Datatype::Double,
            vocab::XSD_STRING => Datatype::String,
            vocab::XSD_BOOLEAN => Datatype::Boolean,
            vocab::XSD_ANY_URI => Datatype::AnyUri,
            vocab::XSD_TIME => Datatype::Time,
            vocab::XSD_DATE => Datatype::Date,
            vocab::XSD_DATE_TIME => Datatype::DateTime,
            vocab::XSD_DURATION => Datatype::Duration,
            _ => Datatype::Other(iri.clone()),
        }
    }

    /// The datatype's identifier.
    pub fn iri(&self) -> Iri {
        match self {
            Datatype::Byte => Iri::from(vocab::XSD_BYTE),
            Datatype::Short => Iri::from(vocab::XSD_SHORT),
            Datatype::Int => Iri::from(vocab::XSD_INT),
            Datatype::Long => Iri::from(vocab::XSD_LONG),
            Datatype::Float => Iri::from(vocab::XSD_FLOAT),
            Datatype::Double => Iri::from(vocab::XSD_DOUBLE),
            Datatype::String => Iri::from(vocab::XSD_STRING),
            Datatype::Boolean => Iri::from(vocab::XSD_BOOLEAN),
            Datatype::AnyUri => Iri::from(vocab::XSD_ANY_URI),
            Datatype::Time => Iri::from(vocab::XSD_TIME),
            Datatype::Date => Iri::from(vocab::XSD_DATE),
            Datatype::DateTime => Iri::from(vocab::XSD_DATE_TIME),
            Datatype::Duration => Iri::from(vocab::XSD_DURATION),
            Datatype::Other(iri) => iri.clone(),
        }
    }

    /// The `xsd:` prefixed name for built-in tags; `None` for `Other`, whose
    /// display name is the resolver's call.
    pub fn prefixed_name(&self) -> Option<&'static str> {
        match self {
            Datatype::Byte => Some("xsd:byte"),
            Datatype::Short => Some("xsd:short"),
            Datatype::Int => Some("xsd:int"),
            Datatype::Long => Some("xsd:long"),
            Datatype::Float => Some("xsd:float"),
            Datatype::Double => Some("xsd:double"),
            Datatype::String => Some("xsd:string"),
            Datatype::Boolean => Some("xsd:boolean"),
            Datatype::AnyUri => Some("xsd:anyURI"),
            Datatype::Time => Some("xsd:time"),
            Datatype::Date => Some("xsd:date"),
            Datatype::DateTime => Some("xsd:dateTime"),
            Datatype::Duration => Some("xsd:duration"),
            Datatype::Other(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Datatype::Byte
                | Datatype::Short
                | Datatype::Int
                | Datatype::Long
                | Datatype::Float
                | Datatype::Double
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Datatype::Time | Datatype::Date | Datatype::DateTime | Datatype::Duration
        )
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Datatype::Other(_))
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefixed_name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{}", self.iri()),
        }
    }
}
