//! The literal codec: primitive scalars in, canonical typed literals out.
//!
//! [`TypedLiteral`] is the canonical representation of a scalar query result:
//! a datatype tag, the exact lexical form, and (for numeric kinds) the value
//! widened to `f64` for comparison and lattice purposes. The lexical form is
//! authoritative for display and equality; the widened value never leaks into
//! rendering, so a byte literal `127` never turns into `127.0` on screen.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::datatype::Datatype;
use crate::iri::Iri;
use crate::temporal::{XsdDate, XsdDateTime, XsdDuration, XsdTime};

#[derive(Debug, Error)]
pub enum LiteralError {
    #[error("lexical form `{lexical_form}` is not valid for {datatype}: {reason}")]
    Malformed {
        datatype: Datatype,
        lexical_form: String,
        reason: String,
    },
    #[error("no numeric datatype can represent non-finite value {value}")]
    NonFinite { value: f64 },
}

// ============================================================================
// Primitive inputs
// ============================================================================

/// A primitive scalar offered for encoding.
///
/// One variant per supported host kind; callers usually go through the `From`
/// impls rather than naming variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Uri(Url),
    Time(XsdTime),
    Date(XsdDate),
    DateTime(XsdDateTime),
    Duration(XsdDuration),
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Boolean(value)
    }
}

impl From<i8> for Primitive {
    fn from(value: i8) -> Self {
        Primitive::Byte(value)
    }
}

impl From<i16> for Primitive {
    fn from(value: i16) -> Self {
        Primitive::Short(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Int(value)
    }
}

impl From<i64> for Primitive {
    fn from(value: i64) -> Self {
        Primitive::Long(value)
    }
}

impl From<f32> for Primitive {
    fn from(value: f32) -> Self {
        Primitive::Float(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Double(value)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::String(value)
    }
}

impl From<Url> for Primitive {
    fn from(value: Url) -> Self {
        Primitive::Uri(value)
    }
}

impl From<XsdTime> for Primitive {
    fn from(value: XsdTime) -> Self {
        Primitive::Time(value)
    }
}

impl From<XsdDate> for Primitive {
    fn from(value: XsdDate) -> Self {
        Primitive::Date(value)
    }
}

impl From<XsdDateTime> for Primitive {
    fn from(value: XsdDateTime) -> Self {
        Primitive::DateTime(value)
    }
}

impl From<XsdDuration> for Primitive {
    fn from(value: XsdDuration) -> Self {
        Primitive::Duration(value)
    }
}

// ============================================================================
// Typed literals
// ============================================================================

/// A scalar value tagged with its datatype and canonical lexical form.
///
/// Invariants:
/// - `numeric_value` is `Some` iff the datatype is one of the six numeric
///   kinds, and the lexical form parses back to a value equal to it under
///   that datatype's own rules.
/// - Equality and hashing use `(datatype, lexical_form)` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypedLiteral {
    datatype: Datatype,
    lexical_form: String,
    numeric_value: Option<f64>,
}

impl PartialEq for TypedLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.datatype == other.datatype && self.lexical_form == other.lexical_form
    }
}

impl Eq for TypedLiteral {}

impl std::hash::Hash for TypedLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.datatype.hash(state);
        self.lexical_form.hash(state);
    }
}

fn float_lexical(value: f32) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f32::INFINITY {
        "INF".to_string()
    } else if value == f32::NEG_INFINITY {
        "-INF".to_string()
    } else {
        format!("{value}")
    }
}

fn double_lexical(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        format!("{value}")
    }
}

fn parse_float(lexical: &str) -> Result<f32, std::num::ParseFloatError> {
    match lexical {
        "INF" | "+INF" => Ok(f32::INFINITY),
        "-INF" => Ok(f32::NEG_INFINITY),
        _ => lexical.parse(),
    }
}

fn parse_double(lexical: &str) -> Result<f64, std::num::ParseFloatError> {
    match lexical {
        "INF" | "+INF" => Ok(f64::INFINITY),
        "-INF" => Ok(f64::NEG_INFINITY),
        _ => lexical.parse(),
    }
}

impl TypedLiteral {
    fn new(datatype: Datatype, lexical_form: String, numeric_value: Option<f64>) -> Self {
        Self {
            datatype,
            lexical_form,
            numeric_value,
        }
    }

    /// Construct a numeric literal whose lexical form has already been
    /// rendered under `datatype`'s rules. Used by the widening lattice.
    pub(crate) fn numeric(datatype: Datatype, lexical_form: String, numeric_value: f64) -> Self {
        Self::new(datatype, lexical_form, Some(numeric_value))
    }

    /// Encode a primitive scalar as a canonical typed literal.
    ///
    /// Total: every host-typed input has a canonical lexical form.
    pub fn encode(primitive: impl Into<Primitive>) -> Self {
        match primitive.into() {
            Primitive::Boolean(value) => {
                Self::new(Datatype::Boolean, value.to_string(), None)
            }
            Primitive::Byte(value) => {
                Self::new(Datatype::Byte, value.to_string(), Some(value as f64))
            }
            Primitive::Short(value) => {
                Self::new(Datatype::Short, value.to_string(), Some(value as f64))
            }
            Primitive::Int(value) => {
                Self::new(Datatype::Int, value.to_string(), Some(value as f64))
            }
            Primitive::Long(value) => {
                Self::new(Datatype::Long, value.to_string(), Some(value as f64))
            }
            Primitive::Float(value) => {
                Self::new(Datatype::Float, float_lexical(value), Some(value as f64))
            }
            Primitive::Double(value) => {
                Self::new(Datatype::Double, double_lexical(value), Some(value))
            }
            Primitive::String(value) => Self::new(Datatype::String, value, None),
            Primitive::Uri(value) => Self::new(Datatype::AnyUri, value.to_string(), None),
            Primitive::Time(value) => Self::new(Datatype::Time, value.to_string(), None),
            Primitive::Date(value) => Self::new(Datatype::Date, value.to_string(), None),
            Primitive::DateTime(value) => {
                Self::new(Datatype::DateTime, value.to_string(), None)
            }
            Primitive::Duration(value) => {
                Self::new(Datatype::Duration, value.to_string(), None)
            }
        }
    }

    /// Decode a literal that arrives already typed by a datatype IRI.
    ///
    /// Built-in datatypes validate the lexical form against their grammar and
    /// fail with [`LiteralError::Malformed`] when it does not parse. Unknown
    /// datatypes pass through untouched as [`Datatype::Other`].
    pub fn decode(datatype_iri: &Iri, lexical_form: &str) -> Result<Self, LiteralError> {
        let datatype = Datatype::from_iri(datatype_iri);
        let malformed = |reason: String| LiteralError::Malformed {
            datatype: Datatype::from_iri(datatype_iri),
            lexical_form: lexical_form.to_string(),
            reason,
        };

        let numeric_value = match &datatype {
            Datatype::Byte => Some(
                lexical_form
                    .parse::<i8>()
                    .map_err(|e| malformed(e.to_string()))? as f64,
            ),
            Datatype::Short => Some(
                lexical_form
                    .parse::<i16>()
                    .map_err(|e| malformed(e.to_string()))? as f64,
            ),
            Datatype::Int => Some(
                lexical_form
                    .parse::<i32>()
                    .map_err(|e| malformed(e.to_string()))? as f64,
            ),
            Datatype::Long => Some(
                lexical_form
                    .parse::<i64>()
                    .map_err(|e| malformed(e.to_string()))? as f64,
            ),
            Datatype::Float => Some(
                parse_float(lexical_form).map_err(|e| malformed(e.to_string()))? as f64,
            ),
            Datatype::Double => {
                Some(parse_double(lexical_form).map_err(|e| malformed(e.to_string()))?)
            }
            Datatype::Boolean => match lexical_form {
                "true" | "false" | "1" | "0" => None,
                _ => return Err(malformed("expected true/false/1/0".to_string())),
            },
            Datatype::String => None,
            Datatype::AnyUri => {
                Url::parse(lexical_form).map_err(|e| malformed(e.to_string()))?;
                None
            }
            Datatype::Time => {
                lexical_form
                    .parse::<XsdTime>()
                    .map_err(|e| malformed(e.to_string()))?;
                None
            }
            Datatype::Date => {
                lexical_form
                    .parse::<XsdDate>()
                    .map_err(|e| malformed(e.to_string()))?;
                None
            }
            Datatype::DateTime => {
                lexical_form
                    .parse::<XsdDateTime>()
                    .map_err(|e| malformed(e.to_string()))?;
                None
            }
            Datatype::Duration => {
                lexical_form
                    .parse::<XsdDuration>()
                    .map_err(|e| malformed(e.to_string()))?;
                None
            }
            Datatype::Other(_) => None,
        };

        Ok(Self::new(datatype, lexical_form.to_string(), numeric_value))
    }

    pub fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    /// The value widened to double precision; `Some` iff the datatype is
    /// numeric.
    pub fn numeric_value(&self) -> Option<f64> {
        self.numeric_value
    }

    pub fn is_numeric(&self) -> bool {
        self.datatype.is_numeric()
    }

    pub fn is_boolean(&self) -> bool {
        self.datatype == Datatype::Boolean
    }

    pub fn is_string(&self) -> bool {
        self.datatype == Datatype::String
    }

    pub fn is_uri(&self) -> bool {
        self.datatype == Datatype::AnyUri
    }

    pub fn is_temporal(&self) -> bool {
        self.datatype.is_temporal()
    }

    pub fn as_bool(&self) -> Option<bool> {
        if self.is_boolean() {
            Some(matches!(self.lexical_form.as_str(), "true" | "1"))
        } else {
            None
        }
    }

    /// The exact integer value for the integer datatypes.
    pub fn as_i64(&self) -> Option<i64> {
        match self.datatype {
            Datatype::Byte | Datatype::Short | Datatype::Int | Datatype::Long => {
                self.lexical_form.parse().ok()
            }
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.numeric_value
    }
}

impl From<Primitive> for TypedLiteral {
    fn from(primitive: Primitive) -> Self {
        Self::encode(primitive)
    }
}

impl fmt::Display for TypedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"^^{}", self.lexical_form, self.datatype)
    }
}
