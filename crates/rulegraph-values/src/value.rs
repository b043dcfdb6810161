//! The closed result-value union.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use rulegraph_literal::TypedLiteral;

use crate::resolver::ResolvedIdentity;

/// A literal result value: the canonical typed literal plus the display name
/// of its datatype.
///
/// Equality follows the literal's `(datatype, lexical form)` pair; the
/// datatype display name is presentation-only and never participates in
/// comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralResultValue {
    literal: TypedLiteral,
    datatype_prefixed_name: String,
}

impl LiteralResultValue {
    pub(crate) fn new(literal: TypedLiteral, datatype_prefixed_name: String) -> Self {
        Self {
            literal,
            datatype_prefixed_name,
        }
    }

    pub fn literal(&self) -> &TypedLiteral {
        &self.literal
    }

    pub fn datatype_prefixed_name(&self) -> &str {
        &self.datatype_prefixed_name
    }

    pub fn is_numeric(&self) -> bool {
        self.literal.is_numeric()
    }
}

impl PartialEq for LiteralResultValue {
    fn eq(&self, other: &Self) -> bool {
        self.literal == other.literal
    }
}

impl Eq for LiteralResultValue {}

impl PartialOrd for LiteralResultValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LiteralResultValue {
    /// Numeric literals order by numeric value, everything else by lexical
    /// form; numeric sorts ahead of non-numeric in mixed columns. Ties fall
    /// through to lexical form and datatype so ordering stays consistent
    /// with equality.
    fn cmp(&self, other: &Self) -> Ordering {
        let by_value = match (self.literal.numeric_value(), other.literal.numeric_value()) {
            (Some(left), Some(right)) => left.total_cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_value
            .then_with(|| self.literal.lexical_form().cmp(other.literal.lexical_form()))
            .then_with(|| {
                self.literal
                    .datatype()
                    .iri()
                    .cmp(&other.literal.datatype().iri())
            })
    }
}

impl fmt::Display for LiteralResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal.lexical_form())
    }
}

/// A single cell of query output, ready for display.
///
/// A closed union: downstream rendering matches exhaustively, so adding a
/// variant is a compile-visible event rather than a silently unhandled
/// subclass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum ResultValue {
    Class(ResolvedIdentity),
    ClassExpression { rendering: String },
    NamedIndividual(ResolvedIdentity),
    ObjectProperty(ResolvedIdentity),
    ObjectPropertyExpression { rendering: String },
    DataProperty(ResolvedIdentity),
    DataPropertyExpression { rendering: String },
    AnnotationProperty(ResolvedIdentity),
    Datatype(ResolvedIdentity),
    Literal(LiteralResultValue),
}

impl ResultValue {
    pub fn is_literal(&self) -> bool {
        matches!(self, ResultValue::Literal(_))
    }

    /// Whether this value names an ontology entity (and so carries a
    /// resolved identity).
    pub fn is_entity(&self) -> bool {
        self.as_identity().is_some()
    }

    pub fn as_identity(&self) -> Option<&ResolvedIdentity> {
        match self {
            ResultValue::Class(identity)
            | ResultValue::NamedIndividual(identity)
            | ResultValue::ObjectProperty(identity)
            | ResultValue::DataProperty(identity)
            | ResultValue::AnnotationProperty(identity)
            | ResultValue::Datatype(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&LiteralResultValue> {
        match self {
            ResultValue::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Class(identity)
            | ResultValue::NamedIndividual(identity)
            | ResultValue::ObjectProperty(identity)
            | ResultValue::DataProperty(identity)
            | ResultValue::AnnotationProperty(identity)
            | ResultValue::Datatype(identity) => write!(f, "{identity}"),
            ResultValue::ClassExpression { rendering }
            | ResultValue::ObjectPropertyExpression { rendering }
            | ResultValue::DataPropertyExpression { rendering } => write!(f, "{rendering}"),
            ResultValue::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulegraph_literal::{Iri, TypedLiteral};

    fn literal_value(literal: TypedLiteral) -> LiteralResultValue {
        let name = literal
            .datatype()
            .prefixed_name()
            .map(str::to_string)
            .unwrap_or_else(|| literal.datatype().iri().to_string());
        LiteralResultValue::new(literal, name)
    }

    #[test]
    fn numeric_literals_order_by_value_not_lexical_form() {
        let two = literal_value(TypedLiteral::encode(2i32));
        let ten = literal_value(TypedLiteral::encode(10i32));
        // Lexically "10" < "2", numerically 2 < 10.
        assert!(two < ten);
    }

    #[test]
    fn numeric_order_spans_datatypes() {
        let byte = literal_value(TypedLiteral::encode(5i8));
        let double = literal_value(TypedLiteral::encode(4.5f64));
        assert!(double < byte);
    }

    #[test]
    fn non_numeric_literals_order_lexically() {
        let apple = literal_value(TypedLiteral::encode("apple"));
        let pear = literal_value(TypedLiteral::encode("pear"));
        assert!(apple < pear);
    }

    #[test]
    fn equality_ignores_the_datatype_display_name() {
        let plain = literal_value(TypedLiteral::encode(7i32));
        let renamed = LiteralResultValue::new(TypedLiteral::encode(7i32), "other:int".to_string());
        assert_eq!(plain, renamed);
    }

    #[test]
    fn same_lexical_form_different_datatype_is_unequal_but_sorts_adjacent() {
        let byte = literal_value(TypedLiteral::encode(5i8));
        let int = literal_value(TypedLiteral::encode(5i32));
        assert_ne!(byte, int);
        assert_ne!(byte.cmp(&int), Ordering::Equal);
    }

    #[test]
    fn identity_variants_expose_their_identity() {
        let identity = ResolvedIdentity {
            iri: Iri::new("http://example.org/Person"),
            prefixed_name: "ex:Person".to_string(),
            short_form: "Person".to_string(),
        };
        let value = ResultValue::Class(identity.clone());
        assert!(value.is_entity());
        assert!(!value.is_literal());
        assert_eq!(value.as_identity(), Some(&identity));
        assert_eq!(value.to_string(), "ex:Person");
    }

    #[test]
    fn expression_variants_are_not_entities() {
        let value = ResultValue::ClassExpression {
            rendering: "hasPart some Wheel".to_string(),
        };
        assert!(!value.is_entity());
        assert_eq!(value.as_identity(), None);
        assert_eq!(value.to_string(), "hasPart some Wheel");
    }

    #[test]
    fn result_values_serialize_with_a_tag() {
        let value = ResultValue::Literal(literal_value(TypedLiteral::encode(3i32)));
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["tag"], "literal");
        let back: ResultValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }
}
