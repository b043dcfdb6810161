//! The result-value factory.
//!
//! One constructor per [`ResultValue`] variant. Entity constructors resolve
//! the identifier through the wrapped [`IriResolver`] and fail hard when
//! either display name is missing; expression constructors delegate to the
//! resolver's rendering and always succeed; literal constructors go through
//! the literal codec and, for numeric folding, the widening lattice.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use rulegraph_literal::{
    least_narrow, narrowest_for, Iri, LiteralError, Primitive, TypedLiteral,
};

use crate::resolver::{AsIri, IriResolver, ResolvedIdentity};
use crate::value::{LiteralResultValue, ResultValue};

/// Which display name the resolver failed to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingName {
    PrefixedName,
    ShortForm,
}

impl fmt::Display for MissingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingName::PrefixedName => write!(f, "prefixed name"),
            MissingName::ShortForm => write!(f, "short form"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ValueError {
    /// The identifier has no human display name. The caller must treat the
    /// identifier as invalid; the factory never substitutes the raw IRI.
    #[error("could not resolve a {missing} for IRI {iri}")]
    UnresolvedIri { iri: Iri, missing: MissingName },

    /// A lexical form was rejected by its declared built-in datatype.
    #[error("malformed literal: {0}")]
    MalformedLiteral(#[source] LiteralError),

    /// A non-finite value was offered to the numeric widening lattice.
    #[error("no numeric datatype can represent non-finite value {value}")]
    NonFiniteNumeric { value: f64 },
}

impl From<LiteralError> for ValueError {
    fn from(error: LiteralError) -> Self {
        match error {
            LiteralError::NonFinite { value } => ValueError::NonFiniteNumeric { value },
            malformed @ LiteralError::Malformed { .. } => {
                ValueError::MalformedLiteral(malformed)
            }
        }
    }
}

/// Produces display-ready result values.
///
/// Stateless apart from the resolver it wraps; safe to share across threads
/// whenever the resolver is `Sync`.
pub struct ResultValueFactory<R> {
    resolver: R,
}

impl<R: IriResolver> ResultValueFactory<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    fn require(
        &self,
        iri: &Iri,
        missing: MissingName,
        name: Option<String>,
    ) -> Result<String, ValueError> {
        match name.filter(|name| !name.is_empty()) {
            Some(name) => Ok(name),
            None => {
                debug!(%iri, %missing, "identifier did not resolve to a display name");
                Err(ValueError::UnresolvedIri {
                    iri: iri.clone(),
                    missing,
                })
            }
        }
    }

    fn resolve_identity(&self, iri: &Iri) -> Result<ResolvedIdentity, ValueError> {
        let prefixed_name = self.require(
            iri,
            MissingName::PrefixedName,
            self.resolver.prefixed_name(iri),
        )?;
        let short_form =
            self.require(iri, MissingName::ShortForm, self.resolver.short_form(iri))?;
        Ok(ResolvedIdentity {
            iri: iri.clone(),
            prefixed_name,
            short_form,
        })
    }

    // ------------------------------------------------------------------
    // Entity values
    // ------------------------------------------------------------------

    pub fn class_value(&self, argument: &impl AsIri) -> Result<ResultValue, ValueError> {
        Ok(ResultValue::Class(self.resolve_identity(argument.as_iri())?))
    }

    pub fn named_individual_value(
        &self,
        argument: &impl AsIri,
    ) -> Result<ResultValue, ValueError> {
        Ok(ResultValue::NamedIndividual(
            self.resolve_identity(argument.as_iri())?,
        ))
    }

    pub fn object_property_value(
        &self,
        argument: &impl AsIri,
    ) -> Result<ResultValue, ValueError> {
        Ok(ResultValue::ObjectProperty(
            self.resolve_identity(argument.as_iri())?,
        ))
    }

    pub fn data_property_value(&self, argument: &impl AsIri) -> Result<ResultValue, ValueError> {
        Ok(ResultValue::DataProperty(
            self.resolve_identity(argument.as_iri())?,
        ))
    }

    pub fn annotation_property_value(
        &self,
        argument: &impl AsIri,
    ) -> Result<ResultValue, ValueError> {
        Ok(ResultValue::AnnotationProperty(
            self.resolve_identity(argument.as_iri())?,
        ))
    }

    pub fn datatype_value(&self, argument: &impl AsIri) -> Result<ResultValue, ValueError> {
        Ok(ResultValue::Datatype(
            self.resolve_identity(argument.as_iri())?,
        ))
    }

    // ------------------------------------------------------------------
    // Expression values (rendering is total over valid expressions)
    // ------------------------------------------------------------------

    pub fn class_expression_value(&self, expression: &R::ClassExpression) -> ResultValue {
        ResultValue::ClassExpression {
            rendering: self.resolver.render_class_expression(expression),
        }
    }

    pub fn object_property_expression_value(
        &self,
        expression: &R::ObjectPropertyExpression,
    ) -> ResultValue {
        ResultValue::ObjectPropertyExpression {
            rendering: self.resolver.render_object_property_expression(expression),
        }
    }

    pub fn data_property_expression_value(
        &self,
        expression: &R::DataPropertyExpression,
    ) -> ResultValue {
        ResultValue::DataPropertyExpression {
            rendering: self.resolver.render_data_property_expression(expression),
        }
    }

    // ------------------------------------------------------------------
    // Literal values
    // ------------------------------------------------------------------

    /// Encode a primitive scalar. Total for every supported kind; the
    /// datatype display name comes from the built-in vocabulary.
    pub fn literal_value(&self, primitive: impl Into<Primitive>) -> ResultValue {
        ResultValue::Literal(Self::wrap_builtin(TypedLiteral::encode(primitive)))
    }

    /// Wrap a literal that arrives already typed by a datatype IRI.
    ///
    /// The datatype's prefixed name is resolved through the resolver so that
    /// non-built-in datatypes still display properly; an unresolvable
    /// datatype IRI is an error, same as for entities.
    pub fn typed_literal_value(
        &self,
        datatype_iri: &Iri,
        lexical_form: &str,
    ) -> Result<ResultValue, ValueError> {
        let literal = TypedLiteral::decode(datatype_iri, lexical_form)?;
        let datatype_prefixed_name = self.require(
            datatype_iri,
            MissingName::PrefixedName,
            self.resolver.prefixed_name(datatype_iri),
        )?;
        Ok(ResultValue::Literal(LiteralResultValue::new(
            literal,
            datatype_prefixed_name,
        )))
    }

    /// Fold a new numeric value into a column of existing literals,
    /// producing a literal typed at the least narrow datatype that holds
    /// both the value and every numeric sibling exactly.
    ///
    /// `existing` is read-only; non-numeric entries are ignored.
    pub fn least_narrow_numeric_literal(
        &self,
        value: f64,
        existing: &[LiteralResultValue],
    ) -> Result<ResultValue, ValueError> {
        let narrowest = narrowest_for(value)?;
        let numeric_siblings = existing
            .iter()
            .map(LiteralResultValue::literal)
            .filter(|literal| literal.is_numeric());
        let literal = least_narrow(value, numeric_siblings)?;
        if literal.datatype() != &narrowest {
            debug!(
                value,
                narrowest = %narrowest,
                widened = %literal.datatype(),
                "numeric literal widened to stay consistent with sibling column types"
            );
        }
        Ok(ResultValue::Literal(Self::wrap_builtin(literal)))
    }

    fn wrap_builtin(literal: TypedLiteral) -> LiteralResultValue {
        let datatype_prefixed_name = literal
            .datatype()
            .prefixed_name()
            .map(str::to_string)
            .unwrap_or_else(|| literal.datatype().iri().to_string());
        LiteralResultValue::new(literal, datatype_prefixed_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulegraph_literal::{vocab, Datatype};
    use std::collections::HashMap;

    /// A fixed-table resolver; expressions are plain strings echoed back.
    struct TableResolver {
        prefixed: HashMap<String, String>,
        short: HashMap<String, String>,
    }

    impl TableResolver {
        fn new() -> Self {
            let mut resolver = Self {
                prefixed: HashMap::new(),
                short: HashMap::new(),
            };
            resolver.register("http://example.org/vehicles#Car", "veh:Car", "Car");
            resolver.register("http://example.org/vehicles#hasWheel", "veh:hasWheel", "hasWheel");
            resolver.register(vocab::XSD_INT, "xsd:int", "int");
            resolver.register(
                "http://example.org/units#celsius",
                "unit:celsius",
                "celsius",
            );
            resolver
        }

        fn register(&mut self, iri: &str, prefixed: &str, short: &str) {
            self.prefixed.insert(iri.to_string(), prefixed.to_string());
            self.short.insert(iri.to_string(), short.to_string());
        }
    }

    impl IriResolver for TableResolver {
        type ClassExpression = String;
        type ObjectPropertyExpression = String;
        type DataPropertyExpression = String;

        fn prefixed_name(&self, iri: &Iri) -> Option<String> {
            self.prefixed.get(iri.as_str()).cloned()
        }

        fn short_form(&self, iri: &Iri) -> Option<String> {
            self.short.get(iri.as_str()).cloned()
        }

        fn render_class_expression(&self, expression: &String) -> String {
            expression.clone()
        }

        fn render_object_property_expression(&self, expression: &String) -> String {
            expression.clone()
        }

        fn render_data_property_expression(&self, expression: &String) -> String {
            expression.clone()
        }
    }

    fn factory() -> ResultValueFactory<TableResolver> {
        ResultValueFactory::new(TableResolver::new())
    }

    #[test]
    fn entity_values_carry_both_resolver_outputs_exactly() {
        let factory = factory();
        let value = factory
            .class_value(&Iri::new("http://example.org/vehicles#Car"))
            .unwrap();
        let identity = value.as_identity().unwrap();
        assert_eq!(identity.prefixed_name, "veh:Car");
        assert_eq!(identity.short_form, "Car");
        assert_eq!(identity.iri.as_str(), "http://example.org/vehicles#Car");
    }

    #[test]
    fn every_entity_constructor_fails_for_unknown_iris() {
        let factory = factory();
        let unknown = Iri::new("http://example.org/unknown#Thing");
        let constructors: [&dyn Fn(&Iri) -> Result<ResultValue, ValueError>; 6] = [
            &|iri| factory.class_value(iri),
            &|iri| factory.named_individual_value(iri),
            &|iri| factory.object_property_value(iri),
            &|iri| factory.data_property_value(iri),
            &|iri| factory.annotation_property_value(iri),
            &|iri| factory.datatype_value(iri),
        ];
        for construct in constructors {
            assert!(matches!(
                construct(&unknown),
                Err(ValueError::UnresolvedIri { .. })
            ));
        }
    }

    #[test]
    fn missing_short_form_alone_is_a_hard_failure() {
        let mut resolver = TableResolver::new();
        resolver
            .prefixed
            .insert("http://example.org/half".to_string(), "ex:half".to_string());
        let factory = ResultValueFactory::new(resolver);
        let result = factory.class_value(&Iri::new("http://example.org/half"));
        assert!(matches!(
            result,
            Err(ValueError::UnresolvedIri {
                missing: MissingName::ShortForm,
                ..
            })
        ));
    }

    #[test]
    fn empty_resolver_output_counts_as_unresolved() {
        let mut resolver = TableResolver::new();
        resolver.register("http://example.org/blank", "", "blank");
        let factory = ResultValueFactory::new(resolver);
        let result = factory.class_value(&Iri::new("http://example.org/blank"));
        assert!(matches!(
            result,
            Err(ValueError::UnresolvedIri {
                missing: MissingName::PrefixedName,
                ..
            })
        ));
    }

    #[test]
    fn expression_values_echo_the_resolver_rendering() {
        let factory = factory();
        let value = factory.class_expression_value(&"hasWheel some Wheel".to_string());
        assert_eq!(
            value,
            ResultValue::ClassExpression {
                rendering: "hasWheel some Wheel".to_string()
            }
        );
    }

    #[test]
    fn literal_value_is_total_over_primitives() {
        let factory = factory();
        let value = factory.literal_value(42i32);
        let literal = value.as_literal().unwrap();
        assert_eq!(literal.literal().datatype(), &Datatype::Int);
        assert_eq!(literal.literal().lexical_form(), "42");
        assert_eq!(literal.datatype_prefixed_name(), "xsd:int");
    }

    #[test]
    fn typed_literal_value_resolves_the_datatype_display_name() {
        let factory = factory();
        let value = factory
            .typed_literal_value(&Iri::new("http://example.org/units#celsius"), "21.5")
            .unwrap();
        let literal = value.as_literal().unwrap();
        assert_eq!(literal.datatype_prefixed_name(), "unit:celsius");
        assert!(matches!(
            literal.literal().datatype(),
            Datatype::Other(_)
        ));
    }

    #[test]
    fn typed_literal_value_fails_for_unresolvable_datatype_iris() {
        let factory = factory();
        let result =
            factory.typed_literal_value(&Iri::new("http://example.org/units#kelvin"), "300");
        assert!(matches!(result, Err(ValueError::UnresolvedIri { .. })));
    }

    #[test]
    fn typed_literal_value_rejects_malformed_builtin_forms() {
        let factory = factory();
        let result = factory.typed_literal_value(&Iri::from(vocab::XSD_INT), "not-a-number");
        assert!(matches!(result, Err(ValueError::MalformedLiteral(_))));
    }

    #[test]
    fn least_narrow_literal_starts_at_byte_for_empty_columns() {
        let factory = factory();
        let value = factory.least_narrow_numeric_literal(5.0, &[]).unwrap();
        let literal = value.as_literal().unwrap();
        assert_eq!(literal.literal().datatype(), &Datatype::Byte);
        assert_eq!(literal.literal().lexical_form(), "5");
        assert_eq!(literal.datatype_prefixed_name(), "xsd:byte");
    }

    #[test]
    fn least_narrow_literal_widens_against_the_column() {
        let factory = factory();
        let existing = vec![
            factory.literal_value(5i8),
            factory.literal_value("ignored"),
        ];
        let column: Vec<LiteralResultValue> = existing
            .iter()
            .filter_map(|value| value.as_literal().cloned())
            .collect();
        let value = factory
            .least_narrow_numeric_literal(70000.0, &column)
            .unwrap();
        let literal = value.as_literal().unwrap();
        assert_eq!(literal.literal().datatype(), &Datatype::Int);
        assert_eq!(literal.literal().lexical_form(), "70000");
    }

    #[test]
    fn least_narrow_literal_rejects_non_finite_values() {
        let factory = factory();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                factory.least_narrow_numeric_literal(value, &[]),
                Err(ValueError::NonFiniteNumeric { .. })
            ));
        }
    }
}
