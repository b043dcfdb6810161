//! The identifier resolution contract.
//!
//! Prefix management and expression rendering belong to the ontology layer;
//! the value factory only needs the narrow surface defined here. Composite
//! expressions stay opaque to this crate: they are whatever the resolver's
//! associated types say they are, and the resolver alone knows how to render
//! them.

use std::fmt;

use serde::{Deserialize, Serialize};

use rulegraph_literal::Iri;

/// Resolves opaque IRIs to human-usable names and renders composite
/// expressions to display text.
///
/// Contract:
/// - Pure and side-effect-free from the caller's perspective.
/// - `None` means the identifier is unknown to the prefix/label machinery;
///   implementations never panic for well-formed input.
/// - Rendering is total over valid expressions.
/// - Implementations shared across threads must be `Sync`; the factory adds
///   no synchronization of its own.
pub trait IriResolver {
    /// Opaque class expression type owned by the ontology layer.
    type ClassExpression;
    /// Opaque object property expression type owned by the ontology layer.
    type ObjectPropertyExpression;
    /// Opaque data property expression type owned by the ontology layer.
    type DataPropertyExpression;

    fn prefixed_name(&self, iri: &Iri) -> Option<String>;

    fn short_form(&self, iri: &Iri) -> Option<String>;

    fn render_class_expression(&self, expression: &Self::ClassExpression) -> String;

    fn render_object_property_expression(
        &self,
        expression: &Self::ObjectPropertyExpression,
    ) -> String;

    fn render_data_property_expression(
        &self,
        expression: &Self::DataPropertyExpression,
    ) -> String;
}

/// Anything that carries the IRI of a named ontology entity.
///
/// Implemented by `Iri` itself and, on the caller's side, by rule-engine
/// argument types, so both a raw identifier and an already-typed argument
/// can be handed to the factory directly.
pub trait AsIri {
    fn as_iri(&self) -> &Iri;
}

impl AsIri for Iri {
    fn as_iri(&self) -> &Iri {
        self
    }
}

/// An identifier paired with its human-readable display forms.
///
/// Both names are non-empty whenever construction succeeds; the factory
/// fails instead of defaulting when the resolver cannot produce either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIdentity {
    pub iri: Iri,
    pub prefixed_name: String,
    pub short_form: String,
}

impl fmt::Display for ResolvedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefixed_name)
    }
}
