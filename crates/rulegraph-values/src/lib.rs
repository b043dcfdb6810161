//! Display-ready result values for Rulegraph queries.
//!
//! A query over the knowledge base produces rows of opaque identifiers,
//! rendered expressions, and scalar literals. This crate turns those into a
//! closed set of immutable, human-renderable [`value::ResultValue`] variants:
//! entities carry a [`resolver::ResolvedIdentity`] (IRI plus prefixed and
//! short display names), literals carry a canonical
//! [`rulegraph_literal::TypedLiteral`].
//!
//! Name resolution is pluggable: the factory consumes an
//! [`resolver::IriResolver`] supplied by the ontology/namespace layer and
//! refuses to produce a display value for an identifier that has no human
//! name. A display value without a name is invalid output, not a value with
//! a raw-IRI fallback.

pub mod factory;
pub mod resolver;
pub mod value;

pub use factory::{MissingName, ResultValueFactory, ValueError};
pub use resolver::{AsIri, IriResolver, ResolvedIdentity};
pub use value::{LiteralResultValue, ResultValue};

pub use rulegraph_literal::{Datatype, Iri, Primitive, TypedLiteral};
