//! Typed literals for Rulegraph query results.
//!
//! This crate defines the value-level vocabulary shared by everything that
//! renders query output: opaque IRIs, the closed set of built-in datatypes,
//! canonical typed literals, structured temporal values, and the numeric
//! widening lattice used when a new numeric value has to be folded into a
//! column of already-typed literals.
//!
//! Everything here is a pure, immutable value type. Ontology storage, rule
//! execution, and name resolution live elsewhere; this crate only knows how
//! to give a scalar a datatype and a stable lexical form.

pub mod datatype;
pub mod iri;
pub mod literal;
pub mod numeric;
pub mod temporal;
pub mod vocab;

pub use datatype::Datatype;
pub use iri::Iri;
pub use literal::{LiteralError, Primitive, TypedLiteral};
pub use numeric::{join, least_narrow, narrowest_for};
pub use temporal::{TemporalParseError, XsdDate, XsdDateTime, XsdDuration, XsdTime};
