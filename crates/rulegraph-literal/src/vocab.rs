//! XML Schema datatype vocabulary.
//!
//! IRI constants for the built-in datatypes recognized by the literal codec.
//! Datatypes outside this set still round-trip through the codec, they just
//! carry their IRI verbatim instead of one of the closed tags.

/// XML Schema namespace IRI prefix.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

// Numeric datatypes
pub const XSD_BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
pub const XSD_SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";
pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
pub const XSD_LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

// Text and boolean datatypes
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";

// Temporal datatypes
pub const XSD_TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
pub const XSD_DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
