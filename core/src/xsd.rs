//! XML Schema datatype IRIs used for typed literals.

pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

/// Returns true if the datatype is one of the XSD numeric types
/// (`decimal`, `float`, `double` and the `integer` family).
pub fn is_numeric(datatype: &str) -> bool {
    let Some(local) = datatype.strip_prefix(NS) else {
        return false;
    };
    matches!(local, "decimal" | "float" | "double") || is_integer(datatype)
}

/// Returns true if the datatype is `xsd:integer` or one of its derived types.
pub fn is_integer(datatype: &str) -> bool {
    let Some(local) = datatype.strip_prefix(NS) else {
        return false;
    };
    matches!(
        local,
        "integer"
            | "int"
            | "long"
            | "short"
            | "byte"
            | "nonNegativeInteger"
            | "nonPositiveInteger"
            | "positiveInteger"
            | "negativeInteger"
            | "unsignedLong"
            | "unsignedInt"
            | "unsignedShort"
            | "unsignedByte"
    )
}
