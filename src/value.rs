use std::fmt;
use std::rc::Rc;

/// Declared type tag for a variable binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Number,
    String,
}

impl Type {
    /// Parse the wire-format type tag carried by declaration nodes.
    pub fn from_tag(tag: &str) -> Option<Type> {
        match tag {
            "number" => Some(Type::Number),
            "string" => Some(Type::String),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Number => write!(f, "number"),
            Type::String => write!(f, "string"),
        }
    }
}

/// A runtime value. `Null` stands for an absent value, produced when an
/// evaluation could not yield a result (for example an undeclared
/// identifier lookup).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Number(f64),
    String(Rc<str>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(numeric_value) = self {
            Some(*numeric_value)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(string_ref) = self {
            Some(string_ref.as_ref())
        } else {
            None
        }
    }

    /// Whether this value may be bound to a slot declared with `ty`.
    /// `Null` is compatible with any type so that a failed sub-evaluation
    /// does not cascade into an extra type error at the binding site.
    pub fn conforms_to(&self, ty: Type) -> bool {
        match self {
            Value::Null => true,
            Value::Number(_) => ty == Type::Number,
            Value::String(_) => ty == Type::String,
        }
    }

    /// Human-readable name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    /// Console text for a value: numbers drop a trailing `.0`, strings
    /// print verbatim, absent values print as the literal `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Number(numeric_value) => write!(f, "{}", numeric_value),
            Value::String(string_ref) => write!(f, "{}", string_ref),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_integral_fraction() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
    }

    #[test]
    fn test_null_displays_as_literal_null() {
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_null_conforms_to_any_type() {
        assert!(Value::Null.conforms_to(Type::Number));
        assert!(Value::Null.conforms_to(Type::String));
        assert!(!Value::Number(1.0).conforms_to(Type::String));
        assert!(!Value::String(Rc::from("a")).conforms_to(Type::Number));
    }
}
