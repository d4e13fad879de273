//! Value kind classification

use std::fmt;

use crate::value::Value;

/// Classified kind of a value.
///
/// Classification is O(1) and looks only at the value's representation,
/// never its contents. The five reference kinds between `Sequence` and
/// `Scalar` are opaque: they are never recursively wrapped by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Keyed mapping container
    Mapping,
    /// Ordered sequence container
    Sequence,
    /// Invokable value
    Code,
    /// Shared reference to a single value
    ScalarRef,
    /// Compiled textual pattern
    Regex,
    /// I/O-style resource handle
    Handle,
    /// Foreign payload
    Foreign,
    /// Plain scalar (null, boolean, integer, float, string)
    Scalar,
}

impl Kind {
    /// Classify a value.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
                Kind::Scalar
            }
            Value::Map(_) => Kind::Mapping,
            Value::Seq(_) => Kind::Sequence,
            Value::Code(_) => Kind::Code,
            Value::Cell(_) => Kind::ScalarRef,
            Value::Regex(_) => Kind::Regex,
            Value::Handle(_) => Kind::Handle,
            Value::Foreign(_) => Kind::Foreign,
        }
    }

    /// True for the reference kinds that pass through unwrapped by default.
    pub fn is_opaque(self) -> bool {
        matches!(
            self,
            Kind::Code | Kind::ScalarRef | Kind::Regex | Kind::Handle | Kind::Foreign
        )
    }

    /// The opaque reference kinds, in declaration order.
    pub fn opaque_kinds() -> [Kind; 5] {
        [
            Kind::Code,
            Kind::ScalarRef,
            Kind::Regex,
            Kind::Handle,
            Kind::Foreign,
        ]
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Mapping => "mapping",
            Kind::Sequence => "sequence",
            Kind::Code => "code",
            Kind::ScalarRef => "scalar ref",
            Kind::Regex => "regex",
            Kind::Handle => "handle",
            Kind::Foreign => "foreign",
            Kind::Scalar => "scalar",
        };
        f.write_str(name)
    }
}
