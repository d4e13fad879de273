//! The dynamic value representation

use std::any::Any;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use regex::Regex;

use crate::kind::Kind;

/// Shared handle to a keyed mapping container.
pub type MapRef = Rc<RefCell<BTreeMap<String, Value>>>;

/// Shared handle to an ordered sequence container.
pub type SeqRef = Rc<RefCell<Vec<Value>>>;

/// Shared reference to a single value (a scalar reference).
pub type CellRef = Rc<RefCell<Value>>;

/// An invokable value: takes a slice of arguments, returns a value.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> Value>;

/// Opaque payload for handle-like values the accessor layer never inspects.
pub type HandleRef = Rc<dyn Any>;

/// A dynamic value.
///
/// Scalars are held inline. Containers and reference kinds are shared
/// handles, so `clone` is always cheap and never copies container contents.
#[derive(Clone)]
pub enum Value {
    /// Absent or explicitly-null value
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating-point scalar
    Float(f64),
    /// String scalar
    Str(String),
    /// Keyed mapping container
    Map(MapRef),
    /// Ordered sequence container
    Seq(SeqRef),
    /// Invokable value
    Code(NativeFn),
    /// Shared reference to a single value
    Cell(CellRef),
    /// Compiled textual pattern
    Regex(Rc<Regex>),
    /// I/O-style resource handle
    Handle(HandleRef),
    /// Foreign payload with no meaning to the accessor layer
    Foreign(HandleRef),
}

impl Value {
    /// Create an empty mapping.
    pub fn map() -> Value {
        Value::Map(Rc::new(RefCell::new(BTreeMap::new())))
    }

    /// Create a mapping from `(key, value)` pairs.
    pub fn map_from(entries: impl IntoIterator<Item = (String, Value)>) -> Value {
        Value::Map(Rc::new(RefCell::new(entries.into_iter().collect())))
    }

    /// Create an empty sequence.
    pub fn seq() -> Value {
        Value::Seq(Rc::new(RefCell::new(Vec::new())))
    }

    /// Create a sequence from an iterator of values.
    pub fn seq_from(items: impl IntoIterator<Item = Value>) -> Value {
        Value::Seq(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Create a shared single-value reference.
    pub fn cell(inner: Value) -> Value {
        Value::Cell(Rc::new(RefCell::new(inner)))
    }

    /// Create an invokable value from a closure.
    pub fn code(f: impl Fn(&[Value]) -> Value + 'static) -> Value {
        Value::Code(Rc::new(f))
    }

    /// Create a compiled-pattern value.
    pub fn regex(re: Regex) -> Value {
        Value::Regex(Rc::new(re))
    }

    /// Create an I/O-style handle value.
    pub fn handle(payload: impl Any) -> Value {
        Value::Handle(Rc::new(payload))
    }

    /// Create a foreign payload value.
    pub fn foreign(payload: impl Any) -> Value {
        Value::Foreign(Rc::new(payload))
    }

    /// Classify this value. O(1): inspects the variant tag only, never the
    /// contents, so self-referential structures are safe.
    pub fn kind(&self) -> Kind {
        Kind::of(self)
    }

    /// True for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow as a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow as an integer scalar.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Borrow as a floating-point scalar.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrow as a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the mapping handle.
    pub fn as_map(&self) -> Option<&MapRef> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Borrow the sequence handle.
    pub fn as_seq(&self) -> Option<&SeqRef> {
        match self {
            Value::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the single-value reference handle.
    pub fn as_cell(&self) -> Option<&CellRef> {
        match self {
            Value::Cell(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow the invokable payload.
    pub fn as_code(&self) -> Option<&NativeFn> {
        match self {
            Value::Code(f) => Some(f),
            _ => None,
        }
    }

    /// Borrow the compiled pattern.
    pub fn as_regex(&self) -> Option<&Rc<Regex>> {
        match self {
            Value::Regex(r) => Some(r),
            _ => None,
        }
    }

    /// True when two values share the same container or reference handle.
    ///
    /// Scalars are never handle-identical; structural comparison is what
    /// `PartialEq` provides.
    pub fn same_handle(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Seq(a), Value::Seq(b)) => Rc::ptr_eq(a, b),
            (Value::Cell(a), Value::Cell(b)) => Rc::ptr_eq(a, b),
            (Value::Code(a), Value::Code(b)) => Rc::ptr_eq(a, b),
            (Value::Regex(a), Value::Regex(b)) => Rc::ptr_eq(a, b),
            (Value::Handle(a), Value::Handle(b)) => Rc::ptr_eq(a, b),
            (Value::Foreign(a), Value::Foreign(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    /// Structural equality: scalars by value, containers and cells by deep
    /// contents, patterns by pattern text, everything else by handle
    /// identity. Comparison traverses contents and must not be used on
    /// self-referential structures.
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Seq(a), Value::Seq(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Cell(a), Value::Cell(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Regex(a), Value::Regex(b)) => a.as_str() == b.as_str(),
            (Value::Code(a), Value::Code(b)) => Rc::ptr_eq(a, b),
            (Value::Handle(a), Value::Handle(b)) => Rc::ptr_eq(a, b),
            (Value::Foreign(a), Value::Foreign(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Map(m) => f.debug_tuple("Map").field(&m.borrow()).finish(),
            Value::Seq(s) => f.debug_tuple("Seq").field(&s.borrow()).finish(),
            Value::Cell(c) => f.debug_tuple("Cell").field(&c.borrow()).finish(),
            Value::Regex(r) => f.debug_tuple("Regex").field(&r.as_str()).finish(),
            Value::Code(_) => f.write_str("Code(..)"),
            Value::Handle(_) => f.write_str("Handle(..)"),
            Value::Foreign(_) => f.write_str("Foreign(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_container_contents() {
        let map = Value::map();
        let alias = map.clone();

        map.as_map()
            .unwrap()
            .borrow_mut()
            .insert("k".to_string(), Value::Int(1));

        assert_eq!(alias.as_map().unwrap().borrow().len(), 1);
        assert!(map.same_handle(&alias));
    }

    #[test]
    fn structural_equality_over_distinct_handles() {
        let a = Value::seq_from([Value::Int(1), Value::Str("x".to_string())]);
        let b = Value::seq_from([Value::Int(1), Value::Str("x".to_string())]);

        assert_eq!(a, b);
        assert!(!a.same_handle(&b));
    }

    #[test]
    fn code_values_compare_by_identity() {
        let f = Value::code(|_| Value::Null);
        let g = Value::code(|_| Value::Null);

        assert_eq!(f, f.clone());
        assert_ne!(f, g);
    }

    #[test]
    fn regex_values_compare_by_pattern() {
        let a = Value::regex(Regex::new("a+").unwrap());
        let b = Value::regex(Regex::new("a+").unwrap());
        let c = Value::regex(Regex::new("b+").unwrap());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn cell_equality_is_deep() {
        let a = Value::cell(Value::Int(7));
        let b = Value::cell(Value::Int(7));

        assert_eq!(a, b);
        assert!(!a.same_handle(&b));
    }
}
