//! Retrieval-only wrapper for opaque kinds

use std::rc::Rc;

use arbor_value::{CellRef, HandleRef, Kind, NativeFn, Regex, Value};

/// Wrapper for kinds that must never be recursively wrapped.
///
/// Exposes retrieval only; there is deliberately no member or index access
/// here, so the type system rejects traversal into opaque values. The
/// kind-specific accessors route to the right payload type and nothing
/// more: behaviorally every opaque kind is identical.
#[derive(Debug, Clone)]
pub struct Passthrough {
    value: Value,
    kind: Kind,
}

impl Passthrough {
    pub(crate) fn new(value: Value, kind: Kind) -> Self {
        Self { value, kind }
    }

    /// The classified kind of the wrapped value.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Borrow the wrapped value.
    pub fn get(&self) -> &Value {
        &self.value
    }

    /// Consume the wrapper and return the wrapped value.
    pub fn into_inner(self) -> Value {
        self.value
    }

    /// The invokable payload, when wrapping a code value.
    pub fn as_code(&self) -> Option<&NativeFn> {
        self.value.as_code()
    }

    /// The compiled pattern, when wrapping a regex value.
    pub fn as_regex(&self) -> Option<&Rc<Regex>> {
        self.value.as_regex()
    }

    /// The single-value reference, when wrapping a scalar ref.
    pub fn as_cell(&self) -> Option<&CellRef> {
        self.value.as_cell()
    }

    /// The opaque payload, when wrapping a handle or foreign value.
    pub fn as_handle(&self) -> Option<&HandleRef> {
        match &self.value {
            Value::Handle(h) | Value::Foreign(h) => Some(h),
            _ => None,
        }
    }
}
