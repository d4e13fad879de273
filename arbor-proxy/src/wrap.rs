//! Read-path wrapping: the `Fetched` result and the proxy factory

use std::rc::Rc;

use tracing::trace;

use arbor_value::{ArborError, Kind, Result, Value};

use crate::map_proxy::MapProxy;
use crate::passthrough::Passthrough;
use crate::policy::WrapPolicy;
use crate::seq_proxy::SeqProxy;

/// Result of a read through a proxy.
///
/// Container values come back as fresh proxies ready for further traversal;
/// everything else comes back raw. A `Fetched` never stores a wrap decision:
/// it *is* the decision, computed at the moment of the read.
#[derive(Debug, Clone)]
pub enum Fetched {
    /// The stored value, returned unchanged
    Raw(Value),
    /// A mapping, wrapped for keyed access
    Map(MapProxy),
    /// A sequence, wrapped for indexed access
    Seq(SeqProxy),
    /// An opaque kind, force-wrapped into a retrieval-only wrapper
    Opaque(Passthrough),
}

impl Fetched {
    /// Apply the full read-path decision to a fetched value.
    ///
    /// Raw access bypasses wrapping unconditionally; otherwise the policy
    /// decides and the factory dispatches. Never fails: values the policy
    /// declines to wrap are returned raw.
    pub fn wrap(value: Value, policy: &Rc<WrapPolicy>) -> Fetched {
        if policy.raw_access() || !policy.should_wrap(&value) {
            return Fetched::Raw(value);
        }
        let kind = value.kind();
        trace!(%kind, "wrapping fetched value");
        dispatch(value, kind, policy)
    }

    /// Idempotent wrapping: an already-wrapped result is returned unchanged
    /// (same handle), a raw result re-enters the wrap decision.
    pub fn rewrap(self, policy: &Rc<WrapPolicy>) -> Fetched {
        match self {
            Fetched::Raw(value) => Fetched::wrap(value, policy),
            wrapped => wrapped,
        }
    }

    /// True for the proxied variants.
    pub fn is_proxy(&self) -> bool {
        !matches!(self, Fetched::Raw(_))
    }

    /// Borrow the mapping proxy, if this is one.
    pub fn as_map(&self) -> Option<&MapProxy> {
        match self {
            Fetched::Map(p) => Some(p),
            _ => None,
        }
    }

    /// Borrow the sequence proxy, if this is one.
    pub fn as_seq(&self) -> Option<&SeqProxy> {
        match self {
            Fetched::Seq(p) => Some(p),
            _ => None,
        }
    }

    /// Borrow the passthrough wrapper, if this is one.
    pub fn as_opaque(&self) -> Option<&Passthrough> {
        match self {
            Fetched::Opaque(p) => Some(p),
            _ => None,
        }
    }

    /// Take the mapping proxy, if this is one.
    pub fn into_map(self) -> Option<MapProxy> {
        match self {
            Fetched::Map(p) => Some(p),
            _ => None,
        }
    }

    /// Take the sequence proxy, if this is one.
    pub fn into_seq(self) -> Option<SeqProxy> {
        match self {
            Fetched::Seq(p) => Some(p),
            _ => None,
        }
    }

    /// Take the passthrough wrapper, if this is one.
    pub fn into_opaque(self) -> Option<Passthrough> {
        match self {
            Fetched::Opaque(p) => Some(p),
            _ => None,
        }
    }

    /// The underlying value, whichever variant this is.
    ///
    /// For proxied variants this is the container or reference handle the
    /// proxy refers to, so the result shares identity with the stored data.
    pub fn raw(&self) -> Value {
        match self {
            Fetched::Raw(v) => v.clone(),
            Fetched::Map(p) => Value::Map(p.raw()),
            Fetched::Seq(p) => Value::Seq(p.raw()),
            Fetched::Opaque(p) => p.get().clone(),
        }
    }

    /// Consume into the underlying value.
    pub fn into_value(self) -> Value {
        match self {
            Fetched::Raw(v) => v,
            Fetched::Map(p) => Value::Map(p.raw()),
            Fetched::Seq(p) => Value::Seq(p.raw()),
            Fetched::Opaque(p) => p.into_inner(),
        }
    }
}

/// Writes through a proxy store the underlying container handle, never the
/// proxy itself.
impl From<MapProxy> for Value {
    fn from(proxy: MapProxy) -> Value {
        Value::Map(proxy.raw())
    }
}

impl From<SeqProxy> for Value {
    fn from(proxy: SeqProxy) -> Value {
        Value::Seq(proxy.raw())
    }
}

impl From<Passthrough> for Value {
    fn from(wrapper: Passthrough) -> Value {
        wrapper.into_inner()
    }
}

impl From<Fetched> for Value {
    fn from(fetched: Fetched) -> Value {
        fetched.into_value()
    }
}

/// Produce the proxy for a non-scalar value.
///
/// Mapping and sequence kinds get their accessor proxies; every opaque kind
/// gets a passthrough wrapper. Asking for a scalar is a caller error:
/// callers are expected to gate with [`WrapPolicy::should_wrap`] first.
pub fn make_proxy(value: Value, policy: &Rc<WrapPolicy>) -> Result<Fetched> {
    match value.kind() {
        Kind::Scalar => Err(ArborError::CannotWrap { kind: Kind::Scalar }),
        kind => Ok(dispatch(value, kind, policy)),
    }
}

fn dispatch(value: Value, kind: Kind, policy: &Rc<WrapPolicy>) -> Fetched {
    match value {
        Value::Map(map) => Fetched::Map(MapProxy::new(map, Rc::clone(policy))),
        Value::Seq(seq) => Fetched::Seq(SeqProxy::new(seq, Rc::clone(policy))),
        other => Fetched::Opaque(Passthrough::new(other, kind)),
    }
}
