//! Wrap decisions and access configuration

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use arbor_value::{Kind, Value};

/// Access configuration shared by every proxy minted from one root.
///
/// Proxies hold no cached decisions: each flag is read on every access, so
/// flipping one takes effect on the very next read through any proxy that
/// shares this policy.
#[derive(Debug)]
pub struct WrapPolicy {
    raw_access: Cell<bool>,
    allow_undefined: Cell<bool>,
    deny: RefCell<BTreeSet<Kind>>,
}

impl Default for WrapPolicy {
    fn default() -> Self {
        Self {
            raw_access: Cell::new(false),
            allow_undefined: Cell::new(false),
            deny: RefCell::new(Kind::opaque_kinds().into_iter().collect()),
        }
    }
}

impl WrapPolicy {
    /// Create a default policy behind a shared handle.
    pub fn shared() -> Rc<WrapPolicy> {
        Rc::new(WrapPolicy::default())
    }

    /// When on, every read returns the stored value unchanged and proxy
    /// construction is bypassed entirely.
    pub fn raw_access(&self) -> bool {
        self.raw_access.get()
    }

    /// Toggle raw access. Takes effect on the next read.
    pub fn set_raw_access(&self, on: bool) {
        self.raw_access.set(on);
    }

    /// When on, reading a nonexistent key or index yields `Value::Null`
    /// instead of failing.
    pub fn allow_undefined(&self) -> bool {
        self.allow_undefined.get()
    }

    /// Toggle undefined reads. Takes effect on the next read.
    pub fn set_allow_undefined(&self, on: bool) {
        self.allow_undefined.set(on);
    }

    /// True when `kind` is currently denied wrapping.
    pub fn denies(&self, kind: Kind) -> bool {
        self.deny.borrow().contains(&kind)
    }

    /// Add a kind to the deny set, forcing it to come back raw on reads.
    pub fn deny(&self, kind: Kind) {
        self.deny.borrow_mut().insert(kind);
    }

    /// Remove a kind from the deny set. Removing an opaque kind force-wraps
    /// it: subsequent reads of that kind produce a passthrough wrapper.
    pub fn permit(&self, kind: Kind) {
        self.deny.borrow_mut().remove(&kind);
    }

    /// Snapshot of the currently denied kinds.
    pub fn denied_kinds(&self) -> Vec<Kind> {
        self.deny.borrow().iter().copied().collect()
    }

    /// Decide whether a fetched value must be wrapped.
    ///
    /// Rules, in order: scalars are never wrapped; kinds in the deny set are
    /// never wrapped; everything else is. The raw-access bypass sits one
    /// level above this function, on the read path itself.
    pub fn should_wrap(&self, value: &Value) -> bool {
        let kind = value.kind();
        kind != Kind::Scalar && !self.denies(kind)
    }
}
