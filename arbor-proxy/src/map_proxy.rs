//! Object-style accessor over a keyed mapping container

use std::rc::Rc;

use arbor_value::{ArborError, Kind, MapRef, Result, Value};

use crate::policy::WrapPolicy;
use crate::wrap::Fetched;

/// Accessor over a shared mapping container.
///
/// Holds the container handle and a policy handle, nothing else. Reads
/// wrap on the way out; writes land directly on the shared container.
/// Key names are uniform: any string is an ordinary key, with no reserved
/// names and no special cases.
#[derive(Debug, Clone)]
pub struct MapProxy {
    map: MapRef,
    policy: Rc<WrapPolicy>,
}

impl MapProxy {
    pub(crate) fn new(map: MapRef, policy: Rc<WrapPolicy>) -> Self {
        Self { map, policy }
    }

    /// Read the value stored under `key`.
    ///
    /// A present value goes through the wrap decision: containers come back
    /// as fresh proxies, scalars and denied kinds come back raw. A missing
    /// key yields `Value::Null` when the policy allows undefined reads and
    /// an error naming the key otherwise.
    pub fn get(&self, key: &str) -> Result<Fetched> {
        let stored = self.map.borrow().get(key).cloned();
        match stored {
            Some(value) => Ok(Fetched::wrap(value, &self.policy)),
            None if self.policy.allow_undefined() => Ok(Fetched::Raw(Value::Null)),
            None => Err(ArborError::KeyNotFound {
                key: key.to_string(),
                kind: Kind::Mapping,
            }),
        }
    }

    /// Store `value` under `key`, creating the key if absent.
    ///
    /// Proxies convert to their underlying container handle on the way in,
    /// so the shared data never contains a proxy.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let value = value.into();
        self.map.borrow_mut().insert(key.into(), value);
    }

    /// Remove `key`, returning the stored value if it was present.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.map.borrow_mut().remove(key)
    }

    /// True when `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.borrow().contains_key(key)
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.map.borrow_mut().clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    /// True when the container holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }

    /// Snapshot of the keys in the container's native order.
    pub fn keys(&self) -> Vec<String> {
        self.map.borrow().keys().cloned().collect()
    }

    /// Lazy, restartable iteration over `(key, value)` pairs.
    ///
    /// Keys are snapshotted when the iterator is created; each value is
    /// fetched and wrap-decided at the step it is yielded, exactly as
    /// [`get`](Self::get) would. Entries removed mid-iteration are skipped.
    pub fn entries(&self) -> Entries {
        Entries {
            keys: self.keys().into_iter(),
            proxy: self.clone(),
        }
    }

    /// The underlying container handle.
    pub fn raw(&self) -> MapRef {
        Rc::clone(&self.map)
    }

    /// The policy this proxy consults on every read.
    pub fn policy(&self) -> &Rc<WrapPolicy> {
        &self.policy
    }
}

/// Iterator returned by [`MapProxy::entries`].
pub struct Entries {
    keys: std::vec::IntoIter<String>,
    proxy: MapProxy,
}

impl Iterator for Entries {
    type Item = (String, Fetched);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let key = self.keys.next()?;
            let stored = self.proxy.map.borrow().get(&key).cloned();
            if let Some(value) = stored {
                return Some((key, Fetched::wrap(value, &self.proxy.policy)));
            }
        }
    }
}
