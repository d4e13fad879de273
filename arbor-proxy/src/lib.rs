//! Arbor proxy layer - Wrap-on-read, write-through accessors
//!
//! This crate provides transparent object-style access over nested data
//! built from the `arbor-value` containers. It includes:
//!
//! - The wrap policy: raw access, undefined reads, and the opaque deny set
//! - The proxy factory and the `Fetched` read result
//! - `MapProxy` and `SeqProxy` accessors
//! - The `Passthrough` wrapper for opaque kinds
//! - The `construct` entry point
//!
//! Every read fetches the stored value, decides fresh whether it must be
//! wrapped, and returns either a newly minted proxy or the raw value. Every
//! write stores the caller's value directly into the shared container;
//! writes are never wrapped, only reads are.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod map_proxy;
pub mod passthrough;
pub mod policy;
pub mod seq_proxy;
pub mod wrap;

// Re-export commonly used types
pub use arbor_value::{ArborError, Kind, Result, Value};
pub use map_proxy::{Entries, MapProxy};
pub use passthrough::Passthrough;
pub use policy::WrapPolicy;
pub use seq_proxy::{Elements, SeqProxy};
pub use wrap::{make_proxy, Fetched};

use std::rc::Rc;

use tracing::debug;

/// Validate a root container and return its top-level proxy.
///
/// Uses a fresh default policy; see [`construct_with`] to share or
/// customize one.
pub fn construct(root: impl Into<Value>) -> Result<Fetched> {
    construct_with(root, WrapPolicy::shared())
}

/// Validate a root container and return its proxy under an explicit policy.
///
/// Only mappings and sequences are accepted at the root; scalars and opaque
/// kinds are rejected even though they may appear nested inside a valid
/// root. The returned value then goes through the ordinary wrap decision,
/// so a policy with raw access on hands the root back unchanged.
pub fn construct_with(root: impl Into<Value>, policy: Rc<WrapPolicy>) -> Result<Fetched> {
    let root = root.into();
    match root.kind() {
        kind @ (Kind::Mapping | Kind::Sequence) => {
            debug!(%kind, "constructing root proxy");
            Ok(Fetched::wrap(root, &policy))
        }
        kind => Err(ArborError::InvalidRoot { kind }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_accepts_containers() {
        assert!(matches!(construct(Value::map()), Ok(Fetched::Map(_))));
        assert!(matches!(construct(Value::seq()), Ok(Fetched::Seq(_))));
    }

    #[test]
    fn construct_rejects_scalar_and_opaque_roots() {
        assert!(matches!(
            construct(Value::Int(1)),
            Err(ArborError::InvalidRoot { kind: Kind::Scalar })
        ));
        assert!(matches!(
            construct(Value::code(|_| Value::Null)),
            Err(ArborError::InvalidRoot { kind: Kind::Code })
        ));
        assert!(matches!(
            construct(Value::cell(Value::map())),
            Err(ArborError::InvalidRoot {
                kind: Kind::ScalarRef
            })
        ));
    }

    #[test]
    fn construct_with_raw_access_returns_the_input() {
        let policy = WrapPolicy::shared();
        policy.set_raw_access(true);

        let root = Value::map();
        let fetched = construct_with(root.clone(), policy).unwrap();

        assert!(!fetched.is_proxy());
        assert!(fetched.raw().same_handle(&root));
    }
}
