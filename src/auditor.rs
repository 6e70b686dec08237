//! Auditors decide what a caller may do with each key.
//!
//! An [`Auditor`] maps a key to a [`Capability`]. The
//! [`ProxiedMap`](crate::ProxiedMap) asks its auditor once per call and
//! enforces the answer; the auditor never touches the backing store.
//!
//! This module provides the five reference policies:
//! - [`FullAccessAuditor`]: every operation on every key
//! - [`ReaderAuditor`]: read-only
//! - [`OwnMapAuditor`]: private override values replace the store's values
//! - [`ProxyAuditor`]: per-key write and prohibit lists
//! - [`SlaveAuditor`]: read-only allow-list
//!
//! Any other role is an external type implementing [`Auditor`].

mod full_access;
mod own_map;
mod proxy;
mod reader;
mod slave;

pub use full_access::FullAccessAuditor;
pub use own_map::OwnMapAuditor;
pub use proxy::ProxyAuditor;
pub use reader::ReaderAuditor;
pub use slave::SlaveAuditor;

use crate::capability::Capability;

/// The answer to a read query.
///
/// `value` is meaningful only when `capability` contains
/// [`Capability::OWNED`]; it is zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadDecision {
    /// Capability governing the key
    pub capability: Capability,
    /// Auditor-held value for owned keys
    pub value: i64,
}

impl ReadDecision {
    /// A decision for a key whose value lives in the backing store.
    pub const fn new(capability: Capability) -> Self {
        Self {
            capability,
            value: 0,
        }
    }

    /// A decision for a key the auditor owns, carrying its private value.
    pub const fn owned(capability: Capability, value: i64) -> Self {
        Self { capability, value }
    }
}

/// Decision function mapping a key to a capability.
///
/// Only [`check_read`](Auditor::check_read) is required. The write, add and
/// remove queries default to the read capability, which for every reference
/// policy except [`FullAccessAuditor`] lacks `ADDABLE` and `REMOVABLE`.
///
/// An auditor that returns a capability containing [`Capability::OWNED`]
/// from a mutating query has already applied the mutation to its own state;
/// the map will not touch its backing store for that call. An auditor that
/// does not own the key must not return `OWNED`.
///
/// # Example
///
/// ```
/// use proxied_map::{Auditor, Capability, ProxiedMap, ReadDecision};
///
/// /// Lets callers add keys but never remove them.
/// struct AppendOnly;
///
/// impl Auditor for AppendOnly {
///     fn check_read(&self, _key: &str) -> ReadDecision {
///         ReadDecision::new(Capability::READABLE | Capability::ADDABLE)
///     }
/// }
///
/// let auditor = AppendOnly;
/// let mut map = ProxiedMap::new([("a", 1)], &auditor);
/// map.add("b", 2).unwrap();
/// assert_eq!(map.read("b").unwrap(), 2);
/// assert!(map.remove("a").unwrap_err().is_access_denied());
/// ```
pub trait Auditor {
    /// Capability for reading `key`, plus the override value if owned.
    fn check_read(&self, key: &str) -> ReadDecision;

    /// Capability for writing `value` to `key`.
    fn check_write(&self, key: &str, value: i64) -> Capability {
        let _ = value;
        self.check_read(key).capability
    }

    /// Capability for inserting `key` with `value`.
    fn check_add(&self, key: &str, value: i64) -> Capability {
        let _ = value;
        self.check_read(key).capability
    }

    /// Capability for erasing `key`.
    fn check_remove(&self, key: &str) -> Capability {
        self.check_read(key).capability
    }
}

impl<A: Auditor + ?Sized> Auditor for Box<A> {
    fn check_read(&self, key: &str) -> ReadDecision {
        (**self).check_read(key)
    }

    fn check_write(&self, key: &str, value: i64) -> Capability {
        (**self).check_write(key, value)
    }

    fn check_add(&self, key: &str, value: i64) -> Capability {
        (**self).check_add(key, value)
    }

    fn check_remove(&self, key: &str) -> Capability {
        (**self).check_remove(key)
    }
}
