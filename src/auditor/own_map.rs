use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

use super::{Auditor, ReadDecision};
use crate::capability::Capability;

/// Owns private override values for a set of keys.
///
/// Reads of an owned key return the override value instead of the backing
/// store's value. When `writable` is set, writes to an owned key update the
/// override and never reach the backing store. Keys outside the override
/// set are read-only and come from the backing store.
///
/// The override map is private to the auditor. It is mutated only through
/// [`check_write`](Auditor::check_write), so the map and the overrides
/// cannot diverge behind the auditor's back.
///
/// # Example
///
/// ```
/// use proxied_map::{OwnMapAuditor, ProxiedMap};
///
/// let auditor = OwnMapAuditor::new([("a", 10)], true);
/// let mut map = ProxiedMap::new([("a", 1), ("b", 2)], &auditor);
///
/// assert_eq!(map.read("a").unwrap(), 10);
/// map.edit("a", 99).unwrap();
/// assert_eq!(map.read("a").unwrap(), 99);
/// assert_eq!(map.read("b").unwrap(), 2);
/// ```
pub struct OwnMapAuditor {
    overrides: RefCell<BTreeMap<String, i64>>,
    writable: bool,
}

impl OwnMapAuditor {
    /// Creates an auditor owning the given override values.
    pub fn new<I, K>(overrides: I, writable: bool) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Self {
            overrides: RefCell::new(
                overrides
                    .into_iter()
                    .map(|(key, value)| (key.into(), value))
                    .collect(),
            ),
            writable,
        }
    }

    /// Returns `true` if owned keys accept writes.
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    fn owner_capability(&self) -> Capability {
        if self.writable {
            Capability::OWNER_READ_WRITE
        } else {
            Capability::OWNER_READONLY
        }
    }
}

impl fmt::Debug for OwnMapAuditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Override values stay private; only the key count is shown.
        f.debug_struct("OwnMapAuditor")
            .field("owned_keys", &self.overrides.borrow().len())
            .field("writable", &self.writable)
            .finish()
    }
}

impl Auditor for OwnMapAuditor {
    fn check_read(&self, key: &str) -> ReadDecision {
        match self.overrides.borrow().get(key) {
            Some(&value) => ReadDecision::owned(self.owner_capability(), value),
            None => ReadDecision::new(Capability::READABLE),
        }
    }

    fn check_write(&self, key: &str, value: i64) -> Capability {
        let mut overrides = self.overrides.borrow_mut();
        let Some(slot) = overrides.get_mut(key) else {
            return Capability::READABLE;
        };
        if self.writable {
            *slot = value;
            tracing::trace!(key, "override updated");
        }
        self.owner_capability()
    }
}
