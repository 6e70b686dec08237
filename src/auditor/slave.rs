use std::collections::BTreeSet;

use super::{Auditor, ReadDecision};
use crate::capability::Capability;

/// Read-only access restricted to an allow-list.
///
/// Keys outside the allow-list are prohibited, and no key is ever
/// writable, addable or removable.
#[derive(Debug, Clone, Default)]
pub struct SlaveAuditor {
    allowed_keys: BTreeSet<String>,
}

impl SlaveAuditor {
    /// Creates an auditor allowing reads of the given keys.
    pub fn new<I>(allowed_keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            allowed_keys: allowed_keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl Auditor for SlaveAuditor {
    fn check_read(&self, key: &str) -> ReadDecision {
        if self.allowed_keys.contains(key) {
            ReadDecision::new(Capability::READABLE)
        } else {
            ReadDecision::new(Capability::PROHIBITED)
        }
    }

    fn check_write(&self, _key: &str, _value: i64) -> Capability {
        Capability::PROHIBITED
    }

    fn check_add(&self, _key: &str, _value: i64) -> Capability {
        Capability::PROHIBITED
    }

    fn check_remove(&self, _key: &str) -> Capability {
        Capability::PROHIBITED
    }
}
