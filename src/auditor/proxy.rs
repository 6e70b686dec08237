use std::collections::BTreeSet;

use super::{Auditor, ReadDecision};
use crate::capability::Capability;

/// Selective read/write proxy.
///
/// Prohibited keys are inaccessible, write keys are readable and writable,
/// every other key is read-only. A key on both lists is prohibited.
#[derive(Debug, Clone, Default)]
pub struct ProxyAuditor {
    write_keys: BTreeSet<String>,
    prohibited_keys: BTreeSet<String>,
}

impl ProxyAuditor {
    /// Creates a proxy from its write list and prohibit list.
    pub fn new<W, P>(write_keys: W, prohibited_keys: P) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            write_keys: write_keys.into_iter().map(Into::into).collect(),
            prohibited_keys: prohibited_keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl Auditor for ProxyAuditor {
    fn check_read(&self, key: &str) -> ReadDecision {
        let capability = if self.prohibited_keys.contains(key) {
            Capability::PROHIBITED
        } else if self.write_keys.contains(key) {
            Capability::READ_WRITE
        } else {
            Capability::READABLE
        };
        ReadDecision::new(capability)
    }
}
