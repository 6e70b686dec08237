use std::collections::BTreeMap;

use crate::auditor::{
    Auditor, FullAccessAuditor, OwnMapAuditor, ProxyAuditor, ReaderAuditor, SlaveAuditor,
};

/// Role configuration for one of the reference auditors.
///
/// `Policy` is the closed set of built-in roles as plain data. Build one
/// directly or with the fluent helpers, then turn it into an auditor with
/// [`into_auditor`](Policy::into_auditor).
///
/// # Examples
///
/// ```
/// use proxied_map::{Policy, ProxiedMap};
///
/// let auditor = Policy::proxy()
///     .writable("balance")
///     .prohibited("pin")
///     .into_auditor();
///
/// let mut map = ProxiedMap::new([("balance", 100), ("pin", 1234)], &auditor);
/// map.edit("balance", 80).unwrap();
/// assert_eq!(map.read("balance").unwrap(), 80);
/// assert!(map.read("pin").unwrap_err().is_access_denied());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    /// Every operation on every key
    FullAccess,
    /// Read-only access to every key
    Reader,
    /// Private override values for some keys, read-only elsewhere
    OwnMap {
        /// Auditor-held values replacing the store's values
        overrides: BTreeMap<String, i64>,
        /// Whether owned keys accept writes
        writable: bool,
    },
    /// Per-key write and prohibit lists, read-only elsewhere
    Proxy {
        /// Keys that may be read and written
        write_keys: Vec<String>,
        /// Keys that may not be accessed at all
        prohibited_keys: Vec<String>,
    },
    /// Read-only access to an allow-list
    Slave {
        /// Keys that may be read
        allowed_keys: Vec<String>,
    },
}

impl Policy {
    /// Starts an empty ownership policy.
    pub fn own_map(writable: bool) -> Self {
        Policy::OwnMap {
            overrides: BTreeMap::new(),
            writable,
        }
    }

    /// Starts an empty proxy policy.
    pub fn proxy() -> Self {
        Policy::Proxy {
            write_keys: Vec::new(),
            prohibited_keys: Vec::new(),
        }
    }

    /// Starts an empty allow-list policy.
    pub fn slave() -> Self {
        Policy::Slave {
            allowed_keys: Vec::new(),
        }
    }

    /// Adds an owned override value. Ignored unless this is `OwnMap`.
    pub fn owning(mut self, key: impl Into<String>, value: i64) -> Self {
        if let Policy::OwnMap { overrides, .. } = &mut self {
            overrides.insert(key.into(), value);
        }
        self
    }

    /// Adds a writable key. Ignored unless this is `Proxy`.
    pub fn writable(mut self, key: impl Into<String>) -> Self {
        if let Policy::Proxy { write_keys, .. } = &mut self {
            write_keys.push(key.into());
        }
        self
    }

    /// Adds a prohibited key. Ignored unless this is `Proxy`.
    pub fn prohibited(mut self, key: impl Into<String>) -> Self {
        if let Policy::Proxy {
            prohibited_keys, ..
        } = &mut self
        {
            prohibited_keys.push(key.into());
        }
        self
    }

    /// Adds a readable key. Ignored unless this is `Slave`.
    pub fn allow(mut self, key: impl Into<String>) -> Self {
        if let Policy::Slave { allowed_keys } = &mut self {
            allowed_keys.push(key.into());
        }
        self
    }

    /// Builds the auditor this policy describes.
    pub fn into_auditor(self) -> Box<dyn Auditor> {
        match self {
            Policy::FullAccess => Box::new(FullAccessAuditor::new()),
            Policy::Reader => Box::new(ReaderAuditor::new()),
            Policy::OwnMap {
                overrides,
                writable,
            } => Box::new(OwnMapAuditor::new(overrides, writable)),
            Policy::Proxy {
                write_keys,
                prohibited_keys,
            } => Box::new(ProxyAuditor::new(write_keys, prohibited_keys)),
            Policy::Slave { allowed_keys } => Box::new(SlaveAuditor::new(allowed_keys)),
        }
    }
}

impl From<Policy> for Box<dyn Auditor> {
    fn from(policy: Policy) -> Self {
        policy.into_auditor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;

    #[test]
    fn builders_fill_matching_variant() {
        let policy = Policy::proxy().writable("w").prohibited("p");
        assert_eq!(
            policy,
            Policy::Proxy {
                write_keys: vec!["w".to_string()],
                prohibited_keys: vec!["p".to_string()],
            }
        );
    }

    #[test]
    fn builders_ignore_other_variants() {
        let policy = Policy::slave().writable("w").owning("o", 1).allow("k");
        assert_eq!(
            policy,
            Policy::Slave {
                allowed_keys: vec!["k".to_string()],
            }
        );
        assert_eq!(Policy::FullAccess.allow("k"), Policy::FullAccess);
    }

    #[test]
    fn into_auditor_builds_matching_policy() {
        let full = Policy::FullAccess.into_auditor();
        assert_eq!(full.check_remove("k"), Capability::FULL_ACCESS);

        let reader = Policy::Reader.into_auditor();
        assert_eq!(reader.check_write("k", 1), Capability::READABLE);

        let own = Policy::own_map(true).owning("a", 10).into_auditor();
        let decision = own.check_read("a");
        assert_eq!(decision.capability, Capability::OWNER_READ_WRITE);
        assert_eq!(decision.value, 10);

        let proxy = Policy::proxy().prohibited("p").into_auditor();
        assert_eq!(proxy.check_read("p").capability, Capability::PROHIBITED);

        let slave: Box<dyn Auditor> = Policy::slave().allow("k").into();
        assert_eq!(slave.check_read("k").capability, Capability::READABLE);
        assert_eq!(slave.check_read("x").capability, Capability::PROHIBITED);
    }
}
