use super::{Auditor, ReadDecision};
use crate::capability::Capability;

/// Grants every operation on every key.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullAccessAuditor;

impl FullAccessAuditor {
    /// Creates a full-access auditor.
    pub fn new() -> Self {
        Self
    }
}

impl Auditor for FullAccessAuditor {
    fn check_read(&self, _key: &str) -> ReadDecision {
        ReadDecision::new(Capability::FULL_ACCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_access_for_any_key() {
        let auditor = FullAccessAuditor::new();
        assert_eq!(
            auditor.check_read("any_key"),
            ReadDecision::new(Capability::FULL_ACCESS)
        );
        assert_eq!(auditor.check_write("any_key", 10), Capability::FULL_ACCESS);
        assert_eq!(auditor.check_add("new_key", 10), Capability::FULL_ACCESS);
        assert_eq!(auditor.check_remove("any_key"), Capability::FULL_ACCESS);
    }
}
