use super::{Auditor, ReadDecision};
use crate::capability::Capability;

/// Read-only access to every key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderAuditor;

impl ReaderAuditor {
    /// Creates a read-only auditor.
    pub fn new() -> Self {
        Self
    }
}

impl Auditor for ReaderAuditor {
    fn check_read(&self, _key: &str) -> ReadDecision {
        ReadDecision::new(Capability::READABLE)
    }
}
