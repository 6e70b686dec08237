use std::fmt;

use crate::capability::Capability;

/// An operation a caller can request on a [`ProxiedMap`](crate::ProxiedMap).
///
/// Each operation maps to exactly one capability bit that the auditor's
/// answer must contain for the operation to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read a value
    Read,
    /// Overwrite an existing value
    Write,
    /// Insert or overwrite a value
    Add,
    /// Erase a value
    Remove,
}

impl Operation {
    /// The capability bit this operation requires.
    pub const fn required(self) -> Capability {
        match self {
            Operation::Read => Capability::READABLE,
            Operation::Write => Capability::WRITEABLE,
            Operation::Add => Capability::ADDABLE,
            Operation::Remove => Capability::REMOVABLE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Read => write!(f, "read"),
            Operation::Write => write!(f, "edit"),
            Operation::Add => write!(f, "add"),
            Operation::Remove => write!(f, "remove"),
        }
    }
}
