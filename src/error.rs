use std::fmt;

use crate::operation::Operation;

/// Errors returned by [`ProxiedMap`](crate::ProxiedMap) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The auditor refused the operation, or the key was missing
    Violation(Violation),
}

impl Error {
    /// Returns `true` if the auditor denied the operation.
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            Error::Violation(Violation {
                kind: ViolationKind::AccessDenied { .. },
                ..
            })
        )
    }

    /// Returns `true` if a permitted read found no value.
    pub fn is_key_not_found(&self) -> bool {
        matches!(
            self,
            Error::Violation(Violation {
                kind: ViolationKind::KeyNotFound,
                ..
            })
        )
    }

    /// Returns the underlying violation.
    pub fn violation(&self) -> &Violation {
        match self {
            Error::Violation(v) => v,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Violation(v) => write!(f, "Map access violation: {}", v),
        }
    }
}

impl std::error::Error for Error {}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Violation(v)
    }
}

/// A failed map operation with the key it targeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// The key the operation targeted
    pub key: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }

    /// The auditor's capability lacked the bit `operation` requires.
    pub fn access_denied(operation: Operation, key: impl Into<String>) -> Self {
        Self::new(ViolationKind::AccessDenied { operation }, key)
    }

    /// A permitted read found no value for `key`.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::new(ViolationKind::KeyNotFound, key)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (key '{}')", self.kind, self.key)
    }
}

impl std::error::Error for Violation {}

/// The kind of violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The auditor did not grant the bit the operation requires
    AccessDenied {
        /// The operation that was refused
        operation: Operation,
    },
    /// The key is absent from the backing store
    KeyNotFound,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::AccessDenied { operation } => {
                write!(f, "Access denied for '{}'", operation)
            }
            ViolationKind::KeyNotFound => write!(f, "Key not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_denied_display_names_operation_and_key() {
        let err = Error::from(Violation::access_denied(Operation::Remove, "balance"));
        assert!(err.is_access_denied());
        assert!(!err.is_key_not_found());
        assert_eq!(
            err.to_string(),
            "Map access violation: Access denied for 'remove' (key 'balance')"
        );
    }

    #[test]
    fn key_not_found_display() {
        let err = Error::from(Violation::key_not_found("missing"));
        assert!(err.is_key_not_found());
        assert_eq!(err.violation().key, "missing");
        assert_eq!(
            err.to_string(),
            "Map access violation: Key not found (key 'missing')"
        );
    }
}
