//! Capability-gated key-value map.
//!
//! Callers never touch the store directly. Every operation goes through a
//! [`ProxiedMap`], which asks an [`Auditor`] what the caller may do with a key
//! and enforces the answer:
//! - **Capabilities**: a [`Capability`] bitmask decides read, write, add and remove
//! - **Auditors**: pluggable decision functions, five reference policies included
//! - **Ownership override**: an auditor may hold its own value for a key, which
//!   transparently replaces the store's value
//!
//! # Core Types
//!
//! - [`Capability`]: Permission bits returned by an auditor
//! - [`Auditor`]: Decision trait mapping a key to a capability
//! - [`ProxiedMap`]: Backing store guarded by one auditor
//! - [`Policy`]: Configuration for the built-in auditors
//! - [`Error`]: `AccessDenied` or `KeyNotFound`
//!
//! # Examples
//!
//! ```
//! use proxied_map::{ProxiedMap, ProxyAuditor};
//!
//! let auditor = ProxyAuditor::new(["w"], ["p"]);
//! let mut map = ProxiedMap::new([("w", 1), ("p", 2), ("r", 3)], &auditor);
//!
//! map.edit("w", 10).expect("w is writable");
//! assert_eq!(map.read("w").unwrap(), 10);
//! assert_eq!(map.read("r").unwrap(), 3);
//!
//! assert!(map.read("p").unwrap_err().is_access_denied());
//! assert!(map.edit("r", 0).unwrap_err().is_access_denied());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auditor;
mod capability;
mod error;
mod map;
mod operation;
mod policy;

pub use auditor::{
    Auditor, FullAccessAuditor, OwnMapAuditor, ProxyAuditor, ReadDecision, ReaderAuditor,
    SlaveAuditor,
};
pub use capability::Capability;
pub use error::{Error, Violation, ViolationKind};
pub use map::ProxiedMap;
pub use operation::Operation;
pub use policy::Policy;
