//! Capability flag set returned by auditors.
//!
//! A [`Capability`] is a bitmask of independent permission bits. Composite
//! capabilities are plain unions of the named bits, and checking whether a
//! capability permits an operation is a containment test:
//!
//! ```text
//! grants(C, R)  <=>  C != PROHIBITED && (C & R) == R
//! ```
//!
//! # Example
//!
//! ```
//! use proxied_map::Capability;
//!
//! let cap = Capability::READ_WRITE;
//! assert!(cap.grants(Capability::READABLE));
//! assert!(cap.grants(Capability::WRITEABLE));
//! assert!(!cap.grants(Capability::ADDABLE));
//!
//! assert!(!Capability::PROHIBITED.grants(Capability::empty()));
//! ```

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Permission bits governing access to a single key.
    ///
    /// | Bit | Meaning |
    /// |-----|---------|
    /// | [`READABLE`](Self::READABLE) | the key's value may be read |
    /// | [`WRITEABLE`](Self::WRITEABLE) | an existing key may be overwritten |
    /// | [`OWNED`](Self::OWNED) | the auditor holds the value itself |
    /// | [`ADDABLE`](Self::ADDABLE) | the key may be inserted |
    /// | [`REMOVABLE`](Self::REMOVABLE) | the key may be erased |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capability: u8 {
        /// Read access.
        const READABLE  = 0b0000_0001;
        /// Overwrite access.
        const WRITEABLE = 0b0000_0010;
        /// Value lives in the auditor, not in the backing store.
        const OWNED     = 0b0000_0100;
        /// Insert access.
        const ADDABLE   = 0b0000_1000;
        /// Erase access.
        const REMOVABLE = 0b0001_0000;
    }
}

impl Capability {
    /// No access at all. Disjoint from every other bit.
    pub const PROHIBITED: Self = Self::empty();

    /// READABLE | WRITEABLE.
    pub const READ_WRITE: Self = Self::READABLE.union(Self::WRITEABLE);

    /// READABLE | WRITEABLE | ADDABLE | REMOVABLE.
    pub const FULL_ACCESS: Self = Self::READ_WRITE
        .union(Self::ADDABLE)
        .union(Self::REMOVABLE);

    /// READABLE | OWNED.
    pub const OWNER_READONLY: Self = Self::READABLE.union(Self::OWNED);

    /// READABLE | WRITEABLE | OWNED.
    pub const OWNER_READ_WRITE: Self = Self::READ_WRITE.union(Self::OWNED);

    /// Returns `true` if every bit of `required` is present in `self`.
    ///
    /// [`PROHIBITED`](Self::PROHIBITED) grants nothing, not even an empty
    /// requirement.
    #[must_use]
    pub const fn grants(self, required: Self) -> bool {
        !self.is_empty() && self.contains(required)
    }

    /// Returns `true` if the auditor owns the value for this key.
    #[must_use]
    pub const fn is_owned(self) -> bool {
        self.contains(Self::OWNED)
    }

    /// Returns the names of the bits set in this capability.
    ///
    /// ```
    /// use proxied_map::Capability;
    ///
    /// let names = Capability::OWNER_READONLY.names();
    /// assert_eq!(names, vec!["READABLE", "OWNED"]);
    /// assert!(Capability::PROHIBITED.names().is_empty());
    /// ```
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "PROHIBITED");
        }
        write!(f, "{}", self.names().join("|"))
    }
}
