use std::collections::BTreeMap;

use crate::auditor::Auditor;
use crate::capability::Capability;
use crate::error::{Error, Violation};
use crate::operation::Operation;

/// A key-value map whose every operation is gated by an [`Auditor`].
///
/// `ProxiedMap` exclusively owns its backing store and borrows one auditor
/// for its whole lifetime. Each call asks the auditor exactly once, before
/// any mutation, and never caches the answer.
///
/// When the auditor answers with [`Capability::OWNED`], the value lives in
/// the auditor: reads return the auditor's value and mutations are
/// considered already applied, so the backing store is left alone.
///
/// # Examples
///
/// ```
/// use proxied_map::{FullAccessAuditor, ProxiedMap};
///
/// let auditor = FullAccessAuditor::new();
/// let mut map = ProxiedMap::new([("alice", 100), ("bob", 50)], &auditor);
///
/// map.edit("alice", 90).unwrap();
/// map.add("carol", 10).unwrap();
/// map.remove("bob").unwrap();
///
/// assert_eq!(map.read("alice").unwrap(), 90);
/// assert_eq!(map.read("carol").unwrap(), 10);
/// assert!(map.read("bob").unwrap_err().is_key_not_found());
/// ```
#[derive(Debug)]
pub struct ProxiedMap<'a, A: Auditor + ?Sized> {
    data: BTreeMap<String, i64>,
    auditor: &'a A,
}

impl<'a, A: Auditor + ?Sized> ProxiedMap<'a, A> {
    /// Creates a map from an initial snapshot of key-value pairs.
    pub fn new<I, K>(data: I, auditor: &'a A) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Self {
            data: data
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
            auditor,
        }
    }

    /// Returns the auditor bound to this map.
    pub fn auditor(&self) -> &'a A {
        self.auditor
    }

    /// Returns the number of entries in the backing store.
    ///
    /// Owned override values are not counted.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the backing store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads the value for `key`.
    ///
    /// # Errors
    ///
    /// - `AccessDenied` if the auditor does not grant `READABLE`
    /// - `KeyNotFound` if the key is neither owned nor in the backing store
    pub fn read(&self, key: &str) -> Result<i64, Error> {
        let decision = self.auditor.check_read(key);
        ensure(decision.capability, Operation::Read, key)?;

        if decision.capability.is_owned() {
            tracing::trace!(key, "read served from auditor override");
            return Ok(decision.value);
        }

        self.data.get(key).copied().ok_or_else(|| {
            tracing::debug!(key, "key not found");
            Violation::key_not_found(key).into()
        })
    }

    /// Overwrites the value of an existing key.
    ///
    /// Editing a key absent from the backing store is a no-op; `edit` never
    /// creates keys.
    ///
    /// # Errors
    ///
    /// `AccessDenied` if the auditor does not grant `WRITEABLE`.
    pub fn edit(&mut self, key: &str, value: i64) -> Result<(), Error> {
        let capability = self.auditor.check_write(key, value);
        ensure(capability, Operation::Write, key)?;

        if capability.is_owned() {
            return Ok(());
        }

        if let Some(slot) = self.data.get_mut(key) {
            *slot = value;
        }
        Ok(())
    }

    /// Inserts `key`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// `AccessDenied` if the auditor does not grant `ADDABLE`.
    pub fn add(&mut self, key: &str, value: i64) -> Result<(), Error> {
        let capability = self.auditor.check_add(key, value);
        ensure(capability, Operation::Add, key)?;

        if capability.is_owned() {
            return Ok(());
        }

        self.data.insert(key.to_owned(), value);
        Ok(())
    }

    /// Erases `key` from the backing store.
    ///
    /// Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// `AccessDenied` if the auditor does not grant `REMOVABLE`.
    pub fn remove(&mut self, key: &str) -> Result<(), Error> {
        let capability = self.auditor.check_remove(key);
        ensure(capability, Operation::Remove, key)?;

        if capability.is_owned() {
            return Ok(());
        }

        self.data.remove(key);
        Ok(())
    }
}

/// Fails with `AccessDenied` unless `capability` grants `operation`.
fn ensure(capability: Capability, operation: Operation, key: &str) -> Result<(), Error> {
    if capability.grants(operation.required()) {
        return Ok(());
    }
    tracing::debug!(key, %operation, %capability, "access denied");
    Err(Violation::access_denied(operation, key).into())
}
