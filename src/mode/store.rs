//! Persistent parameter store contract.
//!
//! The mode model never owns persistence. It talks to whatever key-value
//! store the host provides through [`ParamStore`], and propagates that
//! store's errors unchanged.

use heapless::Vec;

use crate::config::STORE_CAPACITY;
use crate::error::StoreError;

/// Boolean key-value store shared with the rest of the system.
///
/// Missing keys read as `false`.
pub trait ParamStore {
    /// Error raised by the backing store.
    type Error;

    /// Read a flag. A key that was never written reads as `false`.
    fn get_bool(
        &self,
        key: &'static str,
    ) -> Result<bool, Self::Error>;

    /// Write a single flag.
    fn put_bool(
        &mut self,
        key: &'static str,
        value: bool,
    ) -> Result<(), Self::Error>;

    /// Write several flags as one logical update.
    ///
    /// Stores with multi-key transactions should override this to commit
    /// all entries together. The default writes them in order.
    fn put_bools(
        &mut self,
        entries: &[(&'static str, bool)],
    ) -> Result<(), Self::Error> {
        for &(key, value) in entries {
            self.put_bool(key, value)?;
        }
        Ok(())
    }
}

impl<S: ParamStore + ?Sized> ParamStore for &mut S {
    type Error = S::Error;

    #[inline]
    fn get_bool(
        &self,
        key: &'static str,
    ) -> Result<bool, Self::Error> {
        (**self).get_bool(key)
    }

    #[inline]
    fn put_bool(
        &mut self,
        key: &'static str,
        value: bool,
    ) -> Result<(), Self::Error> {
        (**self).put_bool(key, value)
    }

    #[inline]
    fn put_bools(
        &mut self,
        entries: &[(&'static str, bool)],
    ) -> Result<(), Self::Error> {
        (**self).put_bools(entries)
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Fixed-capacity in-memory store with no heap allocation.
///
/// Useful as the backing store on targets without persistence and as the
/// fake store in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Vec<(&'static str, bool), STORE_CAPACITY>,
}

impl MemoryStore {
    /// Create an empty store. Every key reads as `false`.
    pub const fn new() -> Self { Self { entries: Vec::new() } }

    /// Number of keys that have been written.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Check if no key has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Check whether a key has ever been written.
    pub fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }
}

impl ParamStore for MemoryStore {
    type Error = StoreError;

    fn get_bool(
        &self,
        key: &'static str,
    ) -> Result<bool, Self::Error> {
        Ok(self.entries.iter().find(|(k, _)| *k == key).is_some_and(|(_, v)| *v))
    }

    fn put_bool(
        &mut self,
        key: &'static str,
        value: bool,
    ) -> Result<(), Self::Error> {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
            return Ok(());
        }

        self.entries.push((key, value)).map_err(|_| StoreError::Full {
            capacity: STORE_CAPACITY,
        })
    }

    /// All or nothing: if the new keys do not fit, nothing is written.
    fn put_bools(
        &mut self,
        entries: &[(&'static str, bool)],
    ) -> Result<(), Self::Error> {
        let new_keys = entries
            .iter()
            .enumerate()
            .filter(|&(i, &(key, _))| !self.contains(key) && !entries[..i].iter().any(|&(k, _)| k == key))
            .count();
        if self.entries.len() + new_keys > STORE_CAPACITY {
            return Err(StoreError::Full {
                capacity: STORE_CAPACITY,
            });
        }

        for &(key, value) in entries {
            self.put_bool(key, value)?;
        }
        Ok(())
    }
}
