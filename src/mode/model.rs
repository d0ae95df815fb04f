//! Mode state model: reads, idempotent writes and external-change polling.
//!
//! [`ModeModel`] wraps a [`ParamStore`] handle passed in by the host. It
//! holds no state of its own. The store is the single source of truth, so
//! several models over the same store always agree.
//!
//! # Change Detection
//!
//! Other processes may flip the flags (a settings screen, a paired device,
//! direct store edits). The host calls
//! [`has_mode_changed_since_last_poll`](ModeModel::has_mode_changed_since_last_poll)
//! on a slow timer ([`MODE_POLL_INTERVAL_MS`](crate::config::MODE_POLL_INTERVAL_MS)).
//! Each poll compares the live pair with a shadow pair persisted next to it.
//! It reports `true` exactly once per change.
//!
//! The shadow pair is written only by the poll itself. A mode set through
//! this model is therefore also reported once by the next poll, unless the
//! host calls [`prime_poll`](ModeModel::prime_poll) afterwards.

use super::driving_mode::{DrivingMode, ModeFlags};
use super::store::ParamStore;

/// Receiver of mode-change notifications.
pub trait ModeSink {
    /// Called once for every actual transition.
    fn mode_changed(
        &mut self,
        mode: DrivingMode,
    );
}

impl<F: FnMut(DrivingMode)> ModeSink for F {
    #[inline]
    fn mode_changed(
        &mut self,
        mode: DrivingMode,
    ) {
        self(mode);
    }
}

/// What to do when the store has never been configured.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootstrapPolicy {
    /// Use whatever the flags contain (both `false` means stock ADAS).
    #[default]
    KeepStored,
    /// Force this mode when both flags are `false`.
    DefaultWhenUnset(DrivingMode),
}

/// Tri-state driving mode over a two-flag parameter store.
pub struct ModeModel<S> {
    store: S,
}

impl<S: ParamStore> ModeModel<S> {
    /// Wrap a store handle. Pass `&mut store` to keep ownership outside.
    pub const fn new(store: S) -> Self { Self { store } }

    /// Borrow the underlying store.
    #[inline]
    pub const fn store(&self) -> &S { &self.store }

    /// Give the store handle back.
    #[inline]
    pub fn into_inner(self) -> S { self.store }

    /// Derive the current mode from the live flags.
    pub fn current_mode(&self) -> Result<DrivingMode, S::Error> { ModeFlags::read(&self.store).map(ModeFlags::mode) }

    /// Check whether `mode` is the one currently selected.
    pub fn is_active(
        &self,
        mode: DrivingMode,
    ) -> Result<bool, S::Error> {
        Ok(self.current_mode()? == mode)
    }

    /// Switch to `target` without notifying anyone.
    ///
    /// Returns `true` if the flags were written.
    pub fn set_mode(
        &mut self,
        target: DrivingMode,
    ) -> Result<bool, S::Error> {
        self.set_mode_with(target, &mut |_: DrivingMode| {})
    }

    /// Switch to `target` and notify `sink` on an actual transition.
    ///
    /// Selecting the active mode again is a no-op: nothing is written,
    /// `sink` is not called and `false` is returned. Otherwise both flags
    /// are written in a single batch before `sink` sees the new mode.
    pub fn set_mode_with<K: ModeSink + ?Sized>(
        &mut self,
        target: DrivingMode,
        sink: &mut K,
    ) -> Result<bool, S::Error> {
        if self.current_mode()? == target {
            return Ok(false);
        }

        target.flags().write(&mut self.store)?;
        sink.mode_changed(target);
        Ok(true)
    }

    /// Report whether the flags changed since the previous detected change.
    ///
    /// On a change the shadow pair is updated and `true` returned. Without a
    /// change nothing is written.
    pub fn has_mode_changed_since_last_poll(&mut self) -> Result<bool, S::Error> {
        let current = ModeFlags::read(&self.store)?;
        if current == ModeFlags::read_last(&self.store)? {
            return Ok(false);
        }

        current.write_last(&mut self.store)?;
        Ok(true)
    }

    /// Sync the shadow pair with the live flags so the next poll starts clean.
    pub fn prime_poll(&mut self) -> Result<(), S::Error> {
        let current = ModeFlags::read(&self.store)?;
        if current != ModeFlags::read_last(&self.store)? {
            current.write_last(&mut self.store)?;
        }
        Ok(())
    }

    /// Apply a first-run policy. Returns `true` if a default was forced.
    pub fn bootstrap(
        &mut self,
        policy: BootstrapPolicy,
    ) -> Result<bool, S::Error> {
        match policy {
            BootstrapPolicy::KeepStored => Ok(false),
            BootstrapPolicy::DefaultWhenUnset(mode) => {
                if ModeFlags::read(&self.store)? == ModeFlags::default() {
                    self.set_mode(mode)
                } else {
                    Ok(false)
                }
            },
        }
    }
}
