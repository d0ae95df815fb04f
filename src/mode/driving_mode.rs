//! Driving mode and its two-flag encoding.
//!
//! The store holds two booleans, [`ENABLED_KEY`] and [`EXPERIMENTAL_KEY`].
//! The mode is always derived from them and never stored on its own:
//!
//! | enabled | experimental | mode           |
//! |---------|--------------|----------------|
//! | false   | any          | `StockAdas`    |
//! | true    | false        | `Chill`        |
//! | true    | true         | `Experimental` |
//!
//! Code outside this module reads the flags only through [`ModeFlags`].

use super::store::ParamStore;
use crate::config::{ENABLED_KEY, EXPERIMENTAL_KEY, LAST_ENABLED_KEY, LAST_EXPERIMENTAL_KEY};

/// Operating posture of the assistance system.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrivingMode {
    /// Assistance disabled, the car's own ADAS is in charge.
    #[default]
    StockAdas,
    /// Assistance enabled with the stable feature set.
    Chill,
    /// Assistance enabled with the alpha feature set.
    Experimental,
}

impl DrivingMode {
    /// Every mode, in selector order.
    pub const ALL: [Self; 3] = [Self::StockAdas, Self::Chill, Self::Experimental];

    /// Derive the mode from the flag pair. Total: every pair maps to a mode.
    pub const fn from_flags(flags: ModeFlags) -> Self {
        if !flags.enabled {
            Self::StockAdas
        } else if flags.experimental {
            Self::Experimental
        } else {
            Self::Chill
        }
    }

    /// Flag pair that encodes this mode.
    pub const fn flags(self) -> ModeFlags {
        match self {
            Self::StockAdas => ModeFlags::new(false, false),
            Self::Chill => ModeFlags::new(true, false),
            Self::Experimental => ModeFlags::new(true, true),
        }
    }

    /// Title shown on the selector and info dialog.
    pub const fn title(self) -> &'static str {
        match self {
            Self::StockAdas => "Stock ADAS Mode",
            Self::Chill => "Chill Mode",
            Self::Experimental => "Experimental Mode",
        }
    }

    /// Transient confirmation shown after switching.
    pub const fn enabled_message(self) -> &'static str {
        match self {
            Self::StockAdas => "Stock ADAS mode enabled",
            Self::Chill => "Chill mode enabled",
            Self::Experimental => "Experimental mode enabled",
        }
    }

    /// Longer explanation for the info dialog.
    pub const fn description(self) -> &'static str {
        match self {
            Self::StockAdas => {
                "Uses the stock ADAS features of your vehicle. It provides a familiar driving \
                 experience with the safety features you're accustomed to."
            },
            Self::Chill => {
                "The default mode. Safe and reliable for everyday driving, with conservative \
                 actions that prioritize a smooth and comfortable ride."
            },
            Self::Experimental => {
                "Adaptive cruise control and lane keep assistance with the alpha feature set. \
                 Your attention is required at all times. Takes effect when the car is powered off."
            },
        }
    }

    /// Check whether the assistance system is engaged in this mode.
    #[inline]
    pub const fn is_assisted(self) -> bool { self.flags().enabled }
}

/// Raw `(enabled, experimental)` flag pair.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeFlags {
    pub enabled: bool,
    pub experimental: bool,
}

impl ModeFlags {
    pub const fn new(
        enabled: bool,
        experimental: bool,
    ) -> Self {
        Self { enabled, experimental }
    }

    /// Read the live flag pair.
    pub fn read<S: ParamStore + ?Sized>(store: &S) -> Result<Self, S::Error> {
        Ok(Self::new(store.get_bool(ENABLED_KEY)?, store.get_bool(EXPERIMENTAL_KEY)?))
    }

    /// Read the shadow pair recorded by the last detected change.
    pub fn read_last<S: ParamStore + ?Sized>(store: &S) -> Result<Self, S::Error> {
        Ok(Self::new(store.get_bool(LAST_ENABLED_KEY)?, store.get_bool(LAST_EXPERIMENTAL_KEY)?))
    }

    /// Write this pair to the live keys in one batch.
    pub fn write<S: ParamStore + ?Sized>(
        self,
        store: &mut S,
    ) -> Result<(), S::Error> {
        store.put_bools(&[(ENABLED_KEY, self.enabled), (EXPERIMENTAL_KEY, self.experimental)])
    }

    /// Write this pair to the shadow keys in one batch.
    pub fn write_last<S: ParamStore + ?Sized>(
        self,
        store: &mut S,
    ) -> Result<(), S::Error> {
        store.put_bools(&[(LAST_ENABLED_KEY, self.enabled), (LAST_EXPERIMENTAL_KEY, self.experimental)])
    }

    /// Mode this pair encodes.
    #[inline]
    pub const fn mode(self) -> DrivingMode { DrivingMode::from_flags(self) }
}

impl From<DrivingMode> for ModeFlags {
    fn from(mode: DrivingMode) -> Self { mode.flags() }
}

impl From<ModeFlags> for DrivingMode {
    fn from(flags: ModeFlags) -> Self { Self::from_flags(flags) }
}

/// Read the current mode from the store.
pub fn current_mode<S: ParamStore + ?Sized>(store: &S) -> Result<DrivingMode, S::Error> {
    ModeFlags::read(store).map(ModeFlags::mode)
}
