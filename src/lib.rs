//! Driving-mode state and driver-alert severity for an ADAS dashboard.
//!
//! This library holds the logic behind the mode selector and the on-road
//! driver alert cluster. The rendering host draws the widgets and calls in
//! here for everything that is not pixels:
//!
//! - [`mode`]: Tri-state driving mode derived from two persisted flags,
//!   idempotent mode switching and external-change polling
//! - [`alert`]: Risk probability to 0-7 severity classification and the
//!   per-severity style table
//! - [`ui`]: Alert palette and label text styles
//! - [`config`]: Parameter keys, table sizes and host cadence
//! - [`thresholds`]: Severity thresholds
//! - [`debug_log`]: Ring buffer for on-device debug lines
//!
//! # Testing
//!
//! Run tests on the host with:
//! ```bash
//! cargo test
//! cargo test --features legacy-threshold
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while firmware builds are
//! `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod alert;
pub mod config;
pub mod debug_log;
pub mod error;
pub mod mode;
pub mod thresholds;
pub mod ui;

// Re-export commonly used items
pub use alert::{AlertChannel, AlertCluster, DisengagePredictions, Severity, SeverityStyle, classify, style_for};
pub use error::{AlertError, StoreError};
pub use mode::{DrivingMode, MemoryStore, ModeModel, ModeSink, ParamStore};
