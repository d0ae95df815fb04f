//! Driving-mode state.
//!
//! - `store`: Parameter store contract and the in-memory store
//! - `driving_mode`: Mode enum and its two-flag encoding
//! - `model`: Mode reads, idempotent writes, change polling and bootstrap

mod driving_mode;
mod model;
mod store;

pub use driving_mode::{DrivingMode, ModeFlags, current_mode};
pub use model::{BootstrapPolicy, ModeModel, ModeSink};
pub use store::{MemoryStore, ParamStore};
