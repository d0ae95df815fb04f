//! Configuration constants.
//!
//! Parameter keys, fixed table sizes and the cadence a host is expected to
//! drive the core at. Everything here is `const` so it lands in read-only
//! data on embedded targets.

// =============================================================================
// Parameter Store Keys
// =============================================================================

/// Whether assisted driving is enabled at all.
pub const ENABLED_KEY: &str = "OpenpilotEnabledToggle";

/// Whether the alpha feature set is active. Only meaningful when enabled.
pub const EXPERIMENTAL_KEY: &str = "ExperimentalMode";

/// Shadow of [`ENABLED_KEY`] as last seen by the change poll.
pub const LAST_ENABLED_KEY: &str = "LastOpenpilotEnabledToggle";

/// Shadow of [`EXPERIMENTAL_KEY`] as last seen by the change poll.
pub const LAST_EXPERIMENTAL_KEY: &str = "LastExperimentalMode";

/// Number of distinct keys held by [`MemoryStore`](crate::mode::MemoryStore).
pub const STORE_CAPACITY: usize = 8;

// =============================================================================
// Alert Cluster Dimensions
// =============================================================================

/// Risk channels tracked by the cluster (steering, brake, gas).
pub const NUM_CHANNELS: usize = 3;

/// Discrete severity levels (0 = disabled .. 7 = highest).
pub const NUM_SEVERITY_LEVELS: usize = 8;

/// Highest severity level.
pub const MAX_SEVERITY: u8 = (NUM_SEVERITY_LEVELS - 1) as u8;

/// Indicator dots drawn per alert bar.
pub const NUM_DOTS: usize = 7;

/// Maximum prediction horizons retained per channel.
pub const MAX_HORIZONS: usize = 16;

/// Border thickness for every alert bar, in pixels.
pub const BORDER_WIDTH: u32 = 10;

// Every active severity lights exactly one more dot
const _: () = assert!(NUM_DOTS == NUM_SEVERITY_LEVELS - 1);

// =============================================================================
// Host Cadence
// =============================================================================

/// Interval between external mode-change polls. The flags change rarely.
pub const MODE_POLL_INTERVAL_MS: u32 = 1000;

/// Rate at which fresh probability triples arrive from the model.
pub const ALERT_UPDATE_HZ: u32 = 20;

/// Interval between alert updates, derived from [`ALERT_UPDATE_HZ`].
pub const ALERT_UPDATE_INTERVAL_MS: u32 = 1000 / ALERT_UPDATE_HZ;

const _: () = assert!(ALERT_UPDATE_INTERVAL_MS < MODE_POLL_INTERVAL_MS);
