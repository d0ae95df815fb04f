//! Driver alert severity.
//!
//! - `severity`: Probability to severity classification
//! - `style`: Compile-time style table indexed by severity
//! - `channel`: Channel state and the three-bar alert cluster

mod channel;
mod severity;
mod style;

pub use channel::{AlertChannel, AlertCluster, ChannelState, DisengagePredictions, update_channel};
pub use severity::{Severity, Tier, classify, peak_probability};
pub use style::{Dot, DotState, SEVERITY_STYLES, SeverityStyle, style_for};
