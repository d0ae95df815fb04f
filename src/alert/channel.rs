//! Alert channels and the three-bar driver alert cluster.
//!
//! The perception model publishes one probability per prediction horizon
//! for each of three disengagement risks. Every model tick the host feeds
//! the triple to [`AlertCluster::update`]. It then reads each channel's
//! severity and style when drawing.

use core::fmt::Write;

use heapless::{String, Vec};

use super::severity::{Severity, peak_probability};
use super::style::SeverityStyle;
use crate::config::{MAX_HORIZONS, NUM_CHANNELS};
use crate::debug_log::{DebugLog, LOG_LINE_LENGTH};
use crate::error::AlertError;

/// One of the independent risk signals.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertChannel {
    /// Driver overriding the steering.
    Steering,
    /// Driver braking to disengage.
    Brake,
    /// Driver pressing the gas to disengage.
    Gas,
}

impl AlertChannel {
    /// Every channel, in display order (top to bottom).
    pub const ALL: [Self; NUM_CHANNELS] = [Self::Steering, Self::Brake, Self::Gas];

    /// Position in [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Steering => 0,
            Self::Brake => 1,
            Self::Gas => 2,
        }
    }

    /// Label drawn inside the bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Steering => "Steering",
            Self::Brake => "Brake",
            Self::Gas => "Gas",
        }
    }

    /// Icon asset name, tinted by the style's icon color.
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::Steering => "steering_dac",
            Self::Brake => "brake_dac",
            Self::Gas => "gas_dac",
        }
    }
}

// =============================================================================
// Channel State
// =============================================================================

/// Latest classification of a single channel.
#[derive(Clone, Debug)]
pub struct ChannelState {
    kind: AlertChannel,
    probabilities: Vec<f32, MAX_HORIZONS>,
    severity: Severity,
    max_probability: f32,
}

impl ChannelState {
    /// Fresh channel: no probabilities yet, severity 0.
    pub const fn new(kind: AlertChannel) -> Self {
        Self {
            kind,
            probabilities: Vec::new(),
            severity: Severity::NONE,
            max_probability: 0.0,
        }
    }

    /// Reclassify from a fresh set of horizons.
    ///
    /// On error the previous state is kept as is.
    pub fn update(
        &mut self,
        probabilities: &[f32],
    ) -> Result<Severity, AlertError> {
        let peak = peak_probability(probabilities)?;
        let retained = Vec::from_slice(probabilities).map_err(|_| AlertError::TooManyHorizons {
            len: probabilities.len(),
            max: MAX_HORIZONS,
        })?;

        self.probabilities = retained;
        self.max_probability = peak;
        self.severity = Severity::from_probability(peak);
        Ok(self.severity)
    }

    #[inline]
    pub const fn kind(&self) -> AlertChannel { self.kind }

    /// Horizons from the last successful update.
    #[inline]
    pub fn probabilities(&self) -> &[f32] { &self.probabilities }

    #[inline]
    pub const fn severity(&self) -> Severity { self.severity }

    /// Peak probability behind the current severity.
    ///
    /// NaN when every horizon of the last update was NaN (severity 0).
    #[inline]
    pub const fn max_probability(&self) -> f32 { self.max_probability }

    /// Style for the current severity.
    #[inline]
    pub fn style(&self) -> &'static SeverityStyle { self.severity.style() }
}

/// Classify `probabilities` into `channel` in place.
pub fn update_channel(
    channel: &mut ChannelState,
    probabilities: &[f32],
) -> Result<(), AlertError> {
    channel.update(probabilities).map(|_| ())
}

// =============================================================================
// Cluster
// =============================================================================

/// Per-horizon disengagement probabilities for one model tick.
#[derive(Clone, Copy, Debug)]
pub struct DisengagePredictions<'a> {
    pub steer_override: &'a [f32],
    pub brake_disengage: &'a [f32],
    pub gas_disengage: &'a [f32],
}

impl<'a> DisengagePredictions<'a> {
    /// Probabilities feeding the given channel.
    pub const fn for_channel(
        &self,
        channel: AlertChannel,
    ) -> &'a [f32] {
        match channel {
            AlertChannel::Steering => self.steer_override,
            AlertChannel::Brake => self.brake_disengage,
            AlertChannel::Gas => self.gas_disengage,
        }
    }
}

/// The three alert bars shown on the road view.
#[derive(Clone, Debug)]
pub struct AlertCluster {
    channels: [ChannelState; NUM_CHANNELS],
}

impl AlertCluster {
    pub const fn new() -> Self {
        Self {
            channels: [
                ChannelState::new(AlertChannel::Steering),
                ChannelState::new(AlertChannel::Brake),
                ChannelState::new(AlertChannel::Gas),
            ],
        }
    }

    /// Update every channel from one model tick.
    ///
    /// Channels are independent: a bad sequence on one leaves that channel
    /// unchanged but does not stop the others. The first error is returned.
    pub fn update(
        &mut self,
        predictions: &DisengagePredictions<'_>,
    ) -> Result<(), AlertError> {
        let mut first_error = None;
        for channel in &mut self.channels {
            if let Err(e) = channel.update(predictions.for_channel(channel.kind)) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// State of one channel.
    #[inline]
    pub const fn channel(
        &self,
        kind: AlertChannel,
    ) -> &ChannelState {
        &self.channels[kind.index()]
    }

    /// Mutable state of one channel, for feeding channels separately.
    #[inline]
    pub fn channel_mut(
        &mut self,
        kind: AlertChannel,
    ) -> &mut ChannelState {
        &mut self.channels[kind.index()]
    }

    /// All channels in display order.
    #[inline]
    pub fn channels(&self) -> &[ChannelState] { &self.channels }

    /// Highest severity across channels.
    pub fn peak_severity(&self) -> Severity {
        self.channels.iter().map(ChannelState::severity).max().unwrap_or(Severity::NONE)
    }

    /// Write one `Label: L<level> P=<peak>` line per channel to `log`.
    pub fn log_levels(
        &self,
        log: &mut DebugLog,
    ) {
        for channel in &self.channels {
            let mut line: String<LOG_LINE_LENGTH> = String::new();
            write!(
                line,
                "{}: L{} P={:.4}",
                channel.kind.label(),
                channel.severity.level(),
                channel.max_probability
            )
            .ok();
            log.push(&line);
        }
    }
}

impl Default for AlertCluster {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{RED, Tint};

    #[test]
    fn test_channel_order() {
        for (i, channel) in AlertChannel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
        assert_eq!(AlertChannel::Steering.icon_name(), "steering_dac");
        assert_eq!(AlertChannel::Gas.label(), "Gas");
    }

    #[test]
    fn test_update_channel_sets_fields() {
        let mut channel = ChannelState::new(AlertChannel::Brake);
        update_channel(&mut channel, &[0.1, 0.45, 0.2]).unwrap();

        assert_eq!(channel.severity().level(), 5);
        assert_eq!(channel.max_probability(), 0.45);
        assert_eq!(channel.probabilities(), &[0.1f32, 0.45, 0.2][..]);
    }

    #[test]
    fn test_update_channel_empty_keeps_state() {
        let mut channel = ChannelState::new(AlertChannel::Steering);
        update_channel(&mut channel, &[0.7]).unwrap();

        assert_eq!(update_channel(&mut channel, &[]), Err(AlertError::InvalidInput));
        assert_eq!(channel.severity().level(), 6, "failed update must not reset severity");
        assert_eq!(channel.max_probability(), 0.7);
    }

    #[test]
    fn test_update_channel_too_many_horizons() {
        let mut channel = ChannelState::new(AlertChannel::Gas);
        let probabilities = [0.5; MAX_HORIZONS + 1];
        assert_eq!(
            update_channel(&mut channel, &probabilities),
            Err(AlertError::TooManyHorizons {
                len: MAX_HORIZONS + 1,
                max: MAX_HORIZONS
            })
        );
        assert_eq!(channel.severity(), Severity::NONE);
        assert!(channel.probabilities().is_empty());
    }

    #[test]
    fn test_cluster_update() {
        let mut cluster = AlertCluster::new();
        let predictions = DisengagePredictions {
            steer_override: &[0.05, 0.9, 0.3],
            brake_disengage: &[0.0, 0.0005],
            gas_disengage: &[0.25],
        };
        cluster.update(&predictions).unwrap();

        let steering = cluster.channel(AlertChannel::Steering);
        assert_eq!(steering.severity(), Severity::MAX);
        assert_eq!(steering.style().border, Tint::opaque(RED));
        assert_eq!(cluster.channel(AlertChannel::Brake).severity(), Severity::NONE);
        assert_eq!(cluster.channel(AlertChannel::Gas).severity().level(), 3);
        assert_eq!(cluster.peak_severity(), Severity::MAX);
    }

    #[test]
    fn test_cluster_channels_independent() {
        let mut cluster = AlertCluster::new();
        let predictions = DisengagePredictions {
            steer_override: &[],
            brake_disengage: &[0.65],
            gas_disengage: &[0.15],
        };

        assert_eq!(cluster.update(&predictions), Err(AlertError::InvalidInput));
        assert_eq!(cluster.channel(AlertChannel::Steering).severity(), Severity::NONE);
        assert_eq!(cluster.channel(AlertChannel::Brake).severity().level(), 6);
        assert_eq!(cluster.channel(AlertChannel::Gas).severity().level(), 2);
    }

    #[test]
    fn test_channel_mut() {
        let mut cluster = AlertCluster::default();
        cluster.channel_mut(AlertChannel::Gas).update(&[0.35]).unwrap();
        assert_eq!(cluster.peak_severity().level(), 4);
        assert_eq!(cluster.channels().len(), NUM_CHANNELS);
    }

    #[test]
    fn test_all_nan_channel() {
        let mut cluster = AlertCluster::new();
        cluster
            .update(&DisengagePredictions {
                steer_override: &[f32::NAN, f32::NAN],
                brake_disengage: &[0.0],
                gas_disengage: &[0.0],
            })
            .unwrap();

        let steering = cluster.channel(AlertChannel::Steering);
        assert_eq!(steering.severity(), Severity::NONE);
        assert!(steering.max_probability().is_nan());

        let mut log = DebugLog::new();
        cluster.log_levels(&mut log);
        assert_eq!(log.iter().next(), Some("Steering: L0 P=NaN"));
    }

    #[test]
    fn test_log_levels() {
        let mut cluster = AlertCluster::new();
        cluster
            .update(&DisengagePredictions {
                steer_override: &[0.9],
                brake_disengage: &[0.0],
                gas_disengage: &[0.25],
            })
            .unwrap();

        let mut log = DebugLog::new();
        cluster.log_levels(&mut log);

        let mut lines = log.iter();
        assert_eq!(lines.next(), Some("Steering: L7 P=0.9000"));
        assert_eq!(lines.next(), Some("Brake: L0 P=0.0000"));
        assert_eq!(lines.next(), Some("Gas: L3 P=0.2500"));
        assert_eq!(lines.next(), None);
    }
}
