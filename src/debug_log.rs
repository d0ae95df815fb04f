//! On-device debug log.
//!
//! Holds the most recent alert cluster dumps as fixed-width lines, for a
//! debug overlay or a serial dump (see
//! [`AlertCluster::log_levels`](crate::alert::AlertCluster::log_levels)).
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! cluster.log_levels(&mut log);
//!
//! for line in log.iter() {
//!     defmt::debug!("{}", line);
//! }
//! ```

use heapless::{Deque, String};

use crate::config::NUM_CHANNELS;

/// Cluster dumps kept before the oldest lines are dropped.
pub const LOG_DUMPS: usize = 2;

/// Lines kept: one per channel for each retained dump.
pub const LOG_BUFFER_SIZE: usize = NUM_CHANNELS * LOG_DUMPS;

/// Maximum bytes per line. Longer lines are cut on a char boundary.
pub const LOG_LINE_LENGTH: usize = 48;

/// Ring buffer of the most recent log lines.
#[derive(Clone, Debug)]
pub struct DebugLog {
    lines: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self { Self { lines: Deque::new() } }

    /// Append a line, evicting the oldest when full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }

        let mut end = msg.len().min(LOG_LINE_LENGTH);
        while !msg.is_char_boundary(end) {
            end -= 1;
        }

        let mut line = String::new();
        line.push_str(&msg[..end]).ok();
        self.lines.push_back(line).ok();
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_two_cluster_dumps() {
        assert_eq!(LOG_BUFFER_SIZE, 6);

        let mut log = DebugLog::default();
        assert!(log.is_empty());
        for line in ["0", "1", "2", "3", "4", "5"] {
            log.push(line);
        }
        assert_eq!(log.iter().count(), LOG_BUFFER_SIZE);

        // Next line evicts the oldest
        log.push("New");
        assert_eq!(log.iter().count(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("1"));
        assert_eq!(log.iter().last(), Some("New"));
    }

    #[test]
    fn test_long_line_truncated() {
        let mut log = DebugLog::new();
        log.push("Steering: L7 P=0.9000 and a very long tail that will not fit on one line");

        let stored = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH);
        assert!(stored.starts_with("Steering: L7"));
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        let mut log = DebugLog::new();
        // 47 ASCII bytes then a 2-byte char straddling the limit
        let msg = "a".repeat(LOG_LINE_LENGTH - 1) + "é";
        log.push(&msg);

        let stored = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH - 1);
        assert!(stored.chars().all(|c| c == 'a'));
    }
}
