/// Default number of ticks needed to play one turn
pub const DEFAULT_TICKS_PER_TURN: u64 = 100;
/// Default pause, in ticks, inserted on every whole turn
pub const DEFAULT_FREEZE_TICKS: u64 = 20;
/// Largest accepted turn length
pub const MAX_TICKS_PER_TURN: u64 = 1_000_000;

/// Granularity of the playback clock
///
/// `ticks_per_turn` is never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    ticks_per_turn: u64,
    freeze_ticks: u64,
}

impl PlaybackConfig {
    /// Build a config, rejecting a zero turn length
    pub fn new(ticks_per_turn: u64, freeze_ticks: u64) -> Option<Self> {
        (ticks_per_turn > 0).then_some(Self {
            ticks_per_turn,
            freeze_ticks,
        })
    }

    #[inline]
    pub fn ticks_per_turn(&self) -> u64 {
        self.ticks_per_turn
    }

    #[inline]
    pub fn freeze_ticks(&self) -> u64 {
        self.freeze_ticks
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            ticks_per_turn: DEFAULT_TICKS_PER_TURN,
            freeze_ticks: DEFAULT_FREEZE_TICKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.ticks_per_turn(), 100);
        assert_eq!(config.freeze_ticks(), 20);
    }

    #[test]
    fn test_zero_turn_length_rejected() {
        assert!(PlaybackConfig::new(0, 5).is_none());

        let config = PlaybackConfig::new(4, 0).unwrap();
        assert_eq!(config.ticks_per_turn(), 4);
        assert_eq!(config.freeze_ticks(), 0);
    }
}
