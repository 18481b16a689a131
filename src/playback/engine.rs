use crate::geometry::Position;
use crate::playback::config::PlaybackConfig;
use crate::solution::Solution;

/// Whether the clock advances on each tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

/// What a single `tick` did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// Held on a whole turn, nothing recomputed
    Frozen,
    /// Paused, positions refreshed at the same time
    Idle,
    /// Moved forward between two whole turns
    Advanced,
    /// Landed exactly on this whole turn
    TurnReached(u64),
    /// Ran past the last turn and rewound to the start
    Restarted,
}

/// Deterministic clock turning discrete turns into smooth motion
///
/// Driven by one external `tick` per frame. Owns only transient state: the
/// tick counter, the freeze countdown and the interpolated ant positions.
#[derive(Clone, Debug)]
pub struct PlaybackEngine {
    config: PlaybackConfig,
    tick_counter: u64,
    freeze_remaining: u64,
    state: PlaybackState,
    positions: Vec<Position>,
}

impl PlaybackEngine {
    /// Create a playing engine at tick 0
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            tick_counter: 0,
            freeze_remaining: 0,
            state: PlaybackState::Playing,
            positions: Vec::new(),
        }
    }

    /// Advance the clock by one frame and refresh ant positions
    pub fn tick(&mut self, solution: &Solution) -> TickEvent {
        if self.freeze_remaining > 0 {
            self.freeze_remaining -= 1;
            return TickEvent::Frozen;
        }

        let mut event = TickEvent::Idle;
        if self.state == PlaybackState::Playing {
            self.tick_counter = self.tick_counter.saturating_add(1);
            event = TickEvent::Advanced;
        }

        solution.write_positions(self.fractional_turn(), &mut self.positions);

        if self.tick_counter % self.config.ticks_per_turn() == 0 {
            self.freeze_remaining = self.config.freeze_ticks();
            if event == TickEvent::Advanced {
                event = TickEvent::TurnReached(self.current_turn());
            }
        }

        if self.tick_counter > self.last_tick(solution) {
            self.tick_counter = 0;
            event = TickEvent::Restarted;
        }

        event
    }

    /// Toggle between playing and paused
    pub fn play_or_pause(&mut self) {
        self.state = match self.state {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
        };
    }

    /// Jump to the next whole turn
    pub fn step_forward(&mut self) {
        let per_turn = self.config.ticks_per_turn();
        let floor = self.tick_counter - self.tick_counter % per_turn;
        self.tick_counter = floor.checked_add(per_turn).unwrap_or(floor);
        self.freeze_remaining = 0;
    }

    /// Jump to the previous whole turn, stopping at 0
    pub fn step_backward(&mut self) {
        let per_turn = self.config.ticks_per_turn();
        let rem = self.tick_counter % per_turn;
        self.tick_counter = if rem == 0 {
            self.tick_counter.saturating_sub(per_turn)
        } else {
            self.tick_counter - rem
        };
        self.freeze_remaining = 0;
    }

    /// Last tick before the playback loops, saturating for huge turn lengths
    #[inline]
    pub fn last_tick(&self, solution: &Solution) -> u64 {
        u64::from(solution.turn_count()).saturating_mul(self.config.ticks_per_turn())
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    #[inline]
    pub fn tick_counter(&self) -> u64 {
        self.tick_counter
    }

    #[inline]
    pub fn freeze_remaining(&self) -> u64 {
        self.freeze_remaining
    }

    /// Whole turn the clock is on or past
    #[inline]
    pub fn current_turn(&self) -> u64 {
        self.tick_counter / self.config.ticks_per_turn()
    }

    #[inline]
    pub fn fractional_turn(&self) -> f64 {
        self.tick_counter as f64 / self.config.ticks_per_turn() as f64
    }

    /// Ant positions from the last refreshing tick, in ant id order
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
