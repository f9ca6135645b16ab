use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;

/// Granularity of the runtime loop; every event-loop timeout delivers one tick.
pub const TICK_RATE_MS: u64 = 100;

/// Default length of a session in seconds.
pub const DEFAULT_SESSION_SECS: u32 = 30;

/// Runtime ticks that make up one countdown second.
const TICKS_PER_SECOND: u32 = (1000 / TICK_RATE_MS) as u32;

/// Ticks between a countdown step and the visibility re-roll (~200ms).
const REROLL_DELAY_TICKS: u32 = 2;

/// One play-through of the tap game.
///
/// Owns all mutable session state; the presentation layer only reads it.
/// The random source is injected so tests can supply deterministic
/// visibility sequences.
pub struct Session {
    pub score: u32,
    pub seconds_remaining: u32,
    pub active: bool,
    pub target_visible: bool,
    session_secs: u32,
    finished: bool,
    tick_count: u32,
    reroll_in: Option<u32>,
    rng: Box<dyn RngCore + Send>,
}

impl Session {
    /// A session in the Idle state, waiting for `start`.
    pub fn new(session_secs: u32) -> Self {
        Self::with_rng(session_secs, Box::new(StdRng::from_entropy()))
    }

    /// Like `new`, reproducible from a seed.
    pub fn from_seed(session_secs: u32, seed: u64) -> Self {
        Self::with_rng(session_secs, Box::new(StdRng::seed_from_u64(seed)))
    }

    pub fn with_rng(session_secs: u32, rng: Box<dyn RngCore + Send>) -> Self {
        Self {
            score: 0,
            seconds_remaining: session_secs,
            active: false,
            target_visible: false,
            session_secs,
            finished: false,
            tick_count: 0,
            reroll_in: None,
            rng,
        }
    }

    /// Enter the Active state. Resets score and clock; the target starts
    /// visible. Also serves as the restart affordance after Finished.
    pub fn start(&mut self) {
        self.score = 0;
        self.seconds_remaining = self.session_secs;
        self.active = true;
        self.target_visible = true;
        self.finished = false;
        self.tick_count = 0;
        self.reroll_in = None;
    }

    /// Register a tap. Scores iff the session is active and the target is
    /// visible; anything else is a silent no-op. Returns whether the tap
    /// landed so the caller can play the tap sound.
    pub fn tap(&mut self) -> bool {
        if self.active && self.target_visible {
            self.score += 1;
            true
        } else {
            false
        }
    }

    /// Advance the session by one runtime tick.
    ///
    /// Every `TICKS_PER_SECOND`th tick is a countdown step: the clock
    /// decrements and a 50/50 visibility re-roll is scheduled to land
    /// `REROLL_DELAY_TICKS` later. When the clock reaches zero the session
    /// finishes and the target is hidden.
    pub fn on_tick(&mut self) {
        if !self.active {
            return;
        }

        if let Some(left) = self.reroll_in.as_mut() {
            *left -= 1;
            if *left == 0 {
                self.target_visible = self.rng.gen_bool(0.5);
                self.reroll_in = None;
            }
        }

        self.tick_count += 1;
        if self.tick_count >= TICKS_PER_SECOND {
            self.tick_count = 0;
            self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
            if self.seconds_remaining == 0 {
                self.finish();
            } else {
                self.reroll_in = Some(REROLL_DELAY_TICKS);
            }
        }
    }

    /// End the session now. Forced ends and natural expiry are equivalent.
    pub fn finish(&mut self) {
        if self.active {
            self.active = false;
            self.finished = true;
        }
        self.target_visible = false;
        self.reroll_in = None;
    }

    pub fn has_finished(&self) -> bool {
        self.finished
    }

    /// Idle: neither started nor finished.
    pub fn is_idle(&self) -> bool {
        !self.active && !self.finished
    }

    pub fn session_secs(&self) -> u32 {
        self.session_secs
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("score", &self.score)
            .field("seconds_remaining", &self.seconds_remaining)
            .field("active", &self.active)
            .field("target_visible", &self.target_visible)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
