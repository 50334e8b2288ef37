//! Frame-delta timers.
//!
//! Every timed mechanic in the game (super mode, invincibility, the frightened
//! window, the star cadence, the start screen) is advanced once per frame by
//! the elapsed seconds. There is no cancellation: a timer is simply reset or
//! ignored by whatever state transition comes next.

/// A timer that counts down from a duration and reports the frame it expires on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    duration: f32,
    remaining: f32,
    running: bool,
}

impl Countdown {
    /// Creates a stopped countdown with the given duration, in seconds.
    pub const fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: 0.0,
            running: false,
        }
    }

    /// Creates a countdown that is already running.
    pub fn started(duration: f32) -> Self {
        let mut countdown = Self::new(duration);
        countdown.start();
        countdown
    }

    /// (Re)starts the countdown from its full duration.
    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.running = true;
    }

    /// (Re)starts the countdown from an explicit duration, leaving the configured one untouched.
    pub fn start_with(&mut self, seconds: f32) {
        self.remaining = seconds;
        self.running = true;
    }

    /// Advances the countdown. Returns `true` only on the tick that makes it expire.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }

        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.running = false;
            return true;
        }
        false
    }

    /// Stops the countdown without reporting expiry.
    pub fn reset(&mut self) {
        self.remaining = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

/// Accumulates elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stopwatch {
    elapsed: f32,
}

impl Stopwatch {
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
