//! Debounce and throttle gates.
//!
//! Both gates are pure state machines over caller-supplied millisecond
//! timestamps, so they can be driven by `Date.now()` in the browser and by
//! plain numbers in tests. The host wraps them around real timers.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

/// Trailing-edge debounce: fires once `wait_ms` after the last call.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    #[must_use]
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms: f64::from(wait_ms), deadline: None }
    }

    /// Record a call at `now_ms`, replacing any pending deadline. Returns the
    /// new deadline.
    pub fn call(&mut self, now_ms: f64) -> f64 {
        let deadline = now_ms + self.wait_ms;
        self.deadline = Some(deadline);
        deadline
    }

    /// Whether the pending call should run at `now_ms`. Consumes the pending
    /// call when it does.
    pub fn due(&mut self, now_ms: f64) -> bool {
        if let Some(deadline) = self.deadline
            && now_ms >= deadline
        {
            self.deadline = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Leading-edge throttle: the first call passes, then calls are dropped
/// until `limit_ms` has elapsed since the last one that passed.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: u32) -> Self {
        Self { limit_ms: f64::from(limit_ms), last_fired: None }
    }

    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_fired
            && now_ms - last < self.limit_ms
        {
            return false;
        }
        self.last_fired = Some(now_ms);
        true
    }

    /// Milliseconds until a call at `now_ms` or later would pass.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn remaining_ms(&self, now_ms: f64) -> u32 {
        self.last_fired.map_or(0, |last| (last + self.limit_ms - now_ms).ceil().max(0.0) as u32)
    }

    /// Record a call that ran at `now_ms` outside [`Throttle::try_fire`].
    pub fn mark(&mut self, now_ms: f64) {
        self.last_fired = Some(now_ms);
    }
}

/// What the host does with one call through a [`TrailingThrottle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleStep {
    /// Run the wrapped function now.
    Run,
    /// Run it from a timer `after_ms` from now, then call [`TrailingThrottle::flush`].
    Schedule { after_ms: u32 },
    /// A flush is already scheduled and will pick this call up.
    Wait,
}

/// Leading-edge throttle that also delivers the last suppressed call once the
/// window reopens, so the final state of a burst is never lost.
#[derive(Debug, Clone)]
pub struct TrailingThrottle {
    gate: Throttle,
    owed: bool,
}

impl TrailingThrottle {
    #[must_use]
    pub fn new(limit_ms: u32) -> Self {
        Self { gate: Throttle::new(limit_ms), owed: false }
    }

    pub fn call(&mut self, now_ms: f64) -> ThrottleStep {
        if self.gate.try_fire(now_ms) {
            self.owed = false;
            return ThrottleStep::Run;
        }
        if self.owed {
            return ThrottleStep::Wait;
        }
        self.owed = true;
        ThrottleStep::Schedule { after_ms: self.gate.remaining_ms(now_ms) }
    }

    /// Timer side of [`ThrottleStep::Schedule`]: whether the deferred call is
    /// still owed. A leading-edge run since scheduling settles it.
    pub fn flush(&mut self, now_ms: f64) -> bool {
        if !self.owed {
            return false;
        }
        self.owed = false;
        self.gate.mark(now_ms);
        true
    }

    #[must_use]
    pub fn is_owed(&self) -> bool {
        self.owed
    }
}
