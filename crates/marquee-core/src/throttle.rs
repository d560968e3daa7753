//! Throttle gate for state resynchronization
//!
//! `timeupdate` and `progress` fire many times per second; re-deriving state
//! on every event would re-render the whole control tree constantly. The
//! gate limits resynchronization to once per window (100 ms by default),
//! coalescing a burst into one leading run plus one trailing run.
//!
//! The gate is pure: callers feed it wall-clock timestamps and act on the
//! returned decision. The web layer owns the actual timer and must call
//! [`ThrottleGate::fired`] when it elapses, or [`ThrottleGate::cancel`] on
//! teardown so nothing runs after the player is gone. Interaction-critical
//! paths (seek/volume drags) bypass the gate entirely and report the run via
//! [`ThrottleGate::force`].

/// Default resynchronization window in milliseconds
pub const DEFAULT_WINDOW_MS: f64 = 100.0;

/// What the caller should do with a resynchronization request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Run synchronously now
    Run,
    /// Schedule a trailing run after this many milliseconds
    Schedule(f64),
    /// A trailing run is already scheduled; the request is coalesced
    Coalesced,
}

/// Trailing-coalescing throttle with leading-edge pass-through
#[derive(Debug, Clone)]
pub struct ThrottleGate {
    window_ms: f64,
    last_run: Option<f64>,
    pending: bool,
}

impl ThrottleGate {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_run: None,
            pending: false,
        }
    }

    /// The coalescing window in milliseconds
    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    /// True when a trailing run is scheduled
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Ask to run at time `now_ms`
    pub fn request(&mut self, now_ms: f64) -> ThrottleDecision {
        if self.pending {
            return ThrottleDecision::Coalesced;
        }
        match self.last_run {
            Some(last) if now_ms - last < self.window_ms => {
                self.pending = true;
                ThrottleDecision::Schedule(self.window_ms - (now_ms - last))
            }
            _ => {
                self.last_run = Some(now_ms);
                ThrottleDecision::Run
            }
        }
    }

    /// The scheduled trailing run just executed
    pub fn fired(&mut self, now_ms: f64) {
        self.pending = false;
        self.last_run = Some(now_ms);
    }

    /// A forced run executed, bypassing the gate. Resets the window and
    /// clears any pending trailing run (the caller drops its timer).
    pub fn force(&mut self, now_ms: f64) {
        self.pending = false;
        self.last_run = Some(now_ms);
    }

    /// Drop the pending trailing run without executing it
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

impl Default for ThrottleGate {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_runs_immediately() {
        let mut gate = ThrottleGate::new(100.0);
        assert_eq!(gate.request(0.0), ThrottleDecision::Run);
    }

    #[test]
    fn test_burst_coalesces_to_one_run_per_window() {
        let mut gate = ThrottleGate::new(100.0);
        assert_eq!(gate.request(0.0), ThrottleDecision::Run);
        // Everything inside the window defers to a single trailing run
        assert_eq!(gate.request(10.0), ThrottleDecision::Schedule(90.0));
        assert_eq!(gate.request(20.0), ThrottleDecision::Coalesced);
        assert_eq!(gate.request(99.0), ThrottleDecision::Coalesced);
        assert!(gate.is_pending());

        gate.fired(100.0);
        assert!(!gate.is_pending());
        // The trailing run opened a fresh window
        assert_eq!(gate.request(150.0), ThrottleDecision::Schedule(50.0));
    }

    #[test]
    fn test_request_after_window_runs_again() {
        let mut gate = ThrottleGate::new(100.0);
        assert_eq!(gate.request(0.0), ThrottleDecision::Run);
        assert_eq!(gate.request(100.0), ThrottleDecision::Run);
        assert_eq!(gate.request(250.0), ThrottleDecision::Run);
    }

    #[test]
    fn test_force_clears_pending_and_resets_window() {
        let mut gate = ThrottleGate::new(100.0);
        assert_eq!(gate.request(0.0), ThrottleDecision::Run);
        assert_eq!(gate.request(50.0), ThrottleDecision::Schedule(50.0));

        gate.force(60.0);
        assert!(!gate.is_pending());
        // Window restarts at the forced run
        assert_eq!(gate.request(100.0), ThrottleDecision::Schedule(60.0));
    }

    #[test]
    fn test_cancel_drops_pending_run() {
        let mut gate = ThrottleGate::new(100.0);
        gate.request(0.0);
        gate.request(10.0);
        assert!(gate.is_pending());

        gate.cancel();
        assert!(!gate.is_pending());
        // No phantom trailing run; the next request schedules normally
        assert_eq!(gate.request(50.0), ThrottleDecision::Schedule(50.0));
    }
}
