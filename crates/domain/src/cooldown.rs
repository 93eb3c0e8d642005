//! Resend rate limiting.
//!
//! A plain decrementing counter. The UI drives it with one-second delayed
//! callbacks while it is active; nothing here owns a timer or a task.

/// How long the resend affordance stays locked after a successful resend.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Countdown that gates the "resend code" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResendCooldown {
    remaining: u32,
}

impl ResendCooldown {
    /// An inactive cooldown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds left before resending is allowed again.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// True while resending is locked out.
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Start the standard lockout. Called only after a resend succeeds;
    /// a failed resend leaves the cooldown untouched.
    pub fn start(&mut self) {
        self.remaining = RESEND_COOLDOWN_SECS;
    }

    /// Count one second down. Returns the seconds still remaining.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cooldown_is_inactive() {
        let cooldown = ResendCooldown::new();
        assert!(!cooldown.is_active());
        assert_eq!(cooldown.remaining(), 0);
    }

    #[test]
    fn start_locks_for_the_full_duration() {
        let mut cooldown = ResendCooldown::new();
        cooldown.start();
        assert!(cooldown.is_active());
        assert_eq!(cooldown.remaining(), RESEND_COOLDOWN_SECS);
    }

    #[test]
    fn ticking_down_to_zero_unlocks() {
        let mut cooldown = ResendCooldown::new();
        cooldown.start();
        for _ in 0..RESEND_COOLDOWN_SECS - 1 {
            assert!(cooldown.tick() > 0);
        }
        assert_eq!(cooldown.tick(), 0);
        assert!(!cooldown.is_active());
    }

    #[test]
    fn tick_saturates_at_zero() {
        let mut cooldown = ResendCooldown::new();
        assert_eq!(cooldown.tick(), 0);
        assert!(!cooldown.is_active());
    }
}
