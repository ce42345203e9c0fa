//! Horizontal shake used to draw attention to a failed login

use std::time::{Duration, Instant};

/// How long the form shakes after a failure
pub const SHAKE_DURATION: Duration = Duration::from_millis(800);

/// Largest displacement, in cells
const MAX_AMPLITUDE: f64 = 4.0;

/// Time between direction changes
const STEP_MS: u128 = 80;

/// Decaying left/right oscillation
#[derive(Debug, Default)]
pub struct Shake {
    started: Option<Instant>,
}

impl Shake {
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn is_active(&self) -> bool {
        self.started
            .map(|t| t.elapsed() < SHAKE_DURATION)
            .unwrap_or(false)
    }

    /// Current horizontal offset in cells
    pub fn offset(&self) -> i16 {
        self.started
            .map(|t| Self::offset_at(t.elapsed()))
            .unwrap_or(0)
    }

    /// Offset `elapsed` after the shake started
    pub fn offset_at(elapsed: Duration) -> i16 {
        if elapsed >= SHAKE_DURATION {
            return 0;
        }

        let remaining = 1.0 - elapsed.as_secs_f64() / SHAKE_DURATION.as_secs_f64();
        let amplitude = (MAX_AMPLITUDE * remaining).ceil() as i16;
        let step = elapsed.as_millis() / STEP_MS;

        if step % 2 == 0 {
            amplitude
        } else {
            -amplitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_shake_has_no_offset() {
        let shake = Shake::default();
        assert!(!shake.is_active());
        assert_eq!(shake.offset(), 0);
    }

    #[test]
    fn test_started_shake_is_active() {
        let mut shake = Shake::default();
        shake.start();
        assert!(shake.is_active());
    }

    #[test]
    fn test_offset_alternates_direction() {
        let first = Shake::offset_at(Duration::from_millis(0));
        let second = Shake::offset_at(Duration::from_millis(STEP_MS as u64));
        assert!(first > 0);
        assert!(second < 0);
    }

    #[test]
    fn test_offset_decays() {
        let early = Shake::offset_at(Duration::from_millis(10)).abs();
        let late = Shake::offset_at(Duration::from_millis(650)).abs();
        assert_eq!(early, 4);
        assert!(late < early);
    }

    #[test]
    fn test_offset_is_zero_after_duration() {
        assert_eq!(Shake::offset_at(SHAKE_DURATION), 0);
        assert_eq!(Shake::offset_at(Duration::from_secs(5)), 0);
    }
}
