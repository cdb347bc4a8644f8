//! Two-stage fade-out timer
//!
//! After a drag releases, the seek indicators stay fully visible for a hold
//! period, then fade to transparent, then all transient view state clears.
//! Modeled as an explicit state machine driven by the caller's clock so it
//! runs under tokio's paused test clock; a new drag cancels it outright.

use std::time::Duration;
use tokio::time::Instant;

/// How long the released indicators stay fully visible
pub const FADE_HOLD: Duration = Duration::from_secs(2);

/// How long the fade to transparent takes after the hold
pub const FADE_DURATION: Duration = Duration::from_secs(2);

/// Fade progression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FadePhase {
    /// No fade pending
    #[default]
    Idle,
    /// Fully visible, waiting out the hold period
    Holding,
    /// Opacity ramping down
    Fading,
    /// Fade finished; transient state may be cleared
    Cleared,
}

/// Cancellable hold-then-fade timer
#[derive(Debug, Clone, Default)]
pub struct FadeTimer {
    phase: FadePhase,
    phase_started: Option<Instant>,
}

impl FadeTimer {
    /// Timer in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase without advancing the clock
    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// Start the hold period
    pub fn arm(&mut self, now: Instant) {
        self.phase = FadePhase::Holding;
        self.phase_started = Some(now);
    }

    /// Cancel any pending fade
    pub fn cancel(&mut self) {
        self.phase = FadePhase::Idle;
        self.phase_started = None;
    }

    /// Advance the machine to the given instant and return the phase
    ///
    /// Crosses multiple phase boundaries in one call when the clock jumped
    /// far enough.
    pub fn poll(&mut self, now: Instant) -> FadePhase {
        if self.phase == FadePhase::Holding {
            if let Some(started) = self.phase_started {
                if now.duration_since(started) >= FADE_HOLD {
                    self.phase = FadePhase::Fading;
                    self.phase_started = Some(started + FADE_HOLD);
                }
            }
        }
        if self.phase == FadePhase::Fading {
            if let Some(started) = self.phase_started {
                if now.duration_since(started) >= FADE_DURATION {
                    self.phase = FadePhase::Cleared;
                    self.phase_started = None;
                }
            }
        }
        self.phase
    }

    /// Indicator opacity at the given instant, in [0, 1]
    pub fn opacity(&self, now: Instant) -> f64 {
        match self.phase {
            FadePhase::Idle | FadePhase::Holding => 1.0,
            FadePhase::Fading => match self.phase_started {
                Some(started) => {
                    let elapsed = now.duration_since(started).as_secs_f64();
                    (1.0 - elapsed / FADE_DURATION.as_secs_f64()).clamp(0.0, 1.0)
                }
                None => 0.0,
            },
            FadePhase::Cleared => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn holds_then_fades_then_clears() {
        let mut timer = FadeTimer::new();
        let start = Instant::now();
        timer.arm(start);

        assert_eq!(timer.poll(start), FadePhase::Holding);
        assert_eq!(timer.opacity(start), 1.0);

        let mid_hold = start + Duration::from_millis(1_900);
        assert_eq!(timer.poll(mid_hold), FadePhase::Holding);
        assert_eq!(timer.opacity(mid_hold), 1.0);

        let mid_fade = start + Duration::from_millis(3_000);
        assert_eq!(timer.poll(mid_fade), FadePhase::Fading);
        assert!((timer.opacity(mid_fade) - 0.5).abs() < 1e-9);

        let done = start + Duration::from_millis(4_100);
        assert_eq!(timer.poll(done), FadePhase::Cleared);
        assert_eq!(timer.opacity(done), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn single_poll_crosses_both_boundaries() {
        let mut timer = FadeTimer::new();
        let start = Instant::now();
        timer.arm(start);

        assert_eq!(
            timer.poll(start + Duration::from_secs(10)),
            FadePhase::Cleared
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_resets_to_idle() {
        let mut timer = FadeTimer::new();
        let start = Instant::now();
        timer.arm(start);
        timer.poll(start + Duration::from_secs(3));
        assert_eq!(timer.phase(), FadePhase::Fading);

        timer.cancel();
        assert_eq!(timer.phase(), FadePhase::Idle);
        assert_eq!(timer.opacity(start + Duration::from_secs(3)), 1.0);
    }
}
