//! Explicit timers for transient visual effects.
//!
//! The effects themselves (fade, toast slide, loader dismissal) are
//! drawn by the presentation layer; this module only models when they
//! run. Every function takes `now` explicitly so tests never sleep.

use std::time::{Duration, Instant};

/// How long a scene transition hides and restores the artwork.
pub const FADE_TRANSITION: Duration = Duration::from_millis(300);
/// How long a toast stays fully visible before it starts sliding out.
pub const NOTIFICATION_VISIBLE: Duration = Duration::from_millis(2000);
/// Slide-in/out time for a toast.
pub const NOTIFICATION_SLIDE: Duration = Duration::from_millis(300);
/// How long the loading screen holds before fading.
pub const LOADER_HOLD: Duration = Duration::from_millis(2000);
/// Fade-out time of the loading screen once the hold expires.
pub const LOADER_FADE: Duration = Duration::from_millis(500);
/// Settle window for the window-resize hook.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Single-shot timer with a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTimer {
    started_at: Instant,
    duration: Duration,
}

impl EffectTimer {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.elapsed(now) < self.duration
    }

    /// Fraction of the duration that has passed, clamped to `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Holder for at most one pending effect. Restarting while a timer is
/// still running replaces it (cancel-and-restart): a rapid second
/// navigation owns the fade instead of layering a second timer over it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectSlot {
    timer: Option<EffectTimer>,
}

impl EffectSlot {
    pub fn restart(&mut self, now: Instant, duration: Duration) {
        self.timer = Some(EffectTimer::start(now, duration));
    }

    pub fn clear(&mut self) {
        self.timer = None;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.timer.is_some_and(|timer| timer.is_active(now))
    }

    /// Progress of the pending timer, `None` when idle. An expired
    /// timer still reports `Some(1.0)` until cleared or restarted.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        self.timer.map(|timer| timer.progress(now))
    }
}
