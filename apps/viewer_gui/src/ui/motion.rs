//! Stateless scroll- and time-driven mappings for the landing view.

use std::time::{Duration, Instant};

use scene_core::effects::{LOADER_FADE, LOADER_HOLD};

/// Scroll depth after which the navbar switches to its solid style.
pub const NAVBAR_SCROLL_THRESHOLD: f32 = 100.0;
/// Fraction of an element that must be visible to trigger its reveal.
pub const REVEAL_VISIBLE_FRACTION: f32 = 0.1;
/// Fade-in time of a revealed element.
pub const REVEAL_FADE: Duration = Duration::from_millis(600);

pub fn navbar_scrolled(scroll_y: f32) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Vertical offset of a parallax layer; a higher speed factor moves
/// the layer further against the scroll direction.
pub fn parallax_offset(scroll_y: f32, speed: f32) -> f32 {
    -(scroll_y * speed)
}

/// Reveals fire once per element; callers remember the trigger.
pub fn reveal_triggered(visible_fraction: f32) -> bool {
    visible_fraction >= REVEAL_VISIBLE_FRACTION
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Holding,
    FadingOut,
    Dismissed,
}

pub fn loader_phase(shown_at: Instant, now: Instant) -> LoaderPhase {
    let elapsed = now.saturating_duration_since(shown_at);
    if elapsed < LOADER_HOLD {
        LoaderPhase::Holding
    } else if elapsed < LOADER_HOLD + LOADER_FADE {
        LoaderPhase::FadingOut
    } else {
        LoaderPhase::Dismissed
    }
}

pub fn loader_opacity(shown_at: Instant, now: Instant) -> f32 {
    match loader_phase(shown_at, now) {
        LoaderPhase::Holding => 1.0,
        LoaderPhase::Dismissed => 0.0,
        LoaderPhase::FadingOut => {
            let into_fade = now.saturating_duration_since(shown_at) - LOADER_HOLD;
            1.0 - (into_fade.as_secs_f32() / LOADER_FADE.as_secs_f32()).clamp(0.0, 1.0)
        }
    }
}
