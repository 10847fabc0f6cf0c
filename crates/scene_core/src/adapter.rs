//! Boundary through which the controller requests visual changes.

use crate::scene::AssetRef;

/// Identifies an on-screen control the controller may address. A page
/// is free to bind only a subset; see [`PresentationAdapter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Previous,
    Next,
    Sound,
    Fullscreen,
    Share,
}

/// Icon variants a bound control can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    VolumeUp,
    VolumeMuted,
    Expand,
    Collapse,
}

/// Rendering surface the controller drives. Implementations decide at
/// binding time which controls exist and must guard each call
/// independently: an unbound control skips that one visual effect
/// without aborting the rest of the update batch.
pub trait PresentationAdapter {
    fn set_image(&mut self, image: &AssetRef);

    fn set_text(&mut self, text: &str);

    /// `current` is the 0-based cursor; presenters render `current + 1`.
    fn set_indicator(&mut self, current: usize, total: usize);

    fn set_control_enabled(&mut self, control: ControlId, enabled: bool);

    fn set_icon_state(&mut self, control: ControlId, icon: IconState);

    /// Replays the scene transition (fade out, then back in over a
    /// fixed duration).
    fn apply_fade_transition(&mut self);

    fn apply_fullscreen_treatment(&mut self, fullscreen: bool);
}
