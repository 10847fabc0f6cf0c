//! The scene navigation controller: cursor + mode state machine.

use tracing::debug;

use crate::adapter::{ControlId, IconState, PresentationAdapter};
use crate::input::KeyCommand;
use crate::scene::SceneSequence;
use crate::share::{share_page, ShareOutcome, SharePayload, SharePlatform};

/// Independent view toggles, not tied to scene identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewMode {
    /// Tracked but currently inaudible: nothing plays audio yet.
    pub sound_enabled: bool,
    pub fullscreen: bool,
}

/// Owns the scene sequence, the navigation cursor, and the mode flags.
/// All visual side effects go through the adapter passed per call, so a
/// page instance can be driven by any rendering surface, or by a fake
/// in tests.
///
/// There are no error paths here: an input is either valid (acted on)
/// or invalid (silently ignored), matching what the surrounding
/// presentation layer expects.
pub struct SceneController {
    sequence: SceneSequence,
    cursor: usize,
    mode: ViewMode,
    share_payload: SharePayload,
}

impl SceneController {
    pub fn new(sequence: SceneSequence, share_payload: SharePayload) -> Self {
        Self {
            sequence,
            cursor: 0,
            mode: ViewMode::default(),
            share_payload,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn sequence(&self) -> &SceneSequence {
        &self.sequence
    }

    /// Jumps to `index`. Out-of-range requests are ignored: no state
    /// change, no adapter call. In range, the cursor moves and the
    /// adapter receives exactly one update batch followed by a fade
    /// transition. Repeating the same index redisplays the same state
    /// (the fade replays).
    pub fn go_to(&mut self, index: i64, adapter: &mut dyn PresentationAdapter) {
        if index < 0 || index as usize >= self.sequence.len() {
            return;
        }
        self.cursor = index as usize;
        self.display_current(adapter);
        adapter.apply_fade_transition();
    }

    /// Moves the cursor by `direction` (`-1` or `+1`); steps past
    /// either end fall under the same ignore rule as [`Self::go_to`].
    pub fn step(&mut self, direction: i64, adapter: &mut dyn PresentationAdapter) {
        self.go_to(self.cursor as i64 + direction, adapter);
    }

    /// Pushes the current scene and control state without a transition.
    /// Used once at startup so the first paint does not replay the
    /// fade animation.
    pub fn sync_display(&self, adapter: &mut dyn PresentationAdapter) {
        self.display_current(adapter);
    }

    fn display_current(&self, adapter: &mut dyn PresentationAdapter) {
        // The cursor invariant keeps this lookup in bounds.
        let Some(scene) = self.sequence.get(self.cursor) else {
            return;
        };
        adapter.set_image(&scene.image);
        adapter.set_text(&scene.text);
        adapter.set_indicator(self.cursor, self.sequence.len());
        adapter.set_control_enabled(ControlId::Previous, self.cursor != 0);
        adapter.set_control_enabled(ControlId::Next, self.cursor + 1 != self.sequence.len());
    }

    /// Flips the sound flag and updates the control icon. State-only:
    /// audio playback is not wired up yet, so the flag has no audible
    /// effect.
    pub fn toggle_sound(&mut self, adapter: &mut dyn PresentationAdapter) {
        self.mode.sound_enabled = !self.mode.sound_enabled;
        let icon = if self.mode.sound_enabled {
            IconState::VolumeMuted
        } else {
            IconState::VolumeUp
        };
        adapter.set_icon_state(ControlId::Sound, icon);
        debug!(enabled = self.mode.sound_enabled, "sound toggled");
    }

    pub fn toggle_fullscreen(&mut self, adapter: &mut dyn PresentationAdapter) {
        if self.mode.fullscreen {
            self.exit_fullscreen(adapter);
        } else {
            self.enter_fullscreen(adapter);
        }
    }

    /// No-op while already fullscreen, so a button click and a global
    /// key handler firing for the same user action cannot double-apply.
    pub fn enter_fullscreen(&mut self, adapter: &mut dyn PresentationAdapter) {
        if self.mode.fullscreen {
            return;
        }
        self.mode.fullscreen = true;
        adapter.apply_fullscreen_treatment(true);
        adapter.set_icon_state(ControlId::Fullscreen, IconState::Collapse);
    }

    /// No-op while windowed.
    pub fn exit_fullscreen(&mut self, adapter: &mut dyn PresentationAdapter) {
        if !self.mode.fullscreen {
            return;
        }
        self.mode.fullscreen = false;
        adapter.apply_fullscreen_treatment(false);
        adapter.set_icon_state(ControlId::Fullscreen, IconState::Expand);
    }

    /// Pure delegation to the platform share capability; the controller
    /// keeps no share state beyond the fixed payload injected at
    /// construction.
    pub fn share(&self, platform: &mut dyn SharePlatform) -> ShareOutcome {
        share_page(platform, &self.share_payload)
    }

    /// Dispatches a resolved keyboard command.
    pub fn apply_command(&mut self, command: KeyCommand, adapter: &mut dyn PresentationAdapter) {
        match command {
            KeyCommand::StepBack => self.step(-1, adapter),
            KeyCommand::StepForward => self.step(1, adapter),
            KeyCommand::ToggleFullscreen => self.toggle_fullscreen(adapter),
            KeyCommand::ToggleSound => self.toggle_sound(adapter),
            KeyCommand::ExitFullscreen => self.exit_fullscreen(adapter),
        }
    }
}
