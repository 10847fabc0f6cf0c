//! Keyboard bindings for the scene viewer.

/// Keys the viewer reacts to, independent of the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    ArrowLeft,
    ArrowRight,
    Space,
    KeyM,
    Escape,
}

/// Controller action a key press resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    StepBack,
    StepForward,
    ToggleFullscreen,
    ToggleSound,
    ExitFullscreen,
}

/// Single binding table for every key the viewer handles, including
/// Escape, so no second listener can drift out of sync with it.
///
/// A `Some` result means the caller must also suppress the key's
/// platform default (page scroll on arrows, activation on space).
/// Escape only binds while fullscreen; otherwise the press falls
/// through to the platform untouched.
pub fn map_key(key: KeyInput, fullscreen: bool) -> Option<KeyCommand> {
    match key {
        KeyInput::ArrowLeft => Some(KeyCommand::StepBack),
        KeyInput::ArrowRight => Some(KeyCommand::StepForward),
        KeyInput::Space => Some(KeyCommand::ToggleFullscreen),
        KeyInput::KeyM => Some(KeyCommand::ToggleSound),
        KeyInput::Escape if fullscreen => Some(KeyCommand::ExitFullscreen),
        KeyInput::Escape => None,
    }
}
