//! Scene navigation core for the webcomic viewer.
//!
//! Owns the ordered scene sequence, the navigation cursor, and the view
//! mode flags, and requests every visual change through the
//! [`PresentationAdapter`] boundary so the controller never depends on a
//! specific rendering surface.

pub mod adapter;
pub mod controller;
pub mod effects;
pub mod input;
pub mod scene;
pub mod share;

pub use adapter::{ControlId, IconState, PresentationAdapter};
pub use controller::{SceneController, ViewMode};
pub use effects::{EffectSlot, EffectTimer};
pub use input::{map_key, KeyCommand, KeyInput};
pub use scene::{AssetRef, Scene, SceneSequence, SceneSequenceError};
pub use share::{share_page, NativeShare, ShareOutcome, SharePayload, SharePlatform};
