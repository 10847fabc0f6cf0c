//! UI layer: app shell, landing and reader views, motion helpers, theme.

pub mod app;
pub mod motion;
pub mod theme;

pub use app::ViewerApp;
