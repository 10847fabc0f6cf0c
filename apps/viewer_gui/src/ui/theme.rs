//! Colors and spacing shared by the landing and reader views.

use egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(100, 181, 246);
pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(16, 18, 27);
pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(24, 27, 38);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(232, 234, 240);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 154, 170);

pub const TOAST_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(92, 167, 226, 230);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PAGE_BACKGROUND;
    visuals.window_fill = PANEL_BACKGROUND;
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.4);
    visuals.hyperlink_color = ACCENT;
    ctx.set_visuals(visuals);
}
