//! App shell: binds the scene controller to egui, the asset loader,
//! and the desktop platform services.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{Color32, RichText, TextureHandle};
use scene_core::{
    effects::{EffectSlot, FADE_TRANSITION, NOTIFICATION_SLIDE, RESIZE_DEBOUNCE},
    map_key, AssetRef, ControlId, IconState, KeyCommand, KeyInput, PresentationAdapter,
    SceneController, SceneSequence, ShareOutcome, SharePayload,
};
use tracing::{trace, warn};

use crate::assets::commands::{dispatch_asset_command, AssetCommand, AssetEvent};
use crate::config::{ControlsConfig, StoryConfig};
use crate::platform::DesktopPlatform;
use crate::ui::{motion, theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Landing,
    Reader,
}

#[derive(Debug, Clone, Copy)]
struct ControlState {
    enabled: bool,
    icon: Option<IconState>,
}

/// Frame state the controller writes through the adapter boundary and
/// the draw code reads back. Controls the story config left out are
/// simply not bound; updates addressed to them are skipped one by one.
struct ViewState {
    image: Option<AssetRef>,
    text: String,
    indicator: Option<(usize, usize)>,
    controls: HashMap<ControlId, ControlState>,
    fade: EffectSlot,
    fullscreen_treatment: bool,
}

impl ViewState {
    fn new(config: &ControlsConfig) -> Self {
        let mut controls = HashMap::new();
        let mut bind = |id: ControlId, bound: bool, icon: Option<IconState>| {
            if bound {
                controls.insert(
                    id,
                    ControlState {
                        enabled: true,
                        icon,
                    },
                );
            }
        };
        bind(ControlId::Previous, config.previous, None);
        bind(ControlId::Next, config.next, None);
        bind(ControlId::Sound, config.sound, Some(IconState::VolumeUp));
        bind(
            ControlId::Fullscreen,
            config.fullscreen,
            Some(IconState::Expand),
        );
        bind(ControlId::Share, config.share, None);

        Self {
            image: None,
            text: String::new(),
            indicator: None,
            controls,
            fade: EffectSlot::default(),
            fullscreen_treatment: false,
        }
    }

    fn control(&self, id: ControlId) -> Option<ControlState> {
        self.controls.get(&id).copied()
    }
}

impl PresentationAdapter for ViewState {
    fn set_image(&mut self, image: &AssetRef) {
        self.image = Some(image.clone());
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_indicator(&mut self, current: usize, total: usize) {
        self.indicator = Some((current, total));
    }

    fn set_control_enabled(&mut self, control: ControlId, enabled: bool) {
        match self.controls.get_mut(&control) {
            Some(state) => state.enabled = enabled,
            None => trace!(?control, "control not bound; skipping enablement update"),
        }
    }

    fn set_icon_state(&mut self, control: ControlId, icon: IconState) {
        match self.controls.get_mut(&control) {
            Some(state) => state.icon = Some(icon),
            None => trace!(?control, "control not bound; skipping icon update"),
        }
    }

    fn apply_fade_transition(&mut self) {
        self.fade.restart(Instant::now(), FADE_TRANSITION);
    }

    fn apply_fullscreen_treatment(&mut self, fullscreen: bool) {
        self.fullscreen_treatment = fullscreen;
    }
}

enum TextureState {
    Loading,
    Ready(TextureHandle),
    Error(String),
}

struct ActiveToast {
    message: String,
    shown_at: Instant,
    visible_for: Duration,
}

/// Toast opacity over its slide-in / hold / slide-out life, `None` once
/// it should be dropped.
fn toast_opacity(elapsed: Duration, visible_for: Duration) -> Option<f32> {
    if elapsed < visible_for {
        Some((elapsed.as_secs_f32() / NOTIFICATION_SLIDE.as_secs_f32()).clamp(0.0, 1.0))
    } else if elapsed < visible_for + NOTIFICATION_SLIDE {
        let out = (elapsed - visible_for).as_secs_f32() / NOTIFICATION_SLIDE.as_secs_f32();
        Some(1.0 - out.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// How much of `rect` is vertically inside `clip`.
fn visible_fraction(clip: egui::Rect, rect: egui::Rect) -> f32 {
    let overlap = (rect.bottom().min(clip.bottom()) - rect.top().max(clip.top())).max(0.0);
    overlap / rect.height().max(1.0)
}

fn icon_label(icon: IconState) -> &'static str {
    match icon {
        IconState::VolumeUp => "Ses",
        IconState::VolumeMuted => "Sessiz",
        IconState::Expand => "Tam Ekran",
        IconState::Collapse => "Pencere",
    }
}

const KEY_TABLE: [(egui::Key, KeyInput); 5] = [
    (egui::Key::ArrowLeft, KeyInput::ArrowLeft),
    (egui::Key::ArrowRight, KeyInput::ArrowRight),
    (egui::Key::Space, KeyInput::Space),
    (egui::Key::M, KeyInput::KeyM),
    (egui::Key::Escape, KeyInput::Escape),
];

/// Modifier states under which a key still counts as a binding. Both
/// 'm' and 'M' toggle sound, so shift is accepted for the mute key.
fn accepted_modifiers(key: KeyInput) -> &'static [egui::Modifiers] {
    match key {
        KeyInput::KeyM => &[egui::Modifiers::NONE, egui::Modifiers::SHIFT],
        _ => &[egui::Modifiers::NONE],
    }
}

pub struct ViewerApp {
    story: StoryConfig,
    controller: SceneController,
    view_state: ViewState,
    platform: DesktopPlatform,
    view: View,
    cmd_tx: Sender<AssetCommand>,
    event_rx: Receiver<AssetEvent>,
    textures: HashMap<usize, TextureState>,
    loader_shown_at: Instant,
    toast: Option<ActiveToast>,
    manual_copy_text: Option<String>,
    status_line: Option<String>,
    revealed_at: HashMap<&'static str, Instant>,
    landing_scroll_y: f32,
    scroll_to_chapters: bool,
    last_viewport: Option<egui::Vec2>,
    resize_settle: EffectSlot,
    os_fullscreen: bool,
}

impl ViewerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        story: StoryConfig,
        sequence: SceneSequence,
        share_payload: SharePayload,
        start_scene: usize,
        cmd_tx: Sender<AssetCommand>,
        event_rx: Receiver<AssetEvent>,
    ) -> Self {
        theme::apply(&cc.egui_ctx);

        let mut view_state = ViewState::new(&story.controls);
        let mut controller = SceneController::new(sequence, share_payload);
        if start_scene > 0 {
            // Out-of-range start indices fall under the ignore rule.
            controller.go_to(start_scene as i64, &mut view_state);
        }
        controller.sync_display(&mut view_state);
        view_state.fade.clear();

        Self {
            story,
            controller,
            view_state,
            platform: DesktopPlatform::new(),
            view: View::Landing,
            cmd_tx,
            event_rx,
            textures: HashMap::new(),
            loader_shown_at: Instant::now(),
            toast: None,
            manual_copy_text: None,
            status_line: None,
            revealed_at: HashMap::new(),
            landing_scroll_y: 0.0,
            scroll_to_chapters: false,
            last_viewport: None,
            resize_settle: EffectSlot::default(),
            os_fullscreen: false,
        }
    }

    fn drain_asset_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AssetEvent::ImageLoaded { scene, pixels } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [pixels.width, pixels.height],
                        &pixels.rgba,
                    );
                    let handle = ctx.load_texture(
                        format!("scene-{scene}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(scene, TextureState::Ready(handle));
                }
                AssetEvent::ImageFailed { scene, reason } => {
                    warn!(scene, %reason, "scene image failed to load");
                    self.textures.insert(scene, TextureState::Error(reason));
                }
            }
        }
    }

    fn drain_platform_toasts(&mut self, now: Instant) {
        // Latest toast wins the single slot.
        for toast in self.platform.drain_toasts() {
            self.toast = Some(ActiveToast {
                message: toast.message,
                shown_at: now,
                visible_for: toast.visible_for,
            });
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let fullscreen = self.controller.mode().fullscreen;
        let mut commands: Vec<KeyCommand> = Vec::new();
        ctx.input_mut(|input| {
            for (egui_key, key) in KEY_TABLE {
                if let Some(command) = map_key(key, fullscreen) {
                    // Consuming the press also suppresses its default
                    // (scroll on arrows, activation on space).
                    for &modifiers in accepted_modifiers(key) {
                        if input.consume_key(modifiers, egui_key) {
                            commands.push(command);
                            break;
                        }
                    }
                }
            }
        });
        for command in commands {
            self.controller.apply_command(command, &mut self.view_state);
        }
    }

    fn ensure_scene_image_requested(&mut self) {
        let scene = self.controller.cursor();
        if self.textures.contains_key(&scene) {
            return;
        }
        let Some(image) = self.view_state.image.clone() else {
            return;
        };
        let path = self.story.resolve_asset(&image);
        if dispatch_asset_command(
            &self.cmd_tx,
            AssetCommand::LoadImage { scene, path },
            &mut self.status_line,
        ) {
            self.textures.insert(scene, TextureState::Loading);
        }
    }

    fn track_viewport_resize(&mut self, ctx: &egui::Context, now: Instant) {
        let size = ctx.content_rect().size();
        if self.last_viewport != Some(size) {
            if self.last_viewport.is_some() {
                self.resize_settle.restart(now, RESIZE_DEBOUNCE);
            }
            self.last_viewport = Some(size);
        }
        if self.resize_settle.progress(now) == Some(1.0) {
            // Reserved for layout recalculation once something needs it.
            trace!(?size, "viewport resize settled");
            self.resize_settle.clear();
        }
    }

    fn reconcile_os_fullscreen(&mut self, ctx: &egui::Context) {
        let want = self.controller.mode().fullscreen;
        if want != self.os_fullscreen {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(want));
            self.os_fullscreen = want;
        }
    }

    fn reveal_opacity(&self, id: &'static str, now: Instant) -> f32 {
        match self.revealed_at.get(id) {
            Some(at) => (now.saturating_duration_since(*at).as_secs_f32()
                / motion::REVEAL_FADE.as_secs_f32())
            .clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    fn draw_landing(&mut self, ctx: &egui::Context, now: Instant) {
        let scrolled = motion::navbar_scrolled(self.landing_scroll_y);
        let navbar_fill = if scrolled {
            theme::PANEL_BACKGROUND
        } else {
            Color32::TRANSPARENT
        };
        egui::TopBottomPanel::top("navbar")
            .frame(
                egui::Frame::new()
                    .fill(navbar_fill)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&self.story.title)
                            .size(18.0)
                            .strong()
                            .color(theme::ACCENT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Oku").clicked() {
                            self.view = View::Reader;
                        }
                        if ui.button("Bölümler").clicked() {
                            self.scroll_to_chapters = true;
                        }
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let output = egui::ScrollArea::vertical().show(ui, |ui| {
                self.landing_contents(ui, now);
            });
            self.landing_scroll_y = output.state.offset.y;
        });
    }

    fn landing_contents(&mut self, ui: &mut egui::Ui, now: Instant) {
        // Hero drifts against the scroll direction.
        let hero_space = (80.0 + motion::parallax_offset(self.landing_scroll_y, 0.3)).max(16.0);
        ui.add_space(hero_space);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&self.story.title)
                    .size(34.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(&self.story.share_text)
                    .size(17.0)
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(20.0);
            if ui
                .add(egui::Button::new(
                    RichText::new("Okumaya Başla").size(17.0),
                ))
                .clicked()
            {
                self.view = View::Reader;
            }
        });

        ui.add_space(320.0);

        let heading = ui.heading(RichText::new("Bölümler").color(theme::ACCENT));
        if self.scroll_to_chapters {
            heading.scroll_to_me(Some(egui::Align::TOP));
            self.scroll_to_chapters = false;
        }
        ui.add_space(12.0);

        let snippet = self
            .controller
            .sequence()
            .get(0)
            .map(|scene| scene.text.clone())
            .unwrap_or_default();
        let opacity = self.reveal_opacity("chapter-card", now);
        let inner = ui
            .scope(|ui| {
                ui.set_opacity(opacity);
                egui::Frame::new()
                    .fill(theme::PANEL_BACKGROUND)
                    .corner_radius(12)
                    .inner_margin(16)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width().min(520.0));
                        ui.label(
                            RichText::new("Bölüm 1")
                                .size(20.0)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        );
                        ui.add_space(6.0);
                        ui.label(RichText::new(snippet).color(theme::TEXT_MUTED));
                        ui.add_space(10.0);
                        if ui.button("Bölümü Aç").clicked() {
                            self.view = View::Reader;
                        }
                    });
            })
            .response;

        let fraction = visible_fraction(ui.clip_rect(), inner.rect);
        if !self.revealed_at.contains_key("chapter-card") && motion::reveal_triggered(fraction) {
            self.revealed_at.insert("chapter-card", now);
        }

        ui.add_space(80.0);
    }

    fn draw_reader(&mut self, ctx: &egui::Context, now: Instant) {
        let treatment = self.view_state.fullscreen_treatment;
        if !treatment {
            egui::TopBottomPanel::top("reader-controls")
                .frame(
                    egui::Frame::new()
                        .fill(theme::PANEL_BACKGROUND)
                        .inner_margin(egui::Margin::symmetric(12, 8)),
                )
                .show(ctx, |ui| self.reader_controls(ui));
            egui::TopBottomPanel::bottom("reader-nav")
                .frame(
                    egui::Frame::new()
                        .fill(theme::PANEL_BACKGROUND)
                        .inner_margin(egui::Margin::symmetric(12, 8)),
                )
                .show(ctx, |ui| self.reader_nav(ui));
        }

        let fill = if treatment {
            Color32::BLACK
        } else {
            theme::PAGE_BACKGROUND
        };
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(fill))
            .show(ctx, |ui| self.reader_scene(ui, now));
    }

    fn reader_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("← Ana Sayfa").clicked() {
                self.view = View::Landing;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(state) = self.view_state.control(ControlId::Share) {
                    if ui
                        .add_enabled(state.enabled, egui::Button::new("Paylaş"))
                        .clicked()
                    {
                        match self.controller.share(&mut self.platform) {
                            ShareOutcome::SharedNatively | ShareOutcome::CopiedToClipboard => {}
                            ShareOutcome::ManualCopyRequired(url) => {
                                self.manual_copy_text = Some(url);
                            }
                        }
                    }
                }
                if let Some(state) = self.view_state.control(ControlId::Fullscreen) {
                    let label = icon_label(state.icon.unwrap_or(IconState::Expand));
                    if ui
                        .add_enabled(state.enabled, egui::Button::new(label))
                        .clicked()
                    {
                        self.controller.toggle_fullscreen(&mut self.view_state);
                    }
                }
                if let Some(state) = self.view_state.control(ControlId::Sound) {
                    let label = icon_label(state.icon.unwrap_or(IconState::VolumeUp));
                    if ui
                        .add_enabled(state.enabled, egui::Button::new(label))
                        .clicked()
                    {
                        self.controller.toggle_sound(&mut self.view_state);
                    }
                }
            });
        });
    }

    fn reader_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(state) = self.view_state.control(ControlId::Previous) {
                if ui
                    .add_enabled(state.enabled, egui::Button::new("◀ Önceki"))
                    .clicked()
                {
                    self.controller.step(-1, &mut self.view_state);
                }
            }
            if let Some((current, total)) = self.view_state.indicator {
                ui.label(
                    RichText::new(format!("{} / {}", current + 1, total))
                        .color(theme::TEXT_MUTED),
                );
            }
            if let Some(state) = self.view_state.control(ControlId::Next) {
                if ui
                    .add_enabled(state.enabled, egui::Button::new("Sonraki ▶"))
                    .clicked()
                {
                    self.controller.step(1, &mut self.view_state);
                }
            }
            if let Some(status) = &self.status_line {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(status).color(ui.visuals().warn_fg_color));
                });
            }
        });
    }

    fn reader_scene(&mut self, ui: &mut egui::Ui, now: Instant) {
        let scene = self.controller.cursor();
        let fade_in = self.view_state.fade.progress(now).unwrap_or(1.0);
        let tint = Color32::WHITE.gamma_multiply(fade_in);

        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            match self.textures.get(&scene) {
                Some(TextureState::Ready(texture)) => {
                    let avail = ui.available_size();
                    let response = ui.add(
                        egui::Image::new(texture)
                            .max_size(avail * 0.96)
                            .maintain_aspect_ratio(true)
                            .tint(tint)
                            .sense(egui::Sense::click()),
                    );
                    if response.clicked() {
                        self.controller.toggle_fullscreen(&mut self.view_state);
                    }
                }
                Some(TextureState::Error(reason)) => {
                    ui.add_space(40.0);
                    ui.colored_label(
                        ui.visuals().warn_fg_color,
                        format!("Görsel açılamadı: {reason}"),
                    );
                }
                Some(TextureState::Loading) | None => {
                    ui.add_space(40.0);
                    ui.spinner();
                }
            }

            if !self.view_state.fullscreen_treatment {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(&self.view_state.text)
                        .size(16.0)
                        .color(theme::TEXT_PRIMARY),
                );
            }
        });
    }

    fn draw_toast(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(toast) = &self.toast else {
            return;
        };
        let elapsed = now.saturating_duration_since(toast.shown_at);
        match toast_opacity(elapsed, toast.visible_for) {
            None => self.toast = None,
            Some(opacity) => {
                let message = toast.message.clone();
                egui::Area::new(egui::Id::new("toast"))
                    .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
                    .order(egui::Order::Foreground)
                    .show(ctx, |ui| {
                        ui.set_opacity(opacity);
                        egui::Frame::new()
                            .fill(theme::TOAST_BACKGROUND)
                            .corner_radius(10)
                            .inner_margin(egui::Margin::symmetric(14, 10))
                            .show(ui, |ui| {
                                ui.label(RichText::new(message).color(Color32::WHITE));
                            });
                    });
            }
        }
    }

    fn draw_manual_copy_window(&mut self, ctx: &egui::Context) {
        let Some(text) = self.manual_copy_text.as_mut() else {
            return;
        };
        let mut close = false;
        egui::Window::new("Bağlantıyı kopyala")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Pano kullanılamıyor; bağlantıyı elle kopyalayın:");
                ui.add(egui::TextEdit::singleline(text).desired_width(340.0));
                if ui.button("Kapat").clicked() {
                    close = true;
                }
            });
        if close {
            self.manual_copy_text = None;
        }
    }

    fn draw_loader(&mut self, ctx: &egui::Context, now: Instant) {
        if motion::loader_phase(self.loader_shown_at, now) == motion::LoaderPhase::Dismissed {
            return;
        }
        let opacity = motion::loader_opacity(self.loader_shown_at, now);
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("loader"),
        ));
        let rect = ctx.content_rect();
        painter.rect_filled(
            rect,
            egui::CornerRadius::ZERO,
            theme::PAGE_BACKGROUND.gamma_multiply(opacity),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &self.story.title,
            egui::FontId::proportional(30.0),
            theme::ACCENT.gamma_multiply(opacity),
        );
    }

    fn any_effect_active(&self, now: Instant) -> bool {
        self.view_state.fade.is_active(now)
            || self.toast.is_some()
            || self.resize_settle.progress(now).is_some()
            || motion::loader_phase(self.loader_shown_at, now) != motion::LoaderPhase::Dismissed
            || self
                .textures
                .values()
                .any(|texture| matches!(texture, TextureState::Loading))
            || self
                .revealed_at
                .values()
                .any(|at| now.saturating_duration_since(*at) < motion::REVEAL_FADE)
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.drain_asset_events(ctx);
        self.drain_platform_toasts(now);
        if self.view == View::Reader {
            self.handle_keyboard(ctx);
        }
        self.ensure_scene_image_requested();
        self.track_viewport_resize(ctx, now);

        match self.view {
            View::Landing => self.draw_landing(ctx, now),
            View::Reader => self.draw_reader(ctx, now),
        }
        self.draw_toast(ctx, now);
        self.draw_manual_copy_window(ctx);
        self.draw_loader(ctx, now);
        self.reconcile_os_fullscreen(ctx);

        if self.any_effect_active(now) {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
