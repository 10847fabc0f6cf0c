//! Full keyboard-driven reading session over the consolidated key
//! binding table.

use std::collections::HashMap;

use scene_core::{
    map_key, AssetRef, ControlId, IconState, KeyInput, PresentationAdapter, Scene,
    SceneController, SceneSequence, SharePayload,
};

#[derive(Default)]
struct PageSurface {
    image: Option<String>,
    text: String,
    indicator: Option<(usize, usize)>,
    enabled: HashMap<ControlId, bool>,
    icons: HashMap<ControlId, IconState>,
    fades: usize,
    fullscreen_treatment: bool,
}

impl PresentationAdapter for PageSurface {
    fn set_image(&mut self, image: &AssetRef) {
        self.image = Some(image.as_str().to_string());
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_indicator(&mut self, current: usize, total: usize) {
        self.indicator = Some((current, total));
    }

    fn set_control_enabled(&mut self, control: ControlId, enabled: bool) {
        self.enabled.insert(control, enabled);
    }

    fn set_icon_state(&mut self, control: ControlId, icon: IconState) {
        self.icons.insert(control, icon);
    }

    fn apply_fade_transition(&mut self) {
        self.fades += 1;
    }

    fn apply_fullscreen_treatment(&mut self, fullscreen: bool) {
        self.fullscreen_treatment = fullscreen;
    }
}

fn story() -> SceneController {
    let scenes = vec![
        Scene {
            image: AssetRef("1.jpg".to_string()),
            text: "Merhaba!".to_string(),
            audio: None,
        },
        Scene {
            image: AssetRef("2.jpg".to_string()),
            text: "Serüven başlıyor.".to_string(),
            audio: None,
        },
        Scene {
            image: AssetRef("3.jpg".to_string()),
            text: "Devam edecek...".to_string(),
            audio: None,
        },
    ];
    SceneController::new(
        SceneSequence::new(scenes).expect("three scenes"),
        SharePayload {
            title: "Web Comic - Bölüm 1".to_string(),
            text: "Bu macera dolu hikayeyi keşfedin!".to_string(),
            url: "https://example.com/1.bolum".to_string(),
        },
    )
}

fn press(controller: &mut SceneController, surface: &mut PageSurface, key: KeyInput) -> bool {
    match map_key(key, controller.mode().fullscreen) {
        Some(command) => {
            controller.apply_command(command, surface);
            true
        }
        None => false,
    }
}

#[test]
fn arrow_keys_walk_the_story_and_stop_at_the_ends() {
    let mut controller = story();
    let mut surface = PageSurface::default();
    controller.sync_display(&mut surface);

    assert_eq!(surface.image.as_deref(), Some("1.jpg"));
    assert_eq!(surface.indicator, Some((0, 3)));
    assert_eq!(surface.enabled.get(&ControlId::Previous), Some(&false));

    press(&mut controller, &mut surface, KeyInput::ArrowRight);
    press(&mut controller, &mut surface, KeyInput::ArrowRight);
    assert_eq!(controller.cursor(), 2);
    assert_eq!(surface.image.as_deref(), Some("3.jpg"));
    assert_eq!(surface.enabled.get(&ControlId::Next), Some(&false));
    assert_eq!(surface.fades, 2);

    // Past the last scene: handled key, ignored navigation, no redraw.
    press(&mut controller, &mut surface, KeyInput::ArrowRight);
    assert_eq!(controller.cursor(), 2);
    assert_eq!(surface.fades, 2);

    press(&mut controller, &mut surface, KeyInput::ArrowLeft);
    press(&mut controller, &mut surface, KeyInput::ArrowLeft);
    press(&mut controller, &mut surface, KeyInput::ArrowLeft);
    assert_eq!(controller.cursor(), 0);
    assert_eq!(surface.text, "Merhaba!");
}

#[test]
fn space_and_escape_drive_the_fullscreen_state_machine() {
    let mut controller = story();
    let mut surface = PageSurface::default();

    // Escape while windowed falls through to the platform.
    assert!(!press(&mut controller, &mut surface, KeyInput::Escape));

    assert!(press(&mut controller, &mut surface, KeyInput::Space));
    assert!(controller.mode().fullscreen);
    assert!(surface.fullscreen_treatment);
    assert_eq!(
        surface.icons.get(&ControlId::Fullscreen),
        Some(&IconState::Collapse)
    );

    assert!(press(&mut controller, &mut surface, KeyInput::Escape));
    assert!(!controller.mode().fullscreen);
    assert!(!surface.fullscreen_treatment);
    assert_eq!(
        surface.icons.get(&ControlId::Fullscreen),
        Some(&IconState::Expand)
    );
}

#[test]
fn mute_key_round_trips_the_sound_flag() {
    let mut controller = story();
    let mut surface = PageSurface::default();

    press(&mut controller, &mut surface, KeyInput::KeyM);
    assert!(controller.mode().sound_enabled);
    assert_eq!(
        surface.icons.get(&ControlId::Sound),
        Some(&IconState::VolumeMuted)
    );

    press(&mut controller, &mut surface, KeyInput::KeyM);
    assert!(!controller.mode().sound_enabled);
    assert_eq!(
        surface.icons.get(&ControlId::Sound),
        Some(&IconState::VolumeUp)
    );
}
