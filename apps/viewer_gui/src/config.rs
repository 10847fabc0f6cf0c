//! Story configuration: embedded defaults, TOML file, environment
//! override, layered in that order.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use scene_core::{AssetRef, Scene, SceneSequence, SharePayload};
use serde::Deserialize;
use tracing::{info, warn};

/// Which controls the page presents. Anything switched off here is an
/// unbound control: the controller's updates for it are skipped.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub previous: bool,
    pub next: bool,
    pub sound: bool,
    pub fullscreen: bool,
    pub share: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            previous: true,
            next: true,
            sound: true,
            fullscreen: true,
            share: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneEntry {
    pub image: String,
    pub text: String,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    pub title: String,
    pub share_title: String,
    pub share_text: String,
    /// Page locator handed to the share flow. When empty, the resolved
    /// story file path stands in for it.
    pub share_url: String,
    pub controls: ControlsConfig,
    pub scenes: Vec<SceneEntry>,
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            title: "Web Comic - Bölüm 1".to_string(),
            share_title: "Web Comic - Bölüm 1".to_string(),
            share_text: "Bu macera dolu hikayeyi keşfedin!".to_string(),
            share_url: String::new(),
            controls: ControlsConfig::default(),
            scenes: vec![SceneEntry {
                image: "1.bölüm.jpg".to_string(),
                text: "Merhaba! Bu macera dolu hikayeye hoş geldiniz. İki dostun başlayacak \
                       olan serüvenini takip edeceğiz."
                    .to_string(),
                audio: None,
            }],
            base_dir: PathBuf::new(),
        }
    }
}

impl StoryConfig {
    pub fn sequence(&self) -> anyhow::Result<SceneSequence> {
        let scenes = self
            .scenes
            .iter()
            .map(|entry| Scene {
                image: AssetRef(entry.image.clone()),
                text: entry.text.clone(),
                audio: entry.audio.clone().map(AssetRef),
            })
            .collect();
        SceneSequence::new(scenes).map_err(Into::into)
    }

    pub fn share_payload(&self, story_path: &Path) -> SharePayload {
        let url = if self.share_url.is_empty() {
            story_path.display().to_string()
        } else {
            self.share_url.clone()
        };
        SharePayload {
            title: self.share_title.clone(),
            text: self.share_text.clone(),
            url,
        }
    }

    /// Scene assets are named relative to the story file's directory.
    pub fn resolve_asset(&self, asset: &AssetRef) -> PathBuf {
        self.base_dir.join(asset.as_str())
    }
}

/// Resolves the story path: CLI value, overridden by `STORY_PATH` or
/// `APP__STORY_PATH`.
pub fn resolve_story_path(cli_path: &Path) -> PathBuf {
    for key in ["STORY_PATH", "APP__STORY_PATH"] {
        if let Ok(v) = env::var(key) {
            return PathBuf::from(v);
        }
    }
    cli_path.to_path_buf()
}

/// Best-effort load: a missing or malformed file falls back to the
/// embedded single-scene chapter so the viewer always starts.
pub fn load_story(path: &Path) -> StoryConfig {
    let mut story = StoryConfig::default();

    match fs::read_to_string(path) {
        Ok(raw) => match toml::from_str::<StoryConfig>(&raw) {
            Ok(parsed) => story = parsed,
            Err(err) => warn!(
                path = %path.display(),
                error = %err,
                "malformed story file; using the embedded chapter"
            ),
        },
        Err(_) => info!(
            path = %path.display(),
            "no story file; using the embedded chapter"
        ),
    }

    if story.scenes.is_empty() {
        warn!("story file lists no scenes; using the embedded chapter");
        story.scenes = StoryConfig::default().scenes;
    }
    story.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    story
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_chapter_has_one_scene_and_all_controls() {
        let story = StoryConfig::default();
        assert_eq!(story.scenes.len(), 1);
        assert!(story.controls.share);
        let sequence = story.sequence().expect("sequence");
        assert_eq!(sequence.len(), 1);
    }

    #[test]
    fn parses_story_toml() {
        let raw = r#"
            title = "Test Comic"
            share_url = "https://example.com/test"

            [controls]
            sound = false

            [[scenes]]
            image = "a.png"
            text = "ilk sahne"

            [[scenes]]
            image = "b.png"
            text = "ikinci sahne"
            audio = "b.ogg"
        "#;
        let story: StoryConfig = toml::from_str(raw).expect("story");
        assert_eq!(story.title, "Test Comic");
        assert!(!story.controls.sound);
        assert!(story.controls.next);
        assert_eq!(story.scenes.len(), 2);
        assert_eq!(story.scenes[1].audio.as_deref(), Some("b.ogg"));
    }

    #[test]
    fn missing_file_falls_back_to_embedded_chapter() {
        let story = load_story(Path::new("/definitely/not/here/story.toml"));
        assert_eq!(story.title, "Web Comic - Bölüm 1");
        assert_eq!(story.base_dir, PathBuf::from("/definitely/not/here"));
    }

    #[test]
    fn share_payload_uses_story_path_when_url_is_empty() {
        let story = StoryConfig::default();
        let payload = story.share_payload(Path::new("/tmp/story.toml"));
        assert_eq!(payload.url, "/tmp/story.toml");

        let mut story = StoryConfig::default();
        story.share_url = "https://example.com/1.bolum".to_string();
        let payload = story.share_payload(Path::new("/tmp/story.toml"));
        assert_eq!(payload.url, "https://example.com/1.bolum");
    }

    #[test]
    fn resolves_assets_relative_to_story_dir() {
        let mut story = StoryConfig::default();
        story.base_dir = PathBuf::from("/stories/bolum1");
        assert_eq!(
            story.resolve_asset(&AssetRef("1.jpg".to_string())),
            PathBuf::from("/stories/bolum1/1.jpg")
        );
    }
}
