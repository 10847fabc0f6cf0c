use serde::Deserialize;
use thiserror::Error;

/// Reference to an image or audio asset, as a path or URL relative to
/// the story file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(pub String);

impl AssetRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One navigable unit of content. Immutable after construction; the
/// audio reference is tracked but nothing plays it yet.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub image: AssetRef,
    pub text: String,
    #[serde(default)]
    pub audio: Option<AssetRef>,
}

#[derive(Debug, Error)]
pub enum SceneSequenceError {
    #[error("a story needs at least one scene")]
    Empty,
}

/// Ordered, non-empty list of scenes. Fixed length for the session; no
/// insertion or removal is exposed.
#[derive(Debug, Clone)]
pub struct SceneSequence {
    scenes: Vec<Scene>,
}

impl SceneSequence {
    pub fn new(scenes: Vec<Scene>) -> Result<Self, SceneSequenceError> {
        if scenes.is_empty() {
            return Err(SceneSequenceError::Empty);
        }
        Ok(Self { scenes })
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    // Non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(image: &str) -> Scene {
        Scene {
            image: AssetRef(image.to_string()),
            text: format!("text for {image}"),
            audio: None,
        }
    }

    #[test]
    fn rejects_empty_sequence() {
        assert!(matches!(
            SceneSequence::new(Vec::new()),
            Err(SceneSequenceError::Empty)
        ));
    }

    #[test]
    fn indexes_in_order_and_bounds_checks() {
        let seq = SceneSequence::new(vec![scene("a.jpg"), scene("b.jpg")]).expect("sequence");
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(0).map(|s| s.image.as_str()), Some("a.jpg"));
        assert_eq!(seq.get(1).map(|s| s.image.as_str()), Some("b.jpg"));
        assert!(seq.get(2).is_none());
    }

    #[test]
    fn deserializes_scene_with_optional_audio() {
        let scene: Scene =
            toml::from_str("image = \"1.jpg\"\ntext = \"hi\"").expect("scene without audio");
        assert!(scene.audio.is_none());

        let scene: Scene = toml::from_str("image = \"1.jpg\"\ntext = \"hi\"\naudio = \"1.ogg\"")
            .expect("scene with audio");
        assert_eq!(scene.audio.map(|a| a.0), Some("1.ogg".to_string()));
    }
}
