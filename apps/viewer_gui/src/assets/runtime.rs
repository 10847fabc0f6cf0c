//! Loader worker: reads and decodes scene images off the UI thread.

use std::{fs, path::Path, thread};

use anyhow::Context;
use crossbeam_channel::{Receiver, Sender};
use image::GenericImageView;
use tracing::debug;

use crate::assets::commands::{AssetCommand, AssetEvent, ImagePixels};

pub fn launch(cmd_rx: Receiver<AssetCommand>, event_tx: Sender<AssetEvent>) {
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                AssetCommand::LoadImage { scene, path } => {
                    debug!(scene, path = %path.display(), "loading scene image");
                    let event = match decode_scene_image(&path) {
                        Ok(pixels) => AssetEvent::ImageLoaded { scene, pixels },
                        Err(err) => AssetEvent::ImageFailed {
                            scene,
                            reason: format!("{err:#}"),
                        },
                    };
                    if event_tx.send(event).is_err() {
                        // UI is gone; stop the worker.
                        return;
                    }
                }
            }
        }
    });
}

fn decode_scene_image(path: &Path) -> anyhow::Result<ImagePixels> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read image '{}'", path.display()))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("failed to decode image '{}'", path.display()))?;
    let (width, height) = decoded.dimensions();
    Ok(ImagePixels {
        width: width as usize,
        height: height as usize,
        rgba: decoded.to_rgba8().into_raw(),
    })
}
