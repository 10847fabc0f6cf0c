//! UI <-> loader messages and the queueing helper.

use std::path::PathBuf;

use crossbeam_channel::{Sender, TrySendError};

pub enum AssetCommand {
    LoadImage { scene: usize, path: PathBuf },
}

/// Decoded RGBA pixels ready for texture upload.
#[derive(Clone, Debug)]
pub struct ImagePixels {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub enum AssetEvent {
    ImageLoaded { scene: usize, pixels: ImagePixels },
    ImageFailed { scene: usize, reason: String },
}

/// Queues a command for the loader. Returns whether it was accepted so
/// the caller can retry on a later frame instead of marking the scene
/// as in flight.
pub fn dispatch_asset_command(
    cmd_tx: &Sender<AssetCommand>,
    cmd: AssetCommand,
    status: &mut Option<String>,
) -> bool {
    let cmd_name = match &cmd {
        AssetCommand::LoadImage { .. } => "load_image",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->loader command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = Some("Yükleyici meşgul; tekrar denenecek".to_string());
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = Some("Yükleyici durdu; görseller açılamıyor".to_string());
            false
        }
    }
}
