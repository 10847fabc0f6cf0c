use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod assets;
mod config;
mod platform;
mod ui;

use assets::commands::{AssetCommand, AssetEvent};

#[derive(Parser, Debug)]
struct Args {
    /// Story description (TOML). The embedded chapter is used when the
    /// file is absent.
    #[arg(long, default_value = "story.toml")]
    story: PathBuf,
    /// Scene to open with (0-based).
    #[arg(long, default_value_t = 0)]
    start_scene: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let story_path = config::resolve_story_path(&args.story);
    let story = config::load_story(&story_path);
    let sequence = story.sequence().context("story has no usable scenes")?;
    let share_payload = story.share_payload(&story_path);

    let (cmd_tx, cmd_rx) = bounded::<AssetCommand>(64);
    let (event_tx, event_rx) = bounded::<AssetEvent>(256);
    assets::runtime::launch(cmd_rx, event_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(story.title.clone())
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 540.0]),
        ..Default::default()
    };
    let window_title = story.title.clone();
    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(ui::ViewerApp::new(
                cc,
                story,
                sequence,
                share_payload,
                args.start_scene,
                cmd_tx,
                event_rx,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("viewer exited with error: {err}"))
}
