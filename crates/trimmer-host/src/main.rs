use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;
use trimmer_core::config::TrimmerConfig;
use trimmer_core::time::{MediaTime, TimeRange};
use trimmer_host::app::TrimApp;
use trimmer_host::exporter::Exporter;
use trimmer_host::message::Message;
use trimmer_host::player::MediaPlayer;

/// Stand-in player that only logs what it is asked to do.
#[derive(Default)]
struct LogPlayer {
    playing: bool,
}

impl MediaPlayer for LogPlayer {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        self.playing = true;
        info!("player: play");
    }

    fn pause(&mut self) {
        self.playing = false;
        info!("player: pause");
    }

    fn seek(&mut self, to: MediaTime) {
        info!(to = %to, "player: seek");
    }

    fn replace_item(&mut self, range: TimeRange) {
        info!(start = %range.start, end = %range.end, "player: replace item");
    }
}

struct LogExporter;

impl Exporter for LogExporter {
    fn start_export(&mut self, range: TimeRange) -> Result<(), String> {
        info!(start = %range.start, end = %range.end, "exporter: start");
        Ok(())
    }
}

fn main() -> trimmer_core::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TrimmerConfig::load(&PathBuf::from(path))?,
        None => TrimmerConfig::new()
            .with_minimum_duration(1.0)
            .with_total_width(360.0),
    };

    let mut app = TrimApp::new(config, LogPlayer { playing: true }, LogExporter)?;
    app.update(Message::AssetLoaded(MediaTime::from_secs_f64(30.0)));

    let width = app.trimmer.geometry().total_width;
    let handle = app.trimmer.geometry().handle_width;
    let script = [
        // Pull the leading handle a quarter of the way in.
        Message::PointerDown(handle / 2.0),
        Message::PointerMoved(handle / 2.0 + width / 4.0),
        Message::PointerReleased,
        // Pull the trailing handle back by a quarter.
        Message::PointerDown(width - handle / 2.0),
        Message::PointerMoved(width - handle / 2.0 - width / 4.0),
        Message::PointerReleased,
        // Scrub from the middle.
        Message::PointerDown(width / 2.0),
        Message::PointerMoved(width / 2.0 + 20.0),
        Message::PointerCancelled,
        Message::PlayerTick(MediaTime::from_secs_f64(1.5)),
        Message::Export,
    ];
    for message in script {
        app.update(message);
        info!(
            leading = %app.labels.leading,
            current = %app.labels.current,
            trailing = %app.labels.trailing,
            "labels"
        );
    }

    let output = std::env::temp_dir().join("video.mov");
    app.update(Message::ExportFinished(Ok(output)));
    println!("{}", app.status_message);
    Ok(())
}
