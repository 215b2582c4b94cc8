use trimmer_core::time::{MediaTime, TimeRange};

use crate::exporter::Exporter;
use crate::player::MediaPlayer;

/// Player that records every call instead of playing anything.
#[derive(Debug, Default)]
pub struct FakePlayer {
    pub playing: bool,
    pub seeks: Vec<MediaTime>,
    pub items: Vec<TimeRange>,
    pub play_calls: usize,
    pub pause_calls: usize,
}

impl FakePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playing() -> Self {
        Self {
            playing: true,
            ..Self::default()
        }
    }
}

impl MediaPlayer for FakePlayer {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        self.playing = true;
        self.play_calls += 1;
    }

    fn pause(&mut self) {
        self.playing = false;
        self.pause_calls += 1;
    }

    fn seek(&mut self, to: MediaTime) {
        self.seeks.push(to);
    }

    fn replace_item(&mut self, range: TimeRange) {
        self.items.push(range);
    }
}

/// Exporter that records requested ranges. Set `refuse` to make
/// `start_export` fail.
#[derive(Debug, Default)]
pub struct FakeExporter {
    pub requests: Vec<TimeRange>,
    pub refuse: Option<String>,
}

impl FakeExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing(reason: &str) -> Self {
        Self {
            requests: Vec::new(),
            refuse: Some(reason.into()),
        }
    }
}

impl Exporter for FakeExporter {
    fn start_export(&mut self, range: TimeRange) -> Result<(), String> {
        if let Some(reason) = &self.refuse {
            return Err(reason.clone());
        }
        self.requests.push(range);
        Ok(())
    }
}
