use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::{debug, info, warn};
use trimmer_core::config::TrimmerConfig;
use trimmer_core::controller::TrimmerController;
use trimmer_core::error::Result;
use trimmer_core::events::{TrimmerEvent, TrimmerEventKind};
use trimmer_core::time::TimeRange;

use crate::exporter::Exporter;
use crate::message::Message;
use crate::player::MediaPlayer;

pub const STATUS_EXPORTING: &str = "Exporting...";
pub const STATUS_SAVED: &str = "Saved to device.";
pub const STATUS_SAVE_FAILED: &str = "Failed to save the video.";

/// The three time labels shown under the trimmer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    pub leading: String,
    pub current: String,
    pub trailing: String,
}

/// Host session: keeps a player and an exporter in sync with a trimmer.
pub struct TrimApp<P: MediaPlayer, E: Exporter> {
    pub trimmer: TrimmerController,
    pub player: P,
    pub exporter: E,
    pub labels: Labels,
    pub status_message: String,
    was_playing: bool,
    preview_range: Option<TimeRange>,
    pending: Rc<RefCell<VecDeque<TrimmerEvent>>>,
}

impl<P: MediaPlayer, E: Exporter> TrimApp<P, E> {
    pub fn new(config: TrimmerConfig, player: P, exporter: E) -> Result<Self> {
        let mut trimmer = TrimmerController::new(config)?;
        let pending = Rc::new(RefCell::new(VecDeque::new()));
        let sink = pending.clone();
        trimmer.subscribe_all(move |event| sink.borrow_mut().push_back(*event));

        let mut app = Self {
            trimmer,
            player,
            exporter,
            labels: Labels::default(),
            status_message: String::new(),
            was_playing: false,
            preview_range: None,
            pending,
        };
        app.rebuild_preview();
        app.refresh_labels();
        Ok(app)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::AssetLoaded(duration) => {
                self.trimmer.set_asset(duration);
                self.drain_events();
                self.rebuild_preview();
                self.refresh_labels();
            }
            Message::Layout(width) => self.trimmer.set_total_width(width),
            Message::PointerDown(x) => {
                self.trimmer.pointer_down(x);
            }
            Message::PointerMoved(x) => {
                self.trimmer.pointer_move(x);
            }
            Message::PointerReleased => self.trimmer.pointer_up(),
            Message::PointerCancelled => self.trimmer.pointer_cancel(),
            Message::PlayerTick(time) => {
                // The player clock is relative to the current item, which
                // starts at the effective range start.
                let time = if self.trimmer.state().is_idle() {
                    time + self.trimmer.effective_output_range().start
                } else {
                    time
                };
                self.trimmer.set_progress(time);
                self.refresh_labels();
            }
            Message::Export => {
                let range = self.trimmer.effective_output_range();
                match self.exporter.start_export(range) {
                    Ok(()) => {
                        info!(start = %range.start, end = %range.end, "export started");
                        self.status_message = STATUS_EXPORTING.into();
                    }
                    Err(e) => {
                        warn!(error = %e, "export could not start");
                        self.status_message = STATUS_SAVE_FAILED.into();
                    }
                }
            }
            Message::ExportFinished(result) => match result {
                Ok(path) => {
                    info!(path = %path.display(), "export saved");
                    self.status_message = STATUS_SAVED.into();
                }
                Err(e) => {
                    warn!(error = %e, "export failed");
                    self.status_message = STATUS_SAVE_FAILED.into();
                }
            },
        }
        self.drain_events();
    }

    pub fn was_playing(&self) -> bool {
        self.was_playing
    }

    /// The range the player's current item was built from.
    pub fn preview_range(&self) -> Option<TimeRange> {
        self.preview_range
    }

    fn drain_events(&mut self) {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(event) = next else { break };
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: TrimmerEvent) {
        match event.kind {
            TrimmerEventKind::DidBeginTrimming => {
                self.pause_for_gesture();
                self.rebuild_preview();
            }
            TrimmerEventKind::DidEndTrimming => {
                self.resume_after_gesture();
                self.rebuild_preview();
            }
            TrimmerEventKind::SelectedRangeChanged => {}
            TrimmerEventKind::DidBeginScrubbing => {
                self.pause_for_gesture();
                self.rebuild_preview();
            }
            TrimmerEventKind::DidEndScrubbing => {
                self.resume_after_gesture();
                self.rebuild_preview();
            }
            TrimmerEventKind::ProgressChanged => {
                let offset = self.trimmer.effective_output_range().start;
                self.player.seek(event.snapshot.progress - offset);
            }
        }
        self.refresh_labels();
    }

    fn pause_for_gesture(&mut self) {
        self.was_playing = self.player.is_playing();
        self.player.pause();
    }

    fn resume_after_gesture(&mut self) {
        if self.was_playing {
            self.player.play();
        }
    }

    /// Swap the player item only when the output range actually changed.
    fn rebuild_preview(&mut self) {
        if self.trimmer.model().is_empty() {
            return;
        }
        let range = self.trimmer.effective_output_range();
        if self.preview_range == Some(range) {
            return;
        }
        debug!(start = %range.start, end = %range.end, "rebuilding preview item");
        self.player.replace_item(range);
        self.preview_range = Some(range);
    }

    fn refresh_labels(&mut self) {
        let model = self.trimmer.model();
        self.labels = Labels {
            leading: model.selected_start().display_string(),
            current: model.progress().display_string(),
            trailing: model.selected_end().display_string(),
        };
    }
}
