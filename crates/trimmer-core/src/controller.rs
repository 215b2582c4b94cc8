use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::TrimmerConfig;
use crate::error::Result;
use crate::events::{EventBus, ListenerId, TrimmerEvent, TrimmerEventKind, TrimmerSnapshot};
use crate::geometry::{HitRegion, TrackGeometry};
use crate::range::RangeModel;
use crate::time::{MediaTime, TimeRange};

/// The gesture currently in progress. Only one can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    DraggingLeadingHandle,
    DraggingTrailingHandle,
    Scrubbing,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// True while either handle is being dragged.
    pub fn is_trimming(&self) -> bool {
        matches!(
            self,
            InteractionState::DraggingLeadingHandle | InteractionState::DraggingTrailingHandle
        )
    }
}

/// The range used for preview and export: the selection when idle, the
/// whole asset while a gesture is active.
pub fn effective_output_range(state: InteractionState, model: &RangeModel) -> TimeRange {
    if state.is_idle() {
        model.selected_range()
    } else {
        model.full_range()
    }
}

impl TrimmerSnapshot {
    /// Same rule as [`TrimmerController::effective_output_range`], evaluated
    /// on the captured state.
    pub fn effective_output_range(&self) -> TimeRange {
        if self.state.is_idle() {
            self.selected_range
        } else {
            TimeRange::full(self.asset_duration)
        }
    }
}

/// Pointer position and model value recorded when a gesture began.
/// Moves are applied relative to this, not incrementally.
#[derive(Debug, Clone, Copy, Default)]
struct GestureAnchor {
    x: f32,
    value: MediaTime,
}

/// Gesture state machine driving a [`RangeModel`].
#[derive(Debug)]
pub struct TrimmerController {
    model: RangeModel,
    geometry: TrackGeometry,
    state: InteractionState,
    anchor: GestureAnchor,
    events: EventBus,
}

impl TrimmerController {
    pub fn new(config: TrimmerConfig) -> Result<Self> {
        config.validate()?;
        let mut model = RangeModel::new(config.minimum_duration(), config.maximum_duration());
        model.set_asset(config.initial_duration());
        Ok(Self {
            model,
            geometry: TrackGeometry::new(config.total_width, config.handle_width),
            state: InteractionState::Idle,
            anchor: GestureAnchor::default(),
            events: EventBus::new(),
        })
    }

    pub fn model(&self) -> &RangeModel {
        &self.model
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn snapshot(&self) -> TrimmerSnapshot {
        TrimmerSnapshot::capture(&self.model, self.state)
    }

    pub fn effective_output_range(&self) -> TimeRange {
        effective_output_range(self.state, &self.model)
    }

    pub fn subscribe<F>(&mut self, kind: TrimmerEventKind, listener: F) -> ListenerId
    where
        F: FnMut(&TrimmerEvent) + 'static,
    {
        self.events.subscribe(kind, listener)
    }

    pub fn subscribe_all<F>(&mut self, listener: F) -> Vec<ListenerId>
    where
        F: FnMut(&TrimmerEvent) + Clone + 'static,
    {
        self.events.subscribe_all(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Load a new asset. An active gesture is ended first so its end
    /// notification still fires.
    pub fn set_asset(&mut self, duration: MediaTime) {
        if !self.state.is_idle() {
            debug!(state = ?self.state, "asset replaced during gesture, ending it");
            self.end_gesture();
        }
        self.model.set_asset(duration);
    }

    /// Layout change. Non-finite or negative widths are ignored.
    pub fn set_total_width(&mut self, width: f32) {
        if !width.is_finite() || width < 0.0 {
            warn!(width, "ignoring invalid trimmer width");
            return;
        }
        self.geometry.total_width = width;
    }

    /// Mirror an external playback position into the model.
    ///
    /// Ignored while a handle is being dragged. Returns whether the stored
    /// progress moved. Does not emit [`TrimmerEventKind::ProgressChanged`].
    pub fn set_progress(&mut self, t: MediaTime) -> bool {
        if self.state.is_trimming() {
            trace!(state = ?self.state, "external progress ignored while trimming");
            return false;
        }
        let before = self.model.progress();
        self.model.set_progress(t) != before
    }

    /// Returns whether a gesture started.
    pub fn pointer_down(&mut self, x: f32) -> bool {
        if !self.state.is_idle() {
            warn!(state = ?self.state, x, "pointer down while a gesture is active");
            return false;
        }
        if self.model.is_empty() {
            return false;
        }
        let region = self.geometry.hit_test(
            x,
            self.model.selected_range(),
            self.model.asset_duration(),
        );
        let (state, value, kind) = match region {
            HitRegion::LeadingHandle => (
                InteractionState::DraggingLeadingHandle,
                self.model.selected_start(),
                TrimmerEventKind::DidBeginTrimming,
            ),
            HitRegion::TrailingHandle => (
                InteractionState::DraggingTrailingHandle,
                self.model.selected_end(),
                TrimmerEventKind::DidBeginTrimming,
            ),
            HitRegion::Scrub => (
                InteractionState::Scrubbing,
                self.model.progress(),
                TrimmerEventKind::DidBeginScrubbing,
            ),
            HitRegion::Outside => return false,
        };
        self.anchor = GestureAnchor { x, value };
        self.state = state;
        debug!(?state, x, anchor = %value, "gesture began");
        self.emit(kind);
        true
    }

    /// Returns whether the model changed.
    pub fn pointer_move(&mut self, x: f32) -> bool {
        let delta = self
            .geometry
            .pixels_to_time(x - self.anchor.x, self.model.asset_duration());
        let candidate = self.anchor.value.offset_by_secs(delta);

        let (changed, kind) = match self.state {
            InteractionState::Idle => return false,
            InteractionState::DraggingLeadingHandle => {
                let before = self.model.selected_start();
                (
                    self.model.set_selected_start(candidate) != before,
                    TrimmerEventKind::SelectedRangeChanged,
                )
            }
            InteractionState::DraggingTrailingHandle => {
                let before = self.model.selected_end();
                (
                    self.model.set_selected_end(candidate) != before,
                    TrimmerEventKind::SelectedRangeChanged,
                )
            }
            InteractionState::Scrubbing => {
                let before = self.model.progress();
                (
                    self.model.set_progress(candidate) != before,
                    TrimmerEventKind::ProgressChanged,
                )
            }
        };
        if changed {
            trace!(
                state = ?self.state,
                start = %self.model.selected_start(),
                end = %self.model.selected_end(),
                progress = %self.model.progress(),
                "gesture moved"
            );
            self.emit(kind);
        }
        changed
    }

    pub fn pointer_up(&mut self) {
        self.end_gesture();
    }

    /// System interruption. Same as [`Self::pointer_up`].
    pub fn pointer_cancel(&mut self) {
        self.end_gesture();
    }

    fn end_gesture(&mut self) {
        let kind = match self.state {
            InteractionState::Idle => return,
            InteractionState::DraggingLeadingHandle | InteractionState::DraggingTrailingHandle => {
                TrimmerEventKind::DidEndTrimming
            }
            InteractionState::Scrubbing => TrimmerEventKind::DidEndScrubbing,
        };
        debug!(state = ?self.state, "gesture ended");
        self.state = InteractionState::Idle;
        self.anchor = GestureAnchor::default();
        self.emit(kind);
    }

    fn emit(&mut self, kind: TrimmerEventKind) {
        let event = TrimmerEvent {
            kind,
            snapshot: self.snapshot(),
        };
        self.events.emit(event);
    }
}
