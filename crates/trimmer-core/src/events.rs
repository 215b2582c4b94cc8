use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::controller::InteractionState;
use crate::range::RangeModel;
use crate::time::{MediaTime, TimeRange};

/// The six notifications a trimmer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrimmerEventKind {
    DidBeginTrimming,
    SelectedRangeChanged,
    DidEndTrimming,
    DidBeginScrubbing,
    ProgressChanged,
    DidEndScrubbing,
}

impl TrimmerEventKind {
    pub const ALL: [TrimmerEventKind; 6] = [
        TrimmerEventKind::DidBeginTrimming,
        TrimmerEventKind::SelectedRangeChanged,
        TrimmerEventKind::DidEndTrimming,
        TrimmerEventKind::DidBeginScrubbing,
        TrimmerEventKind::ProgressChanged,
        TrimmerEventKind::DidEndScrubbing,
    ];
}

/// Model state captured when a notification fires, so listeners
/// don't need to query the controller back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimmerSnapshot {
    pub asset_duration: MediaTime,
    pub selected_range: TimeRange,
    pub progress: MediaTime,
    pub state: InteractionState,
}

impl TrimmerSnapshot {
    pub fn capture(model: &RangeModel, state: InteractionState) -> Self {
        Self {
            asset_duration: model.asset_duration(),
            selected_range: model.selected_range(),
            progress: model.progress(),
            state,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmerEvent {
    pub kind: TrimmerEventKind,
    pub snapshot: TrimmerSnapshot,
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

pub type Listener = Box<dyn FnMut(&TrimmerEvent)>;

/// Observer lists keyed by event kind.
///
/// Listeners run synchronously, in registration order, on the thread that
/// triggered the event.
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<TrimmerEventKind, Vec<(ListenerId, Listener)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, kind: TrimmerEventKind, listener: F) -> ListenerId
    where
        F: FnMut(&TrimmerEvent) + 'static,
    {
        let id = ListenerId(Uuid::new_v4());
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Register one shared listener for every kind.
    pub fn subscribe_all<F>(&mut self, listener: F) -> Vec<ListenerId>
    where
        F: FnMut(&TrimmerEvent) + Clone + 'static,
    {
        TrimmerEventKind::ALL
            .iter()
            .map(|kind| self.subscribe(*kind, listener.clone()))
            .collect()
    }

    /// Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        for list in self.listeners.values_mut() {
            if let Some(idx) = list.iter().position(|(lid, _)| *lid == id) {
                list.remove(idx);
                return true;
            }
        }
        false
    }

    pub fn emit(&mut self, event: TrimmerEvent) {
        if let Some(list) = self.listeners.get_mut(&event.kind) {
            for (_, listener) in list.iter_mut() {
                listener(&event);
            }
        }
    }

    pub fn listener_count(&self, kind: TrimmerEventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self
            .listeners
            .iter()
            .map(|(kind, list)| (*kind, list.len()))
            .collect();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}
