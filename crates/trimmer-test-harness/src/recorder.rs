use std::cell::RefCell;
use std::rc::Rc;

use trimmer_core::controller::TrimmerController;
use trimmer_core::events::{TrimmerEvent, TrimmerEventKind};

/// Records every notification a controller emits, in order.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<TrimmerEvent>>>,
}

impl EventRecorder {
    /// Subscribe a new recorder to all six notification kinds.
    pub fn attach(trimmer: &mut TrimmerController) -> Self {
        let recorder = Self::default();
        let sink = recorder.events.clone();
        trimmer.subscribe_all(move |event| sink.borrow_mut().push(*event));
        recorder
    }

    pub fn kinds(&self) -> Vec<TrimmerEventKind> {
        self.events.borrow().iter().map(|e| e.kind).collect()
    }

    pub fn events(&self) -> Vec<TrimmerEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, kind: TrimmerEventKind) -> usize {
        self.events.borrow().iter().filter(|e| e.kind == kind).count()
    }

    pub fn last(&self) -> Option<TrimmerEvent> {
        self.events.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
