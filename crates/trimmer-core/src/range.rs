use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::time::{MediaTime, TimeRange};

/// The selected sub-range of an asset plus the playback progress inside it.
///
/// Every setter clamps instead of rejecting, so any candidate value yields a
/// state where `0 <= start <= progress <= end <= asset_duration` and the
/// selected duration respects the minimum/maximum limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeModel {
    asset_duration: MediaTime,
    selected_start: MediaTime,
    selected_end: MediaTime,
    minimum_duration: MediaTime,
    maximum_duration: Option<MediaTime>,
    progress: MediaTime,
}

impl RangeModel {
    /// An empty model. Limits are assumed to be validated by the caller
    /// (see [`crate::config::TrimmerConfig::validate`]).
    pub fn new(minimum_duration: MediaTime, maximum_duration: Option<MediaTime>) -> Self {
        Self {
            asset_duration: MediaTime::ZERO,
            selected_start: MediaTime::ZERO,
            selected_end: MediaTime::ZERO,
            minimum_duration,
            maximum_duration,
            progress: MediaTime::ZERO,
        }
    }

    /// Reset to a new asset: full range selected, progress at the start.
    ///
    /// With a maximum shorter than the asset, the selection is the first
    /// `maximum` of the asset.
    pub fn set_asset(&mut self, duration: MediaTime) {
        self.asset_duration = duration;
        self.selected_start = MediaTime::ZERO;
        self.selected_end = self.effective_maximum();
        self.progress = self.selected_start;
        debug!(
            duration = %duration,
            end = %self.selected_end,
            "range model reset for new asset"
        );
    }

    /// Returns the accepted start.
    pub fn set_selected_start(&mut self, candidate: MediaTime) -> MediaTime {
        let lo = self.selected_end.saturating_sub(self.effective_maximum());
        let hi = self.selected_end.saturating_sub(self.effective_minimum());
        let accepted = candidate.clamp(lo, hi);
        if accepted != self.selected_start {
            self.selected_start = accepted;
            self.clamp_progress();
        }
        self.selected_start
    }

    /// Returns the accepted end.
    pub fn set_selected_end(&mut self, candidate: MediaTime) -> MediaTime {
        let lo = self.selected_start + self.effective_minimum();
        let hi = (self.selected_start + self.effective_maximum()).min(self.asset_duration);
        let accepted = candidate.clamp(lo, hi);
        if accepted != self.selected_end {
            self.selected_end = accepted;
            self.clamp_progress();
        }
        self.selected_end
    }

    /// Returns the accepted progress.
    pub fn set_progress(&mut self, candidate: MediaTime) -> MediaTime {
        self.progress = candidate.clamp(self.selected_start, self.selected_end);
        self.progress
    }

    pub fn asset_duration(&self) -> MediaTime {
        self.asset_duration
    }

    pub fn selected_start(&self) -> MediaTime {
        self.selected_start
    }

    pub fn selected_end(&self) -> MediaTime {
        self.selected_end
    }

    pub fn minimum_duration(&self) -> MediaTime {
        self.minimum_duration
    }

    pub fn maximum_duration(&self) -> Option<MediaTime> {
        self.maximum_duration
    }

    pub fn progress(&self) -> MediaTime {
        self.progress
    }

    pub fn selected_range(&self) -> TimeRange {
        TimeRange {
            start: self.selected_start,
            end: self.selected_end,
        }
    }

    pub fn selected_duration(&self) -> MediaTime {
        self.selected_end.saturating_sub(self.selected_start)
    }

    pub fn full_range(&self) -> TimeRange {
        TimeRange::full(self.asset_duration)
    }

    pub fn is_empty(&self) -> bool {
        self.asset_duration.is_zero()
    }

    // A minimum longer than the asset cannot be met; cap it so start <= end holds.
    fn effective_minimum(&self) -> MediaTime {
        self.minimum_duration.min(self.asset_duration)
    }

    fn effective_maximum(&self) -> MediaTime {
        self.maximum_duration
            .map_or(self.asset_duration, |max| max.min(self.asset_duration))
    }

    fn clamp_progress(&mut self) {
        self.progress = self.progress.clamp(self.selected_start, self.selected_end);
    }
}

impl Default for RangeModel {
    fn default() -> Self {
        Self::new(MediaTime::ZERO, None)
    }
}
