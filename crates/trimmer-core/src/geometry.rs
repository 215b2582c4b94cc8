use serde::{Deserialize, Serialize};

use crate::time::{MediaTime, TimeRange};

/// Width of each edge handle, matching the handle chevron chrome.
pub const DEFAULT_HANDLE_WIDTH: f32 = 16.0;

/// Which part of the control a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    LeadingHandle,
    TrailingHandle,
    Scrub,
    Outside,
}

/// Horizontal layout of the trimmer in a 1-D coordinate space.
///
/// The control is `total_width` wide. The two handles are `handle_width`
/// each and sit outside the selected span, so the track that maps onto the
/// asset timeline is `total_width - 2 * handle_width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub total_width: f32,
    pub handle_width: f32,
}

impl TrackGeometry {
    pub fn new(total_width: f32, handle_width: f32) -> Self {
        Self {
            total_width,
            handle_width,
        }
    }

    pub fn track_width(&self) -> f32 {
        (self.total_width - 2.0 * self.handle_width).max(0.0)
    }

    /// Convert a horizontal pointer delta to a signed time delta in seconds.
    pub fn pixels_to_time(&self, dx: f32, asset_duration: MediaTime) -> f64 {
        let track = self.track_width();
        if track <= 0.0 {
            return 0.0;
        }
        dx as f64 * asset_duration.as_secs_f64() / track as f64
    }

    pub fn time_to_x(&self, t: MediaTime, asset_duration: MediaTime) -> f32 {
        let duration = asset_duration.as_secs_f64();
        if duration <= 0.0 {
            return self.handle_width;
        }
        self.handle_width + (t.as_secs_f64() / duration) as f32 * self.track_width()
    }

    pub fn hit_test(&self, x: f32, range: TimeRange, asset_duration: MediaTime) -> HitRegion {
        if !(0.0..=self.total_width).contains(&x) {
            return HitRegion::Outside;
        }
        let start_x = self.time_to_x(range.start, asset_duration);
        let end_x = self.time_to_x(range.end, asset_duration);

        // The trailing handle's right edge is inclusive at the control edge.
        let trailing_end = end_x + self.handle_width;
        if x >= end_x && (x < trailing_end || x >= self.total_width) {
            return HitRegion::TrailingHandle;
        }
        if x >= start_x - self.handle_width && x < start_x {
            return HitRegion::LeadingHandle;
        }
        HitRegion::Scrub
    }
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_HANDLE_WIDTH)
    }
}
