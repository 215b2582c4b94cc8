use trimmer_core::config::TrimmerConfig;
use trimmer_core::controller::TrimmerController;
use trimmer_core::geometry::DEFAULT_HANDLE_WIDTH;

/// Builder for test controllers with sensible defaults:
/// a 10s asset, 1s minimum, 232px wide (200px track, 0.05s per px).
pub struct ControllerBuilder {
    duration_secs: f64,
    minimum_secs: f64,
    maximum_secs: Option<f64>,
    total_width: f32,
    handle_width: f32,
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Self {
            duration_secs: 10.0,
            minimum_secs: 1.0,
            maximum_secs: None,
            total_width: 232.0,
            handle_width: DEFAULT_HANDLE_WIDTH,
        }
    }

    pub fn duration_secs(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn minimum_secs(mut self, secs: f64) -> Self {
        self.minimum_secs = secs;
        self
    }

    pub fn maximum_secs(mut self, secs: f64) -> Self {
        self.maximum_secs = Some(secs);
        self
    }

    pub fn width(mut self, total: f32) -> Self {
        self.total_width = total;
        self
    }

    pub fn handle_width(mut self, width: f32) -> Self {
        self.handle_width = width;
        self
    }

    pub fn config(&self) -> TrimmerConfig {
        let mut config = TrimmerConfig::new()
            .with_initial_duration(self.duration_secs)
            .with_minimum_duration(self.minimum_secs)
            .with_total_width(self.total_width)
            .with_handle_width(self.handle_width);
        if let Some(max) = self.maximum_secs {
            config = config.with_maximum_duration(max);
        }
        config
    }

    pub fn build(self) -> TrimmerController {
        TrimmerController::new(self.config()).expect("invalid controller config in test builder")
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
