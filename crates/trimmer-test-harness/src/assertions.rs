use trimmer_core::events::TrimmerEventKind;
use trimmer_core::range::RangeModel;
use trimmer_core::time::MediaTime;

use crate::recorder::EventRecorder;

/// Assert every range model invariant.
pub fn assert_range_invariants(model: &RangeModel) {
    let start = model.selected_start();
    let end = model.selected_end();
    assert!(start <= end, "start {start} is after end {end}");
    assert!(
        end <= model.asset_duration(),
        "end {end} is past the asset duration {}",
        model.asset_duration()
    );
    assert!(
        model.progress() >= start && model.progress() <= end,
        "progress {} outside selection {start}..{end}",
        model.progress()
    );
    let min = model.minimum_duration().min(model.asset_duration());
    assert!(
        model.selected_duration() >= min,
        "selected duration {} shorter than minimum {min}",
        model.selected_duration()
    );
    if let Some(max) = model.maximum_duration() {
        assert!(
            model.selected_duration() <= max,
            "selected duration {} longer than maximum {max}",
            model.selected_duration()
        );
    }
}

/// Assert a time is approximately the expected number of seconds.
pub fn assert_time_approx(actual: MediaTime, expected_secs: f64, tolerance_secs: f64) {
    let actual_secs = actual.as_secs_f64();
    assert!(
        (actual_secs - expected_secs).abs() < tolerance_secs,
        "time {actual_secs:.3}s != expected {expected_secs:.3}s (tolerance {tolerance_secs:.3}s)"
    );
}

/// Assert the recorder saw exactly these notification kinds, in order.
pub fn assert_event_kinds(recorder: &EventRecorder, expected: &[TrimmerEventKind]) {
    let actual = recorder.kinds();
    assert_eq!(
        actual, expected,
        "notification sequence {actual:?}, expected {expected:?}"
    );
}
