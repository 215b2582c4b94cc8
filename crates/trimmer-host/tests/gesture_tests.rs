use proptest::prelude::*;
use trimmer_core::controller::InteractionState;
use trimmer_core::events::TrimmerEventKind::*;
use trimmer_core::time::{MediaTime, TimeRange};
use trimmer_test_harness::assertions::{assert_event_kinds, assert_range_invariants, assert_time_approx};
use trimmer_test_harness::builders::ControllerBuilder;
use trimmer_test_harness::recorder::EventRecorder;

#[test]
fn test_tap_leading_handle_emits_begin_and_end_only() {
    let mut trimmer = ControllerBuilder::new().build();
    let recorder = EventRecorder::attach(&mut trimmer);

    trimmer.pointer_down(4.0);
    trimmer.pointer_up();

    assert_event_kinds(&recorder, &[DidBeginTrimming, DidEndTrimming]);
    assert_eq!(recorder.count(SelectedRangeChanged), 0);
}

#[test]
fn test_trailing_drag_effective_range() {
    let mut trimmer = ControllerBuilder::new().duration_secs(60.0).build();
    let recorder = EventRecorder::attach(&mut trimmer);

    trimmer.pointer_down(224.0);
    assert_eq!(trimmer.effective_output_range(), TimeRange::full(MediaTime::from_secs_f64(60.0)));
    trimmer.pointer_move(174.0);
    trimmer.pointer_up();

    // 50px of a 200px track over 60s is 15s.
    assert_time_approx(trimmer.model().selected_end(), 45.0, 1e-6);
    assert_eq!(trimmer.effective_output_range(), trimmer.model().selected_range());
    let end = recorder.last().unwrap();
    assert_eq!(end.kind, DidEndTrimming);
    assert_eq!(end.snapshot.selected_range, trimmer.model().selected_range());
}

#[test]
fn test_maximum_duration_limits_drag() {
    let mut trimmer = ControllerBuilder::new()
        .duration_secs(10.0)
        .minimum_secs(1.0)
        .maximum_secs(4.0)
        .build();
    assert_time_approx(trimmer.model().selected_end(), 4.0, 1e-9);

    // Trailing handle sits at x = 16 + 80 = 96.
    trimmer.pointer_down(100.0);
    assert_eq!(trimmer.state(), InteractionState::DraggingTrailingHandle);
    trimmer.pointer_move(300.0);
    trimmer.pointer_up();
    assert_time_approx(trimmer.model().selected_end(), 4.0, 1e-9);
    assert_range_invariants(trimmer.model());
}

#[test]
fn test_minimum_longer_than_asset() {
    let mut trimmer = ControllerBuilder::new()
        .duration_secs(2.0)
        .minimum_secs(5.0)
        .build();
    trimmer.pointer_down(4.0);
    trimmer.pointer_move(150.0);
    trimmer.pointer_up();
    assert_eq!(
        trimmer.model().selected_range(),
        TimeRange::full(MediaTime::from_secs_f64(2.0))
    );
}

#[derive(Debug, Clone)]
enum Gesture {
    Down(f32),
    Move(f32),
    Up,
    Cancel,
    Tick(f64),
}

fn gesture_strategy() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (-20.0f32..260.0).prop_map(Gesture::Down),
        (-400.0f32..600.0).prop_map(Gesture::Move),
        Just(Gesture::Up),
        Just(Gesture::Cancel),
        (0.0f64..15.0).prop_map(Gesture::Tick),
    ]
}

proptest! {
    #[test]
    fn random_gestures_keep_invariants_and_pair_notifications(
        duration in 0.5f64..120.0,
        minimum in 0.0f64..5.0,
        gestures in proptest::collection::vec(gesture_strategy(), 0..60),
    ) {
        let mut trimmer = ControllerBuilder::new()
            .duration_secs(duration)
            .minimum_secs(minimum)
            .build();
        let recorder = EventRecorder::attach(&mut trimmer);

        for gesture in gestures {
            match gesture {
                Gesture::Down(x) => { trimmer.pointer_down(x); }
                Gesture::Move(x) => { trimmer.pointer_move(x); }
                Gesture::Up => trimmer.pointer_up(),
                Gesture::Cancel => trimmer.pointer_cancel(),
                Gesture::Tick(t) => { trimmer.set_progress(MediaTime::from_secs_f64(t)); }
            }
            assert_range_invariants(trimmer.model());
            if !trimmer.state().is_idle() {
                prop_assert_eq!(
                    trimmer.effective_output_range(),
                    trimmer.model().full_range()
                );
            }
        }
        trimmer.pointer_cancel();
        prop_assert!(trimmer.state().is_idle());
        prop_assert_eq!(trimmer.effective_output_range(), trimmer.model().selected_range());

        // Every begin is matched by exactly one end of the same family.
        prop_assert_eq!(recorder.count(DidBeginTrimming), recorder.count(DidEndTrimming));
        prop_assert_eq!(recorder.count(DidBeginScrubbing), recorder.count(DidEndScrubbing));

        // Changes only ever appear inside their matching gesture.
        let mut open = None;
        for kind in recorder.kinds() {
            match kind {
                DidBeginTrimming | DidBeginScrubbing => {
                    prop_assert!(open.is_none());
                    open = Some(kind);
                }
                SelectedRangeChanged => prop_assert_eq!(open, Some(DidBeginTrimming)),
                ProgressChanged => prop_assert_eq!(open, Some(DidBeginScrubbing)),
                DidEndTrimming => {
                    prop_assert_eq!(open, Some(DidBeginTrimming));
                    open = None;
                }
                DidEndScrubbing => {
                    prop_assert_eq!(open, Some(DidBeginScrubbing));
                    open = None;
                }
            }
        }
        prop_assert!(open.is_none());
    }
}
