//! Callback delivery and haptic pulses through `GestureDispatcher`.

use std::cell::RefCell;
use std::rc::Rc;
use tactile_foundation::{
    GestureCallbacks, GestureConfig, GestureDispatcher, HapticFeedback, Point, SwipeDirection,
    TouchPoint,
};
use tactile_testing::{RecordingHaptics, UnavailableHaptics};

#[derive(Debug, PartialEq)]
enum Seen {
    Tap(Point),
    LongPress(Point),
    Swipe(SwipeDirection),
    Pinch(f32),
}

fn recording_callbacks(log: &Rc<RefCell<Vec<Seen>>>) -> GestureCallbacks {
    GestureCallbacks::new()
        .on_tap({
            let log = log.clone();
            move |point| log.borrow_mut().push(Seen::Tap(point))
        })
        .on_long_press({
            let log = log.clone();
            move |point| log.borrow_mut().push(Seen::LongPress(point))
        })
        .on_swipe({
            let log = log.clone();
            move |swipe| log.borrow_mut().push(Seen::Swipe(swipe.direction))
        })
        .on_pinch({
            let log = log.clone();
            move |pinch| log.borrow_mut().push(Seen::Pinch(pinch.scale))
        })
}

#[test]
fn callbacks_fire_in_sample_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = GestureDispatcher::new(GestureConfig::default(), recording_callbacks(&log));

    let timer = dispatcher
        .on_start(&[TouchPoint::new(10.0, 10.0, 0)])
        .expect("long press armed");
    dispatcher.on_long_press_timer(timer, 500);
    dispatcher.on_end(&[TouchPoint::new(10.0, 10.0, 700)]);

    dispatcher.on_start(&[TouchPoint::new(0.0, 0.0, 1000)]);
    dispatcher.on_end(&[TouchPoint::new(200.0, 0.0, 1100)]);

    dispatcher.on_start(&[
        TouchPoint::new(0.0, 0.0, 2000),
        TouchPoint::new(100.0, 0.0, 2000),
    ]);
    dispatcher.on_move(&[
        TouchPoint::new(0.0, 0.0, 2016),
        TouchPoint::new(50.0, 0.0, 2016),
    ]);
    dispatcher.on_end(&[]);

    dispatcher.on_start(&[TouchPoint::new(3.0, 4.0, 3000)]);
    dispatcher.on_end(&[TouchPoint::new(3.0, 4.0, 3050)]);

    assert_eq!(
        *log.borrow(),
        vec![
            Seen::LongPress(Point::new(10.0, 10.0)),
            Seen::Swipe(SwipeDirection::Right),
            Seen::Pinch(0.5),
            Seen::Tap(Point::new(3.0, 4.0)),
        ]
    );
}

#[test]
fn haptics_follow_dispatched_gestures() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let haptics = RecordingHaptics::new();
    let mut dispatcher = GestureDispatcher::new(GestureConfig::default(), recording_callbacks(&log))
        .with_haptics(HapticFeedback::new(haptics.clone()));

    dispatcher.on_start(&[TouchPoint::new(0.0, 0.0, 0)]);
    dispatcher.poll(500);
    dispatcher.on_end(&[TouchPoint::new(0.0, 0.0, 600)]);

    dispatcher.on_start(&[TouchPoint::new(0.0, 0.0, 1000)]);
    dispatcher.on_end(&[TouchPoint::new(1.0, 1.0, 1050)]);

    dispatcher.on_start(&[
        TouchPoint::new(0.0, 0.0, 2000),
        TouchPoint::new(100.0, 0.0, 2000),
    ]);
    dispatcher.on_move(&[
        TouchPoint::new(0.0, 0.0, 2016),
        TouchPoint::new(120.0, 0.0, 2016),
    ]);
    dispatcher.cleanup();

    // Medium for the long press, light for the tap, nothing for the pinch.
    assert_eq!(haptics.played(), vec![vec![20], vec![10]]);
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn gestures_without_callbacks_stay_silent() {
    let haptics = RecordingHaptics::new();
    let mut dispatcher = GestureDispatcher::new(GestureConfig::default(), GestureCallbacks::new())
        .with_haptics(HapticFeedback::new(haptics.clone()));

    dispatcher.on_start(&[TouchPoint::new(0.0, 0.0, 0)]);
    dispatcher.on_end(&[TouchPoint::new(0.0, 0.0, 50)]);

    assert!(haptics.played().is_empty());
}

#[test]
fn unavailable_haptics_do_not_disturb_dispatch() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = GestureDispatcher::new(GestureConfig::default(), recording_callbacks(&log))
        .with_haptics(HapticFeedback::new(UnavailableHaptics));

    dispatcher.on_start(&[TouchPoint::new(0.0, 0.0, 0)]);
    dispatcher.on_end(&[TouchPoint::new(0.0, 0.0, 50)]);

    assert_eq!(*log.borrow(), vec![Seen::Tap(Point::ZERO)]);
}
