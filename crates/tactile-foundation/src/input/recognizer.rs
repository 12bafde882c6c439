//! Pure gesture classification.
//!
//! Every function here is total: input that does not satisfy a precondition
//! (wrong number of contacts, time running backwards) yields a neutral value
//! rather than a panic. Enforcing preconditions is the touch handler's job.

use super::types::{SwipeDirection, SwipeGesture, TouchPoint};
use crate::config::GestureConfig;
use tactile_geometry::Point;

/// Classifies a completed stroke as a swipe.
///
/// Both floors must be cleared: a short flick and a slow drag are each
/// rejected. Non-positive durations and non-finite positions never match.
pub fn classify_swipe(
    start: &TouchPoint,
    end: &TouchPoint,
    config: &GestureConfig,
) -> Option<SwipeGesture> {
    let duration_ms = start.duration_to(end);
    if duration_ms <= 0 {
        return None;
    }

    let delta = end.position - start.position;
    let distance = delta.length();
    let velocity = distance / duration_ms as f32;

    if !(distance.is_finite() && velocity.is_finite()) {
        return None;
    }
    if distance < config.swipe_min_distance || velocity < config.swipe_min_velocity {
        return None;
    }

    let direction = if delta.is_mostly_horizontal() {
        if delta.dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    } else if delta.dy > 0.0 {
        SwipeDirection::Down
    } else {
        SwipeDirection::Up
    };

    Some(SwipeGesture {
        direction,
        velocity,
        distance,
        duration_ms,
    })
}

/// A tap is short and stays within the movement tolerance.
///
/// Time running backwards never matches.
pub fn classify_tap(start: &TouchPoint, end: &TouchPoint, config: &GestureConfig) -> bool {
    let duration_ms = start.duration_to(end);
    (0..config.tap_max_duration_ms).contains(&duration_ms)
        && start.distance_to(end) < config.tap_max_distance
}

/// A long press is held long enough and stays within the tap tolerance.
pub fn classify_long_press(
    start: &TouchPoint,
    current: &TouchPoint,
    config: &GestureConfig,
) -> bool {
    start.duration_to(current) >= config.long_press_min_duration_ms
        && start.distance_to(current) < config.tap_max_distance
}

/// Ratio of the current finger distance to the starting finger distance.
///
/// Returns `1.0` unless both sets hold exactly two contacts, the starting
/// contacts are apart, and every position is finite.
pub fn compute_pinch_scale(start_pair: &[TouchPoint], current_pair: &[TouchPoint]) -> f32 {
    let (Some(start), Some(current)) = (pair_distance(start_pair), pair_distance(current_pair))
    else {
        return 1.0;
    };
    let scale = current / start;
    if start > 0.0 && scale.is_finite() {
        scale
    } else {
        1.0
    }
}

/// Midpoint of exactly two contacts, or the origin otherwise.
pub fn compute_pinch_center(points: &[TouchPoint]) -> Point {
    match points {
        [a, b] => {
            let mid = a.position.midpoint(b.position);
            if mid.x.is_finite() && mid.y.is_finite() {
                mid
            } else {
                Point::ZERO
            }
        }
        _ => Point::ZERO,
    }
}

fn pair_distance(points: &[TouchPoint]) -> Option<f32> {
    match points {
        [a, b] => Some(a.distance_to(b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GestureConfig {
        GestureConfig::default()
    }

    #[test]
    fn tap_within_time_and_distance() {
        let start = TouchPoint::new(0.0, 0.0, 0);
        let end = TouchPoint::new(5.0, 5.0, 150);
        assert!(classify_tap(&start, &end, &config()));
    }

    #[test]
    fn tap_rejected_when_too_long_or_too_far() {
        let start = TouchPoint::new(0.0, 0.0, 0);
        assert!(!classify_tap(&start, &TouchPoint::new(1.0, 1.0, 200), &config()));
        assert!(!classify_tap(&start, &TouchPoint::new(10.0, 0.0, 50), &config()));
    }

    #[test]
    fn swipe_up() {
        let start = TouchPoint::new(0.0, 0.0, 0);
        let end = TouchPoint::new(0.0, -100.0, 200);
        let swipe = classify_swipe(&start, &end, &config()).expect("swipe");
        assert_eq!(swipe.direction, SwipeDirection::Up);
        assert_eq!(swipe.distance, 100.0);
        assert_eq!(swipe.duration_ms, 200);
        assert_eq!(swipe.velocity, 0.5);
    }

    #[test]
    fn swipe_horizontal_directions() {
        let start = TouchPoint::new(100.0, 100.0, 0);
        let right = classify_swipe(&start, &TouchPoint::new(200.0, 120.0, 100), &config());
        let left = classify_swipe(&start, &TouchPoint::new(0.0, 80.0, 100), &config());
        assert_eq!(right.map(|s| s.direction), Some(SwipeDirection::Right));
        assert_eq!(left.map(|s| s.direction), Some(SwipeDirection::Left));
    }

    #[test]
    fn swipe_diagonal_tie_resolves_vertically() {
        let start = TouchPoint::new(0.0, 0.0, 0);
        let down = classify_swipe(&start, &TouchPoint::new(60.0, 60.0, 100), &config());
        let up = classify_swipe(&start, &TouchPoint::new(-60.0, -60.0, 100), &config());
        assert_eq!(down.map(|s| s.direction), Some(SwipeDirection::Down));
        assert_eq!(up.map(|s| s.direction), Some(SwipeDirection::Up));
    }

    #[test]
    fn swipe_rejected_on_low_velocity() {
        let start = TouchPoint::new(0.0, 0.0, 0);
        let end = TouchPoint::new(0.0, -100.0, 2000);
        assert_eq!(classify_swipe(&start, &end, &config()), None);
    }

    #[test]
    fn swipe_rejected_when_too_short() {
        let start = TouchPoint::new(0.0, 0.0, 0);
        let end = TouchPoint::new(40.0, 0.0, 10);
        assert_eq!(classify_swipe(&start, &end, &config()), None);
    }

    #[test]
    fn swipe_rejected_on_non_positive_duration() {
        let start = TouchPoint::new(0.0, 0.0, 100);
        assert_eq!(
            classify_swipe(&start, &TouchPoint::new(200.0, 0.0, 100), &config()),
            None
        );
        assert_eq!(
            classify_swipe(&start, &TouchPoint::new(200.0, 0.0, 50), &config()),
            None
        );
    }

    #[test]
    fn tap_rejected_when_time_runs_backwards() {
        let start = TouchPoint::new(0.0, 0.0, 100);
        let end = TouchPoint::new(1.0, 1.0, 40);
        assert!(!classify_tap(&start, &end, &config()));
        assert!(classify_tap(&start, &start, &config()));
    }

    #[test]
    fn swipe_rejected_on_non_finite_positions() {
        let start = TouchPoint::new(0.0, 0.0, 0);
        for end in [
            TouchPoint::new(f32::NAN, 0.0, 100),
            TouchPoint::new(f32::INFINITY, 0.0, 100),
            TouchPoint::new(0.0, f32::NEG_INFINITY, 100),
        ] {
            assert_eq!(classify_swipe(&start, &end, &config()), None, "end {end:?}");
        }
    }

    #[test]
    fn long_press_needs_duration_and_stillness() {
        let start = TouchPoint::new(0.0, 0.0, 0);
        assert!(classify_long_press(&start, &TouchPoint::new(0.0, 0.0, 500), &config()));
        assert!(!classify_long_press(&start, &TouchPoint::new(0.0, 0.0, 499), &config()));
        assert!(!classify_long_press(&start, &TouchPoint::new(15.0, 0.0, 800), &config()));
    }

    #[test]
    fn pinch_scale_ratio() {
        let start = [TouchPoint::new(0.0, 0.0, 0), TouchPoint::new(100.0, 0.0, 0)];
        let current = [TouchPoint::new(0.0, 0.0, 10), TouchPoint::new(150.0, 0.0, 10)];
        assert_eq!(compute_pinch_scale(&start, &current), 1.5);
    }

    #[test]
    fn pinch_scale_defaults_to_one() {
        let one = [TouchPoint::new(0.0, 0.0, 0)];
        let pair = [TouchPoint::new(0.0, 0.0, 0), TouchPoint::new(100.0, 0.0, 0)];
        let stacked = [TouchPoint::new(5.0, 5.0, 0), TouchPoint::new(5.0, 5.0, 0)];
        assert_eq!(compute_pinch_scale(&one, &pair), 1.0);
        assert_eq!(compute_pinch_scale(&pair, &one), 1.0);
        assert_eq!(compute_pinch_scale(&[], &[]), 1.0);
        assert_eq!(compute_pinch_scale(&stacked, &pair), 1.0);
    }

    #[test]
    fn pinch_math_ignores_non_finite_positions() {
        let start = [TouchPoint::new(0.0, 0.0, 0), TouchPoint::new(100.0, 0.0, 0)];
        let broken = [TouchPoint::new(0.0, 0.0, 10), TouchPoint::new(f32::NAN, 0.0, 10)];
        let far = [TouchPoint::new(0.0, 0.0, 10), TouchPoint::new(f32::INFINITY, 0.0, 10)];
        assert_eq!(compute_pinch_scale(&start, &broken), 1.0);
        assert_eq!(compute_pinch_scale(&broken, &start), 1.0);
        assert_eq!(compute_pinch_scale(&start, &far), 1.0);
        assert_eq!(compute_pinch_center(&broken), Point::ZERO);
    }

    #[test]
    fn pinch_center() {
        let pair = [TouchPoint::new(0.0, 0.0, 0), TouchPoint::new(100.0, 50.0, 0)];
        assert_eq!(compute_pinch_center(&pair), Point::new(50.0, 25.0));
        assert_eq!(compute_pinch_center(&pair[..1]), Point::ZERO);
    }
}
