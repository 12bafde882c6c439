//! Velocity estimation for continuous gestures.
//!
//! Uses the impulse strategy: each pair of consecutive samples contributes
//! kinetic energy, and the accumulated energy is converted back to a speed.
//! The handler feeds it pinch scale samples so `PinchGesture::velocity`
//! reflects how fast the fingers are spreading right now rather than an
//! average over the whole session.

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within the last 100ms contribute.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the contact had stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    value: f32,
}

/// 1D velocity tracker over absolute values (positions, scale factors).
///
/// # Usage
/// ```
/// use tactile_foundation::VelocityTracker1D;
///
/// let mut tracker = VelocityTracker1D::new();
/// tracker.add_data_point(0, 1.0);
/// tracker.add_data_point(10, 1.1);
/// let per_second = tracker.calculate_velocity();
/// assert!(per_second > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    /// Slot holding the newest sample.
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, value: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, value });
    }

    /// Velocity in units per second.
    ///
    /// Returns 0.0 with fewer than two recent samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        // Filled newest first, then reversed so the impulse sum runs forward.
        let mut window = [Sample::default(); HISTORY_SIZE];
        let mut count = 0;
        let mut index = self.newest;
        let mut later = newest;
        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = later.time_ms.saturating_sub(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS || age < 0 {
                break;
            }
            window[count] = sample;
            count += 1;
            later = sample;
            if count == HISTORY_SIZE {
                break;
            }
            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }
        let window = &mut window[..count];
        window.reverse();

        impulse_velocity(window) * 1000.0
    }

    /// Velocity in units per second, clamped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.calculate_velocity();
        if velocity.is_nan() {
            return 0.0;
        }

        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// Units per millisecond over samples ordered oldest first.
fn impulse_velocity(samples: &[Sample]) -> f32 {
    if samples.len() < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    for (i, pair) in samples.windows(2).enumerate() {
        let dt = pair[1].time_ms.saturating_sub(pair[0].time_ms) as f32;
        if dt == 0.0 {
            continue;
        }
        let v_curr = (pair[1].value - pair[0].value) / dt;
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == 0 {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * v^2 with unit mass.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
