//! Haptic feedback side channel.
//!
//! Feedback is fire-and-forget: hosts without vibration hardware plug in
//! [`NoopHaptics`], and a port that fails is logged and otherwise ignored.

/// Pulse lengths in milliseconds.
pub const LIGHT_PULSE: &[u32] = &[10];
pub const MEDIUM_PULSE: &[u32] = &[20];
pub const HEAVY_PULSE: &[u32] = &[30];
/// Vibrate, pause, vibrate.
pub const SUCCESS_PATTERN: &[u32] = &[10, 50, 10];
pub const ERROR_PATTERN: &[u32] = &[50, 100, 50];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticIntensity {
    Light,
    Medium,
    Heavy,
}

impl HapticIntensity {
    pub fn pattern(self) -> &'static [u32] {
        match self {
            HapticIntensity::Light => LIGHT_PULSE,
            HapticIntensity::Medium => MEDIUM_PULSE,
            HapticIntensity::Heavy => HEAVY_PULSE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HapticError {
    /// The host has no haptic hardware or API.
    Unavailable,
    /// The platform refused the pattern.
    Rejected { reason: String },
}

impl std::fmt::Display for HapticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HapticError::Unavailable => write!(f, "haptic feedback unavailable"),
            HapticError::Rejected { reason } => write!(f, "haptic pattern rejected: {reason}"),
        }
    }
}

impl std::error::Error for HapticError {}

/// Platform capability for playing a vibration pattern.
///
/// `pattern` alternates vibrate and pause durations in milliseconds, starting
/// with a vibration.
pub trait HapticPort {
    fn vibrate(&self, pattern: &[u32]) -> Result<(), HapticError>;
}

/// Port for hosts without haptic output.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHaptics;

impl HapticPort for NoopHaptics {
    fn vibrate(&self, _pattern: &[u32]) -> Result<(), HapticError> {
        Ok(())
    }
}

impl<P: HapticPort + ?Sized> HapticPort for Box<P> {
    fn vibrate(&self, pattern: &[u32]) -> Result<(), HapticError> {
        (**self).vibrate(pattern)
    }
}

impl<P: HapticPort + ?Sized> HapticPort for std::rc::Rc<P> {
    fn vibrate(&self, pattern: &[u32]) -> Result<(), HapticError> {
        (**self).vibrate(pattern)
    }
}

/// Named feedback pulses over a [`HapticPort`].
#[derive(Clone, Debug, Default)]
pub struct HapticFeedback<P: HapticPort = NoopHaptics> {
    port: P,
}

impl<P: HapticPort> HapticFeedback<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn impact(&self, intensity: HapticIntensity) {
        self.play(intensity.pattern());
    }

    pub fn light(&self) {
        self.impact(HapticIntensity::Light);
    }

    pub fn medium(&self) {
        self.impact(HapticIntensity::Medium);
    }

    pub fn heavy(&self) {
        self.impact(HapticIntensity::Heavy);
    }

    pub fn success(&self) {
        self.play(SUCCESS_PATTERN);
    }

    pub fn error(&self) {
        self.play(ERROR_PATTERN);
    }

    fn play(&self, pattern: &[u32]) {
        if let Err(err) = self.port.vibrate(pattern) {
            log::debug!("{err}; feedback skipped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        played: RefCell<Vec<Vec<u32>>>,
    }

    impl HapticPort for Recorder {
        fn vibrate(&self, pattern: &[u32]) -> Result<(), HapticError> {
            self.played.borrow_mut().push(pattern.to_vec());
            Ok(())
        }
    }

    struct Broken;

    impl HapticPort for Broken {
        fn vibrate(&self, _pattern: &[u32]) -> Result<(), HapticError> {
            Err(HapticError::Unavailable)
        }
    }

    #[test]
    fn named_pulses() {
        let feedback = HapticFeedback::new(Recorder::default());
        feedback.light();
        feedback.medium();
        feedback.heavy();
        feedback.success();
        feedback.error();
        assert_eq!(
            *feedback.port().played.borrow(),
            vec![
                vec![10],
                vec![20],
                vec![30],
                vec![10, 50, 10],
                vec![50, 100, 50]
            ]
        );
    }

    #[test]
    fn unavailable_port_is_silent() {
        let feedback = HapticFeedback::new(Broken);
        feedback.heavy();
        feedback.error();
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            HapticError::Unavailable.to_string(),
            "haptic feedback unavailable"
        );
        let rejected = HapticError::Rejected {
            reason: "busy".into(),
        };
        assert_eq!(rejected.to_string(), "haptic pattern rejected: busy");
    }
}
