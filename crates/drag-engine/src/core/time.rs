/// Turns the absolute timestamps reported by the environment's frame
/// callback (milliseconds) into per-frame deltas.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    /// Cap for a single delta, in milliseconds.
    max_delta_ms: f64,
}

impl FrameClock {
    /// A negative or NaN cap collapses to zero.
    pub fn new(max_delta_ms: f64) -> Self {
        Self {
            last: None,
            max_delta_ms: if max_delta_ms >= 0.0 { max_delta_ms } else { 0.0 },
        }
    }

    /// Milliseconds since the previous call. The first frame reports zero
    /// and a clock that runs backwards reports zero. Long gaps are capped.
    /// A non-finite timestamp reports zero and is not remembered.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let delta = match self.last {
            Some(last) => (now_ms - last).max(0.0).min(self.max_delta_ms),
            None => 0.0,
        };
        self.last = Some(now_ms);
        delta
    }

    /// Forget the previous timestamp, e.g. after the loop was stopped.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Frame-callback milliseconds to behavior seconds.
pub fn ms_to_seconds(ms: f64) -> f32 {
    (ms / 1000.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut clock = FrameClock::new(250.0);
        assert_eq!(clock.advance(1234.0), 0.0);
        assert_eq!(clock.advance(1250.5), 16.5);
    }

    #[test]
    fn delta_is_capped() {
        let mut clock = FrameClock::new(250.0);
        clock.advance(0.0);
        assert_eq!(clock.advance(10_000.0), 250.0);
    }

    #[test]
    fn backwards_clock_yields_zero() {
        let mut clock = FrameClock::new(250.0);
        clock.advance(100.0);
        assert_eq!(clock.advance(50.0), 0.0);
    }

    #[test]
    fn non_finite_timestamp_is_ignored() {
        let mut clock = FrameClock::new(250.0);
        clock.advance(0.0);
        assert_eq!(clock.advance(f64::NAN), 0.0);
        assert_eq!(clock.advance(f64::INFINITY), 0.0);
        assert_eq!(clock.advance(100.0), 100.0);
    }

    #[test]
    fn bad_cap_never_panics() {
        let mut clock = FrameClock::new(-1.0);
        clock.advance(0.0);
        assert_eq!(clock.advance(16.0), 0.0);

        let mut clock = FrameClock::new(f64::NAN);
        clock.advance(0.0);
        assert_eq!(clock.advance(16.0), 0.0);
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut clock = FrameClock::new(250.0);
        clock.advance(100.0);
        clock.reset();
        assert_eq!(clock.advance(200.0), 0.0);
    }

    #[test]
    fn milliseconds_convert_to_seconds() {
        assert_eq!(ms_to_seconds(500.0), 0.5);
        assert_eq!(ms_to_seconds(0.0), 0.0);
    }
}
