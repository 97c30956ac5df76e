/// Rolling window for a pair of activations to count as one gesture.
const WINDOW_MS: f64 = 1200.0;

/// Double-activation detector behind the hidden diagnostics panel.
///
/// Two activations within a rolling 1200 ms window consume each other and
/// fire; a stale first tap is forgotten before the new one is counted.
#[derive(Debug, Clone, Copy)]
pub struct TapDetector {
    count: u32,
    last_tap_ms: f64,
}

impl TapDetector {
    pub fn new() -> Self {
        TapDetector {
            count: 0,
            last_tap_ms: f64::NEG_INFINITY,
        }
    }

    /// Records one activation at `now_ms`. Returns true when the pair
    /// completed and the caller should toggle.
    pub fn register(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_tap_ms > WINDOW_MS {
            self.count = 0;
        }
        self.last_tap_ms = now_ms;
        self.count += 1;
        if self.count >= 2 {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

impl Default for TapDetector {
    fn default() -> Self {
        TapDetector::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_pair_fires_once() {
        let mut taps = TapDetector::new();
        assert!(!taps.register(1000.0));
        assert!(taps.register(1800.0));
    }

    #[test]
    fn slow_pair_does_not_fire() {
        let mut taps = TapDetector::new();
        assert!(!taps.register(1000.0));
        assert!(!taps.register(2300.0));
    }

    #[test]
    fn third_quick_tap_starts_a_fresh_window() {
        let mut taps = TapDetector::new();
        assert!(!taps.register(0.0));
        assert!(taps.register(500.0));
        // pair consumed; this one stands alone
        assert!(!taps.register(1000.0));
    }

    #[test]
    fn detector_is_reusable_after_firing() {
        let mut taps = TapDetector::new();
        assert!(!taps.register(0.0));
        assert!(taps.register(100.0));
        assert!(!taps.register(5000.0));
        assert!(taps.register(5100.0));
    }

    #[test]
    fn first_ever_tap_never_fires() {
        assert!(!TapDetector::new().register(0.0));
    }

    #[test]
    fn boundary_gap_still_counts_as_a_pair() {
        let mut taps = TapDetector::new();
        assert!(!taps.register(0.0));
        // window is "strictly more than 1200 ms resets"
        assert!(taps.register(1200.0));
    }
}
