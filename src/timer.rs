/// Elapsed-time display state. Times are wall-clock milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    origin_ms: f64,
}

impl Timer {
    pub fn new(now_ms: f64) -> Self {
        Self { origin_ms: now_ms }
    }

    pub fn reset(&mut self, now_ms: f64) {
        self.origin_ms = now_ms;
    }

    pub fn origin(&self) -> f64 {
        self.origin_ms
    }

    /// Whole seconds since the origin; 0 if the clock stepped backwards.
    pub fn elapsed_secs(&self, now_ms: f64) -> u64 {
        let secs = ((now_ms - self.origin_ms) / 1000.0).floor();
        if secs > 0.0 {
            secs as u64
        } else {
            0
        }
    }

    pub fn text(&self, now_ms: f64) -> String {
        format_clock(self.elapsed_secs(now_ms))
    }
}

/// `MM:SS`. Minutes keep counting past 59; there is no hour field.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn no_hour_rollover() {
        // An hour reads as sixty minutes, and larger values just widen.
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_clock(6000 * 60 + 7), "6000:07");
    }

    #[test]
    fn elapsed_truncates_partial_seconds() {
        let t = Timer::new(1_000.0);
        assert_eq!(t.elapsed_secs(1_999.0), 0);
        assert_eq!(t.elapsed_secs(2_000.0), 1);
        assert_eq!(t.text(126_500.0), "02:05");
    }

    #[test]
    fn backwards_clock_reads_zero() {
        let t = Timer::new(10_000.0);
        assert_eq!(t.text(5_000.0), "00:00");
    }

    #[test]
    fn reset_moves_origin() {
        let mut t = Timer::new(0.0);
        assert_eq!(t.text(90_000.0), "01:30");
        t.reset(90_000.0);
        assert_eq!(t.text(90_000.0), "00:00");
        assert_eq!(t.origin(), 90_000.0);
    }
}
