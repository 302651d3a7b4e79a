use crate::config::ParallaxTuning;

/// Vertical offset for title line `index` at `scroll_y`.
///
/// Lines further down move less; past index ~6.67 they move against the
/// scroll.
pub fn line_offset(scroll_y: f64, index: usize, tuning: &ParallaxTuning) -> f64 {
    let speed = 1.0 - index as f64 * tuning.speed_step;
    scroll_y * speed * tuning.strength
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

/// Coalesces scroll bursts into at most one recompute per animation frame.
#[derive(Debug, Clone)]
pub struct Parallax {
    tuning: ParallaxTuning,
    reduced_motion: bool,
    pending: bool,
}

impl Parallax {
    pub fn new(tuning: ParallaxTuning, reduced_motion: bool) -> Self {
        Self {
            tuning,
            reduced_motion,
            pending: false,
        }
    }

    /// Called on every scroll. Returns `true` when the caller should schedule
    /// a recompute for the next frame.
    pub fn request(&mut self) -> bool {
        if self.pending || self.reduced_motion {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Run the scheduled recompute for `lines` title lines.
    pub fn flush(&mut self, scroll_y: f64, lines: usize) -> Vec<f64> {
        self.pending = false;
        (0..lines)
            .map(|i| line_offset(scroll_y, i, &self.tuning))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn offsets_at_scroll_100() {
        let t = ParallaxTuning::default();
        assert!(close(line_offset(100.0, 0, &t), 30.0));
        assert!(close(line_offset(100.0, 2, &t), 21.0));
        assert!(close(line_offset(100.0, 7, &t), -1.5));
    }

    #[test]
    fn bursts_coalesce_until_flushed() {
        let mut p = Parallax::new(ParallaxTuning::default(), false);
        assert!(p.request());
        assert!(!p.request());
        assert!(!p.request());
        let offsets = p.flush(100.0, 3);
        assert_eq!(offsets.len(), 3);
        assert!(!p.is_pending());
        assert!(p.request());
    }

    #[test]
    fn reduced_motion_never_schedules() {
        let mut p = Parallax::new(ParallaxTuning::default(), true);
        assert!(!p.request());
        assert!(!p.is_pending());
    }

    #[test]
    fn transform_string() {
        assert_eq!(translate_y(30.0), "translateY(30px)");
        assert_eq!(translate_y(-1.5), "translateY(-1.5px)");
    }
}
