use std::f64::consts::TAU;

use crate::config::LetterTuning;
use crate::rng::Rng;

/// A single glyph drifting and spinning behind the page content.
///
/// Size, opacity, drift and rotation speed are fixed at spawn time; only
/// position and rotation change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Letter {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    glyph: char,
    size: f64,
    rotation_speed: f64,
    opacity: f64,
    drift: (f64, f64),
    font: String,
    fill_style: String,
}

impl Letter {
    /// Spawn a letter with randomized attributes somewhere inside a
    /// `width` x `height` viewport. `None` if the glyph set is empty.
    pub fn spawn(rng: &mut Rng, width: f64, height: f64, tuning: &LetterTuning) -> Option<Self> {
        let glyph = rng.pick(tuning.glyphs)?;
        let x = rng.next_f64() * width;
        let y = rng.next_f64() * height;
        let size = rng.range(tuning.min_size, tuning.max_size);
        let rotation = rng.next_f64() * TAU;
        let rotation_speed = rng.range(-tuning.max_rotation_speed, tuning.max_rotation_speed);
        let opacity = rng.range(tuning.min_opacity, tuning.max_opacity);
        let drift = (
            rng.range(-tuning.max_drift, tuning.max_drift),
            rng.range(-tuning.max_drift, tuning.max_drift),
        );
        Some(Self::new(glyph, x, y, size, rotation, rotation_speed, opacity, drift, tuning))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        glyph: char,
        x: f64,
        y: f64,
        size: f64,
        rotation: f64,
        rotation_speed: f64,
        opacity: f64,
        drift: (f64, f64),
        tuning: &LetterTuning,
    ) -> Self {
        let (r, g, b) = tuning.ink;
        Self {
            glyph,
            x,
            y,
            size,
            rotation,
            rotation_speed,
            opacity,
            drift,
            font: format!("{}px {}", size, tuning.font_family),
            fill_style: format!("rgba({}, {}, {}, {})", r, g, b, opacity),
        }
    }

    /// Advance one frame. Does nothing under a reduced-motion preference.
    pub fn update(&mut self, width: f64, height: f64, reduced_motion: bool) {
        if reduced_motion {
            return;
        }

        self.x += self.drift.0;
        self.y += self.drift.1;
        self.rotation += self.rotation_speed;

        self.x = wrap(self.x, width, self.size);
        self.y = wrap(self.y, height, self.size);
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Canvas font shorthand, e.g. `120px 'Playfair Display', serif`.
    pub fn font(&self) -> &str {
        &self.font
    }

    /// Canvas fill style carrying the letter's opacity.
    pub fn fill_style(&self) -> &str {
        &self.fill_style
    }
}

/// Wrap a coordinate that left `[-margin, extent + margin]` to the opposite edge.
fn wrap(v: f64, extent: f64, margin: f64) -> f64 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}
