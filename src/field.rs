use crate::config::LetterTuning;
use crate::letter::Letter;
use crate::rng::Rng;

/// The collection of background letters plus the viewport they wrap in.
#[derive(Debug, Default)]
pub struct LetterField {
    letters: Vec<Letter>,
    width: f64,
    height: f64,
}

/// Number of letters a `width` x `height` viewport holds. Zero when there
/// are no glyphs to draw from.
pub fn target_count(width: f64, height: f64, tuning: &LetterTuning) -> usize {
    if tuning.glyphs.is_empty() {
        return 0;
    }
    let count = (width * height / tuning.area_per_letter).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

impl LetterField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record new viewport bounds. Populates the field only when it is still
    /// empty; an existing population keeps its count and positions.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut Rng, tuning: &LetterTuning) {
        self.width = width;
        self.height = height;
        if self.letters.is_empty() {
            self.populate(rng, tuning);
        }
    }

    fn populate(&mut self, rng: &mut Rng, tuning: &LetterTuning) {
        let count = target_count(self.width, self.height, tuning);
        self.letters = (0..count)
            .map_while(|_| Letter::spawn(rng, self.width, self.height, tuning))
            .collect();
        log::debug!(
            "letter field populated: {} glyphs for {}x{}",
            count,
            self.width,
            self.height
        );
    }

    /// Advance every letter one frame.
    pub fn step(&mut self, reduced_motion: bool) {
        let (w, h) = (self.width, self.height);
        for letter in &mut self.letters {
            letter.update(w, h, reduced_motion);
        }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
