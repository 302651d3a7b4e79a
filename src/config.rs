//! Tuning constants and DOM hook selectors.

/// Glyphs the background letters are drawn from.
pub const GLYPHS: [char; 11] = ['I', 'N', 'T', 'E', 'R', 'A', 'C', 'T', 'I', 'O', 'N'];

/// How the background letters are generated and painted.
#[derive(Debug, Clone)]
pub struct LetterTuning {
    pub glyphs: &'static [char],
    /// Viewport area (px²) per letter.
    pub area_per_letter: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Rotation speed is drawn from `[-max, max)` radians per frame.
    pub max_rotation_speed: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    /// Drift is drawn from `[-max, max)` px per frame on each axis.
    pub max_drift: f64,
    pub font_family: &'static str,
    pub ink: (u8, u8, u8),
}

impl Default for LetterTuning {
    fn default() -> Self {
        Self {
            glyphs: &GLYPHS,
            area_per_letter: 100_000.0,
            min_size: 80.0,
            max_size: 280.0,
            max_rotation_speed: 0.0005,
            min_opacity: 0.03,
            max_opacity: 0.08,
            max_drift: 0.05,
            font_family: "'Playfair Display', serif",
            ink: (13, 13, 13),
        }
    }
}

/// Reveal observer settings and stagger delays.
#[derive(Debug, Clone)]
pub struct RevealTimings {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub statement_stagger_ms: u32,
    pub trait_stagger_ms: u32,
    pub signature_delay_ms: u32,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            root_margin: "-50px",
            statement_stagger_ms: 200,
            trait_stagger_ms: 250,
            signature_delay_ms: 800,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParallaxTuning {
    /// Speed lost per line index.
    pub speed_step: f64,
    /// Fraction of the scroll distance applied to line 0.
    pub strength: f64,
}

impl Default for ParallaxTuning {
    fn default() -> Self {
        Self {
            speed_step: 0.15,
            strength: 0.3,
        }
    }
}

/// CSS selectors for the structural hooks the page must provide.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub canvas_id: &'static str,
    pub time_value: &'static str,
    pub progress_bar: &'static str,
    pub replay_button: &'static str,
    pub chapter: &'static str,
    pub statement: &'static str,
    pub trait_group: &'static str,
    pub signature: &'static str,
    pub display_line: &'static str,
    pub visible_class: &'static str,
}

impl Selectors {
    /// Every revealable element, used when replay clears the page.
    pub fn revealable(&self) -> String {
        [self.chapter, self.statement, self.trait_group, self.signature].join(", ")
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            canvas_id: "typeCanvas",
            time_value: ".time-value",
            progress_bar: ".progress-bar",
            replay_button: ".replay-button",
            chapter: ".chapter",
            statement: ".statement",
            trait_group: ".trait-group",
            signature: ".signature-section",
            display_line: ".display-line",
            visible_class: "visible",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub letters: LetterTuning,
    pub reveal: RevealTimings,
    pub parallax: ParallaxTuning,
    pub replay_settle_ms: u32,
    pub selectors: Selectors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            letters: LetterTuning::default(),
            reveal: RevealTimings::default(),
            parallax: ParallaxTuning::default(),
            replay_settle_ms: 600,
            selectors: Selectors::default(),
        }
    }
}
