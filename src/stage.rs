use crate::config::Config;
use crate::field::LetterField;
use crate::letter::Letter;
use crate::parallax::Parallax;
use crate::reveal::{RevealStep, RevealTracker, SectionShape};
use crate::rng::Rng;
use crate::timer::Timer;

/// What the page should do when replay is triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayPlan {
    /// Scroll position to (smoothly) return to.
    pub scroll_to: f64,
    /// Delay before [`Stage::settle_replay`] should run.
    pub settle_after_ms: u32,
}

/// Owns every piece of mutable presentation state: the frame clock, the
/// letter field, the timer origin, the parallax gate and the reveal flags.
///
/// Browser glue shares one `Stage` between its callbacks; nothing in here
/// touches the DOM.
#[derive(Debug)]
pub struct Stage {
    config: Config,
    rng: Rng,
    field: LetterField,
    clock: u64,
    timer: Timer,
    parallax: Parallax,
    reveal: RevealTracker,
    reduced_motion: bool,
}

impl Stage {
    pub fn new(
        config: Config,
        seed: u64,
        now_ms: f64,
        reduced_motion: bool,
        sections: Vec<SectionShape>,
    ) -> Self {
        let parallax = Parallax::new(config.parallax.clone(), reduced_motion);
        let reveal = RevealTracker::new(sections, config.reveal.clone());
        Self {
            config,
            rng: Rng::new(seed),
            field: LetterField::new(),
            clock: 0,
            timer: Timer::new(now_ms),
            parallax,
            reveal,
            reduced_motion,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field
            .resize(width, height, &mut self.rng, &self.config.letters);
    }

    /// Advance one rendered frame and return the letters to draw.
    pub fn frame(&mut self) -> &[Letter] {
        self.clock += 1;
        self.field.step(self.reduced_motion);
        self.field.letters()
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn field(&self) -> &LetterField {
        &self.field
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn timer_text(&self, now_ms: f64) -> String {
        self.timer.text(now_ms)
    }

    pub fn request_parallax(&mut self) -> bool {
        self.parallax.request()
    }

    pub fn parallax_offsets(&mut self, scroll_y: f64, lines: usize) -> Vec<f64> {
        self.parallax.flush(scroll_y, lines)
    }

    pub fn observe_section(&mut self, section: usize, is_intersecting: bool, ratio: f64) -> Vec<RevealStep> {
        self.reveal.observe(section, is_intersecting, ratio)
    }

    pub fn apply_reveal(&mut self, step: &RevealStep) -> bool {
        self.reveal.apply(step)
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    /// Restart the timer now; the reveal flags are cleared later by
    /// [`Stage::settle_replay`] once the scroll back to the top has settled.
    pub fn replay(&mut self, now_ms: f64) -> ReplayPlan {
        self.timer.reset(now_ms);
        log::info!("replay requested");
        ReplayPlan {
            scroll_to: 0.0,
            settle_after_ms: self.config.replay_settle_ms,
        }
    }

    pub fn settle_replay(&mut self) {
        self.reveal.reset();
    }
}
