//! One-way reveal of chapter sections and their staged children.
//!
//! A section goes hidden -> visible the first time it is reported
//! intersecting. The observer itself applies the visibility threshold. The transition yields a list of
//! [`RevealStep`]s, each with a delay, which the caller schedules and feeds
//! back through [`RevealTracker::apply`]. Steps are tagged with the epoch
//! they were issued in, so steps still in flight when [`RevealTracker::reset`]
//! runs are dropped instead of re-marking a freshly cleared page.

use crate::config::RevealTimings;

/// How many staged children a section has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionShape {
    pub statements: usize,
    pub trait_groups: usize,
    pub has_signature: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    Section,
    Statement(usize),
    TraitGroup(usize),
    Signature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub section: usize,
    pub target: RevealTarget,
    pub delay_ms: u32,
    pub epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SectionFlags {
    section: bool,
    statements: Vec<bool>,
    trait_groups: Vec<bool>,
    signature: Option<bool>,
}

impl SectionFlags {
    fn hidden(shape: SectionShape) -> Self {
        Self {
            section: false,
            statements: vec![false; shape.statements],
            trait_groups: vec![false; shape.trait_groups],
            signature: shape.has_signature.then_some(false),
        }
    }

    fn get(&self, target: RevealTarget) -> Option<bool> {
        match target {
            RevealTarget::Section => Some(self.section),
            RevealTarget::Statement(i) => self.statements.get(i).copied(),
            RevealTarget::TraitGroup(i) => self.trait_groups.get(i).copied(),
            RevealTarget::Signature => self.signature,
        }
    }

    fn slot(&mut self, target: RevealTarget) -> Option<&mut bool> {
        match target {
            RevealTarget::Section => Some(&mut self.section),
            RevealTarget::Statement(i) => self.statements.get_mut(i),
            RevealTarget::TraitGroup(i) => self.trait_groups.get_mut(i),
            RevealTarget::Signature => self.signature.as_mut(),
        }
    }

    fn clear(&mut self) {
        self.section = false;
        self.statements.iter_mut().for_each(|f| *f = false);
        self.trait_groups.iter_mut().for_each(|f| *f = false);
        if let Some(f) = self.signature.as_mut() {
            *f = false;
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    timings: RevealTimings,
    shapes: Vec<SectionShape>,
    flags: Vec<SectionFlags>,
    /// Sections that already transitioned; further notifications are ignored.
    triggered: Vec<bool>,
    epoch: u64,
}

impl RevealTracker {
    pub fn new(shapes: Vec<SectionShape>, timings: RevealTimings) -> Self {
        let flags = shapes.iter().copied().map(SectionFlags::hidden).collect();
        let triggered = vec![false; shapes.len()];
        Self {
            timings,
            shapes,
            flags,
            triggered,
            epoch: 0,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn section_count(&self) -> usize {
        self.shapes.len()
    }

    /// Feed an intersection notification for `section`. Returns the steps to
    /// schedule, or nothing if the section is unknown, not intersecting, or
    /// already revealed. `ratio` is only logged: the reported ratio at a
    /// threshold crossing can round to just under the threshold.
    pub fn observe(&mut self, section: usize, is_intersecting: bool, ratio: f64) -> Vec<RevealStep> {
        let Some(shape) = self.shapes.get(section).copied() else {
            return Vec::new();
        };
        if !is_intersecting || self.triggered[section] {
            return Vec::new();
        }
        self.triggered[section] = true;
        log::debug!("section {} entered view (ratio {:.2})", section, ratio);

        let epoch = self.epoch;
        let step = |target, delay_ms| RevealStep {
            section,
            target,
            delay_ms,
            epoch,
        };

        let mut steps = Vec::with_capacity(1 + shape.statements + shape.trait_groups + 1);
        steps.push(step(RevealTarget::Section, 0));
        steps.extend(
            (0..shape.statements)
                .map(|i| step(RevealTarget::Statement(i), i as u32 * self.timings.statement_stagger_ms)),
        );
        steps.extend(
            (0..shape.trait_groups)
                .map(|i| step(RevealTarget::TraitGroup(i), i as u32 * self.timings.trait_stagger_ms)),
        );
        if shape.has_signature {
            steps.push(step(RevealTarget::Signature, self.timings.signature_delay_ms));
        }
        steps
    }

    /// Mark a scheduled step's element visible. Returns `true` if the flag
    /// flipped, i.e. the caller should add the visible class.
    pub fn apply(&mut self, step: &RevealStep) -> bool {
        if step.epoch != self.epoch {
            return false;
        }
        match self.flags.get_mut(step.section).and_then(|f| f.slot(step.target)) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self, section: usize, target: RevealTarget) -> bool {
        self.flags
            .get(section)
            .and_then(|f| f.get(target))
            .unwrap_or(false)
    }

    /// True if any flag anywhere is set.
    pub fn any_visible(&self) -> bool {
        self.flags.iter().any(|f| {
            f.section
                || f.statements.iter().any(|v| *v)
                || f.trait_groups.iter().any(|v| *v)
                || f.signature == Some(true)
        })
    }

    /// Clear every flag and invalidate steps still in flight.
    pub fn reset(&mut self) {
        self.flags.iter_mut().for_each(SectionFlags::clear);
        self.triggered.iter_mut().for_each(|t| *t = false);
        self.epoch += 1;
        log::debug!("reveal state cleared (epoch {})", self.epoch);
    }
}
