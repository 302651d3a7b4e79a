//! Kinetic type page effects: a drifting letter background on a 2D canvas,
//! a scroll progress bar, an elapsed-time readout, staged reveal of chapter
//! sections, title parallax and a replay control.
//!
//! All state and arithmetic lives in host-testable modules; the `wasm`
//! module wires them to the browser and only exists on `wasm32`.

pub mod config;
pub mod field;
pub mod letter;
pub mod parallax;
pub mod progress;
pub mod reveal;
pub mod rng;
pub mod stage;
pub mod timer;

pub use config::Config;
pub use stage::{ReplayPlan, Stage};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
