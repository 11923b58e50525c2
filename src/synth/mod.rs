//! This namespace contains all the parts converting from tone parameters to wave data.

pub mod oscillator;
pub mod tone;

pub use tone::{synthesize, ToneSynth};
