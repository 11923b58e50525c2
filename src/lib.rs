// modules for making sounds
pub mod config;
pub mod synth;
pub mod wave;

// morse code
pub mod morse;

// getting sound out
pub mod output;
pub mod prompt;
