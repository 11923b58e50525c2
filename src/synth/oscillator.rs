// morse.txt -- text to morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use std::str::FromStr;

/// Position within one cycle of a periodic wave, normalized to `[0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Phase(f64);

impl Phase {
    pub const ZERO: Phase = Phase(0.0);

    /// Wrap an arbitrary number of cycles into a single cycle.
    ///
    /// ```
    /// use morse_txt::synth::oscillator::Phase;
    ///
    /// assert_eq!(Phase::new(2.25).offset(), 0.25);
    /// assert_eq!(Phase::new(-0.25).offset(), 0.75);
    /// ```
    pub fn new(cycles: f64) -> Phase {
        let offset = cycles - cycles.floor();
        // floating point may round `1 - epsilon` up to 1
        if offset >= 1.0 {
            Phase(0.0)
        } else {
            Phase(offset)
        }
    }

    pub fn offset(self) -> f64 {
        self.0
    }
}

/// The periodic function a tone is sampled from.
///
/// Both shapes only differ by a quarter cycle, so durations and peak
/// amplitudes do not depend on the choice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WaveShape {
    Sine,
    Cosine,
}

impl WaveShape {
    pub fn eval(self, phase: Phase) -> f64 {
        use std::f64::consts::PI;
        let angle = phase.offset() * 2.0 * PI;
        match self {
            WaveShape::Sine => angle.sin(),
            WaveShape::Cosine => angle.cos(),
        }
    }
}

impl Default for WaveShape {
    fn default() -> Self {
        WaveShape::Sine
    }
}

impl FromStr for WaveShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(WaveShape::Sine),
            "cosine" | "cos" => Ok(WaveShape::Cosine),
            other => Err(format!("Unknown waveform {:?}, expected sine or cosine", other)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quarter_cycles() {
        assert_eq!(WaveShape::Sine.eval(Phase::ZERO), 0.0);
        assert_eq!(WaveShape::Cosine.eval(Phase::ZERO), 1.0);
        assert!((WaveShape::Sine.eval(Phase::new(0.25)) - 1.0).abs() < 1e-12);
        assert!((WaveShape::Cosine.eval(Phase::new(0.5)) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn wraps_whole_cycles() {
        assert_eq!(Phase::new(1.25).offset(), 0.25);
        assert_eq!(Phase::new(3.0), Phase::ZERO);
    }

    #[test]
    fn parse() {
        assert_eq!("Sine".parse::<WaveShape>(), Ok(WaveShape::Sine));
        assert_eq!("cos".parse::<WaveShape>(), Ok(WaveShape::Cosine));
        assert!("square".parse::<WaveShape>().is_err());
    }
}
