// morse.txt -- text to morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Parameters controlling how a message is turned into sound.

use snafu::Snafu;

use crate::synth::oscillator::WaveShape;

/// A parameter that makes sound generation impossible.
#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum ParameterError {
    #[snafu(display(
        "Frequency must be non-zero and below half the sample rate, got {} Hz",
        frequency
    ))]
    InvalidFrequency { frequency: f64 },
    #[snafu(display("Duration must be positive and finite, got {} seconds", duration))]
    InvalidDuration { duration: f64 },
    #[snafu(display("Sample rate must be positive"))]
    InvalidSampleRate,
    #[snafu(display("Volume must be between 0 and 100 percent, got {}", volume))]
    InvalidVolume { volume: u32 },
}

/// Everything the encoder needs to know besides the message itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingConfig {
    /// Pitch of the morse tone.
    pub tone_frequency: f64,
    /// Length of a dot in seconds. All other element lengths are multiples of it.
    pub time_unit: f64,
    /// Loudness of the tone in percent of full scale.
    pub volume: u32,
    /// Number of samples per second.
    pub sample_rate: u32,
    pub waveform: WaveShape,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            tone_frequency: 600.0,
            time_unit: 0.25,
            volume: 100,
            sample_rate: 44100,
            waveform: WaveShape::Sine,
        }
    }
}

impl EncodingConfig {
    /// Check all parameters before any samples are generated.
    ///
    /// ```
    /// use morse_txt::config::*;
    ///
    /// assert_eq!(EncodingConfig::default().validate(), Ok(()));
    ///
    /// let loud = EncodingConfig { volume: 101, ..EncodingConfig::default() };
    /// assert_eq!(loud.validate(), Err(ParameterError::InvalidVolume { volume: 101 }));
    /// ```
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_sample_rate(self.sample_rate)?;
        check_frequency(self.tone_frequency, self.sample_rate)?;
        check_duration(self.time_unit)?;
        check_volume(self.volume)
    }
}

/// The tone needs more than two samples per cycle to be audible at all.
pub(crate) fn check_frequency(frequency: f64, sample_rate: u32) -> Result<(), ParameterError> {
    let nyquist = sample_rate as f64 / 2.0;
    // also rejects NaN
    if frequency == 0.0 || !(frequency.abs() < nyquist) {
        return Err(ParameterError::InvalidFrequency { frequency });
    }
    Ok(())
}

pub(crate) fn check_duration(duration: f64) -> Result<(), ParameterError> {
    // also rejects NaN
    if !(duration > 0.0 && duration.is_finite()) {
        return Err(ParameterError::InvalidDuration { duration });
    }
    Ok(())
}

pub(crate) fn check_volume(volume: u32) -> Result<(), ParameterError> {
    if volume > 100 {
        return Err(ParameterError::InvalidVolume { volume });
    }
    Ok(())
}

pub(crate) fn check_sample_rate(sample_rate: u32) -> Result<(), ParameterError> {
    if sample_rate == 0 {
        return Err(ParameterError::InvalidSampleRate);
    }
    Ok(())
}
