// morse.txt -- text to morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Generation of single tone bursts and pauses.

use crate::config::{
    check_duration, check_frequency, check_sample_rate, check_volume, ParameterError,
};
use crate::wave::{SampleBuffer, MAX_AMPLITUDE};

use super::oscillator::{Phase, WaveShape};

/// Renders tones of a fixed wave shape into PCM buffers.
///
/// Every buffer covers a whole number of wave cycles, so consecutive
/// tones join without a jump in the waveform.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneSynth {
    shape: WaveShape,
}

impl ToneSynth {
    pub fn new(shape: WaveShape) -> Self {
        Self { shape }
    }

    /// Sample a tone of `frequency` Hz lasting at least `duration` seconds.
    ///
    /// The sign of `frequency` is ignored, its magnitude must stay below half
    /// the sample rate. A `volume` of zero yields silence of the same length
    /// as the corresponding tone.
    ///
    /// # Examples
    ///
    /// ```
    /// use morse_txt::synth::oscillator::WaveShape;
    /// use morse_txt::synth::tone::ToneSynth;
    ///
    /// let synth = ToneSynth::new(WaveShape::Sine);
    /// let tone = synth.synthesize(600.0, 0.01, 100, 44100).unwrap();
    /// // 0.01 s are exactly six cycles of 73.5 samples each
    /// assert_eq!(tone.len(), 441);
    /// assert_eq!(tone.samples()[0], 0);
    ///
    /// let pause = synth.synthesize(600.0, 0.01, 0, 44100).unwrap();
    /// assert_eq!(pause.len(), 441);
    /// assert!(pause.iter().all(|&s| s == 0));
    /// ```
    pub fn synthesize(
        &self,
        frequency: f64,
        duration: f64,
        volume: u32,
        sample_rate: u32,
    ) -> Result<SampleBuffer, ParameterError> {
        check_sample_rate(sample_rate)?;
        check_frequency(frequency, sample_rate)?;
        check_duration(duration)?;
        check_volume(volume)?;

        let samples_per_cycle = sample_rate as f64 / frequency.abs();
        let count = quantized_sample_count(frequency, duration, sample_rate)?;
        if volume == 0 {
            return Ok(SampleBuffer::from_samples(vec![0; count]));
        }

        let gain = volume as f64 / 100.0 * MAX_AMPLITUDE as f64;
        let samples = (0..count)
            .map(|i| {
                let phase = Phase::new(i as f64 / samples_per_cycle);
                to_sample(self.shape.eval(phase) * gain)
            })
            .collect();
        Ok(SampleBuffer::from_samples(samples))
    }
}

/// Sample a tone with the default wave shape.
pub fn synthesize(
    frequency: f64,
    duration: f64,
    volume: u32,
    sample_rate: u32,
) -> Result<SampleBuffer, ParameterError> {
    ToneSynth::default().synthesize(frequency, duration, volume, sample_rate)
}

/// Upper bound on the length of a single tone, a bit over a day at 44.1 kHz.
pub const MAX_TONE_SAMPLES: usize = u32::MAX as usize;

/// Number of samples needed for `duration` seconds of a `frequency` Hz tone,
/// rounded up to whole cycles. At least one cycle is always produced.
///
/// Fails if the result exceeds [`MAX_TONE_SAMPLES`]. A single cycle that is
/// already too long is blamed on the frequency, anything else on the duration.
pub fn quantized_sample_count(
    frequency: f64,
    duration: f64,
    sample_rate: u32,
) -> Result<usize, ParameterError> {
    let samples_per_cycle = sample_rate as f64 / frequency.abs();
    let raw = sample_rate as f64 * duration;
    // tolerance keeps exact multiples from being pushed up a whole cycle
    let cycles = (raw / samples_per_cycle - 1e-9).ceil().max(1.0);
    let count = (cycles * samples_per_cycle).round();
    if count.is_finite() && count <= MAX_TONE_SAMPLES as f64 {
        Ok(count as usize)
    } else if cycles <= 1.0 {
        Err(ParameterError::InvalidFrequency { frequency })
    } else {
        Err(ParameterError::InvalidDuration { duration })
    }
}

fn to_sample(value: f64) -> i16 {
    let max = MAX_AMPLITUDE as f64;
    value.round().max(-max).min(max) as i16
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rounds_up_to_whole_cycles() {
        // 100.227 samples per cycle, 441 raw samples are 4.4 cycles
        let tone = synthesize(440.0, 0.01, 100, 44100).unwrap();
        assert_eq!(tone.len(), 501);
    }

    #[test]
    fn at_least_one_cycle() {
        let tone = synthesize(600.0, 0.0001, 100, 44100).unwrap();
        assert_eq!(tone.len(), 74);
    }

    #[test]
    fn exact_multiples_stay_put() {
        assert_eq!(synthesize(600.0, 0.25, 100, 44100).unwrap().len(), 11025);
        assert_eq!(synthesize(600.0, 0.75, 0, 44100).unwrap().len(), 33075);
        assert_eq!(synthesize(600.0, 1.75, 0, 44100).unwrap().len(), 77175);
    }

    #[test]
    fn negative_frequency_is_mirrored() {
        assert_eq!(
            synthesize(-600.0, 0.02, 80, 44100),
            synthesize(600.0, 0.02, 80, 44100)
        );
    }

    #[test]
    fn amplitude_bounds() {
        let tone = synthesize(1000.0, 0.05, 100, 48000).unwrap();
        let max = tone.iter().copied().max().unwrap();
        let min = tone.iter().copied().min().unwrap();
        assert!(max <= MAX_AMPLITUDE && max > 32000);
        assert!(min >= -MAX_AMPLITUDE && min < -32000);

        let half = synthesize(1000.0, 0.05, 50, 48000).unwrap();
        assert!(half.iter().all(|s| s.abs() <= 16384));
    }

    #[test]
    fn ends_near_zero_crossing() {
        let tone = synthesize(600.0, 0.01, 100, 44100).unwrap();
        let last = *tone.samples().last().unwrap();
        assert!(last.abs() < 3000, "last sample {}", last);
    }

    #[test]
    fn cosine_has_same_length() {
        let sine = ToneSynth::new(WaveShape::Sine)
            .synthesize(523.25, 0.1, 100, 44100)
            .unwrap();
        let cosine = ToneSynth::new(WaveShape::Cosine)
            .synthesize(523.25, 0.1, 100, 44100)
            .unwrap();
        assert_eq!(sine.len(), cosine.len());
        assert_eq!(cosine.samples()[0], MAX_AMPLITUDE);
    }

    #[test]
    fn overlong_tones_are_rejected() {
        assert_eq!(
            synthesize(1e-300, 0.01, 0, 44100),
            Err(ParameterError::InvalidFrequency { frequency: 1e-300 })
        );
        assert_eq!(
            synthesize(1e-10, 0.01, 100, 44100),
            Err(ParameterError::InvalidFrequency { frequency: 1e-10 })
        );
        assert_eq!(
            synthesize(600.0, 1e300, 0, 44100),
            Err(ParameterError::InvalidDuration { duration: 1e300 })
        );
        assert_eq!(
            quantized_sample_count(600.0, 1e6, 44100),
            Err(ParameterError::InvalidDuration { duration: 1e6 })
        );
        assert_eq!(quantized_sample_count(600.0, 0.25, 44100), Ok(11025));
    }

    #[test]
    fn frequency_must_stay_below_nyquist() {
        assert_eq!(
            synthesize(100_000.0, 0.000001, 100, 44100),
            Err(ParameterError::InvalidFrequency {
                frequency: 100_000.0
            })
        );
        assert_eq!(
            synthesize(-22050.0, 0.01, 100, 44100),
            Err(ParameterError::InvalidFrequency {
                frequency: -22050.0
            })
        );
        // just below half the sample rate every cycle has more than two samples
        let tone = synthesize(22000.0, 0.000001, 100, 44100).unwrap();
        assert_eq!(tone.len(), 2);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            synthesize(0.0, 1.0, 100, 44100),
            Err(ParameterError::InvalidFrequency { frequency: 0.0 })
        );
        assert_eq!(
            synthesize(600.0, 0.0, 100, 44100),
            Err(ParameterError::InvalidDuration { duration: 0.0 })
        );
        assert_eq!(
            synthesize(600.0, 1.0, 100, 0),
            Err(ParameterError::InvalidSampleRate)
        );
        assert_eq!(
            synthesize(600.0, 1.0, 150, 44100),
            Err(ParameterError::InvalidVolume { volume: 150 })
        );
    }
}
