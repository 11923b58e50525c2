// morse.txt -- text to morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Turn whole messages into audio.

use log::{debug, trace};
use snafu::Snafu;

use super::table::MorseCodeTable;
use super::timing::{timings_with, LookupError, TimingSegment};
use crate::config::{EncodingConfig, ParameterError};
use crate::synth::ToneSynth;
use crate::wave::SampleBuffer;

#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum EncodeError {
    #[snafu(display("Invalid parameter: {}", source))]
    InvalidParameter { source: ParameterError },
    #[snafu(display(
        "Character {:?} at position {} has no morse code",
        character,
        index
    ))]
    UnknownCharacter { character: char, index: usize },
}

impl From<ParameterError> for EncodeError {
    fn from(source: ParameterError) -> Self {
        EncodeError::InvalidParameter { source }
    }
}

/// Timing segments of every character of `message`, grouped per character.
///
/// Fails on the first character without a morse code; `index` counts characters, not bytes.
pub fn message_timings(
    table: &MorseCodeTable,
    message: &str,
    config: &EncodingConfig,
) -> Result<Vec<Vec<TimingSegment>>, EncodeError> {
    message
        .chars()
        .enumerate()
        .map(|(index, character)| {
            timings_with(table, character, config).map_err(|err| match err {
                LookupError::UnknownCharacter { character } => {
                    EncodeError::UnknownCharacter { character, index }
                }
            })
        })
        .collect()
}

/// Encode a message as morse code audio using the international table.
///
/// Either the whole message is encoded or an error is returned,
/// partial audio is never handed out.
///
/// ```
/// use morse_txt::config::EncodingConfig;
/// use morse_txt::morse::encoder::*;
///
/// let config = EncodingConfig::default();
/// assert!(encode("", &config).unwrap().is_empty());
/// assert_eq!(
///     encode("#", &config),
///     Err(EncodeError::UnknownCharacter { character: '#', index: 0 })
/// );
/// ```
pub fn encode(message: &str, config: &EncodingConfig) -> Result<SampleBuffer, EncodeError> {
    Encoder::new(MorseCodeTable::global(), config.clone()).encode(message)
}

/// Encodes messages with a fixed table and configuration.
#[derive(Debug, Clone)]
pub struct Encoder<'t> {
    table: &'t MorseCodeTable,
    config: EncodingConfig,
    synth: ToneSynth,
}

impl<'t> Encoder<'t> {
    pub fn new(table: &'t MorseCodeTable, config: EncodingConfig) -> Self {
        let synth = ToneSynth::new(config.waveform);
        Self {
            table,
            config,
            synth,
        }
    }

    pub fn config(&self) -> &EncodingConfig {
        &self.config
    }

    pub fn encode(&self, message: &str) -> Result<SampleBuffer, EncodeError> {
        self.config.validate()?;
        // resolve all characters before synthesizing anything
        let characters = message_timings(self.table, message, &self.config)?;

        let mut output = SampleBuffer::new();
        for (index, segments) in characters.into_iter().enumerate() {
            trace!("character {}: {} segments", index, segments.len());
            for segment in segments {
                output.append(self.render_segment(&segment)?);
            }
        }
        debug!(
            "encoded {} characters into {} samples ({:.2} seconds)",
            message.chars().count(),
            output.len(),
            output.duration_seconds(self.config.sample_rate)
        );
        Ok(output)
    }

    fn render_segment(&self, segment: &TimingSegment) -> Result<SampleBuffer, ParameterError> {
        let volume = if segment.is_silent() {
            0
        } else {
            self.config.volume
        };
        self.synth.synthesize(
            self.config.tone_frequency,
            segment.duration(),
            volume,
            self.config.sample_rate,
        )
    }
}
