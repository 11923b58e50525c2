// morse.txt -- text to morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Conversion of characters into timed tones and pauses.

use snafu::Snafu;

use super::table::{MorseCodeTable, Symbol};
use crate::config::EncodingConfig;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum LookupError {
    #[snafu(display("Character {:?} has no morse code", character))]
    UnknownCharacter { character: char },
}

/// A tone burst or a pause of a fixed length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSegment {
    duration: f64,
    silent: bool,
}

impl TimingSegment {
    pub fn from_symbol(symbol: Symbol, time_unit: f64) -> Self {
        Self {
            duration: symbol.units() as f64 * time_unit,
            silent: symbol.is_silent(),
        }
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

/// The symbols making up one character, including the pause after it.
///
/// A space is a single word gap. Every other character yields its dots and
/// dashes separated by intra-character gaps, followed by a letter gap.
pub fn symbols_for(table: &MorseCodeTable, character: char) -> Result<Vec<Symbol>, LookupError> {
    if character == ' ' {
        return Ok(vec![Symbol::WordGap]);
    }
    let code = table
        .lookup(character)
        .ok_or(LookupError::UnknownCharacter { character })?;

    let mut symbols = Vec::with_capacity(code.len() * 2);
    for (i, symbol) in code.iter().enumerate() {
        if i > 0 {
            symbols.push(Symbol::IntraGap);
        }
        symbols.push(*symbol);
    }
    symbols.push(Symbol::LetterGap);
    Ok(symbols)
}

/// Timed segments for one character, using the shared international table.
///
/// ```
/// use morse_txt::config::EncodingConfig;
/// use morse_txt::morse::timing::*;
///
/// let config = EncodingConfig { time_unit: 0.1, ..EncodingConfig::default() };
/// let space = timings_for(' ', &config).unwrap();
/// assert_eq!(space.len(), 1);
/// assert!(space[0].is_silent());
/// assert!((space[0].duration() - 0.7).abs() < 1e-12);
///
/// assert_eq!(
///     timings_for('#', &config),
///     Err(LookupError::UnknownCharacter { character: '#' })
/// );
/// ```
pub fn timings_for(
    character: char,
    config: &EncodingConfig,
) -> Result<Vec<TimingSegment>, LookupError> {
    timings_with(MorseCodeTable::global(), character, config)
}

pub fn timings_with(
    table: &MorseCodeTable,
    character: char,
    config: &EncodingConfig,
) -> Result<Vec<TimingSegment>, LookupError> {
    Ok(symbols_for(table, character)?
        .into_iter()
        .map(|symbol| TimingSegment::from_symbol(symbol, config.time_unit))
        .collect())
}

/// Draw segments as a pattern with one character per time unit:
/// `=` while the tone sounds and `.` during pauses.
///
/// ```
/// use morse_txt::config::EncodingConfig;
/// use morse_txt::morse::timing::*;
///
/// let config = EncodingConfig::default();
/// let segments = timings_for('a', &config).unwrap();
/// assert_eq!(render_units(&segments, config.time_unit), "=.===...");
/// ```
pub fn render_units(segments: &[TimingSegment], time_unit: f64) -> String {
    let mut pattern = String::new();
    for segment in segments {
        let units = (segment.duration / time_unit).round() as usize;
        let mark = if segment.silent { '.' } else { '=' };
        pattern.extend(std::iter::repeat(mark).take(units));
    }
    pattern
}
