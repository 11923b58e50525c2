// morse.txt -- text to morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The International Morse Code alphabet.

use std::collections::HashMap;
use std::sync::OnceLock;

/// The building blocks of a morse transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
    /// Pause between the dots and dashes of one character.
    IntraGap,
    /// Pause after a character.
    LetterGap,
    /// Pause between words.
    WordGap,
}

impl Symbol {
    /// Length of the symbol measured in time units.
    pub fn units(self) -> u32 {
        match self {
            Symbol::Dot => 1,
            Symbol::Dash => 3,
            Symbol::IntraGap => 1,
            Symbol::LetterGap => 3,
            Symbol::WordGap => 7,
        }
    }

    pub fn is_silent(self) -> bool {
        match self {
            Symbol::Dot | Symbol::Dash => false,
            Symbol::IntraGap | Symbol::LetterGap | Symbol::WordGap => true,
        }
    }
}

const CODES: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    ('\'', ".----."),
];

/// Maps characters to their sequence of dots and dashes.
///
/// Letters are looked up case-insensitively.
///
/// ```
/// use morse_txt::morse::table::*;
///
/// let table = MorseCodeTable::global();
/// assert_eq!(table.lookup('A'), Some(&[Symbol::Dot, Symbol::Dash][..]));
/// assert_eq!(table.code_string('?').as_deref(), Some("..--.."));
/// assert_eq!(table.lookup('#'), None);
/// ```
#[derive(Debug, Clone)]
pub struct MorseCodeTable {
    codes: HashMap<char, Vec<Symbol>>,
}

impl MorseCodeTable {
    /// Letters, digits and the common punctuation marks.
    pub fn international() -> Self {
        let codes = CODES
            .iter()
            .map(|&(character, code)| {
                let symbols = code
                    .chars()
                    .map(|c| if c == '.' { Symbol::Dot } else { Symbol::Dash })
                    .collect();
                (character, symbols)
            })
            .collect();
        Self { codes }
    }

    /// Shared read-only instance of the international table, built on first use.
    pub fn global() -> &'static MorseCodeTable {
        static TABLE: OnceLock<MorseCodeTable> = OnceLock::new();
        TABLE.get_or_init(MorseCodeTable::international)
    }

    pub fn lookup(&self, character: char) -> Option<&[Symbol]> {
        self.codes
            .get(&character.to_ascii_lowercase())
            .map(|symbols| symbols.as_slice())
    }

    pub fn contains(&self, character: char) -> bool {
        self.lookup(character).is_some()
    }

    /// The code of a character written with `.` and `-`.
    pub fn code_string(&self, character: char) -> Option<String> {
        self.lookup(character).map(|symbols| {
            symbols
                .iter()
                .map(|s| if *s == Symbol::Dot { '.' } else { '-' })
                .collect()
        })
    }

    /// Number of supported characters, not counting the space.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alphanumeric_codes() {
        let expected = [
            ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..",
            "--", "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-",
            "-.--", "--..", "-----", ".----", "..---", "...--", "....-", ".....", "-....",
            "--...", "---..", "----.",
        ];
        let table = MorseCodeTable::international();
        let characters = ('a'..='z').chain('0'..='9');
        for (character, code) in characters.zip(expected.iter()) {
            assert_eq!(
                table.code_string(character).as_deref(),
                Some(*code),
                "code of {:?}",
                character
            );
        }
    }

    #[test]
    fn case_insensitive() {
        let table = MorseCodeTable::global();
        for upper in 'A'..='Z' {
            assert_eq!(table.lookup(upper), table.lookup(upper.to_ascii_lowercase()));
        }
    }

    #[test]
    fn punctuation() {
        let table = MorseCodeTable::global();
        assert_eq!(table.len(), 54);
        for c in ".,?!/()&:;=+-_\"$@'".chars() {
            assert!(table.contains(c), "missing {:?}", c);
        }
        assert!(!table.contains(' '));
        assert!(!table.contains('é'));
    }

    #[test]
    fn symbol_units() {
        let units: Vec<_> = [
            Symbol::Dot,
            Symbol::Dash,
            Symbol::IntraGap,
            Symbol::LetterGap,
            Symbol::WordGap,
        ]
        .iter()
        .map(|s| s.units())
        .collect();
        assert_eq!(units, vec![1, 3, 1, 3, 7]);
        assert!(!Symbol::Dash.is_silent());
        assert!(Symbol::WordGap.is_silent());
    }
}
