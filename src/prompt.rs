// morse.txt -- text to morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Interactive mode: read messages line by line and play each one.

use std::io;

use log::{debug, warn};

use crate::morse::Encoder;
use crate::output::Sink;

pub const PROMPT: &str = "Enter your message: ";
pub const EMPTY_INPUT: &str = "Please enter something!";

/// Prompt for messages until `input` is exhausted.
///
/// Messages that cannot be encoded are reported on `output` and never reach
/// the sink. Returns the number of messages that were played.
pub fn run<R, W, S>(
    encoder: &Encoder,
    mut input: R,
    mut output: W,
    sink: &mut S,
) -> io::Result<usize>
where
    R: io::BufRead,
    W: io::Write,
    S: Sink + ?Sized,
{
    let mut played = 0;
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input after {} messages", played);
            writeln!(output)?;
            return Ok(played);
        }
        let message = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if message.is_empty() {
            writeln!(output, "{}", EMPTY_INPUT)?;
            continue;
        }

        match encoder.encode(message) {
            Ok(audio) => {
                sink.play(&audio, encoder.config().sample_rate)?;
                played += 1;
            }
            Err(err) => {
                warn!("rejected message {:?}", message);
                writeln!(output, "{}", err)?;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::EncodingConfig;
    use crate::morse::MorseCodeTable;
    use crate::wave::SampleBuffer;

    #[derive(Default)]
    struct Recorder {
        played: Vec<usize>,
    }

    impl Sink for Recorder {
        fn play(&mut self, audio: &SampleBuffer, _sample_rate: u32) -> io::Result<()> {
            self.played.push(audio.len());
            Ok(())
        }
    }

    fn session(input: &str) -> (String, Recorder, usize) {
        let config = EncodingConfig {
            time_unit: 0.01,
            ..EncodingConfig::default()
        };
        let encoder = Encoder::new(MorseCodeTable::global(), config);
        let mut recorder = Recorder::default();
        let mut output = Vec::new();
        let played = run(&encoder, input.as_bytes(), &mut output, &mut recorder).unwrap();
        (String::from_utf8(output).unwrap(), recorder, played)
    }

    #[test]
    fn plays_each_line() {
        let (output, recorder, played) = session("e\r\nt\n");
        assert_eq!(played, 2);
        // e: 1 + 3 units, t: 3 + 3 units, 441 samples per unit
        assert_eq!(recorder.played, vec![4 * 441, 6 * 441]);
        assert_eq!(output, format!("{0}{0}{0}\n", PROMPT));
    }

    #[test]
    fn empty_line_prompts_again() {
        let (output, recorder, _) = session("\ne");
        assert_eq!(recorder.played.len(), 1);
        assert!(output.starts_with(&format!("{}{}\n{}", PROMPT, EMPTY_INPUT, PROMPT)));
    }

    #[test]
    fn bad_message_is_reported() {
        let (output, recorder, played) = session("a#\nok\n");
        assert_eq!(played, 1);
        assert_eq!(recorder.played.len(), 1);
        assert!(output.contains("Character '#' at position 1 has no morse code"));
    }
}
