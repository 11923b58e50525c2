// morse.txt -- text to morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `morsec` - the morse compiler, turns text into morse code audio.

use std::io::{self, Write};
use std::path::PathBuf;

use log::info;
use structopt::StructOpt;

use morse_txt::config::EncodingConfig;
use morse_txt::morse::{self, Encoder, MorseCodeTable};
use morse_txt::output::{sox::SoxSink, RawSink, Sink};
use morse_txt::prompt;
use morse_txt::synth::oscillator::WaveShape;

#[derive(Debug, StructOpt)]
#[structopt(name = "morsec", about = "Compiling text into morse code")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Pitch of the tone in Hz.
    #[structopt(short, long, default_value = "600")]
    frequency: f64,

    /// Length of a dot in seconds.
    #[structopt(short, long, default_value = "0.25")]
    unit: f64,

    /// Loudness in percent.
    #[structopt(long, default_value = "100")]
    volume: u32,

    /// Samples per second.
    #[structopt(short, long, default_value = "44100")]
    rate: u32,

    /// Shape of the tone, `sine` or `cosine`.
    #[structopt(long, default_value = "sine")]
    waveform: WaveShape,

    /// Output file (any sox-supported format). Audio is played directly if not given.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Write raw signed 16 bit little endian PCM to the output file, or stdout, without sox.
    #[structopt(long)]
    raw: bool,

    /// Dump the timing pattern of the message (`=` tone, `.` pause, one per unit).
    #[structopt(long, requires = "message")]
    #[allow(clippy::option_option)]
    dump_timings: Option<Option<PathBuf>>,

    /// The message. Messages are read interactively if not given.
    message: Option<String>,
}

impl Opt {
    fn config(&self) -> EncodingConfig {
        EncodingConfig {
            tone_frequency: self.frequency,
            time_unit: self.unit,
            volume: self.volume,
            sample_rate: self.rate,
            waveform: self.waveform,
        }
    }

    fn sink(&self) -> io::Result<Box<dyn Sink>> {
        Ok(match (&self.output, self.raw) {
            (None, false) => Box::new(SoxSink::player()),
            (Some(path), false) => Box::new(SoxSink::file(path.clone())),
            (None, true) => Box::new(RawSink::new(io::stdout())),
            (Some(path), true) => Box::new(RawSink::new(std::fs::File::create(path)?)),
        })
    }
}

fn invalid_input<E: std::fmt::Display>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).map_err(invalid_input)?;

    let config = opt.config();
    config.validate().map_err(invalid_input)?;
    let table = MorseCodeTable::global();
    let encoder = Encoder::new(table, config.clone());
    let mut sink = opt.sink()?;

    match &opt.message {
        Some(message) => {
            if let Some(dump_out) = &opt.dump_timings {
                let path = dump_out.clone().unwrap_or_else(|| "/dev/stdout".into());
                let characters = morse::encoder::message_timings(table, message, &config)
                    .map_err(invalid_input)?;
                let segments: Vec<_> = characters.into_iter().flatten().collect();
                let pattern = morse::timing::render_units(&segments, config.time_unit);
                let mut f = std::fs::File::create(path)?;
                writeln!(f, "{}", pattern)?;
            }
            let audio = encoder.encode(message).map_err(invalid_input)?;
            sink.play(&audio, config.sample_rate)
        }
        None => {
            let stdin = io::stdin();
            // keep prompts out of raw audio on stdout
            let prompt_out: Box<dyn io::Write> = if opt.raw && opt.output.is_none() {
                Box::new(io::stderr())
            } else {
                Box::new(io::stdout())
            };
            let played = prompt::run(&encoder, stdin.lock(), prompt_out, sink.as_mut())?;
            info!("played {} messages", played);
            Ok(())
        }
    }
}
