// morse.txt -- text to morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Easy interface for getting sound to play using a sox subprocess.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info};

use super::{Sink, CHANNELS};
use crate::wave::SampleBuffer;

/// Where sox should send the audio.
#[derive(Debug, Clone, Copy)]
pub enum SoxTarget<'a> {
    /// Play on the default audio device.
    Play,
    /// Write to a file, the format is derived from its extension.
    File(&'a Path),
}

/// Run a sox process reading mono 16 bit PCM from the stream passed to `callback`.
/// Returns after sox has exited.
pub fn with_sox<R, F: FnOnce(&mut dyn io::Write) -> io::Result<R>>(
    sample_rate: u32,
    target: SoxTarget,
    callback: F,
) -> io::Result<R> {
    let mut command = match target {
        SoxTarget::Play => Command::new("play"),
        SoxTarget::File(_) => Command::new("sox"),
    };
    command
        .arg("--channels")
        .arg(format!("{}", CHANNELS))
        .arg("--rate")
        .arg(format!("{}", sample_rate))
        .arg("--type")
        .arg("s16")
        .arg("/dev/stdin");
    if let SoxTarget::File(path) = target {
        command.arg(path);
    }
    debug!("spawning {:?}", command);

    let mut player = command.stdin(Stdio::piped()).spawn()?;
    let mut audio_stream = player
        .stdin
        .take()
        .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "sox stdin unavailable"))?;

    let result = callback(&mut audio_stream);

    drop(audio_stream);
    let status = player.wait()?;
    if !status.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("sox exited with {}", status),
        ));
    }

    result
}

/// Hands every buffer to its own sox process.
#[derive(Debug, Clone, Default)]
pub struct SoxSink {
    outfile: Option<PathBuf>,
}

impl SoxSink {
    /// Plays on the speakers.
    pub fn player() -> Self {
        Self { outfile: None }
    }

    /// Renders into `path`, replacing it on every call.
    pub fn file(path: PathBuf) -> Self {
        Self {
            outfile: Some(path),
        }
    }

    fn target(&self) -> SoxTarget {
        match &self.outfile {
            None => SoxTarget::Play,
            Some(path) => SoxTarget::File(path),
        }
    }
}

impl Sink for SoxSink {
    fn play(&mut self, audio: &SampleBuffer, sample_rate: u32) -> io::Result<()> {
        info!(
            "playing {} samples ({:.2} seconds) at {} Hz",
            audio.len(),
            audio.duration_seconds(sample_rate),
            sample_rate
        );
        with_sox(sample_rate, self.target(), |audio_stream| {
            audio_stream.write_all(&audio.to_le_bytes())
        })?;
        info!("stopped");
        Ok(())
    }
}
