//! Places where finished audio can go.

pub mod sox;

use std::io;

use log::info;

use crate::wave::SampleBuffer;

/// Number of channels of all generated audio.
pub const CHANNELS: u16 = 1;

/// Consumes finished audio, e.g. by playing it.
///
/// `play` returns once the audio has been fully consumed.
pub trait Sink {
    fn play(&mut self, audio: &SampleBuffer, sample_rate: u32) -> io::Result<()>;
}

/// Writes raw signed 16 bit little endian samples to a stream.
pub struct RawSink<W> {
    writer: W,
}

impl<W: io::Write> RawSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Sink for RawSink<W> {
    fn play(&mut self, audio: &SampleBuffer, sample_rate: u32) -> io::Result<()> {
        info!(
            "writing {} samples of raw PCM at {} Hz, {} channel(s)",
            audio.len(),
            sample_rate,
            CHANNELS
        );
        self.writer.write_all(&audio.to_le_bytes())?;
        self.writer.flush()
    }
}
