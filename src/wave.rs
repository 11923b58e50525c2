//! This is the namespace for all parts dealing with data in sampled waves.

/// Largest amplitude a sample may take. The negative bound is symmetric,
/// so `i16::MIN` is never produced.
pub const MAX_AMPLITUDE: i16 = 32767;

/// A buffer holding mono 16 bit PCM audio.
///
/// Buffers only grow while a message is being assembled and are handed
/// out as a whole afterwards.
///
/// ```
/// use morse_txt::wave::*;
///
/// let mut buffer = SampleBuffer::new();
/// buffer.append(SampleBuffer::from_samples(vec![1, -2]));
/// buffer.append(SampleBuffer::from_samples(vec![3]));
/// assert_eq!(buffer.samples(), &[1, -2, 3]);
/// assert_eq!(buffer.byte_len(), 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    pub fn from_samples(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// Size of the buffer in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Size of the buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * std::mem::size_of::<i16>()
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &i16> {
        self.samples.iter()
    }

    /// Move all samples of `other` to the end of this buffer.
    pub fn append(&mut self, mut other: SampleBuffer) {
        self.samples.append(&mut other.samples);
    }

    /// Playback length of the buffer at the given sample rate.
    pub fn duration_seconds(&self, sample_rate: u32) -> f64 {
        self.len() as f64 / sample_rate as f64
    }

    /// Copy the samples to bytes in little endian order.
    ///
    /// Returns the number of samples that were actually copied.
    /// Might be less than the number of input samples if the output buffer was not large enough.
    pub fn copy_bytes_to(&self, bytes: &mut [u8]) -> usize {
        let mut processed = 0;
        for (sample, target) in self.samples.iter().zip(bytes.chunks_exact_mut(2)) {
            target.copy_from_slice(&sample.to_le_bytes());
            processed += 1;
        }
        processed
    }

    /// The whole buffer as little endian bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.byte_len()];
        self.copy_bytes_to(&mut bytes);
        bytes
    }
}
