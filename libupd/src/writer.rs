use crate::core::{SampleRate, BYTES_PER_MARKER};

/// byte writer for upd7759 streams
///
/// Packs 4-bit codes two per byte, high nibble first, and repeats the
/// frequency marker after every [`BYTES_PER_MARKER`] data bytes.
pub struct Writer {
    buffer: Vec<u8>,
    marker: u8,
    pending: Option<u8>,
    since_marker: usize,
}

// never empty: the marker goes in on construction
#[allow(clippy::len_without_is_empty)]
impl Writer {
    /// new writer, the marker is written immediately
    pub fn new(sample_rate: SampleRate) -> Self {
        Self::with_capacity(sample_rate, 0)
    }

    /// new writer sized for `codes` codes
    pub fn with_capacity(sample_rate: SampleRate, codes: usize) -> Self {
        let data_bytes = codes.div_ceil(2);
        let markers = 1 + data_bytes / BYTES_PER_MARKER;

        let mut buffer = Vec::with_capacity(data_bytes + markers);
        buffer.push(sample_rate.marker());

        Writer {
            buffer,
            marker: sample_rate.marker(),
            pending: None,
            since_marker: 0,
        }
    }

    /// queue one code, only the low 4 bits are kept
    pub fn push_code(&mut self, code: u8) {
        match self.pending.take() {
            None => self.pending = Some(code & 0x0f),
            Some(high) => {
                self.buffer.push((high << 4) | (code & 0x0f));
                self.since_marker += 1;

                if self.since_marker == BYTES_PER_MARKER {
                    self.since_marker = 0;
                    self.buffer.push(self.marker);
                }
            }
        }
    }

    /// bytes written so far, markers included
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// purge a dangling high nibble and hand the stream over
    pub fn finish(mut self) -> Vec<u8> {
        if let Some(high) = self.pending.take() {
            self.buffer.push(high << 4);
        }
        self.buffer
    }
}
