use crate::core::{
    SampleRate, StreamInfo, UpdError, UpdResult, BYTES_PER_MARKER, CODES_PER_BYTE,
};

/// framing reader for upd7759 streams
///
/// Walks the marker layout only. Codes are counted, never turned back into PCM.
pub struct Reader;

impl Reader {
    /// new reader
    pub fn new() -> Self {
        Reader
    }

    /// read and check the framing of a stream
    pub fn read(&self, data: &[u8]) -> UpdResult<StreamInfo> {
        let (&marker, body) = data.split_first().ok_or(UpdError::Truncated)?;
        let sample_rate = SampleRate::from_marker(marker).ok_or(UpdError::UnknownMarker(marker))?;

        let mut data_bytes = 0usize;
        let mut marker_count = 1usize;

        // every block is 256 data bytes followed by a marker; the last one
        // may be short or end right before its marker
        for (block_idx, block) in body.chunks(BYTES_PER_MARKER + 1).enumerate() {
            if block.len() <= BYTES_PER_MARKER {
                data_bytes += block.len();
                continue;
            }

            data_bytes += BYTES_PER_MARKER;

            let found = block[BYTES_PER_MARKER];
            if found != marker {
                return Err(UpdError::MarkerMismatch {
                    offset: 1 + block_idx * (BYTES_PER_MARKER + 1) + BYTES_PER_MARKER,
                    expected: marker,
                    found,
                });
            }
            marker_count += 1;
        }

        let max_codes = data_bytes * CODES_PER_BYTE;

        Ok(StreamInfo {
            sample_rate,
            marker,
            data_bytes,
            marker_count,
            max_codes,
            duration_secs: max_codes as f64 / sample_rate.hz() as f64,
            stream_size: data.len(),
        })
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}
