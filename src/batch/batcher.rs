use std::collections::HashMap;

use log::trace;

use crate::types::{ChannelId, EndpointId};

use super::error::BatchError;

/// Framing limit implied by the 2-byte length prefix
pub const MAX_FRAME_BYTES: usize = u16::MAX as usize;

struct BatchStream {
    bytes: Vec<u8>,
    record_count: usize,
}

/// Accumulates outbound payloads per destination+channel into growing byte
/// streams, so many small sends bound for the same endpoint collapse into
/// one transport send.
///
/// Each appended payload is written as a little-endian `u16` length prefix
/// followed by the payload bytes; [`super::batch_reader::BatchReader`] is
/// the symmetric demultiplexer the receiving peer runs over a flushed
/// stream. A stream flushes once it outgrows the caller's threshold, or
/// unconditionally on a threshold of zero at end of phase.
pub struct Batcher {
    streams: HashMap<(EndpointId, ChannelId), BatchStream>,
}

impl Batcher {
    pub fn new() -> Self {
        Self {
            streams: HashMap::new(),
        }
    }

    /// Appends one framed payload to the stream for
    /// `(destination, channel)`, creating the stream lazily. No size policy
    /// here; flushing is the caller's decision via `send_items`
    pub fn queue_item(
        &mut self,
        destination: EndpointId,
        channel: ChannelId,
        payload: &[u8],
    ) -> Result<(), BatchError> {
        if payload.len() > MAX_FRAME_BYTES {
            return Err(BatchError::FrameTooLarge {
                size: payload.len(),
                limit: MAX_FRAME_BYTES,
            });
        }

        let stream = self
            .streams
            .entry((destination, channel))
            .or_insert_with(|| BatchStream {
                bytes: Vec::new(),
                record_count: 0,
            });
        stream.bytes.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        stream.bytes.extend_from_slice(payload);
        stream.record_count += 1;
        Ok(())
    }

    /// Invokes `send(destination, channel, stream)` once for every stream
    /// larger than `threshold_bytes`, then clears it. A threshold of zero
    /// flushes every non-empty stream. Returns the number of flushes
    pub fn send_items<F>(&mut self, threshold_bytes: usize, mut send: F) -> usize
    where
        F: FnMut(EndpointId, ChannelId, &[u8]),
    {
        let ready: Vec<(EndpointId, ChannelId)> = self
            .streams
            .iter()
            .filter(|(_, stream)| stream.bytes.len() > threshold_bytes)
            .map(|(key, _)| *key)
            .collect();

        for key in &ready {
            if let Some(stream) = self.streams.remove(key) {
                trace!(
                    "Flushing {} batched records ({} bytes) to endpoint {} on {:?}",
                    stream.record_count,
                    stream.bytes.len(),
                    key.0,
                    key.1
                );
                send(key.0, key.1, &stream.bytes);
            }
        }
        ready.len()
    }

    /// Whether any stream still holds unflushed bytes
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Unflushed bytes for one destination+channel
    pub fn pending_bytes(&self, destination: EndpointId, channel: ChannelId) -> usize {
        self.streams
            .get(&(destination, channel))
            .map_or(0, |stream| stream.bytes.len())
    }
}

impl Default for Batcher {
    fn default() -> Self {
        Self::new()
    }
}
