use super::error::BatchError;

/// Iterator over a received batched stream, yielding each framed payload in
/// the order it was queued. The symmetric counterpart to the framing
/// written by [`super::batcher::Batcher::queue_item`]: a little-endian
/// `u16` length prefix per payload.
///
/// A truncated stream yields an error item and then ends.
pub struct BatchReader<'a> {
    bytes: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> BatchReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            offset: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for BatchReader<'a> {
    type Item = Result<&'a [u8], BatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset == self.bytes.len() {
            return None;
        }

        let remaining = &self.bytes[self.offset..];
        if remaining.len() < 2 {
            self.failed = true;
            return Some(Err(BatchError::TruncatedHeader {
                offset: self.offset,
            }));
        }

        let length = u16::from_le_bytes([remaining[0], remaining[1]]) as usize;
        let body = &remaining[2..];
        if body.len() < length {
            self.failed = true;
            return Some(Err(BatchError::TruncatedFrame {
                expected: length,
                available: body.len(),
            }));
        }

        self.offset += 2 + length;
        Some(Ok(&body[..length]))
    }
}
