use thiserror::Error;

/// Errors that can occur during payload pool operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// Payload does not fit in a pooled buffer
    #[error("Payload of {size} bytes exceeds pooled buffer capacity of {capacity} bytes. Fragment the payload before queueing it")]
    PayloadTooLarge { size: usize, capacity: usize },
}

/// Handle to a buffer inside a [`PayloadPool`]. Plain index, cheap to copy;
/// the queue holding the record owns the underlying buffer and is the only
/// component allowed to release it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PayloadHandle(usize);

struct PayloadBuffer {
    bytes: Box<[u8]>,
    len: usize,
    in_use: bool,
}

/// Arena of fixed-capacity byte buffers backing the payload of every queued
/// record. A buffer is acquired when a record is built, read while the
/// record sits in a queue, and released when the queue closes its drain
/// pass. Single-threaded by design; the phase-serialized caller enforces
/// the acquire/release discipline.
pub struct PayloadPool {
    buffers: Vec<PayloadBuffer>,
    free: Vec<usize>,
    capacity: usize,
}

impl PayloadPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffers: Vec::new(),
            free: Vec::new(),
            capacity,
        }
    }

    /// Copies `bytes` into a pooled buffer, growing the pool if no freed
    /// buffer is available
    pub fn acquire(&mut self, bytes: &[u8]) -> Result<PayloadHandle, PayloadError> {
        if bytes.len() > self.capacity {
            return Err(PayloadError::PayloadTooLarge {
                size: bytes.len(),
                capacity: self.capacity,
            });
        }

        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.buffers.push(PayloadBuffer {
                    bytes: vec![0u8; self.capacity].into_boxed_slice(),
                    len: 0,
                    in_use: false,
                });
                self.buffers.len() - 1
            }
        };

        let buffer = &mut self.buffers[index];
        buffer.bytes[..bytes.len()].copy_from_slice(bytes);
        buffer.len = bytes.len();
        buffer.in_use = true;

        Ok(PayloadHandle(index))
    }

    /// Returns the bytes behind `handle`, or None if the handle is stale
    /// (already released, or never acquired from this pool)
    pub fn get(&self, handle: PayloadHandle) -> Option<&[u8]> {
        let buffer = self.buffers.get(handle.0)?;
        if !buffer.in_use {
            return None;
        }
        Some(&buffer.bytes[..buffer.len])
    }

    /// Returns the buffer behind `handle` to the free list. Releasing a
    /// stale handle is logged and ignored
    pub fn release(&mut self, handle: PayloadHandle) {
        match self.buffers.get_mut(handle.0) {
            Some(buffer) if buffer.in_use => {
                buffer.in_use = false;
                buffer.len = 0;
                self.free.push(handle.0);
            }
            _ => {
                log::warn!("Released stale payload handle {:?}", handle);
            }
        }
    }

    /// Count of buffers currently acquired
    pub fn in_use(&self) -> usize {
        self.buffers.len() - self.free.len()
    }
}
