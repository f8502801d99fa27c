use log::trace;

use crate::{
    payload::PayloadPool,
    types::{Direction, EndpointId, UpdatePhase},
};

use super::message_record::MessageRecord;

#[derive(Default)]
struct FrameBuffer {
    records: Vec<MessageRecord>,
    /// At least one record enqueued since this buffer was last cleared
    dirty: bool,
    /// At least one enqueued record addresses the local endpoint
    loopback: bool,
}

impl FrameBuffer {
    fn push(&mut self, record: MessageRecord, local_endpoint: EndpointId) {
        self.dirty = true;
        if record.addresses(local_endpoint) {
            self.loopback = true;
        }
        self.records.push(record);
    }

    fn clear(&mut self, pool: &mut PayloadPool) {
        for record in self.records.drain(..) {
            pool.release(record.payload);
        }
        self.dirty = false;
        self.loopback = false;
    }
}

/// Double-buffered, phase-scoped ordered queue of message records; one per
/// (direction, phase) pair.
///
/// "Current" is the buffer being drained; "next" accepts records that arrive
/// mid-drain (loopback self-sends triggered while processing) so they are
/// deferred to the following pass instead of being observed mid-iteration.
/// Records are drained strictly in enqueue order, exactly once, via the
/// `first_item`/`next_item` cursor; `close` returns every drained payload to
/// the pool; `advance` swaps the buffer pair.
pub struct FrameHistoryQueue {
    direction: Direction,
    phase: UpdatePhase,
    local_endpoint: EndpointId,
    current: FrameBuffer,
    next: FrameBuffer,
    cursor: usize,
    draining: bool,
}

impl FrameHistoryQueue {
    pub fn new(direction: Direction, phase: UpdatePhase, local_endpoint: EndpointId) -> Self {
        Self {
            direction,
            phase,
            local_endpoint,
            current: FrameBuffer::default(),
            next: FrameBuffer::default(),
            cursor: 0,
            draining: false,
        }
    }

    /// Appends a record. Lands in "next" while a drain of "current" is in
    /// progress, otherwise in "current"
    pub fn enqueue(&mut self, record: MessageRecord) {
        trace!(
            "Queueing {:?} record for {:?} {:?} (mid-drain: {})",
            record.kind,
            self.direction,
            self.phase,
            self.draining
        );
        if self.draining {
            self.next.push(record, self.local_endpoint);
        } else {
            self.current.push(record, self.local_endpoint);
        }
    }

    /// Begins a drain pass and returns the first record, or None if the
    /// current buffer is empty
    pub fn first_item(&mut self) -> Option<MessageRecord> {
        self.draining = true;
        self.cursor = 0;
        self.current.records.first().cloned()
    }

    /// Returns the next record of the pass begun by `first_item`, or None
    /// once the current buffer is exhausted
    pub fn next_item(&mut self) -> Option<MessageRecord> {
        self.cursor += 1;
        self.current.records.get(self.cursor).cloned()
    }

    /// Ends the drain pass: returns every payload held by the current buffer
    /// to the pool, clears the buffer and its flags, and resets the cursor.
    /// Runs once per pass regardless of how dispatch went, so buffer release
    /// never depends on successful processing
    pub fn close(&mut self, pool: &mut PayloadPool) {
        self.current.clear(pool);
        self.cursor = 0;
        self.draining = false;
    }

    /// Swaps "current" and "next", making mid-drain arrivals visible to the
    /// following pass. Swapping an empty pair is a harmless no-op; callers
    /// gate on `is_dirty`/`has_pending_loopback` to avoid the churn
    pub fn advance(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// At least one record is waiting in the current buffer
    pub fn is_dirty(&self) -> bool {
        self.current.dirty
    }

    /// The next buffer already holds a self-addressed record that must
    /// become visible next pass
    pub fn has_pending_loopback(&self) -> bool {
        self.next.loopback
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> UpdatePhase {
        self.phase
    }
}
