use crate::{
    constants::DEFAULT_PAYLOAD_CAPACITY,
    payload::{PayloadError, PayloadHandle, PayloadPool},
    types::{Direction, EndpointId, UpdatePhase},
};

use super::{frame_history_queue::FrameHistoryQueue, message_record::MessageRecord};

/// Owner of the frame history queues and the payload pool backing them.
/// The processor only sees this seam; applications may implement it over
/// their own storage or use [`MessageQueues`]
pub trait QueueContainer {
    /// The queue for a (direction, phase) pair, together with the pool its
    /// records' payloads live in
    fn frame(&mut self, direction: Direction, phase: UpdatePhase)
        -> (&mut FrameHistoryQueue, &mut PayloadPool);

    /// Whether the send path should coalesce records through the batcher
    fn batching_enabled(&self) -> bool;
}

/// Default [`QueueContainer`]: one inbound and one outbound queue per update
/// phase, sharing a single payload pool
pub struct MessageQueues {
    inbound: [FrameHistoryQueue; UpdatePhase::COUNT],
    outbound: [FrameHistoryQueue; UpdatePhase::COUNT],
    pool: PayloadPool,
    batching: bool,
}

impl MessageQueues {
    pub fn new(local_endpoint: EndpointId, batching: bool) -> Self {
        Self {
            inbound: std::array::from_fn(|i| {
                FrameHistoryQueue::new(Direction::Inbound, UpdatePhase::ALL[i], local_endpoint)
            }),
            outbound: std::array::from_fn(|i| {
                FrameHistoryQueue::new(Direction::Outbound, UpdatePhase::ALL[i], local_endpoint)
            }),
            pool: PayloadPool::new(DEFAULT_PAYLOAD_CAPACITY),
            batching,
        }
    }

    /// Copies `bytes` into the pool and queues the finished record under its
    /// own phase. `build` receives the acquired payload handle and size
    pub fn enqueue(
        &mut self,
        direction: Direction,
        bytes: &[u8],
        build: impl FnOnce(PayloadHandle, usize) -> MessageRecord,
    ) -> Result<(), PayloadError> {
        let handle = self.pool.acquire(bytes)?;
        let record = build(handle, bytes.len());
        let (queue, _) = self.frame(direction, record.phase);
        queue.enqueue(record);
        Ok(())
    }

    pub fn pool_mut(&mut self) -> &mut PayloadPool {
        &mut self.pool
    }

    pub fn pool(&self) -> &PayloadPool {
        &self.pool
    }
}

impl QueueContainer for MessageQueues {
    fn frame(
        &mut self,
        direction: Direction,
        phase: UpdatePhase,
    ) -> (&mut FrameHistoryQueue, &mut PayloadPool) {
        let queue = match direction {
            Direction::Inbound => &mut self.inbound[phase.index()],
            Direction::Outbound => &mut self.outbound[phase.index()],
        };
        (queue, &mut self.pool)
    }

    fn batching_enabled(&self) -> bool {
        self.batching
    }
}
