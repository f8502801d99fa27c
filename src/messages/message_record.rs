use crate::{
    payload::PayloadHandle,
    types::{ChannelId, EndpointId, UpdatePhase},
};

use super::message_kind::MessageKind;

/// The unit of work moving through the pipeline: a tagged payload plus the
/// routing metadata needed to dispatch or transmit it.
///
/// The payload bytes live in a pooled buffer; the record only carries the
/// handle. The queue the record sits in owns that buffer and releases it
/// when its drain pass closes, so a record must never outlive the pass that
/// dequeued it.
#[derive(Clone, Debug)]
pub struct MessageRecord {
    /// Update-cycle phase this record is keyed to; determines which queue
    /// holds it and when it is processed
    pub phase: UpdatePhase,
    pub kind: MessageKind,
    /// Originating endpoint. On the direct-send path this doubles as the
    /// single routing target for records with no recipient list
    pub sender_id: EndpointId,
    /// Destination endpoints, populated only for multicast records;
    /// single-destination records route on `sender_id`
    pub recipient_ids: Vec<EndpointId>,
    pub channel: ChannelId,
    pub payload: PayloadHandle,
    /// Byte length of the payload, tracked for batching thresholds and
    /// telemetry
    pub payload_size: usize,
    /// Producer-side time, consumed by the kinds that carry one
    /// (`ConnectionApproved`, `TimeSync`)
    pub timestamp: f64,
}

impl MessageRecord {
    pub fn new(
        phase: UpdatePhase,
        kind: MessageKind,
        sender_id: EndpointId,
        channel: ChannelId,
        payload: PayloadHandle,
        payload_size: usize,
    ) -> Self {
        Self {
            phase,
            kind,
            sender_id,
            recipient_ids: Vec::new(),
            channel,
            payload,
            payload_size,
            timestamp: 0.0,
        }
    }

    pub fn with_recipients(mut self, recipient_ids: Vec<EndpointId>) -> Self {
        self.recipient_ids = recipient_ids;
        self
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whether `endpoint` is among this record's destinations
    pub fn addresses(&self, endpoint: EndpointId) -> bool {
        self.recipient_ids.contains(&endpoint)
    }
}
