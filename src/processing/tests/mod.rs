#![cfg(test)]


use crate::{
    messages::{
        message_kind::MessageKind, message_queues::MessageQueues, message_record::MessageRecord,
    },
    processing::{error::HandlerError, handlers::MessageHandlers},
    transport::{error::TransportError, Transport},
    types::{ChannelId, Direction, EndpointId, UpdatePhase},
};

pub const CHANNEL: ChannelId = ChannelId(0);

/// Handler table that records every invocation, optionally failing on
/// payloads it was told to reject
pub struct RecordingHandlers {
    pub calls: Vec<(MessageKind, EndpointId, Vec<u8>)>,
    pub failing_payloads: Vec<Vec<u8>>,
    pub last_timestamp: Option<f64>,
}

impl RecordingHandlers {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            failing_payloads: Vec::new(),
            last_timestamp: None,
        }
    }

    fn record(
        &mut self,
        kind: MessageKind,
        sender: EndpointId,
        payload: &[u8],
    ) -> Result<(), HandlerError> {
        self.calls.push((kind, sender, payload.to_vec()));
        if self.failing_payloads.iter().any(|p| p == payload) {
            return Err(HandlerError::Rejected {
                reason: "test handler told to fail".to_string(),
            });
        }
        Ok(())
    }
}

impl MessageHandlers for RecordingHandlers {
    fn client_call(&mut self, sender: EndpointId, payload: &[u8]) -> Result<(), HandlerError> {
        self.record(MessageKind::ClientCall, sender, payload)
    }

    fn server_call(&mut self, sender: EndpointId, payload: &[u8]) -> Result<(), HandlerError> {
        self.record(MessageKind::ServerCall, sender, payload)
    }

    fn connection_request(
        &mut self,
        sender: EndpointId,
        payload: &[u8],
    ) -> Result<(), HandlerError> {
        self.record(MessageKind::ConnectionRequest, sender, payload)
    }

    fn connection_approved(
        &mut self,
        sender: EndpointId,
        payload: &[u8],
        timestamp: f64,
    ) -> Result<(), HandlerError> {
        self.last_timestamp = Some(timestamp);
        self.record(MessageKind::ConnectionApproved, sender, payload)
    }

    fn create_object(&mut self, sender: EndpointId, payload: &[u8]) -> Result<(), HandlerError> {
        self.record(MessageKind::CreateObject, sender, payload)
    }

    fn destroy_object(&mut self, sender: EndpointId, payload: &[u8]) -> Result<(), HandlerError> {
        self.record(MessageKind::DestroyObject, sender, payload)
    }

    fn change_owner(&mut self, sender: EndpointId, payload: &[u8]) -> Result<(), HandlerError> {
        self.record(MessageKind::ChangeOwner, sender, payload)
    }

    fn time_sync(
        &mut self,
        sender: EndpointId,
        payload: &[u8],
        timestamp: f64,
    ) -> Result<(), HandlerError> {
        self.last_timestamp = Some(timestamp);
        self.record(MessageKind::TimeSync, sender, payload)
    }
}

/// Transport that records every send
pub struct RecordingTransport {
    pub sends: Vec<(EndpointId, ChannelId, Vec<u8>)>,
    pub fail_all: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            sends: Vec::new(),
            fail_all: false,
        }
    }
}

impl Transport for RecordingTransport {
    fn send(
        &mut self,
        destination: EndpointId,
        bytes: &[u8],
        channel: ChannelId,
    ) -> Result<(), TransportError> {
        if self.fail_all {
            return Err(TransportError::ConnectionClosed { destination });
        }
        self.sends.push((destination, channel, bytes.to_vec()));
        Ok(())
    }
}

pub fn enqueue_inbound(
    queues: &mut MessageQueues,
    phase: UpdatePhase,
    kind: MessageKind,
    sender: EndpointId,
    bytes: &[u8],
) {
    queues
        .enqueue(Direction::Inbound, bytes, |payload, size| {
            MessageRecord::new(phase, kind, sender, CHANNEL, payload, size)
        })
        .unwrap();
}

pub fn enqueue_outbound(
    queues: &mut MessageQueues,
    kind: MessageKind,
    sender: EndpointId,
    recipients: &[EndpointId],
    bytes: &[u8],
) {
    queues
        .enqueue(Direction::Outbound, bytes, |payload, size| {
            MessageRecord::new(UpdatePhase::SEND_PHASE, kind, sender, CHANNEL, payload, size)
                .with_recipients(recipients.to_vec())
        })
        .unwrap();
}
