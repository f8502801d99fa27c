//! End-to-end pipeline: application enqueues → receive dispatch → outbound
//! batching → transport → peer-side demultiplex → peer dispatch.

use rpc_relay::{
    BatchReader, ChannelId, Direction, HandlerError, HostRole, MessageHandlers, MessageKind,
    MessageQueues, MessageRecord, Processor, ProcessorConfig, Transport, TransportError,
    UpdatePhase,
};

const CHANNEL: ChannelId = ChannelId(0);
const SERVER: u64 = 1;
const CLIENT_A: u64 = 2;
const CLIENT_B: u64 = 3;

struct CollectingHandlers {
    calls: Vec<(MessageKind, u64, Vec<u8>)>,
}

impl CollectingHandlers {
    fn new() -> Self {
        Self { calls: Vec::new() }
    }

    fn push(&mut self, kind: MessageKind, sender: u64, payload: &[u8]) -> Result<(), HandlerError> {
        self.calls.push((kind, sender, payload.to_vec()));
        Ok(())
    }
}

impl MessageHandlers for CollectingHandlers {
    fn client_call(&mut self, sender: u64, payload: &[u8]) -> Result<(), HandlerError> {
        self.push(MessageKind::ClientCall, sender, payload)
    }
    fn server_call(&mut self, sender: u64, payload: &[u8]) -> Result<(), HandlerError> {
        self.push(MessageKind::ServerCall, sender, payload)
    }
    fn connection_request(&mut self, sender: u64, payload: &[u8]) -> Result<(), HandlerError> {
        self.push(MessageKind::ConnectionRequest, sender, payload)
    }
    fn connection_approved(
        &mut self,
        sender: u64,
        payload: &[u8],
        _timestamp: f64,
    ) -> Result<(), HandlerError> {
        self.push(MessageKind::ConnectionApproved, sender, payload)
    }
    fn create_object(&mut self, sender: u64, payload: &[u8]) -> Result<(), HandlerError> {
        self.push(MessageKind::CreateObject, sender, payload)
    }
    fn destroy_object(&mut self, sender: u64, payload: &[u8]) -> Result<(), HandlerError> {
        self.push(MessageKind::DestroyObject, sender, payload)
    }
    fn change_owner(&mut self, sender: u64, payload: &[u8]) -> Result<(), HandlerError> {
        self.push(MessageKind::ChangeOwner, sender, payload)
    }
    fn time_sync(
        &mut self,
        sender: u64,
        payload: &[u8],
        _timestamp: f64,
    ) -> Result<(), HandlerError> {
        self.push(MessageKind::TimeSync, sender, payload)
    }
}

#[derive(Default)]
struct CollectingTransport {
    sends: Vec<(u64, ChannelId, Vec<u8>)>,
}

impl Transport for CollectingTransport {
    fn send(&mut self, destination: u64, bytes: &[u8], channel: ChannelId) -> Result<(), TransportError> {
        self.sends.push((destination, channel, bytes.to_vec()));
        Ok(())
    }
}

fn enqueue(
    queues: &mut MessageQueues,
    direction: Direction,
    phase: UpdatePhase,
    kind: MessageKind,
    sender: u64,
    recipients: &[u64],
    bytes: &[u8],
) {
    queues
        .enqueue(direction, bytes, |payload, size| {
            MessageRecord::new(phase, kind, sender, CHANNEL, payload, size)
                .with_recipients(recipients.to_vec())
        })
        .unwrap();
}

#[test]
fn full_cycle_server_to_clients() {
    let _ = env_logger::builder().is_test(true).try_init();

    // --- server side: commands arrive from both clients at Update
    let mut server_queues = MessageQueues::new(SERVER, true);
    let mut server_handlers = CollectingHandlers::new();
    let mut server_transport = CollectingTransport::default();
    let mut server = Processor::new(HostRole::Server, SERVER, ProcessorConfig::default());

    enqueue(
        &mut server_queues,
        Direction::Inbound,
        UpdatePhase::Update,
        MessageKind::ServerCall,
        CLIENT_A,
        &[],
        b"fire",
    );
    enqueue(
        &mut server_queues,
        Direction::Inbound,
        UpdatePhase::Update,
        MessageKind::ServerCall,
        CLIENT_B,
        &[],
        b"move",
    );

    server.process_receive(&mut server_queues, &mut server_handlers, UpdatePhase::Update, false);
    assert_eq!(server_handlers.calls.len(), 2);
    assert_eq!(server_handlers.calls[0].1, CLIENT_A);

    // an empty phase stays an exact no-op
    server.process_receive(
        &mut server_queues,
        &mut server_handlers,
        UpdatePhase::LateUpdate,
        false,
    );
    assert_eq!(server.telemetry().messages_processed, 2);

    // --- server replies with multicast state updates, batched
    enqueue(
        &mut server_queues,
        Direction::Outbound,
        UpdatePhase::SEND_PHASE,
        MessageKind::ClientCall,
        SERVER,
        &[CLIENT_A, CLIENT_B],
        &[0x11; 300],
    );
    enqueue(
        &mut server_queues,
        Direction::Outbound,
        UpdatePhase::SEND_PHASE,
        MessageKind::ClientCall,
        SERVER,
        &[CLIENT_A, CLIENT_B],
        &[0x22; 300],
    );

    server.process_send(&mut server_queues, &mut server_transport, true);

    // 600 accumulated bytes per client crossed the 512 threshold mid-drain;
    // the forced flush at phase end had nothing left to add
    assert_eq!(server_transport.sends.len(), 2);
    assert_eq!(server_queues.pool().in_use(), 0);

    // --- wire: demultiplex each client's stream and deliver it
    let mut client_queues = MessageQueues::new(CLIENT_A, false);
    let mut client_handlers = CollectingHandlers::new();
    let mut client = Processor::new(HostRole::Client, CLIENT_A, ProcessorConfig::default());

    let (_, channel, stream) = server_transport
        .sends
        .iter()
        .find(|(destination, _, _)| *destination == CLIENT_A)
        .expect("a stream for client A");

    for frame in BatchReader::new(stream) {
        enqueue(
            &mut client_queues,
            Direction::Inbound,
            UpdatePhase::Update,
            MessageKind::ClientCall,
            SERVER,
            &[],
            frame.expect("well-formed frame"),
        );
        assert_eq!(*channel, CHANNEL);
    }

    client.process_receive(&mut client_queues, &mut client_handlers, UpdatePhase::Update, false);

    assert_eq!(client_handlers.calls.len(), 2);
    assert_eq!(client_handlers.calls[0].2, vec![0x11; 300]);
    assert_eq!(client_handlers.calls[1].2, vec![0x22; 300]);
    assert_eq!(client_queues.pool().in_use(), 0);
}
