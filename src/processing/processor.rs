use log::{debug, warn};

use crate::{
    batch::batcher::Batcher,
    messages::{
        message_kind::MessageKind, message_queues::QueueContainer, message_record::MessageRecord,
    },
    payload::PayloadPool,
    transport::Transport,
    types::{Direction, EndpointId, HostRole, UpdatePhase},
};

use super::{config::ProcessorConfig, handlers::MessageHandlers, telemetry::Telemetry};

/// Orchestrates one update cycle's worth of message traffic: drains the
/// inbound frame history queue for the current phase and dispatches each
/// record to its handler, and drains the outbound queue at the designated
/// send phase, batching or directly transmitting each record.
///
/// Holds no ambient globals: the queue container, handler table, and
/// transport are explicit collaborators threaded through each call, and the
/// role/endpoint/config context is fixed at construction. Per-record
/// failures are contained at the single-record boundary; every failure path
/// here degrades to drop-and-continue so one bad message can never stall
/// the drain.
pub struct Processor {
    role: HostRole,
    local_endpoint: EndpointId,
    config: ProcessorConfig,
    batcher: Batcher,
    telemetry: Telemetry,
}

impl Processor {
    pub fn new(role: HostRole, local_endpoint: EndpointId, config: ProcessorConfig) -> Self {
        Self {
            role,
            local_endpoint,
            config,
            batcher: Batcher::new(),
            telemetry: Telemetry::default(),
        }
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Receive pass, invoked once per phase by the scheduler. Drains the
    /// inbound queue for `phase` in enqueue order, dispatching each record
    /// through the handler table. `testing_mode` drains and accounts for
    /// records without invoking handlers, to exercise queue mechanics free
    /// of handler side effects.
    pub fn process_receive(
        &mut self,
        queues: &mut dyn QueueContainer,
        handlers: &mut dyn MessageHandlers,
        phase: UpdatePhase,
        testing_mode: bool,
    ) {
        let mut processed: u64 = 0;

        let (queue, pool) = queues.frame(Direction::Inbound, phase);
        if queue.is_dirty() {
            let mut item = queue.first_item();
            while let Some(record) = item {
                processed += 1;
                if !testing_mode {
                    self.dispatch(&record, pool, handlers);
                }
                item = queue.next_item();
            }
        }

        // release runs whether or not any dispatch succeeded
        queue.close(pool);

        if processed > 0 || queue.has_pending_loopback() {
            queue.advance();
        }

        if processed > 0 {
            debug!("Dispatched {} inbound records for {:?}", processed, phase);
        }
        self.telemetry.messages_processed += processed;
    }

    /// Send pass, invoked once per cycle at the designated late phase.
    /// Drains the outbound queue; records are batched per destination and
    /// channel when the container enables it, otherwise sent directly.
    /// `is_listening` is whether an active connection exists: without one,
    /// records are consumed from the queue and dropped silently.
    pub fn process_send(
        &mut self,
        queues: &mut dyn QueueContainer,
        transport: &mut dyn Transport,
        is_listening: bool,
    ) {
        let batching = queues.batching_enabled();
        let mut processed: u64 = 0;
        let mut loopback: Vec<(MessageRecord, Vec<u8>)> = Vec::new();

        {
            let (queue, pool) = queues.frame(Direction::Outbound, UpdatePhase::SEND_PHASE);
            let mut item = if queue.is_dirty() { queue.first_item() } else { None };
            while let Some(record) = item {
                processed += 1;
                match pool.get(record.payload) {
                    Some(payload) => self.send_record(
                        &record,
                        payload,
                        transport,
                        batching,
                        is_listening,
                        &mut loopback,
                    ),
                    None => warn!(
                        "Dropping outbound {:?} record: stale payload handle",
                        record.kind
                    ),
                }
                item = queue.next_item();
            }

            queue.close(pool);
            if processed > 0 {
                queue.advance();
            }
        }

        // leave nothing accumulated past the end of the phase
        if batching && is_listening && processed > 0 {
            let flushed = self.flush(transport, 0);
            if flushed > 0 {
                debug!("Forced {} batch flushes at end of phase", flushed);
            }
        }

        // self-addressed records re-enter through the inbound path instead
        // of crossing the transport
        for (record, bytes) in loopback {
            let (queue, pool) = queues.frame(Direction::Inbound, record.phase);
            match pool.acquire(&bytes) {
                Ok(handle) => {
                    let mut looped = record;
                    looped.payload = handle;
                    looped.payload_size = bytes.len();
                    queue.enqueue(looped);
                }
                Err(err) => {
                    warn!("Dropping loopback {:?} record: {}", record.kind, err);
                }
            }
        }
    }

    /// Dispatches one record through the handler table. Kinds are
    /// role-gated: a record arriving while the local endpoint is not acting
    /// in the expected role is an expected no-op, dropped without logging.
    /// A handler error is logged and contained here.
    fn dispatch(
        &self,
        record: &MessageRecord,
        pool: &PayloadPool,
        handlers: &mut dyn MessageHandlers,
    ) {
        let Some(payload) = pool.get(record.payload) else {
            warn!(
                "Dropping inbound {:?} record from endpoint {}: stale payload handle",
                record.kind, record.sender_id
            );
            return;
        };

        let sender = record.sender_id;
        let result = match record.kind {
            MessageKind::ServerCall => {
                if !self.role.acts_as_server() {
                    return;
                }
                handlers.server_call(sender, payload)
            }
            MessageKind::ConnectionRequest => {
                if !self.role.acts_as_server() {
                    return;
                }
                handlers.connection_request(sender, payload)
            }
            MessageKind::ClientCall => {
                if !self.role.acts_as_client() {
                    return;
                }
                handlers.client_call(sender, payload)
            }
            MessageKind::ConnectionApproved => {
                if !self.role.acts_as_client() {
                    return;
                }
                handlers.connection_approved(sender, payload, record.timestamp)
            }
            MessageKind::CreateObject => {
                if !self.role.acts_as_client() {
                    return;
                }
                handlers.create_object(sender, payload)
            }
            MessageKind::DestroyObject => {
                if !self.role.acts_as_client() {
                    return;
                }
                handlers.destroy_object(sender, payload)
            }
            MessageKind::ChangeOwner => {
                if !self.role.acts_as_client() {
                    return;
                }
                handlers.change_owner(sender, payload)
            }
            MessageKind::TimeSync => {
                if !self.role.acts_as_client() {
                    return;
                }
                handlers.time_sync(sender, payload, record.timestamp)
            }
        };

        if let Err(err) = result {
            warn!(
                "Dropping {:?} record from endpoint {}: {}",
                record.kind, sender, err
            );
        }
    }

    /// Routes one outbound record to each of its destinations. Records with
    /// an empty recipient list route on `sender_id` (command-style records
    /// carry their single target there); multicast records fan out, each
    /// destination accumulating independently.
    fn send_record(
        &mut self,
        record: &MessageRecord,
        payload: &[u8],
        transport: &mut dyn Transport,
        batching: bool,
        is_listening: bool,
        loopback: &mut Vec<(MessageRecord, Vec<u8>)>,
    ) {
        let single = [record.sender_id];
        let destinations: &[EndpointId] = if record.recipient_ids.is_empty() {
            &single
        } else {
            &record.recipient_ids
        };

        for &destination in destinations {
            if destination == self.local_endpoint {
                loopback.push((record.clone(), payload.to_vec()));
                continue;
            }

            if batching {
                // without a connection nothing would ever flush the stream
                if !is_listening {
                    continue;
                }
                match self
                    .batcher
                    .queue_item(destination, record.channel, payload)
                {
                    Ok(()) => self.telemetry.messages_sent += 1,
                    Err(err) => warn!(
                        "Dropping {:?} record for endpoint {}: {}",
                        record.kind, destination, err
                    ),
                }
            } else if is_listening {
                match transport.send(destination, payload, record.channel) {
                    Ok(()) => {
                        self.telemetry.messages_sent += 1;
                        self.telemetry.bytes_sent += payload.len() as u64;
                    }
                    Err(err) => warn!(
                        "Transport send of {:?} record to endpoint {} failed: {}",
                        record.kind, destination, err
                    ),
                }
            }
            // not listening and not batching: consumed, never transmitted
        }

        if batching && is_listening {
            // opportunistic flush so large backlogs drain incrementally
            self.flush(transport, self.config.batch_threshold_bytes);
        }
    }

    fn flush(&mut self, transport: &mut dyn Transport, threshold_bytes: usize) -> usize {
        let Self {
            batcher, telemetry, ..
        } = self;
        batcher.send_items(threshold_bytes, |destination, channel, bytes| {
            match transport.send(destination, bytes, channel) {
                Ok(()) => telemetry.bytes_sent += bytes.len() as u64,
                Err(err) => warn!(
                    "Transport send of batch to endpoint {} failed: {}",
                    destination, err
                ),
            }
        })
    }
}
