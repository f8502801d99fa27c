//! # RPC Relay
//! Per-update-phase message queueing, batching, and dispatch engine for an
//! RPC transport layer in a multiplayer networking runtime.
//!
//! The crate sits between application code issuing remote calls and a raw
//! byte transport: records are buffered per update phase in double-buffered
//! frame history queues, drained in deterministic order exactly once per
//! phase, coalesced per destination+channel past a byte threshold on the
//! send path, and dispatched with per-record fault containment on the
//! receive path. Single-threaded, phase-serialized by design.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod batch;
mod constants;
mod messages;
mod payload;
mod processing;
mod transport;
mod types;

pub use batch::{
    batch_reader::BatchReader,
    batcher::{Batcher, MAX_FRAME_BYTES},
    error::BatchError,
};
pub use constants::{DEFAULT_BATCH_THRESHOLD_BYTES, DEFAULT_PAYLOAD_CAPACITY};
pub use messages::{
    error::MessageError,
    frame_history_queue::FrameHistoryQueue,
    message_kind::MessageKind,
    message_queues::{MessageQueues, QueueContainer},
    message_record::MessageRecord,
};
pub use payload::{PayloadError, PayloadHandle, PayloadPool};
pub use processing::{
    config::ProcessorConfig, error::HandlerError, handlers::MessageHandlers,
    processor::Processor, telemetry::Telemetry,
};
pub use transport::{error::TransportError, Transport};
pub use types::{ChannelId, Direction, EndpointId, HostRole, UpdatePhase};
