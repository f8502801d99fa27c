// Size thresholds for the send path

/// Accumulated bytes per destination+channel past which the batcher flushes
/// a stream mid-drain.
///
/// Rationale:
/// - Small calls that would each pay a full transport send are folded into
///   one packet, amortizing the per-send overhead under load
/// - The threshold bounds how much extra latency batching can add to any
///   single call: a stream never sits more than ~one threshold's worth of
///   slack before the end-of-phase forced flush clears it
pub const DEFAULT_BATCH_THRESHOLD_BYTES: usize = 512;

/// Capacity of each pooled payload buffer, one conservative UDP MTU's worth.
/// Payloads larger than this are rejected at enqueue time
pub const DEFAULT_PAYLOAD_CAPACITY: usize = 1200;
