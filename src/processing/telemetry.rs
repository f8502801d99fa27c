/// Observable counters kept by the processor. Recorded for diagnostics,
/// not load-bearing: no behavior reads them back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Telemetry {
    /// Records drained on the receive path (testing mode included)
    pub messages_processed: u64,
    /// Record-destination transmissions handed to the transport or batcher
    pub messages_sent: u64,
    /// Bytes actually written to the transport, batch framing included
    pub bytes_sent: u64,
}
