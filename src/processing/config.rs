use crate::constants::DEFAULT_BATCH_THRESHOLD_BYTES;

/// Numeric knobs for the processor's send pass. Set once at construction
/// and never mutated at runtime.
#[derive(Clone, Debug)]
pub struct ProcessorConfig {
    /// Accumulated bytes per destination+channel past which the batcher
    /// flushes mid-drain. The end-of-phase forced flush ignores this and
    /// clears everything, so the threshold only bounds how long a stream
    /// can grow within one pass
    pub batch_threshold_bytes: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            batch_threshold_bytes: DEFAULT_BATCH_THRESHOLD_BYTES,
        }
    }
}
