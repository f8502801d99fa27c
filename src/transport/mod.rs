pub mod error;

use crate::types::{ChannelId, EndpointId};

use error::TransportError;

/// The raw byte-oriented transport seam. Implementations own connection
/// management, reliability, and encryption; this crate only hands them
/// contiguous byte ranges addressed to numeric endpoints over logical
/// channels.
pub trait Transport {
    fn send(
        &mut self,
        destination: EndpointId,
        bytes: &[u8],
        channel: ChannelId,
    ) -> Result<(), TransportError>;
}
