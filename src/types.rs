/// Numeric identifier of a connected endpoint (a client connection id, or
/// the id the local host is known by to its peers)
pub type EndpointId = u64;

/// Logical transport channel / class of service a record must be sent on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ChannelId(pub u8);

/// Whether a queue holds records received from the transport (awaiting
/// dispatch) or records produced locally (awaiting send)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Inbound,
    Outbound,
}

/// A discrete, ordered point within one host update cycle at which queued
/// records become eligible for processing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdatePhase {
    EarlyUpdate,
    FixedUpdate,
    Update,
    LateUpdate,
}

impl UpdatePhase {
    pub const COUNT: usize = 4;

    pub const ALL: [UpdatePhase; Self::COUNT] = [
        UpdatePhase::EarlyUpdate,
        UpdatePhase::FixedUpdate,
        UpdatePhase::Update,
        UpdatePhase::LateUpdate,
    ];

    /// The designated late phase at which the send pass runs
    pub const SEND_PHASE: UpdatePhase = UpdatePhase::LateUpdate;

    pub fn index(self) -> usize {
        match self {
            UpdatePhase::EarlyUpdate => 0,
            UpdatePhase::FixedUpdate => 1,
            UpdatePhase::Update => 2,
            UpdatePhase::LateUpdate => 3,
        }
    }
}

/// The role(s) the local endpoint is acting in. `Host` is a listen-server:
/// it acts as both a server and a locally-connected client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostRole {
    Client,
    Server,
    Host,
}

impl HostRole {
    pub fn acts_as_server(self) -> bool {
        matches!(self, HostRole::Server | HostRole::Host)
    }

    pub fn acts_as_client(self) -> bool {
        matches!(self, HostRole::Client | HostRole::Host)
    }
}
