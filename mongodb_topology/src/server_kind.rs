use std::fmt;

use serde::{Deserialize, Serialize};

/// The role a single member plays in the deployment, as reported by its last heartbeat.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ServerKind {
    Standalone,
    Mongos,
    ReplicaSetPrimary,
    ReplicaSetSecondary,
    ReplicaSetArbiter,
    ReplicaSetGhost,
    /// A replica set member that is neither primary, secondary nor arbiter,
    /// e.g. one that is still starting up or recovering.
    ReplicaSetOtherMember,
    #[default]
    Unknown,
}

impl ServerKind {
    pub fn is_replica_set_member(&self) -> bool {
        matches!(
            self,
            ServerKind::ReplicaSetPrimary
                | ServerKind::ReplicaSetSecondary
                | ServerKind::ReplicaSetArbiter
                | ServerKind::ReplicaSetGhost
                | ServerKind::ReplicaSetOtherMember
        )
    }

    /// Whether the member can serve reads or writes at all.
    pub fn is_data_bearing(&self) -> bool {
        matches!(
            self,
            ServerKind::Standalone
                | ServerKind::Mongos
                | ServerKind::ReplicaSetPrimary
                | ServerKind::ReplicaSetSecondary
        )
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServerKind::Standalone => "Standalone",
            ServerKind::Mongos => "Mongos",
            ServerKind::ReplicaSetPrimary => "RSPrimary",
            ServerKind::ReplicaSetSecondary => "RSSecondary",
            ServerKind::ReplicaSetArbiter => "RSArbiter",
            ServerKind::ReplicaSetGhost => "RSGhost",
            ServerKind::ReplicaSetOtherMember => "RSMember",
            ServerKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}
