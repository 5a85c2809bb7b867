use std::fmt;

use serde::{Deserialize, Serialize};

/// The shape of the deployment as a whole.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TopologyKind {
    Single,
    ReplicaSet,
    ReplicaSetNoPrimary,
    ReplicaSetWithPrimary,
    Sharded,
    #[default]
    Unknown,
}

impl TopologyKind {
    pub fn is_replica_set(&self) -> bool {
        matches!(
            self,
            TopologyKind::ReplicaSet
                | TopologyKind::ReplicaSetNoPrimary
                | TopologyKind::ReplicaSetWithPrimary
        )
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TopologyKind::Single => "Single",
            TopologyKind::ReplicaSet => "ReplicaSet",
            TopologyKind::ReplicaSetNoPrimary => "ReplicaSetNoPrimary",
            TopologyKind::ReplicaSetWithPrimary => "ReplicaSetWithPrimary",
            TopologyKind::Sharded => "Sharded",
            TopologyKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::TopologyKind;

    #[test]
    fn replica_set_kinds_are_recognized() {
        assert!(TopologyKind::ReplicaSet.is_replica_set());
        assert!(TopologyKind::ReplicaSetNoPrimary.is_replica_set());
        assert!(TopologyKind::ReplicaSetWithPrimary.is_replica_set());
        assert!(!TopologyKind::Single.is_replica_set());
        assert!(!TopologyKind::Sharded.is_replica_set());
        assert!(!TopologyKind::Unknown.is_replica_set());
    }

    #[test]
    fn kind_round_trips_through_json_by_variant_name() {
        let json = serde_json::to_string(&TopologyKind::ReplicaSetNoPrimary).unwrap();
        assert_eq!(json, "\"ReplicaSetNoPrimary\"");

        let kind: TopologyKind = serde_json::from_str("\"Sharded\"").unwrap();
        assert_eq!(kind, TopologyKind::Sharded);
    }
}
