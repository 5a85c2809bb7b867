use crate::{ReadPrefMode, ReadPreference, Server, ServerKind, Topology, TopologyKind};

impl Topology {
    /// Returns true if some server in the snapshot can take a read with the given
    /// preference.
    ///
    /// Single and sharded deployments only need any recognized member, whatever the
    /// mode. Replica sets need a member whose role fits the mode. When no primary is
    /// known, a primary-only read is refused outright and so is an invalid read
    /// preference; with a known primary the validity of the preference is not
    /// consulted.
    ///
    /// This does not look at [`Topology::compatibility_err`]; check
    /// [`Topology::ensure_compatible`] first.
    pub fn has_readable_server(&self, read_pref: &impl ReadPreference) -> bool {
        match self.kind {
            TopologyKind::Single | TopologyKind::Sharded => {
                has_available_server(&self.servers, None)
            }
            TopologyKind::ReplicaSetWithPrimary => {
                has_available_server(&self.servers, read_pref.mode())
            }
            TopologyKind::ReplicaSetNoPrimary | TopologyKind::ReplicaSet => {
                if read_pref.mode() == Some(ReadPrefMode::Primary) {
                    return false;
                }
                if !read_pref.is_valid() {
                    return false;
                }
                has_available_server(&self.servers, read_pref.mode())
            }
            TopologyKind::Unknown => false,
        }
    }

    /// Returns true if some server in the snapshot can take a write.
    pub fn has_writable_server(&self) -> bool {
        self.has_readable_server(&ReadPrefMode::Primary)
    }
}

/// `None` stands for an unspecified mode, which any recognized member satisfies.
fn has_available_server(servers: &[Server], mode: Option<ReadPrefMode>) -> bool {
    let eligible = |kind: ServerKind| match mode {
        Some(ReadPrefMode::Primary) => kind == ServerKind::ReplicaSetPrimary,
        Some(
            ReadPrefMode::PrimaryPreferred
            | ReadPrefMode::SecondaryPreferred
            | ReadPrefMode::Nearest,
        ) => matches!(
            kind,
            ServerKind::ReplicaSetPrimary | ServerKind::ReplicaSetSecondary
        ),
        Some(ReadPrefMode::Secondary) => kind == ServerKind::ReplicaSetSecondary,
        None => kind != ServerKind::Unknown,
    };

    servers.iter().any(|server| eligible(server.kind()))
}
