use std::collections::HashSet;

use tracing::instrument;

use crate::{
    wire_version::{compatibility_error, VersionRange},
    Server, Topology, TopologyError, TopologyKind,
};

/// Assembles a [`Topology`] snapshot. Used by the monitoring loop once per
/// discovery round.
#[derive(Debug, Default, Clone)]
pub struct TopologyBuilder {
    servers: Vec<Server>,
    set_name: String,
    kind: TopologyKind,
    session_timeout_minutes: u32,
    compatibility_err: Option<String>,
    supported_wire_versions: Option<VersionRange>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the server list. Order is preserved in the built snapshot.
    pub fn set_servers(mut self, servers: Vec<Server>) -> Self {
        self.servers = servers;
        self
    }

    pub fn add_server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    pub fn set_set_name(mut self, set_name: &str) -> Self {
        self.set_name = set_name.to_string();
        self
    }

    pub fn set_kind(mut self, kind: TopologyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn set_session_timeout_minutes(mut self, minutes: u32) -> Self {
        self.session_timeout_minutes = minutes;
        self
    }

    /// Marks the snapshot unusable. An empty message clears the flag.
    pub fn set_compatibility_err(mut self, err: &str) -> Self {
        self.compatibility_err = (!err.is_empty()).then(|| err.to_string());
        self
    }

    /// Derives the compatibility error from the servers' reported wire versions when
    /// none was set explicitly.
    pub fn check_wire_versions(mut self, supported: VersionRange) -> Self {
        self.supported_wire_versions = Some(supported);
        self
    }

    /// Builds the snapshot.
    ///
    /// Fails if two servers share an address, since the address is the identity key
    /// for diffing and equality. Can be called repeatedly so one builder can serve as
    /// a template.
    #[instrument(
        level = "debug",
        name = "Build Topology",
        skip(self),
        fields(kind = %self.kind, servers = self.servers.len())
    )]
    pub fn build(&self) -> Result<Topology, TopologyError> {
        let mut seen = HashSet::with_capacity(self.servers.len());
        for server in &self.servers {
            if !seen.insert(server.address().as_str()) {
                tracing::error!(
                    "Server `{}` was supplied more than once and a topology can't hold duplicates",
                    server.address()
                );
                return Err(TopologyError::DuplicateAddress(
                    server.address().to_string(),
                ));
            }
        }

        let compatibility_err = match (&self.compatibility_err, self.supported_wire_versions) {
            (Some(err), _) => Some(err.clone()),
            (None, Some(supported)) => {
                let err = compatibility_error(&self.servers, supported);
                if let Some(e) = &err {
                    tracing::warn!("Topology is incompatible: {}", e);
                }
                err
            }
            (None, None) => None,
        };

        Ok(Topology {
            servers: self.servers.clone(),
            set_name: self.set_name.clone(),
            kind: self.kind,
            session_timeout_minutes: self.session_timeout_minutes,
            compatibility_err,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use crate::{
        wire_version::{VersionRange, SUPPORTED_WIRE_VERSIONS},
        Server, ServerAddress, ServerKind, TopologyBuilder, TopologyError, TopologyKind,
    };

    fn server(address: &str, kind: ServerKind) -> Server {
        Server::new(ServerAddress::new(address), kind)
    }

    #[test]
    fn TopologyBuilder_build_keeps_every_field_and_server_order() {
        // Arrange
        let builder = TopologyBuilder::new()
            .set_kind(TopologyKind::ReplicaSetWithPrimary)
            .set_set_name("rs0")
            .set_session_timeout_minutes(30)
            .add_server(server("c:1", ServerKind::ReplicaSetSecondary))
            .add_server(server("a:1", ServerKind::ReplicaSetPrimary));

        // Act
        let topology = builder.build().unwrap();

        // Assert
        assert_eq!(topology.kind(), TopologyKind::ReplicaSetWithPrimary);
        assert_eq!(topology.set_name(), "rs0");
        assert_eq!(topology.session_timeout_minutes(), 30);
        assert_eq!(topology.compatibility_err(), None);
        let addresses = topology
            .servers()
            .iter()
            .map(|s| s.address().as_str())
            .collect::<Vec<_>>();
        assert_eq!(addresses, vec!["c:1", "a:1"]);
    }

    #[test]
    fn TopologyBuilder_build_fails_for_duplicate_addresses() {
        let result = TopologyBuilder::new()
            .set_servers(vec![
                server("a:1", ServerKind::ReplicaSetPrimary),
                server("b:1", ServerKind::ReplicaSetSecondary),
                server("a:1", ServerKind::ReplicaSetSecondary),
            ])
            .build();

        assert!(matches!(result, Err(TopologyError::DuplicateAddress(a)) if a == "a:1"));
    }

    #[test]
    fn TopologyBuilder_can_build_more_than_once() {
        let builder = TopologyBuilder::new()
            .set_kind(TopologyKind::Single)
            .add_server(server("a:1", ServerKind::Standalone));

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        assert!(first.equal(&second));
    }

    #[test]
    fn empty_compatibility_err_means_compatible() {
        let topology = TopologyBuilder::new()
            .set_compatibility_err("boom")
            .set_compatibility_err("")
            .build()
            .unwrap();

        assert!(topology.ensure_compatible().is_ok());
    }

    #[test]
    fn check_wire_versions_computes_compatibility_err() {
        let topology = TopologyBuilder::new()
            .set_kind(TopologyKind::ReplicaSetWithPrimary)
            .add_server(
                server("a:1", ServerKind::ReplicaSetPrimary)
                    .with_wire_version(VersionRange::new(0, 2)),
            )
            .check_wire_versions(SUPPORTED_WIRE_VERSIONS)
            .build()
            .unwrap();

        let err = topology.compatibility_err().unwrap();
        assert!(err.contains("a:1"));
        assert!(topology.ensure_compatible().is_err());
    }

    #[test]
    fn explicit_compatibility_err_wins_over_computed_one() {
        let topology = TopologyBuilder::new()
            .add_server(
                server("a:1", ServerKind::Standalone).with_wire_version(VersionRange::new(0, 2)),
            )
            .set_compatibility_err("negotiated elsewhere")
            .check_wire_versions(SUPPORTED_WIRE_VERSIONS)
            .build()
            .unwrap();

        assert_eq!(topology.compatibility_err(), Some("negotiated elsewhere"));
    }

    #[test]
    fn compatible_servers_leave_compatibility_err_unset() {
        let topology = TopologyBuilder::new()
            .add_server(
                server("a:1", ServerKind::Standalone).with_wire_version(VersionRange::new(6, 17)),
            )
            .check_wire_versions(SUPPORTED_WIRE_VERSIONS)
            .build()
            .unwrap();

        assert_eq!(topology.compatibility_err(), None);
    }
}
