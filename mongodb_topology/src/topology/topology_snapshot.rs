use std::{collections::HashMap, fmt};

use serde::Serialize;

use crate::{Server, TopologyBuilder, TopologyError, TopologyKind};

use super::diff_topology;

/**
An immutable snapshot of the whole deployment.

Snapshots are produced once per discovery round through [`TopologyBuilder`] and
replaced wholesale by the next one. There are no mutators, so a snapshot can be
shared across threads (for example behind an `Arc`) while the next one is
being assembled.

Server order is whatever the producer supplied. It is kept for rendering but
carries no meaning for [`Topology::equal`] or the diff functions.
*/
#[derive(Debug, Clone, Default, Serialize)]
pub struct Topology {
    pub(crate) servers: Vec<Server>,
    pub(crate) set_name: String,
    pub(crate) kind: TopologyKind,
    pub(crate) session_timeout_minutes: u32,
    pub(crate) compatibility_err: Option<String>,
}

impl Topology {
    pub fn builder() -> TopologyBuilder {
        TopologyBuilder::default()
    }

    /// Looks a server up by its address string. Linear in the number of servers.
    pub fn server(&self, address: impl AsRef<str>) -> Option<&Server> {
        let address = address.as_ref();
        self.servers
            .iter()
            .find(|server| server.address().as_str() == address)
    }

    /// Returns an error if the deployment speaks a wire protocol range this crate
    /// cannot use. Callers must check this before selecting a server; the
    /// availability checks do not look at it.
    pub fn ensure_compatible(&self) -> Result<(), TopologyError> {
        match &self.compatibility_err {
            Some(err) => Err(TopologyError::IncompatibleWireVersion(err.clone())),
            None => Ok(()),
        }
    }

    /// Compares two snapshots for change detection.
    ///
    /// Only membership, per-server state and the topology kind take part. The set
    /// name, the session timeout and the compatibility error are ignored.
    pub fn equal(&self, other: &Topology) -> bool {
        if !diff_topology(self, other).is_empty() {
            return false;
        }

        if self.kind != other.kind {
            return false;
        }

        let ours = by_address(&self.servers);
        let theirs = by_address(&other.servers);

        if ours.len() != theirs.len() {
            return false;
        }

        ours.iter()
            .all(|(address, server)| theirs.get(address) == Some(server))
    }
}

fn by_address(servers: &[Server]) -> HashMap<&str, &Server> {
    servers
        .iter()
        .map(|server| (server.address().as_str(), server))
        .collect()
}

// Getters
impl Topology {
    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// Replica set name, empty for standalone and sharded deployments.
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    pub fn kind(&self) -> TopologyKind {
        self.kind
    }

    pub fn session_timeout_minutes(&self) -> u32 {
        self.session_timeout_minutes
    }

    pub fn compatibility_err(&self) -> Option<&str> {
        self.compatibility_err.as_deref()
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, Servers: [", self.kind)?;
        for server in &self.servers {
            write!(f, "{{ {} }}, ", server)?;
        }
        write!(f, "]")
    }
}
