use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{wire_version::VersionRange, ServerAddress, ServerKind};

/// Description of one deployment member, built from a heartbeat response.
///
/// A `Server` never changes after construction; a newer heartbeat produces a new
/// value. `==` compares every field, while [`Server::same_address`] compares the
/// identity key only.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Server {
    address: ServerAddress,
    kind: ServerKind,
    set_name: String,
    wire_version: Option<VersionRange>,
    last_error: Option<String>,
}

impl Server {
    pub fn new(address: ServerAddress, kind: ServerKind) -> Self {
        Self {
            address,
            kind,
            set_name: String::default(),
            wire_version: None,
            last_error: None,
        }
    }

    /// An `Unknown` server that failed its last heartbeat.
    pub fn unreachable(address: ServerAddress, error: impl Into<String>) -> Self {
        Self::new(address, ServerKind::Unknown).with_last_error(error)
    }

    pub fn with_set_name(mut self, set_name: impl Into<String>) -> Self {
        self.set_name = set_name.into();
        self
    }

    pub fn with_wire_version(mut self, wire_version: VersionRange) -> Self {
        self.wire_version = Some(wire_version);
        self
    }

    pub fn with_last_error(mut self, error: impl Into<String>) -> Self {
        self.last_error = Some(error.into());
        self
    }

    pub fn same_address(&self, other: &Server) -> bool {
        self.address == other.address
    }
}

// Getters
impl Server {
    pub fn address(&self) -> &ServerAddress {
        &self.address
    }

    pub fn kind(&self) -> ServerKind {
        self.kind
    }

    /// Replica set name reported by the member, empty when not applicable.
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    pub fn wire_version(&self) -> Option<VersionRange> {
        self.wire_version
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Addr: {}, Type: {}", self.address, self.kind)?;
        if let Some(error) = &self.last_error {
            write!(f, ", Last error: {}", error)?;
        }
        Ok(())
    }
}
