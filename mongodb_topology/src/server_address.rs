use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::instrument;
use url::Host;

use crate::TopologyError;

/// Port assumed when an address does not carry one.
pub const DEFAULT_PORT: u16 = 27017;

/// The identity key of a server inside a [`Topology`](crate::Topology).
///
/// Two addresses are the same server iff their string forms match exactly, so
/// anything that came off the wire should go through [`ServerAddress::parse`]
/// first to get the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerAddress(String);

impl ServerAddress {
    /// Wraps the string as given, without canonicalization.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Produces the canonical form of a `host[:port]` string.
    ///
    /// The host is lowercased, IPv6 literals stay bracketed and the default port is
    /// appended when missing. Unix domain socket paths are passed through untouched.
    #[instrument(level = "trace", name = "Parse ServerAddress")]
    pub fn parse(address: &str) -> Result<Self, TopologyError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(TopologyError::InvalidAddress(address.to_string()));
        }

        if address.ends_with(".sock") {
            return Ok(Self::new(address));
        }

        let (host, port) = split_host_port(address)?;
        let host = Host::parse(host).map_err(|e| {
            tracing::debug!("Rejecting host `{}`. Caused by: {}", host, e);
            TopologyError::InvalidAddress(address.to_string())
        })?;

        Ok(Self(format!("{}:{}", host, port)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Host portion of the address, brackets included for IPv6 literals.
    pub fn host(&self) -> &str {
        match self.0.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {
                if host.starts_with('[') || !host.contains(':') {
                    host
                } else {
                    &self.0
                }
            }
            _ => &self.0,
        }
    }

    /// Port portion of the address, if one is present.
    pub fn port(&self) -> Option<u16> {
        let host = self.host();
        if host.len() == self.0.len() {
            return None;
        }
        self.0[host.len() + 1..].parse().ok()
    }
}

fn split_host_port(address: &str) -> Result<(&str, u16), TopologyError> {
    let invalid = || TopologyError::InvalidAddress(address.to_string());

    let (host, port) = if address.starts_with('[') {
        let end = address.find(']').ok_or_else(invalid)?;
        let (host, rest) = address.split_at(end + 1);
        match rest {
            "" => (host, None),
            _ => (host, Some(rest.strip_prefix(':').ok_or_else(invalid)?)),
        }
    } else {
        match address.rsplit_once(':') {
            // A bare IPv6 literal has to be bracketed to carry a port.
            Some((host, _)) if host.contains(':') => return Err(invalid()),
            Some((host, port)) => (host, Some(port)),
            None => (address, None),
        }
    };

    if host.is_empty() || host == "[]" {
        return Err(invalid());
    }

    let port = match port {
        Some(port) => port.parse::<u16>().map_err(|_| invalid())?,
        None => DEFAULT_PORT,
    };

    Ok((host, port))
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServerAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServerAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for ServerAddress {
    fn from(address: String) -> Self {
        Self(address)
    }
}
