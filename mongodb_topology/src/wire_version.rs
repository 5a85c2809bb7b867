//! Wire protocol version ranges and the compatibility check between the servers
//! in a snapshot and the range this crate can speak.

use serde::{Deserialize, Serialize};

use crate::Server;

/// Wire versions this crate is able to negotiate with.
pub const SUPPORTED_WIRE_VERSIONS: VersionRange = VersionRange::new(6, 21);

/// Inclusive range of wire protocol versions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct VersionRange {
    pub min: i32,
    pub max: i32,
}

impl VersionRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn includes(&self, version: i32) -> bool {
        self.min <= version && version <= self.max
    }
}

/// Returns a description of the first server whose advertised range does not overlap
/// `supported`, or `None` when every server that reported a range is usable.
pub fn compatibility_error(servers: &[Server], supported: VersionRange) -> Option<String> {
    servers.iter().find_map(|server| {
        let range = server.wire_version()?;
        if range.min > supported.max {
            Some(format!(
                "server at {} requires wire version {}, but this version of the driver only supports up to {}",
                server.address(),
                range.min,
                supported.max
            ))
        } else if range.max < supported.min {
            Some(format!(
                "server at {} reports wire version {}, but this version of the driver requires at least {}",
                server.address(),
                range.max,
                supported.min
            ))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::{Server, ServerAddress, ServerKind};

    use super::{compatibility_error, VersionRange, SUPPORTED_WIRE_VERSIONS};

    fn server(address: &str, range: Option<VersionRange>) -> Server {
        let server = Server::new(ServerAddress::new(address), ServerKind::ReplicaSetSecondary);
        match range {
            Some(range) => server.with_wire_version(range),
            None => server,
        }
    }

    #[test]
    fn includes_is_inclusive_on_both_ends() {
        let range = VersionRange::new(6, 8);

        assert!(range.includes(6));
        assert!(range.includes(8));
        assert!(!range.includes(5));
        assert!(!range.includes(9));
    }

    #[test]
    fn overlapping_ranges_are_compatible() {
        let servers = vec![
            server("a:1", Some(VersionRange::new(0, 6))),
            server("b:1", Some(VersionRange::new(21, 30))),
            server("c:1", None),
        ];

        assert_eq!(compatibility_error(&servers, SUPPORTED_WIRE_VERSIONS), None);
    }

    #[test]
    fn server_that_is_too_new_is_reported() {
        let servers = vec![server("a:1", Some(VersionRange::new(25, 30)))];

        let err = compatibility_error(&servers, VersionRange::new(6, 21)).unwrap();

        assert!(err.contains("a:1"));
        assert!(err.contains("requires wire version 25"));
        assert!(err.contains("up to 21"));
    }

    #[test]
    fn server_that_is_too_old_is_reported() {
        let servers = vec![
            server("a:1", Some(VersionRange::new(6, 8))),
            server("b:1", Some(VersionRange::new(0, 3))),
        ];

        let err = compatibility_error(&servers, VersionRange::new(6, 21)).unwrap();

        assert!(err.contains("b:1"));
        assert!(err.contains("reports wire version 3"));
        assert!(err.contains("at least 6"));
    }
}
