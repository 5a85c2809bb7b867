/*!
mongodb_topology models a point-in-time snapshot of a MongoDB deployment's
membership and answers the two questions a driver asks before every
operation: what changed since the previous snapshot, and is there a server
able to satisfy the requested read or write right now.

Nothing in here performs I/O. The heartbeat loop that produces successive
[`Topology`] snapshots and the transport that talks to individual servers live
elsewhere; this crate only computes over the values they hand in. Snapshots are
immutable once built, so they can be shared freely between threads.

# Example
```rust
use mongodb_topology::{
    diff_topology, ReadPrefMode, Server, ServerAddress, ServerKind, Topology, TopologyKind,
};

let primary = Server::new(ServerAddress::new("a:27017"), ServerKind::ReplicaSetPrimary);
let secondary = Server::new(ServerAddress::new("b:27017"), ServerKind::ReplicaSetSecondary);

let old = Topology::builder()
    .set_kind(TopologyKind::ReplicaSetWithPrimary)
    .add_server(primary.clone())
    .build()?;
let new = Topology::builder()
    .set_kind(TopologyKind::ReplicaSetWithPrimary)
    .set_servers(vec![primary, secondary])
    .build()?;

let diff = diff_topology(&old, &new);
assert_eq!(diff.added.len(), 1);
assert!(diff.removed.is_empty());

assert!(new.has_readable_server(&ReadPrefMode::Secondary));
assert!(!old.has_readable_server(&ReadPrefMode::Secondary));
assert!(new.has_writable_server());
# Ok::<(), mongodb_topology::TopologyError>(())
```
*/

mod read_pref;
mod server;
mod server_address;
mod server_kind;
mod topology;
mod topology_kind;

pub mod wire_version;

pub use read_pref::*;
pub use server::*;
pub use server_address::*;
pub use server_kind::*;
pub use topology::*;
pub use topology_kind::*;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
