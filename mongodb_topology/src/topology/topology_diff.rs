use std::collections::HashSet;

use serde::Serialize;
use tracing::instrument;

use crate::{Server, Topology};

/// Servers that appeared in, or disappeared from, a newer snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopologyDiff {
    pub added: Vec<Server>,
    pub removed: Vec<Server>,
}

impl TopologyDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Addresses that differ between a snapshot and a raw host list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostlistDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl HostlistDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Computes which servers the monitoring loop has to start and stop watching when
/// moving from `old` to `new`. Servers are matched by address only; both output lists
/// follow the order of the snapshot they were taken from.
#[instrument(level = "trace", skip_all)]
pub fn diff_topology(old: &Topology, new: &Topology) -> TopologyDiff {
    let mut remaining = old
        .servers()
        .iter()
        .map(|s| s.address().as_str())
        .collect::<HashSet<_>>();

    let added = new
        .servers()
        .iter()
        .filter(|s| !remaining.remove(s.address().as_str()))
        .cloned()
        .collect::<Vec<_>>();

    let removed = old
        .servers()
        .iter()
        .filter(|s| remaining.contains(s.address().as_str()))
        .cloned()
        .collect::<Vec<_>>();

    tracing::trace!(
        "Topology diff: {} added, {} removed",
        added.len(),
        removed.len()
    );

    TopologyDiff { added, removed }
}

impl Topology {
    /// Same as [`diff_topology`] with `self` as the older snapshot.
    pub fn diff(&self, newer: &Topology) -> TopologyDiff {
        diff_topology(self, newer)
    }

    /// Reconciles a freshly resolved host list (seed list or SRV records) against the
    /// servers this snapshot tracks.
    ///
    /// `added` keeps the host list's order; `removed` keeps this snapshot's order and
    /// names each address once.
    #[instrument(level = "trace", skip_all, fields(hosts = hostlist.len()))]
    pub fn diff_hostlist<T>(&self, hostlist: &[T]) -> HostlistDiff
    where
        T: AsRef<str>,
    {
        let mut remaining = self
            .servers()
            .iter()
            .map(|s| s.address().as_str())
            .collect::<HashSet<_>>();

        let mut added = Vec::new();
        for address in hostlist {
            let address = address.as_ref();
            if !remaining.remove(address) {
                added.push(address.to_string());
            }
        }

        let removed = self
            .servers()
            .iter()
            .map(|s| s.address().as_str())
            .filter(|address| remaining.remove(address))
            .map(str::to_string)
            .collect::<Vec<_>>();

        tracing::trace!(
            "Host list diff: {} added, {} removed",
            added.len(),
            removed.len()
        );

        HostlistDiff { added, removed }
    }
}
