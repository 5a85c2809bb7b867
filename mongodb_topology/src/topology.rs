mod availability;
mod topology_builder;
mod topology_diff;
mod topology_error;
mod topology_snapshot;

pub use topology_builder::*;
pub use topology_diff::*;
pub use topology_error::*;
pub use topology_snapshot::*;
