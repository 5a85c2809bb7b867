use crate::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum TopologyError {
    #[error("`{0}` is not a valid server address")]
    InvalidAddress(String),
    #[error("Server address `{0}` appears more than once in the same topology")]
    DuplicateAddress(String),
    #[error("Unknown read preference mode `{0}`")]
    UnknownReadPrefMode(String),
    #[error("Topology is incompatible with this driver: {0}")]
    IncompatibleWireVersion(String),
}
impl std::fmt::Debug for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
