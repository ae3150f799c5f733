/// Errors returned by chain operations.
///
/// Every fallible operation hands its outcome back directly; none of these leave
/// the chain in a partially rewritten state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// A required node, handle or payload was absent.
    #[error("required argument was absent")]
    NullArgument,

    /// Storage for a new node could not be obtained.
    #[error("node storage could not be allocated")]
    AllocationFailure,

    /// No node carries a payload matching the key.
    #[error("no node carries a matching payload")]
    NotFound,

    /// The index does not address a node of the chain.
    #[error("index {0} is out of range")]
    IndexOutOfRange(usize),
}

pub type Result<T> = core::result::Result<T, ChainError>;
