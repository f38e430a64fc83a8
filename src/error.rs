use thiserror::Error;

/// Error types for `RopeVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RopeVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Operation attempted on an empty vector
    #[error("Operation on empty vector")]
    EmptyVector,
    /// The allocator could not provide memory for a new chunk
    #[error("Allocation failed: could not allocate {bytes} bytes")]
    AllocationFailed {
        /// Size of the failed request in bytes
        bytes: usize,
    },
    /// Requested capacity does not fit in `usize`
    #[error("Capacity overflow")]
    CapacityOverflow,
}
