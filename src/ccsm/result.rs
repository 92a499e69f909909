use crate::InvalidOperation;

/// Convenience type to make error mapping cleaner
pub type Result<T = ()> = anyhow::Result<T>;

/// Outcome of a single card operation, keeping the rejection reason typed
pub type OperationResult<T = ()> = std::result::Result<T, InvalidOperation>;
