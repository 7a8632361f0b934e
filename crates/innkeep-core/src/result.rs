//! Result type aliases for Innkeep.

use crate::InnkeepError;

/// A specialized `Result` type for Innkeep operations.
pub type InnkeepResult<T> = Result<T, InnkeepError>;
