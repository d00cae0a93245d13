//! No-op logging method

use std::sync::Arc;

use super::traits::LogMethod;
use crate::error::LogResult;

/// A method that does nothing
///
/// Installed for methods below the logger's active level.
pub fn noop_method() -> LogMethod {
    Arc::new(|_message: &str| -> LogResult<()> { Ok(()) })
}
