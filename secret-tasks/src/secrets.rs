use thiserror::Error;

use crate::secrets::cast::CastError;
use crate::task::Task;

pub mod cast;
pub mod env_var;

/// Marker for tasks whose output is sensitive. Masking and redaction of the
/// value are handled by the scheduler, not here.
pub trait Secret: Task {}

/// Enumerates the possible errors running a secret task.
#[derive(Debug, Error)]
pub enum SecretError {
    /// The variable is required and absent from the environment.
    #[error("Environment variable not set: {0}")]
    MissingVariable(String),

    /// The configured cast rejected the retrieved value. The inner error
    /// surfaces unmodified.
    #[error(transparent)]
    Cast(CastError),
}
