//! Tokio runtime lifecycle for the binary

use std::future::Future;
use std::time::Duration;

use crate::application::errors::BotError;

/// How long shutdown waits for blocking tasks such as a pending stdin read
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Run `future` on a fresh multi-threaded runtime, then shut the runtime
/// down without waiting indefinitely on blocking reads.
pub fn run_to_completion<F: Future>(future: F) -> Result<F::Output, BotError> {
    let rt = tokio::runtime::Runtime::new().map_err(|e| BotError::Internal(e.to_string()))?;
    let output = rt.block_on(future);
    rt.shutdown_timeout(SHUTDOWN_GRACE);
    Ok(output)
}
