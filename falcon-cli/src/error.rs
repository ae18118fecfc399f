//! Launch error types

use falcon_client::ClientError;
use thiserror::Error;

/// Errors that end a launch before or outside the negotiation
///
/// Negotiation exits (declines, payment gates, empty job URLs) are outcomes,
/// not errors; they never show up here.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No job definition file was passed on the command line
    #[error("No job definition file given. Usage: falcon launch <JOB_FILE>")]
    MissingJobFile,

    /// A platform call failed before it produced a reply
    #[error("Platform call failed: {0}")]
    Transport(#[from] ClientError),
}
