#![forbid(unsafe_code)]

use thiserror::Error;

/// Error enumerates the errors returned by this application.
#[derive(Error, Debug)]
pub enum Errors {
    /// Input parameter logging.
    #[error("wexa_server input parameters:\n{}", .0)]
    InputParms(String),

    /// Logger configuration could not be installed.
    #[error("Unable to initialize log4rs console logging: {}", .0)]
    LogInitialization(String),

    /// The PORT environment variable holds an unusable value.
    #[error("Unable to parse the PORT environment variable value: {}", .0)]
    InvalidPortError(String),
}
