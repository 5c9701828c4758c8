use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// The entry-point template could not be rendered.
    #[error("Failed to load entry point '{path}': {reason}")]
    EntryPoint {
        /// Location of the template on disk
        path: String,
        /// Underlying failure
        reason: String,
    },
}
