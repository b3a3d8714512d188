/*! Error types for axmap operations.

Almost all failure here is soft: unsupported attributes become absent labels,
unmatched objects become `None`. The variants below are the only failures
that cross the crate boundary as errors.
*/

/// Errors that can occur during resolution.
#[derive(Debug, thiserror::Error)]
pub enum AxmapError {
  /// The process is not trusted for accessibility API use.
  #[error("accessibility permissions not granted")]
  PermissionDenied,

  /// No window matched the name pattern within the retry budget.
  #[error("unable to find window {pattern:?}")]
  WindowNotFound {
    /// The caller-supplied window name pattern that failed to resolve.
    pattern: String,
  },
}

/// Result type for axmap operations.
pub type AxmapResult<T> = Result<T, AxmapError>;
