use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors raised by the document model.
///
/// Analysis findings are never errors; they are reported as
/// [`Diagnostic`](crate::Diagnostic) values instead.
pub enum WgslError {
    #[error("invalid argument: {0} must be provided")]
    /// A required input (typically the document a provider attaches to) was absent.
    InvalidArgument(&'static str),

    #[error("edit range {start}..{end} is out of bounds for a document of {len} chars")]
    /// A document edit addressed text past the end of the current snapshot.
    EditOutOfBounds {
        /// Requested start offset (chars).
        start: usize,
        /// Requested end offset (chars, exclusive).
        end: usize,
        /// Current document length (chars).
        len: usize,
    },
}
