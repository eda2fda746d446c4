use thiserror::Error;

/// Errors that can occur when mounting a widget.
///
/// These mean the host document and the rendered markup disagree; they are
/// never raised for caller input mistakes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// The mount point does not exist in the document.
    #[error("Mount point '{0}' not found")]
    MountNotFound(String),

    /// An expected part is missing after rendering.
    #[error("Rendered widget in '{mount}' is missing its {part}")]
    MissingPart {
        /// The mount point id.
        mount: String,
        /// Which part could not be found.
        part: &'static str,
    },

    /// An item row does not carry the value it was rendered for.
    #[error("Item {index} in '{mount}' renders value {found:?}, expected '{expected}'")]
    ValueMismatch {
        mount: String,
        index: usize,
        expected: String,
        found: Option<String>,
    },
}
