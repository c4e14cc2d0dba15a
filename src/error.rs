use thiserror::Error;

use crate::persistence::StoreError;

/// Errors surfaced by the template editor core.
#[derive(Debug, Error)]
pub enum EditorError {
    /// An inbound payload carried an element tag the editor does not know.
    #[error("unknown element kind `{0}`")]
    InvalidElementKind(String),

    /// The inbound payload was not a decodable JSON template document.
    #[error("malformed template payload: {0}")]
    MalformedPayload(String),

    /// The document decoded but violates a model invariant.
    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
