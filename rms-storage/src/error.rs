//! Storage-layer failures
//!
//! Data-constraint violations keep their typed [`RmsError`] form so callers
//! can still discriminate illegal values; XML transport failures get their
//! own variants.

use rms_core::RmsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// A stored value violated a data constraint during reconstruction
    #[error("invalid stored data: {0}")]
    Data(#[from] RmsError),
    /// The adapted document could not be serialized
    #[error("xml serialization failed: {0}")]
    Serialize(#[from] quick_xml::SeError),
    /// The document could not be parsed back into adapted form
    #[error("xml parsing failed: {0}")]
    Parse(#[from] quick_xml::DeError),
}

pub type StorageResult<T> = Result<T, StorageError>;
