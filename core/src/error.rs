use thiserror::Error;

/// Result type for corpuscan operations
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Error types for the image analysis pipeline
///
/// Each variant marks the boundary where the failure occurred. All of them
/// are user-visible and stop the current invocation; none should take the
/// hosting process down.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Malformed or unsupported upload
    #[error("Decode error: {0}")]
    Decode(String),

    /// Pixel extraction or normalization failure after a successful parse
    #[error("DICOM processing error: {0}")]
    DicomProcessing(String),

    /// The remote analysis capability failed or returned an unusable result
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration store could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for CorpusError {
    fn from(s: String) -> Self {
        CorpusError::Decode(s)
    }
}

impl From<&str> for CorpusError {
    fn from(s: &str) -> Self {
        CorpusError::Decode(s.to_string())
    }
}

// Convert dicom-object parse errors; these always surface at the decode boundary
impl From<dicom_object::ReadError> for CorpusError {
    fn from(e: dicom_object::ReadError) -> Self {
        CorpusError::Decode(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for CorpusError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        CorpusError::DicomProcessing(format!("{}", e))
    }
}

impl From<image::ImageError> for CorpusError {
    fn from(e: image::ImageError) -> Self {
        CorpusError::Decode(format!("{}", e))
    }
}

// Transport failures carry no request payload, only reqwest's own detail
impl From<reqwest::Error> for CorpusError {
    fn from(e: reqwest::Error) -> Self {
        CorpusError::Analysis(format!("{}", e))
    }
}
