use thiserror::Error;

/// Failure while reading one archive container.
///
/// Scoped to a single archive: the scanner logs it and moves on, keeping
/// whatever the archive contributed before failing.
#[derive(Debug, Error)]
pub enum UnpackError {
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
