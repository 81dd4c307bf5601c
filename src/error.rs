use ca_formats::rle::Error as RleError;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Width and height of a world must be positive.
    #[error("width and height of a world must be positive")]
    NonPositiveSize,
    /// The RLE pattern could not be parsed.
    #[error("invalid RLE pattern: {0}")]
    Rle(#[from] RleError),
}
