/// Reasons a buffer was not recognized as a complete P6 image.
///
/// The lenient entry points ([`crate::decode`], [`crate::read_image_data`])
/// swallow these and hand the buffer back as raw pixels; the strict ones
/// return them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PpmError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(&'static str),

    #[error("expected decimal {field}")]
    ExpectedNumber { field: &'static str },

    #[error("{field} does not fit in 32 bits")]
    NumberOverflow { field: &'static str },

    #[error("unsupported maxval {0}, only 255 is supported")]
    UnsupportedMaxval(u32),

    #[error("zero-sized image: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {what} {value} exceeds {limit}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        limit: u64,
    },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}
