//! Binary PPM (P6) with placement offsets.
//!
//! The header grammar is the plain netpbm one: `P6`, width, height and maxval
//! as whitespace-separated decimals, `#` comments between tokens, and one
//! whitespace byte before the payload. Only maxval 255 (8-bit RGB) is read.

mod header;
mod offset;

pub use offset::OffsetSyntax;

pub(crate) use header::parse_header;

use crate::info::ImageMetaInfo;

/// Magic bytes of a binary PPM.
pub const SIGNATURE: &[u8; 2] = b"P6";

/// The only sample range this reader accepts.
pub const SUPPORTED_MAXVAL: u32 = 255;

pub(crate) const BYTES_PER_PIXEL: usize = 3;

/// Whether `data` starts with the P6 signature.
///
/// Buffers shorter than the signature are never recognized.
pub fn check_signature(data: &[u8]) -> bool {
    data.starts_with(SIGNATURE)
}

/// A parsed header, before the payload has been checked.
///
/// Useful for receivers that need to know how many bytes make up a complete
/// image before all of them have arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PpmHeader {
    pub info: ImageMetaInfo,
    /// Header length in bytes; the payload starts here.
    pub data_offset: usize,
    /// `width * height * 3`.
    pub payload_len: usize,
}

impl PpmHeader {
    /// Header plus payload.
    pub fn total_len(&self) -> usize {
        // parse_header rejects headers where this overflows
        self.data_offset + self.payload_len
    }
}
