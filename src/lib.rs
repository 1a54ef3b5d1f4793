//! # ftppm
//!
//! Reader for binary PPM (P6) images that carry placement offsets, used to
//! route an image onto a sub-region and layer of a larger display surface.
//!
//! ## Wire format
//!
//! ```text
//! P6
//! #FT: 5 -3 2        <- optional: x offset, y offset, layer
//! 45 35
//! 255
//! <45 * 35 * 3 bytes of RGB>
//! ```
//!
//! The `#FT:` line is an ordinary netpbm comment, so any PPM viewer still
//! opens these files. Comments may appear anywhere between tokens.
//!
//! ## Zero-copy, never fails
//!
//! Decoding returns a slice into the input buffer. Input that is not a
//! complete P6 image (no signature, malformed header, maxval other than 255,
//! truncated payload) is handed back unchanged as [`Decoded::Raw`], so raw
//! framebuffer dumps and PPM files can go through the same call. Use
//! [`decode_strict`] to find out why a buffer was rejected.
//!
//! ## Usage
//!
//! ```
//! use ftppm::{Decoded, ImageMetaInfo};
//!
//! let data = b"P6\n#FT: 5 -3 2\n2 1\n255\n\xff\x00\x00\x00\xff\x00";
//!
//! match ftppm::decode(data) {
//!     Decoded::Image(image) => {
//!         assert_eq!(image.info().width, 2);
//!         assert_eq!(image.info().offset_y, -3);
//!         assert_eq!(image.pixels(), b"\xff\x00\x00\x00\xff\x00");
//!     }
//!     Decoded::Raw(raw) => unreachable!("{} raw bytes", raw.len()),
//! }
//!
//! // Raw input comes back untouched.
//! let mut info = ImageMetaInfo::default();
//! let raw = [0u8; 12];
//! assert_eq!(ftppm::read_image_data(&raw, &mut info).as_ptr(), raw.as_ptr());
//! assert_eq!(info, ImageMetaInfo::default());
//! ```
//!
//! ## Non-Goals
//!
//! - Encoding, ASCII PPM (P3), other netpbm variants
//! - 16-bit samples
//! - Color management

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "imgref")]
extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;

pub mod ppm;

// Re-exports
pub use decode::{DecodeRequest, Decoded, PpmImage};
pub use error::PpmError;
pub use info::ImageMetaInfo;
pub use limits::Limits;
pub use ppm::{OffsetSyntax, PpmHeader, check_signature};

/// Decode with default options, falling back to [`Decoded::Raw`].
pub fn decode(data: &[u8]) -> Decoded<'_> {
    DecodeRequest::new(data).decode()
}

/// Decode with default options, reporting why a buffer was rejected.
pub fn decode_strict(data: &[u8]) -> Result<PpmImage<'_>, PpmError> {
    DecodeRequest::new(data).decode_strict()
}

/// Parse the header without requiring the payload to be present.
pub fn probe(data: &[u8]) -> Result<PpmHeader, PpmError> {
    DecodeRequest::new(data).probe()
}

/// Locate the pixel data in `data`, filling `info_out` from the header.
///
/// Returns the payload slice for a complete P6 image. Otherwise returns
/// `data` itself and leaves `info_out` untouched; that makes raw pixel
/// buffers valid input too. `info_out` is written in one piece, never
/// partially.
pub fn read_image_data<'a>(data: &'a [u8], info_out: &mut ImageMetaInfo) -> &'a [u8] {
    match decode(data) {
        Decoded::Image(image) => {
            *info_out = image.info();
            image.pixels()
        }
        Decoded::Raw(raw) => raw,
    }
}
