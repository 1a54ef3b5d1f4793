//! Single-pass P6 header scanner.
//!
//! Every read goes through `Cursor`, which checks the position against the
//! slice length, so a truncated header ends in `UnexpectedEof` instead of a
//! panic.

use super::offset::OffsetSyntax;
use super::{BYTES_PER_PIXEL, PpmHeader, SIGNATURE, SUPPORTED_MAXVAL, check_signature};
use crate::error::PpmError;
use crate::info::ImageMetaInfo;
use crate::limits::Limits;

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Skip whitespace and `#` comments up to the next token.
    ///
    /// Comments that match `syntax` store their offsets in `offset`.
    fn skip_separators(
        &mut self,
        syntax: Option<&OffsetSyntax>,
        offset: &mut Option<[i32; 3]>,
    ) -> Result<(), PpmError> {
        loop {
            match self.peek() {
                Some(b) if is_whitespace(b) => self.pos += 1,
                Some(b'#') => {
                    let body = self.data.get(self.pos + 1..).unwrap_or_default();
                    let len = body
                        .iter()
                        .position(|&b| b == b'\n' || b == b'\r')
                        .unwrap_or(body.len());
                    if let Some(parsed) = syntax.and_then(|s| s.parse(&body[..len])) {
                        log::trace!("offset comment at byte {}: {parsed:?}", self.pos);
                        *offset = Some(parsed);
                    }
                    self.pos += 1 + len;
                }
                Some(_) => return Ok(()),
                None => return Err(PpmError::UnexpectedEof),
            }
        }
    }

    /// Read an unsigned decimal token that must fit in u32.
    fn read_decimal(&mut self, field: &'static str) -> Result<u32, PpmError> {
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))
                .ok_or(PpmError::NumberOverflow { field })?;
            self.pos += 1;
        }
        if self.pos == start {
            return Err(PpmError::ExpectedNumber { field });
        }
        Ok(value)
    }

    /// After width and height the token must end at whitespace or a comment.
    fn expect_token_end(&self, field: &'static str) -> Result<(), PpmError> {
        match self.peek() {
            Some(b) if is_whitespace(b) || b == b'#' => Ok(()),
            Some(_) => Err(PpmError::ExpectedNumber { field }),
            None => Err(PpmError::UnexpectedEof),
        }
    }
}

/// PNM whitespace: space, tab, LF, VT, FF, CR.
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Parse and validate a P6 header.
///
/// Does not look at the payload; callers compare `total_len()` against the
/// buffer themselves.
pub(crate) fn parse_header(
    data: &[u8],
    syntax: Option<&OffsetSyntax>,
    limits: Option<&Limits>,
) -> Result<PpmHeader, PpmError> {
    if !check_signature(data) {
        return Err(PpmError::UnrecognizedFormat);
    }
    let mut cur = Cursor {
        data,
        pos: SIGNATURE.len(),
    };
    match cur.peek() {
        Some(b) if is_whitespace(b) || b == b'#' => {}
        Some(_) => {
            return Err(PpmError::InvalidHeader(
                "signature not followed by whitespace",
            ));
        }
        None => return Err(PpmError::UnexpectedEof),
    }

    let mut offset = None;
    cur.skip_separators(syntax, &mut offset)?;
    let width = cur.read_decimal("width")?;
    cur.expect_token_end("width")?;
    cur.skip_separators(syntax, &mut offset)?;
    let height = cur.read_decimal("height")?;
    cur.expect_token_end("height")?;
    cur.skip_separators(syntax, &mut offset)?;
    let maxval = cur.read_decimal("maxval")?;

    match cur.peek() {
        Some(b) if is_whitespace(b) => cur.pos += 1,
        Some(_) => {
            return Err(PpmError::InvalidHeader(
                "maxval must be followed by one whitespace byte",
            ));
        }
        None => return Err(PpmError::UnexpectedEof),
    }
    let data_offset = cur.pos;

    if width == 0 || height == 0 {
        return Err(PpmError::ZeroDimension { width, height });
    }
    if maxval != SUPPORTED_MAXVAL {
        return Err(PpmError::UnsupportedMaxval(maxval));
    }
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }

    let payload_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(BYTES_PER_PIXEL))
        .filter(|len| len.checked_add(data_offset).is_some())
        .ok_or(PpmError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check_payload(payload_len)?;
    }

    let [offset_x, offset_y, offset_z] = offset.unwrap_or_default();
    Ok(PpmHeader {
        info: ImageMetaInfo {
            width,
            height,
            offset_x,
            offset_y,
            offset_z,
        },
        data_offset,
        payload_len,
    })
}
