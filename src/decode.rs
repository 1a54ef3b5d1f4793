use crate::error::PpmError;
use crate::info::ImageMetaInfo;
use crate::limits::Limits;
use crate::ppm::{self, BYTES_PER_PIXEL, OffsetSyntax, PpmHeader};

/// Builder for a decode with non-default options.
///
/// ```
/// use ftppm::{DecodeRequest, Limits};
///
/// let limits = Limits { max_width: Some(45), max_height: Some(35), ..Default::default() };
/// let data = b"P6\n#FT: 5 -3 2\n1 1\n255\n\xff\x00\x00";
/// let decoded = DecodeRequest::new(data).with_limits(&limits).decode();
/// let image = decoded.image().unwrap();
/// assert_eq!((image.info().offset_x, image.info().offset_y, image.info().offset_z), (5, -3, 2));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    offsets: Option<OffsetSyntax>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            offsets: Some(OffsetSyntax::DEFAULT),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Read offsets from comments matching `syntax` instead of `#FT:`.
    pub fn with_offset_syntax(mut self, syntax: OffsetSyntax) -> Self {
        self.offsets = Some(syntax);
        self
    }

    /// Treat every comment as a plain comment; offsets stay 0.
    pub fn without_offset_extension(mut self) -> Self {
        self.offsets = None;
        self
    }

    /// Parse the header only. The payload may be missing or short.
    pub fn probe(self) -> Result<PpmHeader, PpmError> {
        ppm::parse_header(self.data, self.offsets.as_ref(), self.limits)
    }

    /// Decode, reporting why the buffer is not a complete P6 image.
    pub fn decode_strict(self) -> Result<PpmImage<'a>, PpmError> {
        let header = self.probe()?;
        let pixels = self
            .data
            .get(header.data_offset..header.total_len())
            .ok_or(PpmError::BufferTooSmall {
                needed: header.total_len(),
                actual: self.data.len(),
            })?;
        Ok(PpmImage {
            pixels,
            header_len: header.data_offset,
            info: header.info,
        })
    }

    /// Decode, handing the whole buffer back as raw pixels when it is not a
    /// complete P6 image.
    pub fn decode(self) -> Decoded<'a> {
        match self.decode_strict() {
            Ok(image) => {
                log::trace!(
                    "P6 {}x{} at ({}, {}, {}), header {} bytes",
                    image.info.width,
                    image.info.height,
                    image.info.offset_x,
                    image.info.offset_y,
                    image.info.offset_z,
                    image.header_len
                );
                Decoded::Image(image)
            }
            Err(PpmError::UnrecognizedFormat) => Decoded::Raw(self.data),
            Err(e) => {
                log::debug!(
                    "P6 signature present but header rejected ({e}); treating {} bytes as raw",
                    self.data.len()
                );
                Decoded::Raw(self.data)
            }
        }
    }
}

/// Outcome of a lenient decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded<'a> {
    /// A recognized P6 image.
    Image(PpmImage<'a>),
    /// No usable header; the input, untouched.
    Raw(&'a [u8]),
}

impl<'a> Decoded<'a> {
    pub fn image(&self) -> Option<&PpmImage<'a>> {
        match self {
            Decoded::Image(image) => Some(image),
            Decoded::Raw(_) => None,
        }
    }

    pub fn into_image(self) -> Option<PpmImage<'a>> {
        match self {
            Decoded::Image(image) => Some(image),
            Decoded::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Decoded::Raw(_))
    }

    /// The payload of a recognized image, otherwise the whole input.
    pub fn pixels(&self) -> &'a [u8] {
        match self {
            Decoded::Image(image) => image.pixels,
            Decoded::Raw(raw) => *raw,
        }
    }

    pub fn info(&self) -> Option<ImageMetaInfo> {
        self.image().map(|image| image.info)
    }
}

/// A recognized image. Pixels borrow the input buffer (zero-copy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PpmImage<'a> {
    pixels: &'a [u8],
    header_len: usize,
    info: ImageMetaInfo,
}

impl<'a> PpmImage<'a> {
    /// Interleaved RGB bytes, exactly `width * height * 3` of them.
    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Dimensions and placement read from the header.
    pub fn info(&self) -> ImageMetaInfo {
        self.info
    }

    /// Offset of the first pixel byte within the input buffer.
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.info.width as usize * BYTES_PER_PIXEL
    }

    /// One row of RGB bytes, or `None` if `y` is out of range.
    pub fn row(&self, y: u32) -> Option<&'a [u8]> {
        self.pixels.chunks_exact(self.stride()).nth(y as usize)
    }

    /// The `[r, g, b]` sample at `(x, y)`, or `None` if out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.info.width {
            return None;
        }
        let off = x as usize * BYTES_PER_PIXEL;
        let rgb = self.row(y)?.get(off..off + BYTES_PER_PIXEL)?;
        Some([rgb[0], rgb[1], rgb[2]])
    }

    /// Reinterpret the payload as typed RGB pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &'a [rgb::RGB8] {
        use rgb::AsPixels as _;
        self.pixels.as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGB pixels.
    ///
    /// No allocation or copy; the returned `ImgRef` borrows the input buffer.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'a, rgb::RGB8> {
        imgref::ImgRef::new(
            self.as_pixels(),
            self.info.width as usize,
            self.info.height as usize,
        )
    }

    /// Copy into an [`imgref::ImgVec`] of RGB pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.info.width as usize,
            self.info.height as usize,
        )
    }
}
