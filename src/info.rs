/// Dimensions and placement of a P6 image.
///
/// The offsets place the image on a larger display surface: `offset_x` and
/// `offset_y` in the plane, `offset_z` selects the layer. All three are 0
/// when the header carries no offset comment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageMetaInfo {
    pub width: u32,
    pub height: u32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub offset_z: i32,
}

impl ImageMetaInfo {
    /// Bytes of RGB payload the dimensions call for, or `None` on overflow.
    pub fn payload_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|wh| wh.checked_mul(crate::ppm::BYTES_PER_PIXEL))
    }

    /// Whether any placement offset is non-zero.
    pub fn has_offset(&self) -> bool {
        self.offset_x != 0 || self.offset_y != 0 || self.offset_z != 0
    }

    /// The layer the image is routed to. Same as `offset_z`.
    pub fn layer(&self) -> i32 {
        self.offset_z
    }
}
