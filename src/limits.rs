use crate::error::PpmError;

/// Resource limits applied to the dimensions a header declares.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum payload size in bytes (width * height * 3).
    pub max_payload_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PpmError> {
        if let Some(max_w) = self.max_width {
            exceeds("width", u64::from(width), max_w)?;
        }
        if let Some(max_h) = self.max_height {
            exceeds("height", u64::from(height), max_h)?;
        }
        if let Some(max_px) = self.max_pixels {
            exceeds("pixel count", u64::from(width) * u64::from(height), max_px)?;
        }
        Ok(())
    }

    /// Check that the payload a header declares is within limits.
    pub(crate) fn check_payload(&self, bytes: usize) -> Result<(), PpmError> {
        if let Some(max_bytes) = self.max_payload_bytes {
            exceeds("payload bytes", bytes as u64, max_bytes)?;
        }
        Ok(())
    }
}

fn exceeds(what: &'static str, value: u64, limit: u64) -> Result<(), PpmError> {
    if value > limit {
        return Err(PpmError::LimitExceeded { what, value, limit });
    }
    Ok(())
}
