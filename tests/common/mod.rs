//! Test-only P6 writer. The crate itself does not encode.

#![allow(dead_code)]

use ftppm::ImageMetaInfo;

/// Write `pixels` as P6, with an `#FT:` comment when any offset is non-zero.
pub fn encode(info: &ImageMetaInfo, pixels: &[u8]) -> Vec<u8> {
    let mut out = b"P6\n".to_vec();
    if info.has_offset() {
        out.extend_from_slice(
            format!("#FT: {} {} {}\n", info.offset_x, info.offset_y, info.offset_z).as_bytes(),
        );
    }
    out.extend_from_slice(format!("{} {}\n255\n", info.width, info.height).as_bytes());
    out.extend_from_slice(pixels);
    out
}

pub fn checkerboard(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            if (x + y) % 2 == 0 {
                pixels[off..off + 3].copy_from_slice(&[255, 0, 128]);
            } else {
                pixels[off..off + 3].copy_from_slice(&[0, 200, 50]);
            }
        }
    }
    pixels
}

pub fn noise_pattern(len: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; len];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

pub fn info(width: u32, height: u32, offset: [i32; 3]) -> ImageMetaInfo {
    ImageMetaInfo {
        width,
        height,
        offset_x: offset[0],
        offset_y: offset[1],
        offset_z: offset[2],
    }
}
