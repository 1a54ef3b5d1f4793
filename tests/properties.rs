//! Property tests over arbitrary buffers and generated headers.

mod common;

use common::{encode, info};
use ftppm::*;
use proptest::collection::vec;
use proptest::prelude::*;

const SENTINEL: ImageMetaInfo = ImageMetaInfo {
    width: 0,
    height: 7,
    offset_x: 7,
    offset_y: 7,
    offset_z: 7,
};

/// Either a passthrough with the record untouched, or a payload that fits.
fn check_invariants(data: &[u8]) {
    let mut out = SENTINEL;
    let returned = read_image_data(data, &mut out);
    match decode(data) {
        Decoded::Raw(raw) => {
            assert_eq!(raw.as_ptr(), data.as_ptr());
            assert_eq!(returned.as_ptr(), data.as_ptr());
            assert_eq!(returned.len(), data.len());
            assert_eq!(out, SENTINEL);
        }
        Decoded::Image(image) => {
            assert!(image.info().width > 0 && image.info().height > 0);
            assert_eq!(out, image.info());
            assert_eq!(Some(image.pixels().len()), image.info().payload_len());
            assert!(image.header_len() + image.pixels().len() <= data.len());
            assert_eq!(
                image.pixels(),
                &data[image.header_len()..image.header_len() + image.pixels().len()]
            );
            assert_eq!(returned.as_ptr(), image.pixels().as_ptr());
        }
    }
}

/// Header-ish bytes: mostly digits, whitespace and comment syntax.
fn headerish() -> impl Strategy<Value = Vec<u8>> {
    let token = prop_oneof![
        Just(b" ".to_vec()),
        Just(b"\n".to_vec()),
        Just(b"\r".to_vec()),
        Just(b"#".to_vec()),
        Just(b"#FT: ".to_vec()),
        Just(b"-".to_vec()),
        Just(b",".to_vec()),
        Just(b"255".to_vec()),
        "[0-9]{1,3}".prop_map(String::into_bytes),
        any::<u8>().prop_map(|b| vec![b]),
    ];
    vec(token, 0..24).prop_map(|tokens| {
        let mut data = b"P6".to_vec();
        tokens.into_iter().for_each(|t| data.extend(t));
        data
    })
}

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(data in vec(any::<u8>(), 0..256)) {
        check_invariants(&data);
    }

    #[test]
    fn signature_prefixed_bytes_never_panic(data in headerish()) {
        check_invariants(&data);
    }

    #[test]
    fn non_signature_buffers_pass_through(data in vec(any::<u8>(), 0..128)) {
        prop_assume!(!data.starts_with(b"P6"));
        let mut out = SENTINEL;
        let returned = read_image_data(&data, &mut out);
        prop_assert_eq!(returned.as_ptr(), data.as_ptr());
        prop_assert_eq!(out, SENTINEL);
        prop_assert_eq!(decode_strict(&data), Err(PpmError::UnrecognizedFormat));
    }

    #[test]
    fn encoded_images_roundtrip(
        width in 1u32..16,
        height in 1u32..16,
        offset in any::<[i32; 3]>(),
        seed in any::<u8>(),
        trailing in vec(any::<u8>(), 0..8),
    ) {
        let meta = info(width, height, offset);
        let pixels: Vec<u8> = (0..width * height * 3)
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
            .collect();
        let mut encoded = encode(&meta, &pixels);
        let header_len = encoded.len() - pixels.len();
        encoded.extend_from_slice(&trailing);

        let mut first = ImageMetaInfo::default();
        let mut second = ImageMetaInfo::default();
        let a = read_image_data(&encoded, &mut first);
        let b = read_image_data(&encoded, &mut second);
        prop_assert_eq!(first, meta);
        prop_assert_eq!(first, second);
        prop_assert_eq!(a, &pixels[..]);
        prop_assert_eq!(a.as_ptr(), encoded[header_len..].as_ptr());
        prop_assert_eq!(a.as_ptr(), b.as_ptr());
    }

    #[test]
    fn any_truncation_of_payload_passes_through(
        width in 1u32..8,
        height in 1u32..8,
        cut in 1usize..64,
    ) {
        let pixels = vec![0x5au8; (width * height * 3) as usize];
        let encoded = encode(&info(width, height, [5, -3, 2]), &pixels);
        let cut = cut.min(pixels.len());
        let data = &encoded[..encoded.len() - cut];

        let mut out = SENTINEL;
        prop_assert_eq!(read_image_data(data, &mut out).as_ptr(), data.as_ptr());
        prop_assert_eq!(out, SENTINEL);
    }
}
