#![no_main]
use libfuzzer_sys::fuzz_target;
use ftppm::{Decoded, ImageMetaInfo};

fuzz_target!(|data: &[u8]| {
    // Must never panic, and a fallback must leave the record alone
    let sentinel = ImageMetaInfo { width: 0, ..Default::default() };
    let mut info = sentinel;
    let returned = ftppm::read_image_data(data, &mut info);

    match ftppm::decode(data) {
        Decoded::Raw(_) => {
            assert_eq!(returned.as_ptr(), data.as_ptr());
            assert_eq!(info, sentinel);
        }
        Decoded::Image(image) => {
            assert_eq!(info, image.info());
            assert_eq!(Some(image.pixels().len()), image.info().payload_len());
            assert!(image.header_len() + image.pixels().len() <= data.len());
            let _ = image.as_imgref();
        }
    }

    let _ = ftppm::probe(data);
});
