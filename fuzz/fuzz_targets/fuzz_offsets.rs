#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|comment: &[u8]| {
    // Arbitrary comment line spliced into an otherwise valid 1x1 header
    let line: Vec<u8> = comment
        .iter()
        .copied()
        .filter(|&b| b != b'\n' && b != b'\r')
        .collect();
    let mut data = b"P6\n#".to_vec();
    data.extend_from_slice(&line);
    data.extend_from_slice(b"\n1 1\n255\n\x01\x02\x03");

    let image = ftppm::decode_strict(&data).expect("comment content must not break the header");
    assert_eq!(image.pixels(), b"\x01\x02\x03");
    assert_eq!((image.info().width, image.info().height), (1, 1));
});
