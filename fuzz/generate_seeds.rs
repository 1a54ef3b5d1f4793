#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PPM 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

    // PPM 1x1 with offsets
    let ft = b"P6\n#FT: 5 -3 2\n1 1\n255\n\xff\x00\x00";
    fs::write(format!("{dir}/ft_1x1.ppm"), ft).unwrap();

    // Offsets after the dimensions, comma separated
    let ft_late = b"P6 1 1\n#FT:10,4\n255\n\x00\xff\x00";
    fs::write(format!("{dir}/ft_late_1x1.ppm"), ft_late).unwrap();

    // Raw 2x1 RGB, no header
    fs::write(format!("{dir}/raw_2x1.bin"), b"\x10\x20\x30\x40\x50\x60").unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/maxval_16bit.bin"), b"P6\n1 1\n65535\n\x00\x00\x00\x00\x00\x00").unwrap();
    fs::write(format!("{dir}/short_payload.bin"), b"P6\n4 4\n255\n\x00\x00\x00").unwrap();
    fs::write(format!("{dir}/huge_dims.bin"), b"P6\n4294967295 4294967295\n255\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
