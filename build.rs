//! Build script for led-digit.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rustc-check-cfg=cfg(rust_analyzer)");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));

    // Handle memory.x based on target. Host targets (cargo test) need none.
    let target = env::var("TARGET").expect("cargo sets TARGET");

    let memory_file = if target.starts_with("thumbv8m") {
        // Pico 2 ARM
        Some("memory-pico2.x")
    } else if target.starts_with("thumbv6m") {
        // Pico 1 / Pico 1 W (BitDogLab)
        Some("memory-pico1.x")
    } else {
        None
    };

    if let Some(memory_file) = memory_file {
        let memory_x = fs::read_to_string(memory_file)
            .unwrap_or_else(|_| panic!("Failed to read {memory_file}"));
        let dest = out_dir.join("memory.x");
        fs::write(&dest, memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed={memory_file}");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
