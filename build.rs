use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target = env::var("TARGET").unwrap_or_default();
    // Host builds (library and tests) need no linker script.
    if target != "thumbv6m-none-eabi" {
        return;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    // RP2040: 256 bytes of boot2 at the start of flash, then 2MB flash, 264K RAM
    let memory_x = r#"
MEMORY {
    BOOT2 : ORIGIN = 0x10000000, LENGTH = 0x100
    FLASH : ORIGIN = 0x10000100, LENGTH = 2048K - 0x100
    RAM   : ORIGIN = 0x20000000, LENGTH = 256K
}

EXTERN(BOOT2_FIRMWARE)

SECTIONS {
    .boot2 ORIGIN(BOOT2) :
    {
        KEEP(*(.boot2));
    } > BOOT2
} INSERT BEFORE .text;
"#;

    fs::write(out_dir.join("memory.x"), memory_x).expect("failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
}
