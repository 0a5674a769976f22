//! Generates `include/wayfind.h` from the `extern "C"` surface.

use std::error::Error;
use std::path::PathBuf;

const HEADER: &str = "wayfind.h";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let config = cbindgen::Config::from_file(manifest_dir.join("cbindgen.toml"))
        .map_err(|e| format!("cbindgen.toml: {e}"))?;

    let include_dir = manifest_dir.join("include");
    std::fs::create_dir_all(&include_dir)?;

    let bindings = cbindgen::Builder::new()
        .with_crate(&manifest_dir)
        .with_config(config)
        .generate()?;
    bindings.write_to_file(include_dir.join(HEADER));
    Ok(())
}
