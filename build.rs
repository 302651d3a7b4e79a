// Copies the static site (index.html, style.css and the wasm-pack output in
// static/pkg) to `dist/` so it can be deployed as-is.
use std::{env, fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let root = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
    let static_dir = Path::new(&root).join("static");
    let out_dir = Path::new(&root).join("dist");

    if !static_dir.exists() {
        return;
    }
    if out_dir.exists() {
        fs::remove_dir_all(&out_dir).ok();
    }
    if fs::create_dir_all(&out_dir).is_err() {
        println!("cargo:warning=could not create {}", out_dir.display());
        return;
    }

    let mut options = CopyOptions::new();
    options.content_only = true;
    options.overwrite = true;
    if let Err(e) = copy(&static_dir, &out_dir, &options) {
        println!("cargo:warning=copying static/ to dist/ failed: {e}");
    }
}
