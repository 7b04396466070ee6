use std::fs;
use std::path::Path;

fn pdfium_library_name(target_os: &str) -> &'static str {
    match target_os {
        "windows" => "pdfium.dll",
        "macos" | "ios" => "libpdfium.dylib",
        _ => "libpdfium.so",
    }
}

fn main() {
    let workspace_root = env!("CARGO_MANIFEST_DIR")
        .split("crates")
        .next()
        .expect("Failed to determine workspace root");

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let library_name = pdfium_library_name(&target_os);

    let vendor_library = Path::new(workspace_root)
        .join("vendor")
        .join("pdfium")
        .join(library_name);

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    let out_path = Path::new(&out_dir);

    let target_dir = out_path
        .parent()
        .and_then(|p| p.parent())
        .and_then(|p| p.parent())
        .expect("Failed to determine target directory");

    let dest_library = target_dir.join(library_name);

    if vendor_library.exists() {
        fs::copy(&vendor_library, &dest_library).expect("Failed to copy PDFium library");
        println!(
            "cargo:warning=Copied {} from vendor to {}",
            library_name,
            dest_library.display()
        );
    } else {
        println!(
            "cargo:warning={} not found at {}, falling back to the system library at runtime",
            library_name,
            vendor_library.display()
        );
    }

    println!("cargo:rerun-if-changed={}", vendor_library.display());
}
