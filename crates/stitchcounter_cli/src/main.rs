//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `stitchcounter_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // mobile/FFI runtime setup.
    println!("stitchcounter_core ping={}", stitchcounter_core::ping());
    println!(
        "stitchcounter_core version={}",
        stitchcounter_core::core_version()
    );
}
