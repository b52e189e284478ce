//! FFI crate exposing the stitch-counter core to the mobile UI.

pub mod api;
