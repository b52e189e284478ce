//! Domain model for stitch-counter projects.
//!
//! # Responsibility
//! - Define the canonical data structures persisted as one project-list blob.
//! - Keep serialization field names aligned with the stored JSON layout.
//!
//! # Invariants
//! - Every project and counter carries a stable, immutable `id`.
//! - Counter values never go below zero.

pub mod project;
