//! Use-case services.
//!
//! # Responsibility
//! - Sequence pure list edits with persistence into one call per user action.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod project_service;
