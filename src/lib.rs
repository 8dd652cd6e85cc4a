//! book-layers
//!
//! Add-a-book over HTTP, laid out as concentric layers:
//!
//! - `domain`      — Book entity (no dependencies)
//! - `application` — use case + the store capability it consumes
//! - `infra`       — file-backed store implementing that capability
//! - `interface`   — HTTP handlers and the two pipeline configurations
//!
//! Dependencies only point inwards.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod interface;
