//! Core utilities shared by every layer.
//!
//! Macros must be declared before the modules that use them, so this module
//! is the first one `lib.rs` pulls in.

#[macro_use]
pub mod utils;
