//! Core library components.
//!
//! The compile-time constants, the runtime secret store, and everything
//! needed to produce and inspect a filled-in secrets file.

pub mod constants;
pub mod defaults;
pub mod file;
pub mod gitignore;
pub mod inspect;
pub mod names;
pub mod render;
pub mod store;
pub mod value;
