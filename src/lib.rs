//! C ABI for the kiosk firmware.
//!
//! The engine itself lives in `kana-core` and the report-driven driver in
//! `kana-session`; this crate only exposes them as a static/dynamic library.

// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
mod trace_init;

pub use ffi::*;
pub use trace_init::init_tracing;

pub use kana_core::cue::{AudioCue, DisplayCue};
pub use kana_session::{AudioSink, KioskSession, RenderSink, Response};
