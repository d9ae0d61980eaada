//! Pastiera autocorrect engine: UniFFI bindings for the Android keyboard.
//!
//! Dictionary, suggestion and session logic live in `pastiera-core` and
//! `pastiera-session`; this crate only exports them.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use pastiera_core::{dict, settings, suggest, unicode, user_dict};
pub use pastiera_session as session;
