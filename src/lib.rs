// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
mod trace_init;

pub use deldict_core::{
    is_subsequence, CharUnit, DeletionDictionary, DictError, Settings, WordSnapshot,
};
pub use ffi::*;
pub use trace_init::{init_tracing, TraceInit};
