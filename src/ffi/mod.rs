//! C ABI over `deldict_core`.
//!
//! This is the boundary where absent arguments actually occur: every pointer
//! is checked before use, and a null or non-UTF-8 argument is reported as
//! [`DictError::InvalidArgument`], logged, and mapped to a status code or a
//! null handle. Shared helpers (guard macros, `OwnedVec`, pointer helpers)
//! live here; the dictionary functions live in [`dict`].

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use deldict_core::DictError;

pub mod dict;


pub use dict::*;

/// Status: a match was found and written to the out-parameter.
pub const DELDICT_FOUND: i32 = 0;
/// Status: no dictionary word matched.
pub const DELDICT_NOT_FOUND: i32 = 1;
/// Status: a required argument was null or not valid UTF-8.
pub const DELDICT_INVALID_ARGUMENT: i32 = -1;

// --- Handles ---

/// Move `value` to the heap and hand ownership to C. It comes back through
/// [`owned_drop`].
pub(crate) fn owned_new<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Reclaim and drop a handle from [`owned_new`]. Null is ignored.
///
/// # Safety
/// `ptr` is null or a live handle from [`owned_new`] that C has not
/// released before.
pub(crate) unsafe fn owned_drop<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Convert a C string pointer to a `&str`, naming `arg` in the error.
///
/// # Safety
/// A non-null `ptr` must point to a NUL-terminated string that outlives `'a`.
pub(crate) unsafe fn require_str<'a>(
    ptr: *const c_char,
    arg: &'static str,
) -> Result<&'a str, DictError> {
    if ptr.is_null() {
        return Err(DictError::null(arg));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| DictError::invalid_utf8(arg))
}

/// Like [`require_str`], but an absent argument is `Ok(None)`.
///
/// # Safety
/// Same as [`require_str`].
pub(crate) unsafe fn optional_str<'a>(
    ptr: *const c_char,
    arg: &'static str,
) -> Result<Option<&'a str>, DictError> {
    if ptr.is_null() {
        return Ok(None);
    }
    require_str(ptr, arg).map(Some)
}

// ---------------------------------------------------------------------------
// FFI boilerplate-reduction macros (crate-internal)
// ---------------------------------------------------------------------------

/// Validate one or more FFI arguments and bind them as safe Rust values,
/// returning `$on_err` from the **calling** function if any check fails.
/// Each failure is logged as a `DictError` at warn level.
///
/// # Supported argument forms
///
/// | Syntax | What it does |
/// |--------|--------------|
/// | `str: $name = $ptr` | Null-check `$ptr: *const c_char`, convert via [`require_str`] to `&str`, bind as `$name`. |
/// | `ref: $name = $ptr` | Null-check `$ptr: *const T`, dereference to `&T`, bind as `$name`. |
/// | `nonnull: $ptr`      | Assert `$ptr` is non-null (no new binding is introduced). |
///
/// # Examples
///
/// ```ignore
/// ffi_guard!(DELDICT_INVALID_ARGUMENT;
///     ref: wrapper  = dict,
///     str: word_str = word,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let $name = match unsafe { $crate::ffi::require_str($ptr, stringify!($ptr)) } {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("{e}");
                return $on_err;
            }
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; ref: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            tracing::warn!("{}", deldict_core::DictError::null(stringify!($ptr)));
            return $on_err;
        }
        let $name = unsafe { &*$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; nonnull: $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            tracing::warn!("{}", deldict_core::DictError::null(stringify!($ptr)));
            return $on_err;
        }
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

/// `extern "C" fn $fn_name(*mut $T)` releasing a handle from [`owned_new`].
macro_rules! ffi_close {
    ($fn_name:ident, $T:ty) => {
        #[no_mangle]
        pub extern "C" fn $fn_name(ptr: *mut $T) {
            unsafe { $crate::ffi::owned_drop(ptr) };
        }
    };
}

// Make macros available to sub-modules.
pub(crate) use ffi_close;
pub(crate) use ffi_guard;

// --- Shared FFI types ---

/// Array handed to C by pointer. `items` may point into `_strings`, so both
/// are released together.
pub(crate) struct OwnedVec<T> {
    pub(crate) items: Vec<T>,
    pub(crate) _strings: Vec<CString>,
}

impl<T> OwnedVec<T> {
    /// Returns `(items pointer, item count, owner)`. The owner is what C
    /// passes back for release. All null for an empty `items`.
    pub(crate) fn pack(items: Vec<T>, strings: Vec<CString>) -> (*const T, usize, *mut Self) {
        if items.is_empty() {
            return (ptr::null(), 0, ptr::null_mut());
        }
        let owned = Box::new(Self {
            items,
            _strings: strings,
        });
        let data_ptr = owned.items.as_ptr();
        let len = owned.items.len();
        let owned_ptr = Box::into_raw(owned);
        (data_ptr, len, owned_ptr)
    }
}

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn deldict_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Start writing JSON traces to `log_dir`. Returns a [`crate::TraceInit::code`]
/// (0 installed, 1 already active, 2 built without `trace`, 3 failed) or
/// `DELDICT_INVALID_ARGUMENT`.
#[no_mangle]
pub extern "C" fn deldict_trace_init(log_dir: *const c_char) -> i32 {
    ffi_guard!(DELDICT_INVALID_ARGUMENT;
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str)).code()
}
