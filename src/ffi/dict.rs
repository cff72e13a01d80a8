use std::ffi::{c_char, CString};
use std::ptr;

use deldict_core::settings::parse_settings_toml;
use deldict_core::{DeletionDictionary, DictError, Settings};

use super::{
    ffi_close, ffi_guard, optional_str, owned_drop, owned_new, OwnedVec,
    DELDICT_FOUND, DELDICT_INVALID_ARGUMENT, DELDICT_NOT_FOUND,
};

// --- Dictionary FFI ---

/// Opaque handle. All operations take `*const DelDict` and are safe to call
/// from several threads at once.
pub struct DelDict {
    pub(crate) inner: DeletionDictionary,
}

#[repr(C)]
pub struct DelWordList {
    pub words: *const *const c_char,
    pub len: usize,
    pub(crate) _owned: *mut OwnedVec<*const c_char>,
}

impl DelWordList {
    pub(crate) fn empty() -> Self {
        Self {
            words: ptr::null(),
            len: 0,
            _owned: ptr::null_mut(),
        }
    }

    /// Copy `words` into C strings. Words containing an interior NUL cannot
    /// be represented and are skipped.
    pub(crate) fn from_words(words: Vec<String>) -> Self {
        let mut strings = Vec::with_capacity(words.len());
        let mut ptrs = Vec::with_capacity(words.len());
        for word in words {
            let Ok(cstr) = CString::new(word) else {
                continue;
            };
            // CString's heap buffer stays put when the CString is moved.
            ptrs.push(cstr.as_ptr());
            strings.push(cstr);
        }

        let (data, len, owned) = OwnedVec::pack(ptrs, strings);
        if owned.is_null() {
            return Self::empty();
        }
        Self {
            words: data,
            len,
            _owned: owned,
        }
    }
}

/// Borrow `len` C strings from `words`. Null elements come back as `None`;
/// a null array or a non-UTF-8 element is an error.
///
/// # Safety
/// A non-null `words` must point to `len` readable pointers, each null or a
/// NUL-terminated string that outlives `'a`.
unsafe fn borrow_words<'a>(
    words: *const *const c_char,
    len: usize,
) -> Result<Vec<Option<&'a str>>, DictError> {
    if words.is_null() {
        return Err(DictError::null("words"));
    }
    std::slice::from_raw_parts(words, len)
        .iter()
        .map(|&p| optional_str(p, "words[]"))
        .collect()
}

fn open(words: *const *const c_char, len: usize, settings: Settings) -> *mut DelDict {
    let built = unsafe { borrow_words(words, len) }
        .and_then(|entries| DeletionDictionary::try_with_settings(entries, settings));
    match built {
        Ok(inner) => owned_new(DelDict { inner }),
        Err(e) => {
            tracing::warn!("{e}");
            ptr::null_mut()
        }
    }
}

/// Create a dictionary from `len` words. Returns null if `words` or any
/// element is null or not valid UTF-8.
#[no_mangle]
#[must_use]
pub extern "C" fn deldict_new(words: *const *const c_char, len: usize) -> *mut DelDict {
    open(words, len, Settings::default())
}

/// Like [`deldict_new`], with settings given as TOML text. Also returns null
/// if the TOML is null or invalid.
#[no_mangle]
#[must_use]
pub extern "C" fn deldict_new_with_settings(
    words: *const *const c_char,
    len: usize,
    settings_toml: *const c_char,
) -> *mut DelDict {
    ffi_guard!(ptr::null_mut() ; str: toml_str = settings_toml ,);
    match parse_settings_toml(toml_str) {
        Ok(settings) => open(words, len, settings),
        Err(e) => {
            tracing::warn!("{e}");
            ptr::null_mut()
        }
    }
}

ffi_close!(deldict_close, DelDict);

/// Write the minimum deletion count for `word` to `out`.
///
/// Returns `DELDICT_FOUND`, `DELDICT_NOT_FOUND` (`out` untouched), or
/// `DELDICT_INVALID_ARGUMENT`.
#[no_mangle]
pub extern "C" fn deldict_minimum_deletions(
    dict: *const DelDict,
    word: *const c_char,
    out: *mut u32,
) -> i32 {
    ffi_guard!(DELDICT_INVALID_ARGUMENT;
        ref: wrapper = dict,
        str: word_str = word,
        nonnull: out,
    );

    match wrapper.inner.minimum_deletions(word_str) {
        Some(deletions) => {
            unsafe { *out = u32::try_from(deletions).unwrap_or(u32::MAX) };
            DELDICT_FOUND
        }
        None => DELDICT_NOT_FOUND,
    }
}

/// Returns 1 if `word` was added, 0 if already present, -1 on invalid argument.
#[no_mangle]
pub extern "C" fn deldict_add(dict: *const DelDict, word: *const c_char) -> i32 {
    ffi_guard!(DELDICT_INVALID_ARGUMENT;
        ref: wrapper = dict,
        str: word_str = word,
    );
    i32::from(wrapper.inner.add(word_str))
}

/// Returns 1 if `word` was removed, 0 otherwise. A null word is not an error.
#[no_mangle]
pub extern "C" fn deldict_remove(dict: *const DelDict, word: *const c_char) -> i32 {
    ffi_guard!(0; ref: wrapper = dict,);
    match unsafe { optional_str(word, "word") } {
        Ok(Some(word_str)) => i32::from(wrapper.inner.remove(word_str)),
        Ok(None) => 0,
        // Not valid UTF-8, so it cannot be a member.
        Err(_) => 0,
    }
}

/// Sorted copy of the current words. Free with [`deldict_word_list_free`].
#[no_mangle]
pub extern "C" fn deldict_current_words(dict: *const DelDict) -> DelWordList {
    ffi_guard!(DelWordList::empty(); ref: wrapper = dict,);
    DelWordList::from_words(wrapper.inner.current_words().to_sorted_vec())
}

#[no_mangle]
pub extern "C" fn deldict_word_list_free(list: DelWordList) {
    unsafe { owned_drop(list._owned) };
}

/// Returns 1 if `word` is in the dictionary, 0 if not, -1 on invalid argument.
#[no_mangle]
pub extern "C" fn deldict_contains(dict: *const DelDict, word: *const c_char) -> i32 {
    ffi_guard!(DELDICT_INVALID_ARGUMENT;
        ref: wrapper = dict,
        str: word_str = word,
    );
    i32::from(wrapper.inner.contains(word_str))
}

#[no_mangle]
pub extern "C" fn deldict_len(dict: *const DelDict) -> usize {
    ffi_guard!(0; ref: wrapper = dict,);
    wrapper.inner.len()
}
