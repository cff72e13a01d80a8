//! Minimum-deletions lookup against a mutable word dictionary.
//!
//! A query word matches a dictionary word when the dictionary word can be
//! obtained from it by deleting characters only. [`DeletionDictionary`]
//! answers the smallest such deletion count and supports concurrent
//! add/remove/snapshot on the shared word set.

pub mod dictionary;
pub mod error;
pub mod settings;
pub mod subsequence;

pub use dictionary::{DeletionDictionary, WordSnapshot};
pub use error::DictError;
pub use settings::Settings;
pub use subsequence::{is_subsequence, CharUnit};
