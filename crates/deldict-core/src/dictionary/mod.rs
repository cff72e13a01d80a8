//! Mutable word dictionary with minimum-deletions lookup.
//!
//! Words live in a copy-on-write `RwLock<Arc<HashSet<String>>>`. Readers
//! clone the `Arc` and scan without holding the lock, so a query never sees
//! a half-applied mutation and never blocks `add`/`remove` for the length of
//! a scan. Writers mutate through `Arc::make_mut`, which copies the set only
//! while an older view is still alive.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::collections::hash_set;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, debug_span};

use crate::error::DictError;
use crate::settings::Settings;
use crate::subsequence::CharUnit;

pub struct DeletionDictionary {
    words: RwLock<Arc<HashSet<String>>>,
    settings: Settings,
}

impl DeletionDictionary {
    /// Build a dictionary from `words`. Duplicates collapse to one entry.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_settings(words, Settings::default())
    }

    pub fn with_settings<I, S>(words: I, settings: Settings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: HashSet<String> = words.into_iter().map(Into::into).collect();
        debug!(word_count = set.len(), unit = ?settings.matching.unit, "dictionary built");
        Self {
            words: RwLock::new(Arc::new(set)),
            settings,
        }
    }

    /// Build from possibly-absent entries, rejecting the first `None`.
    pub fn try_new<I, S>(words: I) -> Result<Self, DictError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self::try_with_settings(words, Settings::default())
    }

    pub fn try_with_settings<I, S>(words: I, settings: Settings) -> Result<Self, DictError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|w| w.ok_or_else(|| DictError::null("words[]")))
            .collect::<Result<Vec<S>, _>>()?;
        Ok(Self::with_settings(words, settings))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn unit(&self) -> CharUnit {
        self.settings.matching.unit
    }

    /// Current set, shared with the live dictionary until the next write.
    fn view(&self) -> Arc<HashSet<String>> {
        let guard = self.words.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Minimum number of characters to delete from `word` so that it equals
    /// some dictionary word, or `None` if no dictionary word is a
    /// subsequence of `word`.
    pub fn minimum_deletions(&self, word: &str) -> Option<usize> {
        let words = self.view();
        let unit = self.unit();
        let word_len = unit.len(word);
        let _span = debug_span!("minimum_deletions", word_len, dict_size = words.len()).entered();

        let mut best: Option<usize> = None;
        for candidate in words.iter() {
            let candidate_len = unit.len(candidate);
            match candidate_len.cmp(&word_len) {
                Ordering::Greater => {}
                Ordering::Equal => {
                    if candidate == word {
                        debug!(deletions = 0, "exact match");
                        return Some(0);
                    }
                }
                Ordering::Less => {
                    let deletions = word_len - candidate_len;
                    if best.is_some_and(|b| b <= deletions) {
                        continue;
                    }
                    if unit.is_subsequence(word, candidate) {
                        best = Some(deletions);
                    }
                }
            }
        }

        debug!(deletions = ?best);
        best
    }

    /// Insert `word`. Returns `true` if newly added, `false` if already present.
    pub fn add(&self, word: &str) -> bool {
        let mut guard = self.words.write().unwrap_or_else(PoisonError::into_inner);
        if guard.contains(word) {
            return false;
        }
        Arc::make_mut(&mut *guard).insert(word.to_string());
        debug!(word_count = guard.len(), "word added");
        true
    }

    /// Remove `word`. Returns `true` if it was present.
    pub fn remove(&self, word: &str) -> bool {
        let mut guard = self.words.write().unwrap_or_else(PoisonError::into_inner);
        if !guard.contains(word) {
            return false;
        }
        Arc::make_mut(&mut *guard).remove(word);
        debug!(word_count = guard.len(), "word removed");
        true
    }

    /// Point-in-time, read-only copy of the dictionary contents.
    pub fn current_words(&self) -> WordSnapshot {
        WordSnapshot { words: self.view() }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.view().contains(word)
    }

    pub fn len(&self) -> usize {
        self.view().len()
    }

    pub fn is_empty(&self) -> bool {
        self.view().is_empty()
    }
}

impl Default for DeletionDictionary {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl<S: Into<String>> FromIterator<S> for DeletionDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl std::fmt::Debug for DeletionDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeletionDictionary")
            .field("len", &self.len())
            .field("settings", &self.settings)
            .finish()
    }
}

/// Immutable view of the dictionary at the moment it was taken.
///
/// Later `add`/`remove` calls on the dictionary do not show up here, and the
/// type has no mutating methods:
///
/// ```compile_fail
/// let dict = deldict_core::DeletionDictionary::new(["a"]);
/// let mut words = dict.current_words();
/// words.insert("b".to_string());
/// ```
#[derive(Debug, Clone)]
pub struct WordSnapshot {
    words: Arc<HashSet<String>>,
}

impl WordSnapshot {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.words.iter()
    }

    /// Words in lexicographic order.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}

impl PartialEq for WordSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for WordSnapshot {}

impl<'a> IntoIterator for &'a WordSnapshot {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
