//! Property-based tests for `minimum_deletions`.
//!
//! Words are drawn from a small alphabet so that generated inputs overlap
//! with dictionary entries often enough to exercise the matching paths.

use proptest::prelude::*;

use crate::dictionary::DeletionDictionary;
use crate::subsequence::is_subsequence;

fn arb_word(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'x', ' ']), 0..=max_len)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_dict_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(5), 0..8)
}

/// Insert `extra` characters into `base` at the given positions, keeping the
/// order of `base` intact.
fn interleave(base: &str, extra: &[(usize, char)]) -> String {
    let mut chars: Vec<char> = base.chars().collect();
    for &(pos, c) in extra {
        let at = pos % (chars.len() + 1);
        chars.insert(at, c);
    }
    chars.into_iter().collect()
}

/// Exhaustive reference: best over all dictionary words that are subsequences.
fn reference(words: &[String], word: &str) -> Option<usize> {
    let len = word.chars().count();
    words
        .iter()
        .filter(|d| is_subsequence(word.chars(), d.chars()))
        .map(|d| len - d.chars().count())
        .min()
}

proptest! {
    #[test]
    fn inserting_characters_keeps_a_match(
        words in arb_dict_words().prop_filter("non-empty", |w| !w.is_empty()),
        pick in any::<prop::sample::Index>(),
        extra in prop::collection::vec((any::<usize>(), prop::sample::select(vec!['a', 'z', '#'])), 0..6),
    ) {
        let dict = DeletionDictionary::new(words.iter().cloned());
        let base = pick.get(&words);
        let word = interleave(base, &extra);

        let result = dict.minimum_deletions(&word);
        prop_assert!(result.is_some());
        prop_assert!(result.unwrap() <= word.chars().count() - base.chars().count());
    }

    #[test]
    fn zero_iff_member(words in arb_dict_words(), word in arb_word(6)) {
        let dict = DeletionDictionary::new(words.iter().cloned());
        let is_member = words.contains(&word);
        prop_assert_eq!(dict.minimum_deletions(&word) == Some(0), is_member);
    }

    #[test]
    fn matches_exhaustive_reference(words in arb_dict_words(), word in arb_word(10)) {
        let dict = DeletionDictionary::new(words.iter().cloned());
        prop_assert_eq!(dict.minimum_deletions(&word), reference(&words, &word));
    }

    #[test]
    fn empty_dictionary_is_always_none(word in arb_word(10)) {
        let dict = DeletionDictionary::default();
        prop_assert_eq!(dict.minimum_deletions(&word), None);
    }

    #[test]
    fn add_then_remove_restores_contents(words in arb_dict_words(), word in arb_word(5)) {
        let dict = DeletionDictionary::new(words.iter().cloned());
        let before = dict.current_words();
        let added = dict.add(&word);
        prop_assert_eq!(added, !before.contains(&word));
        if added {
            prop_assert!(dict.remove(&word));
        }
        prop_assert_eq!(dict.current_words(), before);
    }
}
