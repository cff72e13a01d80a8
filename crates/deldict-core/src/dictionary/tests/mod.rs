mod proptest_props;

use super::DeletionDictionary;

const SAMPLE_WORDS: &[&str] = &[
    "a", "ab", "abc", "abcd", "abcde", "abcdef", "abcdefg", "abcdefgh", "qwerty", " ",
];

fn sample_dict() -> DeletionDictionary {
    DeletionDictionary::new(SAMPLE_WORDS.iter().copied())
}
