//! Greedy subsequence test over configurable character units.

use serde::Deserialize;

/// Returns `true` if every unit of `needle`, in order, occurs in `haystack`
/// at strictly increasing positions.
///
/// Matches each needle unit against the leftmost remaining haystack unit.
/// Greedy leftmost matching never rules out a match that exists, so a
/// single forward pass over `haystack` decides the question.
pub fn is_subsequence<H, N>(haystack: H, needle: N) -> bool
where
    H: IntoIterator,
    N: IntoIterator<Item = H::Item>,
    H::Item: PartialEq,
{
    let mut rest = haystack.into_iter();
    needle.into_iter().all(|unit| rest.any(|h| h == unit))
}

/// Encoding unit in which word length and positions are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharUnit {
    /// Unicode scalar values.
    #[default]
    Char,
    /// UTF-16 code units. Characters outside the BMP count as two.
    Utf16,
}

impl CharUnit {
    pub fn len(self, s: &str) -> usize {
        match self {
            CharUnit::Char => s.chars().count(),
            CharUnit::Utf16 => s.encode_utf16().count(),
        }
    }

    /// `is_subsequence` with both strings split into this unit.
    pub fn is_subsequence(self, haystack: &str, needle: &str) -> bool {
        match self {
            CharUnit::Char => is_subsequence(haystack.chars(), needle.chars()),
            CharUnit::Utf16 => is_subsequence(haystack.encode_utf16(), needle.encode_utf16()),
        }
    }
}
