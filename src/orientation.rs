//! Orientation matching: the forward and mirror spellings of a target word.
//!
//! A grid cell at offset `k` of a candidate run is accepted when it equals either
//! `forward[k]` or `mirror[k]`. The two spellings are checked independently at every
//! offset, so a run can mix characters from both (e.g. `ABA` is accepted for `ABC`,
//! because offset 2 matches the mirror's `A`). This is a per-character disjunction and
//! intentionally not a whole-string reversed comparison.

/// Reverse a word character by character.
///
/// ```
/// use wordgrid::orientation::mirror;
///
/// assert_eq!(mirror("STAR"), "RATS");
/// assert_eq!(mirror(""), "");
/// ```
#[must_use]
pub fn mirror(word: &str) -> String {
    word.chars().rev().collect()
}

/// Both candidate spellings of one word, computed once per search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientations {
    word: String,
    forward: Vec<char>,
    mirror: Vec<char>,
}

impl Orientations {
    #[must_use]
    pub fn new(word: &str) -> Orientations {
        let forward: Vec<char> = word.chars().collect();
        let mirror = forward.iter().rev().copied().collect();
        Orientations { word: word.to_string(), forward, mirror }
    }

    /// The word as supplied by the caller.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn mirror(&self) -> &[char] {
        &self.mirror
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Does `cell` satisfy offset `k` under either spelling?
    #[must_use]
    pub fn accepts(&self, k: usize, cell: char) -> bool {
        cell == self.forward[k] || cell == self.mirror[k]
    }

    /// Check every offset, reading the candidate cell for offset `k` from `cell_at(k)`.
    /// Stops at the first rejected offset.
    pub fn matches_at(&self, cell_at: impl Fn(usize) -> char) -> bool {
        (0..self.len()).all(|k| self.accepts(k, cell_at(k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_is_an_involution() {
        for word in ["", "A", "AB", "LEVEL", "WORDSEARCH", "ção"] {
            assert_eq!(mirror(&mirror(word)), word);
        }
    }

    #[test]
    fn test_orientations_spellings() {
        let o = Orientations::new("ABC");
        assert_eq!(o.word(), "ABC");
        assert_eq!(o.len(), 3);
        assert_eq!(o.mirror(), &['C', 'B', 'A']);
    }

    #[test]
    fn test_accepts_either_spelling_per_offset() {
        let o = Orientations::new("ABC");
        assert!(o.accepts(0, 'A'));
        assert!(o.accepts(0, 'C'));
        assert!(!o.accepts(0, 'B'));
        assert!(o.accepts(1, 'B'));
        assert!(!o.accepts(1, 'X'));
    }

    #[test]
    fn test_mixed_spelling_is_accepted() {
        // Neither "ABC" nor "CBA", but every offset matches one of them
        let o = Orientations::new("ABC");
        let run = ['A', 'B', 'A'];
        assert!(o.matches_at(|k| run[k]));
        let run = ['C', 'B', 'C'];
        assert!(o.matches_at(|k| run[k]));
    }

    #[test]
    fn test_rejects_on_any_offset() {
        let o = Orientations::new("ABC");
        let run = ['A', 'X', 'B'];
        assert!(!o.matches_at(|k| run[k]));
    }

    #[test]
    fn test_empty_word_matches_trivially() {
        let o = Orientations::new("");
        assert!(o.is_empty());
        assert!(o.matches_at(|_| 'Z'));
    }
}
