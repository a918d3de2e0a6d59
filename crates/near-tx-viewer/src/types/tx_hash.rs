//! Transaction hash detection in free-form text.
//!
//! A NEAR transaction hash is a base58-encoded 32-byte digest, which comes out
//! as 43 or 44 characters. Detection is purely lexical: anything with the right
//! alphabet and length, standing alone as a word, is reported.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Base58 alphabet (no `0`, `O`, `I`, `l`), 43-44 characters, whole words only.
///
/// Word boundaries are ASCII: non-ASCII letters next to a hash do not join it.
const TX_HASH_PATTERN: &str = r"(?-u:\b)[1-9A-HJ-NP-Za-km-z]{43,44}(?-u:\b)";

static TX_HASH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TX_HASH_PATTERN).expect("tx hash pattern is valid"));

/// A transaction hash found in a source text.
///
/// Offsets are byte offsets into the text the match was taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TxHashMatch<'t> {
    hash: &'t str,
    start: usize,
    end: usize,
}

impl<'t> TxHashMatch<'t> {
    /// The matched hash.
    pub fn as_str(&self) -> &'t str {
        self.hash
    }

    /// Byte offset of the first character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The matched byte range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns true if `offset` falls on one of the hash's bytes.
    pub fn contains(&self, offset: usize) -> bool {
        self.range().contains(&offset)
    }
}

impl<'t> From<regex::Match<'t>> for TxHashMatch<'t> {
    fn from(m: regex::Match<'t>) -> Self {
        Self {
            hash: m.as_str(),
            start: m.start(),
            end: m.end(),
        }
    }
}

/// Iterate over every transaction hash in `text`, leftmost-first.
pub fn find_iter(text: &str) -> impl Iterator<Item = TxHashMatch<'_>> {
    TX_HASH_REGEX.find_iter(text).map(TxHashMatch::from)
}

/// Every transaction hash in `text`, in source order.
///
/// # Example
///
/// ```
/// use near_tx_viewer::tx_hash;
///
/// let text = "see 6zgh2u9DqHHiXzdy9ouTP7oGky2T4nugqzqt9wJZwNFm for details";
/// let found = tx_hash::find_all(text);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].start(), 4);
/// ```
pub fn find_all(text: &str) -> Vec<TxHashMatch<'_>> {
    find_iter(text).collect()
}

/// The transaction hash covering byte `offset`, if any.
///
/// Matches never overlap, so at most one can contain the offset. An offset
/// just past the end of a hash is not on it.
pub fn find_at(text: &str, offset: usize) -> Option<TxHashMatch<'_>> {
    if offset >= text.len() {
        return None;
    }
    find_iter(text)
        .take_while(|m| m.start() <= offset)
        .find(|m| m.contains(offset))
}

/// Returns true if the whole of `s` is a transaction hash.
pub fn is_tx_hash(s: &str) -> bool {
    TX_HASH_REGEX
        .find(s)
        .is_some_and(|m| m.start() == 0 && m.end() == s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_44: &str = "6zgh2u9DqHHiXzdy9ouTP7oGky2T4nugqzqt9wJZwNFm";
    const HASH_43: &str = "9SyxvfCzmS5fNmkfD5cq2rGNVqSgpWPwB1ECEFbtSg2";
    const OTHER_44: &str = "EAYTYvPcRD8U9qEVFZJNkdjcydPcCnBvQLjSaFwn4dsS";

    #[test]
    fn test_fixture_lengths() {
        assert_eq!(HASH_44.len(), 44);
        assert_eq!(HASH_43.len(), 43);
        assert_eq!(OTHER_44.len(), 44);
    }

    #[test]
    fn test_find_at_every_offset_inside() {
        let text = format!("tx {HASH_44} done");
        for offset in 3..3 + HASH_44.len() {
            let m = find_at(&text, offset).expect("offset inside hash");
            assert_eq!(m.as_str(), HASH_44);
            assert_eq!(m.range(), 3..47);
        }
    }

    #[test]
    fn test_find_at_outside() {
        let text = format!("tx {HASH_44} done");
        assert!(find_at(&text, 0).is_none());
        assert!(find_at(&text, 2).is_none());
        // one past the end lands on the space
        assert!(find_at(&text, 47).is_none());
        assert!(find_at(&text, text.len() - 1).is_none());
        assert!(find_at(&text, text.len() + 10).is_none());
    }

    #[test]
    fn test_find_at_edges_of_text() {
        let m = find_at(HASH_43, 0).unwrap();
        assert_eq!(m.as_str(), HASH_43);
        let m = find_at(HASH_43, HASH_43.len() - 1).unwrap();
        assert_eq!(m.range(), 0..43);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let short = &HASH_43[..42];
        assert!(find_at(short, 0).is_none());

        let long = format!("{HASH_44}z");
        assert!(find_at(&long, 0).is_none());
        assert!(find_all(&long).is_empty());
    }

    #[test]
    fn test_excluded_characters_break_match() {
        for bad in ['0', 'O', 'I', 'l'] {
            let mut s = HASH_44.to_string();
            s.replace_range(20..21, &bad.to_string());
            assert!(find_all(&s).is_empty(), "{bad} should not be accepted");
        }
    }

    #[test]
    fn test_word_boundaries() {
        // '_' is a word character
        assert!(find_all(&format!("_{HASH_44}")).is_empty());
        assert!(find_all(&format!("{HASH_44}_")).is_empty());

        assert_eq!(find_all(&format!("\"{HASH_44}\"")).len(), 1);
        assert_eq!(find_all(&format!("/tx/{HASH_44}?x=1")).len(), 1);

        // only ASCII letters, digits and '_' are word characters
        assert_eq!(find_all(&format!("é{HASH_44}")).len(), 1);
        assert_eq!(find_all(&format!("{HASH_44}€")).len(), 1);
        assert_eq!(find_all(&format!("хэш{HASH_43}ок")).len(), 1);
    }

    #[test]
    fn test_find_at_after_multibyte_prefix() {
        let text = format!("é{HASH_44}");
        assert!(find_at(&text, 0).is_none());
        let m = find_at(&text, 2).unwrap();
        assert_eq!(m.range(), 2..46);
        assert_eq!(&text[m.range()], HASH_44);
    }

    #[test]
    fn test_find_all_in_order() {
        let text = format!("a {HASH_44}\nb {HASH_43}, c ({OTHER_44})");
        let found = find_all(&text);
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].as_str(), HASH_44);
        assert_eq!(found[1].as_str(), HASH_43);
        assert_eq!(found[2].as_str(), OTHER_44);
        for m in &found {
            assert_eq!(&text[m.range()], m.as_str());
        }
        assert!(found.windows(2).all(|w| w[0].end() <= w[1].start()));
    }

    #[test]
    fn test_find_all_restartable() {
        let text = format!("{HASH_44} {HASH_44}");
        let first = find_all(&text);
        let second = find_all(&text);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_ne!(first[0].range(), first[1].range());
    }

    #[test]
    fn test_find_all_empty() {
        assert!(find_all("").is_empty());
        assert!(find_all("fn main() { println!(\"hello\"); }").is_empty());
    }

    #[test]
    fn test_is_tx_hash() {
        assert!(is_tx_hash(HASH_44));
        assert!(is_tx_hash(HASH_43));
        assert!(!is_tx_hash(&format!(" {HASH_44}")));
        assert!(!is_tx_hash("alice.near"));
    }
}
