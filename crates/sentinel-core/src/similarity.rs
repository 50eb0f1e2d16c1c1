//! Matching-blocks similarity ratio for headline comparison.
//!
//! Implements the Ratcliff/Obershelp "gestalt pattern matching" ratio with
//! the same block-selection rules as Python's `difflib.SequenceMatcher`, so
//! the thresholds used by the deduplicator and linker keep their meaning.

use std::collections::HashMap;

/// Sequences at least this long get the popular-element heuristic.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity of `a` and `b` in `[0.0, 1.0]`.
///
/// Returns `2 * M / (len(a) + len(b))` where `M` is the number of characters
/// covered by the matching blocks. Two empty strings score `1.0`.
///
/// Block selection depends on argument order, so the ratio is always computed
/// with the lexicographically smaller string first. That keeps the function
/// symmetric. Comparison is case-sensitive; callers lower-case first.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matches = Matcher::new(&a, &b).matching_characters();
    #[allow(clippy::cast_precision_loss)]
    let ratio = 2.0 * matches as f64 / total as f64;
    ratio
}

struct Matcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each character in `b`, minus popular characters.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> Matcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, ch) in b.iter().enumerate() {
            b2j.entry(*ch).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Total size of all matching blocks.
    fn matching_characters(&self) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        total
    }

    /// Longest block with `a[i..i+k] == b[j..j+k]` inside the given window.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular characters were never anchors; let the block grow over them.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn identical_strings_score_one() {
        assert_close(similarity("gold hits record high", "gold hits record high"), 1.0);
    }

    #[test]
    fn two_empty_strings_score_one() {
        assert_close(similarity("", ""), 1.0);
    }

    #[test]
    fn one_empty_string_scores_zero() {
        assert_close(similarity("abc", ""), 0.0);
        assert_close(similarity("", "abc"), 0.0);
    }

    #[test]
    fn shifted_block_matches_reference_ratio() {
        // "bcd" is the only block: 2 * 3 / 8
        assert_close(similarity("abcd", "bcde"), 0.75);
    }

    #[test]
    fn truncated_headline_matches_reference_ratio() {
        let ratio = similarity(
            "gold prices surge amid inflation fears",
            "gold prices surge amid inflation fears today",
        );
        assert_close(ratio, 76.0 / 82.0);
    }

    #[test]
    fn unrelated_headlines_score_low() {
        let ratio = similarity(
            "xyz completely unrelated",
            "gold prices surge amid inflation fears today",
        );
        assert_close(ratio, 20.0 / 68.0);
    }

    #[test]
    fn order_dependent_pair_is_symmetric() {
        // Taken in the order ("diet", "tide") the blocks cover 2 chars of 8.
        assert_close(similarity("tide", "diet"), 0.5);
        assert_close(similarity("diet", "tide"), 0.5);
    }

    /// Deterministic pseudo-random strings over a small alphabet so that
    /// repeated characters and competing blocks are common.
    fn generated_strings() -> Vec<String> {
        const ALPHABET: &[char] = &['a', 'b', 'c', 'd', ' ', 'g', 'o', 'l', '金'];
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next = move || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            usize::try_from(state >> 33).unwrap()
        };

        let mut out = vec![String::new()];
        for i in 0..60 {
            // A few long inputs exercise the popular-character rule.
            let len = if i % 15 == 0 { 200 + next() % 40 } else { next() % 14 };
            out.push((0..len).map(|_| ALPHABET[next() % ALPHABET.len()]).collect());
        }
        out
    }

    #[test]
    fn generated_pairs_are_symmetric_and_bounded() {
        let strings = generated_strings();
        for a in &strings {
            for b in &strings {
                let forward = similarity(a, b);
                let backward = similarity(b, a);
                assert!(
                    forward.to_bits() == backward.to_bits(),
                    "similarity({a:?}, {b:?}) = {forward} but reversed = {backward}"
                );
                assert!((0.0..=1.0).contains(&forward), "{a:?} vs {b:?}: {forward}");
            }
            if a.chars().count() < AUTOJUNK_MIN_LEN {
                assert_close(similarity(a, a), 1.0);
            }
        }
    }

    #[test]
    fn case_is_significant() {
        assert!(similarity("GOLD", "gold") < 1.0);
    }

    #[test]
    fn counts_unicode_scalars_not_bytes() {
        // Three shared characters out of four + four.
        assert_close(similarity("金價上漲", "金價上揚"), 0.75);
    }

    #[test]
    fn long_sequences_ignore_popular_characters_as_anchors() {
        let a = "a".repeat(10);
        let b = format!("{}{}", "b".repeat(150), "a".repeat(60));
        // 'a' occurs 60 times in a 210-char sequence, above the popularity
        // limit of 3, so it cannot seed a match.
        assert_close(similarity(&a, &b), 0.0);
    }
}
