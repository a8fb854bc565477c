/*!
# Sequence Matcher

Ratcliff/Obershelp "gestalt" matching over Unicode scalar values: find
the longest common block, recurse on both sides of it, and score the
pair as `2 * matched / (len_a + len_b)`.

When the second sequence has at least 200 elements, elements occurring
in more than 1% of it (plus one) are "popular" and never start a block
search, although blocks may still extend across them. Scores equal
those of difflib's `SequenceMatcher(None, a, b).ratio()`.
*/

use std::collections::HashMap;

/// Second-sequence length from which popular elements are ignored
const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a..a + size] == b[b..b + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of every non-popular element of `b`
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }
        if b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest block in `a[alo..ahi]` / `b[blo..bhi]`, earliest in `a` (then
    /// `b`) among equally long candidates.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);

        // j2len[j] = length of the block ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let previous = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0)
                    } else {
                        0
                    };
                    let k = previous + 1;
                    next_j2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular elements were not indexed; grow the block across them.
        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        Match {
            a: besti,
            b: bestj,
            size: bestsize,
        }
    }

    /// Non-overlapping matching blocks in increasing order, adjacent blocks
    /// merged, terminated by a zero-sized sentinel at `(len_a, len_b)`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
            blocks.push(m);
        }
        blocks.sort();

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged.push(Match {
            a: la,
            b: lb,
            size: 0,
        });
        merged
    }

    /// Similarity in `[0, 1]`; two empty sequences are identical.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        2.0 * matched as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn test_identical_and_disjoint() {
        assert!(approx(SequenceMatcher::new("license", "license").ratio(), 1.0));
        assert!(approx(SequenceMatcher::new("abc", "xyz").ratio(), 0.0));
        assert!(approx(SequenceMatcher::new("", "").ratio(), 1.0));
        assert!(approx(SequenceMatcher::new("abc", "").ratio(), 0.0));
    }

    #[test]
    fn test_known_ratios() {
        assert!(approx(SequenceMatcher::new("abcd", "bcde").ratio(), 0.75));
        let matcher = SequenceMatcher::new(
            "private Thread currentThread;",
            "private volatile Thread currentThread;",
        );
        assert!(approx(matcher.ratio(), 58.0 / 67.0));
    }

    #[test]
    fn test_matching_blocks() {
        let matcher = SequenceMatcher::new("abxcd", "abcd");
        assert_eq!(
            matcher.matching_blocks(),
            vec![
                Match { a: 0, b: 0, size: 2 },
                Match { a: 3, b: 2, size: 2 },
                Match { a: 5, b: 4, size: 0 },
            ]
        );
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        let matcher = SequenceMatcher::new(" abcd", "abcd abcd");
        assert_eq!(matcher.find_longest_match(0, 5, 0, 9), Match { a: 0, b: 4, size: 5 });
    }

    #[test]
    fn test_popular_elements_in_long_second_sequence() {
        let long = format!("x{}", "a".repeat(250));
        // 'a' is never indexed, so no block can start on it...
        assert!(approx(SequenceMatcher::new("aaa", &long).ratio(), 0.0));
        // ...but a block starting on 'x' still extends across it.
        assert!(approx(SequenceMatcher::new("xaaa", &long).ratio(), 8.0 / 255.0));
        // Short second sequences are fully indexed.
        assert!(approx(SequenceMatcher::new(&long, "aaa").ratio(), 6.0 / 254.0));
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        let matcher = SequenceMatcher::new("лицензия", "лицензия mit");
        assert!(approx(matcher.ratio(), 16.0 / 20.0));
    }
}
