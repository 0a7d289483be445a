//! Sequence similarity ratio.
//!
//! The ratio of two sequences is `2·M / T`, where `T` is their total length
//! and `M` the number of elements in matching blocks. Blocks are found the
//! Ratcliff/Obershelp way: take the longest common contiguous block, then
//! recurse into the pieces on either side of it. Two empty sequences have a
//! ratio of 1.0.
//!
//! Ties between equally long blocks are broken towards the earliest block in
//! the first sequence, which makes the raw ratio order-sensitive in rare
//! cases. [`symmetric_ratio`] puts the pair into a canonical order first, so
//! `symmetric_ratio(a, b) == symmetric_ratio(b, a)` always holds.

use smallvec::SmallVec;

/// A common block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    /// Start in the first sequence
    pub a: usize,
    /// Start in the second sequence
    pub b: usize,
    /// Block length
    pub size: usize,
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among blocks of maximal size the one starting earliest in `a` wins, then
/// the one starting earliest in `b`. A `size` of zero means no common
/// element.
pub fn longest_match<T: PartialEq>(
    a: &[T],
    b: &[T],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> Match {
    let mut best = Match {
        a: alo,
        b: blo,
        size: 0,
    };
    let width = bhi - blo;
    // run lengths ending at the previous / current element of `a`,
    // shifted by one so that index 0 stands for "before blo"
    let mut prev: SmallVec<[usize; 32]> = SmallVec::from_elem(0, width + 1);
    let mut cur: SmallVec<[usize; 32]> = SmallVec::from_elem(0, width + 1);

    for i in alo..ahi {
        for (jj, item) in b[blo..bhi].iter().enumerate() {
            if a[i] == *item {
                let k = prev[jj] + 1;
                cur[jj + 1] = k;
                if k > best.size {
                    best = Match {
                        a: i + 1 - k,
                        b: blo + jj + 1 - k,
                        size: k,
                    };
                }
            } else {
                cur[jj + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}

/// All matching blocks of `a` and `b`, ordered by position, adjacent
/// blocks merged.
pub fn matching_blocks<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Match> {
    let mut queue = vec![((0, a.len()), (0, b.len()))];
    let mut blocks = Vec::new();

    while let Some(((alo, ahi), (blo, bhi))) = queue.pop() {
        let m = longest_match(a, b, (alo, ahi), (blo, bhi));
        if m.size == 0 {
            continue;
        }
        if alo < m.a && blo < m.b {
            queue.push(((alo, m.a), (blo, m.b)));
        }
        if m.a + m.size < ahi && m.b + m.size < bhi {
            queue.push(((m.a + m.size, ahi), (m.b + m.size, bhi)));
        }
        blocks.push(m);
    }
    blocks.sort_by_key(|m| (m.a, m.b));

    let mut merged: Vec<Match> = Vec::with_capacity(blocks.len());
    for m in blocks {
        match merged.last_mut() {
            Some(last) if last.a + last.size == m.a && last.b + last.size == m.b => {
                last.size += m.size;
            }
            _ => merged.push(m),
        }
    }
    merged
}

/// Similarity ratio in `[0, 1]` of two sequences, in the given order.
pub fn similarity_ratio<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = matching_blocks(a, b).iter().map(|m| m.size).sum();
    2.0 * matched as f64 / total as f64
}

/// Similarity ratio with the pair in canonical (lexicographic) order.
pub fn symmetric_ratio<T: Ord>(a: &[T], b: &[T]) -> f64 {
    if a <= b {
        similarity_ratio(a, b)
    } else {
        similarity_ratio(b, a)
    }
}

/// [`symmetric_ratio`] over the chars of two strings.
pub fn str_ratio(a: &str, b: &str) -> f64 {
    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();
    symmetric_ratio(&a_chars, &b_chars)
}
