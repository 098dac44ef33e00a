//! LCS alignment of two token sequences.
//!
//! * time: `O(MN)`
//! * space `O(MN)`
//!
//! Meant for paragraph-sized inputs such as form fields, not for whole
//! documents.
//!
//! The walk over the score table is canonical: on a mismatch where dropping
//! the old token and taking the new token score the same, the old token is
//! emitted as removed first. Every consumer relies on this to get the same
//! operations for the same pair of texts.

use tracing::trace;

use super::segment::{Segment, push_segment};
use crate::{tokenizer::token::Token, utils::common_prefix_len::common_prefix_len};

/// Align `old` and `new`, returning segments that cover every token of both
/// sequences exactly once and in order.
#[must_use]
pub fn align(old: &[Token], new: &[Token]) -> Vec<Segment> {
    // The walk takes matches greedily, so a shared prefix is emitted the same
    // way without building its part of the table. A shared suffix can't be
    // skipped like this as it would change which tie the walk breaks.
    let prefix_len = common_prefix_len(old, new);
    let (old_rest, new_rest) = (&old[prefix_len..], &new[prefix_len..]);

    trace!(
        old_len = old.len(),
        new_len = new.len(),
        prefix_len,
        "aligning token sequences"
    );

    let mut result = Vec::new();
    push_segment(&mut result, Segment::Equal(old[..prefix_len].to_vec()));

    let table = LcsTable::new(old_rest, new_rest);
    let mut old_idx = 0;
    let mut new_idx = 0;

    while old_idx < old_rest.len() && new_idx < new_rest.len() {
        if old_rest[old_idx] == new_rest[new_idx] {
            push_segment(&mut result, Segment::Equal(vec![old_rest[old_idx].clone()]));
            old_idx += 1;
            new_idx += 1;
        } else if table.score(old_idx + 1, new_idx) >= table.score(old_idx, new_idx + 1) {
            push_segment(&mut result, Segment::Removed(vec![old_rest[old_idx].clone()]));
            old_idx += 1;
        } else {
            push_segment(&mut result, Segment::Added(vec![new_rest[new_idx].clone()]));
            new_idx += 1;
        }
    }

    push_segment(&mut result, Segment::Removed(old_rest[old_idx..].to_vec()));
    push_segment(&mut result, Segment::Added(new_rest[new_idx..].to_vec()));

    result
}

/// `score(i, j)` is the length of the longest common subsequence of
/// `old[i..]` and `new[j..]`, stored row-major in an `(M + 1) x (N + 1)` grid.
#[derive(Debug)]
struct LcsTable {
    columns: usize,
    scores: Vec<usize>,
}

impl LcsTable {
    fn new<T>(old: &[T], new: &[T]) -> Self
    where
        T: PartialEq,
    {
        let columns = new.len() + 1;
        let mut scores = vec![0; (old.len() + 1) * columns];

        for i in (0..old.len()).rev() {
            for j in (0..new.len()).rev() {
                scores[i * columns + j] = if old[i] == new[j] {
                    scores[(i + 1) * columns + j + 1] + 1
                } else {
                    scores[(i + 1) * columns + j].max(scores[i * columns + j + 1])
                };
            }
        }

        Self { columns, scores }
    }

    fn score(&self, old_idx: usize, new_idx: usize) -> usize {
        self.scores[old_idx * self.columns + new_idx]
    }
}
