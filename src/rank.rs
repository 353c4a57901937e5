use std::cmp::Reverse;

use crate::Score;

/// Convert scores into 1-based ranks, where rank 1 is the highest score. The result is always a
/// permutation of `1..=n`.
///
/// Scores are sorted ascending and the sorting permutation is inverted to find each alternative's
/// ascending position `p`, giving `rank = n - p`. Exactly equal scores are ordered by index so
/// that the alternative submitted first receives the better rank.
pub fn rank(scores: &[Score]) -> Vec<usize> {
    let n = scores.len();
    let keyed: Vec<(usize, Score)> = scores.iter().copied().enumerate().collect();
    let sort = permutation::sort_by_key(&keyed, |&(index, score)| (score, Reverse(index)));
    let positions: Vec<usize> = (0..n).collect();
    sort.inverse()
        .apply_slice(&positions)
        .into_iter()
        .map(|position| n - position)
        .collect()
}
