//! Reciprocal Rank Fusion: score = Σ 1/(k + rank)
//!
//! Merges the per-expansion candidate lists into one ranking without
//! normalizing similarity scores across expansions. Identity across
//! lists is the store insertion index; a merged candidate keeps its best
//! similarity score. With a single input list the fused order equals the
//! input order, since 1/(k + rank) decreases strictly with rank.

use std::collections::HashMap;

use lectern_core::models::Candidate;

/// Fuse candidate lists from multiple query expansions into one ranking.
///
/// `k` is the smoothing constant (default 60). Higher k reduces the
/// influence of top-ranked items from any single list. Ties in fused
/// score break by ascending store index.
pub fn fuse(lists: &[Vec<Candidate>], k: u32) -> Vec<Candidate> {
    let mut fused_scores: HashMap<usize, f64> = HashMap::new();
    let mut merged: HashMap<usize, Candidate> = HashMap::new();

    for list in lists {
        for (rank, candidate) in list.iter().enumerate() {
            let rrf = 1.0 / (k as f64 + rank as f64);
            *fused_scores.entry(candidate.store_index).or_default() += rrf;

            merged
                .entry(candidate.store_index)
                .and_modify(|existing| {
                    if candidate.score > existing.score {
                        existing.score = candidate.score;
                    }
                })
                .or_insert_with(|| candidate.clone());
        }
    }

    let mut ranked: Vec<(f64, Candidate)> = merged
        .into_iter()
        .map(|(index, candidate)| (fused_scores[&index], candidate))
        .collect();
    ranked.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.1.store_index.cmp(&b.1.store_index))
    });
    ranked.into_iter().map(|(_, candidate)| candidate).collect()
}
