//! Cross-encoder reranking adapter.
//!
//! Scores a fixed query against a batch of candidate texts, independent
//! of how the candidates were produced upstream. The text scored per
//! candidate is the abstract when present, the raw chunk text otherwise —
//! the same selection the indexer embeds, so comparisons stay consistent.

use tracing::debug;

use lectern_core::errors::{upstream_err, LecternResult};
use lectern_core::models::Candidate;
use lectern_core::traits::IRerankScorer;

/// Adapter around an injected cross-encoder scorer.
pub struct Reranker<'a> {
    scorer: &'a dyn IRerankScorer,
}

impl<'a> Reranker<'a> {
    pub fn new(scorer: &'a dyn IRerankScorer) -> Self {
        Self { scorer }
    }

    /// Score the candidates against `query`, attach `rerank_score`,
    /// stable-sort descending, and keep the top `top_k`.
    ///
    /// Empty input returns empty without invoking the scoring model. A
    /// scoring failure is fatal for this call — there is no silent
    /// fallback to similarity ordering.
    pub fn rerank(
        &self,
        query: &str,
        mut candidates: Vec<Candidate>,
        top_k: usize,
    ) -> LecternResult<Vec<Candidate>> {
        if candidates.is_empty() {
            return Ok(candidates);
        }

        let docs: Vec<String> = candidates
            .iter()
            .map(|c| c.metadata.ranking_text().to_string())
            .collect();
        let scores = self
            .scorer
            .score(query, &docs)
            .map_err(|e| upstream_err("rerank", e))?;
        if scores.len() != candidates.len() {
            return Err(upstream_err(
                "rerank",
                format!(
                    "scorer returned {} scores for {} candidates",
                    scores.len(),
                    candidates.len()
                ),
            ));
        }

        for (candidate, score) in candidates.iter_mut().zip(scores) {
            candidate.rerank_score = Some(score);
        }
        candidates.sort_by(|a, b| {
            b.rerank_score
                .partial_cmp(&a.rerank_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(top_k);

        debug!(kept = candidates.len(), "rerank pass complete");
        Ok(candidates)
    }
}
