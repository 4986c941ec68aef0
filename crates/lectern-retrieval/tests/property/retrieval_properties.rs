//! Property tests: rerank scoring independence and ordering.

use proptest::prelude::*;

use lectern_core::errors::LecternResult;
use lectern_core::models::{Candidate, ChunkMetadata};
use lectern_core::traits::IRerankScorer;
use lectern_retrieval::Reranker;

/// Synthetic deterministic scorer: a pure function of (query, doc) with
/// no batch interaction whatsoever.
struct HashScorer;

impl IRerankScorer for HashScorer {
    fn score(&self, query: &str, docs: &[String]) -> LecternResult<Vec<f32>> {
        Ok(docs
            .iter()
            .map(|d| {
                let mixed: u32 = query
                    .bytes()
                    .chain(d.bytes())
                    .fold(17u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
                (mixed % 1000) as f32 / 1000.0
            })
            .collect())
    }
}

fn candidate(i: usize, abstract_text: &str) -> Candidate {
    Candidate {
        metadata: ChunkMetadata::new(format!("c{i}"), format!("text {i}"), abstract_text),
        score: 0.5,
        rerank_score: None,
        store_index: i,
    }
}

proptest! {
    /// A document's rerank score must not depend on what else is in the
    /// batch: scored alone vs. inside a batch of five yields the same value.
    #[test]
    fn prop_rerank_score_independent_of_batch(
        target in "[a-z]{1,20}",
        others in prop::collection::vec("[a-z]{1,20}", 4),
        query in "[a-z ]{1,30}",
    ) {
        let scorer = HashScorer;
        let reranker = Reranker::new(&scorer);

        let alone = reranker
            .rerank(&query, vec![candidate(0, &target)], 10)
            .unwrap();
        let alone_score = alone[0].rerank_score.unwrap();

        let mut batch = vec![candidate(0, &target)];
        for (i, doc) in others.iter().enumerate() {
            batch.push(candidate(i + 1, doc));
        }
        let batched = reranker.rerank(&query, batch, 10).unwrap();
        let in_batch_score = batched
            .iter()
            .find(|c| c.store_index == 0)
            .unwrap()
            .rerank_score
            .unwrap();

        prop_assert_eq!(alone_score, in_batch_score);
    }

    /// Rerank output is sorted descending by rerank score and bounded by
    /// top_k.
    #[test]
    fn prop_rerank_sorted_and_k_bounded(
        docs in prop::collection::vec("[a-z]{1,20}", 1..8),
        query in "[a-z ]{1,30}",
        top_k in 1usize..10,
    ) {
        let scorer = HashScorer;
        let reranker = Reranker::new(&scorer);
        let candidates: Vec<Candidate> = docs
            .iter()
            .enumerate()
            .map(|(i, d)| candidate(i, d))
            .collect();

        let reranked = reranker.rerank(&query, candidates, top_k).unwrap();
        prop_assert_eq!(reranked.len(), top_k.min(docs.len()));
        for pair in reranked.windows(2) {
            prop_assert!(pair[0].rerank_score.unwrap() >= pair[1].rerank_score.unwrap());
        }
    }
}
