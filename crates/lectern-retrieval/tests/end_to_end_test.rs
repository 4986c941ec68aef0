//! Full pipeline: index a corpus, reopen the store from disk, retrieve.

use lectern_core::config::{IndexingConfig, RetrievalConfig};
use lectern_core::errors::LecternResult;
use lectern_core::models::{IndexMode, SourceDocument};
use lectern_core::traits::{IAbstractor, IEmbedder, IRerankScorer};
use lectern_index::{AbstractCache, IndexingEngine, SentencePreprocessor};
use lectern_retrieval::{RetrievalEngine, TrimExpander};
use lectern_store::VectorStore;

/// Embedding stub with a crude topical axis: texts mentioning "entropy"
/// point one way, texts mentioning "gravity" the other.
struct TopicEmbedder;

impl IEmbedder for TopicEmbedder {
    fn embed_batch(&self, texts: &[String]) -> LecternResult<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|t| {
                let entropy = t.matches("entropy").count() as f32;
                let gravity = t.matches("gravity").count() as f32;
                vec![entropy, gravity, 1.0]
            })
            .collect())
    }

    fn name(&self) -> &str {
        "topic-embedder"
    }
}

struct FirstWordsAbstractor;

impl IAbstractor for FirstWordsAbstractor {
    fn abstract_batch(&self, chunks: &[String]) -> LecternResult<Vec<String>> {
        Ok(chunks
            .iter()
            .map(|c| c.split(' ').take(4).collect::<Vec<_>>().join(" "))
            .collect())
    }
}

struct LenScorer;

impl IRerankScorer for LenScorer {
    fn score(&self, _query: &str, docs: &[String]) -> LecternResult<Vec<f32>> {
        Ok(docs.iter().map(|d| d.chars().count() as f32).collect())
    }
}

#[test]
fn index_then_retrieve_across_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let index_path = dir.path().join("db/index.lidx");
    let embedder = TopicEmbedder;

    // Offline: index two documents in passthrough mode.
    {
        let mut store = VectorStore::open(&index_path).unwrap();
        let abstractor = FirstWordsAbstractor;
        let preprocessor = SentencePreprocessor::new();
        let mut indexer = IndexingEngine::new(
            &mut store,
            &embedder,
            &abstractor,
            &preprocessor,
            AbstractCache::new(dir.path().join("db/abstracts.json")),
            IndexingConfig::default(),
        );

        let docs = vec![
            SourceDocument::new(
                "thermo.txt",
                "The entropy of an isolated system never decreases over time. \
                 This entropy law underpins the arrow of time.",
            ),
            SourceDocument::new(
                "mechanics.txt",
                "The gravity between two bodies falls off with squared distance.",
            ),
        ];
        let report = indexer.index(&docs, IndexMode::NoSummarize).unwrap();
        assert!(report.chunks >= 2);
    }

    // Online: a fresh process reopens the persisted store and retrieves.
    let store = VectorStore::open(&index_path).unwrap();
    let expander = TrimExpander::new();
    let scorer = LenScorer;
    let engine = RetrievalEngine::new(
        &store,
        &embedder,
        &expander,
        &scorer,
        RetrievalConfig::default(),
    );

    let results = engine.retrieve("what is entropy", Some(1), false).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].metadata.id.starts_with("thermo.txt_chunk"));

    let results = engine.retrieve("how does gravity work", Some(1), false).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].metadata.id.starts_with("mechanics.txt_chunk"));

    // Rerank mode runs over the same candidates and still answers.
    let results = engine.retrieve("what is entropy", Some(2), true).unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|c| c.rerank_score.is_some()));
}
