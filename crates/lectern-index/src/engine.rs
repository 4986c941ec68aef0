//! IndexingEngine: drives one offline indexing run end to end.
//!
//! `LOADED → CLEANED → CHUNKED → {ABSTRACTED | PASSTHROUGH} → EMBEDDED → INDEXED`.
//! Failures carry the stage that raised; nothing is retried.

use tracing::{debug, info};

use lectern_core::config::IndexingConfig;
use lectern_core::errors::{upstream_err, LecternResult};
use lectern_core::models::{
    ChunkMetadata, IndexMode, IndexReport, IndexingStage, SourceDocument,
};
use lectern_core::traits::{IAbstractor, IEmbedder, IPreprocessor};
use lectern_store::VectorStore;

use crate::cache::AbstractCache;

/// The offline indexing engine. Collaborators are injected at
/// construction; there is no implicit shared model state.
pub struct IndexingEngine<'a> {
    store: &'a mut VectorStore,
    embedder: &'a dyn IEmbedder,
    abstractor: &'a dyn IAbstractor,
    preprocessor: &'a dyn IPreprocessor,
    cache: AbstractCache,
    config: IndexingConfig,
}

impl<'a> IndexingEngine<'a> {
    pub fn new(
        store: &'a mut VectorStore,
        embedder: &'a dyn IEmbedder,
        abstractor: &'a dyn IAbstractor,
        preprocessor: &'a dyn IPreprocessor,
        cache: AbstractCache,
        config: IndexingConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            abstractor,
            preprocessor,
            cache,
            config,
        }
    }

    /// Index a corpus of documents. Each document is cleaned, chunked,
    /// abstracted (or passed through), embedded, and appended to the
    /// store as one batch. An empty corpus indexes nothing and succeeds.
    ///
    /// The store keeps duplicates, so re-running over an already-indexed
    /// corpus inserts every chunk a second time — callers own that
    /// discipline.
    pub fn index(
        &mut self,
        documents: &[SourceDocument],
        mode: IndexMode,
    ) -> LecternResult<IndexReport> {
        info!(documents = documents.len(), ?mode, "indexing run started");

        // Clean + chunk. Chunk ids are per-document: "{source_id}_chunk{i}".
        let mut ids = Vec::new();
        let mut chunks: Vec<String> = Vec::new();
        for doc in documents {
            let cleaned = self.preprocessor.clean(&doc.text);
            let doc_chunks = self
                .preprocessor
                .chunk(&cleaned, self.config.chunk_max_tokens);
            for (i, chunk) in doc_chunks.into_iter().enumerate() {
                ids.push(format!("{}_chunk{i}", doc.id));
                chunks.push(chunk);
            }
        }
        debug!(chunks = chunks.len(), stage = %IndexingStage::Chunked, "corpus chunked");

        if chunks.is_empty() {
            return Ok(IndexReport {
                documents: documents.len(),
                chunks: 0,
                mode,
                reused_cached_abstracts: false,
            });
        }

        // Abstract or pass through.
        let (abstracts, reused) = match mode {
            IndexMode::NoSummarize => {
                debug!(stage = %IndexingStage::Passthrough, "skipping abstraction, chunks used verbatim");
                (chunks.clone(), false)
            }
            IndexMode::Summarize => self.abstracts_for(&chunks)?,
        };

        // Embed the abstracts in one batch call.
        let embeddings = self
            .embedder
            .embed_batch(&abstracts)
            .map_err(|e| upstream_err(IndexingStage::Embedded.as_str(), e))?;
        if embeddings.len() != chunks.len() {
            return Err(upstream_err(
                IndexingStage::Embedded.as_str(),
                format!(
                    "embedder returned {} vectors for {} chunks",
                    embeddings.len(),
                    chunks.len()
                ),
            ));
        }

        let metadatas: Vec<ChunkMetadata> = ids
            .into_iter()
            .zip(chunks.iter())
            .zip(abstracts.iter())
            .map(|((id, text), abstract_text)| ChunkMetadata::new(id, text, abstract_text))
            .collect();
        let chunk_count = metadatas.len();

        self.store.add(&embeddings, metadatas)?;

        info!(
            documents = documents.len(),
            chunks = chunk_count,
            reused_cached_abstracts = reused,
            stage = %IndexingStage::Indexed,
            "indexing run complete"
        );
        Ok(IndexReport {
            documents: documents.len(),
            chunks: chunk_count,
            mode,
            reused_cached_abstracts: reused,
        })
    }

    /// Cached abstracts when the corpus fingerprint matches, otherwise a
    /// fresh abstraction pass persisted for the next run.
    fn abstracts_for(&self, chunks: &[String]) -> LecternResult<(Vec<String>, bool)> {
        let fingerprint = AbstractCache::fingerprint(chunks);
        if let Some(cached) = self.cache.lookup(&fingerprint) {
            info!(chunks = chunks.len(), stage = %IndexingStage::Abstracted, "reusing cached abstracts");
            return Ok((cached, true));
        }

        let abstracts = self
            .abstractor
            .abstract_batch(chunks)
            .map_err(|e| upstream_err(IndexingStage::Abstracted.as_str(), e))?;
        if abstracts.len() != chunks.len() {
            return Err(upstream_err(
                IndexingStage::Abstracted.as_str(),
                format!(
                    "abstractor returned {} abstracts for {} chunks",
                    abstracts.len(),
                    chunks.len()
                ),
            ));
        }

        self.cache.save(&fingerprint, &abstracts)?;
        Ok((abstracts, false))
    }
}
