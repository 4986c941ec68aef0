use crate::errors::LecternResult;

/// Query expansion collaborator: zero or more search strings derived
/// from a raw query. An empty result short-circuits retrieval to an
/// empty answer.
pub trait IQueryExpander: Send + Sync {
    fn expand(&self, query: &str) -> LecternResult<Vec<String>>;
}
