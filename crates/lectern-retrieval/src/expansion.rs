//! Default query expander.

use lectern_core::errors::LecternResult;
use lectern_core::traits::IQueryExpander;

/// Minimal expander: trims the raw query and returns it as the single
/// expansion. A blank query expands to nothing, which short-circuits
/// retrieval to an empty result. Richer expanders (LLM paraphrasing,
/// sub-question splitting) plug in through the same trait.
#[derive(Debug, Default)]
pub struct TrimExpander;

impl TrimExpander {
    pub fn new() -> Self {
        Self
    }
}

impl IQueryExpander for TrimExpander {
    fn expand(&self, query: &str) -> LecternResult<Vec<String>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![trimmed.to_string()])
        }
    }
}
