/// Text preprocessing collaborator: cleaning and sentence-aware chunking.
/// Both are pure functions of the input text.
pub trait IPreprocessor: Send + Sync {
    /// Normalize whitespace and strip noise from raw document text.
    fn clean(&self, text: &str) -> String;

    /// Split cleaned text into bounded-length chunks.
    fn chunk(&self, text: &str, max_tokens: usize) -> Vec<String>;
}
