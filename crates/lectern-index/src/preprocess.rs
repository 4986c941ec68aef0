//! Default text preprocessor: whitespace normalization and
//! sentence-accumulating chunking.

use lectern_core::traits::IPreprocessor;

/// Sentence-aware preprocessor. Cleaning collapses all whitespace runs
/// (including ideographic spaces) to single ASCII spaces; chunking
/// accumulates whole sentences up to a character budget so no chunk cuts
/// through a sentence.
#[derive(Debug, Default)]
pub struct SentencePreprocessor;

impl SentencePreprocessor {
    pub fn new() -> Self {
        Self
    }
}

impl IPreprocessor for SentencePreprocessor {
    fn clean(&self, text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn chunk(&self, text: &str, max_tokens: usize) -> Vec<String> {
        let sentences = split_sentences(&self.clean(text));

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_chars = 0usize;

        for sent in sentences {
            let sent_chars = sent.chars().count();
            if current_chars > 0 && current_chars + sent_chars > max_tokens {
                chunks.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_chars += 1;
            }
            current.push_str(&sent);
            current_chars += sent_chars;
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }
}

/// Split text into sentences at terminal punctuation. Latin enders need a
/// following space (or end-of-string) to count as a boundary; CJK enders
/// are boundaries on their own.
fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for i in 0..len {
        current.push(chars[i]);

        let latin_terminal = matches!(chars[i], '.' | '!' | '?');
        let cjk_terminal = matches!(chars[i], '。' | '！' | '？');
        if !latin_terminal && !cjk_terminal {
            continue;
        }

        let at_end = i + 1 >= len;
        let next_is_space = !at_end && chars[i + 1].is_whitespace();
        if cjk_terminal || at_end || next_is_space {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    sentences
}
