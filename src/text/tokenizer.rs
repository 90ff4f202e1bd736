use std::fmt;

/// Trait for word tokenization
pub trait Tokenizer: Send + Sync + fmt::Debug {
    /// Split text into tokens
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Lowercases text and splits it on whitespace.
///
/// Punctuation stays attached to its word, so `"mat."` and `"mat"` are
/// different tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

/// A token counts as content when it is non-empty and every character is
/// alphanumeric
pub fn is_content_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokens = WhitespaceTokenizer.tokenize("The Cat\tsat  on\nthe MAT.");
        assert_eq!(tokens, vec!["the", "cat", "sat", "on", "the", "mat."]);
    }

    #[test]
    fn test_empty_text() {
        assert!(WhitespaceTokenizer.tokenize("  \n ").is_empty());
    }

    #[test]
    fn test_is_content_token() {
        assert!(is_content_token("cat"));
        assert!(is_content_token("2023"));
        assert!(is_content_token("café"));
        assert!(!is_content_token("mat."));
        assert!(!is_content_token("don't"));
        assert!(!is_content_token("--"));
        assert!(!is_content_token(""));
    }
}
