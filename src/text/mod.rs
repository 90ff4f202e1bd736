mod normalizer;
mod sentences;
mod stopwords;
mod tokenizer;

pub use normalizer::{collapse_whitespace, normalize, word_count};
pub use sentences::{EnglishSegmenter, Sentence, SentenceSegmenter};
pub use stopwords::StopwordFilter;
pub use tokenizer::{is_content_token, Tokenizer, WhitespaceTokenizer};
