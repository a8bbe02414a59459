pub mod config;
pub mod error;
pub mod sentence_tokenizer;
pub mod word_tokenizer;

// Re-export main types for convenient access
pub use config::{Mode, TokenizerConfig};
pub use error::TokenizerError;
pub use sentence_tokenizer::{
    NonBreakingPrefixTable, PrefixClassification, PrefixSource, SentenceTokenizer,
};
pub use word_tokenizer::WordTokenizer;
