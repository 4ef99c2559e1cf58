//! Pipeline stages up to edge construction, plus the shared sort helpers.

pub mod dedup;
pub mod dictionary;
pub mod jaro_winkler;
pub mod ordering;
pub mod sentence_splitter;
pub mod vectorizer;
pub mod weighing;
pub mod word_tokenizer;
