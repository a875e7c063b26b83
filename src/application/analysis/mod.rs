pub mod normalizer;
pub mod sorter;
pub mod tokenizer;
pub mod types;

pub use normalizer::normalize;
pub use sorter::{SortMode, sort};
pub use tokenizer::Tokenizer;
pub use types::{AnalysisSession, WordEntry, WordTable};
