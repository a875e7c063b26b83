pub mod classifier;
pub mod loader;
pub mod types;

pub use classifier::classify;
pub use loader::{load_stopwords, load_toxic_words};
pub use types::{StopwordSet, ToxicDictionary, severity_label};
