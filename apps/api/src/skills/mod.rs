// Skill catalog and keyword extraction.
// Shared by the recommendation engine's callers and the resume gap analyzer.

pub mod extractor;
pub mod vocabulary;
