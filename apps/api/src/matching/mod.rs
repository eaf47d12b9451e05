// Recommendation ranking: similarity scoring, match signals, and the engine that
// combines them into an explained, ordered list.

pub mod engine;
pub mod handlers;
pub mod scorers;
pub mod similarity;
