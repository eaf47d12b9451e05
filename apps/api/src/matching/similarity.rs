//! Text Similarity — TF-IDF vectors over a two-document corpus, compared by cosine.
//!
//! Each call fits a fresh vocabulary on exactly the two input texts. Nothing learned in
//! one call survives into the next; only the vectorizer settings are reused.
//!
//! Degenerate input never raises: blank text or an empty vocabulary scores a neutral 0.5.

use std::collections::{BTreeMap, HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

/// Returned whenever similarity cannot be computed meaningfully.
pub const NEUTRAL_SIMILARITY: f64 = 0.5;

pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// English stop words (318), dropped before vectorization.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
    "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
    "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
    "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
    "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
    "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
    "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
    "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself",
    "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
    "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem",
    "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
    "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
    "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizeError {
    #[error("empty vocabulary; the documents contain only stop words")]
    EmptyVocabulary,
}

/// Reusable TF-IDF + cosine configuration. Cheap to clone, safe to share.
#[derive(Debug, Clone)]
pub struct TextSimilarityScorer {
    max_features: usize,
    stop_words: HashSet<&'static str>,
}

impl TextSimilarityScorer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Cosine similarity of the TF-IDF vectors of `a` and `b`, in [0, 1].
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.trim().is_empty() || b.trim().is_empty() {
            return NEUTRAL_SIMILARITY;
        }

        match self.vectorize(&[a, b]) {
            Ok(vectors) => cosine(&vectors[0], &vectors[1]).clamp(0.0, 1.0),
            Err(e) => {
                debug!("Similarity fell back to neutral: {e}");
                NEUTRAL_SIMILARITY
            }
        }
    }

    /// Fits a vocabulary on `documents` and returns one L2-normalised vector per document.
    fn vectorize(&self, documents: &[&str]) -> Result<Vec<Vec<f64>>, VectorizeError> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();

        let vocabulary = self.build_vocabulary(&tokenized);
        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
        let n_documents = documents.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for token in unique {
                if let Some(&idx) = vocabulary.get(token.as_str()) {
                    idf[idx] += 1.0;
                }
            }
        }
        for value in &mut idf {
            *value = ((1.0 + n_documents) / (1.0 + *value)).ln() + 1.0;
        }

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                let mut vector = vec![0.0; vocabulary.len()];
                for token in tokens {
                    if let Some(&idx) = vocabulary.get(token.as_str()) {
                        vector[idx] += 1.0;
                    }
                }
                for (value, weight) in vector.iter_mut().zip(&idf) {
                    *value *= weight;
                }
                l2_normalize(&mut vector);
                vector
            })
            .collect();

        Ok(vectors)
    }

    /// Lower-cased runs of two or more word characters, stop words removed.
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|token| token.chars().count() >= 2)
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Term -> column index. Keeps the `max_features` most frequent terms, ties alphabetical.
    fn build_vocabulary(&self, tokenized: &[Vec<String>]) -> HashMap<String, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for token in tokenized.iter().flatten() {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut terms: Vec<(&str, usize)> = counts.into_iter().collect();
        if terms.len() > self.max_features {
            terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            terms.truncate(self.max_features);
            terms.sort_by(|a, b| a.0.cmp(&b.0));
        }

        terms
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term.to_string(), idx))
            .collect()
    }
}

impl Default for TextSimilarityScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
