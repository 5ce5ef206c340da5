//! Study/Distraction message classification.
//!
//! A multinomial Naive Bayes classifier over a bag-of-words representation.
//! Trained exactly once at startup from the embedded corpus; after that every
//! call is a pure function of the frozen model and the input text.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::corpus::TrainingExample;
use crate::error::AppError;

/// The two-class target of the message classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Study,
    Distraction,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Label::Study => "Study",
            Label::Distraction => "Distraction",
        };
        write!(f, "{}", label)
    }
}

/// Class order used for the internal score arrays.
const CLASSES: [Label; 2] = [Label::Study, Label::Distraction];

/// Naive Bayes classifier with a closed vocabulary.
///
/// The vocabulary is fixed at training time; tokens never seen during training
/// carry no likelihood mass at inference time.
#[derive(Debug)]
pub struct MessageClassifier {
    /// Token -> row index into `log_likelihoods`.
    vocabulary: HashMap<String, usize>,
    /// Log prior probability per class.
    log_priors: [f64; 2],
    /// Laplace-smoothed log likelihood per vocabulary token, per class.
    log_likelihoods: Vec<[f64; 2]>,
}

/// Case-normalized, punctuation-delimited tokenization shared by training and
/// inference.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

impl MessageClassifier {
    /// Trains the classifier from a labeled corpus.
    ///
    /// Fatal if the corpus is empty or either class has zero examples; the
    /// process must not start with a model it cannot fit.
    pub fn train(corpus: &[TrainingExample]) -> Result<Self, AppError> {
        if corpus.is_empty() {
            return Err(AppError::Training("Training corpus is empty".to_string()));
        }

        let mut class_counts = [0usize; 2];
        for example in corpus {
            class_counts[class_index(example.label)] += 1;
        }
        for (idx, count) in class_counts.iter().enumerate() {
            if *count == 0 {
                return Err(AppError::Training(format!(
                    "No training examples labeled {}",
                    CLASSES[idx]
                )));
            }
        }

        // Build the vocabulary and per-class token counts in one pass.
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut token_counts: Vec<[usize; 2]> = Vec::new();
        let mut class_token_totals = [0usize; 2];

        for example in corpus {
            let class = class_index(example.label);
            for token in tokenize(example.text) {
                let next_index = vocabulary.len();
                let index = *vocabulary.entry(token).or_insert(next_index);
                if index == token_counts.len() {
                    token_counts.push([0; 2]);
                }
                token_counts[index][class] += 1;
                class_token_totals[class] += 1;
            }
        }

        let total_examples = corpus.len() as f64;
        let log_priors = [
            (class_counts[0] as f64 / total_examples).ln(),
            (class_counts[1] as f64 / total_examples).ln(),
        ];

        // Add-one smoothing over the full vocabulary.
        let vocab_size = vocabulary.len() as f64;
        let log_likelihoods = token_counts
            .iter()
            .map(|counts| {
                [
                    ((counts[0] as f64 + 1.0) / (class_token_totals[0] as f64 + vocab_size)).ln(),
                    ((counts[1] as f64 + 1.0) / (class_token_totals[1] as f64 + vocab_size)).ln(),
                ]
            })
            .collect();

        tracing::info!(
            vocabulary = vocabulary.len(),
            study = class_counts[0],
            distraction = class_counts[1],
            "Message classifier trained"
        );

        Ok(Self {
            vocabulary,
            log_priors,
            log_likelihoods,
        })
    }

    /// Classifies a message as Study or Distraction.
    ///
    /// Tokens outside the training vocabulary are ignored. When the input
    /// shares no tokens with the vocabulary, the scores reduce to the priors,
    /// so the result is the class with the higher prior (Distraction for the
    /// embedded corpus). Exact score ties resolve the same way: higher prior
    /// wins.
    pub fn classify(&self, text: &str) -> Label {
        let mut scores = self.log_priors;

        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                let likelihood = self.log_likelihoods[index];
                scores[0] += likelihood[0];
                scores[1] += likelihood[1];
            }
        }

        let (favored, other) = if self.log_priors[0] >= self.log_priors[1] {
            (0, 1)
        } else {
            (1, 0)
        };

        if scores[other] > scores[favored] {
            CLASSES[other]
        } else {
            CLASSES[favored]
        }
    }
}

fn class_index(label: Label) -> usize {
    match label {
        Label::Study => 0,
        Label::Distraction => 1,
    }
}
