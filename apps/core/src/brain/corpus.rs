//! Embedded training corpus.
//!
//! A small fixed dataset distinguishing study talk from distractions. It ships
//! with the binary, is created once at startup, and is never mutated.

use super::classifier::Label;

/// One labeled training text.
#[derive(Debug, Clone, Copy)]
pub struct TrainingExample {
    pub text: &'static str,
    pub label: Label,
}

const CORPUS: &[TrainingExample] = &[
    TrainingExample {
        text: "I need help with calculus",
        label: Label::Study,
    },
    TrainingExample {
        text: "Let's study python",
        label: Label::Study,
    },
    TrainingExample {
        text: "What is photosynthesis?",
        label: Label::Study,
    },
    TrainingExample {
        text: "Explain Newton's laws",
        label: Label::Study,
    },
    TrainingExample {
        text: "When is the exam?",
        label: Label::Study,
    },
    TrainingExample {
        text: "homework is due tomorrow",
        label: Label::Study,
    },
    TrainingExample {
        text: "solving equations is hard",
        label: Label::Study,
    },
    TrainingExample {
        text: "reading history book",
        label: Label::Study,
    },
    TrainingExample {
        text: "focusing on chemistry",
        label: Label::Study,
    },
    TrainingExample {
        text: "let's play a game",
        label: Label::Distraction,
    },
    TrainingExample {
        text: "watch movie tonight?",
        label: Label::Distraction,
    },
    TrainingExample {
        text: "send me the meme",
        label: Label::Distraction,
    },
    TrainingExample {
        text: "hahaha that's funny",
        label: Label::Distraction,
    },
    TrainingExample {
        text: "bored tired sleepy",
        label: Label::Distraction,
    },
    TrainingExample {
        text: "going to sleep",
        label: Label::Distraction,
    },
    TrainingExample {
        text: "ordering pizza",
        label: Label::Distraction,
    },
    TrainingExample {
        text: "check instagram",
        label: Label::Distraction,
    },
    TrainingExample {
        text: "playing valorant",
        label: Label::Distraction,
    },
    TrainingExample {
        text: "listening to music",
        label: Label::Distraction,
    },
];

/// The fixed training corpus: 9 Study examples, 10 Distraction examples.
pub fn training_corpus() -> &'static [TrainingExample] {
    CORPUS
}
