use serde::{Deserialize, Serialize};

const QUESTION_WORDS: &[&str] = &[
    "what", "when", "where", "who", "whom", "whose", "which", "why", "how", "can", "could",
    "would", "should", "will", "is", "are", "was", "were", "do", "does", "did",
];

/// Minimum confidence for a fragment to count as a question
const QUESTION_CUTOFF: f64 = 0.5;

/// A question found in a transcript line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedQuestion {
    pub text: String,

    /// Heuristic confidence (0.0 to 1.0)
    pub confidence: f64,

    /// Sequence of the transcript entry the question came from
    pub entry_sequence: usize,
}

/// Scores sentences by punctuation and leading interrogative words.
#[derive(Debug, Clone, Default)]
pub struct QuestionDetector;

impl QuestionDetector {
    pub fn new() -> Self {
        Self
    }

    /// Returns whether `text` reads as a question, with its confidence.
    pub fn score(&self, text: &str) -> (bool, f64) {
        let text = text.trim();
        let mut words = text.split_whitespace();
        let Some(first) = words.next() else {
            return (false, 0.0);
        };

        let mut confidence = 0.0;

        // A closing run like "?!" or "??" counts when it holds a '?'.
        let body = text.trim_end_matches(is_terminator);
        if text[body.len()..].contains('?') {
            confidence += 0.6;
        }

        let first = first
            .to_lowercase()
            .trim_end_matches(['?', ',', ':', ';'])
            .to_string();
        if QUESTION_WORDS.contains(&first.as_str()) {
            confidence += 0.3;
        }

        // Substring match over the first three words, so "this" hits "is".
        let first_three = text
            .split_whitespace()
            .take(3)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if QUESTION_WORDS.iter().any(|w| first_three.contains(w)) {
            confidence += 0.2;
        }

        let confidence = f64::min(confidence, 1.0);
        (confidence >= QUESTION_CUTOFF, confidence)
    }

    /// Split `text` into sentences and keep the ones that score as questions.
    ///
    /// Each sentence keeps its closing run of terminators so a trailing `?`
    /// still counts.
    pub fn extract_questions(&self, text: &str, entry_sequence: usize) -> Vec<DetectedQuestion> {
        sentences(text)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|sentence| {
                let (is_question, confidence) = self.score(sentence);
                is_question.then(|| DetectedQuestion {
                    text: sentence.to_string(),
                    confidence,
                    entry_sequence,
                })
            })
            .collect()
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split after the last terminator of each run, so "Why??" stays whole.
fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let run_continues = chars.peek().is_some_and(|&(_, next)| is_terminator(next));
        if is_terminator(c) && !run_continues {
            let end = i + c.len_utf8();
            out.push(&text[start..end]);
            start = end;
        }
    }
    if start < text.len() {
        out.push(&text[start..]);
    }

    out
}
