use serde::{Deserialize, Serialize};

/// Keywords that mark a question as needing the strongest model
const COMPLEX_KEYWORDS: &[&str] = &[
    "analyze",
    "compare",
    "contrast",
    "evaluate",
    "explain",
    "strategic",
    "architecture",
    "design",
    "implement",
    "calculate",
    "estimate",
    "predict",
    "legal",
    "compliance",
];

/// How demanding a question is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    /// Classify a question by keywords, length and how many parts it has.
    pub fn classify(question: &str) -> Self {
        let lower = question.to_lowercase();
        let word_count = question.split_whitespace().count();

        let has_complex = COMPLEX_KEYWORDS.iter().any(|kw| lower.contains(kw));
        let multi_part = question.matches('?').count() > 1 || lower.contains(" and ");

        if has_complex || word_count > 25 {
            Complexity::Complex
        } else if multi_part || word_count > 15 {
            Complexity::Moderate
        } else {
            Complexity::Simple
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}

/// Model name per complexity tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelRoutes {
    pub simple: String,
    pub moderate: String,
    pub complex: String,
}

impl Default for ModelRoutes {
    fn default() -> Self {
        Self {
            simple: "gemini-2.0-flash-exp".to_string(),
            moderate: "gemini-1.5-pro".to_string(),
            complex: "gemini-1.5-pro".to_string(),
        }
    }
}

/// Routes questions to a model.
#[derive(Debug, Clone, Default)]
pub struct ModelRouter {
    routes: ModelRoutes,
}

impl ModelRouter {
    pub fn new(routes: ModelRoutes) -> Self {
        Self { routes }
    }

    /// Pick a model for `question`. A forced complexity skips classification.
    pub fn route(&self, question: &str, forced: Option<Complexity>) -> (Complexity, &str) {
        let complexity = forced.unwrap_or_else(|| Complexity::classify(question));
        (complexity, self.model_for(complexity))
    }

    pub fn model_for(&self, complexity: Complexity) -> &str {
        match complexity {
            Complexity::Simple => &self.routes.simple,
            Complexity::Moderate => &self.routes.moderate,
            Complexity::Complex => &self.routes.complex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_factual_question_is_simple() {
        assert_eq!(
            Complexity::classify("What did Bob commit to?"),
            Complexity::Simple
        );
    }

    #[test]
    fn keyword_makes_question_complex() {
        assert_eq!(
            Complexity::classify("Can you explain the rollout?"),
            Complexity::Complex
        );
        assert_eq!(
            Complexity::classify("Any COMPLIANCE concerns?"),
            Complexity::Complex
        );
    }

    #[test]
    fn multi_part_question_is_moderate() {
        assert_eq!(
            Complexity::classify("Who owns QA? Who owns docs?"),
            Complexity::Moderate
        );
        assert_eq!(
            Complexity::classify("When is the demo and who presents?"),
            Complexity::Moderate
        );
    }

    #[test]
    fn long_questions_escalate() {
        let sixteen = vec!["word"; 16].join(" ");
        assert_eq!(Complexity::classify(&sixteen), Complexity::Moderate);

        let twenty_six = vec!["word"; 26].join(" ");
        assert_eq!(Complexity::classify(&twenty_six), Complexity::Complex);
    }

    #[test]
    fn forced_complexity_overrides_classification() {
        let router = ModelRouter::default();
        let (complexity, model) = router.route("What time is it?", Some(Complexity::Moderate));
        assert_eq!(complexity, Complexity::Moderate);
        assert_eq!(model, "gemini-1.5-pro");

        let (complexity, model) = router.route("What time is it?", None);
        assert_eq!(complexity, Complexity::Simple);
        assert_eq!(model, "gemini-2.0-flash-exp");
    }
}
