use thiserror::Error;

use super::types::{AgeBracket, ProfileTier};

/// Conditions the engine reports back to its caller. None of them leave a
/// session in a different state than before the call.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum EngineError {
    #[error("no answer selected; choose an option before continuing")]
    NoSelection,

    #[error("option {index} does not exist; the current question has {available} options")]
    InvalidOption { index: usize, available: usize },

    #[error("score {score} would overflow the running total {total}")]
    ScoreOverflow { score: i32, total: i32 },

    #[error("questionnaire already complete")]
    SessionComplete,

    #[error("questionnaire not complete; {answered} of {total} questions answered")]
    SessionIncomplete { answered: usize, total: usize },

    #[error("objective '{objective}' is not available for the {} profile", .tier.key())]
    UnknownObjective {
        tier: ProfileTier,
        objective: String,
    },
}

/// Invariant violations found while building a catalog.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum CatalogError {
    #[error("question set '{0}' has no questions")]
    EmptyQuestionSet(&'static str),

    #[error("base question set must hold {expected} questions, found {found}")]
    BaseSetSize { expected: usize, found: usize },

    #[error("question {index} of set '{set}' has no options")]
    QuestionWithoutOptions { set: &'static str, index: usize },

    #[error("question {index} of set '{set}' has a non-positive option score {score}")]
    NonPositiveScore {
        set: &'static str,
        index: usize,
        score: i32,
    },

    #[error("the {} profile has no objectives", .0.key())]
    TierWithoutObjectives(ProfileTier),

    #[error("objective '{objective}' is registered twice for the {} profile", .tier.key())]
    DuplicateObjective {
        tier: ProfileTier,
        objective: &'static str,
    },

    #[error("no age advisory for bracket {}", .0.as_str())]
    MissingAdvisory(AgeBracket),
}
