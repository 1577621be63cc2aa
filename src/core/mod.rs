mod catalog;
mod classifier;
mod error;
mod portfolio;
mod questions;
mod sequencer;
mod types;

pub use catalog::Catalog;
pub use classifier::classify;
pub use error::{CatalogError, EngineError};
pub use portfolio::{
    ObjectivePortfolio, PortfolioSelector, ProfileReport, Recommendation, age_to_bracket,
};
pub use questions::{BRANCH_POINT, QuestionBank, follow_up_tier};
pub use sequencer::{Session, SessionState, SubmitOutcome};
pub use types::{
    AgeAdvisory, AgeBracket, AnswerOption, Asset, Objective, PortfolioRecommendation,
    ProfileTier, Question, QuestionSet,
};
