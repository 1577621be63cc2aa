use super::error::CatalogError;
use super::types::{ProfileTier, QuestionSet};

/// Number of base answers collected before the follow-up set is chosen.
pub const BRANCH_POINT: usize = 2;

const CONSERVATIVE_PREFIX_MAX: i32 = 4;
const MODERATE_PREFIX_MAX: i32 = 8;

#[derive(Debug, Clone)]
pub struct QuestionBank {
    base: QuestionSet,
    conservative: QuestionSet,
    moderate: QuestionSet,
    aggressive: QuestionSet,
}

impl QuestionBank {
    pub fn new(
        base: QuestionSet,
        conservative: QuestionSet,
        moderate: QuestionSet,
        aggressive: QuestionSet,
    ) -> Result<Self, CatalogError> {
        for set in [&base, &conservative, &moderate, &aggressive] {
            validate_set(set)?;
        }
        if base.questions.len() != BRANCH_POINT {
            return Err(CatalogError::BaseSetSize {
                expected: BRANCH_POINT,
                found: base.questions.len(),
            });
        }
        Ok(Self {
            base,
            conservative,
            moderate,
            aggressive,
        })
    }

    pub fn base_questions(&self) -> &QuestionSet {
        &self.base
    }

    pub fn follow_up_set(&self, tier: ProfileTier) -> &QuestionSet {
        match tier {
            ProfileTier::Conservative => &self.conservative,
            ProfileTier::Moderate => &self.moderate,
            ProfileTier::Aggressive => &self.aggressive,
        }
    }
}

/// Provisional tier used only to pick the follow-up questions.
pub fn follow_up_tier(prefix_sum: i32) -> ProfileTier {
    if prefix_sum <= CONSERVATIVE_PREFIX_MAX {
        ProfileTier::Conservative
    } else if prefix_sum <= MODERATE_PREFIX_MAX {
        ProfileTier::Moderate
    } else {
        ProfileTier::Aggressive
    }
}

fn validate_set(set: &QuestionSet) -> Result<(), CatalogError> {
    if set.questions.is_empty() {
        return Err(CatalogError::EmptyQuestionSet(set.name));
    }
    for (index, question) in set.questions.iter().enumerate() {
        if question.options.is_empty() {
            return Err(CatalogError::QuestionWithoutOptions {
                set: set.name,
                index,
            });
        }
        if let Some(option) = question.options.iter().find(|option| option.score <= 0) {
            return Err(CatalogError::NonPositiveScore {
                set: set.name,
                index,
                score: option.score,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Question;
    use proptest::prelude::{prop_assert_eq, proptest};

    fn set(name: &'static str, questions: Vec<Question>) -> QuestionSet {
        QuestionSet { name, questions }
    }

    fn one_question() -> Vec<Question> {
        vec![Question::new("Pergunta?", &[("Sim", 1), ("Não", 5)])]
    }

    fn two_questions() -> Vec<Question> {
        vec![
            Question::new("Primeira?", &[("A", 1), ("B", 3)]),
            Question::new("Segunda?", &[("A", 1), ("B", 5)]),
        ]
    }

    #[test]
    fn follow_up_tier_boundaries() {
        assert_eq!(follow_up_tier(2), ProfileTier::Conservative);
        assert_eq!(follow_up_tier(4), ProfileTier::Conservative);
        assert_eq!(follow_up_tier(5), ProfileTier::Moderate);
        assert_eq!(follow_up_tier(8), ProfileTier::Moderate);
        assert_eq!(follow_up_tier(9), ProfileTier::Aggressive);
        assert_eq!(follow_up_tier(10), ProfileTier::Aggressive);
    }

    proptest! {
        #[test]
        fn prop_follow_up_tier_matches_prefix_ranges(prefix_sum in 2i32..=10) {
            let expected = match prefix_sum {
                2..=4 => ProfileTier::Conservative,
                5..=8 => ProfileTier::Moderate,
                _ => ProfileTier::Aggressive,
            };
            prop_assert_eq!(follow_up_tier(prefix_sum), expected);
        }
    }

    #[test]
    fn new_rejects_empty_follow_up_set() {
        let err = QuestionBank::new(
            set("base", two_questions()),
            set("conservative", one_question()),
            set("moderate", Vec::new()),
            set("aggressive", one_question()),
        )
        .expect_err("empty set must be rejected");
        assert_eq!(err, CatalogError::EmptyQuestionSet("moderate"));
    }

    #[test]
    fn new_rejects_question_without_options() {
        let err = QuestionBank::new(
            set("base", two_questions()),
            set("conservative", vec![Question::new("Vazia?", &[])]),
            set("moderate", one_question()),
            set("aggressive", one_question()),
        )
        .expect_err("option-less question must be rejected");
        assert_eq!(
            err,
            CatalogError::QuestionWithoutOptions {
                set: "conservative",
                index: 0
            }
        );
    }

    #[test]
    fn new_rejects_non_positive_scores() {
        let err = QuestionBank::new(
            set("base", two_questions()),
            set("conservative", one_question()),
            set("moderate", one_question()),
            set("aggressive", vec![Question::new("Zero?", &[("A", 0)])]),
        )
        .expect_err("zero score collides with the unanswered sentinel");
        assert!(matches!(err, CatalogError::NonPositiveScore { score: 0, .. }));
    }

    #[test]
    fn new_requires_exactly_the_branch_point_base_questions() {
        let err = QuestionBank::new(
            set("base", one_question()),
            set("conservative", one_question()),
            set("moderate", one_question()),
            set("aggressive", one_question()),
        )
        .expect_err("short base set must be rejected");
        assert_eq!(
            err,
            CatalogError::BaseSetSize {
                expected: BRANCH_POINT,
                found: 1
            }
        );
    }

    #[test]
    fn follow_up_set_returns_matching_group() {
        let bank = QuestionBank::new(
            set("base", two_questions()),
            set("conservative", one_question()),
            set("moderate", two_questions()),
            set("aggressive", one_question()),
        )
        .expect("valid bank");
        assert_eq!(bank.follow_up_set(ProfileTier::Moderate).name, "moderate");
        assert_eq!(bank.follow_up_set(ProfileTier::Aggressive).name, "aggressive");
        assert_eq!(bank.base_questions().questions.len(), 2);
    }
}
