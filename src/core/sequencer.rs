//! Per-run questionnaire state.
//!
//! A [`Session`] starts with the base questions only. Once the
//! [`BRANCH_POINT`]-th answer is accepted, the sum of the base scores picks one
//! follow-up set and it is appended to the active list. That extension happens
//! once per session and never again.

use tracing::debug;

use super::classifier::classify;
use super::error::EngineError;
use super::questions::{BRANCH_POINT, QuestionBank, follow_up_tier};
use super::types::{ProfileTier, Question};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SessionState {
    AwaitingAnswer(usize),
    Complete,
}

/// What an accepted answer led to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    Next { index: usize },
    Branched { follow_up: ProfileTier, index: usize },
    Complete { total_score: i32 },
}

#[derive(Debug, Clone)]
pub struct Session<'a> {
    bank: &'a QuestionBank,
    active: Vec<&'a Question>,
    scores: Vec<i32>,
    total_score: i32,
    follow_up: Option<ProfileTier>,
}

impl<'a> Session<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            active: bank.base_questions().questions.iter().collect(),
            scores: Vec::new(),
            total_score: 0,
            follow_up: None,
        }
    }

    /// Runs a fresh session over `answers`, stopping at the first rejection.
    pub fn replay(bank: &'a QuestionBank, answers: &[i32]) -> Result<Self, EngineError> {
        let mut session = Self::new(bank);
        for &score in answers {
            session.submit_answer(score)?;
        }
        Ok(session)
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.bank);
    }

    pub fn state(&self) -> SessionState {
        if self.scores.len() >= self.active.len() {
            SessionState::Complete
        } else {
            SessionState::AwaitingAnswer(self.scores.len())
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Complete
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        match self.state() {
            SessionState::AwaitingAnswer(index) => Some(self.active[index]),
            SessionState::Complete => None,
        }
    }

    /// `(current, total)` for a progress indicator. `total` grows from the base
    /// size to the full length when the follow-up set is appended.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.active.len();
        ((self.scores.len() + 1).min(total), total)
    }

    pub fn answered_count(&self) -> usize {
        self.scores.len()
    }

    pub fn total_score(&self) -> i32 {
        self.total_score
    }

    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    pub fn questions(&self) -> &[&'a Question] {
        &self.active
    }

    /// Tier whose follow-up questions were loaded, once the branch point is passed.
    pub fn follow_up(&self) -> Option<ProfileTier> {
        self.follow_up
    }

    pub fn submit_answer(&mut self, score: i32) -> Result<SubmitOutcome, EngineError> {
        if self.is_complete() {
            return Err(EngineError::SessionComplete);
        }
        if score <= 0 {
            return Err(EngineError::NoSelection);
        }

        let total_score = self
            .total_score
            .checked_add(score)
            .ok_or(EngineError::ScoreOverflow {
                score,
                total: self.total_score,
            })?;
        // Every answer before the branch point belongs to the base set, so the
        // checked running total is also the base prefix sum.
        let branch = (self.scores.len() + 1 == BRANCH_POINT && self.follow_up.is_none())
            .then(|| (total_score, follow_up_tier(total_score)));

        self.scores.push(score);
        self.total_score = total_score;
        debug!(
            answered = self.scores.len(),
            score,
            total_score = self.total_score,
            "answer accepted"
        );

        let mut branched = None;
        if let Some((prefix_sum, tier)) = branch {
            let bank = self.bank;
            self.active.extend(bank.follow_up_set(tier).questions.iter());
            self.follow_up = Some(tier);
            branched = Some(tier);
            debug!(
                prefix_sum,
                follow_up = tier.key(),
                total_questions = self.active.len(),
                "follow-up questions appended"
            );
        }

        Ok(match (self.state(), branched) {
            (SessionState::Complete, _) => SubmitOutcome::Complete {
                total_score: self.total_score,
            },
            (SessionState::AwaitingAnswer(index), Some(follow_up)) => {
                SubmitOutcome::Branched { follow_up, index }
            }
            (SessionState::AwaitingAnswer(index), None) => SubmitOutcome::Next { index },
        })
    }

    /// Answers the current question with the option at `index`.
    pub fn submit_option(&mut self, index: usize) -> Result<SubmitOutcome, EngineError> {
        let question = self.current_question().ok_or(EngineError::SessionComplete)?;
        let option = question
            .options
            .get(index)
            .ok_or(EngineError::InvalidOption {
                index,
                available: question.options.len(),
            })?;
        self.submit_answer(option.score)
    }

    pub fn profile(&self) -> Result<ProfileTier, EngineError> {
        if !self.is_complete() {
            return Err(EngineError::SessionIncomplete {
                answered: self.scores.len(),
                total: self.active.len(),
            });
        }
        Ok(classify(self.total_score))
    }
}
