//! Ordered answers for one run through a questionnaire

use super::answer::Answer;
use serde::{Deserialize, Serialize};

/// One optional answer per question, indexed by position
///
/// The length is fixed when the set is created and never changes; answers are
/// written one slot at a time and the slots are never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: Vec<Option<Answer>>,
}

impl AnswerSet {
    /// Create an all-unanswered set for `len` questions
    pub fn empty(len: usize) -> Self {
        Self {
            answers: vec![None; len],
        }
    }

    /// Wrap an existing list of answers
    pub fn from_answers(answers: Vec<Option<Answer>>) -> Self {
        Self { answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Answer> {
        self.answers.get(index).copied().flatten()
    }

    /// Record an answer at `index`. Returns false if the index is out of range.
    pub fn set(&mut self, index: usize, answer: Answer) -> bool {
        match self.answers.get_mut(index) {
            Some(slot) => {
                *slot = Some(answer);
                true
            }
            None => false,
        }
    }

    /// Clear every answer, keeping the length
    pub fn clear(&mut self) {
        self.answers.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Answer>> + '_ {
        self.answers.iter().copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn as_slice(&self) -> &[Option<Answer>] {
        &self.answers
    }
}

impl FromIterator<Option<Answer>> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Option<Answer>>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
