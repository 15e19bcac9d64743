//! Per-session game state machine.
//!
//! A [`Session`] moves through `Idle → ShowingQuestion → ShowingResult → Idle`.
//! Front ends never mutate it directly: they send [`Intent`]s through
//! [`Session::dispatch`] and render the [`SessionView`] snapshot it exposes.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::QuizError;
use crate::data::PoemStore;
use crate::generator::generate_question;
use crate::models::{CHOICE_COUNT, GameMode, Poem, Question, Score};

/// Where the session is in the round cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No active question.
    #[default]
    Idle,
    /// A question is on screen waiting for an answer.
    ShowingQuestion,
    /// The question has been answered and its result is on screen.
    ShowingResult,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::ShowingQuestion => "showing a question",
            Phase::ShowingResult => "showing a result",
        };
        f.write_str(name)
    }
}

/// A user action addressed to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Intent {
    SelectMode { mode: GameMode },
    NewQuestion,
    /// Answer with the choice at this index of the displayed list.
    Answer { choice: usize },
    Next,
    /// Close the result and return to mode selection, keeping the score.
    Dismiss,
    Reset,
}

/// How the last question was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub chosen: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Default)]
pub struct Session {
    mode: GameMode,
    phase: Phase,
    question: Option<Question>,
    outcome: Option<AnswerOutcome>,
    score: Score,
}

impl Session {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn outcome(&self) -> Option<&AnswerOutcome> {
        self.outcome.as_ref()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Apply one intent. On error the session is left exactly as it was.
    pub fn dispatch<R: Rng + ?Sized>(
        &mut self,
        intent: Intent,
        store: &PoemStore,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        debug!(?intent, phase = %self.phase, "dispatching intent");
        match intent {
            Intent::SelectMode { mode } => {
                self.select_mode(mode);
                Ok(())
            }
            Intent::NewQuestion => self.new_question(store, rng),
            Intent::Answer { choice } => self.answer(choice).map(|_| ()),
            Intent::Next => self.next_question(store, rng),
            Intent::Dismiss => self.advance(),
            Intent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Switch the quizzed field. A different mode abandons the current round.
    pub fn select_mode(&mut self, mode: GameMode) {
        if mode == self.mode {
            return;
        }
        self.clear_round();
        self.mode = mode;
    }

    /// Generate a question for the current mode and show it.
    ///
    /// From `ShowingQuestion` this replaces the unanswered question without scoring.
    pub fn new_question<R: Rng + ?Sized>(
        &mut self,
        store: &PoemStore,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        if self.phase == Phase::ShowingResult {
            return Err(self.invalid("start a new question"));
        }
        let question = generate_question(store, self.mode, rng)?;
        self.show(question);
        Ok(())
    }

    /// Score the choice at `index` of the displayed list.
    pub fn answer(&mut self, index: usize) -> Result<&AnswerOutcome, QuizError> {
        if self.phase != Phase::ShowingQuestion {
            return Err(self.invalid("answer"));
        }
        let Some(question) = self.question.as_ref() else {
            return Err(self.invalid("answer"));
        };
        let Some(chosen) = question.choices.get(index) else {
            return Err(QuizError::InvalidChoice {
                index,
                count: CHOICE_COUNT,
            });
        };

        let is_correct = question.is_correct(chosen);
        let outcome = AnswerOutcome {
            chosen: chosen.clone(),
            correct_answer: question.correct_answer.clone(),
            is_correct,
        };
        self.score.record(is_correct);
        self.phase = Phase::ShowingResult;
        debug!(
            poem_id = question.poem.id,
            is_correct,
            correct = self.score.correct,
            total = self.score.total,
            "answer recorded"
        );

        Ok(self.outcome.insert(outcome))
    }

    /// Leave the result and go straight to the next question.
    ///
    /// The next question is generated before anything is cleared, so a
    /// failure keeps the result on screen.
    pub fn next_question<R: Rng + ?Sized>(
        &mut self,
        store: &PoemStore,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        if self.phase != Phase::ShowingResult {
            return Err(self.invalid("advance"));
        }
        let question = generate_question(store, self.mode, rng)?;
        self.clear_round();
        self.show(question);
        Ok(())
    }

    /// Leave the result without generating anything.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.phase != Phase::ShowingResult {
            return Err(self.invalid("advance"));
        }
        self.clear_round();
        Ok(())
    }

    /// Zero the score and drop the current round. The mode is kept.
    pub fn reset(&mut self) {
        self.score.reset();
        self.clear_round();
    }

    pub fn view(&self) -> SessionView {
        let question = self.question.as_ref().map(|question| QuestionView {
            prompt: question.prompt.clone(),
            choices: question.choices.clone(),
            kind: question.kind,
        });
        let result = match (&self.question, &self.outcome) {
            (Some(question), Some(outcome)) => Some(RoundResult {
                outcome: outcome.clone(),
                poem: question.poem.clone(),
            }),
            _ => None,
        };

        SessionView {
            mode: self.mode,
            phase: self.phase,
            score: self.score,
            question,
            result,
        }
    }

    fn show(&mut self, question: Question) {
        self.question = Some(question);
        self.outcome = None;
        self.phase = Phase::ShowingQuestion;
    }

    fn clear_round(&mut self) {
        self.question = None;
        self.outcome = None;
        self.phase = Phase::Idle;
    }

    fn invalid(&self, action: &'static str) -> QuizError {
        QuizError::InvalidAction {
            action,
            phase: self.phase,
        }
    }
}

/// Everything a renderer needs, with the answer withheld until it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub mode: GameMode,
    pub phase: Phase,
    pub score: Score,
    pub question: Option<QuestionView>,
    pub result: Option<RoundResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub prompt: String,
    pub choices: [String; CHOICE_COUNT],
    pub kind: GameMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub outcome: AnswerOutcome,
    pub poem: Poem,
}
