use rand::Rng;

use super::{generate_items, PromptItem, QuizError, QuizItem};
use crate::consts::ROUND_SECONDS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    Idle,
    Running,
    /// Answer recorded, reveal pause in progress.
    RoundComplete,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tally {
    pub score: u32,
    pub total: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing is counting down.
    Inactive,
    Counting { remaining: u32 },
    /// The clock hit zero and the round was recorded as unanswered.
    Expired,
}

/// Timed multiple-choice session.
///
/// A driver owns the clock: it calls [`tick`](Self::tick) once a second, and
/// [`advance`](Self::advance) after the reveal pause that follows every answer or
/// expiry. [`generation`](Self::generation) changes on every start and quit, so a
/// driver that captured an older value knows its session is gone and stops.
///
/// `score + wrong_count <= current_index` holds in every state except
/// [`RoundComplete`](QuizState::RoundComplete), where the revealed answer is
/// already counted but the index only moves on [`advance`](Self::advance).
#[derive(Clone, Debug)]
pub struct QuizSession {
    pool: Vec<PromptItem>,
    items: Vec<QuizItem>,
    current_index: usize,
    score: u32,
    wrong_count: u32,
    remaining_seconds: u32,
    state: QuizState,
    generation: u64,
}

impl QuizSession {
    pub fn new(pool: Vec<PromptItem>) -> Self {
        Self {
            pool,
            items: vec![],
            current_index: 0,
            score: 0,
            wrong_count: 0,
            remaining_seconds: ROUND_SECONDS,
            state: QuizState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&QuizItem> {
        match self.state {
            QuizState::Running | QuizState::RoundComplete => self.items.get(self.current_index),
            _ => None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, QuizState::Running | QuizState::RoundComplete)
    }

    /// Final result, once finished.
    pub fn tally(&self) -> Option<Tally> {
        (self.state == QuizState::Finished).then(|| self.current_tally())
    }

    fn current_tally(&self) -> Tally {
        Tally {
            score: self.score,
            total: self.items.len() as u32,
        }
    }

    /// Builds a fresh question set and starts the first round.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), QuizError> {
        if self.is_active() {
            return Err(QuizError::AlreadyRunning);
        }
        let items = generate_items(&self.pool, rng)?;

        self.items = items;
        self.current_index = 0;
        self.score = 0;
        self.wrong_count = 0;
        self.remaining_seconds = ROUND_SECONDS;
        self.state = QuizState::Running;
        self.generation += 1;
        tracing::debug!("quiz started with {} questions", self.items.len());
        Ok(())
    }

    /// Abandons any session and starts a new one.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), QuizError> {
        self.quit();
        self.start(rng)
    }

    /// Discards the session. Nothing is kept.
    pub fn quit(&mut self) {
        self.items.clear();
        self.current_index = 0;
        self.score = 0;
        self.wrong_count = 0;
        self.remaining_seconds = ROUND_SECONDS;
        self.state = QuizState::Idle;
        self.generation += 1;
    }

    /// One second of the round clock.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != QuizState::Running || self.remaining_seconds == 0 {
            return TickOutcome::Inactive;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds > 0 {
            return TickOutcome::Counting {
                remaining: self.remaining_seconds,
            };
        }
        // Running with time left guarantees an unanswered current item.
        let recorded = self.answer(None);
        debug_assert!(recorded.is_ok(), "expiry could not record a timeout: {recorded:?}");
        TickOutcome::Expired
    }

    /// Records the player's choice for the current question; `None` is a timeout.
    ///
    /// Returns whether the choice was correct.
    pub fn answer(&mut self, choice: Option<&str>) -> Result<bool, QuizError> {
        match self.state {
            QuizState::Running => {}
            QuizState::RoundComplete => return Err(QuizError::AlreadyAnswered),
            _ => return Err(QuizError::NotRunning),
        }
        let item = self
            .items
            .get_mut(self.current_index)
            .ok_or(QuizError::NotRunning)?;
        if item.answered_correctly.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }

        let correct = choice == Some(item.correct_answer.as_str());
        if correct {
            self.score += 1;
        } else if choice.is_some() {
            self.wrong_count += 1;
        }
        item.answered_correctly = Some(correct);
        self.state = QuizState::RoundComplete;
        Ok(correct)
    }

    /// Moves past the revealed question. Returns the tally when that was the last one.
    pub fn advance(&mut self) -> Result<Option<Tally>, QuizError> {
        if self.state != QuizState::RoundComplete {
            return Err(QuizError::NotRevealing);
        }

        if self.current_index + 1 < self.items.len() {
            self.current_index += 1;
            self.remaining_seconds = ROUND_SECONDS;
            self.state = QuizState::Running;
            return Ok(None);
        }

        self.current_index = self.items.len();
        self.state = QuizState::Finished;
        let tally = self.current_tally();
        tracing::debug!("quiz finished: {}/{}", tally.score, tally.total);
        Ok(Some(tally))
    }
}
