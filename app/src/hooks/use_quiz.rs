use dioxus::prelude::*;
use dioxus::core::Task;
use gloo_timers::future::TimeoutFuture;
use monad_dash_api::prelude::*;

use super::browser::{notify, session_rng};

/// Trivia session plus the single clock task that drives it.
#[derive(Clone, Copy)]
pub struct QuizController {
    pub session: Signal<QuizSession>,
    /// Option the player picked this round, for the reveal highlight.
    pub picked: Signal<Option<String>>,
    clock: Signal<Option<Task>>,
}

pub fn use_quiz() -> QuizController {
    let session = use_signal(|| QuizSession::new(default_pool()));
    let picked = use_signal(|| None::<String>);
    let clock = use_signal(|| None::<Task>);

    QuizController {
        session,
        picked,
        clock,
    }
}

impl QuizController {
    /// Starts a fresh session (or restarts the current one).
    pub fn start(mut self) {
        self.stop_clock();
        self.picked.set(None);

        let mut rng = session_rng();
        let result = self.session.write().restart(&mut rng);
        if let Err(e) = result {
            notify(&e.to_string());
            return;
        }

        let generation = self.session.peek().generation();
        let task = spawn(run_clock(self.session, self.picked, generation));
        self.clock.set(Some(task));
    }

    pub fn answer(mut self, choice: String) {
        let generation = self.session.peek().generation();
        let result = self.session.write().answer(Some(choice.as_str()));
        match result {
            Ok(_) => {
                self.stop_clock();
                self.picked.set(Some(choice));
                let (session, picked) = (self.session, self.picked);
                let task = spawn(async move {
                    if reveal_then_advance(session, picked, generation).await {
                        run_clock(session, picked, generation).await;
                    }
                });
                self.clock.set(Some(task));
            }
            Err(e) => tracing::debug!("ignored answer: {}", e),
        }
    }

    pub fn quit(mut self) {
        self.stop_clock();
        self.picked.set(None);
        self.session.write().quit();
    }

    fn stop_clock(&mut self) {
        if let Some(task) = self.clock.write().take() {
            task.cancel();
        }
    }
}

/// Ticks the current round once a second. Each new round restarts the
/// one-second cadence from its first tick.
async fn run_clock(
    mut session: Signal<QuizSession>,
    picked: Signal<Option<String>>,
    generation: u64,
) {
    loop {
        TimeoutFuture::new(1_000).await;

        if session.peek().generation() != generation {
            break;
        }
        let outcome = session.write().tick();
        match outcome {
            TickOutcome::Counting { .. } => {}
            TickOutcome::Expired => {
                if !reveal_then_advance(session, picked, generation).await {
                    break;
                }
            }
            TickOutcome::Inactive => break,
        }
    }
}

/// Waits out the reveal pause and moves on. Returns true when a new round started.
async fn reveal_then_advance(
    mut session: Signal<QuizSession>,
    mut picked: Signal<Option<String>>,
    generation: u64,
) -> bool {
    TimeoutFuture::new(REVEAL_DELAY_MS).await;

    if session.peek().generation() != generation {
        return false;
    }
    let result = session.write().advance();
    picked.set(None);
    match result {
        Ok(Some(tally)) => {
            tracing::info!("trivia finished: {}/{}", tally.score, tally.total);
            false
        }
        Ok(None) => true,
        Err(e) => {
            tracing::debug!("nothing to advance: {}", e);
            false
        }
    }
}
