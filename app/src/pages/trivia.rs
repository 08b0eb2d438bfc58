use dioxus::prelude::*;
use monad_dash_api::prelude::*;

use crate::hooks::{notify, save_score, use_quiz};

#[component]
pub fn Trivia() -> Element {
    let quiz = use_quiz();
    let session = quiz.session;
    let picked = quiz.picked;

    let state = session.read();
    let phase = state.state();
    let item = state.current_item().cloned();
    let question = state.current_index() + 1;
    let total = state.items().len();
    let score = state.score();
    let wrong = state.wrong_count();
    let remaining = state.remaining_seconds();
    let tally = state.tally();
    drop(state);

    rsx! {
        div { class: "max-w-2xl mx-auto text-center",
            h1 { class: "text-3xl font-bold mb-8", "Monad Logo Trivia" }

            {match phase {
                QuizState::Idle => rsx! {
                    div { class: "card",
                        p { class: "text-gray-400 mb-6",
                            "Name the Monad ecosystem project from its logo. {ROUND_SECONDS} seconds per question."
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| quiz.start(),
                            "Start Trivia"
                        }
                    }
                },
                QuizState::Running | QuizState::RoundComplete => match item {
                    Some(item) => rsx! {
                        div { class: "card",
                            div { class: "flex justify-between text-sm text-gray-400 mb-4",
                                span { "Question {question}/{total}" }
                                span {
                                    class: if remaining <= 5 { "text-red-400 font-mono animate-pulse" } else { "font-mono" },
                                    "{remaining}s"
                                }
                                span { "Score: {score} · Wrong: {wrong}" }
                            }

                            img {
                                class: "w-32 h-32 mx-auto mb-6 rounded-full",
                                src: "{item.prompt_asset}",
                                alt: "Which project is this?",
                            }

                            div { class: "grid grid-cols-2 gap-3",
                                for option in item.options.iter().cloned() {
                                    button {
                                        key: "{option}",
                                        class: option_class(
                                            phase,
                                            &option,
                                            &item.correct_answer,
                                            picked.read().as_deref(),
                                        ),
                                        disabled: phase != QuizState::Running,
                                        onclick: {
                                            let option = option.clone();
                                            move |_| quiz.answer(option.clone())
                                        },
                                        "{option}"
                                    }
                                }
                            }

                            button {
                                class: "btn btn-secondary mt-6",
                                onclick: move |_| quiz.quit(),
                                "Quit"
                            }
                        }
                    },
                    None => rsx! {},
                },
                QuizState::Finished => rsx! {
                    FinishedCard {
                        score: tally.map(|t| t.score).unwrap_or(score),
                        total: tally.map(|t| t.total).unwrap_or(total as u32),
                        on_restart: move |_| quiz.start(),
                        on_quit: move |_| quiz.quit(),
                    }
                },
            }}
        }
    }
}

fn option_class(phase: QuizState, option: &str, correct: &str, picked: Option<&str>) -> &'static str {
    if phase != QuizState::RoundComplete {
        return "btn btn-option";
    }
    if option == correct {
        "btn btn-option btn-correct"
    } else if picked == Some(option) {
        "btn btn-option btn-wrong"
    } else {
        "btn btn-option opacity-50"
    }
}

#[component]
fn FinishedCard(
    score: u32,
    total: u32,
    on_restart: EventHandler<MouseEvent>,
    on_quit: EventHandler<MouseEvent>,
) -> Element {
    let dashboard = use_context::<Signal<DashboardSession>>();
    let config = use_context::<DashboardConfig>();
    let mut saving = use_signal(|| false);

    rsx! {
        div { class: "card",
            h2 { class: "text-2xl font-bold mb-2", "Trivia complete" }
            p { class: "text-4xl font-extrabold font-mono mb-6", "{score}/{total}" }

            div { class: "flex gap-4 justify-center",
                button {
                    class: "btn btn-primary",
                    disabled: *saving.read(),
                    onclick: move |_| {
                        let wallet = *dashboard.read().wallet();
                        let config = config.clone();
                        saving.set(true);
                        spawn(async move {
                            match save_score(&config, wallet, u64::from(score)).await {
                                Ok(_) => notify("Score saved!"),
                                Err(e) => notify(&format!("Could not save score: {}", e)),
                            }
                            saving.set(false);
                        });
                    },
                    if *saving.read() { "Saving..." } else { "Save score" }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |e| on_restart.call(e),
                    "Play again"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |e| on_quit.call(e),
                    "Quit"
                }
            }
        }
    }
}
