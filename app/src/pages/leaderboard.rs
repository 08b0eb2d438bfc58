use dioxus::prelude::*;
use monad_dash_api::prelude::*;

use crate::hooks::use_leaderboard;

#[component]
pub fn Leaderboard() -> Element {
    let leaderboard = use_leaderboard();
    let state = leaderboard.read();

    rsx! {
        div { class: "max-w-4xl mx-auto",
            h1 { class: "text-3xl font-bold mb-8", "Trivia Leaderboard" }

            div { class: "card",
                if state.loading {
                    div { class: "text-center py-12",
                        div { class: "animate-spin w-8 h-8 border-2 border-purple-400 border-t-transparent rounded-full mx-auto mb-4" }
                        p { class: "text-gray-500", "Loading leaderboard..." }
                    }
                } else if state.entries.is_empty() {
                    div { class: "text-center py-12",
                        p { class: "text-gray-500", "No scores yet. Be the first!" }
                    }
                } else {
                    // Header
                    div { class: "grid grid-cols-5 gap-4 pb-3 border-b border-gray-700 text-sm text-gray-500",
                        div { "Rank" }
                        div { class: "col-span-2", "Wallet" }
                        div { class: "text-right", "Score" }
                        div { class: "text-right", "Share" }
                    }

                    // Entries
                    div { class: "divide-y divide-gray-800",
                        for entry in state.entries.iter() {
                            div { class: "grid grid-cols-5 gap-4 py-3 items-center",
                                div {
                                    if entry.rank <= 3 {
                                        span { class: "text-2xl", {medal(entry.rank)} }
                                    } else {
                                        span { class: "text-gray-400 font-mono", "#{entry.rank}" }
                                    }
                                }

                                div { class: "col-span-2 font-mono text-sm",
                                    {short_wallet(&entry.wallet)}
                                }

                                div { class: "text-right font-mono text-purple-400", "{entry.score}" }

                                div { class: "text-right font-mono text-gray-400",
                                    {format!("{}%", entry.percentage_label())}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn medal(rank: usize) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        _ => "🥉",
    }
}

fn short_wallet(wallet: &str) -> String {
    match parse_address(wallet) {
        Ok(address) => address.shorten(),
        Err(_) => wallet.to_string(),
    }
}
