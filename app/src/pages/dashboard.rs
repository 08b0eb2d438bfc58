use dioxus::prelude::*;
use monad_dash_api::prelude::*;

use crate::components::{DistributionChart, StatCard};
use crate::hooks::{add_token, open_in_new_tab, refresh_account};

#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Signal<DashboardSession>>();
    let config = use_context::<DashboardConfig>();
    let mut token_contract = use_signal(String::new);

    let state = session.read();
    let wallet = *state.wallet();
    let native = state.snapshot().amount(NATIVE_SYMBOL);
    let tx_count = state.tx_count();
    let tx_loading = state.tx_count_loading();
    let nft_count = state.nft_count();
    let nft_loading = state.nft_count_loading();
    let distribution = state.distribution();
    drop(state);

    rsx! {
        div { class: "w-full flex flex-col items-center gap-6",
            // Wallet Address
            StatCard { title: "Wallet Address", value: wallet.short() }

            // Balance
            StatCard { title: "Balance", value: format!("{native} {NATIVE_SYMBOL}") }

            StatCard {
                title: "Total Transactions",
                value: tx_count.to_string(),
                loading: tx_loading,
            }

            StatCard {
                title: "NFTs Owned",
                value: nft_count.to_string(),
                loading: nft_loading,
            }

            // Add Token
            div { class: "card text-center w-full",
                h2 { class: "text-xl font-bold mb-2", "Add token CA" }
                input {
                    class: "border border-gray-300 rounded-lg px-2.5 py-2 w-full mb-2 text-black",
                    placeholder: "0x...",
                    value: "{token_contract}",
                    oninput: move |e| token_contract.set(e.value()),
                }
                button {
                    class: "btn btn-primary",
                    onclick: {
                        let config = config.clone();
                        move |_| {
                            let contract = token_contract.read().clone();
                            if contract.trim().is_empty() {
                                return;
                            }
                            token_contract.set(String::new());
                            add_token(session, config.clone(), contract);
                        }
                    },
                    "Add Token"
                }
            }

            DistributionChart { entries: distribution }

            // Buttons
            div { class: "flex gap-4 justify-center w-full mt-4",
                button {
                    class: "btn btn-secondary",
                    disabled: !wallet.is_connected(),
                    onclick: {
                        let config = config.clone();
                        move |_| refresh_account(session, &config)
                    },
                    "Refresh"
                }
                button {
                    class: "btn btn-danger",
                    onclick: {
                        let url = config.leaderboard_site_url.clone();
                        move |_| open_in_new_tab(&url)
                    },
                    "Break Monad"
                }
            }
        }
    }
}
