use dioxus::prelude::*;
use crate::route::Route;
use crate::components::WalletButton;

#[component]
pub fn Layout() -> Element {
    rsx! {
        div { class: "min-h-screen",
            style: "background-color: #130629; color: #ffffff;",
            // Navigation
            nav { class: "border-b elevated-border backdrop-blur sticky top-0 z-50",
                style: "background-color: #130629;",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between h-16",
                        div { class: "flex items-center",
                            Link { to: Route::Dashboard {}, class: "flex items-center space-x-2",
                                span { class: "text-2xl font-extrabold", "Monad Dashboard" }
                            }
                        }

                        // Nav links
                        div { class: "hidden sm:flex sm:items-center sm:space-x-8",
                            NavLink { to: Route::Dashboard {}, label: "Dashboard" }
                            NavLink { to: Route::Trivia {}, label: "Trivia" }
                            NavLink { to: Route::Leaderboard {}, label: "Leaderboard" }
                        }

                        div { class: "flex items-center",
                            WalletButton {}
                        }
                    }
                }
            }

            main { class: "max-w-xl mx-auto px-4 py-8",
                Outlet::<Route> {}
            }

            footer { class: "border-t elevated-border py-8 mt-auto",
                div { class: "max-w-7xl mx-auto px-4 text-center text-low",
                    p { "Monad Testnet Dashboard" }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link {
            to: to,
            class: "text-mid hover:text-purple-300 px-3 py-2 text-sm font-medium transition-colors",
            "{label}"
        }
    }
}
