#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod route;

use dioxus::prelude::*;
use monad_dash_api::prelude::*;
use route::Route;

use crate::hooks::LocalStore;

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Global state providers
    use_context_provider(DashboardConfig::default);
    use_context_provider(|| {
        let registry = AssetRegistry::restore(&LocalStore);
        Signal::new(DashboardSession::new(registry))
    });

    rsx! {
        Router::<Route> {}
    }
}
