use dioxus::prelude::*;
use futures::StreamExt;
use monad_dash_api::prelude::*;

use crate::hooks::{notify, refresh_account};

#[derive(Clone)]
enum WalletAction {
    Connect,
}

#[component]
pub fn WalletButton() -> Element {
    let mut session = use_context::<Signal<DashboardSession>>();
    let config = use_context::<DashboardConfig>();

    // Use coroutine for lifecycle-safe async operations
    let wallet_coro = use_coroutine(move |mut rx: UnboundedReceiver<WalletAction>| {
        let config = config.clone();
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    WalletAction::Connect => match connect_injected().await {
                        Ok(account) => match parse_address(&account) {
                            Ok(address) => {
                                session.write().connect(address);
                                refresh_account(session, &config);
                            }
                            Err(e) => tracing::error!("Wallet returned a bad account: {}", e),
                        },
                        Err(e) => {
                            tracing::error!("Wallet connection failed: {}", e);
                            notify(&e);
                        }
                    },
                }
            }
        }
    });

    let connect_wallet = move |_| {
        wallet_coro.send(WalletAction::Connect);
    };

    let disconnect_wallet = move |_| {
        session.write().disconnect();
    };

    let wallet = *session.read().wallet();

    if wallet.is_connected() {
        let short = wallet.short();
        rsx! {
            div { class: "flex items-center space-x-2",
                span { class: "text-sm text-gray-400 font-mono", "{short}" }
                button {
                    class: "btn btn-secondary text-sm",
                    onclick: disconnect_wallet,
                    "Disconnect Wallet"
                }
            }
        }
    } else {
        rsx! {
            button {
                class: "btn btn-primary",
                onclick: connect_wallet,
                "Connect Wallet"
            }
        }
    }
}

/// Asks the injected EVM wallet (`window.ethereum`) for its accounts and returns the first.
#[cfg(feature = "web")]
async fn connect_injected() -> Result<String, String> {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use js_sys::{Array, Object, Promise, Reflect};

    let window = web_sys::window().ok_or("No window")?;

    let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
        .map_err(|_| "No injected wallet")?;

    if ethereum.is_undefined() {
        return Err("Please install MetaMask to connect your wallet.".to_string());
    }

    let request_fn = Reflect::get(&ethereum, &JsValue::from_str("request"))
        .map_err(|_| "No request method")?;

    let request_fn: js_sys::Function = request_fn.dyn_into()
        .map_err(|_| "request is not a function")?;

    let args = Object::new();
    Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str("eth_requestAccounts"))
        .map_err(|_| "Failed to build request")?;

    let promise = request_fn.call1(&ethereum, &args.into())
        .map_err(|e| format!("Request failed: {:?}", e))?;

    let promise: Promise = promise.dyn_into()
        .map_err(|_| "Not a promise")?;

    let accounts = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| format!("Connection rejected: {:?}", e))?;

    let accounts: Array = accounts.dyn_into()
        .map_err(|_| "Accounts is not an array")?;

    accounts.get(0).as_string().ok_or("No account returned".to_string())
}

#[cfg(not(feature = "web"))]
async fn connect_injected() -> Result<String, String> {
    Err("Browser wallet only available in web mode".to_string())
}
