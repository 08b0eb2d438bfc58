use monad_dash_api::error::Result;
use monad_dash_api::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Browser local storage as the dashboard's key-value store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "web")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(key, &value)
            .map_err(|e| DashError::Storage(format!("{:?}", e)))
    }
}

// Desktop builds keep custom tokens for the lifetime of the process only.
#[cfg(not(feature = "web"))]
impl KeyValueStore for LocalStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: String) -> Result<()> {
        tracing::debug!("{} not persisted outside the browser", key);
        Ok(())
    }
}

/// Blocking notification for actions the user triggered.
pub fn notify(message: &str) {
    tracing::warn!("{}", message);

    #[cfg(feature = "web")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Asks for a token symbol. `None` when cancelled or left empty.
#[cfg(feature = "web")]
pub fn prompt_symbol() -> Option<String> {
    let window = web_sys::window()?;
    let symbol = window
        .prompt_with_message("Enter token symbol (leave empty to read it from the contract):")
        .ok()
        .flatten()?;
    let symbol = symbol.trim().to_string();
    (!symbol.is_empty()).then_some(symbol)
}

#[cfg(not(feature = "web"))]
pub fn prompt_symbol() -> Option<String> {
    None
}

pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "web")]
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }

    #[cfg(not(feature = "web"))]
    tracing::info!("open {}", url);
}

/// Fresh RNG for one trivia session.
pub fn session_rng() -> StdRng {
    #[cfg(feature = "web")]
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;

    #[cfg(not(feature = "web"))]
    let seed = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;

    StdRng::seed_from_u64(seed)
}
