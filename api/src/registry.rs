use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::address::{parse_address, Address};
use crate::consts::{CUSTOM_TOKENS_KEY, DEFAULT_TOKENS, NATIVE_SYMBOL};
use crate::error::{DashError, Result};
use crate::storage::KeyValueStore;

/// A tracked asset. `contract` is `None` for the native asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub symbol: String,
    pub contract: Option<Address>,
}

impl AssetEntry {
    pub fn is_native(&self) -> bool {
        self.contract.is_none()
    }
}

/// Ordered set of tracked assets: native first, then defaults, then user-added tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRegistry {
    entries: Vec<AssetEntry>,
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl AssetRegistry {
    pub fn with_defaults() -> Self {
        let mut entries = vec![AssetEntry {
            symbol: NATIVE_SYMBOL.to_string(),
            contract: None,
        }];
        for (symbol, contract) in DEFAULT_TOKENS {
            match parse_address(contract) {
                Ok(address) => entries.push(AssetEntry {
                    symbol: symbol.to_string(),
                    contract: Some(address),
                }),
                Err(e) => tracing::error!("default token {} is misconfigured: {}", symbol, e),
            }
        }
        Self { entries }
    }

    /// Defaults merged with the user-added tokens saved in `store`.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        let mut registry = Self::with_defaults();
        registry.load(store);
        registry
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn get(&self, symbol: &str) -> Option<&AssetEntry> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    pub fn is_default(symbol: &str) -> bool {
        symbol == NATIVE_SYMBOL || DEFAULT_TOKENS.iter().any(|(s, _)| *s == symbol)
    }

    /// User-added entries only.
    pub fn custom_entries(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter().filter(|e| !Self::is_default(&e.symbol))
    }

    /// Validates and appends a token without touching storage.
    pub fn insert(&mut self, symbol: &str, contract: &str) -> Result<()> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(DashError::InvalidInput("token symbol is empty".to_string()));
        }
        if contract.trim().is_empty() {
            return Err(DashError::InvalidInput("contract address is empty".to_string()));
        }
        let contract = parse_address(contract)?;
        if self.contains(symbol) {
            return Err(DashError::DuplicateSymbol(symbol.to_string()));
        }

        self.entries.push(AssetEntry {
            symbol: symbol.to_string(),
            contract: Some(contract),
        });
        Ok(())
    }

    /// Adds a token and persists the user-added subset.
    pub fn register(
        &mut self,
        symbol: &str,
        contract: &str,
        store: &mut impl KeyValueStore,
    ) -> Result<()> {
        self.insert(symbol, contract)?;
        tracing::info!("tracking token {} at {}", symbol.trim(), contract.trim());
        if let Err(e) = self.save(store) {
            tracing::warn!("failed to persist custom tokens: {}", e);
        }
        Ok(())
    }

    /// Writes the user-added entries as a `{ symbol: address }` JSON object, in insertion order.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        let custom: Map<String, Value> = self
            .custom_entries()
            .filter_map(|e| {
                e.contract
                    .map(|c| (e.symbol.clone(), Value::String(format!("{c:#x}"))))
            })
            .collect();
        let json = serde_json::to_string(&custom)
            .map_err(|e| DashError::Storage(e.to_string()))?;
        store.set(CUSTOM_TOKENS_KEY, json)
    }

    /// Merges saved user entries into the registry in saved order. Unreadable data is logged and skipped.
    pub fn load(&mut self, store: &impl KeyValueStore) {
        let Some(raw) = store.get(CUSTOM_TOKENS_KEY) else {
            return;
        };
        let saved: Map<String, Value> = match serde_json::from_str(&raw) {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!("ignoring unreadable custom tokens: {}", e);
                return;
            }
        };

        for (symbol, contract) in saved {
            if symbol == NATIVE_SYMBOL {
                continue;
            }
            let parsed = match &contract {
                Value::String(contract) => parse_address(contract),
                other => Err(DashError::InvalidInput(format!("expected an address, got {other}"))),
            };
            let contract = match parsed {
                Ok(address) => address,
                Err(e) => {
                    tracing::warn!("skipping saved token {}: {}", symbol, e);
                    continue;
                }
            };
            match self.entries.iter_mut().find(|e| e.symbol == symbol) {
                Some(existing) => existing.contract = Some(contract),
                None => self.entries.push(AssetEntry {
                    symbol,
                    contract: Some(contract),
                }),
            }
        }
    }
}
