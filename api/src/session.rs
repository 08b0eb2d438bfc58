use std::fmt;

use crate::address::{Address, ShortAddress};
use crate::balance::BalanceSnapshot;
use crate::distribution::{self, DistributionEntry};
use crate::error::Result;
use crate::registry::AssetRegistry;
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connected(Address),
}

impl WalletStatus {
    pub fn address(&self) -> Option<&Address> {
        match self {
            WalletStatus::Connected(address) => Some(address),
            WalletStatus::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    /// Short form for display, or `Not connected`.
    pub fn short(&self) -> String {
        match self {
            WalletStatus::Connected(address) => address.shorten(),
            WalletStatus::Disconnected => self.to_string(),
        }
    }
}

impl fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletStatus::Connected(address) => write!(f, "{address}"),
            WalletStatus::Disconnected => f.write_str("Not connected"),
        }
    }
}

/// Identifies one issued fetch. Only the latest token of each kind may publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// A value fed by background fetches, with its loading flag and latest request id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fetched<T> {
    value: T,
    loading: bool,
    issued: u64,
}

impl<T> Fetched<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            loading: false,
            issued: 0,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.loading = true;
        RequestToken(self.issued)
    }

    fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    fn publish(&mut self, token: RequestToken, value: T) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.value = value;
        self.loading = false;
        true
    }

    /// Drops whatever is in flight and resets to `value`.
    fn reset(&mut self, value: T) {
        self.issued += 1;
        self.loading = false;
        self.value = value;
    }
}

/// Everything the dashboard shows, mutated only through the methods below.
///
/// Fetches are two-phase: `begin_*` raises the loading flag and hands out a
/// token, the caller performs the I/O, and `finish_*` publishes the outcome.
/// A result whose token is no longer the latest is dropped, so a slow response
/// can never overwrite a newer one. Failed fetches publish a zero value.
#[derive(Clone, Debug)]
pub struct DashboardSession {
    wallet: WalletStatus,
    registry: AssetRegistry,
    balances: Fetched<BalanceSnapshot>,
    tx_count: Fetched<u64>,
    nft_count: Fetched<usize>,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(AssetRegistry::with_defaults())
    }
}

impl DashboardSession {
    pub fn new(registry: AssetRegistry) -> Self {
        let balances = Fetched::new(BalanceSnapshot::zeroed(&registry));
        Self {
            wallet: WalletStatus::Disconnected,
            registry,
            balances,
            tx_count: Fetched::new(0),
            nft_count: Fetched::new(0),
        }
    }

    pub fn wallet(&self) -> &WalletStatus {
        &self.wallet
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn snapshot(&self) -> &BalanceSnapshot {
        self.balances.value()
    }

    pub fn distribution(&self) -> Vec<DistributionEntry> {
        distribution::compute(self.snapshot())
    }

    pub fn tx_count(&self) -> u64 {
        *self.tx_count.value()
    }

    pub fn nft_count(&self) -> usize {
        *self.nft_count.value()
    }

    pub fn balances_loading(&self) -> bool {
        self.balances.is_loading()
    }

    pub fn tx_count_loading(&self) -> bool {
        self.tx_count.is_loading()
    }

    pub fn nft_count_loading(&self) -> bool {
        self.nft_count.is_loading()
    }

    pub fn connect(&mut self, address: Address) {
        tracing::info!("wallet connected: {}", address);
        self.reset_account_data();
        self.wallet = WalletStatus::Connected(address);
    }

    /// Forgets the account and everything fetched for it, including in-flight requests.
    pub fn disconnect(&mut self) {
        self.wallet = WalletStatus::Disconnected;
        self.reset_account_data();
    }

    fn reset_account_data(&mut self) {
        self.balances.reset(BalanceSnapshot::zeroed(&self.registry));
        self.tx_count.reset(0);
        self.nft_count.reset(0);
    }

    /// Tracks a new token and persists the custom token list.
    pub fn add_token(
        &mut self,
        symbol: &str,
        contract: &str,
        store: &mut impl KeyValueStore,
    ) -> Result<()> {
        self.registry.register(symbol, contract, store)
    }

    pub fn begin_balances(&mut self) -> RequestToken {
        self.balances.begin()
    }

    pub fn finish_balances(&mut self, token: RequestToken, result: Result<BalanceSnapshot>) -> bool {
        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(e) => {
                if self.balances.is_current(token) {
                    tracing::error!("balance fetch failed: {}", e);
                }
                BalanceSnapshot::zeroed(&self.registry)
            }
        };
        self.balances.publish(token, snapshot)
    }

    pub fn begin_tx_count(&mut self) -> RequestToken {
        self.tx_count.begin()
    }

    pub fn finish_tx_count(&mut self, token: RequestToken, result: Result<u64>) -> bool {
        let count = result.unwrap_or_else(|e| {
            if self.tx_count.is_current(token) {
                tracing::error!("transaction count fetch failed: {}", e);
            }
            0
        });
        self.tx_count.publish(token, count)
    }

    pub fn begin_nft_count(&mut self) -> RequestToken {
        self.nft_count.begin()
    }

    pub fn finish_nft_count(&mut self, token: RequestToken, result: Result<usize>) -> bool {
        let count = result.unwrap_or_else(|e| {
            if self.nft_count.is_current(token) {
                tracing::error!("NFT fetch failed: {}", e);
            }
            0
        });
        self.nft_count.publish(token, count)
    }
}
