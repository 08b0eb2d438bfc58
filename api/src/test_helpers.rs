use std::collections::{HashMap, HashSet};

use alloy_primitives::U256;

use crate::address::Address;
use crate::error::{DashError, Result};
use crate::rpc::ChainReader;

pub const ACCOUNT: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdef0001";

pub fn account() -> Address {
    ACCOUNT.parse().unwrap()
}

/// In-memory chain. Unknown tokens report a zero balance with 18 decimals.
#[derive(Default)]
pub struct FakeChain {
    native: U256,
    tx_count: u64,
    tokens: HashMap<Address, (U256, u8)>,
    symbols: HashMap<Address, String>,
    failing: HashSet<Address>,
    offline: bool,
}

impl FakeChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_native(mut self, raw: U256) -> Self {
        self.native = raw;
        self
    }

    pub fn with_tx_count(mut self, count: u64) -> Self {
        self.tx_count = count;
        self
    }

    pub fn with_token(mut self, contract: &str, raw: U256, decimals: u8) -> Self {
        self.tokens.insert(contract.parse().unwrap(), (raw, decimals));
        self
    }

    pub fn with_symbol(mut self, contract: &str, symbol: &str) -> Self {
        self.symbols.insert(contract.parse().unwrap(), symbol.to_string());
        self
    }

    pub fn failing_decimals(mut self, contract: &str) -> Self {
        self.failing.insert(contract.parse().unwrap());
        self
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    fn online(&self) -> Result<()> {
        if self.offline {
            return Err(DashError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

impl ChainReader for FakeChain {
    async fn native_balance(&self, _account: &Address) -> Result<U256> {
        self.online()?;
        Ok(self.native)
    }

    async fn transaction_count(&self, _account: &Address) -> Result<u64> {
        self.online()?;
        Ok(self.tx_count)
    }

    async fn token_balance(&self, token: &Address, _account: &Address) -> Result<U256> {
        self.online()?;
        Ok(self.tokens.get(token).map(|(raw, _)| *raw).unwrap_or_default())
    }

    async fn token_decimals(&self, token: &Address) -> Result<u8> {
        self.online()?;
        if self.failing.contains(token) {
            return Err(DashError::Network(format!("decimals() reverted for {token}")));
        }
        Ok(self.tokens.get(token).map(|(_, d)| *d).unwrap_or(18))
    }

    async fn token_symbol(&self, token: &Address) -> Result<String> {
        self.online()?;
        self.symbols
            .get(token)
            .cloned()
            .ok_or_else(|| DashError::Network(format!("symbol() reverted for {token}")))
    }
}
