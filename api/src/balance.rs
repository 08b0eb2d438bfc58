use std::fmt;

use alloy_primitives::U256;
use futures::future::try_join_all;

use crate::address::Address;
use crate::consts::{DEFAULT_TOKEN_DECIMALS, DISPLAY_PRECISION, NATIVE_DECIMALS};
use crate::error::{DashError, Result};
use crate::registry::{AssetEntry, AssetRegistry};
use crate::rpc::ChainReader;

/// A balance rounded to five fractional digits, stored exactly as a count of 10^-5 units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayAmount(U256);

impl DisplayAmount {
    pub const ZERO: Self = Self(U256::ZERO);

    pub const fn from_scaled(scaled: U256) -> Self {
        Self(scaled)
    }

    pub const fn scaled(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn to_f64(&self) -> f64 {
        u256_to_f64(self.0) / u256_to_f64(display_scale())
    }
}

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = display_scale();
        // always below 10^5
        let fraction = u64::try_from(self.0 % scale).unwrap_or_default();
        write!(
            f,
            "{}.{:0width$}",
            self.0 / scale,
            fraction,
            width = DISPLAY_PRECISION as usize
        )
    }
}

fn pow10(exp: u32) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exp))
}

fn display_scale() -> U256 {
    U256::from(10u64.pow(DISPLAY_PRECISION))
}

/// Lossy conversion for chart geometry and percentages.
pub(crate) fn u256_to_f64(value: U256) -> f64 {
    value
        .as_limbs()
        .iter()
        .rev()
        .fold(0.0, |acc, limb| acc * 18_446_744_073_709_551_616.0 + *limb as f64)
}

/// `raw / 10^decimals`, rounded half-up to five fractional digits.
pub fn normalize(raw: U256, decimals: u8) -> DisplayAmount {
    let decimals = u32::from(decimals);
    if decimals <= DISPLAY_PRECISION {
        let factor = pow10(DISPLAY_PRECISION - decimals).unwrap_or(U256::MAX);
        return DisplayAmount(raw.saturating_mul(factor));
    }

    let Some(divisor) = pow10(decimals - DISPLAY_PRECISION) else {
        // 10^(decimals - 5) exceeds U256::MAX, so any amount rounds to zero
        return DisplayAmount::ZERO;
    };
    let quotient = raw / divisor;
    let remainder = raw % divisor;
    if remainder >= divisor - remainder {
        DisplayAmount(quotient + U256::from(1u8))
    } else {
        DisplayAmount(quotient)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceRecord {
    pub symbol: String,
    pub raw_amount: U256,
    pub decimals: u8,
    pub display_amount: DisplayAmount,
}

impl BalanceRecord {
    pub fn new(symbol: impl Into<String>, raw_amount: U256, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            raw_amount,
            decimals,
            display_amount: normalize(raw_amount, decimals),
        }
    }

    fn zero(entry: &AssetEntry) -> Self {
        let decimals = if entry.is_native() {
            NATIVE_DECIMALS
        } else {
            DEFAULT_TOKEN_DECIMALS
        };
        Self::new(entry.symbol.clone(), U256::ZERO, decimals)
    }
}

/// Point-in-time balances in registry order. Replaced whole, never edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BalanceSnapshot {
    records: Vec<BalanceRecord>,
}

impl BalanceSnapshot {
    pub fn new(records: Vec<BalanceRecord>) -> Self {
        Self { records }
    }

    /// Every registry asset at zero.
    pub fn zeroed(registry: &AssetRegistry) -> Self {
        Self {
            records: registry.entries().iter().map(BalanceRecord::zero).collect(),
        }
    }

    pub fn records(&self) -> &[BalanceRecord] {
        &self.records
    }

    pub fn get(&self, symbol: &str) -> Option<&BalanceRecord> {
        self.records.iter().find(|r| r.symbol == symbol)
    }

    pub fn amount(&self, symbol: &str) -> DisplayAmount {
        self.get(symbol)
            .map(|r| r.display_amount)
            .unwrap_or_default()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads the native balance and every tracked token's balance and decimals.
///
/// Reads run concurrently. Any single failure fails the whole snapshot with
/// [`DashError::Aggregation`]; partial results are never returned.
pub async fn fetch_all<C: ChainReader>(
    chain: &C,
    registry: &AssetRegistry,
    account: &Address,
) -> Result<BalanceSnapshot> {
    tracing::debug!("fetching {} balances for {}", registry.len(), account);

    let reads = registry
        .entries()
        .iter()
        .map(|entry| read_entry(chain, entry, account));
    let records = try_join_all(reads).await?;

    tracing::debug!("balances for {} updated", account);
    Ok(BalanceSnapshot::new(records))
}

async fn read_entry<C: ChainReader>(
    chain: &C,
    entry: &AssetEntry,
    account: &Address,
) -> Result<BalanceRecord> {
    let read = match &entry.contract {
        None => chain
            .native_balance(account)
            .await
            .map(|raw| (raw, NATIVE_DECIMALS)),
        Some(token) => {
            futures::try_join!(chain.token_balance(token, account), chain.token_decimals(token))
        }
    };

    let (raw, decimals) =
        read.map_err(|e| DashError::Aggregation(format!("{}: {}", entry.symbol, e)))?;
    Ok(BalanceRecord::new(entry.symbol.clone(), raw, decimals))
}
