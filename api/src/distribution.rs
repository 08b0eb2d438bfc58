use alloy_primitives::U256;

use crate::balance::{u256_to_f64, BalanceSnapshot, DisplayAmount};
use crate::consts::{CHART_COLORS, PERCENT_PRECISION};

/// One slice of the token distribution chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionEntry {
    pub symbol: String,
    pub amount: DisplayAmount,
    pub value: f64,
    /// Share of the total in `[0, 100]`; zero for every entry when the total is zero.
    pub percentage: f64,
    pub color: &'static str,
}

impl DistributionEntry {
    pub fn percentage_label(&self) -> String {
        format!("{:.*}", PERCENT_PRECISION, self.percentage)
    }

    /// Legend line, e.g. `1.50000 MON (75.00%)`.
    pub fn legend_label(&self) -> String {
        format!("{} {} ({}%)", self.amount, self.symbol, self.percentage_label())
    }
}

/// Percentage share of each asset, in snapshot order. Zero balances are kept.
pub fn compute(snapshot: &BalanceSnapshot) -> Vec<DistributionEntry> {
    let total = snapshot
        .records()
        .iter()
        .map(|r| r.display_amount.scaled())
        .fold(U256::ZERO, U256::saturating_add);

    snapshot
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let scaled = record.display_amount.scaled();
            let percentage = if !total.is_zero() {
                u256_to_f64(scaled) / u256_to_f64(total) * 100.0
            } else {
                0.0
            };
            DistributionEntry {
                symbol: record.symbol.clone(),
                amount: record.display_amount,
                value: record.display_amount.to_f64(),
                percentage,
                color: CHART_COLORS[i % CHART_COLORS.len()],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::BalanceRecord;

    fn snapshot(amounts: &[(&str, u128)]) -> BalanceSnapshot {
        BalanceSnapshot::new(
            amounts
                .iter()
                .map(|(symbol, whole)| BalanceRecord::new(*symbol, U256::from(*whole), 0))
                .collect(),
        )
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let snap = snapshot(&[("MON", 3), ("DAK", 0), ("CHOG", 1), ("YAKI", 7)]);
        let entries = compute(&snap);

        let sum: f64 = entries.iter().map(|e| e.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
        assert_eq!(entries[1].percentage, 0.0);
        assert_eq!(entries[0].percentage_label(), "27.27");
    }

    #[test]
    fn zero_total_yields_zero_percentages() {
        let entries = compute(&snapshot(&[("MON", 0), ("DAK", 0)]));
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.percentage == 0.0));
        assert_eq!(entries[0].legend_label(), "0.00000 MON (0.00%)");
    }

    #[test]
    fn keeps_snapshot_order_and_cycles_colors() {
        let symbols: Vec<String> = (0..10).map(|i| format!("T{i}")).collect();
        let amounts: Vec<(&str, u128)> = symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), 10 - i as u128))
            .collect();
        let entries = compute(&snapshot(&amounts));

        assert_eq!(entries[0].symbol, "T0");
        assert_eq!(entries[9].symbol, "T9");
        assert_eq!(entries[8].color, entries[0].color);
        assert_ne!(entries[1].color, entries[0].color);
    }

    #[test]
    fn legend_matches_dashboard_format() {
        let snap = BalanceSnapshot::new(vec![
            BalanceRecord::new("MON", U256::from(1_500_000_000_000_000_000u128), 18),
            BalanceRecord::new("DAK", U256::from(500_000u64), 6),
        ]);
        let entries = compute(&snap);
        assert_eq!(entries[0].legend_label(), "1.50000 MON (75.00%)");
        assert_eq!(entries[1].legend_label(), "0.50000 DAK (25.00%)");
    }

    #[test]
    fn compute_is_pure() {
        let snap = snapshot(&[("MON", 2), ("DAK", 5)]);
        assert_eq!(compute(&snap), compute(&snap));
    }
}
