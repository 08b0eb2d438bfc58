pub use alloy_primitives::Address;

use crate::error::{DashError, Result};

/// Parses an address typed by the user or returned by the wallet.
pub fn parse_address(raw: &str) -> Result<Address> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DashError::InvalidInput("address is empty".to_string()));
    }
    raw.parse()
        .map_err(|e| DashError::InvalidInput(format!("address {raw}: {e}")))
}

pub trait ShortAddress {
    /// `0x1234...abcd`, lowercase, for places where the full address does not fit.
    fn shorten(&self) -> String;
}

impl ShortAddress for Address {
    fn shorten(&self) -> String {
        let full = format!("{self:#x}");
        format!("{}...{}", &full[..6], &full[full.len() - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAK: &str = "0x0F0BDEbF0F83cD1EE3974779Bcb7315f9808c714";

    #[test]
    fn parses_mixed_case() {
        let address = parse_address(DAK).unwrap();
        assert_eq!(format!("{address:#x}"), DAK.to_lowercase());
        assert_eq!(parse_address(&format!("  {}  ", DAK.to_lowercase())).unwrap(), address);
    }

    #[test]
    fn shorten_keeps_prefix_and_suffix() {
        assert_eq!(parse_address(DAK).unwrap().shorten(), "0x0f0b...c714");
    }

    #[test]
    fn rejects_malformed_addresses() {
        let bad_digit = format!("{}zz", &DAK[..40]);
        for bad in ["", "   ", "0x", "0x1234", bad_digit.as_str()] {
            assert!(
                matches!(parse_address(bad), Err(DashError::InvalidInput(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn serde_round_trips_through_hex() {
        let address = parse_address(DAK).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert!(json.eq_ignore_ascii_case(&format!("\"{DAK}\"")), "{json}");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
