use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Static description of an ERC-20 token the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u32,
}

pub const TOKEN_CATALOG: [TokenInfo; 5] = [
    TokenInfo { symbol: "USDC", name: "USD Coin", decimals: 6 },
    TokenInfo { symbol: "USDT", name: "Tether USD", decimals: 6 },
    TokenInfo { symbol: "WETH", name: "Wrapped Ether", decimals: 18 },
    TokenInfo { symbol: "DAI", name: "Dai Stablecoin", decimals: 18 },
    TokenInfo { symbol: "UNI", name: "Uniswap", decimals: 18 },
];

impl TokenInfo {
    /// USD price per whole token. Everything but WETH is treated as a $1 stable.
    pub fn usd_price(&self) -> Decimal {
        if self.symbol == "WETH" {
            Decimal::from(2000)
        } else {
            Decimal::ONE
        }
    }
}

// ---------------------------------------------------------------------------
// TransferDirection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferDirection {
    In,
    Out,
}

impl TransferDirection {
    /// `Out` when the transfer was sent by the filter address (case-insensitive).
    pub fn classify(from_address: &str, filter_address: &str) -> Self {
        if from_address.eq_ignore_ascii_case(filter_address) {
            TransferDirection::Out
        } else {
            TransferDirection::In
        }
    }
}

// ---------------------------------------------------------------------------
// TokenTransfer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenTransfer {
    pub transaction_hash: String,
    pub from_address: String,
    pub to_address: String,
    pub token_address: String,
    pub token_symbol: String,
    pub token_name: String,
    /// Raw integer amount in the token's smallest unit.
    pub amount: Decimal,
    pub decimals: u32,
    pub direction: TransferDirection,
    pub timestamp: DateTime<Utc>,
    pub usd_value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_case_insensitive() {
        assert_eq!(
            TransferDirection::classify("0xABCdef", "0xabcDEF"),
            TransferDirection::Out
        );
        assert_eq!(
            TransferDirection::classify("0x1234", "0xabcdef"),
            TransferDirection::In
        );
    }

    #[test]
    fn test_only_weth_is_priced_above_one_dollar() {
        for token in TOKEN_CATALOG {
            let expected = if token.symbol == "WETH" { 2000 } else { 1 };
            assert_eq!(token.usd_price(), Decimal::from(expected), "{}", token.symbol);
        }
    }
}
