use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TxStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Failed,
}

// ---------------------------------------------------------------------------
// ContractMethod
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractMethod {
    Transfer,
    Approve,
    Swap,
    Mint,
    Burn,
}

impl ContractMethod {
    pub const ALL: [ContractMethod; 5] = [
        ContractMethod::Transfer,
        ContractMethod::Approve,
        ContractMethod::Swap,
        ContractMethod::Mint,
        ContractMethod::Burn,
    ];
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A contract call made by the filter address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub from_address: String,
    pub to_address: String,
    pub value: Decimal,
    pub gas_used: String,
    pub gas_price: String,
    pub timestamp: DateTime<Utc>,
    pub status: TxStatus,
    pub method: ContractMethod,
    pub block_number: String,
}
