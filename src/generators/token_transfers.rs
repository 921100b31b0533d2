use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

use super::fields::{self, Window};
use super::GenerationError;
use crate::models::{TokenTransfer, TransferDirection, TOKEN_CATALOG};

pub const TRANSFER_COUNT: usize = 15;

/// Human-readable amounts are drawn with this many decimal places.
const AMOUNT_SCALE: u32 = 6;
const MAX_AMOUNT_UNITS: i64 = 1_000_000 * 10i64.pow(AMOUNT_SCALE);

/// ERC-20 transfers into or out of `filter_address`, newest first.
pub fn generate_token_transfers<R: Rng>(
    rng: &mut R,
    filter_address: &str,
    now: DateTime<Utc>,
) -> Result<Vec<TokenTransfer>, GenerationError> {
    let mut transfers = Vec::with_capacity(TRANSFER_COUNT);

    for _ in 0..TRANSFER_COUNT {
        let token = *TOKEN_CATALOG
            .choose(rng)
            .ok_or(GenerationError::EmptyCatalog("tokens"))?;

        let units = rng.gen_range(1..MAX_AMOUNT_UNITS);
        let human_amount = Decimal::new(units, AMOUNT_SCALE);
        let amount = raw_amount(units, token.decimals)?;
        let usd_value = human_amount
            .checked_mul(token.usd_price())
            .ok_or(GenerationError::Overflow("usd value"))?
            .round_dp(2);

        let counterparty = fields::address(rng);
        let (from_address, to_address) = if rng.gen_bool(0.5) {
            (filter_address.to_string(), counterparty)
        } else {
            (counterparty, filter_address.to_string())
        };
        let direction = TransferDirection::classify(&from_address, filter_address);

        transfers.push(TokenTransfer {
            transaction_hash: fields::tx_hash(rng),
            from_address,
            to_address,
            token_address: fields::address(rng),
            token_symbol: token.symbol.to_string(),
            token_name: token.name.to_string(),
            amount,
            decimals: token.decimals,
            direction,
            timestamp: fields::recent_timestamp(rng, now, Window::LastWeek),
            usd_value,
        });
    }

    transfers.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(transfers)
}

/// Converts `units` (scaled by `10^AMOUNT_SCALE`) into the token's smallest unit.
fn raw_amount(units: i64, decimals: u32) -> Result<Decimal, GenerationError> {
    let units = i128::from(units);
    let raw = if decimals >= AMOUNT_SCALE {
        10i128
            .checked_pow(decimals - AMOUNT_SCALE)
            .and_then(|factor| units.checked_mul(factor))
    } else {
        10i128
            .checked_pow(AMOUNT_SCALE - decimals)
            .map(|factor| units / factor)
    }
    .ok_or(GenerationError::Overflow("token amount"))?;

    Decimal::try_from_i128_with_scale(raw, 0).map_err(|_| GenerationError::Overflow("token amount"))
}
