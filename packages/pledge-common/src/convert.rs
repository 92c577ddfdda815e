use cosmwasm_std::{Uint128, Uint256};
use thiserror::Error;

/// Fixed-point precision all USD values are expressed in.
pub const PRICE_DECIMALS: u32 = 18;

/// 10^18, the scaling factor for 18-decimal fixed point.
const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

#[derive(Error, Debug, PartialEq)]
pub enum ConvertError {
    #[error("oracle returned a zero price")]
    ZeroPrice,

    #[error("unsupported feed precision: {decimals} decimals (max {PRICE_DECIMALS})")]
    UnsupportedDecimals { decimals: u32 },

    #[error("converted value does not fit in 128 bits")]
    ValueOverflow,
}

/// Scale a raw feed quote up to 18-decimal fixed point.
///
/// Feeds report fewer decimals than the internal precision (e.g. 8), so the
/// quote is multiplied by `10^(18 - decimals)`. A zero price or a feed
/// claiming more than 18 decimals is rejected rather than guessed at.
pub fn normalize_price(price: Uint128, decimals: u32) -> Result<Uint128, ConvertError> {
    if price.is_zero() {
        return Err(ConvertError::ZeroPrice);
    }
    if decimals > PRICE_DECIMALS {
        return Err(ConvertError::UnsupportedDecimals { decimals });
    }
    let factor = Uint128::from(10u128.pow(PRICE_DECIMALS - decimals));
    price
        .checked_mul(factor)
        .map_err(|_| ConvertError::ValueOverflow)
}

/// USD value of `native_amount` at `price_18dp`, in 18-decimal fixed point.
///
/// The multiply runs at 256-bit width and the division by 10^18 happens on
/// the full product, so nothing is truncated before the final narrowing.
pub fn usd_value(native_amount: Uint128, price_18dp: Uint128) -> Result<Uint128, ConvertError> {
    if price_18dp.is_zero() {
        return Err(ConvertError::ZeroPrice);
    }
    let product = price_18dp.full_mul(native_amount);
    let scaled = product / Uint256::from(PRICE_SCALE);
    Uint128::try_from(scaled).map_err(|_| ConvertError::ValueOverflow)
}
