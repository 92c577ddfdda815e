use cosmwasm_std::{OverflowError, StdError, Uint128};
use pledge_common::ConvertError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("no funds sent")]
    NoFundsSent,

    #[error("expected exactly one coin")]
    InvalidFunds,

    #[error("wrong denom: {denom}")]
    WrongDenom { denom: String },

    #[error("contribution denom must not be empty")]
    EmptyDenom,

    #[error("contribution of {sent_usd} USD is below the minimum of {minimum_usd} USD")]
    ThresholdNotMet {
        sent_usd: Uint128,
        minimum_usd: Uint128,
    },

    #[error("price oracle unavailable: {reason}")]
    OracleUnavailable { reason: String },

    #[error("no funder at index {index} (sequence length {len})")]
    FunderIndexOutOfRange { index: u64, len: u64 },
}
