use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("a quote must be strictly positive")]
    InvalidPrice,

    #[error("unsupported feed precision: {decimals} decimals (max {max})")]
    UnsupportedDecimals { decimals: u32, max: u32 },
}
