use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};
use serde::Deserialize;

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the price oracle contract supplying USD quotes
    pub price_oracle: String,
    /// Native denom contributions are accepted in
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Contribute the attached coins. Send the native coin in info.funds.
    Fund {},
    /// Sweep the entire held balance to the owner. Owner only.
    Withdraw {},
}

/// Raw inbound execute payload. Decoding is tried against the known message
/// set first; anything else falls through to the funding path, so a transfer
/// carrying an unknown or empty instruction is credited like an explicit
/// `Fund {}`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum InboundMsg {
    Known(ExecuteMsg),
    Fallback(serde_json::Value),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    /// The fixed owner identity.
    #[returns(Addr)]
    Owner {},

    /// Cumulative amount contributed by `address`, zero if unknown.
    #[returns(ContributionResponse)]
    Contribution { address: String },

    /// Funder at `index` in contribution order. Fails on an invalid index.
    #[returns(Addr)]
    FunderAt { index: u64 },

    /// The full contribution sequence, oldest first.
    #[returns(Vec<Addr>)]
    Funders {},

    /// Interface version reported by the price oracle, queried live.
    #[returns(u64)]
    OracleVersion {},
}

#[cw_serde]
pub struct ContributionResponse {
    pub address: String,
    pub amount: Uint128,
}

/// Consumed interface of the price oracle contract.
#[cw_serde]
pub enum OracleQueryMsg {
    LatestPrice {},
    Version {},
}

/// Response shape of the oracle's `LatestPrice` query.
#[cw_serde]
pub struct PriceResponse {
    /// Quote in the feed's native precision
    pub price: Uint128,
    /// Precision of `price`
    pub decimals: u32,
    pub updated_at: Timestamp,
}
