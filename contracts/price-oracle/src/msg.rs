use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};

use crate::state::OracleConfig;

#[cw_serde]
pub struct InstantiateMsg {
    pub operators: Vec<String>,
    /// Precision submitted prices are denominated in, at most 18
    pub decimals: u32,
    /// Human-readable feed label, e.g. "NATIVE / USD"
    pub description: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Publish a new quote in the feed's native precision. Operator only.
    SubmitPrice { price: Uint128 },
    /// Update operator list (admin only).
    UpdateOperators {
        add: Vec<String>,
        remove: Vec<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OracleConfig)]
    Config {},

    /// Latest published quote, `None` until the first submission.
    #[returns(Option<PriceResponse>)]
    LatestPrice {},

    #[returns(u64)]
    Version {},
}

#[cw_serde]
pub struct PriceResponse {
    /// Quote in the feed's native precision
    pub price: Uint128,
    /// Precision of `price`
    pub decimals: u32,
    pub updated_at: Timestamp,
}
