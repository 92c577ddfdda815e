use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::Item;

pub const CONFIG: Item<OracleConfig> = Item::new("config");
pub const LATEST_PRICE: Item<StoredPrice> = Item::new("latest_price");

/// Interface version reported by the `Version {}` query. Bumped when the
/// query/response surface changes shape.
pub const ORACLE_VERSION: u64 = 1;

#[cw_serde]
pub struct OracleConfig {
    pub admin: Addr,
    pub operators: Vec<Addr>,
    /// Precision the feed reports prices in (e.g. 8 for a USD feed)
    pub decimals: u32,
    /// Human-readable feed label, e.g. "NATIVE / USD"
    pub description: String,
}

#[cw_serde]
pub struct StoredPrice {
    /// Quote in the feed's native precision, never zero
    pub price: Uint128,
    pub updated_at: Timestamp,
    pub submitted_by: Addr,
}
