use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<Config> = Item::new("config");
/// Contributor -> cumulative amount funded since the last sweep.
pub const CONTRIBUTIONS: Map<&Addr, Uint128> = Map::new("contributions");
/// Contribution order, one entry per accepted funding call, duplicates
/// allowed. Replaced by an empty vector on every sweep.
pub const FUNDERS: Item<Vec<Addr>> = Item::new("funders");

#[cw_serde]
pub struct Config {
    /// Fixed at instantiation, never reassigned
    pub owner: Addr,
    /// Price oracle contract supplying USD quotes
    pub price_oracle: Addr,
    /// Native denom contributions are accepted in
    pub denom: String,
}
