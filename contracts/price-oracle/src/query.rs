use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult};

use crate::msg::PriceResponse;
use crate::state::{CONFIG, LATEST_PRICE, ORACLE_VERSION};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_latest_price(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let response = LATEST_PRICE
        .may_load(deps.storage)?
        .map(|stored| PriceResponse {
            price: stored.price,
            decimals: config.decimals,
            updated_at: stored.updated_at,
        });
    to_json_binary(&response)
}

pub fn query_version(_deps: Deps) -> StdResult<Binary> {
    to_json_binary(&ORACLE_VERSION)
}
