use cosmwasm_std::{to_json_binary, Binary, Deps, QueryRequest, Uint128, WasmQuery};

use crate::error::ContractError;
use crate::msg::{ContributionResponse, OracleQueryMsg};
use crate::state::{CONFIG, CONTRIBUTIONS, FUNDERS};

pub fn query_config(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(to_json_binary(&config)?)
}

pub fn query_owner(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(to_json_binary(&config.owner)?)
}

pub fn query_contribution(deps: Deps, address: String) -> Result<Binary, ContractError> {
    let addr = deps.api.addr_validate(&address)?;
    let amount = CONTRIBUTIONS
        .may_load(deps.storage, &addr)?
        .unwrap_or(Uint128::zero());
    Ok(to_json_binary(&ContributionResponse { address, amount })?)
}

/// Positional lookup into the contribution sequence. An invalid index is a
/// typed error, never a default address.
pub fn query_funder_at(deps: Deps, index: u64) -> Result<Binary, ContractError> {
    let funders = FUNDERS.load(deps.storage)?;
    let funder = usize::try_from(index)
        .ok()
        .and_then(|i| funders.get(i))
        .ok_or(ContractError::FunderIndexOutOfRange {
            index,
            len: funders.len() as u64,
        })?;
    Ok(to_json_binary(funder)?)
}

pub fn query_funders(deps: Deps) -> Result<Binary, ContractError> {
    let funders = FUNDERS.load(deps.storage)?;
    Ok(to_json_binary(&funders)?)
}

/// Live pass-through of the oracle's `Version` query, no caching.
pub fn query_oracle_version(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let version: u64 = deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: config.price_oracle.to_string(),
        msg: to_json_binary(&OracleQueryMsg::Version {})?,
    }))?;
    Ok(to_json_binary(&version)?)
}
