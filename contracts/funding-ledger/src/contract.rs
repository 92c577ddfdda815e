use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InboundMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, CONFIG, FUNDERS};

const CONTRACT_NAME: &str = "crates.io:pledge-funding-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.denom.is_empty() {
        return Err(ContractError::EmptyDenom);
    }

    let config = Config {
        owner: info.sender.clone(),
        price_oracle: deps.api.addr_validate(&msg.price_oracle)?,
        denom: msg.denom.clone(),
    };

    CONFIG.save(deps.storage, &config)?;
    FUNDERS.save(deps.storage, &Vec::new())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "funding-ledger")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("denom", msg.denom))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InboundMsg,
) -> Result<Response, ContractError> {
    match msg {
        InboundMsg::Known(ExecuteMsg::Fund {}) => execute::fund(deps, env, info),
        InboundMsg::Known(ExecuteMsg::Withdraw {}) => execute::withdraw(deps, env, info),
        // Default entry point: a payload that matches no known message is
        // treated as a contribution of the attached coins.
        InboundMsg::Fallback(_) => execute::fund(deps, env, info),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Owner {} => query::query_owner(deps),
        QueryMsg::Contribution { address } => query::query_contribution(deps, address),
        QueryMsg::FunderAt { index } => query::query_funder_at(deps, index),
        QueryMsg::Funders {} => query::query_funders(deps),
        QueryMsg::OracleVersion {} => query::query_oracle_version(deps),
    }
}
