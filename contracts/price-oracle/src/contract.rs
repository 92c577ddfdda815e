use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use pledge_common::PRICE_DECIMALS;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::state::{OracleConfig, CONFIG};

const CONTRACT_NAME: &str = "crates.io:pledge-price-oracle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.decimals > PRICE_DECIMALS {
        return Err(ContractError::UnsupportedDecimals {
            decimals: msg.decimals,
            max: PRICE_DECIMALS,
        });
    }

    // Validate operator addresses
    let mut operators = Vec::new();
    for op in &msg.operators {
        operators.push(deps.api.addr_validate(op)?);
    }

    let config = OracleConfig {
        admin: info.sender.clone(),
        operators,
        decimals: msg.decimals,
        description: msg.description,
    };

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "price-oracle")
        .add_attribute("admin", info.sender.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SubmitPrice { price } => execute::submit_price(deps, env, info, price),
        ExecuteMsg::UpdateOperators { add, remove } => {
            execute::update_operators(deps, env, info, add, remove)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::LatestPrice {} => query::query_latest_price(deps),
        QueryMsg::Version {} => query::query_version(deps),
    }
}
