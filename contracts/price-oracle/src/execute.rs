use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{StoredPrice, CONFIG, LATEST_PRICE};

/// Publish a new quote. Only operators can call this.
/// A zero price is rejected so the feed never stores an unusable quote.
pub fn submit_price(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Authorization: only operators
    if !config.operators.contains(&info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "only operators can submit prices".to_string(),
        });
    }

    if price.is_zero() {
        return Err(ContractError::InvalidPrice);
    }

    let stored = StoredPrice {
        price,
        updated_at: env.block.time,
        submitted_by: info.sender.clone(),
    };
    LATEST_PRICE.save(deps.storage, &stored)?;

    Ok(Response::new()
        .add_attribute("action", "submit_price")
        .add_attribute("price", price.to_string())
        .add_attribute("submitted_by", info.sender.to_string())
        .add_event(
            Event::new("pledge_price_updated")
                .add_attribute("price", price.to_string())
                .add_attribute("decimals", config.decimals.to_string())
                .add_attribute("submitted_by", info.sender.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Update the operator list. Admin only.
pub fn update_operators(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    add: Vec<String>,
    remove: Vec<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update operators".to_string(),
        });
    }

    // Remove operators
    for addr_str in &remove {
        let addr = deps.api.addr_validate(addr_str)?;
        config.operators.retain(|a| a != addr);
    }

    // Add operators
    for addr_str in &add {
        let addr = deps.api.addr_validate(addr_str)?;
        if !config.operators.contains(&addr) {
            config.operators.push(addr);
        }
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_operators")
        .add_attribute("added", add.join(",")))
}
