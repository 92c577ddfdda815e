use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, DepsMut, Env, Event, MessageInfo, QuerierWrapper,
    QueryRequest, Response, Uint128, WasmQuery,
};
use pledge_common::{normalize_price, usd_value};

use crate::error::ContractError;
use crate::msg::{OracleQueryMsg, PriceResponse};
use crate::state::{CONFIG, CONTRIBUTIONS, FUNDERS};

/// 5 USD in 18-decimal fixed point, the floor every contribution must clear.
pub const MINIMUM_USD: Uint128 = Uint128::new(5_000_000_000_000_000_000u128);

/// Contribute the attached coins. Rejects anything whose USD value, at the
/// oracle's latest quote, is below [`MINIMUM_USD`]. A rejected call aborts
/// the transaction, so the attached coins never leave the sender.
pub fn fund(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Validate funds: exactly one coin of the configured denom
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let sent = &info.funds[0];
    if sent.denom != config.denom {
        return Err(ContractError::WrongDenom {
            denom: sent.denom.clone(),
        });
    }
    let amount = sent.amount;
    if amount.is_zero() {
        return Err(ContractError::NoFundsSent);
    }

    let sent_usd = query_usd_value(deps.querier, &config.price_oracle, amount)?;
    if sent_usd < MINIMUM_USD {
        return Err(ContractError::ThresholdNotMet {
            sent_usd,
            minimum_usd: MINIMUM_USD,
        });
    }

    let updated = CONTRIBUTIONS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default()
        .checked_add(amount)?;
    CONTRIBUTIONS.save(deps.storage, &info.sender, &updated)?;

    let mut funders = FUNDERS.load(deps.storage)?;
    funders.push(info.sender.clone());
    FUNDERS.save(deps.storage, &funders)?;

    Ok(Response::new()
        .add_attribute("action", "fund")
        .add_attribute("funder", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("pledge_fund")
                .add_attribute("funder", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("usd_value", sent_usd.to_string())
                .add_attribute("total_contributed", updated.to_string()),
        ))
}

/// Sweep the full held balance to the owner. Owner only.
pub fn withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: "only the owner can withdraw".to_string(),
        });
    }

    // Records are cleared before the outbound transfer is dispatched: a
    // nested call arriving while the send executes sees only zeroed state,
    // and a failed send reverts the whole transaction, so the reset and the
    // payout commit or roll back together.
    let funders = FUNDERS.load(deps.storage)?;
    let num_funders = funders.len();
    for funder in &funders {
        CONTRIBUTIONS.remove(deps.storage, funder);
    }
    FUNDERS.save(deps.storage, &Vec::new())?;

    let balance = query_held_balance(deps.querier, &env, &config.denom)?;

    let mut response = Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("amount", balance.to_string())
        .add_event(
            Event::new("pledge_withdraw")
                .add_attribute("owner", config.owner.to_string())
                .add_attribute("amount", balance.to_string())
                .add_attribute("funders_cleared", num_funders.to_string()),
        );

    // The bank module rejects zero-amount sends
    if !balance.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: config.owner.to_string(),
            amount: coins(balance.u128(), &config.denom),
        });
    }

    Ok(response)
}

/// USD value of `amount` at the oracle's latest quote, 18-decimal fixed
/// point. An unreachable oracle or a missing quote fails closed.
fn query_usd_value(
    querier: QuerierWrapper,
    price_oracle: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let price_query = QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: price_oracle.to_string(),
        msg: to_json_binary(&OracleQueryMsg::LatestPrice {})?,
    });

    let quote: Option<PriceResponse> =
        querier
            .query(&price_query)
            .map_err(|e| ContractError::OracleUnavailable {
                reason: e.to_string(),
            })?;
    let quote = quote.ok_or_else(|| ContractError::OracleUnavailable {
        reason: "no quote published yet".to_string(),
    })?;

    let price_18dp = normalize_price(quote.price, quote.decimals)?;
    Ok(usd_value(amount, price_18dp)?)
}

/// Query the contract's own balance of the contribution denom.
fn query_held_balance(
    querier: QuerierWrapper,
    env: &Env,
    denom: &str,
) -> Result<Uint128, ContractError> {
    let balance = querier.query_balance(&env.contract.address, denom)?;
    Ok(balance.amount)
}
