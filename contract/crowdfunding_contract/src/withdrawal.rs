use soroban_sdk::{log, token, Env};

use crate::campaign;
use crate::events;
use crate::storage_types::*;
use crate::utils;

/// Drain a campaign's balance to the holder of its owner token.
pub fn withdraw(e: &Env, token_id: &TokenId, campaign_id: &CampaignId) -> Result<i128, CrowdfundError> {
    let config = utils::load_config(e)?;
    let owner_token = load_token(e, token_id)?;
    owner_token.holder.require_auth();

    let mut campaign = campaign::load(e, campaign_id)?;
    if owner_token.campaign_id != campaign.id {
        return Err(CrowdfundError::NotFundOwner);
    }

    if config.withdraw_policy == WithdrawPolicy::RequireFunded && !campaign.funded {
        return Err(CrowdfundError::TargetNotReached);
    }

    let amount = campaign.drain();
    campaign::save(e, &campaign);

    if amount > 0 {
        let token_client = token::Client::new(e, &config.token);
        token_client.transfer(&e.current_contract_address(), &owner_token.holder, &amount);
    }

    log!(e, "campaign drained", campaign.id, amount);
    events::emit_funds_withdrawn(
        e,
        events::FundsWithdrawnEvent {
            campaign_id: campaign.id,
            token_id: owner_token.id,
            recipient: owner_token.holder,
            amount,
        },
    );

    Ok(amount)
}

/// Mint the single owner token for a freshly opened campaign.
pub fn mint_owner_token(e: &Env, campaign: &Campaign) -> OwnerToken {
    let owner_token = OwnerToken {
        id: utils::next_object_id(e, utils::IdDomain::OwnerToken),
        campaign_id: campaign.id.clone(),
        holder: campaign.creator.clone(),
    };

    let key = PersistentKey::OwnerToken(owner_token.id.clone());
    e.storage().persistent().set(&key, &owner_token);
    utils::extend_persistent(e, &key);

    owner_token
}

pub fn load_token(e: &Env, token_id: &TokenId) -> Result<OwnerToken, CrowdfundError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::OwnerToken(token_id.clone()))
        .ok_or(CrowdfundError::TokenNotFound)
}
