#![no_std]


mod campaign;
mod contribution;
mod events;
mod receipt;
mod registry;
mod storage_types;
mod utils;
mod withdrawal;

pub use events::*;
pub use storage_types::{
    Campaign, CampaignId, Config, CreatedCampaign, CrowdfundError, OwnerToken, Receipt, ReceiptId,
    TokenId, WithdrawPolicy,
};

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, Vec};
use storage_types::DataKey;
use utils::extend_instance;

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the contract with the token campaigns are funded in
    pub fn initialize(
        e: Env,
        token: Address,
        withdraw_policy: WithdrawPolicy,
    ) -> Result<(), CrowdfundError> {
        if e.storage().instance().has(&DataKey::Config) {
            return Err(CrowdfundError::AlreadyInitialized);
        }

        let decimals = token::Client::new(&e, &token).decimals();
        let config = Config {
            token,
            unit_scale: utils::unit_scale_for(decimals)?,
            withdraw_policy,
        };

        e.storage().instance().set(&DataKey::Config, &config);
        e.storage().instance().set(&DataKey::IdNonce, &0u64);
        e.storage().instance().set(&DataKey::NextIndex, &0u64);

        extend_instance(&e);
        Ok(())
    }

    /// Open a campaign without indexing it in the registry
    pub fn create_campaign(
        e: Env,
        creator: Address,
        target: u64,
    ) -> Result<CreatedCampaign, CrowdfundError> {
        creator.require_auth();
        open_campaign(&e, &creator, target, false)
    }

    /// Open a campaign and index it in the registry
    pub fn register_campaign(
        e: Env,
        creator: Address,
        target: u64,
    ) -> Result<CreatedCampaign, CrowdfundError> {
        creator.require_auth();
        open_campaign(&e, &creator, target, true)
    }

    /// Donate to a campaign, receiving a receipt for the amount
    pub fn donate(
        e: Env,
        campaign_id: BytesN<32>,
        contributor: Address,
        amount: i128,
    ) -> Result<Receipt, CrowdfundError> {
        contributor.require_auth();

        let receipt = contribution::donate(&e, &campaign_id, &contributor, amount)?;
        extend_instance(&e);

        Ok(receipt)
    }

    /// Withdraw everything a campaign currently holds to its owner token holder
    pub fn withdraw(
        e: Env,
        token_id: BytesN<32>,
        campaign_id: BytesN<32>,
    ) -> Result<i128, CrowdfundError> {
        let amount = withdrawal::withdraw(&e, &token_id, &campaign_id)?;
        extend_instance(&e);

        Ok(amount)
    }

    /// View functions
    pub fn get_campaign(e: Env, campaign_id: BytesN<32>) -> Result<Campaign, CrowdfundError> {
        campaign::load(&e, &campaign_id)
    }

    pub fn get_raised(e: Env, campaign_id: BytesN<32>) -> Result<i128, CrowdfundError> {
        Ok(campaign::load(&e, &campaign_id)?.raised)
    }

    pub fn is_funded(e: Env, campaign_id: BytesN<32>) -> Result<bool, CrowdfundError> {
        Ok(campaign::load(&e, &campaign_id)?.funded)
    }

    pub fn get_owner_token(e: Env, token_id: BytesN<32>) -> Option<OwnerToken> {
        withdrawal::load_token(&e, &token_id).ok()
    }

    pub fn get_receipt(e: Env, receipt_id: BytesN<32>) -> Option<Receipt> {
        receipt::get(&e, receipt_id)
    }

    pub fn get_config(e: Env) -> Result<Config, CrowdfundError> {
        utils::load_config(&e)
    }

    pub fn list_campaigns(e: Env) -> Vec<BytesN<32>> {
        registry::list(&e)
    }

    pub fn list_campaigns_page(e: Env, start: u64, limit: u32) -> Vec<BytesN<32>> {
        registry::list_page(&e, start, limit)
    }

    pub fn lookup_campaign(e: Env, index: u64) -> Option<BytesN<32>> {
        registry::lookup(&e, index)
    }

    pub fn lookup_owner_token(e: Env, creator: Address) -> Option<BytesN<32>> {
        registry::lookup_owner_token(&e, creator)
    }

    pub fn campaign_count(e: Env) -> u64 {
        registry::campaign_count(&e)
    }
}

fn open_campaign(
    e: &Env,
    creator: &Address,
    target: u64,
    indexed: bool,
) -> Result<CreatedCampaign, CrowdfundError> {
    let config = utils::load_config(e)?;

    let campaign = campaign::open(e, creator, target, config.unit_scale)?;
    let owner_token = withdrawal::mint_owner_token(e, &campaign);
    let index = if indexed {
        Some(registry::record(e, &campaign.id, creator, &owner_token.id))
    } else {
        None
    };
    extend_instance(e);

    log!(e, "campaign opened", campaign.id, target);
    events::emit_campaign_created(
        e,
        events::CampaignCreatedEvent {
            campaign_id: campaign.id.clone(),
            token_id: owner_token.id.clone(),
            creator: creator.clone(),
            target,
            index,
        },
    );

    Ok(CreatedCampaign {
        campaign_id: campaign.id,
        token_id: owner_token.id,
        index,
    })
}
