use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::*;
use crate::utils;

/// Index a campaign under the next free slot and remember the creator's
/// latest owner token. Returns the assigned index.
pub fn record(e: &Env, campaign_id: &CampaignId, creator: &Address, token_id: &TokenId) -> u64 {
    let index = campaign_count(e);

    let index_key = PersistentKey::CampaignIndex(index);
    e.storage().persistent().set(&index_key, campaign_id);
    utils::extend_persistent(e, &index_key);

    // Only the latest token per creator is kept.
    let owner_key = PersistentKey::OwnerTokenOf(creator.clone());
    e.storage().persistent().set(&owner_key, token_id);
    utils::extend_persistent(e, &owner_key);

    e.storage().instance().set(&DataKey::NextIndex, &(index + 1));

    index
}

pub fn campaign_count(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::NextIndex).unwrap_or(0)
}

/// Every indexed campaign in insertion order. One storage read per campaign,
/// so large registries should be walked with `list_page` instead.
pub fn list(e: &Env) -> Vec<CampaignId> {
    list_range(e, 0, campaign_count(e))
}

/// Up to `limit` campaigns starting at index `start`, capped at `MAX_PAGE_SIZE`.
pub fn list_page(e: &Env, start: u64, limit: u32) -> Vec<CampaignId> {
    let limit = limit.min(MAX_PAGE_SIZE) as u64;
    let end = start.saturating_add(limit).min(campaign_count(e));
    list_range(e, start, end)
}

fn list_range(e: &Env, start: u64, end: u64) -> Vec<CampaignId> {
    let mut campaigns = Vec::new(e);
    for index in start..end {
        if let Some(campaign_id) = lookup(e, index) {
            campaigns.push_back(campaign_id);
        }
    }
    campaigns
}

pub fn lookup(e: &Env, index: u64) -> Option<CampaignId> {
    e.storage().persistent().get(&PersistentKey::CampaignIndex(index))
}

pub fn lookup_owner_token(e: &Env, creator: Address) -> Option<TokenId> {
    e.storage().persistent().get(&PersistentKey::OwnerTokenOf(creator))
}
