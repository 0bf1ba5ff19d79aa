use soroban_sdk::{Address, Env};

use crate::storage_types::*;
use crate::utils::{self, IdDomain};

/// Outcome of crediting one deposit to a campaign.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub raised: i128,
    /// True only for the deposit that moved the campaign into the funded state.
    pub reached_target: bool,
}

impl Campaign {
    /// Credit `amount` base units to the campaign.
    ///
    /// Only the in-memory record is touched; nothing is written and nothing is
    /// transferred, so a returned error leaves the ledger untouched. Each
    /// accepted deposit reserves one receipt slot. Once `raised` reaches the
    /// scaled target the campaign is marked funded and every later deposit is
    /// refused with `CampaignClosed`.
    pub fn record_deposit(&mut self, amount: i128, unit_scale: i128) -> Result<Deposit, CrowdfundError> {
        if self.funded {
            return Err(CrowdfundError::CampaignClosed);
        }
        if amount <= 0 {
            return Err(CrowdfundError::InvalidAmount);
        }

        let raised = self
            .raised
            .checked_add(amount)
            .ok_or(CrowdfundError::ArithmeticOverflow)?;
        let total_donated = self
            .total_donated
            .checked_add(amount)
            .ok_or(CrowdfundError::ArithmeticOverflow)?;
        let receipt_count = self
            .receipt_count
            .checked_add(1)
            .ok_or(CrowdfundError::ArithmeticOverflow)?;
        let threshold = target_in_base_units(self.target, unit_scale)?;

        self.raised = raised;
        self.total_donated = total_donated;
        self.receipt_count = receipt_count;

        let reached_target = raised >= threshold;
        if reached_target {
            self.funded = true;
        }

        Ok(Deposit {
            raised,
            reached_target,
        })
    }

    /// Take the whole held balance, leaving zero behind.
    pub fn drain(&mut self) -> i128 {
        core::mem::replace(&mut self.raised, 0)
    }
}

/// Scale a whole-unit target to base units. Widened to `i128` so that
/// `u64::MAX` targets still compare correctly.
pub fn target_in_base_units(target: u64, unit_scale: i128) -> Result<i128, CrowdfundError> {
    (target as i128)
        .checked_mul(unit_scale)
        .ok_or(CrowdfundError::ArithmeticOverflow)
}

/// Reject targets that are zero or cannot be expressed in base units.
pub fn validate_target(target: u64, unit_scale: i128) -> Result<i128, CrowdfundError> {
    if target == 0 {
        return Err(CrowdfundError::InvalidTarget);
    }
    target_in_base_units(target, unit_scale).map_err(|_| CrowdfundError::InvalidTarget)
}

pub fn open(e: &Env, creator: &Address, target: u64, unit_scale: i128) -> Result<Campaign, CrowdfundError> {
    validate_target(target, unit_scale)?;

    let campaign = Campaign {
        id: utils::next_object_id(e, IdDomain::Campaign),
        creator: creator.clone(),
        target,
        raised: 0,
        funded: false,
        total_donated: 0,
        receipt_count: 0,
        created_at: e.ledger().timestamp(),
    };
    save(e, &campaign);

    Ok(campaign)
}

pub fn load(e: &Env, campaign_id: &CampaignId) -> Result<Campaign, CrowdfundError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id.clone()))
        .ok_or(CrowdfundError::CampaignNotFound)
}

pub fn save(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id.clone());
    e.storage().persistent().set(&key, campaign);
    utils::extend_persistent(e, &key);
}
