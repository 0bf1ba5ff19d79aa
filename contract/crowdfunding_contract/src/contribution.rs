use soroban_sdk::{log, token, Address, Env};

use crate::campaign;
use crate::events;
use crate::receipt;
use crate::storage_types::*;
use crate::utils;

/// Apply a donation and hand back its receipt.
///
/// The record is validated and updated in memory before any tokens move. If
/// it is rejected, no tokens are transferred and no receipt is minted.
pub fn donate(
    e: &Env,
    campaign_id: &CampaignId,
    contributor: &Address,
    amount: i128,
) -> Result<Receipt, CrowdfundError> {
    let config = utils::load_config(e)?;
    let mut campaign = campaign::load(e, campaign_id)?;

    let deposit = campaign.record_deposit(amount, config.unit_scale)?;

    let token_client = token::Client::new(e, &config.token);
    token_client.transfer(contributor, &e.current_contract_address(), &amount);

    let receipt = receipt::issue(e, &campaign, contributor, amount);
    campaign::save(e, &campaign);

    if deposit.reached_target {
        log!(e, "campaign funded", campaign.id, deposit.raised);
        events::emit_target_reached(
            e,
            events::TargetReachedEvent {
                campaign_id: campaign.id.clone(),
                raised_amount: deposit.raised,
            },
        );
    }

    events::emit_donation_received(
        e,
        events::DonationReceivedEvent {
            campaign_id: campaign.id,
            receipt_id: receipt.id.clone(),
            contributor: contributor.clone(),
            amount,
            raised: deposit.raised,
        },
    );

    Ok(receipt)
}
