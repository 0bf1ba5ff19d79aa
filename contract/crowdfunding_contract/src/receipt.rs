use soroban_sdk::{Address, Env};

use crate::storage_types::*;
use crate::utils::{self, IdDomain};

/// Mint the receipt for one donation. The slot is counted by
/// `Campaign::record_deposit`.
pub fn issue(e: &Env, campaign: &Campaign, contributor: &Address, amount: i128) -> Receipt {
    let receipt = Receipt {
        id: utils::next_object_id(e, IdDomain::Receipt),
        campaign_id: campaign.id.clone(),
        contributor: contributor.clone(),
        amount_donated: amount,
        issued_at: e.ledger().timestamp(),
    };

    let key = PersistentKey::Receipt(receipt.id.clone());
    e.storage().persistent().set(&key, &receipt);
    utils::extend_persistent(e, &key);

    receipt
}

pub fn get(e: &Env, receipt_id: ReceiptId) -> Option<Receipt> {
    e.storage().persistent().get(&PersistentKey::Receipt(receipt_id))
}
