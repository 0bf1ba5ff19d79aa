use soroban_sdk::{xdr::ToXdr, Bytes, BytesN, Env};

use crate::storage_types::*;

/// Object kinds that receive ledger identifiers.
#[derive(Clone, Copy)]
#[repr(u8)]
pub enum IdDomain {
    Campaign = 0,
    OwnerToken = 1,
    Receipt = 2,
}

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn load_config(e: &Env) -> Result<Config, CrowdfundError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(CrowdfundError::NotInitialized)
}

/// Allocate a fresh identifier: sha256(contract address || domain || nonce).
///
/// The nonce is contract-wide and never reused, so identifiers are unique
/// across every object kind.
pub fn next_object_id(e: &Env, domain: IdDomain) -> BytesN<32> {
    let nonce: u64 = e.storage().instance().get(&DataKey::IdNonce).unwrap_or(0);
    e.storage().instance().set(&DataKey::IdNonce, &(nonce + 1));

    let mut preimage: Bytes = e.current_contract_address().to_xdr(e);
    preimage.push_back(domain as u8);
    preimage.append(&nonce.to_xdr(e));
    e.crypto().sha256(&preimage).to_bytes()
}

/// Compute `10^decimals` for a token, failing when it does not fit.
pub fn unit_scale_for(decimals: u32) -> Result<i128, CrowdfundError> {
    10i128
        .checked_pow(decimals)
        .ok_or(CrowdfundError::InvalidDecimals)
}
