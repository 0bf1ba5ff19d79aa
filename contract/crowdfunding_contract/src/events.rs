use soroban_sdk::{contracttype, Address, BytesN, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: BytesN<32>,
    pub token_id: BytesN<32>,
    pub creator: Address,
    pub target: u64,
    pub index: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceivedEvent {
    pub campaign_id: BytesN<32>,
    pub receipt_id: BytesN<32>,
    pub contributor: Address,
    pub amount: i128,
    pub raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetReachedEvent {
    pub campaign_id: BytesN<32>,
    pub raised_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub campaign_id: BytesN<32>,
    pub token_id: BytesN<32>,
    pub recipient: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(
    env: &soroban_sdk::Env,
    event: CampaignCreatedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_donation_received(
    env: &soroban_sdk::Env,
    event: DonationReceivedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "donation_received"),),
        event,
    );
}

pub fn emit_target_reached(
    env: &soroban_sdk::Env,
    event: TargetReachedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "target_reached"),),
        event,
    );
}

pub fn emit_funds_withdrawn(
    env: &soroban_sdk::Env,
    event: FundsWithdrawnEvent,
) {
    env.events().publish(
        (Symbol::new(env, "funds_withdrawn"),),
        event,
    );
}
