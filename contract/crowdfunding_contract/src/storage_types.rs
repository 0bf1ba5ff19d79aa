use soroban_sdk::{contracterror, contracttype, Address, BytesN};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    IdNonce,
    NextIndex,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(BytesN<32>),
    OwnerToken(BytesN<32>),
    Receipt(BytesN<32>),
    CampaignIndex(u64),
    OwnerTokenOf(Address),
}

pub type CampaignId = BytesN<32>;
pub type TokenId = BytesN<32>;
pub type ReceiptId = BytesN<32>;

/// Whether withdrawal waits for the funding target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum WithdrawPolicy {
    /// Only a funded campaign can be drained.
    RequireFunded,
    /// Any accumulated balance can be drained, including pre-target balances.
    AnyBalance,
}

/// Deployment-wide settings, written once by `initialize`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Config {
    pub token: Address,
    /// `10^decimals` of `token`; converts whole target units to base units.
    pub unit_scale: i128,
    pub withdraw_policy: WithdrawPolicy,
}

// Ledger for a single campaign
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: BytesN<32>,
    pub creator: Address,
    pub target: u64,             // Whole token units
    pub raised: i128,            // Currently held, in base units
    pub funded: bool,
    pub total_donated: i128,     // Cumulative deposits, never decreases
    pub receipt_count: u32,
    pub created_at: u64,
}

/// Capability granting withdrawal rights over exactly one campaign.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct OwnerToken {
    pub id: BytesN<32>,
    pub campaign_id: BytesN<32>,
    pub holder: Address,
}

/// Proof of a single donation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Receipt {
    pub id: BytesN<32>,
    pub campaign_id: BytesN<32>,
    pub contributor: Address,
    pub amount_donated: i128,
    pub issued_at: u64,
}

// Returned from campaign creation
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CreatedCampaign {
    pub campaign_id: BytesN<32>,
    pub token_id: BytesN<32>,
    pub index: Option<u64>,      // Set only when created through the registry
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    TokenNotFound = 4,
    CampaignClosed = 5,
    NotFundOwner = 6,
    TargetNotReached = 7,
    InvalidTarget = 8,
    InvalidAmount = 9,
    ArithmeticOverflow = 10,
    InvalidDecimals = 11,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
pub const MAX_PAGE_SIZE: u32 = 100; // Registry entries per page
