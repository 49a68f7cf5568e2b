//! Simulated Web3 data sources.
//!
//! Every intentionally-unimplemented integration is a capability trait with
//! [`MockPlatform`] as the one implementing variant. A real chain integration
//! would be a further variant behind the same traits; nothing above this
//! layer would change.

mod config;
mod mock;

pub use config::{MANGA_TOKEN, REWARDS, SUBSCRIPTION_TIERS, RewardSchedule, Tier, TierTable, TokenInfo};
pub use mock::MockPlatform;

use anyhow::Result;
use mv_api_types::{
    Account, Nft, Proposal, SubscriptionStatus, TokenBalance, VoteChoice, WalletAddress,
};

pub trait AccountProvider {
    fn account(&self) -> Account;
}

pub trait BalanceSource {
    fn token_balance(&self, address: &WalletAddress) -> Result<TokenBalance>;
    fn pending_rewards(&self, address: &WalletAddress) -> Result<u64>;
}

pub trait GovernanceSource {
    fn proposals(&self) -> Result<Vec<Proposal>>;
    fn voting_power(&self, address: &WalletAddress) -> Result<u64>;

    /// Cast the caller's voting power into one tally and mark the proposal
    /// voted. Unknown proposal ids are a benign no-op.
    fn vote(&mut self, proposal_id: &str, choice: VoteChoice) -> Result<()>;
}

pub trait NftSource {
    fn nfts(&self, address: &WalletAddress) -> Result<Vec<Nft>>;
}

pub trait SubscriptionSource {
    fn subscription(&self, address: &WalletAddress) -> Result<SubscriptionStatus>;
}
