//! The mock platform variant.
//!
//! Freshly constructed it mirrors the app's visual-only disconnected mode:
//! no address, zero balance, no NFTs, free tier, no proposals. A simulated
//! connect seeds the demo governance data so the vote path is exercisable.
//! No operation performs I/O.

use crate::{
    AccountProvider, BalanceSource, GovernanceSource, NftSource, SubscriptionSource, config,
};
use anyhow::Result;
use mv_api_types::{
    Account, AccountStatus, Nft, Proposal, ProposalStatus, SubscriptionStatus, TokenBalance,
    VoteChoice, WalletAddress,
};
use mv_storage::Clock;

const DEMO_WALLET: &str = "0xa1c7d05b9e42f8136c88f04723e5b6d19a0493f2";
const DEMO_VOTING_POWER: u64 = 1_000;

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

pub struct MockPlatform<C> {
    clock: C,
    account: Account,
    voting_power: u64,
    proposals: Vec<Proposal>,
}

impl<C: Clock> MockPlatform<C> {
    /// Disconnected platform: everything reads as zero or empty.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            account: Account::default(),
            voting_power: 0,
            proposals: Vec::new(),
        }
    }

    /// Simulate a wallet connection: fixed demo address, demo voting power,
    /// and the sample proposal set. Nothing is persisted and no real wallet
    /// is involved.
    pub fn connect(&mut self) {
        let now = self.clock.now_ms();
        self.account = Account {
            address: Some(WalletAddress(DEMO_WALLET.to_owned())),
            status: AccountStatus::Connected,
        };
        self.voting_power = DEMO_VOTING_POWER;
        self.proposals = sample_proposals(now);
    }

    /// Back to the disconnected zeros.
    pub fn disconnect(&mut self) {
        self.account = Account::default();
        self.voting_power = 0;
        self.proposals.clear();
    }
}

impl<C: Clock> AccountProvider for MockPlatform<C> {
    fn account(&self) -> Account {
        self.account.clone()
    }
}

impl<C: Clock> BalanceSource for MockPlatform<C> {
    fn token_balance(&self, _address: &WalletAddress) -> Result<TokenBalance> {
        Ok(TokenBalance {
            symbol: config::MANGA_TOKEN.symbol.to_owned(),
            amount: "0".to_owned(),
        })
    }

    fn pending_rewards(&self, _address: &WalletAddress) -> Result<u64> {
        Ok(0)
    }
}

impl<C: Clock> GovernanceSource for MockPlatform<C> {
    fn proposals(&self) -> Result<Vec<Proposal>> {
        Ok(self.proposals.clone())
    }

    fn voting_power(&self, _address: &WalletAddress) -> Result<u64> {
        Ok(self.voting_power)
    }

    fn vote(&mut self, proposal_id: &str, choice: VoteChoice) -> Result<()> {
        let Some(proposal) = self.proposals.iter_mut().find(|p| p.id == proposal_id) else {
            return Ok(());
        };

        proposal.has_voted = true;
        proposal.user_vote = Some(choice);
        match choice {
            VoteChoice::For => proposal.votes_for += self.voting_power,
            VoteChoice::Against => proposal.votes_against += self.voting_power,
        }
        proposal.total_votes += self.voting_power;

        Ok(())
    }
}

impl<C: Clock> NftSource for MockPlatform<C> {
    fn nfts(&self, _address: &WalletAddress) -> Result<Vec<Nft>> {
        Ok(Vec::new())
    }
}

impl<C: Clock> SubscriptionSource for MockPlatform<C> {
    fn subscription(&self, _address: &WalletAddress) -> Result<SubscriptionStatus> {
        Ok(SubscriptionStatus::default())
    }
}

fn sample_proposals(now: u64) -> Vec<Proposal> {
    vec![
        Proposal {
            id: "1".to_owned(),
            title: "Increase Daily Reward Cap".to_owned(),
            description: "Proposal to increase the daily reward cap from 100 to 150 MANGA \
                          tokens to encourage more community engagement."
                .to_owned(),
            proposer: "0x1234...5678".to_owned(),
            status: ProposalStatus::Active,
            votes_for: 125_000,
            votes_against: 45_000,
            total_votes: 170_000,
            quorum: 100_000,
            ends_at: now + 3 * DAY_MS,
            created_at: now.saturating_sub(4 * DAY_MS),
            has_voted: false,
            user_vote: None,
        },
        Proposal {
            id: "2".to_owned(),
            title: "New NFT Collection: Seasonal Themes".to_owned(),
            description: "Launch a new seasonal NFT collection with exclusive themes for \
                          premium members."
                .to_owned(),
            proposer: "0xabcd...ef01".to_owned(),
            status: ProposalStatus::Active,
            votes_for: 89_000,
            votes_against: 12_000,
            total_votes: 101_000,
            quorum: 100_000,
            ends_at: now + 5 * DAY_MS,
            created_at: now.saturating_sub(2 * DAY_MS),
            has_voted: true,
            user_vote: Some(VoteChoice::For),
        },
        Proposal {
            id: "3".to_owned(),
            title: "Partnership with Top Manga Publishers".to_owned(),
            description: "Allocate 50,000 MANGA from treasury for partnership deals with \
                          major manga publishers."
                .to_owned(),
            proposer: "0x9876...5432".to_owned(),
            status: ProposalStatus::Passed,
            votes_for: 450_000,
            votes_against: 50_000,
            total_votes: 500_000,
            quorum: 100_000,
            ends_at: now.saturating_sub(2 * DAY_MS),
            created_at: now.saturating_sub(9 * DAY_MS),
            has_voted: true,
            user_vote: Some(VoteChoice::For),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mv_storage::ManualClock;
    use pretty_assertions::assert_eq;

    fn demo_address() -> WalletAddress {
        WalletAddress(DEMO_WALLET.to_owned())
    }

    #[test]
    fn fresh_platform_is_disconnected_with_zeros() {
        let platform = MockPlatform::new(ManualClock::at(0));

        let account = platform.account();
        assert_eq!(account.status, AccountStatus::Disconnected);
        assert_eq!(account.address, None);

        assert_eq!(
            platform.token_balance(&demo_address()).unwrap().formatted(),
            "0 MANGA"
        );
        assert_eq!(platform.pending_rewards(&demo_address()).unwrap(), 0);
        assert!(platform.nfts(&demo_address()).unwrap().is_empty());
        assert!(platform.proposals().unwrap().is_empty());

        let sub = platform.subscription(&demo_address()).unwrap();
        assert!(!sub.is_active);
        assert_eq!(sub.days_remaining, 0);
    }

    #[test]
    fn connect_seeds_demo_governance_data() {
        let mut platform = MockPlatform::new(ManualClock::at(10 * DAY_MS));
        platform.connect();

        assert!(platform.account().is_connected());
        assert_eq!(
            platform.voting_power(&demo_address()).unwrap(),
            DEMO_VOTING_POWER
        );

        let proposals = platform.proposals().unwrap();
        assert_eq!(proposals.len(), 3);
        assert_eq!(proposals[0].status, ProposalStatus::Active);
        assert_eq!(proposals[0].ends_at, 13 * DAY_MS);

        platform.disconnect();
        assert!(platform.proposals().unwrap().is_empty());
        assert!(!platform.account().is_connected());
    }

    #[test]
    fn voting_moves_power_into_the_chosen_tally() {
        let mut platform = MockPlatform::new(ManualClock::at(10 * DAY_MS));
        platform.connect();

        platform.vote("1", VoteChoice::For).unwrap();
        let proposal = platform
            .proposals()
            .unwrap()
            .into_iter()
            .find(|p| p.id == "1")
            .unwrap();

        assert!(proposal.has_voted);
        assert_eq!(proposal.user_vote, Some(VoteChoice::For));
        assert_eq!(proposal.votes_for, 125_000 + DEMO_VOTING_POWER);
        assert_eq!(proposal.votes_against, 45_000);
        assert_eq!(proposal.total_votes, 170_000 + DEMO_VOTING_POWER);
    }

    #[test]
    fn voting_against_counts_against() {
        let mut platform = MockPlatform::new(ManualClock::at(10 * DAY_MS));
        platform.connect();

        platform.vote("1", VoteChoice::Against).unwrap();
        let proposal = platform.proposals().unwrap().remove(0);
        assert_eq!(proposal.votes_against, 45_000 + DEMO_VOTING_POWER);
        assert_eq!(proposal.user_vote, Some(VoteChoice::Against));
    }

    #[test]
    fn voting_on_an_unknown_proposal_is_a_noop() {
        let mut platform = MockPlatform::new(ManualClock::at(10 * DAY_MS));
        platform.connect();

        platform.vote("no-such-proposal", VoteChoice::For).unwrap();
        let proposals = platform.proposals().unwrap();
        assert_eq!(proposals[0].votes_for, 125_000);
    }

    #[test]
    fn tier_table_matches_the_platform_config() {
        assert_eq!(config::SUBSCRIPTION_TIERS.monthly.price, 100);
        assert_eq!(config::SUBSCRIPTION_TIERS.monthly.duration, 30);
        assert_eq!(config::SUBSCRIPTION_TIERS.yearly.price, 1_000);
        assert_eq!(config::SUBSCRIPTION_TIERS.yearly.discount, 17);
        assert_eq!(config::REWARDS.daily_limit, 100);
        assert_eq!(config::MANGA_TOKEN.symbol, "MANGA");
    }
}
