//! Simulated Web3 panels: wallet button, token balance, rewards, NFT gallery,
//! subscription card, and the governance panel.
//!
//! Everything reads from the mock platform; the connect button flips it
//! between the disconnected zeros and the seeded demo state.

use crate::dom::{self, Elements};
use crate::events::on_element_click;
use crate::state;
use mv_api_types::{NftRarity, Proposal, ProposalStatus, VoteChoice};
use mv_web3::{
    AccountProvider, BalanceSource, GovernanceSource, MANGA_TOKEN, NftSource, REWARDS,
    SUBSCRIPTION_TIERS, SubscriptionSource,
};

pub fn render_all(els: &Elements) {
    render_wallet(els);
    render_rewards(els);
    render_nfts(els);
    render_subscription(els);
    render_governance(els);
}

/// Header wallet button and balance readout.
pub fn render_wallet(els: &Elements) {
    let account = state::with_platform(|p| p.account());

    match &account.address {
        Some(address) if account.is_connected() => {
            els.connect_wallet_btn
                .set_text_content(Some(&dom::shorten(&address.0, 6, 4)));
            dom::add_class(&els.connect_wallet_btn, "connected");

            let balance = state::with_platform(|p| p.token_balance(address));
            match balance {
                Ok(balance) => dom::set_text(&els.balance_display, &balance.formatted()),
                Err(err) => {
                    gloo_console::warn!(format!("balance fetch failed: {err:#}"));
                    dom::set_text(&els.balance_display, &format!("0 {}", MANGA_TOKEN.symbol));
                }
            }
        }
        _ => {
            els.connect_wallet_btn.set_text_content(Some("Connect Wallet"));
            dom::remove_class(&els.connect_wallet_btn, "connected");
            dom::set_text(&els.balance_display, &format!("0 {}", MANGA_TOKEN.symbol));
        }
    }
}

pub fn render_rewards(els: &Elements) {
    let account = state::with_platform(|p| p.account());
    let pending = match &account.address {
        Some(address) if account.is_connected() => {
            state::with_platform(|p| p.pending_rewards(address)).unwrap_or(0)
        }
        _ => 0,
    };

    let html = format!(
        r#"
        <div class="rewards-pending">{pending} {} pending</div>
        <ul class="rewards-schedule">
          <li>Daily login: {}</li>
          <li>Write a review: {}</li>
          <li>Rate a manga: {}</li>
          <li>Create a list: {}</li>
          <li>Referral: {}</li>
        </ul>
        <div class="rewards-cap">Daily cap {} · resets every {}h</div>
        "#,
        MANGA_TOKEN.symbol,
        REWARDS.daily_login,
        REWARDS.review,
        REWARDS.rating,
        REWARDS.create_list,
        REWARDS.referral,
        REWARDS.daily_limit,
        REWARDS.cooldown_hours,
    );
    dom::set_inner_html(&els.rewards_display, &html);
}

pub fn render_nfts(els: &Elements) {
    let account = state::with_platform(|p| p.account());
    let nfts = match &account.address {
        Some(address) if account.is_connected() => {
            state::with_platform(|p| p.nfts(address)).unwrap_or_default()
        }
        _ => Vec::new(),
    };

    if nfts.is_empty() {
        dom::set_inner_html(
            &els.nft_gallery,
            r#"<div class="nft-empty">No NFTs yet. Read, review, and vote to earn badges.</div>"#,
        );
        return;
    }

    dom::set_inner_html(&els.nft_gallery, "");
    for nft in &nfts {
        let card = dom::create_element("div");
        card.set_attribute("class", "nft-card").unwrap();
        let rarity = match nft.rarity {
            NftRarity::Common => "common",
            NftRarity::Rare => "rare",
            NftRarity::Epic => "epic",
            NftRarity::Legendary => "legendary",
        };
        let html = format!(
            r#"
            <img class="nft-image" src="{}" alt="{}">
            <div class="nft-name">{}</div>
            <div class="nft-rarity nft-rarity--{rarity}">{rarity}</div>
            "#,
            nft.image, nft.name, nft.name,
        );
        dom::set_inner_html(&card, &html);
        els.nft_gallery.append_child(&card).unwrap();
    }
}

pub fn render_subscription(els: &Elements) {
    let account = state::with_platform(|p| p.account());
    let status = match &account.address {
        Some(address) if account.is_connected() => {
            state::with_platform(|p| p.subscription(address)).unwrap_or_default()
        }
        _ => Default::default(),
    };

    let current = if status.is_active {
        format!("Premium · {} days remaining", status.days_remaining)
    } else {
        "Free tier".to_string()
    };

    let html = format!(
        r#"
        <div class="sub-current">{current}</div>
        <div class="sub-tier">
          <span class="sub-tier-name">{}</span>
          <span class="sub-tier-price">{} {} / {} days</span>
        </div>
        <div class="sub-tier">
          <span class="sub-tier-name">{}</span>
          <span class="sub-tier-price">{} {} / {} days · save {}%</span>
        </div>
        "#,
        SUBSCRIPTION_TIERS.monthly.name,
        SUBSCRIPTION_TIERS.monthly.price,
        MANGA_TOKEN.symbol,
        SUBSCRIPTION_TIERS.monthly.duration,
        SUBSCRIPTION_TIERS.yearly.name,
        SUBSCRIPTION_TIERS.yearly.price,
        MANGA_TOKEN.symbol,
        SUBSCRIPTION_TIERS.yearly.duration,
        SUBSCRIPTION_TIERS.yearly.discount,
    );
    dom::set_inner_html(&els.subscription_card, &html);
}

fn status_label(status: ProposalStatus) -> &'static str {
    match status {
        ProposalStatus::Active => "active",
        ProposalStatus::Passed => "passed",
        ProposalStatus::Rejected => "rejected",
        ProposalStatus::Pending => "pending",
    }
}

fn proposal_card(els: &Elements, proposal: &Proposal, can_vote: bool) -> web_sys::Element {
    let card = dom::create_element("div");
    card.set_attribute("class", "proposal-card").unwrap();

    let percent_for = if proposal.total_votes == 0 {
        0.0
    } else {
        proposal.votes_for as f64 / proposal.total_votes as f64 * 100.0
    };
    let quorum_note = if proposal.total_votes >= proposal.quorum {
        "quorum reached"
    } else {
        "below quorum"
    };
    let voted_html = match proposal.user_vote {
        Some(VoteChoice::For) => r#"<span class="pc-voted">You voted for</span>"#,
        Some(VoteChoice::Against) => r#"<span class="pc-voted">You voted against</span>"#,
        None => "",
    };
    let actions_html = if can_vote {
        r#"
        <div class="pc-actions">
          <button class="pc-vote-for-btn secondary">Vote For</button>
          <button class="pc-vote-against-btn secondary">Vote Against</button>
        </div>
        "#
    } else {
        ""
    };

    let html = format!(
        r#"
        <div class="pc-status pc-status--{}">{}</div>
        <div class="pc-title">{}</div>
        <div class="pc-description">{}</div>
        <div class="pc-proposer">by {}</div>
        <div class="pc-tally">
          <div class="pc-tally-bar" style="width: {:.0}%"></div>
        </div>
        <div class="pc-meta">{} for · {} against · {}</div>
        {}
        {}
        "#,
        status_label(proposal.status),
        status_label(proposal.status),
        proposal.title,
        proposal.description,
        proposal.proposer,
        percent_for,
        proposal.votes_for,
        proposal.votes_against,
        quorum_note,
        voted_html,
        actions_html,
    );
    dom::set_inner_html(&card, &html);

    if can_vote {
        bind_vote_buttons(els, &card, &proposal.id);
    }
    card
}

fn bind_vote_buttons(els: &Elements, card: &web_sys::Element, proposal_id: &str) {
    let pairs = [
        (".pc-vote-for-btn", VoteChoice::For),
        (".pc-vote-against-btn", VoteChoice::Against),
    ];
    for (selector, choice) in pairs {
        if let Some(btn) = dom::query_all_within(card, selector).into_iter().next() {
            let els2 = els.clone();
            let id = proposal_id.to_owned();
            on_element_click(&btn, move |_| {
                on_vote(&els2, &id, choice);
            });
        }
    }
}

fn on_vote(els: &Elements, proposal_id: &str, choice: VoteChoice) {
    if let Err(err) = state::with_platform(|p| p.vote(proposal_id, choice)) {
        gloo_console::error!(format!("vote failed: {err:#}"));
    }
    render_governance(els);
}

pub fn render_governance(els: &Elements) {
    let account = state::with_platform(|p| p.account());
    let connected = account.is_connected();

    let power = match &account.address {
        Some(address) if connected => {
            state::with_platform(|p| p.voting_power(address)).unwrap_or(0)
        }
        _ => 0,
    };
    dom::set_text(
        &els.voting_power_display,
        &format!("Voting power: {power} {}", MANGA_TOKEN.symbol),
    );

    let proposals = state::with_platform(|p| p.proposals()).unwrap_or_default();

    dom::set_inner_html(&els.proposal_list, "");
    if proposals.is_empty() {
        dom::set_inner_html(
            &els.proposal_list,
            r#"<div class="proposal-card proposal-card--empty">Connect a wallet to see proposals.</div>"#,
        );
        return;
    }

    for proposal in &proposals {
        let can_vote =
            connected && proposal.status == ProposalStatus::Active && !proposal.has_voted;
        let card = proposal_card(els, proposal, can_vote);
        els.proposal_list.append_child(&card).unwrap();
    }
}

/// Flip the mock platform between disconnected and the seeded demo state.
pub fn on_connect_toggle(els: &Elements) {
    state::with_platform(|p| {
        if p.account().is_connected() {
            p.disconnect();
        } else {
            p.connect();
        }
    });
    render_all(els);
}
