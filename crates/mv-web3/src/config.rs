//! Token, subscription, and reward tables for the simulated platform.

pub struct TokenInfo {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    pub icon: &'static str,
}

pub const MANGA_TOKEN: TokenInfo = TokenInfo {
    name: "MANGA",
    symbol: "MANGA",
    decimals: 18,
    icon: "📚",
};

pub struct Tier {
    pub name: &'static str,
    /// Price in MANGA tokens.
    pub price: u64,
    /// Duration in days.
    pub duration: u32,
    /// Discount percentage against paying monthly.
    pub discount: u8,
}

pub struct TierTable {
    pub monthly: Tier,
    pub yearly: Tier,
}

pub const SUBSCRIPTION_TIERS: TierTable = TierTable {
    monthly: Tier {
        name: "Monthly Premium",
        price: 100,
        duration: 30,
        discount: 0,
    },
    yearly: Tier {
        name: "Yearly Premium",
        price: 1000,
        duration: 365,
        discount: 17,
    },
};

/// MANGA earned per community action, with the daily cap.
pub struct RewardSchedule {
    pub daily_login: u64,
    pub review: u64,
    pub rating: u64,
    pub create_list: u64,
    pub referral: u64,
    pub daily_limit: u64,
    pub cooldown_hours: u32,
}

pub const REWARDS: RewardSchedule = RewardSchedule {
    daily_login: 5,
    review: 10,
    rating: 2,
    create_list: 15,
    referral: 50,
    daily_limit: 100,
    cooldown_hours: 24,
};
