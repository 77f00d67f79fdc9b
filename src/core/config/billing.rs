//! Tier-dependent accessors: Stripe price/product identifiers, parallel run
//! ceiling and per-subscription agent limits.
//!
//! Every accessor reads the mode resolved at load time. Any mode other than
//! `staging` selects the production identifier, `local` included.

use tracing::warn;

use super::schema;
use super::types::{EnvMode, Settings};

/// Parallel agent runs allowed in production when no override is set.
pub const PRODUCTION_MAX_PARALLEL_AGENT_RUNS: i64 = 3;

/// Ceiling used where limits are effectively off (local and staging).
pub const UNBOUNDED: i64 = 999_999;

/// Maximum agents per subscription tier.
const AGENT_LIMITS: &[(&str, i64)] = &[
    ("free", 20),
    ("tier_2_20", 20),
    ("tier_6_50", 20),
    ("tier_12_100", 20),
    ("tier_25_200", 100),
    ("tier_50_400", 100),
    ("tier_125_800", 100),
    ("tier_200_1000", 100),
    ("tier_2_20_yearly", 20),
    ("tier_6_50_yearly", 20),
    ("tier_12_100_yearly", 20),
    ("tier_25_200_yearly", 100),
    ("tier_50_400_yearly", 100),
    ("tier_125_800_yearly", 100),
    ("tier_200_1000_yearly", 100),
    ("tier_2_17_yearly_commitment", 20),
    ("tier_6_42_yearly_commitment", 20),
    ("tier_25_170_yearly_commitment", 100),
];

/// Stripe price a subscription can be billed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripePrice {
    Free,
    Tier2_20,
    Tier6_50,
    Tier12_100,
    Tier25_200,
    Tier50_400,
    Tier125_800,
    Tier200_1000,
    Tier2_20Yearly,
    Tier6_50Yearly,
    Tier12_100Yearly,
    Tier25_200Yearly,
    Tier50_400Yearly,
    Tier125_800Yearly,
    Tier200_1000Yearly,
    Tier2_17YearlyCommitment,
    Tier6_42YearlyCommitment,
    Tier25_170YearlyCommitment,
}

impl StripePrice {
    pub const ALL: [StripePrice; 18] = [
        StripePrice::Free,
        StripePrice::Tier2_20,
        StripePrice::Tier6_50,
        StripePrice::Tier12_100,
        StripePrice::Tier25_200,
        StripePrice::Tier50_400,
        StripePrice::Tier125_800,
        StripePrice::Tier200_1000,
        StripePrice::Tier2_20Yearly,
        StripePrice::Tier6_50Yearly,
        StripePrice::Tier12_100Yearly,
        StripePrice::Tier25_200Yearly,
        StripePrice::Tier50_400Yearly,
        StripePrice::Tier125_800Yearly,
        StripePrice::Tier200_1000Yearly,
        StripePrice::Tier2_17YearlyCommitment,
        StripePrice::Tier6_42YearlyCommitment,
        StripePrice::Tier25_170YearlyCommitment,
    ];

    /// Logical (tier-scoped) setting name holding this price.
    pub fn setting_name(&self) -> &'static str {
        match self {
            StripePrice::Free => "STRIPE_FREE_TIER_ID",
            StripePrice::Tier2_20 => "STRIPE_TIER_2_20_ID",
            StripePrice::Tier6_50 => "STRIPE_TIER_6_50_ID",
            StripePrice::Tier12_100 => "STRIPE_TIER_12_100_ID",
            StripePrice::Tier25_200 => "STRIPE_TIER_25_200_ID",
            StripePrice::Tier50_400 => "STRIPE_TIER_50_400_ID",
            StripePrice::Tier125_800 => "STRIPE_TIER_125_800_ID",
            StripePrice::Tier200_1000 => "STRIPE_TIER_200_1000_ID",
            StripePrice::Tier2_20Yearly => "STRIPE_TIER_2_20_YEARLY_ID",
            StripePrice::Tier6_50Yearly => "STRIPE_TIER_6_50_YEARLY_ID",
            StripePrice::Tier12_100Yearly => "STRIPE_TIER_12_100_YEARLY_ID",
            StripePrice::Tier25_200Yearly => "STRIPE_TIER_25_200_YEARLY_ID",
            StripePrice::Tier50_400Yearly => "STRIPE_TIER_50_400_YEARLY_ID",
            StripePrice::Tier125_800Yearly => "STRIPE_TIER_125_800_YEARLY_ID",
            StripePrice::Tier200_1000Yearly => "STRIPE_TIER_200_1000_YEARLY_ID",
            StripePrice::Tier2_17YearlyCommitment => "STRIPE_TIER_2_17_YEARLY_COMMITMENT_ID",
            StripePrice::Tier6_42YearlyCommitment => "STRIPE_TIER_6_42_YEARLY_COMMITMENT_ID",
            StripePrice::Tier25_170YearlyCommitment => "STRIPE_TIER_25_170_YEARLY_COMMITMENT_ID",
        }
    }

    /// Subscription tier key used by the agent-limit and model-access tables.
    pub fn tier_key(&self) -> &'static str {
        match self {
            StripePrice::Free => "free",
            StripePrice::Tier2_20 => "tier_2_20",
            StripePrice::Tier6_50 => "tier_6_50",
            StripePrice::Tier12_100 => "tier_12_100",
            StripePrice::Tier25_200 => "tier_25_200",
            StripePrice::Tier50_400 => "tier_50_400",
            StripePrice::Tier125_800 => "tier_125_800",
            StripePrice::Tier200_1000 => "tier_200_1000",
            StripePrice::Tier2_20Yearly => "tier_2_20_yearly",
            StripePrice::Tier6_50Yearly => "tier_6_50_yearly",
            StripePrice::Tier12_100Yearly => "tier_12_100_yearly",
            StripePrice::Tier25_200Yearly => "tier_25_200_yearly",
            StripePrice::Tier50_400Yearly => "tier_50_400_yearly",
            StripePrice::Tier125_800Yearly => "tier_125_800_yearly",
            StripePrice::Tier200_1000Yearly => "tier_200_1000_yearly",
            StripePrice::Tier2_17YearlyCommitment => "tier_2_17_yearly_commitment",
            StripePrice::Tier6_42YearlyCommitment => "tier_6_42_yearly_commitment",
            StripePrice::Tier25_170YearlyCommitment => "tier_25_170_yearly_commitment",
        }
    }
}

impl Settings {
    /// Resolve a tier-scoped logical setting: `<name>_STAGING` in staging,
    /// `<name>_PROD` otherwise. `None` for names that are not tier-scoped.
    pub fn tier_scoped(&self, logical: &str) -> Option<&str> {
        if !schema::TIER_SCOPED.contains(&logical) {
            return None;
        }
        let suffix = match self.mode {
            EnvMode::Staging => schema::STAGING_SUFFIX,
            EnvMode::Local | EnvMode::Production => schema::PROD_SUFFIX,
        };
        self.str(&format!("{logical}{suffix}"))
    }

    pub fn stripe_price_id(&self, price: StripePrice) -> Option<&str> {
        self.tier_scoped(price.setting_name())
    }

    pub fn stripe_product_id(&self) -> Option<&str> {
        self.tier_scoped("STRIPE_PRODUCT_ID")
    }

    /// Find the price a Stripe price identifier belongs to in the active mode.
    pub fn stripe_price_for_id(&self, price_id: &str) -> Option<StripePrice> {
        StripePrice::ALL
            .into_iter()
            .find(|p| self.stripe_price_id(*p) == Some(price_id))
    }

    /// Ceiling on concurrently running agents.
    ///
    /// `MAX_PARALLEL_AGENT_RUNS` wins when it parses as an integer; a bad value
    /// is logged and ignored.
    pub fn max_parallel_agent_runs(&self) -> i64 {
        if let Some(raw) = self.str(schema::MAX_PARALLEL_AGENT_RUNS_RAW) {
            match raw.trim().parse::<i64>() {
                Ok(n) => return n,
                Err(_) => warn!(value = raw, "invalid MAX_PARALLEL_AGENT_RUNS, using default"),
            }
        }
        match self.mode {
            EnvMode::Production => PRODUCTION_MAX_PARALLEL_AGENT_RUNS,
            EnvMode::Local | EnvMode::Staging => UNBOUNDED,
        }
    }

    /// Maximum number of agents an account on `tier` may create.
    /// Known tiers are unbounded in local mode; unknown tiers yield `None`.
    pub fn agent_limit(&self, tier: &str) -> Option<i64> {
        let (_, limit) = AGENT_LIMITS.iter().find(|(key, _)| *key == tier)?;
        if self.mode == EnvMode::Local {
            return Some(UNBOUNDED);
        }
        Some(*limit)
    }

    /// [`agent_limit`](Self::agent_limit) for the tier billed at `price`.
    pub fn agent_limit_for(&self, price: StripePrice) -> Option<i64> {
        self.agent_limit(price.tier_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_price_is_tier_scoped() {
        for price in StripePrice::ALL {
            assert!(
                schema::TIER_SCOPED.contains(&price.setting_name()),
                "{} not tier-scoped",
                price.setting_name()
            );
        }
    }

    #[test]
    fn every_price_has_an_agent_limit() {
        for price in StripePrice::ALL {
            assert!(
                AGENT_LIMITS.iter().any(|(key, _)| *key == price.tier_key()),
                "{} has no agent limit",
                price.tier_key()
            );
        }
    }
}
