//! Model catalog — the single table of supported LLM models.
//!
//! Each entry lists the model identifier as passed to the router, its display
//! aliases, per-million-token pricing and which subscription classes may use
//! it. [`ModelCatalog::builtin`] derives the lookup structures the rest of the
//! backend uses: free/paid model lists, alias map, pricing map (with legacy
//! name variants) and per-tier access lists.

use std::collections::HashMap;

use serde::Serialize;

/// USD per million tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelPricing {
    pub input_cost_per_million_tokens: f64,
    pub output_cost_per_million_tokens: f64,
}

impl ModelPricing {
    /// Cost in USD for a single request.
    pub fn cost(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        (input_tokens as f64 * self.input_cost_per_million_tokens
            + output_tokens as f64 * self.output_cost_per_million_tokens)
            / 1_000_000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Free,
    Paid,
}

#[derive(Debug, Clone, Copy)]
pub struct ModelEntry {
    pub id: &'static str,
    pub aliases: &'static [&'static str],
    pub pricing: ModelPricing,
    pub availability: &'static [Availability],
}

const fn pricing(input: f64, output: f64) -> ModelPricing {
    ModelPricing { input_cost_per_million_tokens: input, output_cost_per_million_tokens: output }
}

const FREE_AND_PAID: &[Availability] = &[Availability::Free, Availability::Paid];
const PAID_ONLY: &[Availability] = &[Availability::Paid];

pub const MODELS: &[ModelEntry] = &[
    ModelEntry {
        id: "bedrock/us.anthropic.claude-sonnet-4-20250514-v1:0",
        aliases: &["Expert 🤑💰💸"],
        pricing: pricing(3.00, 15.00),
        availability: FREE_AND_PAID,
    },
    ModelEntry {
        id: "openrouter/google/gemini-2.5-pro",
        aliases: &["Gemini Pro"],
        pricing: pricing(1.25, 10.00),
        availability: PAID_ONLY,
    },
    ModelEntry {
        id: "openrouter/openai/o4-mini-high",
        aliases: &["o4-mini 🧠⚖️💰"],
        pricing: pricing(0.25, 2.00),
        availability: FREE_AND_PAID,
    },
    ModelEntry {
        id: "openrouter/openai/gpt-5-mini",
        aliases: &["GPT-5-M 🤖💰"],
        pricing: pricing(0.25, 2.00),
        availability: FREE_AND_PAID,
    },
    ModelEntry {
        id: "openrouter/google/gemini-2.5-flash",
        aliases: &["Main 💨⚡️🚀"],
        pricing: pricing(0.3, 2.50),
        availability: FREE_AND_PAID,
    },
    ModelEntry {
        id: "openrouter/x-ai/grok-4",
        aliases: &["Grok 💰🤓"],
        pricing: pricing(3.00, 15.00),
        availability: PAID_ONLY,
    },
    ModelEntry {
        id: "anthropic/claude-3-5-sonnet-latest",
        aliases: &["sonnet-3.5"],
        pricing: pricing(3.00, 15.00),
        availability: PAID_ONLY,
    },
];

/// Subscription tiers with access to the paid model list.
const PAID_ACCESS_TIERS: &[&str] = &[
    "tier_2_20",
    "tier_6_50",
    "tier_12_100",
    "tier_25_200",
    "tier_50_400",
    "tier_125_800",
    "tier_200_1000",
    "tier_25_170_yearly_commitment",
    "tier_6_42_yearly_commitment",
    "tier_12_84_yearly_commitment",
];

/// Derived lookup structures over a model table.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    free_models: Vec<&'static str>,
    paid_models: Vec<&'static str>,
    aliases: HashMap<&'static str, &'static str>,
    pricing: HashMap<String, ModelPricing>,
}

impl ModelCatalog {
    /// Catalog over the built-in [`MODELS`] table.
    pub fn builtin() -> Self {
        Self::from_entries(MODELS)
    }

    pub fn from_entries(entries: &[ModelEntry]) -> Self {
        let mut catalog = ModelCatalog {
            free_models: Vec::new(),
            paid_models: Vec::new(),
            aliases: HashMap::new(),
            pricing: HashMap::new(),
        };

        for entry in entries {
            if entry.availability.contains(&Availability::Free) {
                catalog.free_models.push(entry.id);
            }
            if entry.availability.contains(&Availability::Paid) {
                catalog.paid_models.push(entry.id);
            }
            for alias in entry.aliases {
                catalog.aliases.insert(*alias, entry.id);
            }
            catalog.pricing.insert(entry.id.to_string(), entry.pricing);
            if let Some(legacy) = legacy_name(entry.id) {
                catalog.pricing.insert(legacy, entry.pricing);
            }
        }

        catalog
    }

    pub fn free_models(&self) -> &[&'static str] {
        &self.free_models
    }

    pub fn paid_models(&self) -> &[&'static str] {
        &self.paid_models
    }

    /// Models a subscription tier may use. Unknown tiers get nothing.
    pub fn models_for_tier(&self, tier: &str) -> &[&'static str] {
        if tier == "free" {
            self.free_models.as_slice()
        } else if PAID_ACCESS_TIERS.contains(&tier) {
            self.paid_models.as_slice()
        } else {
            &[]
        }
    }

    /// Canonical model id for a display alias; other names pass through.
    pub fn resolve_alias<'a>(&self, name: &'a str) -> &'a str {
        match self.aliases.get(name) {
            Some(id) => *id,
            None => name,
        }
    }

    pub fn pricing(&self, model: &str) -> Option<&ModelPricing> {
        self.pricing.get(model)
    }

    pub fn can_use(&self, tier: &str, model: &str) -> bool {
        let model = self.resolve_alias(model);
        self.models_for_tier(tier).iter().any(|m| *m == model)
    }
}

/// Additional pricing key for a model that is also requested under an older
/// or differently-routed name.
fn legacy_name(id: &str) -> Option<String> {
    if id.starts_with("openrouter/deepseek/") || id.starts_with("openrouter/qwen/") {
        return id.strip_prefix("openrouter/").map(str::to_string);
    }
    if let Some(rest) = id.strip_prefix("gemini/") {
        return Some(rest.to_string());
    }
    if id.starts_with("anthropic/") && id.contains("claude-sonnet-4-20250514") {
        return Some("anthropic/claude-sonnet-4".to_string());
    }
    if let Some(rest) = id.strip_prefix("xai/") {
        return Some(format!("openrouter/x-ai/{rest}"));
    }
    None
}
