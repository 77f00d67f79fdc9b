//! Declarative settings schema.
//!
//! Every setting the loader knows about is listed in [`SCHEMA`], in the order
//! it is loaded and validated. A field is *required* when it is neither
//! optional nor defaulted; the validator reports all such fields that are
//! still unset after loading.

use super::types::{EnvMode, SettingValue};

/// Declared value type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int,
    Bool,
    Mode,
}

/// Compile-time default for a setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    None,
    Str(&'static str),
    Int(i64),
    Bool(bool),
    Mode(EnvMode),
}

impl FieldDefault {
    pub fn value(&self) -> Option<SettingValue> {
        match *self {
            FieldDefault::None => None,
            FieldDefault::Str(s) => Some(SettingValue::Str(s.to_string())),
            FieldDefault::Int(i) => Some(SettingValue::Int(i)),
            FieldDefault::Bool(b) => Some(SettingValue::Bool(b)),
            FieldDefault::Mode(m) => Some(SettingValue::Mode(m)),
        }
    }
}

/// One entry of the settings schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Registry key. Names starting with `_` are internal and never exported.
    pub name: &'static str,
    /// Environment variable the value is read from. Usually equal to `name`.
    pub env_key: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
    pub optional: bool,
}

impl FieldSpec {
    /// Required string with no default.
    pub const fn required(name: &'static str) -> Self {
        Self { name, env_key: name, kind: FieldKind::Str, default: FieldDefault::None, optional: false }
    }

    /// Optional string with no default.
    pub const fn optional(name: &'static str) -> Self {
        Self { name, env_key: name, kind: FieldKind::Str, default: FieldDefault::None, optional: true }
    }

    /// String with a default.
    pub const fn text(name: &'static str, default: &'static str) -> Self {
        Self { name, env_key: name, kind: FieldKind::Str, default: FieldDefault::Str(default), optional: false }
    }

    /// Optional string that still carries a default.
    pub const fn optional_text(name: &'static str, default: &'static str) -> Self {
        Self { name, env_key: name, kind: FieldKind::Str, default: FieldDefault::Str(default), optional: true }
    }

    pub const fn integer(name: &'static str, default: i64) -> Self {
        Self { name, env_key: name, kind: FieldKind::Int, default: FieldDefault::Int(default), optional: false }
    }

    pub const fn flag(name: &'static str, default: bool) -> Self {
        Self { name, env_key: name, kind: FieldKind::Bool, default: FieldDefault::Bool(default), optional: false }
    }

    pub const fn mode(name: &'static str, default: EnvMode) -> Self {
        Self { name, env_key: name, kind: FieldKind::Mode, default: FieldDefault::Mode(default), optional: false }
    }

    /// Read this field from a different environment variable.
    pub const fn read_from(self, env_key: &'static str) -> Self {
        Self { env_key, ..self }
    }

    pub fn is_required(&self) -> bool {
        !self.optional && matches!(self.default, FieldDefault::None)
    }

    pub fn is_internal(&self) -> bool {
        self.name.starts_with('_')
    }
}

/// Name of the environment-mode setting. Resolved before everything else.
pub const ENV_MODE: &str = "ENV_MODE";

/// Suffix of the production half of a tier-scoped pair.
pub const PROD_SUFFIX: &str = "_PROD";
/// Suffix of the staging half of a tier-scoped pair.
pub const STAGING_SUFFIX: &str = "_STAGING";

/// Internal field holding the raw `MAX_PARALLEL_AGENT_RUNS` override.
pub const MAX_PARALLEL_AGENT_RUNS_RAW: &str = "_MAX_PARALLEL_AGENT_RUNS_ENV";

/// Logical settings that exist as a `_PROD` / `_STAGING` pair.
pub const TIER_SCOPED: &[&str] = &[
    "STRIPE_FREE_TIER_ID",
    "STRIPE_TIER_2_20_ID",
    "STRIPE_TIER_6_50_ID",
    "STRIPE_TIER_12_100_ID",
    "STRIPE_TIER_25_200_ID",
    "STRIPE_TIER_50_400_ID",
    "STRIPE_TIER_125_800_ID",
    "STRIPE_TIER_200_1000_ID",
    "STRIPE_TIER_2_20_YEARLY_ID",
    "STRIPE_TIER_6_50_YEARLY_ID",
    "STRIPE_TIER_12_100_YEARLY_ID",
    "STRIPE_TIER_25_200_YEARLY_ID",
    "STRIPE_TIER_50_400_YEARLY_ID",
    "STRIPE_TIER_125_800_YEARLY_ID",
    "STRIPE_TIER_200_1000_YEARLY_ID",
    "STRIPE_TIER_2_17_YEARLY_COMMITMENT_ID",
    "STRIPE_TIER_6_42_YEARLY_COMMITMENT_ID",
    "STRIPE_TIER_25_170_YEARLY_COMMITMENT_ID",
    "STRIPE_PRODUCT_ID",
];

pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec::mode(ENV_MODE, EnvMode::Local),
    // ── Stripe prices: production ───────────────────────────────────────────
    FieldSpec::text("STRIPE_FREE_TIER_ID_PROD", "price_1Rskv5PA6ngq7HqUpjHARY5K"),
    FieldSpec::text("STRIPE_TIER_2_20_ID_PROD", "price_1Rskv5PA6ngq7HqUE4yuvihy"),
    FieldSpec::text("STRIPE_TIER_6_50_ID_PROD", "price_1Rskv5PA6ngq7HqU75HMYmgX"),
    FieldSpec::text("STRIPE_TIER_12_100_ID_PROD", "price_1Rskv5PA6ngq7HqUpY1Vuho6"),
    FieldSpec::text("STRIPE_TIER_25_200_ID_PROD", "price_1Rskv5PA6ngq7HqUoSqcENlm"),
    FieldSpec::text("STRIPE_TIER_50_400_ID_PROD", "price_1Rskv5PA6ngq7HqUUajSvBqN"),
    FieldSpec::text("STRIPE_TIER_125_800_ID_PROD", "price_1Rskv5PA6ngq7HqUkdrI3lUh"),
    FieldSpec::text("STRIPE_TIER_200_1000_ID_PROD", "price_1Rskv5PA6ngq7HqUS0E9z6Qr"),
    FieldSpec::text("STRIPE_TIER_2_20_YEARLY_ID_PROD", "price_1Rskv5PA6ngq7HqUuyMrINo0"),
    FieldSpec::text("STRIPE_TIER_6_50_YEARLY_ID_PROD", "price_1Rskv5PA6ngq7HqUEDN8Up7u"),
    FieldSpec::text("STRIPE_TIER_12_100_YEARLY_ID_PROD", "price_1Rskv5PA6ngq7HqUeYeXSLWb"),
    FieldSpec::text("STRIPE_TIER_25_200_YEARLY_ID_PROD", "price_1Rskv4PA6ngq7HqUmx9mCQZP"),
    FieldSpec::text("STRIPE_TIER_50_400_YEARLY_ID_PROD", "price_1Rskv4PA6ngq7HqU4dcc8VfY"),
    FieldSpec::text("STRIPE_TIER_125_800_YEARLY_ID_PROD", "price_1Rskv4PA6ngq7HqUNuKAzAEy"),
    FieldSpec::text("STRIPE_TIER_200_1000_YEARLY_ID_PROD", "price_1Rskv4PA6ngq7HqUyYTk3duo"),
    FieldSpec::text("STRIPE_TIER_2_17_YEARLY_COMMITMENT_ID_PROD", "price_1Rskv4PA6ngq7HqUw2QZ7b1h"),
    FieldSpec::text("STRIPE_TIER_6_42_YEARLY_COMMITMENT_ID_PROD", "price_1Rskv4PA6ngq7HqU0HxMUEMP"),
    FieldSpec::text("STRIPE_TIER_25_170_YEARLY_COMMITMENT_ID_PROD", "price_1Rskv4PA6ngq7HqUyHmxD6Lm"),
    // ── Stripe prices: staging ──────────────────────────────────────────────
    FieldSpec::text("STRIPE_FREE_TIER_ID_STAGING", "price_1Rskf1PA6ngq7HqUBVQwuKKn"),
    FieldSpec::text("STRIPE_TIER_2_20_ID_STAGING", "price_1RskfBPA6ngq7HqUnfyIt89g"),
    FieldSpec::text("STRIPE_TIER_6_50_ID_STAGING", "price_1RskfJPA6ngq7HqUqYwus8IH"),
    FieldSpec::text("STRIPE_TIER_12_100_ID_STAGING", "price_1RskfUPA6ngq7HqUrz2zLWe2"),
    FieldSpec::text("STRIPE_TIER_25_200_ID_STAGING", "price_1RskgTPA6ngq7HqUzyIfez1T"),
    FieldSpec::text("STRIPE_TIER_50_400_ID_STAGING", "price_1RskgaPA6ngq7HqUtNJfkrhm"),
    FieldSpec::text("STRIPE_TIER_125_800_ID_STAGING", "price_1RskgiPA6ngq7HqUhMaeH5Rp"),
    FieldSpec::text("STRIPE_TIER_200_1000_ID_STAGING", "price_1RskhTPA6ngq7HqUpo5zFVTv"),
    FieldSpec::text("STRIPE_TIER_2_20_YEARLY_ID_STAGING", "price_1RskhfPA6ngq7HqUKEOxV7Bg"),
    FieldSpec::text("STRIPE_TIER_6_50_YEARLY_ID_STAGING", "price_1RskhmPA6ngq7HqUwRFh4AZk"),
    FieldSpec::text("STRIPE_TIER_12_100_YEARLY_ID_STAGING", "price_1Rski5PA6ngq7HqUkVZlHtyC"),
    FieldSpec::text("STRIPE_TIER_25_200_YEARLY_ID_STAGING", "price_1RskiEPA6ngq7HqUYSHBEZBL"),
    FieldSpec::text("STRIPE_TIER_50_400_YEARLY_ID_STAGING", "price_1RskipPA6ngq7HqUFsGEhbos"),
    FieldSpec::text("STRIPE_TIER_125_800_YEARLY_ID_STAGING", "price_1RskiwPA6ngq7HqUzYNQEyHn"),
    FieldSpec::text("STRIPE_TIER_200_1000_YEARLY_ID_STAGING", "price_1RskjiPA6ngq7HqUscgPhUtN"),
    FieldSpec::text("STRIPE_TIER_2_17_YEARLY_COMMITMENT_ID_STAGING", "price_1RskjwPA6ngq7HqUpsn0aBp1"),
    FieldSpec::text("STRIPE_TIER_6_42_YEARLY_COMMITMENT_ID_STAGING", "price_1RskkSPA6ngq7HqUcWqm5p9W"),
    FieldSpec::text("STRIPE_TIER_25_170_YEARLY_COMMITMENT_ID_STAGING", "price_1RskkUPA6ngq7HqU6ZB4FJoW"),
    // ── LLM providers ───────────────────────────────────────────────────────
    FieldSpec::optional("ANTHROPIC_API_KEY"),
    FieldSpec::optional("OPENAI_API_KEY"),
    FieldSpec::optional("GROQ_API_KEY"),
    FieldSpec::required("OPENROUTER_API_KEY"),
    FieldSpec::optional("XAI_API_KEY"),
    FieldSpec::optional("MORPH_API_KEY"),
    FieldSpec::optional("GEMINI_API_KEY"),
    FieldSpec::optional_text("OPENROUTER_API_BASE", "https://openrouter.ai/api/v1"),
    FieldSpec::optional_text("OR_SITE_URL", "https://mevoagent.com"),
    FieldSpec::optional_text("OR_APP_NAME", "MEVO"),
    // AWS Bedrock
    FieldSpec::required("AWS_ACCESS_KEY_ID"),
    FieldSpec::required("AWS_SECRET_ACCESS_KEY"),
    FieldSpec::required("AWS_REGION_NAME"),
    FieldSpec::optional_text("MODEL_TO_USE", "openrouter/google/gemini-2.5-flash"),
    // ── Supabase ────────────────────────────────────────────────────────────
    FieldSpec::required("SUPABASE_URL"),
    FieldSpec::required("SUPABASE_ANON_KEY"),
    FieldSpec::required("SUPABASE_SERVICE_ROLE_KEY"),
    // ── Redis ───────────────────────────────────────────────────────────────
    FieldSpec::required("REDIS_HOST"),
    FieldSpec::integer("REDIS_PORT", 6379),
    FieldSpec::optional("REDIS_PASSWORD"),
    FieldSpec::flag("REDIS_SSL", true),
    // ── Daytona sandbox ─────────────────────────────────────────────────────
    FieldSpec::required("DAYTONA_API_KEY"),
    FieldSpec::required("DAYTONA_SERVER_URL"),
    FieldSpec::required("DAYTONA_TARGET"),
    // ── Search / scraping ───────────────────────────────────────────────────
    FieldSpec::required("TAVILY_API_KEY"),
    FieldSpec::optional("RAPID_API_KEY"),
    FieldSpec::required("FIRECRAWL_API_KEY"),
    FieldSpec::optional_text("FIRECRAWL_URL", "https://api.firecrawl.dev"),
    // ── Stripe ──────────────────────────────────────────────────────────────
    FieldSpec::required("STRIPE_SECRET_KEY"),
    FieldSpec::optional("STRIPE_WEBHOOK_SECRET"),
    FieldSpec::optional("STRIPE_DEFAULT_PLAN_ID"),
    FieldSpec::integer("STRIPE_DEFAULT_TRIAL_DAYS", 14),
    FieldSpec::text("STRIPE_PRODUCT_ID_PROD", "prod_SoNgsuj2fmyC3E"),
    FieldSpec::text("STRIPE_PRODUCT_ID_STAGING", "prod_SoNPEPmnxdYD3J"),
    // ── Langfuse ────────────────────────────────────────────────────────────
    FieldSpec::required("LANGFUSE_PUBLIC_KEY"),
    FieldSpec::required("LANGFUSE_SECRET_KEY"),
    FieldSpec::text("LANGFUSE_HOST", "https://us.cloud.langfuse.com"),
    // ── Admin / Cloudflare ──────────────────────────────────────────────────
    FieldSpec::optional("KORTIX_ADMIN_API_KEY"),
    FieldSpec::optional("CLOUDFLARE_BASE_DOMAIN"),
    FieldSpec::optional("CLOUDFLARE_API_TOKEN"),
    FieldSpec::optional("CLOUDFLARE_ACCOUNT_ID"),
    // ── API keys ────────────────────────────────────────────────────────────
    FieldSpec::text("API_KEY_SECRET", "default-secret-key-change-in-production"),
    FieldSpec::integer("API_KEY_LAST_USED_THROTTLE_SECONDS", 900),
    // ── Email ───────────────────────────────────────────────────────────────
    FieldSpec::optional("MAILTRAP_API_TOKEN"),
    FieldSpec::text("MAILTRAP_SENDER_EMAIL", "dom@mevoagent.com"),
    FieldSpec::text("MAILTRAP_SENDER_NAME", "MEVO Team"),
    // ── Internal ────────────────────────────────────────────────────────────
    FieldSpec::optional(MAX_PARALLEL_AGENT_RUNS_RAW).read_from("MAX_PARALLEL_AGENT_RUNS"),
];

/// Fixed sandbox image settings. Not read from the environment.
pub const SANDBOX_IMAGE_NAME: &str = "kortix/suna:0.1.3.4";
pub const SANDBOX_SNAPSHOT_NAME: &str = "kortix/suna:0.1.3.4";
pub const SANDBOX_ENTRYPOINT: &str =
    "/usr/bin/supervisord -n -c /etc/supervisor/conf.d/supervisord.conf";

/// Look up a field by registry name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    SCHEMA.iter().find(|f| f.name == name)
}

/// Iterate the fields that must be provided by the environment.
pub fn required_fields() -> impl Iterator<Item = &'static FieldSpec> {
    SCHEMA.iter().filter(|f| f.is_required())
}
