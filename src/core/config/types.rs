//! Public configuration types.
//!
//! [`Settings`] is the resolved, read-only registry that collaborators
//! receive at construction time. It is built by `load.rs` and never mutated
//! afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::schema::{self, SCHEMA};

// ── Environment mode ────────────────────────────────────────────────────────

/// Deployment tier the process runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvMode {
    #[default]
    Local,
    Staging,
    Production,
}

impl EnvMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvMode::Local => "local",
            EnvMode::Staging => "staging",
            EnvMode::Production => "production",
        }
    }
}

impl fmt::Display for EnvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive. Surrounding whitespace is not trimmed.
impl FromStr for EnvMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(EnvMode::Local),
            "staging" => Ok(EnvMode::Staging),
            "production" => Ok(EnvMode::Production),
            _ => Err(format!("unrecognised environment mode: '{s}'")),
        }
    }
}

// ── Values ──────────────────────────────────────────────────────────────────

/// A single typed setting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Mode(EnvMode),
}

impl SettingValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Str(s) => f.write_str(s),
            SettingValue::Int(i) => write!(f, "{i}"),
            SettingValue::Bool(b) => write!(f, "{b}"),
            SettingValue::Mode(m) => write!(f, "{m}"),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Str(s.to_string())
    }
}

impl From<i64> for SettingValue {
    fn from(i: i64) -> Self {
        SettingValue::Int(i)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

// ── Registry ────────────────────────────────────────────────────────────────

/// Name suffixes whose values are masked by [`Settings::as_redacted_mapping`].
const SECRET_SUFFIXES: &[&str] = &["_KEY", "_KEY_ID", "_SECRET", "_TOKEN", "_PASSWORD"];

const REDACTED: &str = "***";

/// Fully-resolved process settings.
///
/// Holds one entry per schema field: `None` means the field is optional and
/// was neither set nor defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub(super) mode: EnvMode,
    pub(super) values: BTreeMap<&'static str, Option<SettingValue>>,
}

impl Settings {
    /// Active environment mode.
    pub fn mode(&self) -> EnvMode {
        self.mode
    }

    /// Look up a setting by name.
    ///
    /// Besides declared fields this also answers tier-scoped logical names
    /// (e.g. `STRIPE_TIER_2_20_ID`) and `MAX_PARALLEL_AGENT_RUNS`.
    pub fn get(&self, name: &str) -> Option<SettingValue> {
        if let Some(value) = self.values.get(name) {
            return value.clone();
        }
        if name == "MAX_PARALLEL_AGENT_RUNS" {
            return Some(SettingValue::Int(self.max_parallel_agent_runs()));
        }
        self.tier_scoped(name).map(SettingValue::from)
    }

    /// Like [`get`](Self::get), falling back to `default` when the setting is absent.
    pub fn get_or(&self, name: &str, default: impl Into<SettingValue>) -> SettingValue {
        self.get(name).unwrap_or_else(|| default.into())
    }

    /// String value of a declared field.
    pub fn str(&self, name: &str) -> Option<&str> {
        self.values.get(name)?.as_ref()?.as_str()
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.values.get(name)?.as_ref()?.as_int()
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.values.get(name)?.as_ref()?.as_bool()
    }

    /// Snapshot of every public field, in name order. Internal fields
    /// (leading `_`) are left out.
    pub fn as_mapping(&self) -> BTreeMap<&'static str, Option<SettingValue>> {
        self.values
            .iter()
            .filter(|(name, _)| !name.starts_with('_'))
            .map(|(name, value)| (*name, value.clone()))
            .collect()
    }

    /// [`as_mapping`](Self::as_mapping) with credential values masked.
    /// Unset credentials stay `None` so the dump still shows what is missing.
    pub fn as_redacted_mapping(&self) -> BTreeMap<&'static str, Option<SettingValue>> {
        let mut mapping = self.as_mapping();
        for (name, value) in mapping.iter_mut() {
            if is_secret(name) && value.is_some() {
                *value = Some(SettingValue::from(REDACTED));
            }
        }
        mapping
    }

    /// Model identifier used when a request does not pick one.
    pub fn model_to_use(&self) -> Option<&str> {
        self.str("MODEL_TO_USE")
    }

    pub fn redis_port(&self) -> i64 {
        self.int("REDIS_PORT").unwrap_or(6379)
    }

    pub fn redis_ssl(&self) -> bool {
        self.bool("REDIS_SSL").unwrap_or(true)
    }

    /// Sandbox image the orchestration layer should start.
    pub fn sandbox_image_name(&self) -> &'static str {
        schema::SANDBOX_IMAGE_NAME
    }

    pub fn sandbox_snapshot_name(&self) -> &'static str {
        schema::SANDBOX_SNAPSHOT_NAME
    }

    pub fn sandbox_entrypoint(&self) -> &'static str {
        schema::SANDBOX_ENTRYPOINT
    }

    /// Names of all declared fields, in schema order.
    pub fn field_names() -> impl Iterator<Item = &'static str> {
        SCHEMA.iter().map(|f| f.name)
    }
}

fn is_secret(name: &str) -> bool {
    SECRET_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_mode_parses_case_insensitively() {
        assert_eq!("STAGING".parse::<EnvMode>(), Ok(EnvMode::Staging));
        assert_eq!("Production".parse::<EnvMode>(), Ok(EnvMode::Production));
        assert_eq!("local".parse::<EnvMode>(), Ok(EnvMode::Local));
        assert!("dev".parse::<EnvMode>().is_err());
        assert!(" staging".parse::<EnvMode>().is_err());
    }

    #[test]
    fn env_mode_serializes_lowercase() {
        let json = serde_json::to_string(&EnvMode::Production).unwrap();
        assert_eq!(json, "\"production\"");
    }

    #[test]
    fn setting_value_serializes_untagged() {
        let values = vec![
            SettingValue::from("x"),
            SettingValue::from(3i64),
            SettingValue::from(true),
            SettingValue::Mode(EnvMode::Staging),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["x",3,true,"staging"]"#);
    }

    #[test]
    fn secret_names_detected() {
        assert!(is_secret("OPENROUTER_API_KEY"));
        assert!(is_secret("AWS_ACCESS_KEY_ID"));
        assert!(is_secret("STRIPE_WEBHOOK_SECRET"));
        assert!(is_secret("MAILTRAP_API_TOKEN"));
        assert!(is_secret("REDIS_PASSWORD"));
        assert!(!is_secret("REDIS_HOST"));
        assert!(!is_secret("STRIPE_TIER_2_20_ID_PROD"));
    }
}
