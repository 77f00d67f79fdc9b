//! Settings loading through the override file and process environment layers.

use std::collections::HashMap;
use std::io::Write;

use agentpress_config::config::{
    EnvMode, SettingValue, StripePrice, layered_env, load, load_from, schema,
};
use agentpress_config::error::AppError;
use tempfile::NamedTempFile;

fn write_env_file(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

fn required_pairs() -> Vec<(String, String)> {
    schema::required_fields()
        .map(|f| (f.env_key.to_string(), "set".to_string()))
        .collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn process_environment_wins_over_env_file() {
    let f = write_env_file("REDIS_HOST=file-host\nREDIS_PORT=7000\n");
    let vars = layered_env(Some(f.path()), pairs(&[("REDIS_HOST", "env-host")])).unwrap();
    assert_eq!(vars.get("REDIS_HOST").map(String::as_str), Some("env-host"));
    assert_eq!(vars.get("REDIS_PORT").map(String::as_str), Some("7000"));
}

#[test]
fn env_file_can_supply_required_settings() {
    let body: String = schema::required_fields()
        .map(|f| format!("{}=from-file\n", f.env_key))
        .collect();
    let f = write_env_file(&body);
    let vars = layered_env(Some(f.path()), Vec::new()).unwrap();
    let settings = load_from(&vars).unwrap();
    assert_eq!(settings.str("SUPABASE_URL"), Some("from-file"));
}

#[test]
fn load_layers_process_environment_over_env_file() {
    let body: String = schema::required_fields()
        .map(|f| format!("{}=from-file\n", f.env_key))
        .collect();
    let f = write_env_file(&body);
    let settings = load(Some(f.path())).unwrap();

    for field in schema::required_fields() {
        let expected = std::env::var(field.env_key).unwrap_or_else(|_| "from-file".to_string());
        assert_eq!(settings.str(field.name), Some(expected.as_str()), "{}", field.name);
    }
}

#[test]
fn env_file_quotes_and_comments() {
    let f = write_env_file(
        "# staging box\nENV_MODE=staging\nOR_APP_NAME=\"Agent Press\"\nREDIS_SSL='false'\n",
    );
    let mut process = required_pairs();
    process.extend(pairs(&[("STRIPE_TIER_2_20_ID_STAGING", "price_ABC")]));
    let settings = load_from(&layered_env(Some(f.path()), process).unwrap()).unwrap();
    assert_eq!(settings.mode(), EnvMode::Staging);
    assert_eq!(settings.str("OR_APP_NAME"), Some("Agent Press"));
    assert_eq!(settings.bool("REDIS_SSL"), Some(false));
    assert_eq!(settings.stripe_price_id(StripePrice::Tier2_20), Some("price_ABC"));
}

#[test]
fn missing_env_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let vars = layered_env(Some(&dir.path().join(".env")), required_pairs()).unwrap();
    assert!(load_from(&vars).is_ok());
}

#[test]
fn staging_scenario() {
    let mut vars: HashMap<String, String> = required_pairs().into_iter().collect();
    vars.extend(pairs(&[
        ("ENV_MODE", "staging"),
        ("STRIPE_TIER_2_20_ID_STAGING", "price_ABC"),
        ("STRIPE_TIER_2_20_ID_PROD", "price_XYZ"),
    ]));
    let settings = load_from(&vars).unwrap();
    assert_eq!(
        settings.get("STRIPE_TIER_2_20_ID"),
        Some(SettingValue::from("price_ABC"))
    );
}

#[test]
fn no_mode_scenario() {
    let vars: HashMap<String, String> = required_pairs().into_iter().collect();
    let settings = load_from(&vars).unwrap();
    assert_eq!(settings.mode(), EnvMode::Local);
    assert_eq!(settings.max_parallel_agent_runs(), 999_999);
}

#[test]
fn failed_load_names_all_missing() {
    let vars: HashMap<String, String> = pairs(&[("REDIS_HOST", "h"), ("SUPABASE_URL", "u")])
        .into_iter()
        .collect();
    let err = load_from(&vars).unwrap_err();
    let AppError::MissingSettings(names) = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(names.len(), schema::required_fields().count() - 2);
    assert!(!names.iter().any(|n| n == "REDIS_HOST"));
    let msg = err.to_string();
    assert!(msg.contains("OPENROUTER_API_KEY"));
    assert!(msg.contains("LANGFUSE_SECRET_KEY"));
}

#[test]
fn dump_is_valid_json_without_internal_fields() {
    let mut vars: HashMap<String, String> = required_pairs().into_iter().collect();
    vars.insert("MAX_PARALLEL_AGENT_RUNS".into(), "4".into());
    let settings = load_from(&vars).unwrap();
    let json = serde_json::to_value(settings.as_redacted_mapping()).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj["ENV_MODE"], "local");
    assert_eq!(obj["REDIS_PORT"], 6379);
    assert_eq!(obj["OPENROUTER_API_KEY"], "***");
    assert!(obj["REDIS_PASSWORD"].is_null());
    assert!(!obj.keys().any(|k| k.starts_with('_')));
}
