//! Settings loading.
//!
//! Builds an environment map from an optional `.env`-style override file with
//! the real process environment layered on top, then resolves every schema
//! field against it: `ENV_MODE` first, the rest in schema order, then a single
//! validation pass that reports every missing required field at once.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::ffi::OsString;
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::error::AppError;

use super::schema::{self, FieldKind, FieldSpec, SCHEMA};
use super::types::{EnvMode, SettingValue, Settings};

/// Strings accepted as `true` for boolean fields (compared lowercased).
const TRUTHY: &[&str] = &["true", "t", "yes", "y", "1"];

/// Load settings from the process environment, with `env_file` (if given)
/// supplying values for keys the environment does not set.
pub fn load(env_file: Option<&Path>) -> Result<Settings, AppError> {
    let process = utf8_vars(env::vars_os())?;
    let vars = layered_env(env_file, process)?;
    load_from(&vars)
}

/// Convert process variables to UTF-8 pairs. A non-UTF-8 variable is an
/// error: dropping it would let the env file value take its place.
fn utf8_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Result<Vec<(String, String)>, AppError> {
    vars.into_iter()
        .map(|(key, value)| {
            let key = key
                .into_string()
                .map_err(|k| AppError::Config(format!("environment variable name {k:?} is not valid UTF-8")))?;
            let value = value
                .into_string()
                .map_err(|_| AppError::Config(format!("{key} is not valid UTF-8")))?;
            Ok((key, value))
        })
        .collect()
}

/// Merge the override file under `process`. Keys present in `process` always win.
///
/// A missing file is not an error. Lines the file parser rejects are logged
/// and skipped.
pub fn layered_env(
    env_file: Option<&Path>,
    process: impl IntoIterator<Item = (String, String)>,
) -> Result<HashMap<String, String>, AppError> {
    let mut vars = HashMap::new();

    if let Some(path) = env_file {
        match dotenvy::from_path_iter(path) {
            Ok(iter) => {
                for item in iter {
                    match item {
                        Ok((key, value)) => {
                            vars.insert(key, value);
                        }
                        Err(e) => warn!(path = %path.display(), error = %e, "skipping malformed env file entry"),
                    }
                }
                debug!(path = %path.display(), entries = vars.len(), "env file loaded");
            }
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no env file");
            }
            Err(e) => {
                return Err(AppError::Config(format!("cannot read {}: {e}", path.display())));
            }
        }
    }

    vars.extend(process);
    Ok(vars)
}

/// Resolve settings from an explicit environment map.
/// Tests pass a map directly instead of mutating the process environment.
pub fn load_from(vars: &HashMap<String, String>) -> Result<Settings, AppError> {
    // ENV_MODE leads the schema, so the mode is resolved before anything else.
    let mut values = BTreeMap::new();
    for field in SCHEMA {
        values.insert(field.name, resolve_field(field, vars.get(field.env_key).map(String::as_str)));
    }

    let mode = match values.get(schema::ENV_MODE) {
        Some(Some(SettingValue::Mode(mode))) => *mode,
        _ => EnvMode::default(),
    };
    info!(env_mode = %mode, "environment mode");
    if mode == EnvMode::Local {
        info!("local mode: tier-scoped billing settings resolve to production values");
    }

    let missing: Vec<String> = SCHEMA
        .iter()
        .filter(|f| f.is_required() && matches!(values.get(f.name), None | Some(None)))
        .map(|f| f.name.to_string())
        .collect();

    if !missing.is_empty() {
        let err = AppError::MissingSettings(missing);
        error!("{err}");
        return Err(err);
    }

    Ok(Settings { mode, values })
}

fn resolve_mode(raw: &str) -> EnvMode {
    raw.parse().unwrap_or_else(|_| {
        warn!(value = raw, "invalid ENV_MODE, defaulting to local");
        EnvMode::Local
    })
}

/// Coerce one raw environment value to the field's declared type.
/// Unset or unparseable values fall back to the field default.
fn resolve_field(field: &FieldSpec, raw: Option<&str>) -> Option<SettingValue> {
    let Some(raw) = raw else {
        return field.default.value();
    };

    match field.kind {
        FieldKind::Str => Some(SettingValue::Str(raw.to_string())),
        FieldKind::Bool => Some(SettingValue::Bool(parse_bool(raw))),
        FieldKind::Int => match raw.trim().parse::<i64>() {
            Ok(i) => Some(SettingValue::Int(i)),
            Err(_) => {
                warn!(field = field.name, value = raw, "invalid integer, using default");
                field.default.value()
            }
        },
        FieldKind::Mode => Some(SettingValue::Mode(resolve_mode(raw))),
    }
}

/// Boolean coercion: anything outside the truthy set is `false`.
pub fn parse_bool(raw: &str) -> bool {
    let lowered = raw.to_lowercase();
    TRUTHY.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port_field(name: &'static str) -> FieldSpec {
        FieldSpec::integer(name, 6379)
    }

    #[test]
    fn truthy_strings() {
        for s in ["true", "True", "TRUE", "t", "1", "yes", "Y", "y"] {
            assert!(parse_bool(s), "expected '{s}' to be true");
        }
    }

    #[test]
    fn falsy_strings() {
        for s in ["false", "0", "", "no", "off", " true", "2"] {
            assert!(!parse_bool(s), "expected '{s}' to be false");
        }
    }

    #[test]
    fn integer_field_parses_and_trims() {
        assert_eq!(resolve_field(&port_field("P"), Some(" 6380 ")), Some(SettingValue::Int(6380)));
        assert_eq!(resolve_field(&port_field("P"), Some("-1")), Some(SettingValue::Int(-1)));
    }

    #[test]
    fn bad_integer_keeps_default() {
        assert_eq!(resolve_field(&port_field("P"), Some("six")), Some(SettingValue::Int(6379)));
    }

    #[test]
    fn unset_field_uses_default_or_stays_absent() {
        assert_eq!(resolve_field(&port_field("P"), None), Some(SettingValue::Int(6379)));
        assert_eq!(resolve_field(&FieldSpec::optional("X"), None), None);
        assert_eq!(resolve_field(&FieldSpec::required("X"), None), None);
    }

    #[test]
    fn string_passes_through_unmodified() {
        assert_eq!(
            resolve_field(&FieldSpec::required("X"), Some("  spaced  ")),
            Some(SettingValue::from("  spaced  "))
        );
        assert_eq!(resolve_field(&FieldSpec::required("X"), Some("")), Some(SettingValue::from("")));
    }

    #[test]
    fn mode_resolution() {
        assert_eq!(resolve_mode("Staging"), EnvMode::Staging);
        assert_eq!(resolve_mode("PRODUCTION"), EnvMode::Production);
        assert_eq!(resolve_mode("qa"), EnvMode::Local);
    }

    #[test]
    fn mode_field_goes_through_field_resolution() {
        let mode = FieldSpec::mode(schema::ENV_MODE, EnvMode::Local);
        assert_eq!(resolve_field(&mode, None), Some(SettingValue::Mode(EnvMode::Local)));
        assert_eq!(resolve_field(&mode, Some("staging")), Some(SettingValue::Mode(EnvMode::Staging)));
        assert_eq!(resolve_field(&mode, Some("dev")), Some(SettingValue::Mode(EnvMode::Local)));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_process_value_is_an_error() {
        use std::os::unix::ffi::OsStringExt;

        let vars = vec![
            (OsString::from("REDIS_PORT"), OsString::from("6380")),
            (OsString::from("REDIS_HOST"), OsString::from_vec(b"env-\xffhost".to_vec())),
        ];
        let err = utf8_vars(vars).unwrap_err();
        assert!(err.to_string().contains("REDIS_HOST is not valid UTF-8"));
    }

    #[test]
    fn utf8_process_values_pass_through() {
        let vars = utf8_vars(vec![(OsString::from("A"), OsString::from("1"))]).unwrap();
        assert_eq!(vars, vec![("A".to_string(), "1".to_string())]);
    }

    #[test]
    fn env_file_missing_is_empty_layer() {
        let vars = layered_env(Some(Path::new("/nonexistent/.env")), Vec::new()).unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn no_env_file_uses_process_only() {
        let vars = layered_env(None, vec![("A".to_string(), "1".to_string())]).unwrap();
        assert_eq!(vars.get("A").map(String::as_str), Some("1"));
    }
}
