//! agentpress-config — startup settings check.
//!
//! Startup sequence:
//!   1. Parse CLI flags
//!   2. Init logger
//!   3. Load settings (`.env` under the process environment)
//!   4. Report mode, derived limits and the selected system prompt
//!   5. Optionally dump the public settings as JSON (secrets masked)
//!
//! Exits 1 with the full list of missing settings when validation fails.

use std::path::PathBuf;

use tracing::info;

use agentpress_config::config::{self, StripePrice};
use agentpress_config::error::AppError;
use agentpress_config::llm::ModelCatalog;
use agentpress_config::logger;
use agentpress_config::prompts;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = parse_cli_args();

    let force_cli_level = args.log_level.is_some();
    logger::init(args.log_level.unwrap_or("info"), force_cli_level)?;

    let settings = config::load(args.env_file.as_deref())?;

    info!(
        env_mode = %settings.mode(),
        max_parallel_agent_runs = settings.max_parallel_agent_runs(),
        stripe_product_id = settings.stripe_product_id().unwrap_or("-"),
        free_tier_price = settings.stripe_price_id(StripePrice::Free).unwrap_or("-"),
        "settings loaded"
    );

    let catalog = ModelCatalog::builtin();
    if let Some(model) = settings.model_to_use() {
        let model = catalog.resolve_alias(model);
        match catalog.pricing(model) {
            Some(p) => info!(
                model,
                input_per_million = p.input_cost_per_million_tokens,
                output_per_million = p.output_cost_per_million_tokens,
                "default model"
            ),
            None => info!(model, "default model has no catalog pricing"),
        }
    }

    let variant = prompts::variant_for_settings(&settings, &catalog);
    info!(prompt = variant.as_str(), bytes = variant.render().len(), "system prompt");

    if args.dump {
        let json = serde_json::to_string_pretty(&settings.as_redacted_mapping())
            .map_err(|e| AppError::Config(format!("cannot serialize settings: {e}")))?;
        println!("{json}");
    }

    Ok(())
}

struct CliArgs {
    log_level: Option<&'static str>,
    env_file: Option<PathBuf>,
    dump: bool,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut env_file = Some(PathBuf::from(".env"));
    let mut dump = false;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: agentpress-config [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -e, --env-file <PATH>      Override file read under the environment (default: .env)");
                println!("      --no-env-file          Read the process environment only");
                println!("      --dump                 Print public settings as JSON, secrets masked");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-e" | "--env-file" => {
                if let Some(path) = iter.next() {
                    env_file = Some(PathBuf::from(path));
                } else {
                    eprintln!("error: -e/--env-file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--no-env-file" => env_file = None,
            "--dump" => dump = true,
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    CliArgs { log_level: logger::level_for_verbosity(verbosity), env_file, dump }
}
