//! Process settings resolved from environment variables.
//!
//! Reads an optional `.env` file, layers the real process environment on top,
//! and resolves every declared setting into an immutable [`Settings`].
//! Collaborators receive the `Settings` at construction time; there is no
//! global instance.
//!
//! # Module layout
//!
//! - **schema** — the declarative field table (`SCHEMA`, `FieldSpec`) and
//!   the list of tier-scoped logical settings.
//! - **types** — `EnvMode`, `SettingValue` and the `Settings` registry with
//!   its lookup and export accessors.
//! - **load** — env layering, type coercion and validation: `load`,
//!   `load_from`, `layered_env`.
//! - **billing** — mode-dependent accessors: Stripe identifiers, parallel
//!   run ceiling, per-tier agent limits.

mod billing;
mod load;
pub mod schema;
mod types;

pub use billing::{PRODUCTION_MAX_PARALLEL_AGENT_RUNS, StripePrice, UNBOUNDED};
pub use load::{layered_env, load, load_from, parse_bool};
pub use types::*;
