//! LLM model metadata consumed by prompt construction and billing.
//!
//! The catalog is static data; the active default model comes from
//! `Settings::model_to_use`.

pub mod catalog;

pub use catalog::{ModelCatalog, ModelPricing};
