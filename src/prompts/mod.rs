//! System prompt templates.
//!
//! One template per model family plus the agent-builder prompt. Templates are
//! compiled into the binary; the only dynamic content is the time stamp that
//! some of them carry, filled in at render time.

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::llm::ModelCatalog;

const DEFAULT_TEMPLATE: &str = include_str!("templates/default.md");
const GEMINI_TEMPLATE: &str = include_str!("templates/gemini.md");
const GPT_TEMPLATE: &str = include_str!("templates/gpt.md");
const AGENT_BUILDER_TEMPLATE: &str = include_str!("templates/agent_builder.md");

/// Which system prompt to hand the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptVariant {
    Default,
    Gemini,
    Gpt,
    AgentBuilder,
}

impl PromptVariant {
    /// Chat prompt for a canonical model id (`provider/.../model`).
    ///
    /// Google models get the Gemini prompt and OpenAI models the GPT prompt;
    /// everything else uses the default.
    pub fn for_model(model: &str) -> Self {
        let mut segments = model.split('/');
        if segments.clone().any(|s| s.starts_with("gemini")) {
            PromptVariant::Gemini
        } else if segments.any(|s| s == "openai" || s.starts_with("gpt")) {
            PromptVariant::Gpt
        } else {
            PromptVariant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptVariant::Default => "default",
            PromptVariant::Gemini => "gemini",
            PromptVariant::Gpt => "gpt",
            PromptVariant::AgentBuilder => "agent_builder",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            PromptVariant::Default => DEFAULT_TEMPLATE,
            PromptVariant::Gemini => GEMINI_TEMPLATE,
            PromptVariant::Gpt => GPT_TEMPLATE,
            PromptVariant::AgentBuilder => AGENT_BUILDER_TEMPLATE,
        }
    }

    /// Render the template with time placeholders filled from `now`.
    pub fn render_at(&self, now: DateTime<Utc>) -> String {
        let template = self.template();
        if !template.contains("{current_") {
            return template.to_string();
        }
        template
            .replace("{current_datetime}", &now.format("%A, %B %d, %Y at %I:%M %p").to_string())
            .replace("{current_date}", &now.format("%Y-%m-%d").to_string())
            .replace("{current_time}", &now.format("%H:%M:%S").to_string())
            .replace("{current_year}", &now.format("%Y").to_string())
    }

    pub fn render(&self) -> String {
        self.render_at(Utc::now())
    }
}

/// Variant for the configured default model, after alias resolution.
/// No configured model means the default prompt.
pub fn variant_for_settings(settings: &Settings, catalog: &ModelCatalog) -> PromptVariant {
    match settings.model_to_use() {
        Some(model) => PromptVariant::for_model(catalog.resolve_alias(model)),
        None => PromptVariant::Default,
    }
}

/// Rendered chat system prompt for the configured default model.
pub fn system_prompt(settings: &Settings, catalog: &ModelCatalog) -> String {
    variant_for_settings(settings, catalog).render()
}

/// Rendered agent-builder prompt.
pub fn agent_builder_prompt() -> String {
    PromptVariant::AgentBuilder.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use chrono::TimeZone;

    use crate::config::{load_from, schema};

    fn settings_with_model(model: Option<&str>) -> Settings {
        let mut env: HashMap<String, String> = schema::required_fields()
            .map(|f| (f.env_key.to_string(), "x".to_string()))
            .collect();
        if let Some(model) = model {
            env.insert("MODEL_TO_USE".into(), model.into());
        }
        load_from(&env).unwrap()
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 9).unwrap()
    }

    #[test]
    fn variant_follows_model_family() {
        assert_eq!(PromptVariant::for_model("openrouter/google/gemini-2.5-flash"), PromptVariant::Gemini);
        assert_eq!(PromptVariant::for_model("gemini/gemini-2.5-pro"), PromptVariant::Gemini);
        assert_eq!(PromptVariant::for_model("openrouter/openai/gpt-5-mini"), PromptVariant::Gpt);
        assert_eq!(PromptVariant::for_model("openrouter/openai/o4-mini-high"), PromptVariant::Gpt);
        assert_eq!(PromptVariant::for_model("gpt-4o"), PromptVariant::Gpt);
        assert_eq!(
            PromptVariant::for_model("bedrock/us.anthropic.claude-sonnet-4-20250514-v1:0"),
            PromptVariant::Default
        );
        assert_eq!(PromptVariant::for_model("openrouter/x-ai/grok-4"), PromptVariant::Default);
    }

    #[test]
    fn settings_default_model_selects_gemini() {
        let settings = settings_with_model(None);
        assert_eq!(variant_for_settings(&settings, &ModelCatalog::builtin()), PromptVariant::Gemini);
    }

    #[test]
    fn display_alias_is_resolved_before_selection() {
        let settings = settings_with_model(Some("GPT-5-M 🤖💰"));
        assert_eq!(variant_for_settings(&settings, &ModelCatalog::builtin()), PromptVariant::Gpt);

        let settings = settings_with_model(Some("sonnet-3.5"));
        assert_eq!(variant_for_settings(&settings, &ModelCatalog::builtin()), PromptVariant::Default);
    }

    #[test]
    fn agent_builder_prompt_is_stamped_in_utc() {
        let prompt = PromptVariant::AgentBuilder.render_at(fixed_time());
        assert!(prompt.contains("- Current: 2025-03-07 14:05:09 UTC (2025)"));
        assert!(!prompt.contains("{current_"));
    }

    #[test]
    fn gpt_prompt_is_stamped_with_long_date() {
        let prompt = PromptVariant::Gpt.render_at(fixed_time());
        assert!(prompt.contains("**Current date and time: Friday, March 07, 2025 at 02:05 PM**"));
        assert!(!prompt.contains("{current_"));
    }

    #[test]
    fn static_templates_render_unchanged() {
        for variant in [PromptVariant::Default, PromptVariant::Gemini] {
            assert_eq!(variant.render_at(fixed_time()), variant.template());
            assert!(!variant.template().is_empty());
        }
        assert!(PromptVariant::Gemini.template().starts_with("\nYou are a MEVO AI agent."));
    }
}
