// ABOUTME: Best-effort narrative enhancement that rewrites a plan's principles and notes via an LLM
// ABOUTME: Parses fenced JSON replies and degrades to the rule-based text on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Narrative enhancement
//!
//! Enhancement never changes days, sessions or dates. A reply is accepted only
//! when it carries both `principles` and `notes` as string arrays, and both
//! lists are then replaced together.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use fitai_core::constants::enhancement::MAX_ITEMS_PER_LIST;
use fitai_core::models::{LogsStatistics, Plan, Profile};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::{EnhancementConfig, GenerationSettings};
use crate::llm::prompts::{adjust_plan_prompt, enhance_plan_prompt};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::logging::AppLogger;

/// Replacement principle and note lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeEnhancement {
    /// Training principles
    pub principles: Vec<String>,
    /// Practical notes
    pub notes: Vec<String>,
}

impl NarrativeEnhancement {
    /// Replace the plan's principles and notes
    pub fn apply(self, plan: &mut Plan) {
        plan.principles = self.principles;
        plan.notes = self.notes;
    }
}

/// Parse a model reply into an enhancement
///
/// Markdown code fences are stripped first. Returns `None` unless the body is
/// a JSON object with both keys holding arrays of strings.
#[must_use]
pub fn parse_enhancement(text: &str) -> Option<NarrativeEnhancement> {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    } else if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }

    let mut parsed: NarrativeEnhancement = serde_json::from_str(body.trim()).ok()?;
    parsed.principles.truncate(MAX_ITEMS_PER_LIST);
    parsed.notes.truncate(MAX_ITEMS_PER_LIST);
    Some(parsed)
}

/// Produces replacement narrative text for generated plans
#[async_trait]
pub trait PlanEnhancer: Send + Sync {
    /// Identifier used in logs
    fn name(&self) -> &'static str;

    /// Enhance a freshly generated plan
    async fn enhance_plan(&self, plan: &Plan, profile: &Profile) -> Option<NarrativeEnhancement>;

    /// Enhance a plan adjusted from last week's logs
    async fn enhance_adjusted_plan(
        &self,
        plan: &Plan,
        profile: &Profile,
        stats: &LogsStatistics,
    ) -> Option<NarrativeEnhancement>;
}

/// Enhancer backed by an [`LlmProvider`]
pub struct LlmPlanEnhancer {
    provider: Arc<dyn LlmProvider>,
    timeout: Duration,
    generation: GenerationSettings,
    model: Option<String>,
}

impl LlmPlanEnhancer {
    /// Wrap a provider with a call timeout
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            generation: GenerationSettings::default(),
            model: None,
        }
    }

    /// Wrap a provider using timeout, model and sampling from configuration
    #[must_use]
    pub fn from_config(provider: Arc<dyn LlmProvider>, config: &EnhancementConfig) -> Self {
        Self {
            provider,
            timeout: config.timeout,
            generation: config.generation,
            model: Some(config.model.clone()),
        }
    }

    fn build_request(&self, prompt: String) -> ChatRequest {
        let mut request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }
        if let Some(temperature) = self.generation.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(top_p) = self.generation.top_p {
            request = request.with_top_p(top_p);
        }
        if let Some(max_tokens) = self.generation.max_output_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        request
    }

    async fn request_enhancement(&self, prompt: String) -> Option<NarrativeEnhancement> {
        let request = self.build_request(prompt);
        let started = Instant::now();

        let (outcome, usage, finish_reason) =
            match timeout(self.timeout, self.provider.complete(&request)).await {
                Ok(Ok(response)) => {
                    let parsed = parse_enhancement(&response.content);
                    if parsed.is_none() {
                        warn!(
                            provider = self.provider.name(),
                            "Enhancement reply was not a valid principles/notes object"
                        );
                    }
                    (parsed, response.usage, response.finish_reason)
                }
                Ok(Err(e)) => {
                    warn!(provider = self.provider.name(), error = %e, "Enhancement request failed");
                    (None, None, None)
                }
                Err(_) => {
                    warn!(
                        provider = self.provider.name(),
                        timeout_ms = self.timeout.as_millis() as u64,
                        "Enhancement request timed out"
                    );
                    (None, None, None)
                }
            };

        AppLogger::log_enhancement(
            self.provider.name(),
            outcome.is_some(),
            started.elapsed().as_millis() as u64,
            usage.as_ref(),
            finish_reason.as_deref(),
        );
        outcome
    }
}

#[async_trait]
impl PlanEnhancer for LlmPlanEnhancer {
    fn name(&self) -> &'static str {
        self.provider.name()
    }

    async fn enhance_plan(&self, plan: &Plan, profile: &Profile) -> Option<NarrativeEnhancement> {
        debug!("Requesting narrative enhancement for initial plan");
        self.request_enhancement(enhance_plan_prompt(plan, profile))
            .await
    }

    async fn enhance_adjusted_plan(
        &self,
        _plan: &Plan,
        profile: &Profile,
        stats: &LogsStatistics,
    ) -> Option<NarrativeEnhancement> {
        debug!("Requesting narrative enhancement for adjusted plan");
        self.request_enhancement(adjust_plan_prompt(profile, stats))
            .await
    }
}
