// ABOUTME: Extraction options: API generation, failure policy, and link synthesis settings.
// ABOUTME: ExtractOptionsBuilder provides a fluent API for constructing ExtractOptions.

use std::fmt;

use crate::repair::RepairPipeline;

/// The API generation whose output conventions an extraction follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiGeneration {
    /// Older API: strict failures, `v3` links, unresolved values named "unknown".
    Legacy,
    /// Current API: lenient failures, `v4` links, unresolved values left empty.
    #[default]
    Current,
}

impl ApiGeneration {
    /// The failure policy this generation uses unless overridden.
    pub fn default_policy(self) -> FailurePolicy {
        match self {
            ApiGeneration::Legacy => FailurePolicy::Strict,
            ApiGeneration::Current => FailurePolicy::Lenient,
        }
    }

    /// The path segment used when synthesizing API links.
    pub fn version_segment(self) -> &'static str {
        match self {
            ApiGeneration::Legacy => "v3",
            ApiGeneration::Current => "v4",
        }
    }
}

impl fmt::Display for ApiGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApiGeneration::Legacy => "legacy",
            ApiGeneration::Current => "current",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for ApiGeneration {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "legacy" | "v3" | "3" => ApiGeneration::Legacy,
            _ => ApiGeneration::Current,
        }
    }
}

/// How missing structural elements are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Missing elements are errors.
    Strict,
    /// Missing elements degrade to zero values and are logged.
    #[default]
    Lenient,
}

impl FailurePolicy {
    /// Returns true for the strict policy.
    pub fn is_strict(self) -> bool {
        self == FailurePolicy::Strict
    }
}

/// Settings threaded into every extraction call.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub generation: ApiGeneration,
    pub policy: FailurePolicy,
    /// Host used to synthesize `api_url` on listing items; empty disables it.
    pub api_host: String,
    /// Version segment of synthesized links.
    pub api_version: String,
    pub repairs: RepairPipeline,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::for_generation(ApiGeneration::Current)
    }
}

impl ExtractOptions {
    /// Start building options with defaults for the current generation.
    pub fn builder() -> ExtractOptionsBuilder {
        ExtractOptionsBuilder::new()
    }

    /// Defaults for a given generation, with no API host.
    pub fn for_generation(generation: ApiGeneration) -> Self {
        Self {
            generation,
            policy: generation.default_policy(),
            api_host: String::new(),
            api_version: generation.version_segment().to_string(),
            repairs: RepairPipeline::default(),
        }
    }

    /// Synthesizes the API link for a news id, or `None` when no host is set.
    pub fn api_url(&self, id: u32) -> Option<String> {
        let host = self.api_host.trim();
        if host.is_empty() {
            return None;
        }
        Some(format!("https://{}/{}/news/id/{}", host, self.api_version, id))
    }
}

/// Builder for constructing ExtractOptions.
#[derive(Debug, Clone)]
pub struct ExtractOptionsBuilder {
    opts: ExtractOptions,
    policy_overridden: bool,
    version_overridden: bool,
}

impl ExtractOptionsBuilder {
    /// Create a new builder with current-generation defaults.
    pub fn new() -> Self {
        Self {
            opts: ExtractOptions::default(),
            policy_overridden: false,
            version_overridden: false,
        }
    }

    /// Select the API generation. Policy and version follow it unless set explicitly.
    pub fn generation(mut self, generation: ApiGeneration) -> Self {
        self.opts.generation = generation;
        self
    }

    /// Override the failure policy.
    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.opts.policy = policy;
        self.policy_overridden = true;
        self
    }

    /// Set the host used for `api_url` synthesis.
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.opts.api_host = host.into();
        self
    }

    /// Override the version segment of synthesized links.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.opts.api_version = version.into();
        self.version_overridden = true;
        self
    }

    /// Replace the rich-text repair pipeline.
    pub fn repairs(mut self, repairs: RepairPipeline) -> Self {
        self.opts.repairs = repairs;
        self
    }

    /// Build the options.
    pub fn build(mut self) -> ExtractOptions {
        if !self.policy_overridden {
            self.opts.policy = self.opts.generation.default_policy();
        }
        if !self.version_overridden {
            self.opts.api_version = self.opts.generation.version_segment().to_string();
        }
        self.opts
    }
}

impl Default for ExtractOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
