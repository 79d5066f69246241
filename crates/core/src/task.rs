//! Generation Task Model
//!
//! The task discriminator and result shapes for the AI content generation
//! pipeline. Each task type yields exactly one variant of
//! [`GenerationOutput`], so callers match on the variant instead of
//! sniffing runtime shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Placeholder description used when a structured reply cannot be parsed.
pub const STRUCTURED_FALLBACK_DESCRIPTION: &str = "生成失败";

/// Maximum number of tags retained from a tags-type reply.
pub const MAX_TAGS: usize = 5;

// ============================================================================
// Task Discriminator
// ============================================================================

/// The kind of content a generation invocation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationTask {
    /// A one-line natural-language description of the prompt.
    Description,
    /// Up to [`MAX_TAGS`] short tags.
    Tags,
    /// The prompt translated into the request's target language.
    Translation,
    /// A usage analysis of the prompt.
    Analysis,
    /// Description + tags from a single JSON-mode prompt.
    Structured,
    /// The full bundle: structured + translation + analysis.
    All,
}

impl GenerationTask {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Tags => "tags",
            Self::Translation => "translation",
            Self::Analysis => "analysis",
            Self::Structured => "structured",
            Self::All => "all",
        }
    }
}

impl fmt::Display for GenerationTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GenerationTask {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(Self::Description),
            "tags" => Ok(Self::Tags),
            "translation" => Ok(Self::Translation),
            "analysis" => Ok(Self::Analysis),
            "structured" => Ok(Self::Structured),
            "all" => Ok(Self::All),
            other => Err(CoreError::parse(format!(
                "unknown generation task: {}",
                other
            ))),
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// A single generation invocation. Transient, constructed per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub task: GenerationTask,
    /// The prompt text the task operates on.
    pub content: String,
    /// Language code for translation tasks. Empty means "skip translation".
    #[serde(default, rename = "targetLanguage")]
    pub target_language: String,
}

impl GenerationRequest {
    pub fn new(task: GenerationTask, content: impl Into<String>) -> Self {
        Self {
            task,
            content: content.into(),
            target_language: String::new(),
        }
    }

    pub fn with_target_language(mut self, code: impl Into<String>) -> Self {
        self.target_language = code.into();
        self
    }

    /// Validate the request before dispatch.
    pub fn validate(&self) -> CoreResult<()> {
        if self.content.trim().is_empty() {
            return Err(CoreError::validation("prompt content is required"));
        }
        Ok(())
    }
}

// ============================================================================
// Results
// ============================================================================

/// Description + tags produced by a single JSON-mode prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredContent {
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl StructuredContent {
    /// The placeholder returned when the model's reply is unusable.
    pub fn fallback() -> Self {
        Self {
            description: STRUCTURED_FALLBACK_DESCRIPTION.to_string(),
            tags: Vec::new(),
        }
    }

    /// Parse a model reply expected to contain a JSON object with
    /// `description` and `tags` fields.
    ///
    /// Models habitually wrap JSON in Markdown code fences, so fences are
    /// stripped before parsing. A bare JSON string is treated as the
    /// description. Anything unparsable degrades to [`Self::fallback`]
    /// instead of raising.
    pub fn from_model_reply(reply: &str) -> Self {
        let body = strip_code_fences(reply);
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::Object(map)) => {
                let description = map
                    .get("description")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                let tags = map
                    .get("tags")
                    .and_then(|v| v.as_array())
                    .map(|arr| {
                        arr.iter()
                            .filter_map(|t| t.as_str())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                Self { description, tags }
            }
            Ok(serde_json::Value::String(description)) => Self {
                description,
                tags: Vec::new(),
            },
            _ => Self::fallback(),
        }
    }
}

/// The aggregated result of a full generation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationBundle {
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Empty when the cycle ran without a target language.
    pub translation: String,
    pub analysis: String,
}

/// A completed generation result, tagged by shape.
///
/// One variant per task family: `Text` for description/translation/analysis,
/// `Tags` for the tag list, `Structured` for JSON-mode output, `Bundle` for
/// a full cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum GenerationOutput {
    Text(String),
    Tags(Vec<String>),
    Structured(StructuredContent),
    Bundle(GenerationBundle),
}

impl GenerationOutput {
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_tags(self) -> Option<Vec<String>> {
        match self {
            Self::Tags(tags) => Some(tags),
            _ => None,
        }
    }

    pub fn into_structured(self) -> Option<StructuredContent> {
        match self {
            Self::Structured(content) => Some(content),
            _ => None,
        }
    }

    pub fn into_bundle(self) -> Option<GenerationBundle> {
        match self {
            Self::Bundle(bundle) => Some(bundle),
            _ => None,
        }
    }
}

// ============================================================================
// Reply post-processing
// ============================================================================

/// Split a tags reply on the list delimiters models actually emit (ASCII
/// comma, full-width comma, ideographic comma), trim each entry, drop
/// empties, and cap at [`MAX_TAGS`].
pub fn parse_tags(reply: &str) -> Vec<String> {
    reply
        .split([',', '，', '、'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .take(MAX_TAGS)
        .map(str::to_string)
        .collect()
}

/// Strip a surrounding Markdown code fence (``` or ```json) if present.
fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.trim_start();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
