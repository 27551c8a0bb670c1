//! Wire request and response types for the completions endpoint

use serde::{Deserialize, Serialize};

/// Outbound completion request body
#[derive(Debug, Clone, Serialize)]
pub struct AnswerRequest
{   pub prompt: String
  , pub model: String
  , pub max_tokens: f64
  , pub temperature: f64
  , pub stop: Vec<String>
  , pub frequency_penalty: f64
  , pub presence_penalty: f64
  , pub top_p: f64
}

/// Inbound completion response body
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
  , #[serde(default)]
    pub error: Option<ApiError>
}

/// One candidate completion; only `text` is consulted
#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   #[serde(default)]
    pub text: String
  , #[serde(default)]
    pub finish_reason: Option<String>
  , #[serde(default)]
    pub index: Option<f32>
  , #[serde(default)]
    pub logprobs: Option<serde_json::Value>
}

/// Provider-level error object carried inside a response body
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError
{   #[serde(default)]
    pub message: String
  , #[serde(default, rename = "type")]
    pub error_type: Option<String>
  , #[serde(default)]
    pub param: Option<String>
  , #[serde(default)]
    pub code: Option<serde_json::Value>
}
