use std::time::Duration;

use log::{debug, trace, error};

use crate::config::QnaSettings;
use crate::credentials::{self, CredentialCarrier};
use crate::error::Error;
use crate::prompt::assemble_prompt;
use crate::request::{AnswerRequest, AnswerResponse};
use crate::url::{CompletionsUrlBuilder, UrlBuilder};
use crate::{AnswerResult, Topology};

/// Async client for answering a question against a passage of text
/// via an OpenAI-style completions endpoint.
///
/// Holds only immutable state after construction (default keys, the
/// URL building strategy, the transport client), so concurrent
/// answer calls are independent and need no locking.
pub struct QnaClient
{   openai_api_key: Option<String>
  , azure_api_key: Option<String>
  , url_builder: Box<dyn UrlBuilder>
  , http_client: reqwest::Client
}

impl QnaClient
{   /// Create a client with optional process-wide default keys, one
    /// per topology
    pub fn new(
      openai_api_key: Option<String>
    , azure_api_key: Option<String>
    ) -> Self
    {   debug!("Creating QnaClient");
        QnaClient
        {   openai_api_key
          , azure_api_key
          , url_builder: Box::new(CompletionsUrlBuilder)
          , http_client: reqwest::Client::new()
        }
    }

    /// Create a client whose transport enforces a request timeout;
    /// a timed-out exchange surfaces as Error::Transport. A failure
    /// to build the transport itself is also reported as
    /// Error::Transport, the closest variant for a client that can
    /// never reach the provider.
    pub fn with_timeout(
      openai_api_key: Option<String>
    , azure_api_key: Option<String>
    , timeout: Duration
    ) -> Result<Self, Error>
    {   debug!(
          "Creating QnaClient with timeout: {:?}",
          timeout
        );
        let http_client = reqwest::Client::builder()
          .timeout(timeout)
          .build()
          .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(QnaClient
        {   openai_api_key
          , azure_api_key
          , url_builder: Box::new(CompletionsUrlBuilder)
          , http_client
        })
    }

    /// Substitute the URL building strategy
    pub fn with_url_builder(
      mut self
    , url_builder: Box<dyn UrlBuilder>
    ) -> Self
    {   self.url_builder = url_builder;
        self
    }

    fn default_key_for(&self, topology: &Topology)
      -> Option<&str>
    {   if topology.is_managed()
        {   self.azure_api_key.as_deref()
        } else
        {   self.openai_api_key.as_deref()
        }
    }

    /// Answer a question against a passage of text.
    ///
    /// One atomic request/response exchange: no retries, no
    /// streaming, no partial results. The original text and
    /// question are echoed back in the result; the answer is absent
    /// when the provider returns zero choices or an empty first
    /// choice.
    pub async fn answer(
      &self
    , text: &str
    , question: &str
    , settings: &QnaSettings
    , carrier: &CredentialCarrier
    ) -> Result<AnswerResult, Error>
    {   let prompt = assemble_prompt(text, question);
        let topology = settings.topology();

        let oai_url = self.url_builder.build(&topology)?;
        debug!(
          "Answering via {}",
          topology.endpoint_name()
        );

        let body = AnswerRequest
        {   prompt
          , model: settings.model.clone()
          , max_tokens: settings.max_tokens
          , temperature: settings.temperature
          , stop: vec!["\n".to_string()]
          , frequency_penalty: settings.frequency_penalty
          , presence_penalty: settings.presence_penalty
          , top_p: settings.top_p
        };

        let (api_key, source)
          = credentials::resolve_api_key(
              self.default_key_for(&topology)
            , &topology
            , carrier
            )?;
        trace!("Resolved api key from {:?}", source);

        let (auth_header, auth_value)
          = auth_header_for(&topology, &api_key);

        let response = self.http_client
          .post(&oai_url)
          .header(auth_header, auth_value)
          .header("Content-Type", "application/json")
          .json(&body)
          .send()
          .await
          .map_err(|e| {
            error!(
              "POST to {} failed: {}",
              topology.endpoint_name(), e
            );
            Error::Transport(e.to_string())
          })?;

        let status = response.status().as_u16();
        trace!("Completion response status: {}", status);

        let body_bytes = response.bytes().await
          .map_err(|e| {
            error!("Failed to read response body: {}", e);
            Error::Transport(e.to_string())
          })?;

        let res_body: AnswerResponse
          = serde_json::from_slice(&body_bytes)
            .map_err(|e| {
              error!(
                "Failed to decode {} response: {}",
                topology.endpoint_name(), e
              );
              Error::Decode(e.to_string())
            })?;

        if status != 200 || res_body.error.is_some()
        {   let message = res_body.error
              .map(|e| e.message)
              .filter(|m| !m.is_empty());
            error!(
              "{} returned status {}",
              topology.endpoint_name(), status
            );
            return Err(Error::Provider
            {   status
              , message
              , topology_name: topology
                  .endpoint_name()
                  .to_string()
            });
        }

        let answer = res_body.choices
          .first()
          .map(|c| c.text.clone())
          .filter(|t| !t.is_empty());

        Ok(AnswerResult
        {   text: text.to_string()
          , question: question.to_string()
          , answer
        })
    }
}

/// Auth header name and value per topology: managed deployments use
/// the provider's custom api-key header, the public endpoint uses a
/// bearer token
fn auth_header_for(topology: &Topology, api_key: &str)
  -> (&'static str, String)
{   if topology.is_managed()
    {   ("api-key", api_key.to_string())
    } else
    {   ("Authorization", format!("Bearer {}", api_key))
    }
}
