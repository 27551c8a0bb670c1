pub mod error;
pub mod config;
pub mod url;
pub mod credentials;
pub mod prompt;
pub mod request;
pub mod client;

/*

qna-openai: an async client adapter for question answering over
OpenAI-style completion endpoints. Given a passage of text and a
question, it builds a prompt, posts it to the provider, and returns
the first completion choice as the answer.

Two topologies of the same provider are supported:

  - Public: the shared endpoint at api.openai.com
  - ManagedDeployment: an Azure-hosted per-tenant deployment,
    addressed by resource name + deployment id

qna-openai/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports, Topology, AnswerResult
│   ├── error.rs        # Error taxonomy
│   ├── config.rs       # Per-call settings snapshot
│   ├── url.rs          # Endpoint URL construction strategy
│   ├── credentials.rs  # API key carrier and resolution chain
│   ├── prompt.rs       # Prompt assembly
│   ├── request.rs      # Wire request/response types
│   └── client.rs       # QnaClient, the completion invoker
└── tests/              # Unit and mock-server tests

*/

pub use client::QnaClient;
pub use config::QnaSettings;
pub use credentials::{CredentialCarrier, CredentialSource};
pub use error::Error;
pub use url::{CompletionsUrlBuilder, UrlBuilder};

/// QNA STRUCTURES:

/// Which deployment variant of the provider a call targets.
/// Derived per call from the settings snapshot; ManagedDeployment
/// requires both fields non-empty, anything else falls back to
/// Public.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topology
{
  /// Shared multi-tenant endpoint (api.openai.com)
  Public
  ,
  /// Per-tenant Azure deployment
  ManagedDeployment
  {   resource_name: String
    , deployment_id: String
  }
}

impl Topology
{   /// Stable display name, used in errors and log lines
    pub fn endpoint_name(&self) -> &'static str
    {   match self
        {   Topology::Public => "OpenAI API"
          , Topology::ManagedDeployment { .. } => {
              "Azure OpenAI API"
            }
        }
    }

    pub fn is_managed(&self) -> bool
    {   matches!(self, Topology::ManagedDeployment { .. })
    }
}

/// Outcome of a successful answer call.
/// `answer` is None when the provider returned zero choices or an
/// empty first choice; that is a successful outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult
{   /// Original context text, echoed back unchanged
    pub text: String
  , /// Original question, echoed back unchanged
    pub question: String
  , /// First completion choice, if any
    pub answer: Option<String>
}
