//! Per-call settings snapshot for the completion invoker

use crate::Topology;

/// Immutable snapshot of the class configuration for one answer
/// call. Produced by the embedding application's configuration
/// layer; this crate only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct QnaSettings
{   /// Model identifier sent to the provider
    pub model: String
  , /// Completion length cap; the wire format carries this as a
    /// float
    pub max_tokens: f64
  , /// Sampling temperature
    pub temperature: f64
  , /// Frequency penalty
    pub frequency_penalty: f64
  , /// Presence penalty
    pub presence_penalty: f64
  , /// Nucleus sampling parameter
    pub top_p: f64
  , /// Azure resource name; empty for the public endpoint
    pub resource_name: String
  , /// Azure deployment id; empty for the public endpoint
    pub deployment_id: String
}

impl QnaSettings
{   /// Derive the topology for this snapshot.
    /// Managed iff both resource_name and deployment_id are
    /// non-empty; otherwise the call targets the public endpoint.
    pub fn topology(&self) -> Topology
    {   if !self.resource_name.is_empty()
          && !self.deployment_id.is_empty()
        {   Topology::ManagedDeployment
            {   resource_name: self.resource_name.clone()
              , deployment_id: self.deployment_id.clone()
            }
        } else
        {   Topology::Public
        }
    }

    pub fn is_azure(&self) -> bool
    {   self.topology().is_managed()
    }
}

impl Default for QnaSettings
{   fn default() -> Self
    {   QnaSettings
        {   model: "text-davinci-002".to_string()
          , max_tokens: 16.0
          , temperature: 0.0
          , frequency_penalty: 0.0
          , presence_penalty: 0.0
          , top_p: 1.0
          , resource_name: String::new()
          , deployment_id: String::new()
        }
    }
}
