//! API key carrier and the credential resolution chain

use std::collections::HashMap;

use log::debug;

use crate::error::Error;
use crate::Topology;

// ===== Lookup Keys =====

/// Carrier header consulted for the public topology
pub const OPENAI_KEY_HEADER: &str = "X-Openai-Api-Key";
/// Carrier header consulted for the managed topology
pub const AZURE_KEY_HEADER: &str = "X-Azure-Api-Key";
/// Environment fallback for the public topology
pub const OPENAI_KEY_ENV_VAR: &str = "OPENAI_APIKEY";
/// Environment fallback for the managed topology
pub const AZURE_KEY_ENV_VAR: &str = "AZURE_APIKEY";

// ===== Carrier =====

/// Invocation-scoped bag of caller-supplied header values, typically
/// lifted from an inbound request. Lives only for the single call;
/// holds no defaults and no provider state.
#[derive(Debug, Clone, Default)]
pub struct CredentialCarrier
{   headers: HashMap<String, Vec<String>>
}

impl CredentialCarrier
{   pub fn new() -> Self
    {   CredentialCarrier::default()
    }

    /// Append a value under a header key
    pub fn insert(&mut self, header: &str, value: &str)
    {   self.headers
          .entry(header.to_string())
          .or_default()
          .push(value.to_string());
    }

    /// First value under a header key, if any
    pub fn first_value(&self, header: &str) -> Option<&str>
    {   self.headers
          .get(header)?
          .first()
          .map(String::as_str)
    }

    // Typed accessors per topology

    pub fn set_openai_api_key(&mut self, key: &str)
    {   self.insert(OPENAI_KEY_HEADER, key);
    }

    pub fn set_azure_api_key(&mut self, key: &str)
    {   self.insert(AZURE_KEY_HEADER, key);
    }

    pub fn openai_api_key(&self) -> Option<&str>
    {   self.first_value(OPENAI_KEY_HEADER)
    }

    pub fn azure_api_key(&self) -> Option<&str>
    {   self.first_value(AZURE_KEY_HEADER)
    }
}

// ===== Resolution =====

/// Where a resolved API key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource
{   /// Process-wide default handed to the client at construction
    Default
  , /// Invocation-scoped carrier header
    Header
  , /// Process environment variable
    Environment
}

/// Resolve the API key for one call.
///
/// Precedence: the client's process-wide default for this topology,
/// then the topology-specific carrier header, then the environment.
/// Pure lookup chain; nothing is cached or mutated.
pub fn resolve_api_key(
  default_key: Option<&str>
, topology: &Topology
, carrier: &CredentialCarrier
) -> Result<(String, CredentialSource), Error>
{   let (header, env_var) = match topology
    {   Topology::ManagedDeployment { .. } => {
          (AZURE_KEY_HEADER, AZURE_KEY_ENV_VAR)
        }
      , Topology::Public => {
          (OPENAI_KEY_HEADER, OPENAI_KEY_ENV_VAR)
        }
    };

    if let Some(key) = default_key
    {   if !key.is_empty()
        {   debug!(
              "Using default api key for {}",
              topology.endpoint_name()
            );
            return Ok((
              key.to_string()
            , CredentialSource::Default
            ));
        }
    }

    if let Some(value) = carrier.first_value(header)
    {   if !value.is_empty()
        {   debug!("Using api key from header: {}", header);
            return Ok((
              value.to_string()
            , CredentialSource::Header
            ));
        }
    }

    if let Ok(value) = std::env::var(env_var)
    {   if !value.is_empty()
        {   debug!(
              "Using api key from environment: {}",
              env_var
            );
            return Ok((
              value
            , CredentialSource::Environment
            ));
        }
    }

    Err(Error::NoCredential
    {   header: header.to_string()
      , env_var: env_var.to_string()
    })
}
