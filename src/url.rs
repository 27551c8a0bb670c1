//! Endpoint URL construction per topology

use log::trace;

use crate::error::Error;
use crate::Topology;

const OPENAI_HOST: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/completions";
const AZURE_DOMAIN: &str = "openai.azure.com";
const AZURE_API_VERSION: &str = "2022-12-01";

/// Strategy for turning a topology into an endpoint URL.
/// The client holds this behind a trait object so tests can
/// substitute a builder pointing elsewhere.
pub trait UrlBuilder: Send + Sync
{   fn build(&self, topology: &Topology)
      -> Result<String, Error>;
}

/// Production builder for the completions endpoint
pub struct CompletionsUrlBuilder;

impl UrlBuilder for CompletionsUrlBuilder
{   fn build(&self, topology: &Topology)
      -> Result<String, Error>
    {   let built = match topology
        {   Topology::ManagedDeployment
            {   resource_name
              , deployment_id
            } => {
              format!(
                "https://{}.{}/openai/deployments/{}/completions?api-version={}",
                resource_name,
                AZURE_DOMAIN,
                deployment_id,
                AZURE_API_VERSION
              )
            }
          , Topology::Public => {
              let host = url::Url::parse(OPENAI_HOST)
                .map_err(|e| {
                  Error::UrlConstruction(e.to_string())
                })?;
              host.join(COMPLETIONS_PATH)
                .map_err(|e| {
                  Error::UrlConstruction(e.to_string())
                })?
                .to_string()
            }
        };
        trace!("Built completion URL: {}", built);
        Ok(built)
    }
}
