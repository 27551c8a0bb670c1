use std::fmt;

/// Error type for qna-openai operations
/// Implements Clone for sending through channels
///
/// The taxonomy is closed: every failure path of an answer call maps
/// to exactly one of these variants, and there is no catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Joining the provider host and path failed
    UrlConstruction(String)
  , /// No API key in the default, the carrier, or the environment
    NoCredential
    {   /// Request header key that was checked
        header: String
      , /// Environment variable that was checked
        env_var: String
    }
  , /// Connection, timeout, or cancellation while talking to the
    /// provider
    Transport(String)
  , /// Response body was not a valid answers payload
    Decode(String)
  , /// Provider returned a non-success status or an error object
    Provider
    {   status: u16
      , message: Option<String>
      , topology_name: String
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::UrlConstruction(msg) => {
              write!(f,
                "join OpenAI API host and path: {}",
                msg
              )
            }
          , Error::NoCredential { header, env_var } => {
              write!(f,
                "no api key found neither in request header: \
                 {} nor in environment variable under {}",
                header, env_var
              )
            }
          , Error::Transport(msg) => {
              write!(f, "send POST request: {}", msg)
            }
          , Error::Decode(msg) => {
              write!(f, "unmarshal response body: {}", msg)
            }
          , Error::Provider
            {   status
              , message: Some(message)
              , topology_name
            } => {
              write!(f,
                "connection to: {} failed with status: {} error: {}",
                topology_name, status, message
              )
            }
          , Error::Provider
            {   status
              , message: None
              , topology_name
            } => {
              write!(f,
                "connection to: {} failed with status: {}",
                topology_name, status
              )
            }
        }
    }
}

impl std::error::Error for Error {}
