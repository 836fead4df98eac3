//! Animal list fetch client
//!
//! The listing controller talks to the adoption API only through
//! [`AnimalsApi`]. Two implementations ship:
//!
//! ```text
//! AnimalsApi trait
//! ├── HttpAnimalsApi (reqwest, GET /animals/available)
//! └── DemoApi        (in-memory fixture, ADOTA_DEMO=1)
//! ```
//!
//! Only a response whose `status` equals [`SUCCESS_STATUS`] is trusted.
//! Everything else, including a transport failure, is a failure for the
//! controller.

pub mod demo;
pub mod http;

pub use demo::DemoApi;
pub use http::HttpAnimalsApi;

use crate::animals::{Animal, AnimalFilter};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

/// The only status under which `data.animals` is trusted
pub const SUCCESS_STATUS: u16 = 200;

/// Body of a successful listing response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnimalsPayload {
    #[serde(default)]
    pub animals: Vec<Animal>,
}

/// Result of one listing request that reached the server
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Option<AnimalsPayload>,
}

impl ApiResponse {
    pub fn ok(animals: Vec<Animal>) -> Self {
        Self {
            status: SUCCESS_STATUS,
            data: Some(AnimalsPayload { animals }),
        }
    }

    /// The animals, if and only if the status is the success status
    pub fn into_animals(self) -> Result<Vec<Animal>, FetchError> {
        match (self.status, self.data) {
            (SUCCESS_STATUS, Some(data)) => Ok(data.animals),
            (SUCCESS_STATUS, None) => Err(FetchError::Decode("missing response data".into())),
            (status, _) => Err(FetchError::NonSuccess { status }),
        }
    }
}

/// Errors that can occur while fetching the animal list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset, etc.
    Transport(String),
    /// No response within the configured timeout
    Timeout,
    /// Response body did not match the expected shape
    Decode(String),
    /// The server answered with something other than the success status
    NonSuccess { status: u16 },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Network error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Decode(msg) => write!(f, "Invalid response: {}", msg),
            Self::NonSuccess { status } => write!(f, "Unexpected status {}", status),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Fetches the animals available for adoption
#[async_trait]
pub trait AnimalsApi: Send + Sync {
    /// Name for log records
    fn name(&self) -> &'static str;

    /// One request for the list, narrowed by `filter` when present.
    /// `token` may be empty when the user has no session.
    async fn fetch_available(
        &self,
        filter: Option<AnimalFilter>,
        token: String,
    ) -> Result<ApiResponse, FetchError>;
}
