//! Correlation types for request tracking
//!
//! A `RequestContext` travels with a save or fetch call so that log lines
//! and errors from the service layer can be tied back to the user action
//! that triggered them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single service request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new time-ordered RequestId (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap an id received from elsewhere (e.g. an `X-Request-Id` header)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context carried from the caller into a profile service
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
    /// Signed-in user issuing the request, if known
    pub actor_uid: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_actor(uid: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            actor_uid: Some(uid.into()),
        }
    }
}
