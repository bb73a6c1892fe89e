//! Profile service backed by the remote profile API
//!
//! `GET {base}/api/profile/{uid}` returns the full profile;
//! `PUT {base}/api/profile/{uid}` takes a partial profile (the diff) and
//! returns the full updated one. Any non-2xx status is a failure.

#![allow(clippy::result_large_err)]

use std::time::{Duration, Instant};

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Url;
use u25match_core::errors::{ExError, ExErrorKind};
use u25match_core::{log_op_end, log_op_error, log_op_start};
use u25match_core::{ProfileData, ProfileDiff, ProfileService};
use u25match_core_types::Sensitive;

use crate::config::ENV_API_BASE_URL;
use crate::errors::{config_error, from_reqwest, http_status, Result};

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct HttpProfileService {
    client: Client,
    base_url: Url,
    token: Option<Sensitive<String>>,
}

/// A uid becomes exactly one path segment; these would not.
fn validate_uid(op: &str, uid: &str) -> Result<()> {
    if uid.is_empty() || uid == "." || uid == ".." {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op(op)
            .with_field("uid")
            .with_message(format!("invalid uid '{}'", uid)));
    }
    Ok(())
}

impl HttpProfileService {
    /// # Errors
    ///
    /// `InvalidInput` if `base_url` is not an absolute http(s) URL;
    /// `ExternalService` if the HTTP client cannot be built.
    pub fn new(base_url: &str, token: Option<Sensitive<String>>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| config_error(ENV_API_BASE_URL, &format!("invalid base url: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(config_error(
                ENV_API_BASE_URL,
                &format!("base url '{}' cannot carry a path", base_url),
            ));
        }
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| from_reqwest("build_http_client", e))?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Endpoint for one user's profile. The uid is percent-encoded as a
    /// single path segment.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty, `.` or `..` uid.
    pub fn profile_url(&self, uid: &str) -> Result<Url> {
        validate_uid("profile_url", uid)?;
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| config_error(ENV_API_BASE_URL, "base url cannot carry a path"))?
            .pop_if_empty()
            .extend(["api", "profile", uid]);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose()),
            None => request,
        }
    }

    fn read_profile(op: &str, uid: &str, response: Response) -> Result<ProfileData> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(http_status(op, uid, status.as_u16(), &body));
        }
        response
            .json::<ProfileData>()
            .map_err(|e| from_reqwest(op, e).with_uid(uid))
    }

    fn send_update(&self, url: Url, uid: &str, diff: &ProfileDiff) -> Result<ProfileData> {
        let response = self
            .authorize(self.client.put(url).json(diff))
            .send()
            .map_err(|e| from_reqwest("update_profile", e).with_uid(uid))?;
        Self::read_profile("update_profile", uid, response)
    }
}

impl ProfileService for HttpProfileService {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch_profile(&self, uid: &str) -> Result<ProfileData> {
        let url = self
            .profile_url(uid)
            .map_err(|e| e.with_op("fetch_profile"))?;
        let response = self
            .authorize(self.client.get(url))
            .send()
            .map_err(|e| from_reqwest("fetch_profile", e).with_uid(uid))?;
        Self::read_profile("fetch_profile", uid, response)
    }

    fn update_profile(&self, uid: &str, diff: &ProfileDiff) -> Result<ProfileData> {
        let url = self
            .profile_url(uid)
            .map_err(|e| e.with_op("update_profile"))?;
        let started = Instant::now();
        log_op_start!("http_update_profile", uid = uid, url = url.as_str());

        let result = self.send_update(url, uid, diff);

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                log_op_end!("http_update_profile", duration_ms = duration_ms, uid = uid);
            }
            Err(err) => {
                log_op_error!(
                    "http_update_profile",
                    err.clone(),
                    duration_ms = duration_ms,
                    uid = uid
                );
            }
        }
        result
    }
}

impl std::fmt::Debug for HttpProfileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProfileService")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base: &str) -> HttpProfileService {
        HttpProfileService::new(base, None).unwrap()
    }

    #[test]
    fn test_profile_url_joins_base() {
        for base in ["http://localhost:8081", "http://localhost:8081/"] {
            assert_eq!(
                service(base).profile_url("user-1").unwrap().as_str(),
                "http://localhost:8081/api/profile/user-1"
            );
        }
        assert_eq!(
            service("https://api.example/v2/").profile_url("u").unwrap().as_str(),
            "https://api.example/v2/api/profile/u"
        );
    }

    #[test]
    fn test_uid_stays_one_path_segment() {
        let url = service("http://h").profile_url("../admin?x=1#frag").unwrap();

        assert_eq!(url.host_str(), Some("h"));
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
        let segments: Vec<&str> = url.path_segments().unwrap().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(&segments[..2], &["api", "profile"]);
        assert!(url.path().starts_with("/api/profile/..%2Fadmin%3F"));
    }

    #[test]
    fn test_dot_segments_and_empty_uid_rejected() {
        let service = service("http://h");
        for uid in ["", ".", ".."] {
            let err = service.profile_url(uid).unwrap_err();
            assert_eq!(err.kind(), ExErrorKind::InvalidInput, "uid {:?}", uid);
            assert_eq!(err.field(), Some("uid"));
        }
    }

    #[test]
    fn test_update_with_empty_uid_is_rejected_before_sending() {
        let diff = ProfileDiff {
            age: Some(26),
            ..Default::default()
        };
        let err = service("http://127.0.0.1:9").update_profile("", &diff).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.op(), Some("update_profile"));
    }

    #[test]
    fn test_invalid_base_url_is_invalid_input() {
        for base in ["not a url", "mailto:someone@example.com"] {
            let err = HttpProfileService::new(base, None).unwrap_err();
            assert_eq!(err.kind(), ExErrorKind::InvalidInput, "base {:?}", base);
            assert_eq!(err.field(), Some(ENV_API_BASE_URL));
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let service = HttpProfileService::new(
            "http://localhost:8081",
            Some(Sensitive::new("secret-token".to_string())),
        )
        .unwrap();
        let out = format!("{:?}", service);
        assert!(!out.contains("secret-token"));
        assert!(out.contains("localhost:8081"));
    }

    #[test]
    fn test_unreachable_server_is_service_failure() {
        // Nothing listens on the discard port on loopback.
        let diff = ProfileDiff {
            age: Some(26),
            ..Default::default()
        };
        let err = service("http://127.0.0.1:9").update_profile("u1", &diff).unwrap_err();
        assert!(err.kind().is_service_failure());
        assert_eq!(err.uid(), Some("u1"));
    }
}
