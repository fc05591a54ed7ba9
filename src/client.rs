use reqwest::{redirect, Client, ClientBuilder, Response, Url};
use tracing::debug;

use crate::error::EntError;

/// ENT API client.
///
/// Owns the HTTP session (connection pool and cookie jar) for one invocation.
/// Everything is released when the client is dropped.
pub struct EntClient {
    client: Client,
    base: Url,
    base_url: String,
    username: String,
    password: String,
}

impl EntClient {
    /// Create a new client for the ENT instance at `base_url`.
    pub fn new(username: &str, password: &str, base_url: &str) -> Result<Self, EntError> {
        let base_url = base_url.trim_end_matches('/');

        let base = Url::parse(base_url).map_err(|e| EntError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(EntError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base url".to_string(),
            });
        }

        // Login answers with a redirect; the cookie must be read off that response.
        // Any redirect elsewhere is reported by `check_status`.
        let client = ClientBuilder::new()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(url = base_url, username, "created ENT client");

        Ok(Self {
            client,
            base,
            base_url: base_url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Login sent as the `email` form field
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// HTTP client reference
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Build a full URL from an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a full URL from an endpoint path plus one percent-encoded segment
    pub fn url_with_segment(&self, path: &str, segment: &str) -> String {
        let mut url = self.base.clone();
        // Never fails: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()))
                .push(segment);
        }
        url.into()
    }
}

/// Reject any response whose status is not 2xx (or 3xx when `accept_redirect`).
pub(crate) fn check_status(
    response: Response,
    accept_redirect: bool,
) -> Result<Response, EntError> {
    let status = response.status();
    if status.is_success() || (accept_redirect && status.is_redirection()) {
        return Ok(response);
    }

    Err(EntError::Status {
        url: response.url().to_string(),
        status,
    })
}
