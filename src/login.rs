use reqwest::Response;
use tracing::{debug, info};

use crate::client::{check_status, EntClient};
use crate::error::EntError;

const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";

/// Name and expected value of the cookie set by a successful login.
const AUTH_COOKIE: (&str, &str) = ("authenticated", "true");

impl EntClient {
    /// Log in with the client credentials.
    ///
    /// Redirects are not followed: the ENT sets its `authenticated` cookie on
    /// the redirect itself. Errors with [`EntError::Authentication`] if that
    /// cookie is missing or not `true`.
    pub async fn login(&self) -> Result<(), EntError> {
        let url = self.url(LOGIN_PATH);

        let params = [("email", self.username()), ("password", self.password())];

        debug!(%url, username = self.username(), "sending login request");
        let response = self.client().post(&url).form(&params).send().await?;
        let response = check_status(response, true)?;

        if !is_authenticated(&response) {
            debug!(status = %response.status(), "login response lacks the authentication cookie");
            return Err(EntError::Authentication);
        }

        info!(username = self.username(), "logged in");
        Ok(())
    }

    /// Close the server-side session.
    pub async fn logout(&self) -> Result<bool, EntError> {
        let url = self.url(LOGOUT_PATH);

        debug!(%url, "sending logout request");
        let response = self.client().get(&url).send().await?;
        check_status(response, false)?;

        info!("logged out");
        Ok(true)
    }
}

fn is_authenticated(response: &Response) -> bool {
    let (name, value) = AUTH_COOKIE;
    response
        .cookies()
        .any(|cookie| cookie.name() == name && cookie.value() == value)
}
