//! Low-level Helix transport: token acquisition and authorized requests.

use serde::de::DeserializeOwned;

use ludio_core::auth::AccessToken;
use ludio_core::http::send_json;
use ludio_core::{ErrorKind, LudioError};

use crate::TwitchConnector;
use crate::wire::TokenResponse;

pub(crate) const PROVIDER: &str = "ludio-twitch";

impl TwitchConnector {
    /// Exchange the app credentials for a bearer token via the
    /// client-credentials grant.
    pub(crate) async fn fetch_token(&self) -> Result<AccessToken, LudioError> {
        let url = self
            .auth_base
            .join("oauth2/token")
            .map_err(|e| LudioError::config(format!("twitch auth url: {e}")))?;
        let req = self.http.post(url).form(&[
            ("client_id", self.creds.client_id.as_str()),
            ("client_secret", self.creds.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ]);
        let body: TokenResponse = send_json(PROVIDER, "access token", req).await?;
        Ok(AccessToken::new(
            body.access_token,
            body.expires_in.map(std::time::Duration::from_secs),
        ))
    }

    /// Authorized GET against the Helix API, decoding the JSON body.
    ///
    /// A 401/403 drops the cached token so the next call re-authenticates
    /// instead of replaying a revoked secret.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T, LudioError> {
        let token = self.tokens.bearer(|| self.fetch_token()).await?;
        let url = self
            .api_base
            .join(path)
            .map_err(|e| LudioError::config(format!("twitch api url: {e}")))?;
        let req = self
            .http
            .get(url)
            .header("Client-ID", &self.creds.client_id)
            .bearer_auth(&token)
            .query(query);
        let res = send_json(PROVIDER, what, req).await;
        if let Err(e) = &res {
            if e.kind() == ErrorKind::Auth {
                self.tokens.invalidate().await;
            }
        }
        res
    }
}
