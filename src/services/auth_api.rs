use crate::domain::model::AuthenticationResult;
use crate::utils::error::AuthError;
use reqwest::{Client, StatusCode};

const TOKEN_PATH: &str = "/oauth2/token";
const SCOPE: &str = "offline_access";

/// OAuth2 token 端點 (client_credentials / refresh_token)
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Client,
    token_url: String,
}

impl AuthApi {
    pub fn new(client: Client, auth_base_url: &str) -> Self {
        Self {
            client,
            token_url: format!("{}{}", auth_base_url.trim_end_matches('/'), TOKEN_PATH),
        }
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<AuthenticationResult, AuthError> {
        tracing::info!("🔐 Starting ARISE authentication");
        self.request_token(
            &[
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("scope", SCOPE),
            ],
            "[auth]",
        )
        .await
    }

    pub async fn refresh(
        &self,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> Result<AuthenticationResult, AuthError> {
        tracing::info!("🔄 Starting ARISE token refresh");
        self.request_token(
            &[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("scope", SCOPE),
            ],
            "[refresh]",
        )
        .await
    }

    async fn request_token(
        &self,
        form: &[(&str, &str)],
        log_tag: &str,
    ) -> Result<AuthenticationResult, AuthError> {
        tracing::debug!("📡 POST {} {}", self.token_url, log_tag);

        let response = self
            .client
            .post(&self.token_url)
            .form(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ Network error: {} {}", e, log_tag);
                AuthError::Network(transport_message(&e))
            })?;

        let status = response.status();
        tracing::info!("📥 Response: {} {}", status.as_u16(), log_tag);

        if status == StatusCode::UNAUTHORIZED {
            tracing::error!("❌ Request failed: Invalid credentials (401) {}", log_tag);
            return Err(AuthError::InvalidCredentials);
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Network(transport_message(&e)))?;

        if status != StatusCode::OK {
            tracing::debug!("Response body: {}", body);
            tracing::error!("❌ Request failed: HTTP {} {}", status.as_u16(), log_tag);
            return Err(AuthError::Network(format!("HTTP {}", status.as_u16())));
        }

        let result: AuthenticationResult = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("Response body: {}", body);
            tracing::error!("❌ Failed to decode response: {} {}", e, log_tag);
            AuthError::InvalidResponse
        })?;

        tracing::info!("✅ Request successful {}", log_tag);
        tracing::debug!(
            "Token type: {}, Expires in: {}s",
            result.token_type,
            result.expires_in
        );
        Ok(result)
    }
}

/// 傳輸層錯誤轉成簡短訊息
pub(crate) fn transport_message(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timed out".to_string()
    } else if error.is_connect() {
        "Cannot connect to server".to_string()
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn api(server: &MockServer) -> AuthApi {
        AuthApi::new(Client::new(), &server.base_url())
    }

    #[tokio::test]
    async fn test_authenticate_posts_form() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/oauth2/token")
                .header("content-type", "application/x-www-form-urlencoded")
                .x_www_form_urlencoded_tuple("grant_type", "client_credentials")
                .x_www_form_urlencoded_tuple("client_id", "id-1")
                .x_www_form_urlencoded_tuple("client_secret", "secret-1")
                .x_www_form_urlencoded_tuple("scope", "offline_access");
            then.status(200).json_body(serde_json::json!({
                "access_token": "at-1",
                "token_type": "Bearer",
                "expires_in": 3600,
                "refresh_token": "rt-1"
            }));
        });

        let result = api(&server).authenticate("id-1", "secret-1").await.unwrap();
        mock.assert();
        assert_eq!(result.access_token, "at-1");
        assert_eq!(result.refresh_token.as_deref(), Some("rt-1"));
        assert_eq!(result.expires_in, 3600);
    }

    #[tokio::test]
    async fn test_refresh_sends_refresh_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/oauth2/token")
                .x_www_form_urlencoded_tuple("grant_type", "refresh_token")
                .x_www_form_urlencoded_tuple("refresh_token", "rt-1");
            then.status(200).json_body(serde_json::json!({
                "access_token": "at-2",
                "token_type": "Bearer",
                "expires_in": 60
            }));
        });

        let result = api(&server).refresh("id", "secret", "rt-1").await.unwrap();
        mock.assert();
        assert_eq!(result.access_token, "at-2");
        assert!(result.refresh_token.is_none());
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).x_www_form_urlencoded_tuple("client_id", "bad");
            then.status(401);
        });
        server.mock(|when, then| {
            when.method(POST).x_www_form_urlencoded_tuple("client_id", "broken");
            then.status(503).body("unavailable");
        });
        server.mock(|when, then| {
            when.method(POST).x_www_form_urlencoded_tuple("client_id", "garbled");
            then.status(200).body("not json");
        });

        let api = api(&server);
        assert_eq!(
            api.authenticate("bad", "x").await.unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            api.authenticate("broken", "x").await.unwrap_err(),
            AuthError::Network("HTTP 503".to_string())
        );
        assert_eq!(
            api.authenticate("garbled", "x").await.unwrap_err(),
            AuthError::InvalidResponse
        );
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let api = AuthApi::new(Client::new(), "http://127.0.0.1:1");
        let err = api.authenticate("id", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
    }
}
