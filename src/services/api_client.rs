use crate::services::auth_api::transport_message;
use crate::services::token_service::TokenService;
use crate::utils::error::{ApiError, ErrorInfo, Result};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

const NO_TOKEN_MESSAGE: &str = "No valid access token. Please call authenticate() first.";
const UNAUTHORIZED_MESSAGE: &str = "Authentication failed. Please re-authenticate.";

/// ARISE API 的共用 HTTP client：Bearer 認證、401 時 refresh 後重試一次、錯誤內容解析
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<TokenService>,
}

impl ApiClient {
    pub fn new(client: Client, base_url: &str, tokens: Arc<TokenService>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let body = self
            .execute(|token| {
                self.client
                    .get(self.url(path))
                    .bearer_auth(token)
                    .query(query)
            })
            .await?;
        decode(&body)
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self
            .execute(|token| self.client.post(self.url(path)).bearer_auth(token).json(payload))
            .await?;
        decode(&body)
    }

    /// POST JSON，忽略回應內容
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, payload: &B) -> Result<()> {
        let body = self
            .execute(|token| self.client.post(self.url(path)).bearer_auth(token).json(payload))
            .await?;
        tracing::trace!("Response body: {}", body);
        Ok(())
    }

    /// 沒有 request body 的 POST，忽略回應內容
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        let body = self
            .execute(|token| {
                self.client
                    .request(Method::POST, self.url(path))
                    .bearer_auth(token)
            })
            .await?;
        tracing::trace!("Response body: {}", body);
        Ok(())
    }

    async fn execute<F>(&self, build: F) -> Result<String>
    where
        F: Fn(&str) -> RequestBuilder,
    {
        let token = self
            .tokens
            .access_token()
            .await
            .ok_or_else(|| ApiError::Unauthorized(NO_TOKEN_MESSAGE.to_string()))?;

        let (status, body) = send(build(&token)).await?;
        if status != StatusCode::UNAUTHORIZED {
            return into_result(status, body);
        }

        tracing::info!("🔄 Received 401, refreshing token and retrying once");
        let refreshed = match self.tokens.refresh_after_unauthorized(&token).await {
            Ok(refreshed) => refreshed,
            Err(e) => {
                tracing::warn!("⚠️ Token refresh after 401 failed: {}", e);
                return into_result(status, body);
            }
        };

        let (status, body) = send(build(&refreshed)).await?;
        into_result(status, body)
    }
}

async fn send(request: RequestBuilder) -> Result<(StatusCode, String)> {
    let response = request.send().await.map_err(|e| {
        tracing::error!("❌ Network Error: {}", e);
        ApiError::Network(transport_message(&e))
    })?;

    let status = response.status();
    tracing::debug!("📡 {} {}", status.as_u16(), response.url().path());

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(transport_message(&e)))?;
    Ok((status, body))
}

fn into_result(status: StatusCode, body: String) -> Result<String> {
    if status.is_success() {
        return Ok(body);
    }

    let code = status.as_u16();
    let info = parse_error_body(&body, code);
    let default_message = (code == 401).then_some(UNAUTHORIZED_MESSAGE);
    let error = ApiError::from_status(code, info, default_message);
    tracing::error!("❌ API error ({}): {}", code, error);
    Err(error.into())
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    // 空的 2xx 回應當作 JSON null
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!("Response body: {}", body);
        tracing::error!("❌ Failed to decode response: {}", e);
        ApiError::InvalidResponse(e.to_string()).into()
    })
}

/// 解析錯誤回應；同時接受 camelCase 與 PascalCase 欄位
pub fn parse_error_body(body: &str, status: u16) -> Option<ErrorInfo> {
    if body.trim().is_empty() {
        return None;
    }
    let Ok(Value::Object(json)) = serde_json::from_str::<Value>(body) else {
        return None;
    };

    let details = read_string(&json, &["details", "Details"]).or_else(|| first_error_message(&json));
    let status_code = ["statusCode", "StatusCode"]
        .iter()
        .find_map(|key| json.get(*key).and_then(Value::as_u64))
        .and_then(|code| u16::try_from(code).ok())
        .unwrap_or(status);

    Some(ErrorInfo {
        details,
        status_code,
        correlation_id: read_string(&json, &["correlationId", "CorrelationId"]),
        error_code: read_string(&json, &["errorCode", "ErrorCode"]),
        source: read_string(&json, &["source", "Source"]),
        exception_type: read_string(&json, &["exceptionType", "ExceptionType"]),
    })
}

fn read_string(json: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| json.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// `errors: { "field": ["message", ...] }` 中第一個訊息
fn first_error_message(json: &Map<String, Value>) -> Option<String> {
    let errors = json.get("errors").or_else(|| json.get("Errors"))?.as_object()?;
    let (_, messages) = errors.iter().next()?;
    messages
        .as_array()?
        .first()?
        .as_str()
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_body() {
        let body = r#"{
            "details": "Amount must be positive",
            "statusCode": 400,
            "correlationId": "corr-1",
            "errorCode": "V0001",
            "source": "PaymentGateway.Isv",
            "exceptionType": "ValidationException"
        }"#;
        let info = parse_error_body(body, 400).unwrap();
        assert_eq!(info.details.as_deref(), Some("Amount must be positive"));
        assert_eq!(info.correlation_id.as_deref(), Some("corr-1"));
        assert_eq!(info.error_code.as_deref(), Some("V0001"));
        assert_eq!(info.source.as_deref(), Some("PaymentGateway.Isv"));
        assert_eq!(info.exception_type.as_deref(), Some("ValidationException"));
    }

    #[test]
    fn test_parse_pascal_case_body_with_errors_map() {
        let body = r#"{
            "StatusCode": 422,
            "CorrelationId": "corr-2",
            "Errors": { "Amount": ["Amount is required", "ignored"] }
        }"#;
        let info = parse_error_body(body, 400).unwrap();
        assert_eq!(info.details.as_deref(), Some("Amount is required"));
        assert_eq!(info.status_code, 422);
        assert_eq!(info.correlation_id.as_deref(), Some("corr-2"));
    }

    #[test]
    fn test_parse_non_json_body() {
        assert!(parse_error_body("", 500).is_none());
        assert!(parse_error_body("<html>Bad Gateway</html>", 502).is_none());
        assert!(parse_error_body("[1, 2]", 400).is_none());

        let info = parse_error_body("{}", 404).unwrap();
        assert_eq!(info.status_code, 404);
        assert!(info.details.is_none());
    }

    #[test]
    fn test_error_status_uses_default_messages() {
        let err = into_result(StatusCode::UNAUTHORIZED, String::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Authentication Required: Authentication failed. Please re-authenticate."
        );

        let err = into_result(StatusCode::BAD_GATEWAY, "oops".to_string()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Server Error: Server returned error status 502"
        );
    }
}
