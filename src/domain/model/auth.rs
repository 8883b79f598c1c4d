use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// OAuth2 token 端點的回應 (snake_case JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResult {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl AuthenticationResult {
    /// 到期時間；負數的 expires_in 視為 0
    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::seconds(self.expires_in.max(0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredToken {
    pub fn from_result(result: &AuthenticationResult, now: DateTime<Utc>) -> Self {
        Self {
            access_token: result.access_token.clone(),
            refresh_token: result.refresh_token.clone(),
            token_type: result.token_type.clone(),
            expires_at: result.expires_at(now),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// 讀卡器用的短效 JWT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTtpJwt {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredTtpJwt {
    /// 剩餘時間低於此秒數就重新索取
    pub const REFRESH_MARGIN_SECS: i64 = 300;

    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - now > Duration::seconds(Self::REFRESH_MARGIN_SECS)
    }
}
