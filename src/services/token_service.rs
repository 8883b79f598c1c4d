use crate::domain::model::{AuthenticationResult, StoredCredentials, StoredToken};
use crate::domain::ports::TokenStorage;
use crate::services::auth_api::AuthApi;
use crate::utils::error::{AuthError, Result};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Default)]
struct Session {
    token: Option<StoredToken>,
    credentials: Option<StoredCredentials>,
    /// 已嘗試從 storage 還原過
    restored: bool,
}

/// OAuth session 管理：記憶體中的 token 為主，storage 為輔
pub struct TokenService {
    auth_api: AuthApi,
    storage: Arc<dyn TokenStorage>,
    session: RwLock<Session>,
    refresh_lock: Mutex<()>,
}

impl TokenService {
    pub fn new(auth_api: AuthApi, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            auth_api,
            storage,
            session: RwLock::new(Session::default()),
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn storage(&self) -> Arc<dyn TokenStorage> {
        Arc::clone(&self.storage)
    }

    pub async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<AuthenticationResult> {
        let credentials = StoredCredentials {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        };
        self.session.write().await.credentials = Some(credentials.clone());

        let result = self.auth_api.authenticate(client_id, client_secret).await?;
        self.store_result(&result).await;

        if let Err(e) = self.storage.save_credentials(&credentials).await {
            tracing::error!("⚠️ Failed to save credentials to storage: {}", e);
        }

        Ok(result)
    }

    /// 目前 session 中的 access token (不檢查是否過期)
    pub async fn current_access_token(&self) -> Option<String> {
        self.current_token().await.map(|token| token.access_token)
    }

    /// 取得可用的 access token；過期時嘗試 refresh，失敗則清除 session
    pub async fn access_token(&self) -> Option<String> {
        let Some(token) = self.current_token().await else {
            tracing::debug!("No token available in session or storage");
            return None;
        };

        if !token.is_expired(Utc::now()) {
            return Some(token.access_token);
        }

        tracing::debug!("⚠️ Token expired, attempting refresh...");
        if token.refresh_token.is_none() {
            tracing::debug!("No refresh token available");
            self.discard_session().await;
            return None;
        }

        match self.refresh_if_current(Some(&token.access_token)).await {
            Ok(access_token) => Some(access_token),
            Err(e) => {
                tracing::error!("❌ Failed to refresh token: {}", e);
                None
            }
        }
    }

    /// 強制 refresh；同時間只會有一個 refresh 請求
    pub async fn refresh_access_token(&self) -> Result<String> {
        self.refresh_if_current(None).await
    }

    /// 伺服器拒絕 `rejected` 後呼叫；若其他請求已換過 token 就直接沿用
    pub async fn refresh_after_unauthorized(&self, rejected: &str) -> Result<String> {
        self.refresh_if_current(Some(rejected)).await
    }

    async fn refresh_if_current(&self, stale: Option<&str>) -> Result<String> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(stale) = stale {
            if let Some(token) = self.current_token().await {
                if token.access_token != stale && !token.is_expired(Utc::now()) {
                    tracing::debug!("🔄 Token already refreshed by a concurrent request");
                    return Ok(token.access_token);
                }
            }
        }

        match self.refresh_locked().await {
            Ok(result) => Ok(result.access_token),
            Err(e) => {
                self.discard_session().await;
                Err(e)
            }
        }
    }

    async fn refresh_locked(&self) -> Result<AuthenticationResult> {
        let (mut credentials, mut refresh_token) = {
            let session = self.session.read().await;
            (
                session.credentials.clone(),
                session.token.as_ref().and_then(|t| t.refresh_token.clone()),
            )
        };

        if credentials.is_none() {
            credentials = self.storage.load_credentials().await.unwrap_or_else(|e| {
                tracing::warn!("⚠️ Failed to load credentials from storage: {}", e);
                None
            });
            if credentials.is_some() {
                tracing::debug!("Restored credentials for token refresh");
                self.session.write().await.credentials = credentials.clone();
            }
        }
        if refresh_token.is_none() {
            refresh_token = match self.storage.load_token().await {
                Ok(token) => token.and_then(|t| t.refresh_token),
                Err(e) => {
                    tracing::warn!("⚠️ Failed to load token from storage: {}", e);
                    None
                }
            };
        }

        let credentials = credentials.ok_or_else(|| {
            tracing::error!("❌ Missing client credentials for refresh");
            AuthError::MissingCredentials
        })?;
        let refresh_token = refresh_token.ok_or_else(|| {
            tracing::error!("❌ Missing refresh token for refresh");
            AuthError::MissingRefreshToken
        })?;

        let result = self
            .auth_api
            .refresh(
                &credentials.client_id,
                &credentials.client_secret,
                &refresh_token,
            )
            .await?;

        self.store_result(&result).await;
        tracing::info!("✅ Token refreshed successfully");
        Ok(result)
    }

    /// 清空 storage 與記憶體中的 session；讀卡器端的狀態由 `TtpService::clear_token_cache` 處理
    pub async fn clear(&self) -> Result<()> {
        {
            let mut session = self.session.write().await;
            session.token = None;
            session.restored = true;
        }
        self.storage.clear().await
    }

    async fn current_token(&self) -> Option<StoredToken> {
        {
            let session = self.session.read().await;
            if session.token.is_some() || session.restored {
                return session.token.clone();
            }
        }

        let mut session = self.session.write().await;
        if !session.restored {
            session.restored = true;
            match self.storage.load_token().await {
                Ok(Some(token)) => {
                    tracing::debug!("Restored token from storage (expires: {})", token.expires_at);
                    session.token = Some(token);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("⚠️ Failed to restore token from storage: {}", e),
            }
        }
        session.token.clone()
    }

    async fn store_result(&self, result: &AuthenticationResult) {
        let now = Utc::now();
        {
            let mut session = self.session.write().await;
            session.token = Some(StoredToken::from_result(result, now));
            session.restored = true;
        }

        if let Err(e) = self.storage.save_token(result, now).await {
            tracing::error!("⚠️ Failed to save authentication result to storage: {}", e);
        }
    }

    async fn discard_session(&self) {
        self.session.write().await.token = None;
        if let Err(e) = self.storage.clear().await {
            tracing::warn!("⚠️ Failed to clear token storage: {}", e);
        }
    }
}
