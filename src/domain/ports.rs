use crate::domain::model::{
    AuthenticationResult, DeviceProfile, Merchant, PlatformEvent, PlatformTransaction,
    ReaderTransactionRequest, StoredCredentials, StoredToken, StoredTtpJwt,
};
use crate::utils::error::{ReaderError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;

/// 持久化 OAuth token、client 憑證與 TTP JWT
#[async_trait]
pub trait TokenStorage: Send + Sync {
    async fn save_token(&self, result: &AuthenticationResult, now: DateTime<Utc>) -> Result<()>;
    async fn load_token(&self) -> Result<Option<StoredToken>>;
    /// 清除 token、憑證與 TTP JWT
    async fn clear(&self) -> Result<()>;

    async fn save_credentials(&self, credentials: &StoredCredentials) -> Result<()>;
    async fn load_credentials(&self) -> Result<Option<StoredCredentials>>;

    async fn save_ttp_jwt(&self, jwt: &StoredTtpJwt) -> Result<()>;
    async fn load_ttp_jwt(&self) -> Result<Option<StoredTtpJwt>>;
    async fn clear_ttp_jwt(&self) -> Result<()>;
}

pub type ReaderResult<T> = std::result::Result<T, ReaderError>;

/// 主機端提供的 Tap to Pay 讀卡器 SDK
///
/// 所有失敗都以 `ReaderError` 回報；帶 code 的錯誤會原樣轉進 `TtpError`。
#[async_trait]
pub trait TapToPayReader: Send + Sync {
    fn version(&self) -> String;

    /// Model / OS / permission facts used by the compatibility check.
    fn device_profile(&self) -> DeviceProfile;

    async fn is_account_linked(&self) -> ReaderResult<bool>;

    async fn configure(&self, token: &str, merchant: &Merchant) -> ReaderResult<()>;

    /// Presents the platform terms and conditions.
    async fn enable_tap_to_pay(&self) -> ReaderResult<()>;

    async fn activate_reader(&self) -> ReaderResult<()>;

    async fn resume(&self, token: &str) -> ReaderResult<()>;

    async fn perform_transaction(
        &self,
        request: ReaderTransactionRequest,
    ) -> ReaderResult<PlatformTransaction>;

    async fn abort_transaction(&self) -> ReaderResult<bool>;

    /// 每次呼叫都回傳獨立的事件串流
    fn events(&self) -> BoxStream<'static, PlatformEvent>;

    fn enable_performance_logging(&self, enabled: bool);

    fn clear(&self);
}
