use crate::adapters::{FileTokenStorage, InMemoryTokenStorage};
use crate::config::environment::{Environment, EnvironmentSettings};
use crate::config::toml_config::SdkConfig;
use crate::core::ttp::AriseMobileTtp;
use crate::domain::model::{
    ApiPermissionsResponse, AuthenticationResult, AuthorizationRequest, AuthorizationResponse,
    CalculateAmountRequest, CalculateAmountResponse, DeviceInfo, DevicesResponse, PaymentSettings,
    RefundRequest, TransactionDetails, TransactionFilters, TransactionResponse, TransactionsPage,
};
use crate::domain::ports::{TapToPayReader, TokenStorage};
use crate::services::{
    ApiClient, AuthApi, DevicesService, SettingsService, TokenService, TransactionsService,
    TtpService,
};
use crate::utils::device_identifier::{self, DeviceIdentifier};
use crate::utils::error::{Result, TtpError};
use crate::utils::logger::{self, LogLevel};
use crate::utils::validation::{validate_required_field, Validate};
use reqwest::Client;
use std::sync::Arc;

/// ARISE 付款 SDK 的單一入口
pub struct AriseMobileSdk {
    config: SdkConfig,
    environment_settings: EnvironmentSettings,
    tokens: Arc<TokenService>,
    transactions: TransactionsService,
    devices: DevicesService,
    settings: SettingsService,
    ttp_service: Arc<TtpService>,
    ttp: AriseMobileTtp,
    device_id: Arc<DeviceIdentifier>,
}

pub struct AriseMobileSdkBuilder {
    config: SdkConfig,
    reader: Option<Arc<dyn TapToPayReader>>,
    storage: Option<Arc<dyn TokenStorage>>,
    http_client: Option<Client>,
}

impl AriseMobileSdkBuilder {
    /// 主機端的讀卡器實作；未提供時 Tap to Pay 功能回傳 `SdkNotInitialized`
    pub fn reader(mut self, reader: Arc<dyn TapToPayReader>) -> Self {
        self.reader = Some(reader);
        self
    }

    /// 覆寫 token storage；預設依配置使用檔案或記憶體
    pub fn storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<AriseMobileSdk> {
        self.config.validate()?;

        if let Some(level) = self.config.log_level() {
            logger::set_log_level(level);
        }

        let environment_settings = self.config.environment_settings();
        let client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.config.request_timeout())
                .build()?,
        };

        let storage: Arc<dyn TokenStorage> = match (self.storage, self.config.token_path()) {
            (Some(storage), _) => storage,
            (None, Some(path)) => Arc::new(FileTokenStorage::new(path)),
            (None, None) => Arc::new(InMemoryTokenStorage::new()),
        };

        // 裝置 ID 只在這裡讀寫檔案一次
        let device_id = Arc::new(match self.config.fixed_device_id() {
            Some(id) => DeviceIdentifier::fixed(id),
            None => DeviceIdentifier::resolve(self.config.device_id_path()),
        });

        let auth_api = AuthApi::new(client.clone(), &environment_settings.auth_base_url);
        let tokens = Arc::new(TokenService::new(auth_api, Arc::clone(&storage)));
        let api = ApiClient::new(client, &environment_settings.api_base_url, Arc::clone(&tokens));

        let transactions = TransactionsService::new(api.clone());
        let devices = DevicesService::new(api.clone());
        let settings = SettingsService::new(api, self.config.country_code().map(str::to_string));

        let ttp_service = Arc::new(TtpService::new(
            self.reader,
            devices.clone(),
            settings.clone(),
            storage,
            Arc::clone(&device_id),
            environment_settings.terminal_profile_id.clone(),
        ));
        let ttp = AriseMobileTtp::new(Arc::clone(&ttp_service));

        tracing::debug!(
            "AriseMobileSdk initialized for environment: {} ({})",
            self.config.environment(),
            environment_settings.api_base_url
        );

        Ok(AriseMobileSdk {
            config: self.config,
            environment_settings,
            tokens,
            transactions,
            devices,
            settings,
            ttp_service,
            ttp,
            device_id,
        })
    }
}

impl AriseMobileSdk {
    pub fn builder(config: SdkConfig) -> AriseMobileSdkBuilder {
        AriseMobileSdkBuilder {
            config,
            reader: None,
            storage: None,
            http_client: None,
        }
    }

    pub fn new(config: SdkConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    pub fn environment(&self) -> Environment {
        self.config.environment()
    }

    pub fn environment_settings(&self) -> &EnvironmentSettings {
        &self.environment_settings
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// 讀卡器 SDK 版本
    pub fn reader_version(&self) -> Result<String> {
        let version = self
            .ttp_service
            .reader_version()
            .ok_or(TtpError::SdkNotInitialized)?;
        tracing::info!("Tap to Pay SDK version: {}", version);
        Ok(version)
    }

    pub fn device_id(&self) -> &str {
        self.device_id.get()
    }

    pub fn ttp(&self) -> &AriseMobileTtp {
        &self.ttp
    }

    /// 調整日誌等級；debug 以上同時開啟讀卡器效能日誌
    pub fn set_log_level(&self, level: LogLevel) {
        logger::set_log_level(level);
        if level.is_detailed() {
            self.ttp_service.set_performance_logging(true);
            tracing::debug!("Card reader performance logs enabled");
        }
    }

    pub fn log_level(&self) -> LogLevel {
        logger::log_level()
    }

    /// 取得 token 後在背景登記裝置 (失敗只記錄)
    pub async fn authenticate(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<AuthenticationResult> {
        let result = self.tokens.authenticate(client_id, client_secret).await?;

        let devices = self.devices.clone();
        let device_id = self.device_id.get().to_string();
        tokio::spawn(async move {
            let device_name = device_identifier::device_name();
            if let Err(e) = devices.register(&device_id, &device_name).await {
                tracing::warn!("⚠️ Device registration failed (non-critical): {}", e);
            }
        });

        Ok(result)
    }

    /// 使用配置檔中的 client 憑證登入
    pub async fn authenticate_with_config(&self) -> Result<AuthenticationResult> {
        let credentials = validate_required_field("credentials", &self.config.credentials)?;
        self.authenticate(&credentials.client_id, &credentials.client_secret)
            .await
    }

    pub async fn get_access_token(&self) -> Option<String> {
        self.tokens.access_token().await
    }

    pub async fn refresh_access_token(&self) -> Result<String> {
        self.tokens.refresh_access_token().await
    }

    /// 清除 token、憑證、TTP JWT 與 session
    pub async fn clear_stored_token(&self) -> Result<()> {
        self.ttp_service.clear_token_cache().await;
        self.tokens.clear().await
    }

    pub async fn get_transactions(
        &self,
        filters: Option<TransactionFilters>,
    ) -> Result<TransactionsPage> {
        self.transactions.list(filters).await
    }

    pub async fn get_transaction_details(&self, transaction_id: &str) -> Result<TransactionDetails> {
        self.transactions.details(transaction_id).await
    }

    pub async fn submit_auth_transaction(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<AuthorizationResponse> {
        self.transactions.authorize(request).await
    }

    pub async fn submit_sale_transaction(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<AuthorizationResponse> {
        self.transactions.sale(request).await
    }

    pub async fn capture_transaction(
        &self,
        transaction_id: &str,
        amount: f64,
    ) -> Result<TransactionResponse> {
        self.transactions.capture(transaction_id, amount).await
    }

    pub async fn void_transaction(&self, transaction_id: &str) -> Result<TransactionResponse> {
        self.transactions.void(transaction_id).await
    }

    pub async fn refund_transaction(&self, request: &RefundRequest) -> Result<TransactionResponse> {
        self.transactions.refund(request).await
    }

    pub async fn calculate_amount(
        &self,
        request: &CalculateAmountRequest,
    ) -> Result<CalculateAmountResponse> {
        self.transactions.calculate_amount(request).await
    }

    pub async fn get_payment_settings(&self) -> Result<PaymentSettings> {
        self.settings.payment_settings().await
    }

    pub async fn get_permissions(&self) -> Result<ApiPermissionsResponse> {
        self.settings.permissions().await
    }

    pub async fn get_devices(&self) -> Result<DevicesResponse> {
        self.devices.list().await
    }

    pub async fn get_device_info(&self, device_id: &str) -> Result<DeviceInfo> {
        self.devices.info(device_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SdkError;

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = SdkConfig::new(Environment::Uat).with_api_base_url("not a url");
        assert!(AriseMobileSdk::new(config).is_err());
    }

    #[test]
    fn test_build_with_defaults() {
        let sdk = AriseMobileSdk::new(SdkConfig::new(Environment::Uat).with_device_id("ABC")).unwrap();
        assert_eq!(sdk.environment(), Environment::Uat);
        assert_eq!(
            sdk.environment_settings().api_base_url,
            "https://api.uat.arise.risewithaurora.com"
        );
        assert_eq!(sdk.device_id(), "abc");
        assert!(sdk.reader_version().is_err());
        assert!(!sdk.ttp().check_compatibility().is_compatible);
    }

    #[tokio::test]
    async fn test_authenticate_with_config_requires_credentials() {
        let sdk = AriseMobileSdk::new(SdkConfig::new(Environment::Uat)).unwrap();
        let err = sdk.authenticate_with_config().await.unwrap_err();
        assert!(matches!(err, SdkError::MissingConfigError { .. }));
        assert!(sdk.get_access_token().await.is_none());
    }
}
