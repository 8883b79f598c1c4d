use crate::domain::model::{
    Amount, CalculateAmountResponse, DeviceModelCheck, DeviceProfile, LocationPermissionStatus,
    Merchant, OsVersionCheck, PaymentSettings, ReaderTransactionRequest, StoredTtpJwt,
    TapToPayEntitlementStatus, TtpCompatibilityResult, TtpEvent, TtpStatus, TtpTransactionResult,
};
use crate::domain::ports::TapToPayReader;
use crate::domain::ports::TokenStorage;
use crate::mappers::ttp;
use crate::services::devices::DevicesService;
use crate::services::settings::SettingsService;
use crate::utils::device_identifier::DeviceIdentifier;
use crate::utils::error::{ReaderError, Result, TtpError};
use chrono::Utc;
use futures::stream::{BoxStream, StreamExt};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

const MIN_IPHONE_MAJOR: u32 = 11;
const MIN_OS_MAJOR: u32 = 18;
const MIN_OS_VERSION: &str = "18.0";
const EVENT_BUFFER: usize = 64;

const MISSING_MERCHANT_CONFIG: &str = "Missing required merchant configuration in payment settings";
const MISSING_CURRENCY: &str = "Currency code not found in payment settings";
const SURCHARGE_REQUIRES_CALCULATION: &str = "This merchant has Zero Cost Processing (ZCP) option set to Surcharge. Please use the CalculateAmount method first, get calculation result and pass it to the advanced PerformTransaction method.";

/// Tap to Pay 流程：相容性檢查、啟用、準備、交易
pub struct TtpService {
    reader: Option<Arc<dyn TapToPayReader>>,
    devices: DevicesService,
    settings: SettingsService,
    storage: Arc<dyn TokenStorage>,
    device_id: Arc<DeviceIdentifier>,
    terminal_profile_id: String,
}

impl TtpService {
    pub fn new(
        reader: Option<Arc<dyn TapToPayReader>>,
        devices: DevicesService,
        settings: SettingsService,
        storage: Arc<dyn TokenStorage>,
        device_id: Arc<DeviceIdentifier>,
        terminal_profile_id: impl Into<String>,
    ) -> Self {
        Self {
            reader,
            devices,
            settings,
            storage,
            device_id,
            terminal_profile_id: terminal_profile_id.into(),
        }
    }

    fn reader(&self) -> Result<&Arc<dyn TapToPayReader>> {
        self.reader
            .as_ref()
            .ok_or_else(|| TtpError::SdkNotInitialized.into())
    }

    pub fn reader_version(&self) -> Option<String> {
        self.reader.as_ref().map(|reader| reader.version())
    }

    pub fn set_performance_logging(&self, enabled: bool) {
        if let Some(reader) = &self.reader {
            reader.enable_performance_logging(enabled);
        }
    }

    /// 未提供讀卡器時以空白裝置資訊檢查 (必定不相容)
    pub fn check_compatibility(&self) -> TtpCompatibilityResult {
        let profile = self
            .reader
            .as_ref()
            .map(|reader| reader.device_profile())
            .unwrap_or_default();
        evaluate_compatibility(&profile)
    }

    fn ensure_compatible(&self) -> Result<()> {
        let compatibility = self.check_compatibility();
        if compatibility.is_compatible {
            return Ok(());
        }
        tracing::error!(
            "❌ Device is not compatible with Tap to Pay: {}",
            compatibility.incompatibility_reasons.join("; ")
        );
        Err(TtpError::NotCompatible(compatibility.incompatibility_reasons).into())
    }

    pub async fn get_status(&self) -> Result<TtpStatus> {
        let device_id = self.device_id.get();
        tracing::debug!("Fetching TTP status for device: {}", device_id);
        let info = self.devices.info(&device_id).await?;
        Ok(if info.tap_to_pay_enabled {
            TtpStatus::Active
        } else {
            TtpStatus::Inactive
        })
    }

    async fn ensure_active(&self) -> Result<()> {
        let status = self.get_status().await?;
        if status != TtpStatus::Active {
            return Err(TtpError::NotActive(format!(
                "Tap To Pay is not activated. Current status: {}",
                status
            ))
            .into());
        }
        Ok(())
    }

    /// 讀卡器 JWT；storage 中仍有效 (剩餘超過 5 分鐘) 就沿用
    pub async fn get_token(&self) -> Result<String> {
        match self.storage.load_ttp_jwt().await {
            Ok(Some(jwt)) if jwt.is_usable(Utc::now()) => {
                tracing::debug!("Using stored TTP JWT token (expires at: {})", jwt.expires_at);
                return Ok(jwt.token);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("⚠️ Failed to load TTP JWT token from storage: {}", e),
        }

        let jwt: StoredTtpJwt = self.devices.tap_to_pay_jwt(&self.device_id.get()).await?;
        match self.storage.save_ttp_jwt(&jwt).await {
            Ok(()) => tracing::info!(
                "✅ TTP JWT token generated and saved (expires at: {})",
                jwt.expires_at
            ),
            Err(e) => tracing::warn!("⚠️ Failed to save TTP JWT token to storage: {}", e),
        }
        Ok(jwt.token)
    }

    pub async fn clear_token_cache(&self) {
        if let Err(e) = self.storage.clear_ttp_jwt().await {
            tracing::warn!("⚠️ Failed to clear TTP JWT token: {}", e);
        }
        if let Some(reader) = &self.reader {
            reader.clear();
        }
        tracing::debug!("TTP JWT token cleared from storage");
    }

    async fn merchant(&self) -> Result<Merchant> {
        let settings = self.settings.payment_settings().await?;
        merchant_from_settings(&settings, &self.terminal_profile_id)
    }

    /// 啟用 Tap to Pay；已啟用時直接返回
    pub async fn activate(&self) -> Result<()> {
        tracing::info!("Starting TTP activation...");
        self.ensure_compatible()?;

        if self.get_status().await? == TtpStatus::Active {
            tracing::info!("TTP is already active");
            return Ok(());
        }

        let reader = self.reader()?;
        let token = self.get_token().await?;
        let merchant = self.merchant().await?;

        reader
            .configure(&token, &merchant)
            .await
            .map_err(activation_failed)?;
        tracing::debug!("Reader configured for merchant: {}", merchant.banner_name);

        if !reader.is_account_linked().await.map_err(activation_failed)? {
            tracing::info!("Platform T&C not accepted, presenting terms...");
            reader.enable_tap_to_pay().await.map_err(activation_failed)?;
            tracing::info!("✅ Platform T&C accepted");
        }

        tracing::info!("Activating reader...");
        reader.activate_reader().await.map_err(activation_failed)?;
        tracing::info!("✅ Reader activated");

        self.devices
            .activate_tap_to_pay(&self.device_id.get())
            .await
            .map_err(|e| {
                tracing::error!("❌ TTP activation failed: {}", e);
                TtpError::ActivationFailed {
                    message: e.to_string(),
                    code: None,
                }
            })?;
        tracing::info!("✅ Device Tap to Pay status updated in ARISE API");
        Ok(())
    }

    /// 已啟用的裝置在每次開啟時呼叫，重新設定讀卡器
    pub async fn prepare(&self) -> Result<()> {
        tracing::info!("Starting TTP prepare...");
        self.ensure_compatible()?;
        self.ensure_active().await?;

        let reader = self.reader()?;
        let merchant = self.merchant().await?;
        let token = self.get_token().await.map_err(|e| TtpError::ActivationFailed {
            message: e.to_string(),
            code: None,
        })?;

        reader
            .configure(&token, &merchant)
            .await
            .map_err(activation_failed)?;

        if !reader.is_account_linked().await.map_err(activation_failed)? {
            tracing::error!("❌ Platform T&C not accepted");
            return Err(TtpError::NotActive("Apple T&C not accepted".to_string()).into());
        }

        tracing::info!("Activating reader...");
        reader.activate_reader().await.map_err(activation_failed)?;
        tracing::info!("✅ TTP prepared successfully");
        Ok(())
    }

    /// 回到前景時喚醒讀卡器並更新 JWT
    pub async fn resume(&self) -> Result<()> {
        let reader = self.reader()?;
        let token = self.get_token().await?;

        reader.resume(&token).await.map_err(|e| match e.code {
            Some(code) => {
                tracing::error!("❌ TTP resume failed: {}. Error code: {}", e.message, code);
                TtpError::ActivationFailed {
                    message: e.message,
                    code: Some(code),
                }
            }
            None => {
                tracing::error!("❌ Failed to resume TTP: {}", e.message);
                TtpError::configuration(format!("Failed to resume reader: {}", e.message))
            }
        })?;
        tracing::info!("✅ TTP resumed successfully");
        Ok(())
    }

    /// 以單一金額交易；商家設定為 Surcharge 時必須改用計算後的版本
    pub async fn perform_transaction(&self, amount: f64) -> Result<TtpTransactionResult> {
        tracing::info!("Starting simple TTP transaction for amount: {}", amount);
        let (reader, settings) = self.ready_for_transaction().await?;
        let currency_code = require_currency(&settings)?;

        if settings.is_surcharge_zcp() {
            tracing::warn!(
                "⚠️ ZCP Surcharge is enabled for this merchant. Simple transaction method cannot be used."
            );
            return Err(TtpError::transaction(SURCHARGE_REQUIRES_CALCULATION).into());
        }

        let request = ReaderTransactionRequest::new(amount, currency_code);
        self.run_transaction(reader, request).await
    }

    /// 以 calculate-amount 的結果交易，依卡別挑選金額
    pub async fn perform_calculated_transaction(
        &self,
        calculation: &CalculateAmountResponse,
        is_debit_card: bool,
    ) -> Result<TtpTransactionResult> {
        tracing::info!(
            "Starting advanced TTP transaction with calculation result, isDebitCard: {}",
            is_debit_card
        );
        let (reader, settings) = self.ready_for_transaction().await?;
        let currency_code = require_currency(&settings)?;

        let request = calculated_request(calculation, is_debit_card, currency_code)?;
        tracing::debug!("Custom data: {:?}", request.custom_data);
        self.run_transaction(reader, request).await
    }

    async fn ready_for_transaction(&self) -> Result<(&Arc<dyn TapToPayReader>, PaymentSettings)> {
        self.resume().await?;
        self.ensure_active().await?;
        let reader = self.reader()?;
        let settings = self.settings.payment_settings().await?;
        Ok((reader, settings))
    }

    async fn run_transaction(
        &self,
        reader: &Arc<dyn TapToPayReader>,
        request: ReaderTransactionRequest,
    ) -> Result<TtpTransactionResult> {
        tracing::debug!(
            "Initiating reader transaction with amount: {} {}",
            request.amount,
            request.currency_code
        );
        let transaction = reader.perform_transaction(request).await.map_err(|e| {
            tracing::error!("❌ TTP transaction failed: {}", e.message);
            TtpError::TransactionFailed {
                message: e.message,
                code: e.code,
            }
        })?;

        let result = ttp::to_transaction_result(&transaction);
        tracing::info!("✅ TTP transaction completed: {}", result.status);
        Ok(result)
    }

    /// 只能在讀卡開始前取消
    pub async fn abort_transaction(&self) -> Result<bool> {
        tracing::info!("Attempting to abort TTP transaction...");
        let reader = self.reader().map_err(|e| {
            tracing::warn!("⚠️ Card reader not initialized");
            e
        })?;

        let aborted = reader.abort_transaction().await.map_err(|e| {
            tracing::error!("❌ Failed to abort transaction: {}", e.message);
            match e.code {
                Some(code) => TtpError::FailedToAbortTransaction {
                    message: format!("Failed to abort transaction: {}", e.message),
                    code: Some(code),
                },
                None => TtpError::FailedToAbortTransaction {
                    message: format!("Error occurred: {}", e.message),
                    code: None,
                },
            }
        })?;
        tracing::info!("✅ Abort requested, reader returned: {}", aborted);
        Ok(aborted)
    }

    /// 讀卡器事件串流；每次呼叫回傳獨立的串流
    pub fn events(&self) -> Result<BoxStream<'static, TtpEvent>> {
        let reader = self.reader()?;
        let mut source = reader.events();
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);

        tokio::spawn(async move {
            tracing::trace!("Starting event stream for client...");
            while let Some(event) = source.next().await {
                tracing::trace!("📢 Reader event received: {:?}", event);
                if tx.send(ttp::to_event(&event)).await.is_err() {
                    break;
                }
            }
            tracing::trace!("Event stream closed");
        });

        Ok(ReceiverStream::new(rx).boxed())
    }
}

fn activation_failed(e: ReaderError) -> TtpError {
    tracing::error!("❌ TTP activation failed: {}", e.message);
    TtpError::ActivationFailed {
        message: e.message,
        code: e.code,
    }
}

fn require_currency(settings: &PaymentSettings) -> Result<String> {
    settings
        .currency_code
        .clone()
        .ok_or_else(|| TtpError::transaction(MISSING_CURRENCY).into())
}

pub fn merchant_from_settings(settings: &PaymentSettings, terminal_profile_id: &str) -> Result<Merchant> {
    match (
        &settings.company_name,
        &settings.mcc_code,
        &settings.currency_code,
        &settings.country_code,
    ) {
        (Some(banner_name), Some(category_code), Some(currency_code), Some(country_code)) => {
            Ok(Merchant {
                banner_name: banner_name.clone(),
                category_code: category_code.clone(),
                terminal_profile_id: terminal_profile_id.to_string(),
                currency_code: currency_code.clone(),
                country_code: country_code.clone(),
            })
        }
        _ => Err(TtpError::configuration(MISSING_MERCHANT_CONFIG).into()),
    }
}

/// 型號 / 系統版本 / 定位權限 / entitlement 四項檢查
pub fn evaluate_compatibility(profile: &DeviceProfile) -> TtpCompatibilityResult {
    let device_model_check = DeviceModelCheck {
        is_compatible: iphone_major(&profile.model_identifier)
            .is_some_and(|major| major >= MIN_IPHONE_MAJOR),
        model_identifier: profile.model_identifier.clone(),
    };
    let os_version_check = OsVersionCheck {
        is_compatible: os_major(&profile.os_version).is_some_and(|major| major >= MIN_OS_MAJOR),
        version: profile.os_version.clone(),
        minimum_required_version: MIN_OS_VERSION.to_string(),
    };

    let mut reasons = Vec::new();
    if !device_model_check.is_compatible {
        reasons.push(format!(
            "Device model is not compatible. Required: iPhone XS or newer. Current: {}",
            device_model_check.model_identifier
        ));
    }
    if !os_version_check.is_compatible {
        reasons.push(format!(
            "iOS version is not compatible. Required: iOS {} or newer. Current: iOS {}",
            os_version_check.minimum_required_version, os_version_check.version
        ));
    }
    if profile.location_permission != LocationPermissionStatus::Granted {
        reasons.push(format!(
            "Location permission is required but not granted. Current status: {}. Please request 'When In Use' location permission in your app before calling TTP methods.",
            profile.location_permission
        ));
    }
    if profile.entitlement != TapToPayEntitlementStatus::Available {
        reasons.push("Tap to Pay entitlement is not available".to_string());
    }

    TtpCompatibilityResult {
        is_compatible: reasons.is_empty(),
        device_model_check,
        os_version_check,
        location_permission: profile.location_permission,
        tap_to_pay_entitlement: profile.entitlement,
        incompatibility_reasons: reasons,
    }
}

/// `iPhone14,2` -> 14
fn iphone_major(model_identifier: &str) -> Option<u32> {
    let numeric = model_identifier.strip_prefix("iPhone")?;
    let (major, _) = numeric.split_once(',')?;
    major.parse().ok()
}

fn os_major(version: &str) -> Option<u32> {
    version.split('.').next()?.trim().parse().ok()
}

fn calculated_request(
    calculation: &CalculateAmountResponse,
    is_debit_card: bool,
    currency_code: String,
) -> Result<ReaderTransactionRequest> {
    let selected: Option<&Amount> = if is_debit_card {
        calculation.debit_card.as_ref()
    } else {
        calculation.credit_card.as_ref()
    };
    let amount = selected.ok_or_else(|| {
        let card_type = if is_debit_card { "Debit" } else { "Credit" };
        TtpError::transaction(format!(
            "{} card amount not available in calculation result",
            card_type
        ))
    })?;

    let mut custom_data = HashMap::new();
    custom_data.insert("isDebitCard".to_string(), is_debit_card.to_string());
    custom_data.insert("baseAmount".to_string(), format!("{:?}", amount.base_amount));
    if amount.surcharge_rate > 0.0 {
        custom_data.insert("surchargeRate".to_string(), format!("{:?}", amount.surcharge_rate));
    }
    custom_data.insert(
        "percentageOffRate".to_string(),
        format!("{:?}", amount.percentage_off_rate),
    );
    custom_data.insert("tipRate".to_string(), format!("{:?}", amount.tip_rate));
    custom_data.insert("tipAmount".to_string(), format!("{:?}", amount.tip_amount));

    let mut request =
        ReaderTransactionRequest::new(round_to_cents(amount.total_amount), currency_code);
    request.tip = (amount.tip_amount > 0.0).then(|| format!("{:.2}", amount.tip_amount));
    request.custom_data = Some(custom_data);
    Ok(request)
}

/// 以十進位四捨五入到分，避免 1.005 這類金額在 f64 中被捨去
fn round_to_cents(value: f64) -> f64 {
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => decimal
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(value),
        Err(_) => (value * 100.0).round() / 100.0,
    }
}
