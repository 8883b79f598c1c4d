use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// SDK 對外的 Tap to Pay 模型
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TtpEvent {
    Reader(TtpReaderEvent),
    Custom(TtpCustomEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TtpReaderEvent {
    UpdateProgress(i32),
    NotReady,
    ReadyForTap,
    CardDetected,
    RemoveCard,
    ReadCompleted,
    ReadRetry,
    ReadCancelled,
    PinEntryRequested,
    PinEntryCompleted,
    UserInterfaceDismissed,
    ReadNotCompleted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TtpCustomEvent {
    Preparing,
    Ready,
    ReaderNotReady(String),
    CardDetected,
    CardReadSuccess,
    CardReadFailure,
    Authorizing,
    Approved,
    Declined,
    ErrorOccurred,
    InProgress,
    UpdateReaderProgress(i32),
    UnknownEvent(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TtpTransactionStatus {
    Approved,
    Declined,
    Failed,
}

impl fmt::Display for TtpTransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TtpTransactionStatus::Approved => "approved",
            TtpTransactionStatus::Declined => "declined",
            TtpTransactionStatus::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtpCvmData {
    pub tag: Option<String>,
    pub value: Option<String>,
}

/// 讀卡交易結果 (由 `mappers::ttp::to_transaction_result` 正規化)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtpTransactionResult {
    pub transaction_id: Option<String>,
    pub transaction_outcome: Option<String>,
    pub status: TtpTransactionStatus,
    pub order_id: Option<String>,
    pub authorized_amount: Option<String>,
    pub authorization_code: Option<String>,
    pub authorisation_response_code: Option<String>,
    pub authorized_date: Option<String>,
    pub authorized_date_format: Option<String>,
    pub card_brand_name: Option<String>,
    pub masked_card_number: Option<String>,
    pub external_reference_id: Option<String>,
    pub application_identifier: Option<String>,
    pub application_preferred_name: Option<String>,
    pub application_cryptogram: Option<String>,
    pub application_transaction_counter: Option<String>,
    pub terminal_verification_results: Option<String>,
    pub issuer_application_data: Option<String>,
    pub application_pan_sequence_number: Option<String>,
    pub partner_data_map: Option<HashMap<String, String>>,
    pub cvm_tags: Option<Vec<TtpCvmData>>,
    pub cvm_action: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TtpStatus {
    Active,
    Inactive,
}

impl fmt::Display for TtpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TtpStatus::Active => f.write_str("Active"),
            TtpStatus::Inactive => f.write_str("Inactive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceModelCheck {
    pub is_compatible: bool,
    pub model_identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsVersionCheck {
    pub is_compatible: bool,
    pub version: String,
    pub minimum_required_version: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationPermissionStatus {
    Granted,
    Denied,
    #[default]
    Undetermined,
}

impl fmt::Display for LocationPermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationPermissionStatus::Granted => f.write_str("granted"),
            LocationPermissionStatus::Denied => f.write_str("denied"),
            LocationPermissionStatus::Undetermined => f.write_str("undetermined"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapToPayEntitlementStatus {
    Available,
    #[default]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtpCompatibilityResult {
    pub is_compatible: bool,
    pub device_model_check: DeviceModelCheck,
    pub os_version_check: OsVersionCheck,
    pub location_permission: LocationPermissionStatus,
    pub tap_to_pay_entitlement: TapToPayEntitlementStatus,
    pub incompatibility_reasons: Vec<String>,
}

// ---------------------------------------------------------------------------
// 讀卡器 port 使用的平台型別
// ---------------------------------------------------------------------------

/// 主機平台回報的裝置資訊
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// 例如 `iPhone14,2`
    pub model_identifier: String,
    /// 例如 `18.1.0`
    pub os_version: String,
    pub location_permission: LocationPermissionStatus,
    pub entitlement: TapToPayEntitlementStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    pub banner_name: String,
    pub category_code: String,
    pub terminal_profile_id: String,
    pub currency_code: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderTransactionRequest {
    pub amount: f64,
    pub currency_code: String,
    pub tip: Option<String>,
    pub discount: Option<String>,
    pub sales_tax_amount: Option<String>,
    pub federal_tax_amount: Option<String>,
    pub sub_total: Option<String>,
    pub order_id: Option<String>,
    pub custom_data: Option<HashMap<String, String>>,
}

impl ReaderTransactionRequest {
    pub fn new(amount: f64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
            tip: None,
            discount: None,
            sales_tax_amount: None,
            federal_tax_amount: None,
            sub_total: None,
            order_id: None,
            custom_data: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformReaderEvent {
    UpdateProgress(i32),
    NotReady,
    ReadyForTap,
    CardDetected,
    RemoveCard,
    ReadCompleted,
    ReadRetry,
    ReadCancelled,
    PinEntryRequested,
    PinEntryCompleted,
    UserInterfaceDismissed,
    ReadNotCompleted,
    Other,
}

/// 讀卡器 SDK 的原始事件；custom 事件以名稱辨識
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    Reader(PlatformReaderEvent),
    Custom {
        name: String,
        message: Option<String>,
        progress: Option<i32>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCvmTag {
    pub tag: Option<String>,
    pub value: Option<String>,
}

/// 讀卡器 SDK 回傳的原始交易
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformTransaction {
    pub transaction_id: Option<String>,
    pub transaction_outcome: Option<String>,
    pub order_id: Option<String>,
    pub authorized_amount: Option<String>,
    pub authorization_code: Option<String>,
    pub authorisation_response_code: Option<String>,
    pub authorized_date: Option<String>,
    pub authorized_date_format: Option<String>,
    pub card_brand_name: Option<String>,
    pub masked_card_number: Option<String>,
    pub external_reference_id: Option<String>,
    pub application_identifier: Option<String>,
    pub application_preferred_name: Option<String>,
    pub application_cryptogram: Option<String>,
    pub application_transaction_counter: Option<String>,
    pub terminal_verification_results: Option<String>,
    pub issuer_application_data: Option<String>,
    pub application_pan_sequence_number: Option<String>,
    pub partner_data_map: Option<HashMap<String, String>>,
    pub cvm_tags: Option<Vec<PlatformCvmTag>>,
    pub cvm_action: Option<String>,
}
