use serde::{Deserialize, Serialize};

/// 卡片資料來源 (wire 值見 `mappers::enums`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardDataSource {
    Internet = 1,
    Swipe = 2,
    Nfc = 3,
    Emv = 4,
    EmvContactless = 5,
    FallbackSwipe = 6,
    Manual = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmvFallbackCondition {
    IccTerminalError = 0,
    NoCandidateList = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmvFallbackLastChipRead {
    Successful = 0,
    Failed = 1,
    NotAChipTransaction = 2,
    Unknown = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTokenType {
    Local = 1,
    Network = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardholderAuthenticationMethod {
    NoCvm = 0,
    Signature = 1,
    OfflinePin = 2,
    OnlinePin = 3,
    OfflinePinAndSignature = 4,
    ConsumerDevice = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvsAction {
    NoMatch = 1,
    PartialMatch = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvsCodeGroup {
    NoMatch = 1,
    PartialMatch = 2,
    Incompatible = 3,
    Unavailable = 4,
    ValidGroup = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvsResult {
    Passed = 1,
    Failed = 2,
}

/// 交易建立管道，用於交易列表篩選
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreateMethodId {
    Portal = 1,
    ApiToken = 2,
    Terminal = 3,
    Invoice = 4,
    QuickPayment = 5,
    WebComponent = 6,
    Subscription = 7,
    MobileApp = 8,
    TapToPay = 9,
}

impl CreateMethodId {
    pub const ALL: [CreateMethodId; 9] = [
        CreateMethodId::Portal,
        CreateMethodId::ApiToken,
        CreateMethodId::Terminal,
        CreateMethodId::Invoice,
        CreateMethodId::QuickPayment,
        CreateMethodId::WebComponent,
        CreateMethodId::Subscription,
        CreateMethodId::MobileApp,
        CreateMethodId::TapToPay,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CreateMethodId::Portal => "Portal",
            CreateMethodId::ApiToken => "API Token",
            CreateMethodId::Terminal => "Terminal",
            CreateMethodId::Invoice => "Invoice",
            CreateMethodId::QuickPayment => "Quick Payment",
            CreateMethodId::WebComponent => "Web Component",
            CreateMethodId::Subscription => "Subscription",
            CreateMethodId::MobileApp => "Mobile App",
            CreateMethodId::TapToPay => "Tap to Pay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Auth,
    Capture,
    Void,
    Refund,
    #[serde(rename = "return")]
    Return,
}

impl TransactionType {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Auth => "auth",
            TransactionType::Capture => "capture",
            TransactionType::Void => "void",
            TransactionType::Refund => "refund",
            TransactionType::Return => "return",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "sale" => Some(TransactionType::Sale),
            "auth" => Some(TransactionType::Auth),
            "capture" => Some(TransactionType::Capture),
            "void" => Some(TransactionType::Void),
            "refund" => Some(TransactionType::Refund),
            "return" => Some(TransactionType::Return),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionType::Sale => "Sale",
            TransactionType::Auth => "Authorization",
            TransactionType::Capture => "Capture",
            TransactionType::Void => "Void",
            TransactionType::Refund => "Refund",
            TransactionType::Return => "Return",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Approved,
    Completed,
    Settled,
    Declined,
    Failed,
    Rejected,
    Cancelled,
    Voided,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 10] = [
        TransactionStatus::Pending,
        TransactionStatus::Processing,
        TransactionStatus::Approved,
        TransactionStatus::Completed,
        TransactionStatus::Settled,
        TransactionStatus::Declined,
        TransactionStatus::Failed,
        TransactionStatus::Rejected,
        TransactionStatus::Cancelled,
        TransactionStatus::Voided,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Processing => "processing",
            TransactionStatus::Approved => "approved",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Settled => "settled",
            TransactionStatus::Declined => "declined",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Rejected => "rejected",
            TransactionStatus::Cancelled => "cancelled",
            TransactionStatus::Voided => "voided",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Processing => "Processing",
            TransactionStatus::Approved => "Approved",
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Settled => "Settled",
            TransactionStatus::Declined => "Declined",
            TransactionStatus::Failed => "Failed",
            TransactionStatus::Rejected => "Rejected",
            TransactionStatus::Cancelled => "Cancelled",
            TransactionStatus::Voided => "Voided",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_coded_enums() {
        assert_eq!(TransactionType::from_code("RETURN"), Some(TransactionType::Return));
        assert_eq!(TransactionType::Auth.display_name(), "Authorization");
        assert_eq!(TransactionType::from_code("chargeback"), None);

        assert_eq!(TransactionStatus::from_code("Voided"), Some(TransactionStatus::Voided));
        assert_eq!(TransactionStatus::from_code("unknown"), None);
        assert_eq!(
            serde_json::to_string(&TransactionType::Return).unwrap(),
            "\"return\""
        );
    }

    #[test]
    fn test_create_method_display_names() {
        assert_eq!(CreateMethodId::ApiToken.display_name(), "API Token");
        assert_eq!(CreateMethodId::TapToPay.display_name(), "Tap to Pay");
        assert_eq!(CreateMethodId::ALL.len(), 9);
    }
}
