use serde::{Deserialize, Serialize};

/// 預設國家代碼，可由 SDK 配置覆寫
pub const DEFAULT_COUNTRY_CODE: &str = "USA";

/// ZCP option id meaning "surcharge"
pub const ZCP_SURCHARGE_OPTION_ID: i32 = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOption {
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementBatchTimeSlot {
    pub hours: Option<i32>,
    pub minutes: Option<i32>,
    pub timezone_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentProcessor {
    pub id: Option<String>,
    pub name: Option<String>,
    pub is_default: Option<bool>,
    pub type_id: Option<i32>,
    pub r#type: Option<String>,
    pub settlement_batch_time_slots: Vec<SettlementBatchTimeSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvsOptions {
    pub is_enabled: Option<bool>,
    pub profile_id: Option<i32>,
    pub profile: Option<String>,
}

/// 商家付款設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentSettings {
    pub available_currencies: Vec<NamedOption>,
    pub zero_cost_processing_option_id: Option<i32>,
    pub zero_cost_processing_option: Option<String>,
    pub default_surcharge_rate: Option<f64>,
    pub default_cash_discount_rate: Option<f64>,
    pub default_dual_pricing_rate: Option<f64>,
    pub is_tips_enabled: bool,
    pub default_tips_options: Option<Vec<f64>>,
    pub available_card_types: Vec<NamedOption>,
    pub available_transaction_types: Vec<NamedOption>,
    pub available_payment_processors: Vec<PaymentProcessor>,
    pub avs: Option<AvsOptions>,
    pub is_customer_card_saving_by_terminal_enabled: bool,
    pub company_name: Option<String>,
    pub mcc_code: Option<String>,
    pub currency_code: Option<String>,
    pub currency_id: Option<i32>,
    pub country_code: Option<String>,
}

impl PaymentSettings {
    pub fn is_surcharge_zcp(&self) -> bool {
        self.zero_cost_processing_option_id == Some(ZCP_SURCHARGE_OPTION_ID)
            && self.default_surcharge_rate.is_some()
    }

    pub fn default_processor(&self) -> Option<&PaymentProcessor> {
        self.available_payment_processors
            .iter()
            .find(|p| p.is_default == Some(true))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiPermission {
    PosStartTransaction = 0,
    PosGetTransactions = 1,
    PosGetTransactionDetails = 2,
    PosCancelTransaction = 3,
    PosPrintReceipt = 4,
    GetTerminalList = 5,
    GetTerminalInformation = 6,
    EcommerceAuth = 7,
    EcommerceSale = 8,
    EcommerceCapture = 9,
    EcommerceVoid = 10,
    EcommerceRefund = 11,
    EcommerceRefundWithoutReference = 12,
    AchDebit = 13,
    AchCredit = 14,
    AchVoid = 15,
    AchHold = 16,
    AchUnhold = 17,
    ListTransactions = 18,
    GetTransactionDetails = 19,
    CalculateTransactionAmount = 20,
    SubmitTipAdjustment = 21,
    GetSettlementBatches = 22,
    SubmitBatchForSettlement = 23,
    SendReceiptBySms = 24,
    ListCustomers = 25,
    GetCustomerDetails = 26,
    ManageCustomers = 27,
    HostedInvoices = 28,
    HostedQuickPayment = 29,
    HostedSubscriptions = 30,
    HostedWebComponents = 31,
    HostedWooCommerce = 32,
    FeatureTapToPayOnMobile = 33,
    GeneralPing = 34,
    GeneralStatus = 35,
    GeneralConfigurations = 36,
}

impl ApiPermission {
    pub const ALL: [ApiPermission; 37] = [
        ApiPermission::PosStartTransaction,
        ApiPermission::PosGetTransactions,
        ApiPermission::PosGetTransactionDetails,
        ApiPermission::PosCancelTransaction,
        ApiPermission::PosPrintReceipt,
        ApiPermission::GetTerminalList,
        ApiPermission::GetTerminalInformation,
        ApiPermission::EcommerceAuth,
        ApiPermission::EcommerceSale,
        ApiPermission::EcommerceCapture,
        ApiPermission::EcommerceVoid,
        ApiPermission::EcommerceRefund,
        ApiPermission::EcommerceRefundWithoutReference,
        ApiPermission::AchDebit,
        ApiPermission::AchCredit,
        ApiPermission::AchVoid,
        ApiPermission::AchHold,
        ApiPermission::AchUnhold,
        ApiPermission::ListTransactions,
        ApiPermission::GetTransactionDetails,
        ApiPermission::CalculateTransactionAmount,
        ApiPermission::SubmitTipAdjustment,
        ApiPermission::GetSettlementBatches,
        ApiPermission::SubmitBatchForSettlement,
        ApiPermission::SendReceiptBySms,
        ApiPermission::ListCustomers,
        ApiPermission::GetCustomerDetails,
        ApiPermission::ManageCustomers,
        ApiPermission::HostedInvoices,
        ApiPermission::HostedQuickPayment,
        ApiPermission::HostedSubscriptions,
        ApiPermission::HostedWebComponents,
        ApiPermission::HostedWooCommerce,
        ApiPermission::FeatureTapToPayOnMobile,
        ApiPermission::GeneralPing,
        ApiPermission::GeneralStatus,
        ApiPermission::GeneralConfigurations,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPermissionsResponse {
    pub permissions: Vec<ApiPermission>,
}

impl ApiPermissionsResponse {
    pub fn contains(&self, permission: ApiPermission) -> bool {
        self.permissions.contains(&permission)
    }
}
